//! Filter Engine Module
//! Pure queries over the loaded launch records: site and payload-range
//! filtering plus the outcome aggregates behind the pie chart.

use crate::data::LaunchRecord;

/// Label used for the all-sites sentinel wherever it is shown to the user.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Current site selector value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_LABEL,
            SiteSelection::Site(site) => site,
        }
    }
}

/// Inclusive payload-mass interval. The range widgets keep `min <= max`;
/// the filter functions assume it and do not validate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both endpoints.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.min && payload_mass_kg <= self.max
    }
}

/// Restrict to the selected site; identity for `All`.
pub fn filter_by_site<'a>(
    records: impl IntoIterator<Item = &'a LaunchRecord>,
    selection: &SiteSelection,
) -> Vec<&'a LaunchRecord> {
    records
        .into_iter()
        .filter(|record| match selection {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.site == *site,
        })
        .collect()
}

/// Retain records whose payload mass lies within the inclusive range.
pub fn filter_by_payload<'a>(
    records: impl IntoIterator<Item = &'a LaunchRecord>,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .into_iter()
        .filter(|record| range.contains(record.payload_mass_kg))
        .collect()
}

/// Success count per site, grouped in encounter order.
pub fn success_counts_by_site(records: &[LaunchRecord]) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(site, _)| *site == record.site) {
            Some((_, count)) => {
                if record.success {
                    *count += 1;
                }
            }
            None => counts.push((record.site.clone(), u32::from(record.success))),
        }
    }
    counts
}

/// (successes, failures) for one site. A site with no records yields (0, 0).
pub fn outcome_counts(records: &[LaunchRecord], site: &str) -> (u32, u32) {
    let mut successes = 0;
    let mut failures = 0;
    for record in records.iter().filter(|record| record.site == site) {
        if record.success {
            successes += 1;
        } else {
            failures += 1;
        }
    }
    (successes, failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, success: bool) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: "FT".to_string(),
            success,
        }
    }

    /// Two sites: A with 2 successes / 1 failure, B with 0 successes / 3 failures.
    fn two_site_dataset() -> Vec<LaunchRecord> {
        vec![
            record("A", 1000.0, true),
            record("A", 2000.0, false),
            record("B", 3000.0, false),
            record("A", 4000.0, true),
            record("B", 5000.0, false),
            record("B", 6000.0, false),
        ]
    }

    #[test]
    fn outcome_counts_sum_to_site_record_count() {
        let records = two_site_dataset();
        for site in ["A", "B"] {
            let (successes, failures) = outcome_counts(&records, site);
            let site_total = records.iter().filter(|r| r.site == site).count() as u32;
            assert_eq!(successes + failures, site_total);
        }
    }

    #[test]
    fn success_counts_match_dataset_total() {
        let records = two_site_dataset();
        let counts = success_counts_by_site(&records);
        let summed: u32 = counts.iter().map(|(_, count)| count).sum();
        let total = records.iter().filter(|r| r.success).count() as u32;
        assert_eq!(summed, total);
    }

    #[test]
    fn grouped_counts_keep_encounter_order() {
        let counts = success_counts_by_site(&two_site_dataset());
        assert_eq!(counts, vec![("A".to_string(), 2), ("B".to_string(), 0)]);
    }

    #[test]
    fn single_site_counts() {
        let records = two_site_dataset();
        assert_eq!(outcome_counts(&records, "A"), (2, 1));
        assert_eq!(outcome_counts(&records, "B"), (0, 3));
    }

    #[test]
    fn unknown_site_counts_are_zero() {
        assert_eq!(outcome_counts(&two_site_dataset(), "nowhere"), (0, 0));
    }

    #[test]
    fn payload_filter_is_idempotent() {
        let records = two_site_dataset();
        let range = PayloadRange::new(1500.0, 4500.0);
        let once = filter_by_payload(&records, range);
        let twice = filter_by_payload(once.clone(), range);
        assert_eq!(once, twice);
    }

    #[test]
    fn all_sites_full_range_reproduces_dataset() {
        let records = two_site_dataset();
        let subset = filter_by_payload(
            filter_by_site(&records, &SiteSelection::All),
            PayloadRange::new(1000.0, 6000.0),
        );
        assert_eq!(subset.len(), records.len());
    }

    #[test]
    fn range_endpoints_are_inclusive() {
        let records = two_site_dataset();
        let subset = filter_by_payload(&records, PayloadRange::new(2000.0, 5000.0));
        let payloads: Vec<f64> = subset.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, vec![2000.0, 3000.0, 4000.0, 5000.0]);
    }

    #[test]
    fn site_filter_restricts_to_matching_site() {
        let records = two_site_dataset();
        let subset = filter_by_site(&records, &SiteSelection::Site("B".to_string()));
        assert_eq!(subset.len(), 3);
        assert!(subset.iter().all(|r| r.site == "B"));
    }

    #[test]
    fn disjoint_range_yields_empty_subset() {
        let records = two_site_dataset();
        let subset = filter_by_payload(&records, PayloadRange::new(9000.0, 10000.0));
        assert!(subset.is_empty());
    }
}
