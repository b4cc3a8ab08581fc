//! Launch Record Loader Module
//! Reads the launch-records CSV into an immutable in-memory table using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Default dataset read once at startup.
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_BOOSTER, COL_CLASS];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    #[error("Bad value in column '{column}' at row {row}")]
    BadValue { column: &'static str, row: usize },
    #[error("No data loaded")]
    NoData,
}

/// One row of the launch table. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub booster_category: String,
    /// Outcome class: true = success (1), false = failure (0).
    pub success: bool,
}

impl LaunchRecord {
    /// Outcome class as plotted on the scatter y-axis.
    pub fn class(&self) -> f64 {
        if self.success {
            1.0
        } else {
            0.0
        }
    }
}

/// The loaded launch table plus queries cached at load time.
/// Read-only after construction; lives for the process lifetime.
pub struct LaunchData {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: (f64, f64),
}

impl LaunchData {
    /// Load a launch-records CSV using Polars.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy().to_string();
        let df = LazyCsvReader::new(&path_str)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        for required in REQUIRED_COLUMNS {
            if !columns.iter().any(|c| c == required) {
                return Err(LoaderError::MissingColumn(required.to_string()));
            }
        }

        let sites = df.column(COL_SITE)?.as_materialized_series().clone();
        let boosters = df.column(COL_BOOSTER)?.as_materialized_series().clone();
        let payload_f64 = df.column(COL_PAYLOAD)?.cast(&DataType::Float64)?;
        let payload_ca = payload_f64.f64()?;
        let class_i64 = df.column(COL_CLASS)?.cast(&DataType::Int64)?;
        let class_ca = class_i64.i64()?;

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let site = Self::string_at(&sites, row)
                .ok_or(LoaderError::BadValue { column: COL_SITE, row })?;
            let booster = Self::string_at(&boosters, row).ok_or(LoaderError::BadValue {
                column: COL_BOOSTER,
                row,
            })?;

            let payload_mass_kg = payload_ca.get(row).ok_or(LoaderError::BadValue {
                column: COL_PAYLOAD,
                row,
            })?;
            if !payload_mass_kg.is_finite() || payload_mass_kg < 0.0 {
                return Err(LoaderError::BadValue {
                    column: COL_PAYLOAD,
                    row,
                });
            }

            let success = match class_ca.get(row) {
                Some(0) => false,
                Some(1) => true,
                _ => return Err(LoaderError::BadValue { column: COL_CLASS, row }),
            };

            records.push(LaunchRecord {
                site,
                payload_mass_kg,
                booster_category: booster,
                success,
            });
        }

        if records.is_empty() {
            return Err(LoaderError::NoData);
        }

        log::info!(
            "loaded {} launch records from {}",
            records.len(),
            path.display()
        );
        Ok(Self::from_records(records))
    }

    /// Build the cached view over an in-memory collection.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.site) {
                sites.push(record.site.clone());
            }
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in &records {
            min = min.min(record.payload_mass_kg);
            max = max.max(record.payload_mass_kg);
        }
        let payload_bounds = if min.is_finite() { (min, max) } else { (0.0, 0.0) };

        Self {
            records,
            sites,
            payload_bounds,
        }
    }

    /// All loaded records.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites, in encounter order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Observed (min, max) payload mass across all records.
    pub fn payload_bounds(&self) -> (f64, f64) {
        self.payload_bounds
    }

    fn string_at(series: &Series, row: usize) -> Option<String> {
        let value = series.get(row).ok()?;
        if value.is_null() {
            None
        } else {
            Some(value.to_string().trim_matches('"').to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const HEADER: &str =
        "Flight Number,Launch Site,Payload Mass (kg),Booster Version Category,class\n";

    #[test]
    fn loads_records_and_caches_queries() {
        let csv = format!(
            "{HEADER}\
             1,CCAFS LC-40,500.0,v1.0,0\n\
             2,VAFB SLC-4E,4500.0,FT,1\n\
             3,CCAFS LC-40,2500.0,v1.1,1\n"
        );
        let file = write_csv(&csv);
        let data = LaunchData::load(file.path()).unwrap();

        assert_eq!(data.records().len(), 3);
        let sites: Vec<&str> = data.sites().iter().map(String::as_str).collect();
        assert_eq!(sites, ["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(data.payload_bounds(), (500.0, 4500.0));
        assert!(!data.records()[0].success);
        assert_eq!(data.records()[1].booster_category, "FT");
    }

    #[test]
    fn missing_file_fails() {
        assert!(LaunchData::load("does/not/exist.csv").is_err());
    }

    #[test]
    fn missing_column_fails() {
        let file = write_csv("Launch Site,class\nCCAFS LC-40,1\n");
        match LaunchData::load(file.path()) {
            Err(LoaderError::MissingColumn(col)) => assert_eq!(col, COL_PAYLOAD),
            other => panic!("expected MissingColumn, got {:?}", other.err()),
        }
    }

    #[test]
    fn non_numeric_payload_fails() {
        let csv = format!("{HEADER}1,CCAFS LC-40,not-a-number,v1.0,1\n");
        let file = write_csv(&csv);
        assert!(LaunchData::load(file.path()).is_err());
    }

    #[test]
    fn out_of_domain_class_fails() {
        let csv = format!("{HEADER}1,CCAFS LC-40,500.0,v1.0,2\n");
        let file = write_csv(&csv);
        assert!(matches!(
            LaunchData::load(file.path()),
            Err(LoaderError::BadValue {
                column: COL_CLASS,
                ..
            })
        ));
    }

    #[test]
    fn negative_payload_fails() {
        let csv = format!("{HEADER}1,CCAFS LC-40,-10.0,v1.0,1\n");
        let file = write_csv(&csv);
        assert!(matches!(
            LaunchData::load(file.path()),
            Err(LoaderError::BadValue {
                column: COL_PAYLOAD,
                ..
            })
        ));
    }

    #[test]
    fn empty_table_fails() {
        let file = write_csv(HEADER);
        assert!(matches!(
            LaunchData::load(file.path()),
            Err(LoaderError::NoData)
        ));
    }

    #[test]
    fn bounds_of_empty_collection_default_to_zero() {
        let data = LaunchData::from_records(Vec::new());
        assert_eq!(data.payload_bounds(), (0.0, 0.0));
        assert!(data.sites().is_empty());
    }
}
