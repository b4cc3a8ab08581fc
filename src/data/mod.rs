//! Data module - CSV loading and pure record queries

mod filter;
mod loader;

pub use filter::{
    filter_by_payload, filter_by_site, outcome_counts, success_counts_by_site, PayloadRange,
    SiteSelection, ALL_SITES_LABEL,
};
pub use loader::{LaunchData, LaunchRecord, LoaderError, DEFAULT_DATA_PATH};
