use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::loader::load_launch_records;
use crate::models::{FilterCriteria, LaunchRecord, PayloadRange, SiteOutcomeCount, SiteSelection};
use crate::services::aggregation::aggregate;

/// Read-only view of the launch dataset, built once at startup and shared by
/// every request for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct DataContext {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: PayloadRange,
    site_outcome_counts: Vec<SiteOutcomeCount>,
}

impl DataContext {
    /// Build the context from already-loaded records.
    pub fn new(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        let payload_bounds = payload_bounds(&records).ok_or(DatasetError::Empty)?;

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        let site_outcome_counts = aggregate(&records);

        Ok(Self {
            records,
            sites,
            payload_bounds,
            site_outcome_counts,
        })
    }

    /// Load the CSV at `path` and build the context from it.
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let ctx = Self::new(load_launch_records(path)?)?;
        log::info!(
            "Dataset ready: {} sites, payload range [{}, {}] kg",
            ctx.sites.len(),
            ctx.payload_bounds.min,
            ctx.payload_bounds.max
        );
        Ok(ctx)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Global `[min, max]` payload mass over the whole dataset.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    /// Per-site outcome counts, computed once at construction.
    pub fn site_outcome_counts(&self) -> &[SiteOutcomeCount] {
        &self.site_outcome_counts
    }

    /// Build filter criteria from raw control values, normalizing the range
    /// against the dataset bounds.
    pub fn criteria(
        &self,
        site: SiteSelection,
        min: Option<f64>,
        max: Option<f64>,
    ) -> FilterCriteria {
        FilterCriteria::new(
            site,
            PayloadRange::normalized(min, max, self.payload_bounds),
        )
    }
}

fn payload_bounds(records: &[LaunchRecord]) -> Option<PayloadRange> {
    let first = records.first()?.payload_mass_kg;
    let (min, max) = records
        .iter()
        .map(|r| r.payload_mass_kg)
        .fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some(PayloadRange::new(min, max))
}
