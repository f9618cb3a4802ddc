//! Data Transfer Objects for the HTTP API.
//!
//! Chart and layout DTOs are re-exported from the api module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{ChartSpec, DashboardLayout, SiteOutcomeCount, SiteSelection};

/// Query parameters for the pie chart endpoint (`site-dropdown`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieChartQuery {
    /// Selected site, `ALL` when omitted
    #[serde(default)]
    pub site: SiteSelection,
}

/// Query parameters for the scatter chart endpoint (`site-dropdown` and
/// `payload-slider`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterChartQuery {
    /// Selected site, `ALL` when omitted
    #[serde(default)]
    pub site: SiteSelection,
    /// Lower payload bound in kg (defaults to the dataset minimum)
    #[serde(default)]
    pub min: Option<f64>,
    /// Upper payload bound in kg (defaults to the dataset maximum)
    #[serde(default)]
    pub max: Option<f64>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
}

/// Aggregate table response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteOutcomesResponse {
    /// One row per (site, outcome) pair present in the dataset
    pub counts: Vec<SiteOutcomeCount>,
    /// Number of launches across all rows
    pub total: usize,
}
