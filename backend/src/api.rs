//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types served by the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::ChartData;
pub use crate::models::ChartSpec;
pub use crate::models::FilterCriteria;
pub use crate::models::LaunchRecord;
pub use crate::models::Outcome;
pub use crate::models::PayloadRange;
pub use crate::models::PieSlice;
pub use crate::models::ScatterPoint;
pub use crate::models::ScatterSeries;
pub use crate::models::SiteOutcomeCount;
pub use crate::models::SiteSelection;
pub use crate::routes::dashboard::DashboardLayout;
pub use crate::routes::dashboard::DropdownOption;
pub use crate::routes::dashboard::PayloadSlider;
pub use crate::routes::dashboard::SiteDropdown;
