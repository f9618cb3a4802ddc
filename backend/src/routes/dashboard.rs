use serde::{Deserialize, Serialize};

// =========================================================
// Dashboard layout types
// =========================================================

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Component ids shared between the layout and the page script.
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SUCCESS_PIE_CHART_ID: &str = "success-pie-chart";
pub const SUCCESS_PAYLOAD_SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Launch site dropdown declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

/// Payload range slider declaration. `value` starts as the full range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub value: [f64; 2],
}

/// Everything the page needs to lay out its controls and chart regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: SiteDropdown,
    pub payload_slider: PayloadSlider,
    pub pie_chart_id: String,
    pub scatter_chart_id: String,
}

pub const GET_DASHBOARD_LAYOUT: &str = "get_dashboard_layout";
pub const GET_SITE_OUTCOMES: &str = "get_site_outcomes";
