use crate::dataset::DataContext;
use crate::models::{ALL_SITES, ALL_SITES_LABEL};
use crate::routes::dashboard::{
    DashboardLayout, DropdownOption, PayloadSlider, SiteDropdown, DASHBOARD_TITLE,
    PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID, SUCCESS_PAYLOAD_SCATTER_CHART_ID, SUCCESS_PIE_CHART_ID,
};

pub const SITE_DROPDOWN_PLACEHOLDER: &str = "Select a Launch Site here";
pub const PAYLOAD_SLIDER_LABEL: &str = "Payload range (Kg):";

/// Declare the dashboard controls for the loaded dataset.
///
/// The dropdown lists "All Sites" first, then every site in dataset order.
/// The slider spans the global payload bounds and starts at the full range.
pub fn build_dashboard_layout(ctx: &DataContext) -> DashboardLayout {
    let mut options = vec![DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(ctx.sites().iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }));

    let bounds = ctx.payload_bounds();

    DashboardLayout {
        title: DASHBOARD_TITLE.to_string(),
        site_dropdown: SiteDropdown {
            id: SITE_DROPDOWN_ID.to_string(),
            options,
            value: ALL_SITES.to_string(),
            placeholder: SITE_DROPDOWN_PLACEHOLDER.to_string(),
            searchable: true,
        },
        payload_slider: PayloadSlider {
            id: PAYLOAD_SLIDER_ID.to_string(),
            label: PAYLOAD_SLIDER_LABEL.to_string(),
            min: bounds.min,
            max: bounds.max,
            value: [bounds.min, bounds.max],
        },
        pie_chart_id: SUCCESS_PIE_CHART_ID.to_string(),
        scatter_chart_id: SUCCESS_PAYLOAD_SCATTER_CHART_ID.to_string(),
    }
}
