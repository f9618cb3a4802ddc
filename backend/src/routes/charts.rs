//! Chart callbacks.
//!
//! Each function is the handler bound to one output region; it receives the
//! current control values and returns a fresh chart spec.

use crate::dataset::DataContext;
use crate::models::{ChartSpec, SiteSelection};
use crate::services::{pie_chart, scatter_chart};

/// Route function name constants
pub const GET_SUCCESS_PIE_CHART: &str = "get_success_pie_chart";
pub const GET_SUCCESS_PAYLOAD_SCATTER_CHART: &str = "get_success_payload_scatter_chart";

/// Output `success-pie-chart`, driven by `site-dropdown`.
pub fn get_success_pie_chart(ctx: &DataContext, site: &SiteSelection) -> ChartSpec {
    pie_chart::build_pie_view(site, ctx.site_outcome_counts())
}

/// Output `success-payload-scatter-chart`, driven by `site-dropdown` and
/// `payload-slider`.
pub fn get_success_payload_scatter_chart(
    ctx: &DataContext,
    site: SiteSelection,
    min: Option<f64>,
    max: Option<f64>,
) -> ChartSpec {
    let criteria = ctx.criteria(site, min, max);
    scatter_chart::build_scatter_view(ctx.records(), &criteria, ctx.payload_bounds())
}
