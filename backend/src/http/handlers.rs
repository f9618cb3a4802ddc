//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! route callbacks and service layer for business logic.

use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    Json,
};

use super::dto::{
    ChartSpec, DashboardLayout, HealthResponse, PieChartQuery, ScatterChartQuery,
    SiteOutcomesResponse, SiteSelection,
};
use super::error::AppError;
use super::state::AppState;
use crate::routes::charts;
use crate::services::dashboard::build_dashboard_layout;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const DASHBOARD_PAGE: &str = include_str!("dashboard.html");

// =============================================================================
// Page + Health Check
// =============================================================================

/// GET /
///
/// Dashboard page. It fetches the layout once and re-requests a chart every
/// time one of its input controls changes.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// GET /health
///
/// Health check endpoint reporting the size of the loaded dataset.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.data.records().len(),
        sites: state.data.sites().len(),
    }))
}

// =============================================================================
// Layout + Aggregates
// =============================================================================

/// GET /v1/layout
///
/// Header, dropdown options and slider bounds for the loaded dataset.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<DashboardLayout> {
    Ok(Json(build_dashboard_layout(&state.data)))
}

/// GET /v1/site-outcomes
///
/// Per-site success/failure counts.
pub async fn get_site_outcomes(
    State(state): State<AppState>,
) -> HandlerResult<SiteOutcomesResponse> {
    let counts = state.data.site_outcome_counts().to_vec();
    let total = counts.iter().map(|c| c.count).sum();

    Ok(Json(SiteOutcomesResponse { counts, total }))
}

// =============================================================================
// Chart Endpoints
// =============================================================================

/// GET /v1/charts/success-pie?site=ALL
///
/// Pie chart for the `success-pie-chart` region.
pub async fn get_success_pie_chart(
    State(state): State<AppState>,
    Query(query): Query<PieChartQuery>,
) -> HandlerResult<ChartSpec> {
    tracing::debug!(site = %query.site, "success pie chart requested");
    if let SiteSelection::Site(site) = &query.site {
        if !state.data.has_site(site) {
            tracing::debug!(site = %site, "unknown launch site, chart will be empty");
        }
    }

    Ok(Json(charts::get_success_pie_chart(&state.data, &query.site)))
}

/// GET /v1/charts/payload-scatter?site=ALL&min=0&max=9600
///
/// Scatter chart for the `success-payload-scatter-chart` region.
pub async fn get_payload_scatter_chart(
    State(state): State<AppState>,
    Query(query): Query<ScatterChartQuery>,
) -> HandlerResult<ChartSpec> {
    tracing::debug!(
        site = %query.site,
        min = ?query.min,
        max = ?query.max,
        "payload scatter chart requested"
    );

    // Filtering walks every record, so keep it off the async workers
    let data = state.data.clone();
    let spec = tokio::task::spawn_blocking(move || {
        charts::get_success_payload_scatter_chart(&data, query.site, query.min, query.max)
    })
    .await?;

    Ok(Json(spec))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
