use crate::models::{
    ChartSpec, FilterCriteria, LaunchRecord, PayloadRange, ScatterPoint, ScatterSeries,
};

use super::filtering::filter;

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const CLASS_AXIS_TITLE: &str = "class";

/// Build the payload/outcome scatter chart for the given criteria.
///
/// Points are colored by booster version category; series appear in the
/// order their category is first seen among the filtered records.
pub fn build_scatter_view(
    records: &[LaunchRecord],
    criteria: &FilterCriteria,
    global_bounds: PayloadRange,
) -> ChartSpec {
    let filtered = filter(records, criteria, global_bounds);

    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in filtered {
        let point = ScatterPoint {
            x: record.payload_mass_kg,
            y: record.outcome.class(),
        };
        match series
            .iter_mut()
            .find(|s| s.name == record.booster_version_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                name: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    let title = format!(
        "Correlation between Payload and Success for {}",
        criteria.site.display_name()
    );
    ChartSpec::scatter(title, PAYLOAD_AXIS_TITLE, CLASS_AXIS_TITLE, series)
}
