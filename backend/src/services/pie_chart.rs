use crate::models::{ChartSpec, PieSlice, SiteOutcomeCount, SiteSelection};

pub const ALL_SITES_PIE_TITLE: &str = "Successful Launches by Launch Site";

/// Build the success pie chart for the selected site.
///
/// With every site selected there is one slice per site holding its
/// successful launches. With one site selected there is one slice per outcome
/// for that site.
pub fn build_pie_view(site: &SiteSelection, aggregates: &[SiteOutcomeCount]) -> ChartSpec {
    log::debug!("Building pie chart for site={}", site);

    match site {
        SiteSelection::All => {
            let slices = aggregates
                .iter()
                .filter(|row| row.outcome.is_success())
                .map(|row| slice(row.launch_site.clone(), row))
                .collect();
            ChartSpec::pie(ALL_SITES_PIE_TITLE, slices)
        }
        SiteSelection::Site(name) => {
            let slices = aggregates
                .iter()
                .filter(|row| row.launch_site == *name)
                .map(|row| slice(row.result.clone(), row))
                .collect();
            ChartSpec::pie(format!("{} Total Launches", name), slices)
        }
    }
}

fn slice(label: String, row: &SiteOutcomeCount) -> PieSlice {
    PieSlice {
        label,
        value: row.count,
        hover: row.hover.clone(),
    }
}
