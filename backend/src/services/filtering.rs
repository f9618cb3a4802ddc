use crate::models::{FilterCriteria, LaunchRecord, PayloadRange, SiteSelection};

/// Narrow `records` to those matching `criteria`.
///
/// A payload range exactly equal to `global_bounds` is treated as "no payload
/// filter selected", so it applies no payload predicate at all. This mirrors
/// how the range slider reports its untouched default and is kept on purpose.
///
/// An unknown site simply matches nothing.
pub fn filter<'a>(
    records: &'a [LaunchRecord],
    criteria: &FilterCriteria,
    global_bounds: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    let range = criteria.payload_range;
    let range_selected = range != global_bounds;

    records
        .iter()
        .filter(|r| match &criteria.site {
            SiteSelection::All => true,
            SiteSelection::Site(site) => r.launch_site == *site,
        })
        .filter(|r| !range_selected || range.contains(r.payload_mass_kg))
        .collect()
}
