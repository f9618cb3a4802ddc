use std::collections::BTreeMap;

use crate::models::{LaunchRecord, Outcome, SiteOutcomeCount};

/// Count launches per (site, outcome).
///
/// Rows come out grouped by site in sorted order; within a site the larger
/// count comes first, with "Successful" winning ties. Outcomes a site never
/// had produce no row at all.
pub fn aggregate(records: &[LaunchRecord]) -> Vec<SiteOutcomeCount> {
    let mut by_site: BTreeMap<&str, BTreeMap<Outcome, usize>> = BTreeMap::new();
    for record in records {
        *by_site
            .entry(record.launch_site.as_str())
            .or_default()
            .entry(record.outcome)
            .or_insert(0) += 1;
    }

    let mut counts = Vec::new();
    for (site, outcomes) in by_site {
        let mut rows: Vec<SiteOutcomeCount> = outcomes
            .into_iter()
            .map(|(outcome, count)| SiteOutcomeCount::new(site, outcome, count))
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then(a.outcome.cmp(&b.outcome)));
        counts.extend(rows);
    }
    counts
}
