mod support;

use std::collections::BTreeMap;

use launch_dash::models::{FilterCriteria, LaunchRecord, Outcome, PayloadRange, SiteSelection};
use launch_dash::services::{aggregate, build_pie_view, build_scatter_view, filter};
use proptest::prelude::*;

use support::{fixture_context, fixture_records};

fn record_counts_by_site(records: &[LaunchRecord]) -> BTreeMap<String, usize> {
    let mut totals = BTreeMap::new();
    for r in records {
        *totals.entry(r.launch_site.clone()).or_insert(0) += 1;
    }
    totals
}

#[test]
fn test_counts_sum_to_site_totals() {
    let records = fixture_records();
    let counts = aggregate(&records);

    let mut from_counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in &counts {
        *from_counts.entry(row.launch_site.clone()).or_insert(0) += row.count;
    }
    assert_eq!(from_counts, record_counts_by_site(&records));
}

#[test]
fn test_unfiltered_returns_full_set() {
    let ctx = fixture_context();
    let criteria = FilterCriteria::new(SiteSelection::All, ctx.payload_bounds());
    let filtered = filter(ctx.records(), &criteria, ctx.payload_bounds());

    let expected: Vec<&LaunchRecord> = ctx.records().iter().collect();
    assert_eq!(filtered, expected);
}

#[test]
fn test_site_only_filter() {
    let ctx = fixture_context();
    for site in ctx.sites() {
        let criteria = FilterCriteria::new(SiteSelection::Site(site.clone()), ctx.payload_bounds());
        let filtered = filter(ctx.records(), &criteria, ctx.payload_bounds());
        let expected: Vec<&LaunchRecord> = ctx
            .records()
            .iter()
            .filter(|r| r.launch_site == *site)
            .collect();
        assert_eq!(filtered, expected, "site {site}");
    }
}

#[test]
fn test_narrowed_range_filter() {
    let ctx = fixture_context();
    let range = PayloadRange::new(2500.0, 7000.0);
    let criteria = FilterCriteria::new(SiteSelection::All, range);
    let filtered = filter(ctx.records(), &criteria, ctx.payload_bounds());

    let payloads: Vec<f64> = filtered.iter().map(|r| r.payload_mass_kg).collect();
    assert_eq!(payloads, vec![2500.0, 4200.0, 3100.0, 5300.0, 6100.0, 7000.0]);
}

#[test]
fn test_all_sites_pie_totals() {
    let ctx = fixture_context();
    let spec = build_pie_view(&SiteSelection::All, ctx.site_outcome_counts());
    let slices = spec.slices().unwrap();

    // VAFB never succeeded in the fixture
    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["CCAFS LC-40", "KSC LC-39A"]);

    let total_successes = ctx
        .records()
        .iter()
        .filter(|r| r.outcome == Outcome::Success)
        .count();
    let pie_total: usize = slices.iter().map(|s| s.value).sum();
    assert_eq!(pie_total, total_successes);
}

#[test]
fn test_single_site_pie_three_and_two() {
    let ctx = fixture_context();
    let spec = build_pie_view(
        &SiteSelection::Site("KSC LC-39A".to_string()),
        ctx.site_outcome_counts(),
    );
    let pairs: Vec<(&str, usize)> = spec
        .slices()
        .unwrap()
        .iter()
        .map(|s| (s.label.as_str(), s.value))
        .collect();
    assert_eq!(pairs, vec![("Successful", 3), ("Failed", 2)]);
    assert_eq!(spec.title, "KSC LC-39A Total Launches");
}

#[test]
fn test_scatter_applies_both_predicates() {
    let ctx = fixture_context();
    let criteria = ctx.criteria(
        SiteSelection::Site("KSC LC-39A".to_string()),
        Some(5000.0),
        Some(8000.0),
    );
    let spec = build_scatter_view(ctx.records(), &criteria, ctx.payload_bounds());

    let mut xs: Vec<f64> = spec
        .series()
        .unwrap()
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.x))
        .collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(xs, vec![5300.0, 6100.0, 7000.0]);
}

fn arb_record() -> impl Strategy<Value = LaunchRecord> {
    (
        prop::sample::select(vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E", "CCAFS SLC-40"]),
        0u32..10_000,
        any::<bool>(),
        prop::sample::select(vec!["v1.0", "v1.1", "FT", "B4", "B5"]),
    )
        .prop_map(|(site, payload, success, booster)| {
            let outcome = if success { Outcome::Success } else { Outcome::Failure };
            LaunchRecord::new(site, f64::from(payload), outcome, booster)
        })
}

proptest! {
    #[test]
    fn prop_counts_sum_to_site_totals(records in prop::collection::vec(arb_record(), 0..80)) {
        let counts = aggregate(&records);
        let mut from_counts: BTreeMap<String, usize> = BTreeMap::new();
        for row in &counts {
            prop_assert!(row.count > 0);
            *from_counts.entry(row.launch_site.clone()).or_insert(0) += row.count;
        }
        prop_assert_eq!(from_counts, record_counts_by_site(&records));
    }

    #[test]
    fn prop_filter_matches_both_predicates(
        records in prop::collection::vec(arb_record(), 1..80),
        a in 0u32..10_000,
        b in 0u32..10_000,
        pick in any::<prop::sample::Index>(),
    ) {
        let ctx = launch_dash::dataset::DataContext::new(records).unwrap();
        let bounds = ctx.payload_bounds();
        let site = ctx.sites()[pick.index(ctx.sites().len())].clone();
        let criteria = ctx.criteria(
            SiteSelection::Site(site.clone()),
            Some(f64::from(a)),
            Some(f64::from(b)),
        );
        let range = criteria.payload_range;
        prop_assert!(range.min <= range.max);
        prop_assert!(range.min >= bounds.min && range.max <= bounds.max);

        let filtered = filter(ctx.records(), &criteria, bounds);
        for r in &filtered {
            prop_assert_eq!(&r.launch_site, &site);
            prop_assert!(range.contains(r.payload_mass_kg));
        }
        let expected = ctx
            .records()
            .iter()
            .filter(|r| r.launch_site == site && range.contains(r.payload_mass_kg))
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }
}
