//! Property tests over a mixed survey panel

use jqi_estimator::algorithm::geo::{TIER_DESCRIPTORS, compute_geo_stats};
use jqi_estimator::algorithm::normalize::normalize_title;
use jqi_estimator::models::CodeHierarchy;
use jqi_estimator::{
    AdminSeriesRecord, CodeLevel, CrossReferenceEntry, Error, GeoStatTable, IndustryCrossReference,
    STATE_GEO, Tier, WorkerRecord, estimate, resolve,
};
use proptest::prelude::*;

use crate::utils::{THRESHOLD, county, county_index};

/// Panel with uneven weights and wages over four counties and three industries
fn mixed_panel() -> Vec<WorkerRecord> {
    let counties = [
        county("Alpha", "West", "Urban"),
        county("Beta", "West", "Rural"),
        county("Delta", "West", "Urban"),
        county("Gamma", "East", "Urban"),
    ];
    let industries = ["retail", "mining", "health"];
    let mut records = Vec::new();
    for (c, geo) in counties.iter().enumerate() {
        for (i, industry) in industries.iter().enumerate() {
            let n = 3 + 7 * c + 11 * i;
            for k in 0..n {
                let weight = 0.5 + ((k * 13 + c) % 7) as f64;
                let wage = 10_000.0 + ((k * 7919 + i * 104_729) % 90_000) as f64;
                records.push(WorkerRecord::new(*industry, geo, weight, wage));
            }
        }
    }
    records
}

fn stats() -> GeoStatTable {
    compute_geo_stats(&mixed_panel(), THRESHOLD)
}

proptest! {
    #[test]
    fn normalization_is_idempotent(s in ".{0,80}") {
        let once = normalize_title(&s);
        prop_assert_eq!(normalize_title(&once), once);
    }

    #[test]
    fn normalization_is_idempotent_on_punctuated_titles(s in "[ A-Za-z&,./()!-]{0,40}") {
        let once = normalize_title(&s);
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
        prop_assert_eq!(normalize_title(&once), once);
    }
}

#[test]
fn test_every_tier_partitions_the_state() {
    let stats = stats();
    for industry in ["retail", "mining", "health"] {
        let state = stats.get(Tier::State, STATE_GEO, industry).unwrap();
        for descriptor in &TIER_DESCRIPTORS {
            let tier = stats.tier(descriptor.tier);
            let total: usize = tier
                .geo_values()
                .filter_map(|geo| tier.get(geo, industry))
                .map(|s| s.unweighted_count)
                .sum();
            assert_eq!(total, state.unweighted_count, "{} / {industry}", descriptor.label);
        }
    }
}

#[test]
fn test_coarser_tier_counts_cover_finer() {
    let stats = stats();
    let index = county_index();
    for industry in ["retail", "mining", "health"] {
        for region in ["West", "East"] {
            let counties_total: usize = index
                .counties_in_region(region)
                .iter()
                .filter_map(|g| stats.get(Tier::County, &g.county, industry))
                .map(|s| s.unweighted_count)
                .sum();
            let region_count = stats
                .get(Tier::Region, region, industry)
                .map_or(0, |s| s.unweighted_count);
            assert!(region_count >= counties_total);
        }
        for geo in index.counties_in_region("West") {
            let county_count = stats
                .get(Tier::County, &geo.county, industry)
                .map_or(0, |s| s.unweighted_count);
            let regional = stats
                .get(Tier::RegionalUrbanRural, &geo.regional_urban_rural_class, industry)
                .map_or(0, |s| s.unweighted_count);
            let class = stats
                .get(Tier::UrbanRural, &geo.urban_rural_class, industry)
                .map_or(0, |s| s.unweighted_count);
            assert!(regional >= county_count);
            assert!(class >= county_count);
        }
    }
}

#[test]
fn test_percentages_are_bounded() {
    let stats = stats();
    for descriptor in &TIER_DESCRIPTORS {
        let tier = stats.tier(descriptor.tier);
        for geo in tier.geo_values() {
            for (_, stat) in tier.industries(geo) {
                assert!(stat.weighted_total > 0.0);
                let pct = stat.weighted_high_wage_pct.unwrap();
                assert!((0.0..=100.0).contains(&pct));
            }
        }
    }
}

#[test]
fn test_raising_min_sample_size_never_moves_finer() {
    let stats = stats();
    let index = county_index();
    for county_name in ["Alpha", "Beta", "Delta", "Gamma"] {
        for industry in ["retail", "mining", "health"] {
            let mut previous: Option<Tier> = None;
            let mut exhausted = false;
            for min in [1, 5, 10, 20, 30, 50, 80, 120, 200, 10_000] {
                match estimate(&stats, &index, county_name, industry, min) {
                    Ok(est) => {
                        assert!(!exhausted, "estimate reappeared at min {min}");
                        assert!(est.unweighted_count >= min);
                        if let Some(prev) = previous {
                            assert!(prev.rank() <= est.tier.rank());
                        }
                        previous = Some(est.tier);
                    }
                    Err(Error::NotEnoughData { .. }) => exhausted = true,
                    Err(other) => panic!("unexpected error {other}"),
                }
            }
            assert!(exhausted);
        }
    }
}

#[test]
fn test_resolver_prefers_sub4_over_main() {
    let xref = IndustryCrossReference::from_entries(vec![
        CrossReferenceEntry {
            level: CodeLevel::Main,
            admin_code: "40000000".to_string(),
            industry_code: "trade".to_string(),
            title: "trade".to_string(),
        },
        CrossReferenceEntry {
            level: CodeLevel::Sub4,
            admin_code: "42445100".to_string(),
            industry_code: "grocery".to_string(),
            title: "grocery stores".to_string(),
        },
    ]);
    let record = AdminSeriesRecord::new(
        "Alpha",
        "2021-03",
        "42445100",
        10,
        CodeHierarchy::main("40000000").with(CodeLevel::Sub4, "42445100"),
    );
    let resolved = resolve(&record, &xref).unwrap();
    assert_eq!(resolved.level, CodeLevel::Sub4);
    assert_eq!(resolved.industry.industry_code, "grocery");
}
