//! Tests for the hierarchical geographic fallback

use jqi_estimator::algorithm::geo::compute_geo_stats;
use jqi_estimator::{Error, FallbackEstimator, GeoCountyIndex, STATE_GEO, Tier, estimate};

use crate::utils::{THRESHOLD, county, county_index, init_logging, workers};

#[test]
fn test_county_with_enough_sample_uses_county_tier() {
    init_logging();
    let alpha = county("Alpha", "West", "Urban");
    let records = workers("retail", &alpha, 200, 50);
    let stats = compute_geo_stats(&records, THRESHOLD);

    let stat = stats.get(Tier::County, "Alpha", "retail").unwrap();
    assert_eq!(stat.weighted_high_wage_pct, Some(25.0));
    assert_eq!(stat.unweighted_count, 200);

    let est = estimate(&stats, &county_index(), "Alpha", "retail", 30).unwrap();
    assert_eq!(est.tier, Tier::County);
    assert_eq!(est.geo_value, "Alpha");
    assert_eq!(est.percentage, 25.0);
    assert_eq!(est.unweighted_count, 200);
}

#[test]
fn test_county_without_records_falls_back_to_region() {
    init_logging();
    let mut records = workers("retail", &county("Alpha", "West", "Urban"), 20, 10);
    records.extend(workers("retail", &county("Delta", "West", "Urban"), 20, 0));
    let stats = compute_geo_stats(&records, THRESHOLD);

    let est = estimate(&stats, &county_index(), "Beta", "retail", 30).unwrap();
    assert_eq!(est.tier, Tier::Region);
    assert_eq!(est.geo_value, "West");
    assert_eq!(est.start_tier, Tier::Region);
    assert_eq!(est.unweighted_count, 40);
    assert_eq!(est.percentage, 25.0);
}

#[test]
fn test_county_with_other_industries_descends_to_region() {
    let beta = county("Beta", "West", "Rural");
    let mut records = workers("mining", &beta, 5, 5);
    records.extend(workers("retail", &county("Alpha", "West", "Urban"), 40, 4));
    let stats = compute_geo_stats(&records, THRESHOLD);

    let est = estimate(&stats, &county_index(), "Beta", "retail", 30).unwrap();
    assert_eq!(est.start_tier, Tier::County);
    assert_eq!(est.tier, Tier::Region);
    assert_eq!(est.percentage, 10.0);
}

#[test]
fn test_industry_only_at_state_reports_state() {
    init_logging();
    let mut records = workers("mining", &county("Delta", "West", "Urban"), 10, 2);
    records.extend(workers("retail", &county("Gamma", "East", "Urban"), 50, 5));
    // Gamma is urban, so give Beta's rural class no retail either
    records.extend(workers("mining", &county("Epsilon", "East", "Rural"), 10, 0));
    let stats = compute_geo_stats(&records, THRESHOLD);

    let est = estimate(&stats, &county_index(), "Beta", "retail", 30).unwrap();
    assert_eq!(est.tier, Tier::State);
    assert_eq!(est.geo_value, STATE_GEO);
    assert_eq!(est.percentage, 10.0);
}

#[test]
fn test_not_found_and_not_enough_data() {
    let records = workers("retail", &county("Alpha", "West", "Urban"), 10, 1);
    let stats = compute_geo_stats(&records, THRESHOLD);
    let index = county_index();

    assert!(matches!(
        estimate(&stats, &index, "Nowhere", "retail", 5),
        Err(Error::CountyOrIndustryNotFound { .. })
    ));
    assert!(matches!(
        estimate(&stats, &index, "Alpha", "mining", 5),
        Err(Error::CountyOrIndustryNotFound { .. })
    ));

    let err = estimate(&stats, &index, "Alpha", "retail", 11).unwrap_err();
    assert!(matches!(err, Error::NotEnoughData { min_sample_size: 11, .. }));
    assert!(err.is_no_answer());
}

#[test]
fn test_empty_index_uses_panel_geography() {
    let records = workers("retail", &county("Alpha", "West", "Urban"), 40, 20);
    let stats = compute_geo_stats(&records, THRESHOLD);
    let index = GeoCountyIndex::new();
    let estimator = FallbackEstimator::new(&stats, &index, 30);

    let est = estimator.estimate("Alpha", "retail").unwrap();
    assert_eq!(est.tier, Tier::County);
    assert_eq!(est.percentage, 50.0);
    assert_eq!(estimator.min_sample_size(), 30);
}
