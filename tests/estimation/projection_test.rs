//! Tests for high-wage employment projection

use jqi_estimator::algorithm::filters::retain_full_time;
use jqi_estimator::algorithm::geo::GeoAggregator;
use jqi_estimator::utils::logging::render_series;
use jqi_estimator::{
    AdminSeriesRecord, CodeHierarchy, CodeLevel, CrossReferenceEntry, Error, HighWageProjector,
    IndustryCrossReference, ProjectionQuery, Tier, compute_geo_stats, project,
};

use crate::utils::{THRESHOLD, config, county, county_index, init_logging, workers};

fn cross_reference() -> IndustryCrossReference {
    IndustryCrossReference::from_entries(vec![
        CrossReferenceEntry {
            level: CodeLevel::Main,
            admin_code: "40000000".to_string(),
            industry_code: "trade".to_string(),
            title: "trade transportation and utilities".to_string(),
        },
        CrossReferenceEntry {
            level: CodeLevel::Sub2,
            admin_code: "42440000".to_string(),
            industry_code: "retail".to_string(),
            title: "retail trade".to_string(),
        },
    ])
}

fn retail_series(area: &str, date: &str, employment: u64) -> AdminSeriesRecord {
    AdminSeriesRecord::new(
        area,
        date,
        "42440000",
        employment,
        CodeHierarchy::main("40000000").with(CodeLevel::Sub2, "42440000"),
    )
}

#[test]
fn test_missing_date_is_reported_first() {
    init_logging();
    let alpha = county("Alpha", "West", "Urban");
    let stats = compute_geo_stats(&workers("retail", &alpha, 200, 50), THRESHOLD);
    let admin = vec![retail_series("Alpha", "2021-04", 1000)];

    let query = ProjectionQuery::new("Alpha", "2021-03", "42440000");
    let err = project(&admin, &stats, &cross_reference(), &county_index(), &query, 30).unwrap_err();
    assert!(matches!(err, Error::DateNotFound { ref date } if date == "2021-03"));

    // a query that would also fail later still reports the missing date
    let unknown = ProjectionQuery::new("Nowhere", "2021-03", "99999999");
    assert!(matches!(
        project(&admin, &stats, &cross_reference(), &county_index(), &unknown, 30),
        Err(Error::DateNotFound { .. })
    ));
}

#[test]
fn test_project_applies_percentage_to_employment() {
    init_logging();
    let alpha = county("Alpha", "West", "Urban");
    let stats = compute_geo_stats(&workers("retail", &alpha, 200, 50), THRESHOLD);
    let admin = vec![retail_series("Alpha", "2021-03-01", 1000)];

    let query = ProjectionQuery::new("Alpha", "2021-03", "42440000");
    let projection =
        project(&admin, &stats, &cross_reference(), &county_index(), &query, 30).unwrap();
    assert_eq!(projection.percentage, 25.0);
    assert_eq!(projection.projected_count, 250.0);
    assert_eq!(projection.resolved_level, CodeLevel::Sub2);
    assert_eq!(projection.tier(), Tier::County);
    assert_eq!(projection.period.to_string(), "2021-03");
}

#[test]
fn test_unresolved_series() {
    let alpha = county("Alpha", "West", "Urban");
    let stats = compute_geo_stats(&workers("retail", &alpha, 40, 4), THRESHOLD);
    let admin = vec![AdminSeriesRecord::new(
        "Alpha",
        "2021-03",
        "10000000",
        50,
        CodeHierarchy::main("10000000"),
    )];
    let query = ProjectionQuery::new("Alpha", "2021-03", "10000000");
    let err = project(&admin, &stats, &cross_reference(), &county_index(), &query, 30).unwrap_err();
    assert!(matches!(err, Error::IndustryNotResolved { .. }));
    assert!(err.is_no_answer());
}

#[test]
fn test_full_pipeline_with_series() {
    init_logging();
    let config = config().with_min_sample_size(20);
    let alpha = county("Alpha", "West", "Urban");
    let mut panel = workers("retail", &alpha, 40, 10);
    // below the 2021 full-time floor of 19,500
    panel.extend((0..15).map(|_| jqi_estimator::WorkerRecord::new("retail", &alpha, 1.0, 5_000.0)));
    let panel = retain_full_time(panel, 2021, &config).unwrap();
    assert_eq!(panel.len(), 40);

    let stats = GeoAggregator::from_config(&config, None).unwrap().aggregate(&panel);
    let xref = cross_reference();
    let index = county_index();
    let admin = vec![
        retail_series("Alpha", "2021-05", 400),
        retail_series("Alpha", "2021-03", 100),
        retail_series("Delta", "2021-03", 100),
        retail_series("Alpha", "2021-04", 200),
    ];
    let projector = HighWageProjector::new(&admin, &stats, &xref, &index, &config);

    let points = projector.project_series("Alpha", "42440000", false);
    let projected: Vec<f64> = points
        .iter()
        .map(|p| p.outcome.as_ref().unwrap().projected_count)
        .collect();
    assert_eq!(projected, vec![25.0, 50.0, 100.0]);

    let table = render_series(&points);
    assert_eq!(table.lines().count(), 4);

    let region = projector
        .project_region(&ProjectionQuery::new("West", "2021-03", "42440000"))
        .unwrap();
    assert_eq!(region.employment_count, 200.0);
    assert_eq!(region.tier(), Tier::Region);
    assert_eq!(region.projected_count, 50.0);
}
