//! Tests for arrow ingestion and configuration loading

use std::sync::Arc;

use arrow::array::{StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use jqi_estimator::schema::{
    admin_records_from_batch, worker_records_from_batch, worker_records_to_batch,
};
use jqi_estimator::utils::logging::null_summary;
use jqi_estimator::{EstimatorConfig, Error, Tier, compute_geo_stats, estimate};

use crate::utils::{THRESHOLD, county, county_index, workers};

#[test]
fn test_batch_to_estimate() -> anyhow::Result<()> {
    let mut records = workers("Retail Trade", &county("Alpha", "West", "Urban"), 200, 50);
    records.extend(workers("Mining & Logging", &county("Gamma", "East", "Urban"), 40, 40));
    let batch = worker_records_to_batch(&records)?;

    let loaded = worker_records_from_batch(&batch)?;
    let stats = compute_geo_stats(&loaded, THRESHOLD);

    let retail = estimate(&stats, &county_index(), "Alpha", "retail trade", 30)?;
    assert_eq!(retail.tier, Tier::County);
    assert_eq!(retail.percentage, 25.0);

    let mining = estimate(&stats, &county_index(), "Gamma", "mining and logging", 30)?;
    assert_eq!(mining.percentage, 100.0);
    Ok(())
}

#[test]
fn test_admin_batch_nulls_and_missing_columns() -> anyhow::Result<()> {
    let schema = Schema::new(vec![
        Field::new("area", DataType::Utf8, false),
        Field::new("date", DataType::Utf8, false),
        Field::new("series_code", DataType::Utf8, false),
        Field::new("title", DataType::Utf8, true),
        Field::new("employment_count", DataType::UInt64, false),
        Field::new("sub4_code", DataType::Utf8, true),
    ]);
    let batch = RecordBatch::try_new(
        Arc::new(schema),
        vec![
            Arc::new(StringArray::from(vec!["Alpha", "Alpha"])),
            Arc::new(StringArray::from(vec!["2021-03", "2021-04"])),
            Arc::new(StringArray::from(vec!["42445100", "42445100"])),
            Arc::new(StringArray::from(vec![Some("Grocery Stores"), None])),
            Arc::new(UInt64Array::from(vec![10, 12])),
            Arc::new(StringArray::from(vec![Some("42445100"), None])),
        ],
    )?;

    let summary = null_summary(&batch);
    let nulls: Vec<usize> = summary.iter().map(|c| c.nulls).collect();
    assert_eq!(nulls, vec![0, 0, 0, 1, 0, 1]);

    let records = admin_records_from_batch(&batch)?;
    assert_eq!(records[0].title.as_deref(), Some("grocery stores"));
    assert_eq!(records[1].title, None);

    let narrow = batch.project(&[0, 1, 2])?;
    assert!(matches!(
        admin_records_from_batch(&narrow),
        Err(Error::ColumnNotFound { column }) if column == "employment_count"
    ));
    Ok(())
}

#[test]
fn test_config_from_json() -> anyhow::Result<()> {
    let config = EstimatorConfig::from_json_str(
        r#"{
            "state_high_wage_threshold": 60000.0,
            "regional_high_wage_thresholds": { "West": 75000.0 },
            "min_sample_size": 25,
            "region_series_codes": { "West": ["42445100"] }
        }"#,
    )?;
    assert_eq!(config.min_sample_size, 25);
    assert_eq!(config.high_wage_threshold(Some("West"))?, 75_000.0);
    assert_eq!(config.high_wage_threshold(Some("East"))?, 60_000.0);
    assert_eq!(config.full_time_floor(2022)?, 21_000.0);
    assert!(config.validate_period("2009-12").is_err());

    assert!(EstimatorConfig::from_json_str(r#"{ "full_time_hours_per_week": 0.0 }"#).is_err());
    Ok(())
}
