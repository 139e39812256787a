//! Shared fixtures for the integration tests

use jqi_estimator::{CountyGeography, EstimatorConfig, GeoCountyIndex, WorkerRecord};

/// High-wage threshold used by the fixture panels
pub const THRESHOLD: f64 = 50_000.0;

/// Initialize logging once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// County geography with every tier label spelled out
#[must_use]
pub fn county(name: &str, region: &str, class: &str) -> CountyGeography {
    CountyGeography {
        county: name.to_string(),
        region: region.to_string(),
        urban_rural_class: class.to_string(),
        regional_urban_rural_class: format!("{region} {class}"),
    }
}

/// `total` unit-weight workers of `industry` in `geo`, the first `high` above the threshold
#[must_use]
pub fn workers(
    industry: &str,
    geo: &CountyGeography,
    total: usize,
    high: usize,
) -> Vec<WorkerRecord> {
    (0..total)
        .map(|i| {
            let wage = if i < high { THRESHOLD + 10_000.0 } else { THRESHOLD - 10_000.0 };
            WorkerRecord::new(industry, geo, 1.0, wage)
        })
        .collect()
}

/// County index of the West/East fixture state
#[must_use]
pub fn county_index() -> GeoCountyIndex {
    GeoCountyIndex::from_entries(vec![
        county("Alpha", "West", "Urban"),
        county("Beta", "West", "Rural"),
        county("Delta", "West", "Urban"),
        county("Gamma", "East", "Urban"),
    ])
}

/// Default configuration with the fixture threshold
#[must_use]
pub fn config() -> EstimatorConfig {
    EstimatorConfig::default().with_state_threshold(THRESHOLD)
}
