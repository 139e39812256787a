//! Panel filtering criteria
//!
//! Filters applied to the panels before aggregation and projection: the survey
//! panel keeps full-time wage earners, the administrative panel keeps the series
//! that represent each region.

use std::collections::BTreeSet;

use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::models::{AdminSeriesRecord, GeoCountyIndex, WorkerRecord};
use crate::utils::logging::log_warning;

/// Defines a criterion for filtering panel records
pub trait FilterCriteria<T> {
    /// Determine if a record meets the filter criteria
    fn meets_criteria(&self, record: &T) -> bool;
}

/// Keeps workers earning at least the full-time minimum-wage floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullTimeFilter {
    floor: f64,
}

impl FullTimeFilter {
    /// Filter with an explicit annual floor
    #[must_use]
    pub fn new(floor: f64) -> Self {
        Self { floor }
    }

    /// Filter using the configured minimum wage for `year`
    pub fn for_year(config: &EstimatorConfig, year: i32) -> Result<Self> {
        Ok(Self::new(config.full_time_floor(year)?))
    }

    /// The annual wage floor
    #[must_use]
    pub fn floor(&self) -> f64 {
        self.floor
    }
}

impl FilterCriteria<WorkerRecord> for FullTimeFilter {
    fn meets_criteria(&self, record: &WorkerRecord) -> bool {
        record.wage >= self.floor
    }
}

/// Keeps administrative series listed as representative for their area's region
#[derive(Debug, Clone, Copy)]
pub struct SeriesMembershipFilter<'a> {
    county_index: &'a GeoCountyIndex,
    config: &'a EstimatorConfig,
}

impl<'a> SeriesMembershipFilter<'a> {
    /// Filter resolving each area's region through `county_index`
    #[must_use]
    pub fn new(county_index: &'a GeoCountyIndex, config: &'a EstimatorConfig) -> Self {
        Self {
            county_index,
            config,
        }
    }
}

impl FilterCriteria<AdminSeriesRecord> for SeriesMembershipFilter<'_> {
    fn meets_criteria(&self, record: &AdminSeriesRecord) -> bool {
        self.county_index
            .get(&record.area)
            .and_then(|geography| self.config.series_membership(&geography.region))
            .is_some_and(|codes| codes.iter().any(|code| *code == record.series_code))
    }
}

/// Drop survey workers below the full-time floor for `year`
pub fn retain_full_time(
    records: Vec<WorkerRecord>,
    year: i32,
    config: &EstimatorConfig,
) -> Result<Vec<WorkerRecord>> {
    let filter = FullTimeFilter::for_year(config, year)?;
    let before = records.len();
    let kept: Vec<WorkerRecord> = records
        .into_iter()
        .filter(|r| filter.meets_criteria(r))
        .collect();
    log::info!(
        "Full-time filter for {year} (floor {:.0}): kept {} of {before} workers",
        filter.floor(),
        kept.len()
    );
    Ok(kept)
}

/// Keep only the administrative series representative of each area's region.
///
/// Records in areas missing from the county index, or in regions without a
/// configured membership list, are dropped.
#[must_use]
pub fn retain_representative_series(
    records: Vec<AdminSeriesRecord>,
    county_index: &GeoCountyIndex,
    config: &EstimatorConfig,
) -> Vec<AdminSeriesRecord> {
    let filter = SeriesMembershipFilter::new(county_index, config);
    let mut unlisted: BTreeSet<String> = BTreeSet::new();
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        if filter.meets_criteria(&record) {
            kept.push(record);
            continue;
        }
        if let Some(geography) = county_index.get(&record.area) {
            if config.series_membership(&geography.region).is_none() {
                unlisted.insert(geography.region.clone());
            }
        }
    }

    for region in &unlisted {
        log_warning("No representative series configured for region", Some(region.as_str()));
    }
    kept
}
