//! Per-tier high-wage aggregation over the worker panel
//!
//! Each tier groups the same worker rows by (geography value, industry code). The
//! tiers do not depend on each other and are computed in parallel.

use std::time::Instant;

use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::algorithm::geo::stats::{GeoStat, GeoStatTable, TierStats};
use crate::algorithm::geo::tiers::{TIER_DESCRIPTORS, TierDescriptor};
use crate::config::EstimatorConfig;
use crate::error::Result;
use crate::models::{CountyGeography, WorkerRecord};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Computes [`GeoStatTable`]s for a fixed high-wage threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoAggregator {
    threshold: f64,
}

impl GeoAggregator {
    /// Aggregator counting `wage > threshold` as high wage
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Aggregator using the configured threshold for `region` (statewide when `None`)
    pub fn from_config(config: &EstimatorConfig, region: Option<&str>) -> Result<Self> {
        Ok(Self::new(config.high_wage_threshold(region)?))
    }

    /// The high-wage threshold
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a wage counts as high wage (strictly above the threshold)
    #[must_use]
    pub fn is_high_wage(&self, wage: f64) -> bool {
        wage > self.threshold
    }

    /// Aggregate every tier over `records`
    #[must_use]
    pub fn aggregate(&self, records: &[WorkerRecord]) -> GeoStatTable {
        let start = Instant::now();
        log_operation_start("Aggregating high-wage statistics", "worker panel");

        let tiers: Vec<TierStats> = TIER_DESCRIPTORS
            .par_iter()
            .map(|descriptor| self.aggregate_tier(records, descriptor))
            .collect();

        let mut titles: FxHashMap<String, String> = FxHashMap::default();
        let mut geographies: FxHashMap<String, CountyGeography> = FxHashMap::default();
        for record in records {
            if let Some(title) = &record.industry_title {
                titles
                    .entry(record.industry_code.clone())
                    .or_insert_with(|| title.clone());
            }
            if !geographies.contains_key(&record.county) {
                geographies.insert(record.county.clone(), record.geography());
            }
        }

        log_operation_complete(
            "aggregated",
            "worker panel",
            records.len(),
            Some(start.elapsed()),
        );
        GeoStatTable::new(tiers, titles, geographies, self.threshold, records.len())
    }

    fn aggregate_tier(&self, records: &[WorkerRecord], descriptor: &TierDescriptor) -> TierStats {
        let mut groups: FxHashMap<String, FxHashMap<String, GeoStat>> = FxHashMap::default();

        for record in records {
            groups
                .entry(descriptor.worker_value(record).to_string())
                .or_default()
                .entry(record.industry_code.clone())
                .or_default()
                .add(record.sample_weight, self.is_high_wage(record.wage));
        }

        for industries in groups.values_mut() {
            for stat in industries.values_mut() {
                *stat = stat.finish();
            }
        }

        let tier_stats = TierStats::from_groups(groups);
        debug!(
            "{} tier: {} (geography, industry) groups",
            descriptor.label,
            tier_stats.group_count()
        );
        tier_stats
    }
}

/// Compute all five tiers of high-wage statistics for `records`
#[must_use]
pub fn compute_geo_stats(records: &[WorkerRecord], threshold: f64) -> GeoStatTable {
    GeoAggregator::new(threshold).aggregate(records)
}
