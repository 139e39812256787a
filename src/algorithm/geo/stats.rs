//! High-wage statistics per (tier, geography value, industry)
//!
//! The table is built once by the aggregator and is read-only afterwards. It takes
//! the place of attaching every tier's aggregate to every worker row: a row's view
//! of all five tiers is available through [`GeoStatTable::row_view`].

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::geo::tiers::TIER_DESCRIPTORS;
use crate::models::{CountyGeography, Tier, WorkerRecord};

/// Weighted and unweighted high-wage statistics for one group
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GeoStat {
    /// Sum of sample weights
    pub weighted_total: f64,
    /// Sum of sample weights of high-wage workers
    pub weighted_high_wage_count: f64,
    /// `100 * weighted_high_wage_count / weighted_total`; `None` when the total is zero
    pub weighted_high_wage_pct: Option<f64>,
    /// Number of sampled records
    pub unweighted_count: usize,
}

impl GeoStat {
    /// Add one worker to the group
    pub fn add(&mut self, sample_weight: f64, is_high_wage: bool) {
        self.weighted_total += sample_weight;
        if is_high_wage {
            self.weighted_high_wage_count += sample_weight;
        }
        self.unweighted_count += 1;
    }

    /// Compute the percentage once all workers are added
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.weighted_high_wage_pct = (self.weighted_total > 0.0)
            .then(|| 100.0 * self.weighted_high_wage_count / self.weighted_total);
        self
    }
}

/// Statistics of one tier: geography value → industry code → stat
#[derive(Debug, Clone, Default)]
pub struct TierStats {
    groups: FxHashMap<String, FxHashMap<String, GeoStat>>,
}

impl TierStats {
    pub(crate) fn from_groups(groups: FxHashMap<String, FxHashMap<String, GeoStat>>) -> Self {
        Self { groups }
    }

    /// Stat for an industry within a geography value
    #[must_use]
    pub fn get(&self, geo_value: &str, industry_code: &str) -> Option<&GeoStat> {
        self.groups.get(geo_value)?.get(industry_code)
    }

    /// Whether any worker (of any industry) falls in `geo_value`
    #[must_use]
    pub fn contains_geo(&self, geo_value: &str) -> bool {
        self.groups.get(geo_value).is_some_and(|industries| !industries.is_empty())
    }

    /// Industries observed in `geo_value`
    pub fn industries<'a>(
        &'a self,
        geo_value: &str,
    ) -> impl Iterator<Item = (&'a str, &'a GeoStat)> + use<'a> {
        self.groups
            .get(geo_value)
            .into_iter()
            .flat_map(|industries| industries.iter().map(|(code, stat)| (code.as_str(), stat)))
    }

    /// Geography values observed at this tier
    pub fn geo_values(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of (geography value, industry) groups
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.values().map(|industries| industries.len()).sum()
    }
}

/// All five tiers of one worker row, finest first
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkerGeoStats {
    /// Stats indexed by [`Tier::rank`]
    pub by_tier: [GeoStat; 5],
}

impl WorkerGeoStats {
    /// Stat at `tier`
    #[must_use]
    pub fn get(&self, tier: Tier) -> &GeoStat {
        &self.by_tier[tier.rank()]
    }
}

/// Read-only lookup keyed by (tier, geography value, industry code)
#[derive(Debug, Clone)]
pub struct GeoStatTable {
    tiers: Vec<TierStats>,
    titles: FxHashMap<String, String>,
    geographies: FxHashMap<String, CountyGeography>,
    threshold: f64,
    record_count: usize,
}

impl GeoStatTable {
    pub(crate) fn new(
        tiers: Vec<TierStats>,
        titles: FxHashMap<String, String>,
        geographies: FxHashMap<String, CountyGeography>,
        threshold: f64,
        record_count: usize,
    ) -> Self {
        debug_assert_eq!(tiers.len(), TIER_DESCRIPTORS.len());
        Self {
            tiers,
            titles,
            geographies,
            threshold,
            record_count,
        }
    }

    /// Wage threshold the table was computed with
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of worker records aggregated
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Statistics of one tier
    #[must_use]
    pub fn tier(&self, tier: Tier) -> &TierStats {
        &self.tiers[tier.rank()]
    }

    /// Stat for (tier, geography value, industry)
    #[must_use]
    pub fn get(&self, tier: Tier, geo_value: &str, industry_code: &str) -> Option<&GeoStat> {
        self.tier(tier).get(geo_value, industry_code)
    }

    /// Whether any worker falls in `geo_value` at `tier`
    #[must_use]
    pub fn contains_geo(&self, tier: Tier, geo_value: &str) -> bool {
        self.tier(tier).contains_geo(geo_value)
    }

    /// Title of a survey industry, if any worker carried one
    #[must_use]
    pub fn industry_title(&self, industry_code: &str) -> Option<&str> {
        self.titles.get(industry_code).map(String::as_str)
    }

    /// Geography labels carried by the panel's workers in `county`
    #[must_use]
    pub fn county_geography(&self, county: &str) -> Option<&CountyGeography> {
        self.geographies.get(county)
    }

    /// Geography entries of every county present in the panel
    pub fn county_geographies(&self) -> impl Iterator<Item = &CountyGeography> {
        self.geographies.values()
    }

    /// Every tier's stat for the groups a worker belongs to.
    ///
    /// Returns `None` for a worker whose groups are not in the table, i.e. one that
    /// was not part of the aggregated panel.
    #[must_use]
    pub fn row_view(&self, record: &WorkerRecord) -> Option<WorkerGeoStats> {
        let mut by_tier = [GeoStat::default(); 5];
        for (slot, descriptor) in by_tier.iter_mut().zip(TIER_DESCRIPTORS.iter()) {
            *slot = *self.get(
                descriptor.tier,
                descriptor.worker_value(record),
                &record.industry_code,
            )?;
        }
        Some(WorkerGeoStats { by_tier })
    }
}
