//! Hierarchical geographic fallback estimation
//!
//! An estimate is made in two passes over the ordered tier descriptors:
//!
//! 1. Availability: the starting tier is the finest tier whose geography value has
//!    any survey records at all (any industry). A county with no records starts at
//!    its regional urban/rural class, looked up in the county index, and so on down
//!    to the state, which is always available.
//! 2. Sample size: from the starting tier down to the state, the first tier whose
//!    unweighted count for the industry reaches the minimum sample size supplies the
//!    percentage. A tier without a row for the industry counts as zero.
//!
//! If the industry has no row anywhere along that chain the result is
//! `CountyOrIndustryNotFound`; this is checked before any sample-size logic.

use log::debug;
use serde::Serialize;
use smallvec::SmallVec;

use crate::algorithm::geo::stats::{GeoStat, GeoStatTable};
use crate::algorithm::geo::tiers::{TIER_DESCRIPTORS, descriptor};
use crate::config::EstimatorConfig;
use crate::error::{Error, Result};
use crate::models::{CountyGeography, GeoCountyIndex, STATE_GEO, Tier};

/// Result of a successful fallback estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    /// Tier whose statistics were used
    pub tier: Tier,
    /// Geography value within that tier
    pub geo_value: String,
    /// Finest tier that had survey data for the requested area
    pub start_tier: Tier,
    /// Weighted high-wage percentage, 0-100
    pub percentage: f64,
    /// Sample size behind the percentage
    pub unweighted_count: usize,
    /// Weighted population behind the percentage
    pub weighted_total: f64,
    /// Survey industry code
    pub industry_code: String,
    /// Survey industry title, when known
    pub industry_title: Option<String>,
}

/// One geography the estimator may fall back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierCandidate<'a> {
    /// Tier of the candidate
    pub tier: Tier,
    /// Geography value at that tier
    pub geo_value: &'a str,
}

type Chain<'a> = SmallVec<[TierCandidate<'a>; 5]>;

/// Walks the tier hierarchy over a finished [`GeoStatTable`]
#[derive(Debug, Clone, Copy)]
pub struct FallbackEstimator<'a> {
    stats: &'a GeoStatTable,
    county_index: &'a GeoCountyIndex,
    min_sample_size: usize,
}

impl<'a> FallbackEstimator<'a> {
    /// Estimator requiring `min_sample_size` sampled records per tier
    #[must_use]
    pub fn new(
        stats: &'a GeoStatTable,
        county_index: &'a GeoCountyIndex,
        min_sample_size: usize,
    ) -> Self {
        Self {
            stats,
            county_index,
            min_sample_size,
        }
    }

    /// Estimator using the configured minimum sample size
    #[must_use]
    pub fn from_config(
        stats: &'a GeoStatTable,
        county_index: &'a GeoCountyIndex,
        config: &EstimatorConfig,
    ) -> Self {
        Self::new(stats, county_index, config.min_sample_size)
    }

    /// Minimum unweighted count for a tier to be used
    #[must_use]
    pub fn min_sample_size(&self) -> usize {
        self.min_sample_size
    }

    /// Geography labels of a county: the panel's own when it has workers there,
    /// otherwise the county index entry
    fn county_geography(&self, county: &str) -> Option<&'a CountyGeography> {
        self.stats
            .county_geography(county)
            .or_else(|| self.county_index.get(county))
    }

    /// Candidate tiers for a county, from the first tier with any data down to state
    pub fn county_chain(&self, county: &str) -> Result<Chain<'a>> {
        let geography = self
            .county_geography(county)
            .ok_or_else(|| Error::CountyOrIndustryNotFound {
                area: county.to_string(),
                industry: String::new(),
            })?;

        let full: Chain<'a> = TIER_DESCRIPTORS
            .iter()
            .map(|d| TierCandidate {
                tier: d.tier,
                geo_value: d.county_value(geography),
            })
            .collect();
        Ok(self.available_suffix(full))
    }

    /// Candidate tiers for a region: region, the region's urban/rural class when all
    /// its counties share one, then state
    pub fn region_chain<'q>(&self, region: &'q str) -> Result<Chain<'q>>
    where
        'a: 'q,
    {
        let mut counties: Vec<&'a CountyGeography> = self.county_index.counties_in_region(region);
        counties.extend(
            self.stats
                .county_geographies()
                .filter(|g| g.region == region && self.county_index.get(&g.county).is_none()),
        );
        if counties.is_empty() && !self.stats.contains_geo(Tier::Region, region) {
            return Err(Error::CountyOrIndustryNotFound {
                area: region.to_string(),
                industry: String::new(),
            });
        }

        let mut full: Chain<'q> = SmallVec::new();
        full.push(TierCandidate {
            tier: Tier::Region,
            geo_value: region,
        });
        if let Some(&first) = counties.first() {
            let class: &'a str = descriptor(Tier::UrbanRural).county_value(first);
            if counties.iter().all(|g| g.urban_rural_class == class) {
                full.push(TierCandidate {
                    tier: Tier::UrbanRural,
                    geo_value: class,
                });
            }
        }
        full.push(TierCandidate {
            tier: Tier::State,
            geo_value: STATE_GEO,
        });
        Ok(self.available_suffix(full))
    }

    /// Drop leading candidates whose geography has no survey records; state stays
    fn available_suffix<'q>(&self, full: Chain<'q>) -> Chain<'q> {
        let start = full
            .iter()
            .position(|c| c.tier == Tier::State || self.stats.contains_geo(c.tier, c.geo_value))
            .unwrap_or(full.len().saturating_sub(1));
        full.into_iter().skip(start).collect()
    }

    /// Estimate the high-wage percentage for an industry in a county
    pub fn estimate(&self, county: &str, industry_code: &str) -> Result<Estimate> {
        let chain = self.county_chain(county)?;
        self.evaluate(county, industry_code, &chain)
    }

    /// Estimate the high-wage percentage for an industry across a whole region
    pub fn estimate_region(&self, region: &str, industry_code: &str) -> Result<Estimate> {
        let chain = self.region_chain(region)?;
        self.evaluate(region, industry_code, &chain)
    }

    /// Apply the industry check and the sample-size descent to a candidate chain
    pub fn evaluate(
        &self,
        area: &str,
        industry_code: &str,
        chain: &[TierCandidate<'_>],
    ) -> Result<Estimate> {
        let Some(start) = chain.first() else {
            return Err(Error::CountyOrIndustryNotFound {
                area: area.to_string(),
                industry: industry_code.to_string(),
            });
        };

        let rows: SmallVec<[(TierCandidate<'_>, Option<&GeoStat>); 5]> = chain
            .iter()
            .map(|c| (*c, self.stats.get(c.tier, c.geo_value, industry_code)))
            .collect();

        if rows.iter().all(|(_, stat)| stat.is_none()) {
            return Err(Error::CountyOrIndustryNotFound {
                area: area.to_string(),
                industry: industry_code.to_string(),
            });
        }

        for (candidate, stat) in &rows {
            let Some(stat) = stat else {
                debug!(
                    "No '{industry_code}' records at {} tier '{}'",
                    candidate.tier, candidate.geo_value
                );
                continue;
            };
            if stat.unweighted_count < self.min_sample_size {
                debug!(
                    "{} tier '{}' has {} records for '{industry_code}', below {}",
                    candidate.tier, candidate.geo_value, stat.unweighted_count, self.min_sample_size
                );
                continue;
            }

            let percentage = stat
                .weighted_high_wage_pct
                .ok_or_else(|| Error::UndefinedPercentage {
                    tier: candidate.tier,
                    geo_value: candidate.geo_value.to_string(),
                })?;
            debug!(
                "Estimate for '{industry_code}' in '{area}' from {} tier '{}' (started at {})",
                candidate.tier, candidate.geo_value, start.tier
            );
            return Ok(Estimate {
                tier: candidate.tier,
                geo_value: candidate.geo_value.to_string(),
                start_tier: start.tier,
                percentage,
                unweighted_count: stat.unweighted_count,
                weighted_total: stat.weighted_total,
                industry_code: industry_code.to_string(),
                industry_title: self.stats.industry_title(industry_code).map(str::to_string),
            });
        }

        Err(Error::NotEnoughData {
            area: area.to_string(),
            industry: industry_code.to_string(),
            min_sample_size: self.min_sample_size,
        })
    }
}

/// Estimate the high-wage percentage for `industry_code` in `county`
pub fn estimate(
    stats: &GeoStatTable,
    county_index: &GeoCountyIndex,
    county: &str,
    industry_code: &str,
    min_sample_size: usize,
) -> Result<Estimate> {
    FallbackEstimator::new(stats, county_index, min_sample_size).estimate(county, industry_code)
}
