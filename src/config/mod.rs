//! Configuration for the estimation engine.
//!
//! Wage schedules, high-wage thresholds and region series membership are injected
//! here rather than embedded as constants in the algorithms.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::period::Period;

/// California minimum wage (USD/hour) by year
const CA_MINIMUM_WAGES: [(i32, f64); 13] = [
    (2010, 8.0),
    (2011, 8.0),
    (2012, 8.0),
    (2013, 8.0),
    (2014, 9.0),
    (2015, 9.0),
    (2016, 10.0),
    (2017, 10.0),
    (2018, 10.5),
    (2019, 11.0),
    (2020, 12.0),
    (2021, 13.0),
    (2022, 14.0),
];

/// Configuration for the estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Hourly minimum wage by year; its key range is the supported period range
    pub minimum_wages: BTreeMap<i32, f64>,
    /// Weekly hours assumed for a full-time worker
    pub full_time_hours_per_week: f64,
    /// Weeks per year assumed for a full-time worker
    pub full_time_weeks_per_year: f64,
    /// Statewide high-wage threshold (annual USD)
    pub state_high_wage_threshold: Option<f64>,
    /// Per-region overrides of the high-wage threshold
    pub regional_high_wage_thresholds: BTreeMap<String, f64>,
    /// Default minimum unweighted sample size for a tier to be trusted
    pub min_sample_size: usize,
    /// Administrative series codes representative of each region
    pub region_series_codes: BTreeMap<String, Vec<String>>,
    /// Show progress bars for batch projections
    pub show_progress: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            minimum_wages: CA_MINIMUM_WAGES.into_iter().collect(),
            full_time_hours_per_week: 30.0,
            full_time_weeks_per_year: 50.0,
            state_high_wage_threshold: None,
            regional_high_wage_thresholds: BTreeMap::new(),
            min_sample_size: 30,
            region_series_codes: BTreeMap::new(),
            show_progress: false,
        }
    }
}

impl EstimatorConfig {
    /// Create a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Set the statewide high-wage threshold
    #[must_use]
    pub fn with_state_threshold(mut self, threshold: f64) -> Self {
        self.state_high_wage_threshold = Some(threshold);
        self
    }

    /// Override the high-wage threshold for one region
    #[must_use]
    pub fn with_regional_threshold(mut self, region: impl Into<String>, threshold: f64) -> Self {
        self.regional_high_wage_thresholds.insert(region.into(), threshold);
        self
    }

    /// Set the default minimum sample size
    #[must_use]
    pub fn with_min_sample_size(mut self, min_sample_size: usize) -> Self {
        self.min_sample_size = min_sample_size;
        self
    }

    /// Set the representative series codes for a region
    #[must_use]
    pub fn with_series_membership(
        mut self,
        region: impl Into<String>,
        series_codes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.region_series_codes.insert(
            region.into(),
            series_codes.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Enable or disable progress bars
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check that configured values are usable
    pub fn validate(&self) -> Result<()> {
        if self.minimum_wages.is_empty() {
            return Err(Error::Config("minimum wage schedule is empty".to_string()));
        }
        if let Some((year, wage)) = self.minimum_wages.iter().find(|(_, wage)| **wage <= 0.0) {
            return Err(Error::Config(format!(
                "minimum wage for {year} must be positive, got {wage}"
            )));
        }
        if self.full_time_hours_per_week <= 0.0 || self.full_time_weeks_per_year <= 0.0 {
            return Err(Error::Config(
                "full-time hours and weeks must be positive".to_string(),
            ));
        }
        let thresholds = self
            .state_high_wage_threshold
            .iter()
            .chain(self.regional_high_wage_thresholds.values());
        for threshold in thresholds {
            if !threshold.is_finite() || *threshold < 0.0 {
                return Err(Error::Config(format!(
                    "high-wage threshold must be non-negative, got {threshold}"
                )));
            }
        }
        Ok(())
    }

    /// Hourly minimum wage for `year`
    pub fn minimum_wage(&self, year: i32) -> Result<f64> {
        self.minimum_wages
            .get(&year)
            .copied()
            .ok_or_else(|| Error::InvalidPeriod {
                period: year.to_string(),
            })
    }

    /// Annual wage floor below which a worker is not counted as full time
    pub fn full_time_floor(&self, year: i32) -> Result<f64> {
        Ok(self.minimum_wage(year)?
            * self.full_time_hours_per_week
            * self.full_time_weeks_per_year)
    }

    /// Parse `period` and check that its year is covered by the wage schedule
    pub fn validate_period(&self, period: &str) -> Result<Period> {
        let parsed: Period = period.parse()?;
        if self.minimum_wages.contains_key(&parsed.year) {
            Ok(parsed)
        } else {
            Err(Error::InvalidPeriod {
                period: period.to_string(),
            })
        }
    }

    /// High-wage threshold for a region, falling back to the statewide threshold
    pub fn high_wage_threshold(&self, region: Option<&str>) -> Result<f64> {
        region
            .and_then(|r| self.regional_high_wage_thresholds.get(r).copied())
            .or(self.state_high_wage_threshold)
            .ok_or_else(|| Error::Config("no high-wage threshold configured".to_string()))
    }

    /// Representative series codes for `region`, if membership is configured
    #[must_use]
    pub fn series_membership(&self, region: &str) -> Option<&[String]> {
        self.region_series_codes.get(region).map(Vec::as_slice)
    }
}

impl fmt::Display for EstimatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimator Configuration:")?;
        if let (Some(first), Some(last)) = (
            self.minimum_wages.keys().next(),
            self.minimum_wages.keys().next_back(),
        ) {
            writeln!(f, "  Supported Years: {first}-{last}")?;
        }
        writeln!(
            f,
            "  Full Time: {} h/week x {} weeks",
            self.full_time_hours_per_week, self.full_time_weeks_per_year
        )?;
        if let Some(threshold) = self.state_high_wage_threshold {
            writeln!(f, "  State High-Wage Threshold: {threshold}")?;
        }
        for (region, threshold) in &self.regional_high_wage_thresholds {
            writeln!(f, "  {region} High-Wage Threshold: {threshold}")?;
        }
        writeln!(f, "  Minimum Sample Size: {}", self.min_sample_size)?;
        writeln!(
            f,
            "  Regions With Series Membership: {}",
            self.region_series_codes.len()
        )?;
        Ok(())
    }
}
