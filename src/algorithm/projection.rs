//! High-wage employment projection
//!
//! Combines the administrative employment count of a series with the survey
//! high-wage percentage of the industry it resolves to:
//! `projected = employment * percentage / 100`.

use std::collections::BTreeSet;
use std::time::Instant;

use itertools::{Either, Itertools};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::fallback::{Estimate, FallbackEstimator};
use crate::algorithm::geo::stats::GeoStatTable;
use crate::algorithm::resolver::{ResolvedIndustry, resolve_or_err};
use crate::config::EstimatorConfig;
use crate::error::{Error, Result};
use crate::models::{AdminSeriesRecord, CodeLevel, GeoCountyIndex, IndustryCrossReference, Tier};
use crate::utils::logging::{
    finish_progress_bar, log_operation_complete, log_operation_start, optional_progress_bar,
};
use crate::utils::period::Period;

/// Area, period and series to project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionQuery {
    /// County name, or region name for [`HighWageProjector::project_region`]
    pub area: String,
    /// Period key, `YYYY-MM` or `YYYY-MM-DD`
    pub date: String,
    /// Administrative series identifier
    pub series_code: String,
}

impl ProjectionQuery {
    /// Create a query
    #[must_use]
    pub fn new(
        area: impl Into<String>,
        date: impl Into<String>,
        series_code: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            date: date.into(),
            series_code: series_code.into(),
        }
    }

    /// The same area and series at another date
    #[must_use]
    pub fn at(&self, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..self.clone()
        }
    }
}

/// A projected high-wage employment count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    /// Area projected
    pub area: String,
    /// Period projected
    pub period: Period,
    /// Administrative series projected
    pub series_code: String,
    /// Employment count the percentage was applied to
    pub employment_count: f64,
    /// High-wage percentage, 0-100
    pub percentage: f64,
    /// `employment_count * percentage / 100`
    pub projected_count: f64,
    /// Cross-reference title of the resolved survey industry
    pub industry_title: String,
    /// Hierarchy level whose code resolved the series
    pub resolved_level: CodeLevel,
    /// The fallback estimate behind the percentage
    pub estimate: Estimate,
}

impl Projection {
    /// Tier whose statistics supplied the percentage
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.estimate.tier
    }
}

/// One period of a projected time series
#[derive(Debug)]
pub struct SeriesPoint {
    /// Period key as found in the administrative panel
    pub date: String,
    /// Projection for that period, or why none could be made
    pub outcome: Result<Projection>,
}

/// Projects high-wage employment from the administrative panel
#[derive(Debug, Clone, Copy)]
pub struct HighWageProjector<'a> {
    admin_records: &'a [AdminSeriesRecord],
    cross_reference: &'a IndustryCrossReference,
    county_index: &'a GeoCountyIndex,
    estimator: FallbackEstimator<'a>,
    config: &'a EstimatorConfig,
}

impl<'a> HighWageProjector<'a> {
    /// Projector over read-only panels
    #[must_use]
    pub fn new(
        admin_records: &'a [AdminSeriesRecord],
        survey_stats: &'a GeoStatTable,
        cross_reference: &'a IndustryCrossReference,
        county_index: &'a GeoCountyIndex,
        config: &'a EstimatorConfig,
    ) -> Self {
        Self {
            admin_records,
            cross_reference,
            county_index,
            estimator: FallbackEstimator::from_config(survey_stats, county_index, config),
            config,
        }
    }

    /// Records of the requested period; `DateNotFound` when there are none
    fn records_on(&self, query: &ProjectionQuery) -> Result<(Period, Vec<&'a AdminSeriesRecord>)> {
        let period = self.config.validate_period(&query.date)?;
        let on_date: Vec<&'a AdminSeriesRecord> = self
            .admin_records
            .iter()
            .filter(|r| r.date.parse::<Period>().is_ok_and(|p| p == period))
            .collect();
        if on_date.is_empty() {
            return Err(Error::DateNotFound {
                date: query.date.clone(),
            });
        }
        Ok((period, on_date))
    }

    fn not_found(query: &ProjectionQuery) -> Error {
        Error::CountyOrIndustryNotFound {
            area: query.area.clone(),
            industry: query.series_code.clone(),
        }
    }

    /// Project high-wage employment for a county series in one period
    pub fn project(&self, query: &ProjectionQuery) -> Result<Projection> {
        let (period, on_date) = self.records_on(query)?;
        let matching: Vec<&AdminSeriesRecord> = on_date
            .into_iter()
            .filter(|r| r.area == query.area && r.series_code == query.series_code)
            .collect();
        let Some(first) = matching.first() else {
            return Err(Self::not_found(query));
        };

        let resolved = resolve_or_err(first, self.cross_reference)?;
        let employment = mean_employment(&matching);
        let estimate = self
            .estimator
            .estimate(&query.area, &resolved.industry.industry_code)?;
        Ok(Self::combine(query, period, employment, &resolved, estimate))
    }

    /// Project high-wage employment for a series summed over a region's counties.
    ///
    /// Each county contributes its mean employment for the period; the percentage
    /// comes from the region's own fallback chain.
    pub fn project_region(&self, query: &ProjectionQuery) -> Result<Projection> {
        let (period, on_date) = self.records_on(query)?;
        let region = query.area.as_str();
        let mut by_county: FxHashMap<&str, Vec<&AdminSeriesRecord>> = FxHashMap::default();
        for record in on_date {
            let in_region = self
                .county_index
                .get(&record.area)
                .is_some_and(|g| g.region == region);
            if in_region && record.series_code == query.series_code {
                by_county.entry(record.area.as_str()).or_default().push(record);
            }
        }
        let Some(first) = by_county.values().flatten().next() else {
            return Err(Self::not_found(query));
        };

        let resolved = resolve_or_err(first, self.cross_reference)?;
        let employment: f64 = by_county.values().map(|records| mean_employment(records)).sum();
        let estimate = self
            .estimator
            .estimate_region(region, &resolved.industry.industry_code)?;
        Ok(Self::combine(query, period, employment, &resolved, estimate))
    }

    /// Project every period of the administrative panel for one area and series.
    ///
    /// Dates are grouped by month, so `2021-03` and `2021-03-01` yield a single
    /// point keyed `2021-03`. Periods are projected in parallel and returned in
    /// chronological order, followed by any unparseable dates. A period that
    /// cannot be projected keeps its error instead of failing the series.
    #[must_use]
    pub fn project_series(
        &self,
        area: &str,
        series_code: &str,
        region: bool,
    ) -> Vec<SeriesPoint> {
        let start = Instant::now();
        let subject = format!("{area} / {series_code}");
        log_operation_start("Projecting series", &subject);

        let (periods, unparsed): (BTreeSet<Period>, BTreeSet<&str>) =
            self.admin_records.iter().partition_map(|r| match r.date.parse::<Period>() {
                Ok(period) => Either::Left(period),
                Err(_) => Either::Right(r.date.as_str()),
            });
        let periods: Vec<Period> = periods.into_iter().collect();

        let pb = optional_progress_bar(
            self.config.show_progress,
            periods.len() as u64,
            Some("Projecting periods"),
        );
        let base = ProjectionQuery::new(area, "", series_code);
        let mut points: Vec<SeriesPoint> = periods
            .par_iter()
            .map(|period| {
                let date = period.to_string();
                let query = base.at(date.as_str());
                let outcome = if region {
                    self.project_region(&query)
                } else {
                    self.project(&query)
                };
                pb.inc(1);
                SeriesPoint { date, outcome }
            })
            .collect();
        points.extend(unparsed.into_iter().map(|raw| SeriesPoint {
            date: raw.to_string(),
            outcome: Err(Error::InvalidPeriod {
                period: raw.to_string(),
            }),
        }));
        finish_progress_bar(&pb, Some("Projection complete"));

        let failed = points.iter().filter(|p| p.outcome.is_err()).count();
        if failed > 0 {
            log::warn!(
                "{failed} of {} periods could not be projected for {subject}",
                points.len()
            );
        }
        log_operation_complete("projected", &subject, points.len(), Some(start.elapsed()));
        points
    }

    fn combine(
        query: &ProjectionQuery,
        period: Period,
        employment: f64,
        resolved: &ResolvedIndustry<'_>,
        estimate: Estimate,
    ) -> Projection {
        Projection {
            area: query.area.clone(),
            period,
            series_code: query.series_code.clone(),
            employment_count: employment,
            percentage: estimate.percentage,
            projected_count: employment * estimate.percentage / 100.0,
            industry_title: resolved.industry.title.clone(),
            resolved_level: resolved.level,
            estimate,
        }
    }
}

/// Mean reported employment of duplicate observations
fn mean_employment(records: &[&AdminSeriesRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(|r| r.employment_count as f64).sum();
    total / records.len() as f64
}

/// Project high-wage employment for one county series and period.
///
/// Uses the default wage schedule to bound the accepted periods.
pub fn project(
    admin_records: &[AdminSeriesRecord],
    survey_stats: &GeoStatTable,
    cross_reference: &IndustryCrossReference,
    county_index: &GeoCountyIndex,
    query: &ProjectionQuery,
    min_sample_size: usize,
) -> Result<Projection> {
    let config = EstimatorConfig::default().with_min_sample_size(min_sample_size);
    HighWageProjector::new(
        admin_records,
        survey_stats,
        cross_reference,
        county_index,
        &config,
    )
    .project(query)
}
