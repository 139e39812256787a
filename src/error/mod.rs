//! Error handling for the estimation engine.
//!
//! Every "no answer" outcome of an estimate or projection is an explicit variant so
//! that callers can tell a missing estimate apart from an estimate of zero.

use std::io;

use arrow::error::ArrowError;

use crate::models::Tier;

/// Errors produced by ingestion, configuration, and estimation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested period is malformed or outside the supported range
    #[error("Invalid period: {period}")]
    InvalidPeriod {
        /// The period as requested
        period: String,
    },

    /// No administrative records exist for the requested date
    #[error("No administrative records for date {date}")]
    DateNotFound {
        /// The requested date
        date: String,
    },

    /// No cross-reference level matched the administrative record
    #[error("Industry series {series_code} could not be resolved to a survey industry")]
    IndustryNotResolved {
        /// Series code of the administrative record
        series_code: String,
    },

    /// The geography/industry combination is absent from the survey stats
    #[error("No survey data for industry '{industry}' in '{area}'")]
    CountyOrIndustryNotFound {
        /// Requested county or area
        area: String,
        /// Requested survey industry code (may be empty for area-only lookups)
        industry: String,
    },

    /// Every tier down through state fell below the minimum sample size
    #[error("Not enough data for '{industry}' in '{area}' (minimum sample {min_sample_size})")]
    NotEnoughData {
        /// Requested county or area
        area: String,
        /// Survey industry code
        industry: String,
        /// Threshold that no tier satisfied
        min_sample_size: usize,
    },

    /// The chosen tier has zero total weight so its percentage is undefined
    #[error("High-wage percentage undefined at {tier} tier '{geo_value}' (zero total weight)")]
    UndefinedPercentage {
        /// Tier selected by the fallback
        tier: Tier,
        /// Geography value within the tier
        geo_value: String,
    },

    /// A required column is missing from an input table
    #[error("Column '{column}' not found")]
    ColumnNotFound {
        /// Missing column name
        column: String,
    },

    /// An input row violates a record invariant
    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord {
        /// Zero-based row index within the input
        row: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Row deserialization error
    #[error("Arrow deserialization error: {0}")]
    SerdeArrow(#[from] serde_arrow::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this error means "no estimate exists" for a well-formed query.
    ///
    /// Batch callers use this to skip a date or area without aborting the batch.
    #[must_use]
    pub fn is_no_answer(&self) -> bool {
        matches!(
            self,
            Self::DateNotFound { .. }
                | Self::IndustryNotResolved { .. }
                | Self::CountyOrIndustryNotFound { .. }
                | Self::NotEnoughData { .. }
                | Self::UndefinedPercentage { .. }
        )
    }

    /// Short machine-readable code for reporting
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPeriod { .. } => "invalid_period",
            Self::DateNotFound { .. } => "date_not_found",
            Self::IndustryNotResolved { .. } => "industry_not_resolved",
            Self::CountyOrIndustryNotFound { .. } => "not_found",
            Self::NotEnoughData { .. } => "not_enough_data",
            Self::UndefinedPercentage { .. } => "undefined_percentage",
            Self::ColumnNotFound { .. } => "column_not_found",
            Self::InvalidRecord { .. } => "invalid_record",
            Self::Config(_) => "config",
            Self::Arrow(_) => "arrow",
            Self::SerdeArrow(_) => "serde_arrow",
            Self::Json(_) => "json",
            Self::Io(_) => "io",
        }
    }
}

/// Result type for estimation operations
pub type Result<T> = std::result::Result<T, Error>;
