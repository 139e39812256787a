//! High-wage employment estimation from a weighted worker survey and an
//! administrative employment panel.
//!
//! The survey panel is aggregated into per-tier high-wage statistics, an
//! administrative series is resolved to a survey industry, and the series'
//! employment is multiplied by the high-wage share found at the finest
//! geographic tier with enough sampled workers.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use config::EstimatorConfig;
pub use error::{Error, Result};
pub use models::{
    AdminSeriesRecord, CodeHierarchy, CodeLevel, CountyGeography, CrossReferenceEntry,
    GeoCountyIndex, IndustryCrossReference, STATE_GEO, SurveyIndustry, Tier, WorkerRecord,
};

pub use algorithm::{
    Estimate, FallbackEstimator, GeoAggregator, GeoStat, GeoStatTable, HighWageProjector,
    Projection, ProjectionQuery, SeriesPoint, compute_geo_stats, estimate, normalize_title,
    project, resolve,
};

// Arrow types
pub use arrow::record_batch::RecordBatch;
