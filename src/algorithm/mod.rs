//! Algorithm implementations for high-wage employment estimation
//!
//! This module contains the per-tier aggregation, the geographic fallback, the
//! industry resolver and the projection that combines them.

pub mod fallback;
pub mod filters;
pub mod geo;
pub mod normalize;
pub mod projection;
pub mod resolver;

pub use fallback::{Estimate, FallbackEstimator, TierCandidate, estimate};
pub use filters::{FilterCriteria, retain_full_time, retain_representative_series};
pub use geo::{GeoAggregator, GeoStat, GeoStatTable, compute_geo_stats};
pub use normalize::normalize_title;
pub use projection::{HighWageProjector, Projection, ProjectionQuery, SeriesPoint, project};
pub use resolver::{ResolvedIndustry, resolve, resolve_or_err};
