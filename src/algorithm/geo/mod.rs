//! Geographic tiers and per-tier high-wage statistics
//!
//! The five tiers are described once, in [`tiers::TIER_DESCRIPTORS`], and every
//! per-tier computation iterates over that table.

pub mod aggregator;
pub mod stats;
pub mod tiers;

pub use aggregator::{GeoAggregator, compute_geo_stats};
pub use stats::{GeoStat, GeoStatTable, TierStats, WorkerGeoStats};
pub use tiers::{TIER_DESCRIPTORS, TierDescriptor, descent_from, descriptor};
