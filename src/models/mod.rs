//! Domain models for the high-wage estimation engine
//!
//! This module contains the survey worker panel, the administrative employment
//! panel, the industry cross-reference and the county geography index.

pub mod admin;
pub mod crosswalk;
pub mod geography;
pub mod types;
pub mod worker;

// Re-export commonly used types
pub use admin::{AdminSeriesRecord, CodeHierarchy};
pub use crosswalk::{CrossReferenceEntry, IndustryCrossReference, SurveyIndustry};
pub use geography::{CountyGeography, GeoCountyIndex};
pub use types::{CodeLevel, STATE_GEO, Tier};
pub use worker::WorkerRecord;
