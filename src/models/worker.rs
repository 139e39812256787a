//! Survey worker model
//!
//! One `WorkerRecord` per sampled worker, carrying the worker's industry, every
//! geography tier it belongs to, its expansion weight and its annual wage.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::geography::CountyGeography;

/// A sampled worker from the survey panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRecord {
    /// Normalized survey industry code
    pub industry_code: String,
    /// Normalized industry title, when the ingestion step attached one
    #[serde(default)]
    pub industry_title: Option<String>,
    /// County of residence
    pub county: String,
    /// Economic region
    pub region: String,
    /// Statewide urban/rural class
    pub urban_rural_class: String,
    /// Urban/rural class within the region
    pub regional_urban_rural_class: String,
    /// Survey expansion weight
    pub sample_weight: f64,
    /// Annual wage income
    pub wage: f64,
}

impl WorkerRecord {
    /// Create a worker with every geography label set
    #[must_use]
    pub fn new(
        industry_code: impl Into<String>,
        geography: &CountyGeography,
        sample_weight: f64,
        wage: f64,
    ) -> Self {
        Self {
            industry_code: industry_code.into(),
            industry_title: None,
            county: geography.county.clone(),
            region: geography.region.clone(),
            urban_rural_class: geography.urban_rural_class.clone(),
            regional_urban_rural_class: geography.regional_urban_rural_class.clone(),
            sample_weight,
            wage,
        }
    }

    /// Attach an industry title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.industry_title = Some(title.into());
        self
    }

    /// The worker's county geography entry
    #[must_use]
    pub fn geography(&self) -> CountyGeography {
        CountyGeography {
            county: self.county.clone(),
            region: self.region.clone(),
            urban_rural_class: self.urban_rural_class.clone(),
            regional_urban_rural_class: self.regional_urban_rural_class.clone(),
        }
    }

    /// Check the record invariants (positive weight, non-negative wage, labels present)
    pub fn validate(&self, row: usize) -> Result<()> {
        let invalid = |reason: String| Err(Error::InvalidRecord { row, reason });

        if !(self.sample_weight.is_finite() && self.sample_weight > 0.0) {
            return invalid(format!("sample weight must be positive, got {}", self.sample_weight));
        }
        if !(self.wage.is_finite() && self.wage >= 0.0) {
            return invalid(format!("wage must be non-negative, got {}", self.wage));
        }
        if self.industry_code.is_empty() {
            return invalid("empty industry code".to_string());
        }
        let labels = [
            ("county", &self.county),
            ("region", &self.region),
            ("urban/rural", &self.urban_rural_class),
            ("regional urban/rural", &self.regional_urban_rural_class),
        ];
        if let Some((name, _)) = labels.iter().find(|(_, value)| value.is_empty()) {
            return invalid(format!("missing {name} label"));
        }
        Ok(())
    }
}
