//! County-to-geography reference table
//!
//! The index maps each county to the broader tiers it rolls up into. The fallback
//! estimator uses it when a county has no survey records of its own.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Broader geography assignments of one county
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyGeography {
    /// County name
    pub county: String,
    /// Economic region containing the county
    pub region: String,
    /// Statewide urban/rural class of the county
    pub urban_rural_class: String,
    /// Urban/rural class within the region
    pub regional_urban_rural_class: String,
}

/// Static lookup of county → broader tiers
#[derive(Debug, Clone, Default)]
pub struct GeoCountyIndex {
    counties: FxHashMap<String, CountyGeography>,
}

impl GeoCountyIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a list of county entries; later duplicates replace earlier ones
    pub fn from_entries(entries: impl IntoIterator<Item = CountyGeography>) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    /// Add or replace a county entry
    pub fn insert(&mut self, entry: CountyGeography) {
        self.counties.insert(entry.county.clone(), entry);
    }

    /// Look up a county
    #[must_use]
    pub fn get(&self, county: &str) -> Option<&CountyGeography> {
        self.counties.get(county)
    }

    /// Counties belonging to `region`, sorted by name
    #[must_use]
    pub fn counties_in_region(&self, region: &str) -> Vec<&CountyGeography> {
        let mut counties: Vec<&CountyGeography> = self
            .counties
            .values()
            .filter(|entry| entry.region == region)
            .collect();
        counties.sort_by(|a, b| a.county.cmp(&b.county));
        counties
    }

    /// Number of counties in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.counties.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }
}
