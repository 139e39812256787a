//! Administrative-to-survey industry cross-reference

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::types::CodeLevel;

/// Survey industry matched by a cross-reference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyIndustry {
    /// Survey industry code (join key into the worker panel)
    pub industry_code: String,
    /// Human-readable industry title
    pub title: String,
}

/// One row of the cross-walk table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReferenceEntry {
    /// Hierarchy level the administrative code belongs to
    pub level: CodeLevel,
    /// Administrative code at that level
    pub admin_code: String,
    /// Survey industry code
    pub industry_code: String,
    /// Survey industry title
    pub title: String,
}

/// Lookup of (hierarchy level, administrative code) → survey industry
#[derive(Debug, Clone, Default)]
pub struct IndustryCrossReference {
    entries: FxHashMap<(CodeLevel, String), SurveyIndustry>,
}

impl IndustryCrossReference {
    /// Create an empty cross-reference
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from cross-walk rows; the first row for a key wins
    pub fn from_entries(entries: impl IntoIterator<Item = CrossReferenceEntry>) -> Self {
        let mut xref = Self::new();
        for entry in entries {
            xref.insert(entry);
        }
        xref
    }

    /// Add a cross-walk row, keeping an existing mapping for the same key
    pub fn insert(&mut self, entry: CrossReferenceEntry) {
        self.entries
            .entry((entry.level, entry.admin_code))
            .or_insert(SurveyIndustry {
                industry_code: entry.industry_code,
                title: entry.title,
            });
    }

    /// Exact lookup at one level
    #[must_use]
    pub fn lookup(&self, level: CodeLevel, admin_code: &str) -> Option<&SurveyIndustry> {
        self.entries.get(&(level, admin_code.to_string()))
    }

    /// Number of mapped codes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no codes are mapped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
