//! Administrative establishment-employment model

use serde::{Deserialize, Serialize};

use crate::models::types::CodeLevel;

/// Nested industry codes of an administrative series, coarsest to finest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeHierarchy {
    /// Coarsest code
    pub main: Option<String>,
    /// First sub-level
    pub sub1: Option<String>,
    /// Second sub-level
    pub sub2: Option<String>,
    /// Third sub-level
    pub sub3: Option<String>,
    /// Finest code
    pub sub4: Option<String>,
}

impl CodeHierarchy {
    /// Hierarchy with only the main code set
    #[must_use]
    pub fn main(code: impl Into<String>) -> Self {
        Self {
            main: Some(code.into()),
            ..Self::default()
        }
    }

    /// Set the code at `level`
    #[must_use]
    pub fn with(mut self, level: CodeLevel, code: impl Into<String>) -> Self {
        let code = Some(code.into());
        match level {
            CodeLevel::Main => self.main = code,
            CodeLevel::Sub1 => self.sub1 = code,
            CodeLevel::Sub2 => self.sub2 = code,
            CodeLevel::Sub3 => self.sub3 = code,
            CodeLevel::Sub4 => self.sub4 = code,
        }
        self
    }

    /// Code at `level`, if the series has one
    #[must_use]
    pub fn code(&self, level: CodeLevel) -> Option<&str> {
        match level {
            CodeLevel::Main => self.main.as_deref(),
            CodeLevel::Sub1 => self.sub1.as_deref(),
            CodeLevel::Sub2 => self.sub2.as_deref(),
            CodeLevel::Sub3 => self.sub3.as_deref(),
            CodeLevel::Sub4 => self.sub4.as_deref(),
        }
    }
}

/// One monthly employment observation for an area and industry series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSeriesRecord {
    /// Administrative area (county name)
    pub area: String,
    /// Period key, `YYYY-MM`
    pub date: String,
    /// Administrative series identifier
    pub series_code: String,
    /// Normalized series title
    #[serde(default)]
    pub title: Option<String>,
    /// Reported employment
    pub employment_count: u64,
    /// Nested industry codes
    pub industry_code_hierarchy: CodeHierarchy,
}

impl AdminSeriesRecord {
    /// Create an observation
    #[must_use]
    pub fn new(
        area: impl Into<String>,
        date: impl Into<String>,
        series_code: impl Into<String>,
        employment_count: u64,
        industry_code_hierarchy: CodeHierarchy,
    ) -> Self {
        Self {
            area: area.into(),
            date: date.into(),
            series_code: series_code.into(),
            title: None,
            employment_count,
            industry_code_hierarchy,
        }
    }
}
