//! Common domain type definitions
//!
//! This module contains the enum types shared by the survey and administrative
//! models: geography tiers and industry code hierarchy levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geography value used for the state tier (there is exactly one state)
pub const STATE_GEO: &str = "California";

/// Geography granularity at which survey statistics are aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Individual county (finest)
    County,
    /// Urban/rural class within a region
    RegionalUrbanRural,
    /// Economic region
    Region,
    /// Statewide urban/rural class
    UrbanRural,
    /// Whole state (coarsest)
    State,
}

impl Tier {
    /// All tiers from finest to coarsest, the fixed fallback precedence
    pub const DESCENT: [Self; 5] = [
        Self::County,
        Self::RegionalUrbanRural,
        Self::Region,
        Self::UrbanRural,
        Self::State,
    ];

    /// Stable snake-case name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::County => "county",
            Self::RegionalUrbanRural => "regional_urban_rural",
            Self::Region => "region",
            Self::UrbanRural => "urban_rural",
            Self::State => "state",
        }
    }

    /// Position in [`Tier::DESCENT`]; lower is finer
    #[must_use]
    pub fn rank(self) -> usize {
        match self {
            Self::County => 0,
            Self::RegionalUrbanRural => 1,
            Self::Region => 2,
            Self::UrbanRural => 3,
            Self::State => 4,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "county" => Ok(Self::County),
            "regional_urban_rural" | "regional urban/rural" => Ok(Self::RegionalUrbanRural),
            "region" => Ok(Self::Region),
            "urban_rural" | "urban/rural" | "rural/urban" => Ok(Self::UrbanRural),
            "state" => Ok(Self::State),
            other => Err(format!("unknown tier '{other}'")),
        }
    }
}

/// Level in the administrative industry code hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeLevel {
    /// Coarsest industry code
    Main,
    /// First sub-level
    Sub1,
    /// Second sub-level
    Sub2,
    /// Third sub-level
    Sub3,
    /// Fourth sub-level (finest)
    Sub4,
}

impl CodeLevel {
    /// Resolution order, finest first
    pub const FINEST_FIRST: [Self; 5] = [
        Self::Sub4,
        Self::Sub3,
        Self::Sub2,
        Self::Sub1,
        Self::Main,
    ];

    /// Stable snake-case name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Sub1 => "sub1",
            Self::Sub2 => "sub2",
            Self::Sub3 => "sub3",
            Self::Sub4 => "sub4",
        }
    }
}

impl fmt::Display for CodeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CodeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "").as_str() {
            "main" => Ok(Self::Main),
            "sub1" => Ok(Self::Sub1),
            "sub2" => Ok(Self::Sub2),
            "sub3" => Ok(Self::Sub3),
            "sub4" => Ok(Self::Sub4),
            other => Err(format!("unknown code level '{other}'")),
        }
    }
}
