//! Period keys for administrative observations
//!
//! Administrative records are keyed by month (`YYYY-MM`). Full dates
//! (`YYYY-MM-DD`) are accepted and truncated to their month.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A monthly period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    /// Calendar year
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
}

impl Period {
    /// Create a period, validating the month
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| Self::from_date(&date))
            .ok_or_else(|| Error::InvalidPeriod {
                period: format!("{year}-{month:02}"),
            })
    }

    /// Period containing `date`
    #[must_use]
    pub fn from_date(date: &NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || Error::InvalidPeriod {
            period: s.to_string(),
        };

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self::from_date(&date));
        }

        NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map(|date| Self::from_date(&date))
            .map_err(|_| invalid())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
