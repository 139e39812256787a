//! Administrative series → survey industry resolution
//!
//! A series carries up to five nested industry codes. Finer codes map to survey
//! industries more precisely, so resolution tries `sub4` first and falls back to
//! coarser levels until one of them is in the cross-reference.

use log::debug;

use crate::error::{Error, Result};
use crate::models::{AdminSeriesRecord, CodeLevel, IndustryCrossReference, SurveyIndustry};

/// A survey industry and the hierarchy level that produced the match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIndustry<'a> {
    /// Level of the matching administrative code
    pub level: CodeLevel,
    /// Matched survey industry
    pub industry: &'a SurveyIndustry,
}

/// Resolve a series to the most granular survey industry in the cross-reference.
///
/// Levels without a code never match, so they are passed over like any other miss.
#[must_use]
pub fn resolve<'a>(
    record: &AdminSeriesRecord,
    cross_reference: &'a IndustryCrossReference,
) -> Option<ResolvedIndustry<'a>> {
    CodeLevel::FINEST_FIRST.iter().find_map(|&level| {
        let code = record.industry_code_hierarchy.code(level)?;
        cross_reference
            .lookup(level, code)
            .map(|industry| ResolvedIndustry { level, industry })
    })
}

/// Like [`resolve`], failing with `IndustryNotResolved` when no level matches
pub fn resolve_or_err<'a>(
    record: &AdminSeriesRecord,
    cross_reference: &'a IndustryCrossReference,
) -> Result<ResolvedIndustry<'a>> {
    let resolved = resolve(record, cross_reference).ok_or_else(|| Error::IndustryNotResolved {
        series_code: record.series_code.clone(),
    })?;
    debug!(
        "Series {} resolved at {} level to survey industry {}",
        record.series_code, resolved.level, resolved.industry.industry_code
    );
    Ok(resolved)
}
