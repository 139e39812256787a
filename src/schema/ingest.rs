//! Record batch → typed panel records
//!
//! Deserialization goes through `serde_arrow`. Textual join keys are normalized
//! here, once, so the algorithms can compare them directly.

use std::time::Instant;

use arrow::record_batch::RecordBatch;
use serde::Deserialize;

use crate::algorithm::normalize::{normalize_optional, normalize_title};
use crate::error::{Error, Result};
use crate::models::{
    AdminSeriesRecord, CodeHierarchy, CodeLevel, CountyGeography, CrossReferenceEntry,
    GeoCountyIndex, IndustryCrossReference, WorkerRecord,
};
use crate::schema::{
    ADMIN_COLUMNS, COUNTY_INDEX_COLUMNS, CROSS_REFERENCE_COLUMNS, WORKER_COLUMNS, check_columns,
    schema_fields, worker_schema,
};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Flat administrative row as stored in arrow
#[derive(Debug, Deserialize)]
struct AdminRow {
    area: String,
    date: String,
    series_code: String,
    #[serde(default)]
    title: Option<String>,
    employment_count: u64,
    #[serde(default)]
    main_code: Option<String>,
    #[serde(default)]
    sub1_code: Option<String>,
    #[serde(default)]
    sub2_code: Option<String>,
    #[serde(default)]
    sub3_code: Option<String>,
    #[serde(default)]
    sub4_code: Option<String>,
}

impl AdminRow {
    fn into_record(self) -> AdminSeriesRecord {
        let hierarchy = CodeHierarchy {
            main: trimmed(self.main_code),
            sub1: trimmed(self.sub1_code),
            sub2: trimmed(self.sub2_code),
            sub3: trimmed(self.sub3_code),
            sub4: trimmed(self.sub4_code),
        };
        let mut record = AdminSeriesRecord::new(
            self.area.trim(),
            self.date.trim(),
            self.series_code.trim(),
            self.employment_count,
            hierarchy,
        );
        record.title = normalize_optional(self.title.as_deref());
        record
    }
}

/// Cross-reference row; the level arrives as text
#[derive(Debug, Deserialize)]
struct CrossReferenceRow {
    level: String,
    admin_code: String,
    industry_code: String,
    title: String,
}

fn trimmed(code: Option<String>) -> Option<String> {
    code.map(|c| c.trim().to_string()).filter(|c| !c.is_empty())
}

/// Convert a survey worker batch, normalizing industry keys and validating rows
pub fn worker_records_from_batch(batch: &RecordBatch) -> Result<Vec<WorkerRecord>> {
    let start = Instant::now();
    log_operation_start("Converting record batch", "survey panel");
    check_columns(batch, &WORKER_COLUMNS)?;

    let mut records: Vec<WorkerRecord> = serde_arrow::from_record_batch(batch)?;
    for (row, record) in records.iter_mut().enumerate() {
        record.industry_code = normalize_title(&record.industry_code);
        record.industry_title = normalize_optional(record.industry_title.as_deref());
        for label in [
            &mut record.county,
            &mut record.region,
            &mut record.urban_rural_class,
            &mut record.regional_urban_rural_class,
        ] {
            *label = label.trim().to_string();
        }
        record.validate(row)?;
    }

    log_operation_complete("converted", "survey panel", records.len(), Some(start.elapsed()));
    Ok(records)
}

/// Convert an administrative series batch
pub fn admin_records_from_batch(batch: &RecordBatch) -> Result<Vec<AdminSeriesRecord>> {
    let start = Instant::now();
    log_operation_start("Converting record batch", "administrative panel");
    check_columns(batch, &ADMIN_COLUMNS)?;

    let rows: Vec<AdminRow> = serde_arrow::from_record_batch(batch)?;
    let records: Vec<AdminSeriesRecord> = rows.into_iter().map(AdminRow::into_record).collect();

    log_operation_complete(
        "converted",
        "administrative panel",
        records.len(),
        Some(start.elapsed()),
    );
    Ok(records)
}

/// Convert a cross-reference batch into a lookup table
pub fn cross_reference_from_batch(batch: &RecordBatch) -> Result<IndustryCrossReference> {
    check_columns(batch, &CROSS_REFERENCE_COLUMNS)?;

    let rows: Vec<CrossReferenceRow> = serde_arrow::from_record_batch(batch)?;
    let entries = rows
        .into_iter()
        .enumerate()
        .map(|(row, r)| {
            let level: CodeLevel = r
                .level
                .parse()
                .map_err(|reason| Error::InvalidRecord { row, reason })?;
            Ok(CrossReferenceEntry {
                level,
                admin_code: r.admin_code.trim().to_string(),
                industry_code: normalize_title(&r.industry_code),
                title: normalize_title(&r.title),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let table = IndustryCrossReference::from_entries(entries);
    log::debug!("Cross-reference holds {} admin codes", table.len());
    Ok(table)
}

/// Convert a county index batch
pub fn county_index_from_batch(batch: &RecordBatch) -> Result<GeoCountyIndex> {
    check_columns(batch, &COUNTY_INDEX_COLUMNS)?;
    let entries: Vec<CountyGeography> = serde_arrow::from_record_batch(batch)?;
    Ok(GeoCountyIndex::from_entries(entries))
}

/// Serialize worker records with the survey panel schema
pub fn worker_records_to_batch(records: &[WorkerRecord]) -> Result<RecordBatch> {
    let fields = schema_fields(&worker_schema());
    Ok(serde_arrow::to_record_batch(&fields, &records)?)
}
