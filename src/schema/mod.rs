//! Arrow schemas of the input panels
//!
//! Panels arrive as arrow `RecordBatch`es. This module names the columns each
//! panel needs, checks them and converts batches into typed records.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;

use crate::error::{Error, Result};

pub mod ingest;

pub use ingest::{
    admin_records_from_batch, county_index_from_batch, cross_reference_from_batch,
    worker_records_from_batch, worker_records_to_batch,
};

/// Columns a survey worker batch must carry
pub const WORKER_COLUMNS: [&str; 7] = [
    "industry_code",
    "county",
    "region",
    "urban_rural_class",
    "regional_urban_rural_class",
    "sample_weight",
    "wage",
];

/// Columns an administrative series batch must carry
pub const ADMIN_COLUMNS: [&str; 4] = ["area", "date", "series_code", "employment_count"];

/// Optional hierarchy columns of an administrative batch, coarsest first
pub const ADMIN_CODE_COLUMNS: [&str; 5] =
    ["main_code", "sub1_code", "sub2_code", "sub3_code", "sub4_code"];

/// Columns a cross-reference batch must carry
pub const CROSS_REFERENCE_COLUMNS: [&str; 4] = ["level", "admin_code", "industry_code", "title"];

/// Columns a county index batch must carry
pub const COUNTY_INDEX_COLUMNS: [&str; 4] = [
    "county",
    "region",
    "urban_rural_class",
    "regional_urban_rural_class",
];

fn utf8(name: &str, nullable: bool) -> Field {
    Field::new(name, DataType::Utf8, nullable)
}

/// Arrow schema of the survey worker panel
#[must_use]
pub fn worker_schema() -> Schema {
    Schema::new(vec![
        utf8("industry_code", false),
        utf8("industry_title", true),
        utf8("county", false),
        utf8("region", false),
        utf8("urban_rural_class", false),
        utf8("regional_urban_rural_class", false),
        Field::new("sample_weight", DataType::Float64, false),
        Field::new("wage", DataType::Float64, false),
    ])
}

/// Arrow schema of the administrative employment panel
#[must_use]
pub fn admin_schema() -> Schema {
    let mut fields = vec![
        utf8("area", false),
        utf8("date", false),
        utf8("series_code", false),
        utf8("title", true),
        Field::new("employment_count", DataType::UInt64, false),
    ];
    fields.extend(ADMIN_CODE_COLUMNS.iter().map(|name| utf8(name, true)));
    Schema::new(fields)
}

/// Arrow schema of the industry cross-reference
#[must_use]
pub fn cross_reference_schema() -> Schema {
    Schema::new(
        CROSS_REFERENCE_COLUMNS
            .iter()
            .map(|name| utf8(name, false))
            .collect::<Vec<_>>(),
    )
}

/// Schema fields in the form `serde_arrow` expects
#[must_use]
pub fn schema_fields(schema: &Schema) -> Vec<FieldRef> {
    schema.fields().iter().map(Arc::clone).collect()
}

/// Fail with `ColumnNotFound` for the first required column the batch lacks
pub fn check_columns(batch: &RecordBatch, required: &[&str]) -> Result<()> {
    let schema = batch.schema();
    match required
        .iter()
        .find(|name| schema.column_with_name(name).is_none())
    {
        Some(missing) => Err(Error::ColumnNotFound {
            column: (*missing).to_string(),
        }),
        None => Ok(()),
    }
}
