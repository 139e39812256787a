//! Console output utilities
//!
//! This module provides formatted console output for panel diagnostics and
//! projected time series.

use std::fmt::Write as _;

use arrow::record_batch::RecordBatch;
use serde::Serialize;

use crate::algorithm::projection::SeriesPoint;

/// Null count of one batch column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnNulls {
    /// Column name
    pub column: String,
    /// Number of null values
    pub nulls: usize,
    /// Number of rows in the batch
    pub rows: usize,
}

impl ColumnNulls {
    /// Share of null values, 0-100
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.nulls as f64 * 100.0 / self.rows as f64
        }
    }
}

/// Null counts for every column of a batch, in schema order
#[must_use]
pub fn null_summary(batch: &RecordBatch) -> Vec<ColumnNulls> {
    batch
        .schema()
        .fields()
        .iter()
        .zip(batch.columns())
        .map(|(field, column)| ColumnNulls {
            column: field.name().clone(),
            nulls: column.null_count(),
            rows: batch.num_rows(),
        })
        .collect()
}

/// Render a projected series as a text table, one line per period
#[must_use]
pub fn render_series(points: &[SeriesPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>12} {:>8} {:>12}  tier",
        "period", "employment", "pct", "projected"
    );
    for point in points {
        let _ = match &point.outcome {
            Ok(p) => writeln!(
                out,
                "{:<10} {:>12.1} {:>8.2} {:>12.1}  {}",
                point.date,
                p.employment_count,
                p.percentage,
                p.projected_count,
                p.tier()
            ),
            Err(e) => writeln!(
                out,
                "{:<10} {:>12} {:>8} {:>12}  {}",
                point.date,
                "-",
                "-",
                "-",
                e.code()
            ),
        };
    }
    out
}
