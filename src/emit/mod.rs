//! Chart document emission.
//!
//! This is the back end of the pipeline: preprocessed rows are turned
//! into an ordered [`Bar`] sequence, a layout is computed from the bar
//! count, and one of two emitters serializes a complete standalone
//! PGFPlots document. Rendering is pure — I/O happens only in
//! [`write_chart`], which renders the full document first and writes it
//! with a single call, so a failed render never leaves a partial file.

mod multi;
mod single;

use std::fs;

use crate::error::ChartError;
use crate::label::{escape_label, wrap_label};
use crate::request::{ChartKind, ChartRequest};
use crate::table::{self, Row};
use crate::value::{parse_value_lenient, parse_value_strict};

/// One data point: a vertical bar with its category label and value.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Numeric bar height.
    pub value: f64,
    /// Display label, already escaped and (optionally) line-wrapped.
    pub label: String,
    /// Raw category cell, used as the symbolic axis key in multi-color
    /// mode. Must not contain markup-breaking characters; that is the
    /// caller's contract.
    pub key: String,
}

/// Render the chart document for `request` as a string.
///
/// Validates the request, preprocesses the rows (column swap, order
/// reversal), and dispatches on [`ChartKind`]. Rows with fewer than two
/// cells are skipped. An empty table renders a complete document with an
/// empty series.
pub fn render_chart(rows: Vec<Row>, request: &ChartRequest) -> Result<String, ChartError> {
    request.validate()?;
    let rows = table::preprocess(rows, request.swap_columns, request.reverse_order);
    let document = match request.kind {
        ChartKind::Single => single::render(&single_bars(&rows, request)?, request),
        ChartKind::MultiColor => multi::render(&multi_bars(&rows, request)?, request),
    };
    Ok(document)
}

/// Render the chart document and write it to `request.output_file`.
///
/// The file handle is scoped to the single write and closed on every
/// path; nothing is written when rendering fails.
pub fn write_chart(rows: Vec<Row>, request: &ChartRequest) -> Result<(), ChartError> {
    let document = render_chart(rows, request)?;
    fs::write(&request.output_file, document)?;
    Ok(())
}

/// Single-series rows: cell 0 is the value, cell 1 the category label.
fn single_bars(rows: &[Row], request: &ChartRequest) -> Result<Vec<Bar>, ChartError> {
    rows.iter()
        .filter(|row| row.len() >= 2)
        .map(|row| {
            Ok(Bar {
                value: parse_value_strict(&row[0])?,
                label: wrap_label(&escape_label(&row[1]), request.x_label_max_line_length),
                key: row[1].clone(),
            })
        })
        .collect()
}

/// Multi-color rows: cell 0 is the category, cell 1 the value.
fn multi_bars(rows: &[Row], request: &ChartRequest) -> Result<Vec<Bar>, ChartError> {
    rows.iter()
        .filter(|row| row.len() >= 2)
        .map(|row| {
            Ok(Bar {
                value: parse_value_lenient(&row[1])?,
                label: wrap_label(&escape_label(&row[0]), request.x_label_max_line_length),
                key: row[0].clone(),
            })
        })
        .collect()
}

/// Format a coordinate value: whole numbers print without a decimal
/// point, everything else in its natural shortest form.
pub(crate) fn format_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
