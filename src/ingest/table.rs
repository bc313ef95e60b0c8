// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CSV stratigraphy tables, as exported from a spreadsheet.
//!
//! - A header row is required; column names are matched case-insensitively
//!   and in any order (see the alias table in the parent module).
//! - The delimiter is `,` unless the header line contains `;` and no `,`,
//!   which is what French-locale spreadsheets write. In that case decimal
//!   commas (`0,45`) are accepted too.
//! - Lines starting with `#` are comments.
//! - Extra columns are ignored.
//!
//! Rows are numbered from 1 (the first data row) in error messages.

use std::io::Write;

use super::{rows_to_stratigraphy, ColumnInput, LayerRow};
use crate::error::IngestError;
use crate::profile::ProfileConfig;
use crate::types::Stratigraphy;

/// (field name used in errors, accepted header names)
const REQUIRED_COLUMNS: [(&str, &[&str]); 4] = [
    ("top_elevation", &["top_elevation", "top_level", "top"]),
    ("bottom_elevation", &["bottom_elevation", "bottom_level", "bottom"]),
    ("unit_weight", &["unit_weight", "gamma"]),
    ("lateral_coefficient", &["lateral_coefficient", "k"]),
];

const LABEL_COLUMN: &[&str] = &["label", "title"];

/// Pick the delimiter from the first non-comment line.
fn sniff_delimiter(content: &str) -> u8 {
    let header = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or_default();
    if header.contains(';') && !header.contains(',') {
        b';'
    } else {
        b','
    }
}

fn find_column(headers: &::csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|name| h.trim().eq_ignore_ascii_case(name)))
}

fn parse_cell(
    record: &::csv::StringRecord,
    column: usize,
    row: usize,
    field: &'static str,
    decimal_comma: bool,
) -> Result<Option<f64>, IngestError> {
    let raw = record.get(column).unwrap_or_default().trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let normalized = if decimal_comma {
        raw.replace(',', ".")
    } else {
        raw.to_string()
    };
    normalized
        .parse::<f64>()
        .map(Some)
        .map_err(|_| IngestError::InvalidNumber {
            row,
            field,
            value: raw.to_string(),
        })
}

/// Parse a CSV stratigraphy table. The water table is left to the caller.
pub fn parse_csv_str(content: &str) -> Result<ColumnInput, IngestError> {
    let delimiter = sniff_delimiter(content);
    let decimal_comma = delimiter == b';';

    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .comment(Some(b'#'))
        .trim(::csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let mut columns = [0usize; 4];
    for (slot, (field, names)) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = find_column(&headers, names).ok_or(IngestError::MissingColumn { column: field })?;
    }
    let label_column = find_column(&headers, LABEL_COLUMN);

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = i + 1;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let cell = |slot: usize| {
            let (field, _) = REQUIRED_COLUMNS[slot];
            parse_cell(&record, columns[slot], row, field, decimal_comma)
        };
        rows.push(LayerRow {
            top_elevation: cell(0)?,
            bottom_elevation: cell(1)?,
            unit_weight: cell(2)?,
            lateral_coefficient: cell(3)?,
            label: label_column
                .and_then(|c| record.get(c))
                .map(|s| s.trim().to_string()),
        });
    }

    Ok(ColumnInput {
        stratigraphy: rows_to_stratigraphy(rows)?,
        water_table: None,
        config: ProfileConfig::default(),
    })
}

/// Write a column as a CSV table with the spreadsheet column names.
pub fn write_csv_layers<W: Write>(column: &Stratigraphy, out: W) -> Result<(), IngestError> {
    let mut writer = ::csv::Writer::from_writer(out);
    writer.write_record(["top_level", "bottom_level", "unit_weight", "k", "title"])?;
    for layer in column.layers() {
        writer.write_record([
            layer.top_elevation.to_string(),
            layer.bottom_elevation.to_string(),
            layer.unit_weight.to_string(),
            layer.lateral_coefficient.to_string(),
            layer.label.clone(),
        ])?;
    }
    writer.flush().map_err(::csv::Error::from)?;
    Ok(())
}
