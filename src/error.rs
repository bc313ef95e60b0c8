// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for column construction, ingestion and export.
//!
//! An elevation outside the column is NOT an error: the pressure functions
//! return `None` for it. These enums cover the things that are actually wrong:
//! a malformed stratigraphy, an input table missing something, or a sink that
//! failed to write.

use std::path::PathBuf;
use thiserror::Error;

/// A stratigraphy that violates the column invariants.
///
/// Raised by [`crate::Stratigraphy::new`] so that a malformed table fails fast
/// instead of being integrated into plausible-looking numbers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StratigraphyError {
    /// The column has no layers.
    #[error("stratigraphy has no layers")]
    Empty,

    /// A layer field is NaN or infinite.
    #[error("layer {index}: {field} is not a finite number")]
    NonFinite { index: usize, field: &'static str },

    /// `top_elevation <= bottom_elevation`.
    #[error("layer {index}: top {top} must be above bottom {bottom}")]
    InvertedLayer { index: usize, top: f64, bottom: f64 },

    /// Layer `index` starts below the bottom of the layer above it.
    #[error("gap above layer {index}: layer above ends at {above_bottom}, layer starts at {below_top}")]
    Gap {
        index: usize,
        above_bottom: f64,
        below_top: f64,
    },

    /// Layer `index` starts above the bottom of the layer above it.
    #[error("layer {index} overlaps the layer above: layer above ends at {above_bottom}, layer starts at {below_top}")]
    Overlap {
        index: usize,
        above_bottom: f64,
        below_top: f64,
    },

    /// Unit weights integrate into overburden and must not be negative.
    #[error("layer {index}: unit weight {value} is negative")]
    NegativeUnitWeight { index: usize, value: f64 },

    /// Lateral coefficients scale effective stress and must not be negative.
    #[error("layer {index}: lateral coefficient {value} is negative")]
    NegativeLateralCoefficient { index: usize, value: f64 },

    /// A quantity derived from finite fields overflows `f64`, e.g. the
    /// weight of a very thick layer or the overburden accumulated down to it.
    #[error("layer {index}: {quantity} overflows to a non-finite value")]
    Overflow {
        index: usize,
        quantity: &'static str,
    },

    /// The water table elevation is NaN or infinite.
    #[error("water table elevation {0} is not a finite number")]
    NonFiniteWaterTable(f64),
}

/// Failure while turning an input file into a column.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid column JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV table: {0}")]
    Csv(#[from] csv::Error),

    /// The table header lacks one of the required columns.
    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },

    /// A row has an empty cell in a required column.
    #[error("row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: '{value}' is not a number for field '{field}'")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// No water table in the file and none supplied by the caller.
    #[error("no water table elevation given (set \"water_table\" or pass --water-table)")]
    MissingWaterTable,

    #[error("unsupported input format '{0}' (expected json or csv)")]
    UnsupportedFormat(String),

    #[error("invalid profile setting: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Stratigraphy(#[from] StratigraphyError),
}

/// Failure inside a [`crate::ProfileSink`].
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A sample arrived before `begin` described the column.
    #[error("sink received a sample before begin")]
    NotStarted,
}
