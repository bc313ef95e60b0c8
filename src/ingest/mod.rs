// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a column from a file.
//!
//! Two formats, picked by extension unless the caller forces one:
//!
//! | Format | Extension | Carries                                        |
//! |--------|-----------|------------------------------------------------|
//! | JSON   | `.json`   | layers, water table, γw, boundary offset       |
//! | CSV    | `.csv`    | layers only (water table comes from the caller)|
//!
//! Both accept the same column names for a layer:
//!
//! | Field                 | Accepted names                                   |
//! |-----------------------|--------------------------------------------------|
//! | top elevation         | `top_elevation`, `top_level`, `top`              |
//! | bottom elevation      | `bottom_elevation`, `bottom_level`, `bottom`     |
//! | unit weight           | `unit_weight`, `gamma`                           |
//! | lateral coefficient   | `lateral_coefficient`, `k`                       |
//! | label (optional)      | `label`, `title`                                 |
//!
//! A missing value is reported with its row and field name rather than being
//! defaulted; only the label may be left out.

pub mod json;
pub mod table;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::IngestError;
use crate::profile::ProfileConfig;
use crate::types::{Layer, Stratigraphy, WaterTable};

pub use json::{parse_json_str, write_json_column, ColumnDocument};
pub use table::{parse_csv_str, write_csv_layers};

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for InputFormat {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "csv" => Ok(InputFormat::Csv),
            other => Err(IngestError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A column as read from a file: the layers plus whatever settings the file
/// carried.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInput {
    pub stratigraphy: Stratigraphy,
    pub water_table: Option<WaterTable>,
    pub config: ProfileConfig,
}

/// The worked example: `(top, bottom, unit_weight, k, label)`, shallowest first.
pub(crate) const REFERENCE_LAYERS: [(f64, f64, f64, f64, &str); 3] = [
    (35.0, 28.0, 18.0, 0.5, "Remblais"),
    (28.0, 20.0, 20.0, 0.45, "Marnes"),
    (20.0, 12.0, 21.0, 0.3, "Alluvions"),
];

/// Groundwater level of the worked example (m NGF).
pub(crate) const REFERENCE_WATER_TABLE: f64 = 26.0;

/// Unvalidated layers of [`REFERENCE_LAYERS`].
pub(crate) fn reference_layers() -> Vec<Layer> {
    REFERENCE_LAYERS
        .iter()
        .map(|&(top, bottom, unit_weight, k, label)| Layer::new(top, bottom, unit_weight, k, label))
        .collect()
}

impl ColumnInput {
    /// The worked example used throughout the hand-calculation notes:
    /// fill over marl over alluvium, groundwater at 26 m NGF.
    pub fn reference() -> Self {
        Self {
            stratigraphy: Stratigraphy::new(reference_layers())
                .unwrap_or_else(|e| unreachable!("reference column is valid: {e}")),
            water_table: WaterTable::new(REFERENCE_WATER_TABLE).ok(),
            config: ProfileConfig::default(),
        }
    }

    /// The caller's water table if given, else the file's.
    pub fn water_table_or(&self, override_elevation: Option<f64>) -> Result<WaterTable, IngestError> {
        match override_elevation {
            Some(z) => Ok(WaterTable::new(z)?),
            None => self.water_table.ok_or(IngestError::MissingWaterTable),
        }
    }
}

/// Read and validate a column file.
///
/// `format` overrides the extension-based guess.
pub fn load_column(path: &Path, format: Option<InputFormat>) -> Result<ColumnInput, IngestError> {
    let format = match format {
        Some(format) => format,
        None => InputFormat::from_path(path)?,
    };
    let content = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), ?format, bytes = content.len(), "loading column");

    let input = match format {
        InputFormat::Json => parse_json_str(&content)?,
        InputFormat::Csv => parse_csv_str(&content)?,
    };
    input.config.validate()?;

    debug!(
        layers = input.stratigraphy.layer_count(),
        top = input.stratigraphy.top(),
        bottom = input.stratigraphy.bottom(),
        "column loaded"
    );
    Ok(input)
}

/// One layer row before validation; any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LayerRow {
    #[serde(alias = "top_level", alias = "top")]
    pub top_elevation: Option<f64>,
    #[serde(alias = "bottom_level", alias = "bottom")]
    pub bottom_elevation: Option<f64>,
    #[serde(alias = "gamma")]
    pub unit_weight: Option<f64>,
    #[serde(alias = "k")]
    pub lateral_coefficient: Option<f64>,
    #[serde(alias = "title")]
    pub label: Option<String>,
}

impl LayerRow {
    /// Turn a row into a layer; `row` is 1-based for messages.
    pub fn into_layer(self, row: usize) -> Result<Layer, IngestError> {
        let require = |value: Option<f64>, field: &'static str| {
            value.ok_or(IngestError::MissingField { row, field })
        };
        let top = require(self.top_elevation, "top_elevation")?;
        let bottom = require(self.bottom_elevation, "bottom_elevation")?;
        let unit_weight = require(self.unit_weight, "unit_weight")?;
        let k = require(self.lateral_coefficient, "lateral_coefficient")?;
        let label = match self.label {
            Some(label) if !label.trim().is_empty() => label.trim().to_string(),
            _ => format!("Layer {}", row),
        };
        Ok(Layer::new(top, bottom, unit_weight, k, label))
    }
}

/// Validate rows into a column.
pub fn rows_to_stratigraphy(rows: Vec<LayerRow>) -> Result<Stratigraphy, IngestError> {
    let layers = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| row.into_layer(i + 1))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Stratigraphy::new(layers)?)
}
