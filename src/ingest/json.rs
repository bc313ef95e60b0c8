// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON column files.
//!
//! Either a full document
//!
//! ```json
//! {
//!   "water_table": 26.0,
//!   "unit_weight_water": 10.0,
//!   "boundary_offset": 0.01,
//!   "layers": [
//!     {"top_level": 35, "bottom_level": 28, "unit_weight": 18, "k": 0.5, "title": "Remblais"}
//!   ]
//! }
//! ```
//!
//! or a bare array of layers. Everything except `layers` is optional.

use serde::{Deserialize, Serialize};

use super::{rows_to_stratigraphy, ColumnInput, LayerRow};
use crate::error::IngestError;
use crate::profile::ProfileConfig;
use crate::types::{Layer, WaterTable};

/// The on-disk shape of a JSON column file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ColumnDocument {
    #[serde(default)]
    pub water_table: Option<f64>,
    #[serde(default)]
    pub unit_weight_water: Option<f64>,
    #[serde(default)]
    pub boundary_offset: Option<f64>,
    pub layers: Vec<LayerRow>,
}

impl ColumnDocument {
    pub fn into_input(self) -> Result<ColumnInput, IngestError> {
        let defaults = ProfileConfig::default();
        let config = ProfileConfig {
            unit_weight_water: self.unit_weight_water.unwrap_or(defaults.unit_weight_water),
            boundary_offset: self.boundary_offset.unwrap_or(defaults.boundary_offset),
        };
        let water_table = self.water_table.map(WaterTable::new).transpose()?;
        Ok(ColumnInput {
            stratigraphy: rows_to_stratigraphy(self.layers)?,
            water_table,
            config,
        })
    }
}

/// Parse a JSON column file.
pub fn parse_json_str(content: &str) -> Result<ColumnInput, IngestError> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let document = if value.is_array() {
        ColumnDocument {
            layers: serde_json::from_value(value)?,
            ..ColumnDocument::default()
        }
    } else {
        serde_json::from_value(value)?
    };
    document.into_input()
}

#[derive(Serialize)]
struct ColumnOut<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    water_table: Option<WaterTable>,
    unit_weight_water: f64,
    boundary_offset: f64,
    layers: &'a [Layer],
}

/// Serialize a column back into the JSON file format.
pub fn write_json_column(input: &ColumnInput) -> Result<String, IngestError> {
    let out = ColumnOut {
        water_table: input.water_table,
        unit_weight_water: input.config.unit_weight_water,
        boundary_offset: input.config.boundary_offset,
        layers: input.stratigraphy.layers(),
    };
    Ok(serde_json::to_string_pretty(&out)?)
}
