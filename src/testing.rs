//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::ingest;
use crate::types::{Layer, Stratigraphy, WaterTable};

/// The three-layer worked example: Remblais / Marnes / Alluvions, 35 to 12 m NGF.
///
/// This is the canonical fixture used across all tests.
pub fn reference_column() -> Stratigraphy {
    Stratigraphy::new(reference_layers()).expect("reference column is valid")
}

/// Layers of [`reference_column`], unvalidated.
pub fn reference_layers() -> Vec<Layer> {
    ingest::reference_layers()
}

/// Groundwater level of the worked example (26 m NGF).
pub fn reference_water_table() -> WaterTable {
    WaterTable::new(ingest::REFERENCE_WATER_TABLE).expect("finite")
}

/// Create a layer.
pub fn make_layer(top: f64, bottom: f64, unit_weight: f64, k: f64, label: &str) -> Layer {
    Layer::new(top, bottom, unit_weight, k, label)
}

/// Build a contiguous column from a surface elevation and
/// `(thickness, unit_weight, k)` triples, shallowest first.
pub fn stack(surface: f64, layers: &[(f64, f64, f64)]) -> Stratigraphy {
    let mut top = surface;
    let built = layers
        .iter()
        .enumerate()
        .map(|(i, &(thickness, unit_weight, k))| {
            let bottom = top - thickness;
            let layer = make_layer(top, bottom, unit_weight, k, &format!("L{}", i));
            top = bottom;
            layer
        })
        .collect();
    Stratigraphy::new(built).expect("stacked layers are contiguous")
}
