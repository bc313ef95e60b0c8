//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct walks over the layer list that the binary-search
//! implementations are checked against.

use lithos::{LayerIndex, Stratigraphy};

/// Overburden by walking down from the surface, layer by layer.
pub fn oracle_lithostatic(elevation: f64, column: &Stratigraphy) -> Option<f64> {
    if elevation > column.top() || elevation < column.bottom() {
        return None;
    }
    let mut total = 0.0;
    for layer in column.layers() {
        if elevation <= layer.bottom_elevation {
            total += layer.unit_weight * (layer.top_elevation - layer.bottom_elevation);
        } else {
            total += layer.unit_weight * (layer.top_elevation - elevation);
            break;
        }
    }
    Some(total)
}

/// First layer, from the surface down, whose closed interval holds `elevation`.
pub fn oracle_resolve(elevation: f64, column: &Stratigraphy) -> Option<LayerIndex> {
    column
        .layers()
        .iter()
        .position(|layer| layer.bottom_elevation <= elevation && elevation <= layer.top_elevation)
        .map(LayerIndex)
}
