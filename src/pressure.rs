// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The four pressure formulas.
//!
//! | Function               | Formula                                   | Outside column |
//! |------------------------|-------------------------------------------|----------------|
//! | `lithostatic_pressure` | Σ γᵢ·hᵢ above + γ·(top − z)               | `None`         |
//! | `pore_pressure`        | max(0, (z_w − z)·γw)                      | defined        |
//! | `effective_pressure`   | σv − u                                    | `None`         |
//! | `horizontal_pressure`  | k·σ'v + u                                 | `None`         |
//!
//! Pressures are in kPa for elevations in m and unit weights in kN/m³. No unit
//! conversion happens here.
//!
//! Every function is pure: same inputs, same output, no hidden state.

use crate::profile::ProfileConfig;
use crate::resolve::{lateral_coefficient_owner, resolve_layer};
use crate::types::{PressureSample, Stratigraphy, WaterTable};

/// Unit weight of water (kN/m³).
pub const UNIT_WEIGHT_WATER: f64 = 10.0;

/// Overburden stress at `elevation`.
///
/// The weight of every layer entirely above the containing layer, plus the
/// partial thickness inside it. Zero at the ground surface, non-decreasing
/// with depth. `None` outside the column.
pub fn lithostatic_pressure(elevation: f64, column: &Stratigraphy) -> Option<f64> {
    let index = resolve_layer(elevation, column)?.get();
    let layers = column.layers();

    let overburden: f64 = layers[..index].iter().map(|layer| layer.full_weight()).sum();
    let containing = &layers[index];
    Some(overburden + containing.unit_weight * (containing.top_elevation - elevation))
}

/// Hydrostatic pressure at `elevation` with γw = 10 kN/m³.
///
/// Exactly zero at and above the water table.
#[inline]
pub fn pore_pressure(elevation: f64, water_table: WaterTable) -> f64 {
    pore_pressure_with(elevation, water_table, UNIT_WEIGHT_WATER)
}

/// Hydrostatic pressure with an explicit unit weight of water.
#[inline]
pub fn pore_pressure_with(elevation: f64, water_table: WaterTable, unit_weight_water: f64) -> f64 {
    let head = water_table.elevation() - elevation;
    if head > 0.0 {
        head * unit_weight_water
    } else {
        0.0
    }
}

/// Lithostatic minus pore pressure. `None` outside the column.
#[inline]
pub fn effective_pressure(
    elevation: f64,
    column: &Stratigraphy,
    water_table: WaterTable,
) -> Option<f64> {
    effective_pressure_with(elevation, column, water_table, UNIT_WEIGHT_WATER)
}

fn effective_pressure_with(
    elevation: f64,
    column: &Stratigraphy,
    water_table: WaterTable,
    unit_weight_water: f64,
) -> Option<f64> {
    let lithostatic = lithostatic_pressure(elevation, column)?;
    Some(lithostatic - pore_pressure_with(elevation, water_table, unit_weight_water))
}

/// Lateral pressure `k · σ'v + u`. `None` outside the column.
///
/// `k` comes from [`lateral_coefficient_owner`]: exactly on an internal
/// contact the layer above supplies it, so the value at the contact equals
/// the limit from above. Just below the contact the lower layer's `k`
/// applies, which produces the two-sided jump in a profile.
#[inline]
pub fn horizontal_pressure(
    elevation: f64,
    column: &Stratigraphy,
    water_table: WaterTable,
) -> Option<f64> {
    horizontal_pressure_with(elevation, column, water_table, UNIT_WEIGHT_WATER)
}

fn horizontal_pressure_with(
    elevation: f64,
    column: &Stratigraphy,
    water_table: WaterTable,
    unit_weight_water: f64,
) -> Option<f64> {
    let effective = effective_pressure_with(elevation, column, water_table, unit_weight_water)?;
    let owner = lateral_coefficient_owner(elevation, column)?;
    let k = column.layer(owner).lateral_coefficient;
    Some(k * effective + pore_pressure_with(elevation, water_table, unit_weight_water))
}

/// All four pressures at one elevation.
pub fn sample_at(elevation: f64, column: &Stratigraphy, water_table: WaterTable) -> PressureSample {
    sample_at_with(elevation, column, water_table, &ProfileConfig::default())
}

/// All four pressures at one elevation with explicit settings.
pub fn sample_at_with(
    elevation: f64,
    column: &Stratigraphy,
    water_table: WaterTable,
    config: &ProfileConfig,
) -> PressureSample {
    let gamma_w = config.unit_weight_water;
    PressureSample {
        elevation,
        lithostatic: lithostatic_pressure(elevation, column),
        pore: pore_pressure_with(elevation, water_table, gamma_w),
        effective: effective_pressure_with(elevation, column, water_table, gamma_w),
        horizontal: horizontal_pressure_with(elevation, column, water_table, gamma_w),
    }
}
