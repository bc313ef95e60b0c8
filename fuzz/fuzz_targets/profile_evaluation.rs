// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for profile evaluation on arbitrary columns.
//!
//! Layer thicknesses, unit weights and coefficients come straight from the
//! fuzzer. Columns that fail validation are fine. Columns that pass must give
//! strictly decreasing elevations and an overburden that is finite and never
//! decreases.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lithos::{evaluate_profile, Layer, Stratigraphy, WaterTable};

#[derive(Debug, Arbitrary)]
struct Input {
    surface: f64,
    water_table: f64,
    layers: Vec<(f64, f64, f64)>,
}

fuzz_target!(|input: Input| {
    if input.layers.len() > 64 {
        return;
    }

    let mut top = input.surface;
    let mut layers = Vec::with_capacity(input.layers.len());
    for (i, &(thickness, unit_weight, k)) in input.layers.iter().enumerate() {
        let bottom = top - thickness.abs();
        layers.push(Layer::new(top, bottom, unit_weight, k, format!("L{}", i)));
        top = bottom;
    }

    let Ok(column) = Stratigraphy::new(layers) else {
        return;
    };
    let Ok(water_table) = WaterTable::new(input.water_table) else {
        return;
    };

    let profile = evaluate_profile(&column, water_table);
    let samples = profile.samples();

    for pair in samples.windows(2) {
        assert!(pair[0].elevation > pair[1].elevation);
    }
    let overburden: Vec<f64> = samples.iter().filter_map(|s| s.lithostatic).collect();
    assert!(overburden.iter().all(|v| v.is_finite()), "{:?}", overburden);
    for pair in overburden.windows(2) {
        assert!(pair[1] >= pair[0], "overburden decreased: {:?}", pair);
    }
});
