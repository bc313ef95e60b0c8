//! Property-based tests using proptest.
//!
//! Random contiguous columns and water tables; every test checks a rule that
//! must hold for any physically sensible input, not just the worked example.

mod common;

#[path = "property/oracles.rs"]
mod oracles;

use approx::relative_eq;
use common::stack;
use lithos::{
    evaluate_at, evaluate_at_sequential, evaluate_profile, lateral_coefficient_owner,
    lithostatic_pressure, locate, pore_pressure, resolve_layer, sample_at, sample_elevations,
    sample_elevations_with, Location, ProfileConfig, Stratigraphy, WaterTable, BOUNDARY_OFFSET,
    UNIT_WEIGHT_WATER,
};
use oracles::{oracle_lithostatic, oracle_resolve};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// (thickness, unit_weight, k) for one layer. Thicker than the contact offset.
fn layer_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.5f64..20.0, 0.0f64..25.0, 0.0f64..2.0)
}

/// A contiguous column of 1 to 8 layers with its surface anywhere sensible.
fn column_strategy() -> impl Strategy<Value = Stratigraphy> {
    (-50.0f64..100.0, prop::collection::vec(layer_strategy(), 1..8))
        .prop_map(|(surface, layers)| stack(surface, &layers))
}

fn water_table_strategy() -> impl Strategy<Value = WaterTable> {
    (-200.0f64..150.0).prop_map(|z| WaterTable::new(z).unwrap())
}

/// A column plus fractions used to pick elevations inside it.
fn column_with_points() -> impl Strategy<Value = (Stratigraphy, WaterTable, Vec<f64>)> {
    (
        column_strategy(),
        water_table_strategy(),
        prop::collection::vec(0.0f64..=1.0, 1..20),
    )
        .prop_map(|(column, water_table, fractions)| {
            let (top, bottom) = (column.top(), column.bottom());
            let points = fractions
                .into_iter()
                .map(|f| (top - f * (top - bottom)).clamp(bottom, top))
                .collect();
            (column, water_table, points)
        })
}

// ============================================================================
// LITHOSTATIC
// ============================================================================

proptest! {
    #[test]
    fn prop_lithostatic_non_decreasing_with_depth(
        (column, _wt, mut points) in column_with_points()
    ) {
        for layer in column.layers() {
            points.push(layer.top_elevation);
            points.push(layer.bottom_elevation);
        }
        points.sort_by(|a, b| b.total_cmp(a));

        let values: Vec<f64> = points
            .iter()
            .map(|&z| lithostatic_pressure(z, &column).unwrap())
            .collect();
        prop_assert_eq!(values[0], 0.0);
        for pair in values.windows(2) {
            prop_assert!(pair[1] >= pair[0], "{} then {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn prop_lithostatic_matches_layer_walk(
        (column, _wt, points) in column_with_points()
    ) {
        for z in points {
            let fast = lithostatic_pressure(z, &column).unwrap();
            let slow = oracle_lithostatic(z, &column).unwrap();
            prop_assert!(relative_eq!(fast, slow, epsilon = 1e-9, max_relative = 1e-12));
        }
    }

    #[test]
    fn prop_continuous_across_contacts(column in column_strategy()) {
        for (z, _, lower) in column.internal_boundaries() {
            let at = lithostatic_pressure(z, &column).unwrap();
            let layer = column.layer(lower);
            let expected_below = at + layer.unit_weight * 1e-6;
            let below = lithostatic_pressure(z - 1e-6, &column).unwrap();
            prop_assert!(relative_eq!(below, expected_below, epsilon = 1e-6));
        }
    }
}

// ============================================================================
// PORE AND EFFECTIVE
// ============================================================================

proptest! {
    #[test]
    fn prop_pore_zero_above_and_linear_below(
        water_table in water_table_strategy(),
        z in -300.0f64..300.0,
    ) {
        let pore = pore_pressure(z, water_table);
        if z >= water_table.elevation() {
            prop_assert_eq!(pore, 0.0);
        } else {
            let expected = UNIT_WEIGHT_WATER * (water_table.elevation() - z);
            prop_assert!(relative_eq!(pore, expected, max_relative = 1e-12));
        }
    }

    #[test]
    fn prop_effective_is_lithostatic_minus_pore(
        (column, water_table, points) in column_with_points()
    ) {
        for z in points {
            let sample = sample_at(z, &column, water_table);
            prop_assert_eq!(
                sample.effective.unwrap(),
                sample.lithostatic.unwrap() - sample.pore
            );
        }
    }
}

// ============================================================================
// OUTSIDE THE COLUMN
// ============================================================================

proptest! {
    #[test]
    fn prop_outside_column_is_not_applicable(
        column in column_strategy(),
        water_table in water_table_strategy(),
        distance in 1e-6f64..100.0,
    ) {
        for z in [column.top() + distance, column.bottom() - distance] {
            let sample = sample_at(z, &column, water_table);
            prop_assert!(!sample.in_column());
            prop_assert_eq!(sample.effective, None);
            prop_assert_eq!(sample.horizontal, None);
            prop_assert_eq!(sample.pore, pore_pressure(z, water_table));
            prop_assert!(!locate(z, &column).is_in_column());
        }
    }
}

// ============================================================================
// LAYER RESOLUTION
// ============================================================================

proptest! {
    #[test]
    fn prop_resolve_matches_linear_scan(
        (column, _wt, mut points) in column_with_points()
    ) {
        for layer in column.layers() {
            points.push(layer.bottom_elevation);
        }
        for z in points {
            prop_assert_eq!(resolve_layer(z, &column), oracle_resolve(z, &column));
        }
    }

    #[test]
    fn prop_contact_coefficient_from_upper_layer(
        column in column_strategy(),
        water_table in water_table_strategy(),
    ) {
        for (z, upper, lower) in column.internal_boundaries() {
            prop_assert_eq!(lateral_coefficient_owner(z, &column), Some(upper));
            prop_assert_eq!(locate(z, &column), Location::Contact { upper, lower });

            let at = sample_at(z, &column, water_table);
            let k_upper = column.layer(upper).lateral_coefficient;
            prop_assert_eq!(
                at.horizontal.unwrap(),
                k_upper * at.effective.unwrap() + at.pore
            );

            // Just above the contact, kept inside the upper layer.
            let upper_layer = column.layer(upper);
            let above_z = (z + BOUNDARY_OFFSET).min((z + upper_layer.top_elevation) / 2.0);
            let above = sample_at(above_z, &column, water_table);
            prop_assert_eq!(lateral_coefficient_owner(above_z, &column), Some(upper));
            prop_assert_eq!(
                above.horizontal.unwrap(),
                k_upper * above.effective.unwrap() + above.pore
            );
            let dz = above_z - z;
            let slope = k_upper * upper_layer.unit_weight + (1.0 + k_upper) * UNIT_WEIGHT_WATER;
            let gap = (at.horizontal.unwrap() - above.horizontal.unwrap()).abs();
            prop_assert!(
                gap <= slope * dz + 1e-9 * (1.0 + at.horizontal.unwrap().abs()),
                "horizontal jumps by {} within {} m above the contact",
                gap,
                dz
            );

            let below_z = z - BOUNDARY_OFFSET;
            let below = sample_at(below_z, &column, water_table);
            let k_lower = column.layer(lower).lateral_coefficient;
            prop_assert_eq!(lateral_coefficient_owner(below_z, &column), Some(lower));
            prop_assert_eq!(
                below.horizontal.unwrap(),
                k_lower * below.effective.unwrap() + below.pore
            );
        }
    }
}

// ============================================================================
// SAMPLER AND PROFILE
// ============================================================================

proptest! {
    #[test]
    fn prop_sampler_strictly_decreasing_and_complete(
        column in column_strategy(),
        water_table in water_table_strategy(),
        offset in 0.001f64..0.4,
    ) {
        let config = ProfileConfig::default().with_boundary_offset(offset);
        let elevations = sample_elevations_with(&column, water_table, &config);

        for pair in elevations.windows(2) {
            prop_assert!(pair[0] > pair[1]);
        }
        prop_assert!(elevations.contains(&column.top()));
        prop_assert!(elevations.contains(&water_table.elevation()));
        for layer in column.layers() {
            prop_assert!(elevations.contains(&layer.bottom_elevation));
        }
        for (z, _, _) in column.internal_boundaries() {
            prop_assert!(elevations.contains(&(z - offset)));
        }
    }

    #[test]
    fn prop_parallel_matches_sequential(
        column in column_strategy(),
        water_table in water_table_strategy(),
    ) {
        let config = ProfileConfig::default();
        let elevations = sample_elevations(&column, water_table);
        prop_assert_eq!(
            evaluate_at(&column, water_table, &config, &elevations),
            evaluate_at_sequential(&column, water_table, &config, &elevations)
        );
    }

    #[test]
    fn prop_evaluation_is_repeatable(
        column in column_strategy(),
        water_table in water_table_strategy(),
    ) {
        let first = evaluate_profile(&column, water_table);
        let second = evaluate_profile(&column, water_table);
        prop_assert_eq!(first.samples(), second.samples());
        prop_assert_eq!(first.series(), second.series());
    }
}
