//! Pressures through the worked example column.
//!
//! Remblais 35→28 (γ 18, k 0.5), Marnes 28→20 (γ 20, k 0.45),
//! Alluvions 20→12 (γ 21, k 0.3), groundwater at 26 m NGF.

use super::common::{assert_outside, reference, stack};
use approx::assert_relative_eq;
use lithos::{
    effective_pressure, horizontal_pressure, lateral_coefficient_owner, lithostatic_pressure,
    pore_pressure, pore_pressure_with, sample_at, LayerIndex, WaterTable,
};

// ============================================================================
// REFERENCE SCENARIO
// ============================================================================

/// (elevation, σv, u, σ'v, σh)
const EXPECTED: [(f64, f64, f64, f64, f64); 7] = [
    (35.0, 0.0, 0.0, 0.0, 0.0),
    (28.0, 126.0, 0.0, 126.0, 63.0),
    (27.99, 126.2, 0.0, 126.2, 56.79),
    (26.0, 166.0, 0.0, 166.0, 74.7),
    (20.0, 286.0, 60.0, 226.0, 161.7),
    (19.99, 286.21, 60.1, 226.11, 127.933),
    (12.0, 454.0, 140.0, 314.0, 234.2),
];

#[test]
fn test_reference_scenario() {
    let (column, water_table) = reference();
    for (z, litho, pore, eff, horiz) in EXPECTED {
        let sample = sample_at(z, &column, water_table);
        assert_relative_eq!(sample.lithostatic.unwrap(), litho, epsilon = 1e-9);
        assert_relative_eq!(sample.pore, pore, epsilon = 1e-9);
        assert_relative_eq!(sample.effective.unwrap(), eff, epsilon = 1e-9);
        assert_relative_eq!(sample.horizontal.unwrap(), horiz, epsilon = 1e-9);
    }
}

#[test]
fn test_exact_values_at_contacts() {
    let (column, _) = reference();
    assert_eq!(lithostatic_pressure(35.0, &column), Some(0.0));
    assert_eq!(lithostatic_pressure(28.0, &column), Some(126.0));
    assert_eq!(lithostatic_pressure(20.0, &column), Some(286.0));
    assert_eq!(lithostatic_pressure(12.0, &column), Some(454.0));
}

// ============================================================================
// OUTSIDE THE COLUMN
// ============================================================================

#[test]
fn test_above_surface_is_not_applicable() {
    let (column, water_table) = reference();
    assert_outside(&sample_at(35.5, &column, water_table));
    assert_eq!(horizontal_pressure(40.0, &column, water_table), None);
}

#[test]
fn test_below_base_is_not_applicable() {
    let (column, water_table) = reference();
    let sample = sample_at(11.0, &column, water_table);
    assert_outside(&sample);
    // Pore pressure does not depend on the column.
    assert_eq!(sample.pore, 150.0);
}

// ============================================================================
// PORE AND EFFECTIVE
// ============================================================================

#[test]
fn test_pore_zero_at_and_above_water_table() {
    let water_table = WaterTable::new(26.0).unwrap();
    assert_eq!(pore_pressure(26.0, water_table), 0.0);
    assert_eq!(pore_pressure(30.0, water_table), 0.0);
    assert_eq!(pore_pressure(25.0, water_table), 10.0);
}

#[test]
fn test_pore_with_custom_unit_weight() {
    let water_table = WaterTable::new(0.0).unwrap();
    assert_relative_eq!(pore_pressure_with(-2.0, water_table, 9.81), 19.62);
}

#[test]
fn test_effective_is_lithostatic_minus_pore() {
    let (column, water_table) = reference();
    for z in [34.0, 27.0, 21.5, 15.25] {
        let litho = lithostatic_pressure(z, &column).unwrap();
        let eff = effective_pressure(z, &column, water_table).unwrap();
        assert_eq!(eff, litho - pore_pressure(z, water_table));
    }
}

#[test]
fn test_water_table_above_surface() {
    // Submerged column: pore pressure already positive at the surface.
    let (column, _) = reference();
    let water_table = WaterTable::new(37.0).unwrap();
    let surface = sample_at(35.0, &column, water_table);
    assert_eq!(surface.lithostatic, Some(0.0));
    assert_eq!(surface.pore, 20.0);
    assert_eq!(surface.effective, Some(-20.0));
}

#[test]
fn test_water_table_below_base_keeps_column_dry() {
    let (column, _) = reference();
    let water_table = WaterTable::new(0.0).unwrap();
    let base = sample_at(12.0, &column, water_table);
    assert_eq!(base.pore, 0.0);
    assert_eq!(base.effective, base.lithostatic);
}

// ============================================================================
// HORIZONTAL
// ============================================================================

#[test]
fn test_horizontal_jump_across_contact() {
    let (column, water_table) = reference();
    let at = horizontal_pressure(20.0, &column, water_table).unwrap();
    let below = horizontal_pressure(20.0 - 1e-9, &column, water_table).unwrap();
    assert_relative_eq!(at, 0.45 * 226.0 + 60.0, epsilon = 1e-9);
    assert_relative_eq!(below, 0.3 * 226.0 + 60.0, epsilon = 1e-6);
}

#[test]
fn test_just_above_contact_uses_upper_coefficient() {
    let (column, water_table) = reference();

    // Remblais above 28: dry, k = 0.5
    assert_eq!(lateral_coefficient_owner(28.01, &column), Some(LayerIndex(0)));
    let above = horizontal_pressure(28.01, &column, water_table).unwrap();
    assert_relative_eq!(above, 0.5 * 18.0 * (35.0 - 28.01), epsilon = 1e-9);

    // Marnes above 20: submerged, k = 0.45
    assert_eq!(lateral_coefficient_owner(20.01, &column), Some(LayerIndex(1)));
    let above = horizontal_pressure(20.01, &column, water_table).unwrap();
    let effective = 126.0 + 20.0 * (28.0 - 20.01) - 10.0 * (26.0 - 20.01);
    assert_relative_eq!(above, 0.45 * effective + 10.0 * (26.0 - 20.01), epsilon = 1e-9);

    // Approaching the contact from above meets the value at the contact.
    let at = horizontal_pressure(20.0, &column, water_table).unwrap();
    assert!((at - above).abs() <= (0.45 * 20.0 + 1.45 * 10.0) * 0.01 + 1e-9);
}

#[test]
fn test_zero_coefficient_leaves_pore_only() {
    let column = stack(10.0, &[(10.0, 20.0, 0.0)]);
    let water_table = WaterTable::new(10.0).unwrap();
    assert_eq!(horizontal_pressure(4.0, &column, water_table), Some(60.0));
}
