//! Profile sampling and rendering.

use super::common::{reference, reference_column};
use lithos::{
    evaluate_profile, evaluate_profile_with, sample_elevations, CsvSink, PressureSample,
    ProfileConfig, WaterTable, BOUNDARY_OFFSET,
};

#[test]
fn test_reference_profile_elevations() {
    let (column, water_table) = reference();
    let profile = evaluate_profile(&column, water_table);
    let elevations: Vec<f64> = profile.samples().iter().map(|s| s.elevation).collect();
    assert_eq!(
        elevations,
        vec![
            35.0,
            28.0,
            28.0 - BOUNDARY_OFFSET,
            26.0,
            20.0,
            20.0 - BOUNDARY_OFFSET,
            12.0
        ]
    );
}

#[test]
fn test_water_table_below_base_is_still_sampled() {
    let column = reference_column();
    let elevations = sample_elevations(&column, WaterTable::new(5.0).unwrap());
    assert_eq!(elevations.last(), Some(&5.0));
}

#[test]
fn test_profile_into_vec_sink() {
    let (column, water_table) = reference();
    let profile = evaluate_profile(&column, water_table);
    let mut collected: Vec<PressureSample> = Vec::new();
    profile.render_into(&mut collected).unwrap();
    assert_eq!(collected, profile.samples());
}

#[test]
fn test_profile_into_csv() {
    let (column, water_table) = reference();
    let profile = evaluate_profile(&column, water_table);
    let mut sink = CsvSink::new(Vec::new());
    profile.render_into(&mut sink).unwrap();
    let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "elevation,lithostatic,pore,effective,horizontal");
    assert_eq!(lines[1], "35.0,0.0,0.0,0.0,0.0");
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_custom_unit_weight_of_water() {
    let (column, water_table) = reference();
    let config = ProfileConfig::default().with_unit_weight_water(9.81);
    let profile = evaluate_profile_with(&column, water_table, config);
    let base = profile.sample_at(12.0).unwrap();
    assert!((base.pore - 14.0 * 9.81).abs() < 1e-9);
    assert_eq!(profile.config().unit_weight_water, 9.81);
}
