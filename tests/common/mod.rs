//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lithos::{PressureSample, Stratigraphy, WaterTable};

// Re-export canonical test utilities from lithos::testing
pub use lithos::testing::{make_layer, reference_column, reference_water_table, stack};

// ============================================================================
// FIXTURE FILES
// ============================================================================

/// The worked example as a spreadsheet export.
pub const REFERENCE_CSV: &str = "\
top_level,bottom_level,unit_weight,k,title
35,28,18,0.5,Remblais
28,20,20,0.45,Marnes
20,12,21,0.3,Alluvions
";

/// The worked example as a JSON column file, water table included.
pub const REFERENCE_JSON: &str = r#"{
  "water_table": 26.0,
  "layers": [
    {"top_level": 35, "bottom_level": 28, "unit_weight": 18, "k": 0.5, "title": "Remblais"},
    {"top_level": 28, "bottom_level": 20, "unit_weight": 20, "k": 0.45, "title": "Marnes"},
    {"top_level": 20, "bottom_level": 12, "unit_weight": 21, "k": 0.3, "title": "Alluvions"}
  ]
}"#;

/// Write `content` to a temporary file with the given extension.
pub fn temp_file(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::Builder::new()
        .prefix("lithos-")
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Check that `sample` is undefined except for pore pressure.
pub fn assert_outside(sample: &PressureSample) {
    assert_eq!(sample.lithostatic, None, "lithostatic at {}", sample.elevation);
    assert_eq!(sample.effective, None, "effective at {}", sample.elevation);
    assert_eq!(sample.horizontal, None, "horizontal at {}", sample.elevation);
}

/// The reference column together with its water table.
pub fn reference() -> (Stratigraphy, WaterTable) {
    (reference_column(), reference_water_table())
}
