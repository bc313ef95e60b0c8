// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for column file parsing.
//!
//! Column files come from spreadsheets and hand edits. Whatever bytes arrive,
//! the parsers must return Ok or Err and never panic. A column that parses
//! must also evaluate cleanly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lithos::ingest::{parse_csv_str, parse_json_str};
use lithos::{evaluate_profile, WaterTable};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    for parsed in [parse_csv_str(&text), parse_json_str(&text)] {
        let Ok(input) = parsed else {
            continue;
        };
        let column = &input.stratigraphy;

        // Validation guarantees a non-empty, ordered column
        assert!(column.layer_count() > 0);
        assert!(column.top() > column.bottom());

        let water_table = input
            .water_table
            .unwrap_or_else(|| WaterTable::new(column.top()).expect("finite top"));
        let profile = evaluate_profile(column, water_table);
        assert_eq!(profile.samples()[0].elevation, column.top().max(water_table.elevation()));
    }
});
