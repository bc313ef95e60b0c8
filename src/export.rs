// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Handing a computed profile to whatever draws or stores it.
//!
//! The core never touches a drawing context. A renderer implements
//! [`ProfileSink`] and is driven by `Profile::render_into`: one `begin`, one
//! `sample` per elevation (surface first), one `finish`.
//!
//! Two sinks ship with the crate:
//!
//! - [`CsvSink`] - one row per sample, not-applicable cells left empty
//! - [`JsonSink`] - a single document with the column and the samples,
//!   not-applicable values as `null`
//!
//! Neither substitutes zeros. A renderer that wants the plotting convention
//! calls `PressureSample::or_neutral` itself.

use serde::Serialize;
use std::io::Write;

use crate::error::ExportError;
use crate::types::{Layer, PressureSample, Stratigraphy, WaterTable};

/// Consumer of a profile, fed surface to depth.
pub trait ProfileSink {
    /// Called once before any sample.
    fn begin(&mut self, column: &Stratigraphy, water_table: WaterTable) -> Result<(), ExportError>;

    /// Called once per sampled elevation, in decreasing elevation order.
    fn sample(&mut self, sample: &PressureSample) -> Result<(), ExportError>;

    /// Called once after the last sample.
    fn finish(&mut self) -> Result<(), ExportError> {
        Ok(())
    }
}

/// Collects the samples in memory.
impl ProfileSink for Vec<PressureSample> {
    fn begin(&mut self, _column: &Stratigraphy, _water_table: WaterTable) -> Result<(), ExportError> {
        self.clear();
        Ok(())
    }

    fn sample(&mut self, sample: &PressureSample) -> Result<(), ExportError> {
        self.push(*sample);
        Ok(())
    }
}

// =============================================================================
// CSV
// =============================================================================

/// Header row written by [`CsvSink`].
pub const CSV_HEADER: [&str; 5] = ["elevation", "lithostatic", "pore", "effective", "horizontal"];

/// Writes `elevation,lithostatic,pore,effective,horizontal` rows.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().has_headers(false).from_writer(inner),
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, ExportError> {
        self.writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))
    }
}

impl<W: Write> ProfileSink for CsvSink<W> {
    fn begin(&mut self, _column: &Stratigraphy, _water_table: WaterTable) -> Result<(), ExportError> {
        self.writer.write_record(CSV_HEADER)?;
        Ok(())
    }

    fn sample(&mut self, sample: &PressureSample) -> Result<(), ExportError> {
        self.writer.serialize(sample)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        self.writer.flush()?;
        Ok(())
    }
}

// =============================================================================
// JSON
// =============================================================================

/// Writes one JSON document once the profile is complete.
pub struct JsonSink<W: Write> {
    out: W,
    pretty: bool,
    layers: Vec<Layer>,
    water_table: Option<WaterTable>,
    samples: Vec<PressureSample>,
}

#[derive(Serialize)]
struct JsonProfile<'a> {
    water_table: Option<WaterTable>,
    layers: &'a [Layer],
    samples: &'a [PressureSample],
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pretty: true,
            layers: Vec::new(),
            water_table: None,
            samples: Vec::new(),
        }
    }

    /// Single-line output instead of pretty-printed.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProfileSink for JsonSink<W> {
    fn begin(&mut self, column: &Stratigraphy, water_table: WaterTable) -> Result<(), ExportError> {
        self.layers = column.layers().to_vec();
        self.water_table = Some(water_table);
        self.samples.clear();
        Ok(())
    }

    fn sample(&mut self, sample: &PressureSample) -> Result<(), ExportError> {
        if self.water_table.is_none() {
            return Err(ExportError::NotStarted);
        }
        self.samples.push(*sample);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        let document = JsonProfile {
            water_table: self.water_table,
            layers: &self.layers,
            samples: &self.samples,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, &document)?;
        } else {
            serde_json::to_writer(&mut self.out, &document)?;
        }
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::evaluate_profile;
    use crate::testing::{reference_column, reference_water_table};

    #[test]
    fn test_vec_sink_collects_samples_in_order() {
        let column = reference_column();
        let profile = evaluate_profile(&column, reference_water_table());
        let mut collected: Vec<PressureSample> = Vec::new();
        profile.render_into(&mut collected).unwrap();
        assert_eq!(collected.as_slice(), profile.samples());
    }

    #[test]
    fn test_csv_sink_writes_header_and_rows() {
        let column = reference_column();
        let profile = evaluate_profile(&column, reference_water_table());
        let mut sink = CsvSink::new(Vec::new());
        profile.render_into(&mut sink).unwrap();
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("elevation,lithostatic,pore,effective,horizontal"));
        assert_eq!(lines.next(), Some("35.0,0.0,0.0,0.0,0.0"));
        assert_eq!(text.lines().count(), profile.samples().len() + 1);
    }

    #[test]
    fn test_csv_sink_leaves_not_applicable_empty() {
        let column = reference_column();
        let profile = evaluate_profile(&column, WaterTable::new(40.0).unwrap());
        let mut sink = CsvSink::new(Vec::new());
        profile.render_into(&mut sink).unwrap();
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(text.lines().nth(1), Some("40.0,,0.0,,"));
    }

    #[test]
    fn test_json_sink_document() {
        let column = reference_column();
        let profile = evaluate_profile(&column, reference_water_table());
        let mut sink = JsonSink::new(Vec::new()).compact();
        profile.render_into(&mut sink).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(value["water_table"], 26.0);
        assert_eq!(value["layers"].as_array().unwrap().len(), 3);
        assert_eq!(value["layers"][0]["label"], "Remblais");
        let samples = value["samples"].as_array().unwrap();
        assert_eq!(samples.len(), profile.samples().len());
        assert_eq!(samples[0]["elevation"], 35.0);
    }

    #[test]
    fn test_json_sink_requires_begin() {
        let column = reference_column();
        let profile = evaluate_profile(&column, reference_water_table());
        let mut sink = JsonSink::new(Vec::new());
        assert!(matches!(
            sink.sample(&profile.samples()[0]),
            Err(ExportError::NotStarted)
        ));
    }
}
