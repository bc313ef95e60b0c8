// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sampling a column into a pressure-versus-elevation profile.
//!
//! Pressures are piecewise linear in elevation, so a profile only needs the
//! points where the slope or the value can change: the ground surface, every
//! layer bottom, the water table, and a point just below every internal contact
//! so the horizontal-pressure jump shows up with both of its sides.
//!
//! ```text
//!  35.00 ─┬─ surface
//!         │  Remblais
//!  28.00 ─┼─ contact      k = 0.50  (upper layer owns the contact)
//!  27.99  │               k = 0.45
//!  26.00  ┆  water table
//!         │  Marnes
//!  20.00 ─┼─ contact      k = 0.45
//!  19.99  │               k = 0.30
//!         │  Alluvions
//!  12.00 ─┴─ base
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::contracts::{
    check_lithostatic_monotone, check_series_aligned, check_strictly_decreasing,
};
use crate::error::{ExportError, IngestError};
use crate::export::ProfileSink;
use crate::pressure::{sample_at_with, UNIT_WEIGHT_WATER};
use crate::types::{NeutralSample, PressureSample, Stratigraphy, WaterTable};

/// Distance below each internal contact at which the lower side is sampled (m).
pub const BOUNDARY_OFFSET: f64 = 0.01;

/// Tunables for evaluating a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Unit weight of water γw (kN/m³).
    pub unit_weight_water: f64,
    /// Offset below internal contacts (m).
    pub boundary_offset: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            unit_weight_water: UNIT_WEIGHT_WATER,
            boundary_offset: BOUNDARY_OFFSET,
        }
    }
}

impl ProfileConfig {
    pub fn with_unit_weight_water(mut self, unit_weight_water: f64) -> Self {
        self.unit_weight_water = unit_weight_water;
        self
    }

    pub fn with_boundary_offset(mut self, boundary_offset: f64) -> Self {
        self.boundary_offset = boundary_offset;
        self
    }

    /// Reject settings that would make the profile meaningless.
    pub fn validate(&self) -> Result<(), IngestError> {
        if !(self.unit_weight_water.is_finite() && self.unit_weight_water >= 0.0) {
            return Err(IngestError::InvalidConfig(format!(
                "unit_weight_water must be a non-negative number, got {}",
                self.unit_weight_water
            )));
        }
        if !(self.boundary_offset.is_finite() && self.boundary_offset > 0.0) {
            return Err(IngestError::InvalidConfig(format!(
                "boundary_offset must be a positive number, got {}",
                self.boundary_offset
            )));
        }
        Ok(())
    }
}

// =============================================================================
// SAMPLER
// =============================================================================

/// Elevations to evaluate, strictly decreasing (surface to depth).
pub fn sample_elevations(column: &Stratigraphy, water_table: WaterTable) -> Vec<f64> {
    sample_elevations_with(column, water_table, &ProfileConfig::default())
}

/// [`sample_elevations`] with an explicit boundary offset.
///
/// The water table is included even when it lies outside the column; the
/// pressures there come back as not-applicable.
pub fn sample_elevations_with(
    column: &Stratigraphy,
    water_table: WaterTable,
    config: &ProfileConfig,
) -> Vec<f64> {
    let mut elevations = Vec::with_capacity(2 * column.layer_count() + 2);
    elevations.push(column.top());
    elevations.push(water_table.elevation());
    for layer in column.layers() {
        elevations.push(layer.bottom_elevation);
    }
    for (contact, _, _) in column.internal_boundaries() {
        elevations.push(contact - config.boundary_offset);
    }

    elevations.sort_by(|a, b| b.total_cmp(a));
    elevations.dedup();

    check_strictly_decreasing(&elevations);
    elevations
}

// =============================================================================
// PROFILE
// =============================================================================

/// A column evaluated at every sampled elevation.
#[derive(Debug, Clone)]
pub struct Profile<'a> {
    column: &'a Stratigraphy,
    water_table: WaterTable,
    config: ProfileConfig,
    samples: Vec<PressureSample>,
}

/// Evaluate the column at the default sample elevations.
pub fn evaluate_profile(column: &Stratigraphy, water_table: WaterTable) -> Profile<'_> {
    evaluate_profile_with(column, water_table, ProfileConfig::default())
}

/// Evaluate the column with explicit settings.
pub fn evaluate_profile_with(
    column: &Stratigraphy,
    water_table: WaterTable,
    config: ProfileConfig,
) -> Profile<'_> {
    let elevations = sample_elevations_with(column, water_table, &config);
    let samples = evaluate_at(column, water_table, &config, &elevations);

    debug!(
        layers = column.layer_count(),
        samples = samples.len(),
        water_table = water_table.elevation(),
        "evaluated profile"
    );

    check_lithostatic_monotone(&samples);
    Profile {
        column,
        water_table,
        config,
        samples,
    }
}

/// Evaluate at caller-chosen elevations, in the given order.
#[cfg(feature = "parallel")]
pub fn evaluate_at(
    column: &Stratigraphy,
    water_table: WaterTable,
    config: &ProfileConfig,
    elevations: &[f64],
) -> Vec<PressureSample> {
    elevations
        .par_iter()
        .map(|&z| sample_at_with(z, column, water_table, config))
        .collect()
}

/// Evaluate at caller-chosen elevations, in the given order.
#[cfg(not(feature = "parallel"))]
pub fn evaluate_at(
    column: &Stratigraphy,
    water_table: WaterTable,
    config: &ProfileConfig,
    elevations: &[f64],
) -> Vec<PressureSample> {
    evaluate_at_sequential(column, water_table, config, elevations)
}

/// Single-threaded evaluation. Same output as [`evaluate_at`].
pub fn evaluate_at_sequential(
    column: &Stratigraphy,
    water_table: WaterTable,
    config: &ProfileConfig,
    elevations: &[f64],
) -> Vec<PressureSample> {
    elevations
        .iter()
        .map(|&z| sample_at_with(z, column, water_table, config))
        .collect()
}

impl<'a> Profile<'a> {
    #[inline]
    pub fn column(&self) -> &'a Stratigraphy {
        self.column
    }

    #[inline]
    pub fn water_table(&self) -> WaterTable {
        self.water_table
    }

    #[inline]
    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    #[inline]
    pub fn samples(&self) -> &[PressureSample] {
        &self.samples
    }

    /// The sample taken exactly at `elevation`, if it was sampled.
    pub fn sample_at(&self, elevation: f64) -> Option<&PressureSample> {
        self.samples.iter().find(|s| s.elevation == elevation)
    }

    /// Largest lithostatic pressure in the profile (0 for an all-outside profile).
    pub fn max_lithostatic(&self) -> f64 {
        self.samples
            .iter()
            .filter_map(|s| s.lithostatic)
            .fold(0.0, f64::max)
    }

    /// Column-oriented series with not-applicable shown as 0.
    pub fn series(&self) -> PressureSeries {
        let mut series = PressureSeries::with_capacity(self.samples.len());
        for sample in &self.samples {
            series.push(sample.or_neutral());
        }
        check_series_aligned(&series);
        series
    }

    /// Feed every sample to `sink`, surface first.
    pub fn render_into(&self, sink: &mut dyn ProfileSink) -> Result<(), ExportError> {
        sink.begin(self.column, self.water_table)?;
        for sample in &self.samples {
            sink.sample(sample)?;
        }
        sink.finish()
    }
}

/// Parallel arrays, one entry per sampled elevation, as a plotting library
/// wants them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PressureSeries {
    pub elevations: Vec<f64>,
    pub lithostatic: Vec<f64>,
    pub pore: Vec<f64>,
    pub effective: Vec<f64>,
    pub horizontal: Vec<f64>,
}

impl PressureSeries {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            elevations: Vec::with_capacity(capacity),
            lithostatic: Vec::with_capacity(capacity),
            pore: Vec::with_capacity(capacity),
            effective: Vec::with_capacity(capacity),
            horizontal: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, sample: NeutralSample) {
        self.elevations.push(sample.elevation);
        self.lithostatic.push(sample.lithostatic);
        self.pore.push(sample.pore);
        self.effective.push(sample.effective);
        self.horizontal.push(sample.horizontal);
    }

    pub fn len(&self) -> usize {
        self.elevations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }
}
