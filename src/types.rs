// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a soil column.
//!
//! Layers, the validated stratigraphy that owns them, the water table and the
//! per-elevation pressure sample. All elevations are absolute (m NGF), so
//! "deeper" means numerically smaller.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Layer**: `top_elevation > bottom_elevation`, all fields finite,
//!   `unit_weight >= 0`, `lateral_coefficient >= 0`.
//!
//! - **Stratigraphy**: non-empty, ordered shallowest first, and contiguous:
//!   `layers[i].bottom_elevation == layers[i + 1].top_elevation`.
//!   A gap or an overlap here silently shifts every overburden below it.
//!
//! - **Derived sums**: thickness, layer weight, cumulative overburden and
//!   `k · overburden` are all finite. Finite fields alone do not guarantee
//!   this (`1e308 - -1e308` is infinite).
//!
//! - **WaterTable**: finite. It may sit anywhere, inside or outside the column.
//!
//! `Stratigraphy` and `WaterTable` can only be built through their checking
//! constructors (serde goes through the same checks), so the pressure functions
//! never re-validate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StratigraphyError;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Position of a layer in the column, 0 = shallowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct LayerIndex(pub usize);

impl LayerIndex {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<LayerIndex> for usize {
    fn from(index: LayerIndex) -> Self {
        index.0
    }
}

impl fmt::Display for LayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// LAYER
// =============================================================================

/// One stratigraphic layer.
///
/// Field aliases accept the column names used by spreadsheet exports
/// (`top_level`, `bottom_level`, `k`, `title`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Elevation of the layer top (m NGF).
    #[serde(alias = "top_level", alias = "top")]
    pub top_elevation: f64,
    /// Elevation of the layer bottom (m NGF).
    #[serde(alias = "bottom_level", alias = "bottom")]
    pub bottom_elevation: f64,
    /// Bulk unit weight γ (kN/m³).
    #[serde(alias = "gamma")]
    pub unit_weight: f64,
    /// Lateral earth pressure coefficient k.
    #[serde(alias = "k")]
    pub lateral_coefficient: f64,
    /// Soil name shown next to the layer.
    #[serde(alias = "title", default)]
    pub label: String,
}

impl Layer {
    pub fn new(
        top_elevation: f64,
        bottom_elevation: f64,
        unit_weight: f64,
        lateral_coefficient: f64,
        label: impl Into<String>,
    ) -> Self {
        Self {
            top_elevation,
            bottom_elevation,
            unit_weight,
            lateral_coefficient,
            label: label.into(),
        }
    }

    /// Full thickness of the layer (m).
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.top_elevation - self.bottom_elevation
    }

    /// Weight of the whole layer per unit area (kPa).
    #[inline]
    pub fn full_weight(&self) -> f64 {
        self.unit_weight * self.thickness()
    }

    /// Closed-interval membership: both contacts belong to the layer.
    #[inline]
    pub fn contains(&self, elevation: f64) -> bool {
        self.bottom_elevation <= elevation && elevation <= self.top_elevation
    }

    fn validate(&self, index: usize) -> Result<(), StratigraphyError> {
        let fields = [
            ("top_elevation", self.top_elevation),
            ("bottom_elevation", self.bottom_elevation),
            ("unit_weight", self.unit_weight),
            ("lateral_coefficient", self.lateral_coefficient),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(StratigraphyError::NonFinite { index, field });
            }
        }
        if self.top_elevation <= self.bottom_elevation {
            return Err(StratigraphyError::InvertedLayer {
                index,
                top: self.top_elevation,
                bottom: self.bottom_elevation,
            });
        }
        if !self.thickness().is_finite() {
            return Err(StratigraphyError::Overflow {
                index,
                quantity: "thickness",
            });
        }
        if self.unit_weight < 0.0 {
            return Err(StratigraphyError::NegativeUnitWeight {
                index,
                value: self.unit_weight,
            });
        }
        if self.lateral_coefficient < 0.0 {
            return Err(StratigraphyError::NegativeLateralCoefficient {
                index,
                value: self.lateral_coefficient,
            });
        }
        if !self.full_weight().is_finite() {
            return Err(StratigraphyError::Overflow {
                index,
                quantity: "layer weight",
            });
        }
        Ok(())
    }
}

// =============================================================================
// STRATIGRAPHY
// =============================================================================

/// A validated, contiguous column of layers, shallowest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Layer>", into = "Vec<Layer>")]
pub struct Stratigraphy {
    layers: Vec<Layer>,
}

impl Stratigraphy {
    /// Build a column, checking every layer and every contact.
    pub fn new(layers: Vec<Layer>) -> Result<Self, StratigraphyError> {
        if layers.is_empty() {
            return Err(StratigraphyError::Empty);
        }

        // INVARIANT: overburden and k · overburden stay finite down to every
        // layer base, so no pressure inside the column can be NaN or infinite.
        let mut overburden = 0.0;
        for (index, layer) in layers.iter().enumerate() {
            layer.validate(index)?;
            overburden += layer.full_weight();
            if !overburden.is_finite() {
                return Err(StratigraphyError::Overflow {
                    index,
                    quantity: "overburden",
                });
            }
            if !(layer.lateral_coefficient * overburden).is_finite() {
                return Err(StratigraphyError::Overflow {
                    index,
                    quantity: "lateral pressure",
                });
            }
        }

        // INVARIANT: contiguity. Compared exactly; the contact elevations come
        // from the same table cells so there is no rounding to absorb.
        for (index, pair) in layers.windows(2).enumerate() {
            let above_bottom = pair[0].bottom_elevation;
            let below_top = pair[1].top_elevation;
            if below_top < above_bottom {
                return Err(StratigraphyError::Gap {
                    index: index + 1,
                    above_bottom,
                    below_top,
                });
            }
            if below_top > above_bottom {
                return Err(StratigraphyError::Overlap {
                    index: index + 1,
                    above_bottom,
                    below_top,
                });
            }
        }

        Ok(Self { layers })
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline]
    pub fn layer(&self, index: LayerIndex) -> &Layer {
        &self.layers[index.0]
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Elevation of the ground surface (top of the shallowest layer).
    #[inline]
    pub fn top(&self) -> f64 {
        self.layers[0].top_elevation
    }

    /// Elevation of the base of the column (bottom of the deepest layer).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.layers[self.layers.len() - 1].bottom_elevation
    }

    /// Whether `elevation` lies inside `[bottom, top]`.
    #[inline]
    pub fn spans(&self, elevation: f64) -> bool {
        self.bottom() <= elevation && elevation <= self.top()
    }

    /// Contacts shared by two layers, shallowest first.
    ///
    /// Each item is `(elevation, upper, lower)`.
    pub fn internal_boundaries(
        &self,
    ) -> impl Iterator<Item = (f64, LayerIndex, LayerIndex)> + '_ {
        self.layers
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, layer)| (layer.top_elevation, LayerIndex(i - 1), LayerIndex(i)))
    }

    /// Whether `elevation` is exactly an internal contact.
    pub fn is_internal_boundary(&self, elevation: f64) -> bool {
        self.internal_boundaries().any(|(z, _, _)| z == elevation)
    }
}

impl TryFrom<Vec<Layer>> for Stratigraphy {
    type Error = StratigraphyError;

    fn try_from(layers: Vec<Layer>) -> Result<Self, Self::Error> {
        Stratigraphy::new(layers)
    }
}

impl From<Stratigraphy> for Vec<Layer> {
    fn from(column: Stratigraphy) -> Self {
        column.layers
    }
}

// =============================================================================
// WATER TABLE
// =============================================================================

/// Groundwater level (m NGF).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct WaterTable(f64);

impl WaterTable {
    pub fn new(elevation: f64) -> Result<Self, StratigraphyError> {
        if elevation.is_finite() {
            Ok(Self(elevation))
        } else {
            Err(StratigraphyError::NonFiniteWaterTable(elevation))
        }
    }

    #[inline]
    pub fn elevation(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for WaterTable {
    type Error = StratigraphyError;

    fn try_from(elevation: f64) -> Result<Self, Self::Error> {
        WaterTable::new(elevation)
    }
}

impl From<WaterTable> for f64 {
    fn from(water_table: WaterTable) -> Self {
        water_table.0
    }
}

impl fmt::Display for WaterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m NGF", self.0)
    }
}

// =============================================================================
// PRESSURE SAMPLE
// =============================================================================

/// Pressures at one elevation (kPa).
///
/// `None` means the elevation lies outside the column, which is a legitimate
/// answer and not zero. Pore pressure only depends on the water table and is
/// always defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureSample {
    pub elevation: f64,
    pub lithostatic: Option<f64>,
    pub pore: f64,
    pub effective: Option<f64>,
    pub horizontal: Option<f64>,
}

impl PressureSample {
    /// Whether the elevation lies inside the column.
    #[inline]
    pub fn in_column(&self) -> bool {
        self.lithostatic.is_some()
    }

    /// Display values with not-applicable replaced by 0.
    ///
    /// This is the plotting convention of the hand-calculation sheets; it
    /// belongs to presentation, so callers ask for it explicitly.
    pub fn or_neutral(&self) -> NeutralSample {
        NeutralSample {
            elevation: self.elevation,
            lithostatic: self.lithostatic.unwrap_or(0.0),
            pore: self.pore,
            effective: self.effective.unwrap_or(0.0),
            horizontal: self.horizontal.unwrap_or(0.0),
        }
    }
}

/// A [`PressureSample`] flattened for display, with 0 in place of
/// not-applicable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NeutralSample {
    pub elevation: f64,
    pub lithostatic: f64,
    pub pore: f64,
    pub effective: f64,
    pub horizontal: f64,
}
