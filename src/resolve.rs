// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which layer does an elevation belong to?
//!
//! Layers are closed intervals `[bottom, top]`, so an internal contact belongs
//! to two layers at once. Rather than letting scan order decide, ownership of a
//! contact is a named rule, [`BoundaryOwnership`]:
//!
//! | Rule    | Owner of a shared contact | Used by                              |
//! |---------|---------------------------|--------------------------------------|
//! | `Upper` | shallower layer           | `resolve_layer`, lateral coefficient |
//! | `Lower` | deeper layer              | lower side of a discontinuity        |
//!
//! The ground surface and the column base have a single owner either way.
//!
//! Lithostatic pressure is continuous across a contact, so the rule only
//! matters for the lateral coefficient: at a contact the horizontal pressure
//! is computed with the coefficient of the layer above, and strictly below it
//! with the coefficient of the layer below. That jump is what the sampler's
//! boundary offset makes visible.
//!
//! Search is a binary search over the layer boundaries (layers are sorted by
//! construction), O(log n) per lookup.

use crate::types::{LayerIndex, Stratigraphy};

/// Which layer owns an elevation that sits exactly on a shared contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryOwnership {
    /// The shallower layer owns the contact.
    #[default]
    Upper,
    /// The deeper layer owns the contact.
    Lower,
}

/// Where an elevation falls relative to the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Strictly above the ground surface.
    AboveColumn,
    /// Strictly below the base of the column.
    BelowColumn,
    /// Inside exactly one layer (includes the surface and the base).
    Within(LayerIndex),
    /// Exactly on the contact between two layers.
    Contact { upper: LayerIndex, lower: LayerIndex },
}

impl Location {
    pub fn is_in_column(self) -> bool {
        !matches!(self, Location::AboveColumn | Location::BelowColumn)
    }
}

/// Find the layer containing `elevation`, with contacts owned by the upper
/// layer. `None` outside the column.
#[inline]
pub fn resolve_layer(elevation: f64, column: &Stratigraphy) -> Option<LayerIndex> {
    resolve_layer_with(elevation, column, BoundaryOwnership::Upper)
}

/// Find the layer containing `elevation` under an explicit ownership rule.
pub fn resolve_layer_with(
    elevation: f64,
    column: &Stratigraphy,
    ownership: BoundaryOwnership,
) -> Option<LayerIndex> {
    if !column.spans(elevation) {
        return None;
    }
    let layers = column.layers();

    let index = match ownership {
        // First layer (shallowest) whose bottom is at or above the elevation.
        BoundaryOwnership::Upper => layers.partition_point(|l| l.bottom_elevation > elevation),
        // Deepest layer whose top is at or above the elevation.
        BoundaryOwnership::Lower => {
            layers.partition_point(|l| l.top_elevation >= elevation) - 1
        }
    };

    debug_assert!(
        layers[index].contains(elevation),
        "Contract violation: resolved layer {} does not contain elevation {}",
        index,
        elevation
    );
    Some(LayerIndex(index))
}

/// The layer whose lateral coefficient applies at `elevation`.
///
/// At an internal contact this is the layer ABOVE the contact; everywhere else
/// it is the containing layer. The ground surface has no layer above, so it
/// takes the first layer's coefficient.
#[inline]
pub fn lateral_coefficient_owner(elevation: f64, column: &Stratigraphy) -> Option<LayerIndex> {
    resolve_layer_with(elevation, column, BoundaryOwnership::Upper)
}

/// Classify `elevation` against the column.
pub fn locate(elevation: f64, column: &Stratigraphy) -> Location {
    if elevation > column.top() {
        return Location::AboveColumn;
    }
    if elevation < column.bottom() {
        return Location::BelowColumn;
    }
    let upper = resolve_layer_with(elevation, column, BoundaryOwnership::Upper);
    let lower = resolve_layer_with(elevation, column, BoundaryOwnership::Lower);
    match (upper, lower) {
        (Some(upper), Some(lower)) if upper != lower => Location::Contact { upper, lower },
        (Some(index), _) | (None, Some(index)) => Location::Within(index),
        // NaN compares false against both ends of the column.
        (None, None) => Location::BelowColumn,
    }
}
