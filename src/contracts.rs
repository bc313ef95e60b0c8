// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for derived profile invariants.
//!
//! The column invariants (contiguity, ordering, finite fields) are enforced by
//! `Stratigraphy::new` and can never be violated afterwards. What remains are
//! properties of computed output that follow from those invariants. These
//! contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. State the **physical properties** the formulas guarantee
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                     |
//! |--------------------------------|----------------------------------------------|
//! | `check_strictly_decreasing`    | Sampler output is sorted surface-to-depth    |
//! | `check_lithostatic_monotone`   | Overburden never decreases with depth        |
//! | `check_pore_non_negative`      | Pore pressure is never negative              |
//! | `check_series_aligned`         | Plot series have one entry per elevation     |
//!
//! # Usage
//!
//! ```ignore
//! use lithos::contracts::*;
//!
//! // In debug builds, this panics if invariant is violated
//! check_lithostatic_monotone(profile.samples());
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // INVARIANT: the boundary offset is positive, otherwise the lower side of
    // a contact collapses onto the contact itself.
    assert!(crate::profile::BOUNDARY_OFFSET > 0.0);
    // INVARIANT: water is heavier than nothing.
    assert!(crate::pressure::UNIT_WEIGHT_WATER > 0.0);
};

use crate::profile::PressureSeries;
use crate::types::PressureSample;

// ============================================================================
// SAMPLER CONTRACTS
// ============================================================================

/// Check that elevations are strictly decreasing (no duplicates, no NaN).
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order or equal.
#[inline]
pub fn check_strictly_decreasing(elevations: &[f64]) {
    for i in 1..elevations.len() {
        // INVARIANT: strictly decreasing sample elevations
        debug_assert!(
            elevations[i - 1] > elevations[i],
            "Contract violation: sample elevations not strictly decreasing at {}: {} then {}",
            i,
            elevations[i - 1],
            elevations[i]
        );
    }
}

// ============================================================================
// PRESSURE CONTRACTS
// ============================================================================

/// Check that lithostatic pressure never decreases with depth.
///
/// `samples` must be ordered surface-to-depth. Samples outside the column are
/// skipped.
///
/// # Panics (debug builds only)
/// Panics if an in-column sample has less overburden than a shallower one.
#[inline]
pub fn check_lithostatic_monotone(samples: &[PressureSample]) {
    let mut previous: Option<(f64, f64)> = None;
    for sample in samples {
        let Some(lithostatic) = sample.lithostatic else {
            continue;
        };
        if let Some((elevation, pressure)) = previous {
            // INVARIANT: monotone overburden
            debug_assert!(
                lithostatic >= pressure,
                "Contract violation: lithostatic pressure decreases with depth: \
                 {} kPa at {} then {} kPa at {}",
                pressure,
                elevation,
                lithostatic,
                sample.elevation
            );
        }
        previous = Some((sample.elevation, lithostatic));
    }
    check_pore_non_negative(samples);
}

/// Check that every pore pressure is non-negative.
#[inline]
pub fn check_pore_non_negative(samples: &[PressureSample]) {
    for sample in samples {
        // INVARIANT: pore pressure >= 0
        debug_assert!(
            sample.pore >= 0.0,
            "Contract violation: negative pore pressure {} at {}",
            sample.pore,
            sample.elevation
        );
    }
}

// ============================================================================
// SERIES CONTRACTS
// ============================================================================

/// Check that all plot series have the same length.
#[inline]
pub fn check_series_aligned(series: &PressureSeries) {
    let n = series.elevations.len();
    // INVARIANT: one value per elevation in every series
    debug_assert!(
        series.lithostatic.len() == n
            && series.pore.len() == n
            && series.effective.len() == n
            && series.horizontal.len() == n,
        "Contract violation: pressure series lengths differ from {} elevations",
        n
    );
}
