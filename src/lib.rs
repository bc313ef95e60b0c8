// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vertical, pore, effective and lateral pressures through a layered soil column.
//!
//! A hand-calculation helper: closed-form integration of unit weights over
//! depth for a one-dimensional column of horizontal layers, with elevations in
//! m NGF, unit weights in kN/m³ and pressures in kPa.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  types.rs   │────▶│  resolve.rs  │────▶│  pressure.rs  │
//! │ (Layer,     │     │ (resolve_    │     │ (lithostatic, │
//! │ Stratigraphy│     │  layer,      │     │  pore, eff.,  │
//! │ WaterTable) │     │  ownership)  │     │  horizontal)  │
//! └─────────────┘     └──────────────┘     └───────────────┘
//!        ▲                                         │
//!        │                                         ▼
//! ┌─────────────┐                          ┌───────────────┐     ┌─────────────┐
//! │  ingest/    │                          │  profile.rs   │────▶│  export.rs  │
//! │ (JSON, CSV) │                          │ (sampler,     │     │ (ProfileSink│
//! └─────────────┘                          │  Profile)     │     │  CSV, JSON) │
//!                                          └───────────────┘     └─────────────┘
//! ```
//!
//! # Boundary policy
//!
//! Layers are closed intervals, so an internal contact belongs to two layers.
//! The shallower layer owns it ([`BoundaryOwnership::Upper`]). Lithostatic
//! pressure is the same from both sides; horizontal pressure is not, because
//! the lateral coefficient changes. The value AT a contact uses the upper
//! layer's coefficient and anything strictly below uses the lower one. The
//! sampler adds a point [`BOUNDARY_OFFSET`] below every contact so both sides
//! of the jump appear in a profile.
//!
//! # Usage
//!
//! ```
//! use lithos::{evaluate_profile, horizontal_pressure, Layer, Stratigraphy, WaterTable};
//!
//! let column = Stratigraphy::new(vec![
//!     Layer::new(35.0, 28.0, 18.0, 0.5, "Remblais"),
//!     Layer::new(28.0, 20.0, 20.0, 0.45, "Marnes"),
//!     Layer::new(20.0, 12.0, 21.0, 0.3, "Alluvions"),
//! ])?;
//! let water_table = WaterTable::new(26.0)?;
//!
//! assert_eq!(horizontal_pressure(20.0, &column, water_table), Some(0.45 * 226.0 + 60.0));
//!
//! let profile = evaluate_profile(&column, water_table);
//! assert_eq!(profile.samples().len(), 7);
//! # Ok::<(), lithos::StratigraphyError>(())
//! ```

// Module declarations
pub mod contracts;
mod error;
pub mod export;
pub mod ingest;
mod pressure;
mod profile;
mod resolve;
mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use error::{ExportError, IngestError, StratigraphyError};
pub use export::{CsvSink, JsonSink, ProfileSink};
pub use ingest::{load_column, ColumnInput, InputFormat};
pub use pressure::{
    effective_pressure, horizontal_pressure, lithostatic_pressure, pore_pressure,
    pore_pressure_with, sample_at, sample_at_with, UNIT_WEIGHT_WATER,
};
pub use profile::{
    evaluate_at, evaluate_at_sequential, evaluate_profile, evaluate_profile_with,
    sample_elevations, sample_elevations_with, PressureSeries, Profile, ProfileConfig,
    BOUNDARY_OFFSET,
};
pub use resolve::{
    lateral_coefficient_owner, locate, resolve_layer, resolve_layer_with, BoundaryOwnership,
    Location,
};
pub use types::{Layer, LayerIndex, NeutralSample, PressureSample, Stratigraphy, WaterTable};
