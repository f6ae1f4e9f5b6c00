// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polarmorph Grid: reference curves in both coordinate spaces at once.
//!
//! For a parameter set, coefficient mode and speed unit this crate builds
//! every reference curve a Polarmorph chart draws:
//! - constant-speed lines (an outer and an inner set),
//! - constant-coefficient lines over the core range,
//! - their continuation into the extended (high-coefficient) range,
//! - glide-ratio rays from the origin, one per quadrant.
//!
//! Each [`Curve`] stores its samples twice, as [`SpeedPoint`]s and as
//! [`CoefficientPoint`]s. The two sequences always have the same length and
//! index `i` of one is the transform of index `i` of the other, which is what
//! lets a renderer blend smoothly between the spaces.
//!
//! Generation is a full rebuild; [`GridCache`] keeps the last result until
//! the parameters, mode or unit change or it is invalidated explicitly (for
//! example after a palette change).
//!
//! ```rust
//! use polarmorph_grid::{CurveCategory, GridInput, GridPalette, GridSpec, generate};
//! use polarmorph_physics::{CoefficientMode, PhysicalParameters, SpeedUnit};
//!
//! let unit = SpeedUnit::MilesPerHour;
//! let spec = GridSpec::for_unit(unit);
//! let grid = generate(&GridInput {
//!     params: PhysicalParameters::STANDARD,
//!     mode: CoefficientMode::Dimensionless,
//!     unit,
//!     palette: &GridPalette::default(),
//!     spec: &spec,
//! });
//! assert!(grid.category(CurveCategory::GlideRay).count() > 0);
//! for curve in grid.curves() {
//!     assert_eq!(curve.speeds().len(), curve.coefficients().len());
//! }
//! ```
//!
//! [`SpeedPoint`]: polarmorph_physics::SpeedPoint
//! [`CoefficientPoint`]: polarmorph_physics::CoefficientPoint

mod cache;
mod curve;
mod generate;
mod label;
mod palette;
mod spec;

pub use cache::{GridCache, GridKey};
pub use curve::{
    CoefficientLine, Curve, CurveCategory, CurveKind, ExtendedPiece, ExtendedSegment, GlideRay,
    Quadrant, Sign, SpeedLine,
};
pub use generate::{Grid, GridInput, generate};
pub use label::format_value;
pub use palette::GridPalette;
pub use spec::{CoefficientGridSpec, GridSpec, SpeedGridSpec};
