// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polarmorph Physics: sustained-speed and coefficient-space conversions.
//!
//! A body in sustained (unaccelerated) flight has a horizontal speed `vxs` and
//! a vertical speed `vys` at which lift and drag exactly balance gravity. The
//! same state can be described by its lift and drag coefficients `cl`/`cd`.
//! This crate provides:
//! - [`PhysicalParameters`]: validated air density, reference area and mass.
//! - [`coefficients_to_speeds`] / [`speeds_to_coefficients`]: the closed-form,
//!   mutually inverse transforms between the two descriptions.
//! - [`SpeedUnit`]: display units for speeds (m/s and mph).
//! - [`CoefficientMode`]: whether coefficient space holds the dimensionless
//!   `CL`/`CD` pair or the dimensional `KL`/`KD` pair.
//!
//! Both transforms map the origin to the origin instead of producing a NaN
//! from the zero denominator, so they are total over finite inputs.
//!
//! ## Example
//!
//! ```rust
//! use polarmorph_physics::{
//!     CoefficientPoint, PhysicalParameters, coefficients_to_speeds, speeds_to_coefficients,
//! };
//!
//! let params = PhysicalParameters::new(1.0, 2.0, 70.0).unwrap();
//! let speeds = coefficients_to_speeds(CoefficientPoint::new(0.486, 0.485), &params);
//! let back = speeds_to_coefficients(speeds, &params);
//! assert!((back.cl - 0.486).abs() < 1e-9);
//! assert!((back.cd - 0.485).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod mode;
mod params;
mod point;
mod transform;
mod units;

pub use mode::{CoefficientMode, DIMENSIONAL_GRID_UNIT};
pub use params::{ParameterError, ParameterField, PhysicalParameters};
pub use point::{CoefficientPoint, SpeedPoint};
pub use transform::{
    G, coefficients_to_display_speeds, coefficients_to_speeds, dimensional_to_speeds,
    display_speeds_to_coefficients, speeds_to_coefficients, speeds_to_dimensional,
};
pub use units::{MPS_TO_MPH, SpeedUnit};
