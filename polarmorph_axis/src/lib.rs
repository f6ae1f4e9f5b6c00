// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polarmorph Axis: which quantity goes on which screen axis.
//!
//! A Polarmorph chart has two coordinate spaces, speed space and coefficient
//! space, each drawn on the same pair of screen axes. This crate describes:
//! - [`AxisMapping`]: for each of the four axis roles, the physical quantity
//!   it shows and whether its sign is reversed.
//! - [`AxisPreset`]: named, swappable mappings.
//! - [`Projection`]: a mapping bound to a plot rectangle and value ranges,
//!   converting points of either space to pixels and back.
//!
//! Swapping a mapping never touches curve data; only projection and axis
//! titles change.
//!
//! ```rust
//! use kurbo::Rect;
//! use polarmorph_axis::{AxisPreset, Projection};
//! use polarmorph_physics::SpeedPoint;
//!
//! let projection = Projection::new(
//!     AxisPreset::Aligned.mapping(),
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//!     150.0,
//!     1.0,
//! );
//! let px = projection.speed_to_screen(SpeedPoint::new(150.0, 0.0));
//! assert_eq!(px.x, 400.0 + 300.0);
//! assert_eq!(px.y, 300.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod mapping;
mod projection;

pub use mapping::{
    AxisBinding, AxisMapping, AxisPreset, AxisRole, CoefficientQuantity, ResolvedAxis,
    SpeedQuantity,
};
pub use projection::{Projection, from_screen, to_screen_x, to_screen_y};
