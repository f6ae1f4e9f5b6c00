// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polarmorph Ease: normalized easing curves.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]`, is continuous and non-decreasing,
//! and hits both end points exactly so that a finished animation lands on its
//! target instead of an eased near-value.
//!
//! - [`ease_in_out_expo`] starts and ends slowly and is fastest in the middle.
//!   It paces the main view morph.
//! - [`ease_out_in_expo`] is fast at both ends and slow in the middle. It is
//!   used for secondary emphasis effects such as zooming during the morph.
//!
//! ```rust
//! use polarmorph_ease::{Easing, ease_in_out_expo};
//!
//! assert_eq!(ease_in_out_expo(0.0), 0.0);
//! assert_eq!(ease_in_out_expo(0.5), 0.5);
//! assert_eq!(ease_in_out_expo(1.0), 1.0);
//! assert!(Easing::InOutExpo.apply(0.25) < 0.25);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Steepness of [`ease_in_out_expo`].
const PRIMARY_SHARPNESS: f64 = 10.0;

/// Steepness of the curve inverted by [`ease_out_in_expo`].
const SECONDARY_SHARPNESS: f64 = 5.0;

/// Selects one of the easing curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// The identity curve.
    Linear,
    /// See [`ease_in_out_expo`].
    #[default]
    InOutExpo,
    /// See [`ease_out_in_expo`].
    OutInExpo,
}

impl Easing {
    /// Evaluates the curve at `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => normalize(t),
            Self::InOutExpo => ease_in_out_expo(t),
            Self::OutInExpo => ease_out_in_expo(t),
        }
    }
}

/// Slow–fast–slow exponential ease.
///
/// Built from two mirrored power-of-two halves, each rescaled so that the
/// curve passes exactly through `(0, 0)`, `(0.5, 0.5)` and `(1, 1)`.
/// Inputs are clamped to `[0, 1]`; NaN maps to `0`.
#[must_use]
pub fn ease_in_out_expo(t: f64) -> f64 {
    let t = normalize(t);
    if t <= 0.5 {
        expo_half(t, PRIMARY_SHARPNESS)
    } else {
        1.0 - expo_half(1.0 - t, PRIMARY_SHARPNESS)
    }
}

/// Fast–slow–fast ease, the inverse of an in-out exponential.
///
/// Inputs are clamped to `[0, 1]`; NaN maps to `0`.
#[must_use]
pub fn ease_out_in_expo(t: f64) -> f64 {
    let t = normalize(t);
    if t <= 0.5 {
        inverse_expo_half(t, SECONDARY_SHARPNESS)
    } else {
        1.0 - inverse_expo_half(1.0 - t, SECONDARY_SHARPNESS)
    }
}

fn normalize(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Lower half of the in-out curve on `[0, 0.5]`.
fn expo_half(t: f64, sharpness: f64) -> f64 {
    let floor = libm::exp2(-sharpness);
    (libm::exp2(sharpness * (2.0 * t - 1.0)) - floor) / (2.0 * (1.0 - floor))
}

/// Inverse of [`expo_half`] on `[0, 0.5]`.
fn inverse_expo_half(y: f64, sharpness: f64) -> f64 {
    let floor = libm::exp2(-sharpness);
    let inner = 2.0 * y * (1.0 - floor) + floor;
    ((libm::log2(inner) / sharpness + 1.0) / 2.0).clamp(0.0, 0.5)
}
