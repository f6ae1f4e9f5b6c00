// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use polarmorph_physics::SpeedUnit;

/// Sampling of the constant-speed grids and glide rays, in the display unit.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedGridSpec {
    /// Spacing of the outer constant-speed lines.
    pub outer_step: f64,
    /// Largest magnitude of an outer line; also half the length of each line.
    pub outer_limit: f64,
    /// Distance between consecutive samples along an outer line.
    pub outer_sample_step: f64,
    /// Positive magnitudes of the inner lines; each is mirrored to negative.
    pub inner_values: Vec<f64>,
    /// Half the length of each inner line.
    pub inner_span: f64,
    /// Distance between consecutive samples along an inner line.
    pub inner_sample_step: f64,
    /// Length of a glide ray.
    pub ray_length: f64,
    /// Distance between consecutive samples along a glide ray.
    pub ray_sample_step: f64,
}

impl SpeedGridSpec {
    /// Round-number spacing for the given display unit.
    #[must_use]
    pub fn for_unit(unit: SpeedUnit) -> Self {
        match unit {
            SpeedUnit::MilesPerHour => Self {
                outer_step: 30.0,
                outer_limit: 150.0,
                outer_sample_step: 5.0,
                inner_values: vec![10.0, 20.0],
                inner_span: 60.0,
                inner_sample_step: 2.5,
                ray_length: 150.0,
                ray_sample_step: 5.0,
            },
            SpeedUnit::MetersPerSecond => Self {
                outer_step: 10.0,
                outer_limit: 70.0,
                outer_sample_step: 2.0,
                inner_values: vec![5.0],
                inner_span: 30.0,
                inner_sample_step: 1.0,
                ray_length: 70.0,
                ray_sample_step: 2.0,
            },
        }
    }
}

/// Sampling of the coefficient grids, in multiples of the mode's grid unit.
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientGridSpec {
    /// Largest magnitude of the core range.
    pub core_limit: f64,
    /// Spacing of the core constant-coefficient lines.
    pub core_step: f64,
    /// Distance between samples along a core line and along bridges.
    pub core_sample_step: f64,
    /// Core lines are labeled when their value is a multiple of this.
    pub core_label_step: f64,
    /// Companion value where a bridge hands over to its continuation.
    pub bridge_end: f64,
    /// Largest magnitude of the extended range.
    pub extended_limit: f64,
    /// Spacing of the whole-number far lines.
    pub far_step: f64,
    /// Distance between samples along continuation and far segments.
    pub extended_sample_step: f64,
    /// Magnitudes labeled in the extended range.
    pub extended_labels: Vec<f64>,
}

impl Default for CoefficientGridSpec {
    fn default() -> Self {
        Self {
            core_limit: 1.0,
            core_step: 0.1,
            core_sample_step: 0.01,
            core_label_step: 0.2,
            bridge_end: 1.25,
            extended_limit: 10.0,
            far_step: 1.0,
            extended_sample_step: 0.25,
            extended_labels: vec![1.0, 5.0, 10.0],
        }
    }
}

/// Complete sampling policy of a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    /// Constant-speed lines and glide rays.
    pub speed: SpeedGridSpec,
    /// Constant-coefficient lines.
    pub coefficient: CoefficientGridSpec,
    /// Glide ratios drawn as rays.
    pub glide_ratios: Vec<f64>,
}

impl GridSpec {
    /// The default policy for the given display unit.
    #[must_use]
    pub fn for_unit(unit: SpeedUnit) -> Self {
        Self {
            speed: SpeedGridSpec::for_unit(unit),
            coefficient: CoefficientGridSpec::default(),
            glide_ratios: vec![1.0, 2.0, 3.0],
        }
    }
}

/// Evenly spaced values from `start` to `end` inclusive.
///
/// The count is rounded so that accumulated error never drops or duplicates
/// the end point.
pub(crate) fn steps(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && end > start {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "count is a small, non-negative rounded ratio"
        )]
        let n = ((end - start) / step).round() as usize;
        n
    } else {
        0
    };
    (0..=count).map(move |i| start + i as f64 * step)
}

/// Non-zero multiples of `step` with magnitude up to `limit`, ascending.
pub(crate) fn symmetric_multiples(limit: f64, step: f64) -> impl Iterator<Item = f64> {
    steps(-limit, limit, step).filter(move |v| v.abs() > step * 1e-6)
}
