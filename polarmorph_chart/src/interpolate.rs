// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{PI, TAU};

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// How a sample's speed-space and coefficient-space screen positions are
/// blended during the morph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Straight line between the two pixel positions.
    ///
    /// Points whose two positions lie in different quadrants sweep across
    /// the plot centre.
    #[default]
    Linear,
    /// Angle and radius about the plot centre are blended separately, taking
    /// the shorter way round, so points orbit the centre instead of cutting
    /// through it.
    Polar,
}

impl Interpolation {
    /// Every policy.
    pub const ALL: [Self; 2] = [Self::Linear, Self::Polar];

    /// Configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Polar => "polar",
        }
    }

    /// Looks a policy up by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Position at `t` between `from` (`t = 0`) and `to` (`t = 1`).
    ///
    /// The end points are returned exactly.
    #[must_use]
    pub fn blend(self, from: Point, to: Point, t: f64, center: Point) -> Point {
        if t <= 0.0 {
            return from;
        }
        if t >= 1.0 {
            return to;
        }
        match self {
            Self::Linear => from.lerp(to, t),
            Self::Polar => center + polar_blend(from - center, to - center, t),
        }
    }
}

/// Blends two offsets from the centre by angle and radius.
fn polar_blend(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    let (ra, rb) = (a.hypot(), b.hypot());
    // A point at the centre has no angle of its own; borrow the other one's.
    let (angle_a, angle_b) = match (ra > 0.0, rb > 0.0) {
        (true, true) => (a.atan2(), b.atan2()),
        (true, false) => (a.atan2(), a.atan2()),
        (false, true) => (b.atan2(), b.atan2()),
        (false, false) => return Vec2::ZERO,
    };
    let delta = (angle_b - angle_a + PI).rem_euclid(TAU) - PI;
    let angle = angle_a + delta * t;
    let radius = ra + (rb - ra) * t;
    Vec2::from_angle(angle) * radius
}
