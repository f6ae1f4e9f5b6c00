// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use polarmorph_axis::{CoefficientQuantity, SpeedQuantity};
use polarmorph_physics::{CoefficientPoint, SpeedPoint};

/// Direction along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Towards positive values.
    Positive,
    /// Towards negative values.
    Negative,
}

impl Sign {
    /// Both signs, positive first.
    pub const BOTH: [Self; 2] = [Self::Positive, Self::Negative];

    /// `1.0` or `-1.0`.
    #[inline]
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// A quadrant of speed space, named by the signs of `vxs` and `vys`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quadrant {
    /// Sign of the horizontal speed.
    pub vxs: Sign,
    /// Sign of the vertical speed.
    pub vys: Sign,
}

impl Quadrant {
    /// All four quadrants.
    pub const ALL: [Self; 4] = [
        Self::new(Sign::Positive, Sign::Positive),
        Self::new(Sign::Negative, Sign::Positive),
        Self::new(Sign::Negative, Sign::Negative),
        Self::new(Sign::Positive, Sign::Negative),
    ];

    /// Creates a quadrant.
    #[must_use]
    pub const fn new(vxs: Sign, vys: Sign) -> Self {
        Self { vxs, vys }
    }
}

/// A line along which one speed component is held constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedLine {
    /// The component held constant.
    pub held: SpeedQuantity,
    /// Its value, in the display unit.
    pub value: f64,
}

impl SpeedLine {
    /// Value of the component that varies along the line.
    #[must_use]
    pub fn companion(&self, v: SpeedPoint) -> f64 {
        match self.held {
            SpeedQuantity::Vxs => v.vys,
            SpeedQuantity::Vys => v.vxs,
        }
    }
}

/// A line along which one coefficient is held constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoefficientLine {
    /// The coefficient held constant.
    pub held: CoefficientQuantity,
    /// Its value, in the coefficient mode's units.
    pub value: f64,
}

impl CoefficientLine {
    /// Value of the coefficient that varies along the line.
    #[must_use]
    pub fn companion(&self, c: CoefficientPoint) -> f64 {
        match self.held {
            CoefficientQuantity::Lift => c.cd,
            CoefficientQuantity::Drag => c.cl,
        }
    }
}

/// Role of an extended-range segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtendedPiece {
    /// Finely sampled join between the end of a core line and its
    /// continuation.
    Bridge,
    /// A core line continued past the core range.
    Continuation,
    /// A whole-number line that lies entirely beyond the core range.
    Far,
}

/// One segment of the extended coefficient grid.
///
/// Each logical line is split per sign of its companion coefficient, so a
/// segment only runs away from the held axis in one direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtendedSegment {
    /// Which coefficient is held and at what value.
    pub line: CoefficientLine,
    /// Direction the companion coefficient runs in.
    pub companion_sign: Sign,
    /// Role of the segment.
    pub piece: ExtendedPiece,
}

/// A glide-ratio ray from the origin into one quadrant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlideRay {
    /// Horizontal over vertical speed along the ray.
    pub ratio: f64,
    /// Quadrant the ray extends into.
    pub quadrant: Quadrant,
}

/// What a curve represents, with the data relevant to that kind only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveKind {
    /// Line of the outer constant-speed grid.
    OuterSpeed(SpeedLine),
    /// Line of the finer constant-speed grid near the origin.
    InnerSpeed(SpeedLine),
    /// Constant-coefficient line over the core range.
    OuterCoefficient(CoefficientLine),
    /// Segment of the extended coefficient grid.
    ExtendedCoefficient(ExtendedSegment),
    /// Glide-ratio ray.
    GlideRay(GlideRay),
}

impl CurveKind {
    /// Flat category used for visibility and colours.
    #[must_use]
    pub fn category(&self) -> CurveCategory {
        match self {
            Self::OuterSpeed(_) => CurveCategory::OuterSpeed,
            Self::InnerSpeed(_) => CurveCategory::InnerSpeed,
            Self::OuterCoefficient(_) => CurveCategory::OuterCoefficient,
            Self::ExtendedCoefficient(_) => CurveCategory::ExtendedCoefficient,
            Self::GlideRay(_) => CurveCategory::GlideRay,
        }
    }
}

/// Category of a curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveCategory {
    /// See [`CurveKind::OuterSpeed`].
    OuterSpeed,
    /// See [`CurveKind::InnerSpeed`].
    InnerSpeed,
    /// See [`CurveKind::OuterCoefficient`].
    OuterCoefficient,
    /// See [`CurveKind::ExtendedCoefficient`].
    ExtendedCoefficient,
    /// See [`CurveKind::GlideRay`].
    GlideRay,
}

impl CurveCategory {
    /// Every category, in drawing order.
    pub const ALL: [Self; 5] = [
        Self::ExtendedCoefficient,
        Self::OuterCoefficient,
        Self::OuterSpeed,
        Self::InnerSpeed,
        Self::GlideRay,
    ];

    /// Whether curves of this category are generated from speed samples.
    #[must_use]
    pub fn is_speed_side(self) -> bool {
        matches!(self, Self::OuterSpeed | Self::InnerSpeed | Self::GlideRay)
    }
}

/// A reference curve sampled in both spaces.
#[derive(Clone, Debug)]
pub struct Curve {
    kind: CurveKind,
    label: Option<String>,
    color: Color,
    speeds: Vec<SpeedPoint>,
    coefficients: Vec<CoefficientPoint>,
}

impl Curve {
    /// Builds a curve from speed samples, deriving each coefficient sample
    /// from the speed sample at the same index.
    pub(crate) fn from_speeds(
        kind: CurveKind,
        label: Option<String>,
        color: Color,
        speeds: Vec<SpeedPoint>,
        to_coefficients: impl Fn(SpeedPoint) -> CoefficientPoint,
    ) -> Self {
        let coefficients = speeds.iter().map(|&v| to_coefficients(v)).collect();
        Self {
            kind,
            label,
            color,
            speeds,
            coefficients,
        }
    }

    /// Builds a curve from coefficient samples, deriving each speed sample
    /// from the coefficient sample at the same index.
    pub(crate) fn from_coefficients(
        kind: CurveKind,
        label: Option<String>,
        color: Color,
        coefficients: Vec<CoefficientPoint>,
        to_speeds: impl Fn(CoefficientPoint) -> SpeedPoint,
    ) -> Self {
        let speeds = coefficients.iter().map(|&c| to_speeds(c)).collect();
        Self {
            kind,
            label,
            color,
            speeds,
            coefficients,
        }
    }

    /// What the curve represents.
    #[must_use]
    pub fn kind(&self) -> &CurveKind {
        &self.kind
    }

    /// Category of the curve.
    #[must_use]
    pub fn category(&self) -> CurveCategory {
        self.kind.category()
    }

    /// Label text, if the curve is labeled.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Stroke colour.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Samples in speed space (display unit).
    #[must_use]
    pub fn speeds(&self) -> &[SpeedPoint] {
        &self.speeds
    }

    /// Samples in coefficient space (coefficient mode units).
    #[must_use]
    pub fn coefficients(&self) -> &[CoefficientPoint] {
        &self.coefficients
    }

    /// Number of paired samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    /// Whether the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    /// Paired samples in index order.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (SpeedPoint, CoefficientPoint)> + '_ {
        self.speeds
            .iter()
            .copied()
            .zip(self.coefficients.iter().copied())
    }
}
