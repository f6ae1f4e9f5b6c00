// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use polarmorph_physics::{CoefficientPoint, SpeedPoint};

use crate::mapping::{AxisBinding, AxisMapping, CoefficientQuantity, SpeedQuantity};

/// Maps an axis value onto a horizontal pixel coordinate.
///
/// `value == range` lands `half_extent` pixels right of `center`, or left of it
/// when `reversed`.
#[inline]
#[must_use]
pub fn to_screen_x(value: f64, center: f64, half_extent: f64, range: f64, reversed: bool) -> f64 {
    let sign = if reversed { -1.0 } else { 1.0 };
    center + sign * (value / range) * half_extent
}

/// Maps an axis value onto a vertical pixel coordinate.
///
/// Screen y grows downward, so an unreversed axis puts positive values below
/// `center`.
#[inline]
#[must_use]
pub fn to_screen_y(value: f64, center: f64, half_extent: f64, range: f64, reversed: bool) -> f64 {
    let sign = if reversed { -1.0 } else { 1.0 };
    center + sign * (value / range) * half_extent
}

/// Inverse of [`to_screen_x`] / [`to_screen_y`].
#[inline]
#[must_use]
pub fn from_screen(pixel: f64, center: f64, half_extent: f64, range: f64, reversed: bool) -> f64 {
    let sign = if reversed { -1.0 } else { 1.0 };
    sign * (pixel - center) / half_extent * range
}

/// An [`AxisMapping`] bound to a plot rectangle and value ranges.
///
/// Both spaces are centered on the plot rectangle. A value equal to the
/// space's range lands on the edge of the largest centered square, so both
/// screen axes share one pixel scale and glide angles are not distorted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    mapping: AxisMapping,
    plot: Rect,
    speed_range: f64,
    coefficient_range: f64,
}

impl Projection {
    /// Creates a projection.
    ///
    /// Ranges must be positive; non-positive ranges are replaced by `1.0`.
    #[must_use]
    pub fn new(mapping: AxisMapping, plot: Rect, speed_range: f64, coefficient_range: f64) -> Self {
        let positive = |r: f64| if r > 0.0 && r.is_finite() { r } else { 1.0 };
        Self {
            mapping,
            plot,
            speed_range: positive(speed_range),
            coefficient_range: positive(coefficient_range),
        }
    }

    /// The axis mapping in use.
    #[must_use]
    pub fn mapping(&self) -> AxisMapping {
        self.mapping
    }

    /// The plot rectangle in device pixels.
    #[must_use]
    pub fn plot(&self) -> Rect {
        self.plot
    }

    /// Value shown at the edge of the speed plot.
    #[must_use]
    pub fn speed_range(&self) -> f64 {
        self.speed_range
    }

    /// Value shown at the edge of the coefficient plot.
    #[must_use]
    pub fn coefficient_range(&self) -> f64 {
        self.coefficient_range
    }

    /// Pixel position of both origins.
    #[must_use]
    pub fn center(&self) -> Point {
        self.plot.center()
    }

    /// Pixel distance from the center to the edge of the value range.
    #[must_use]
    pub fn half_extent(&self) -> f64 {
        0.5 * self.plot.width().abs().min(self.plot.height().abs())
    }

    /// Projects a speed pair to pixels.
    #[must_use]
    pub fn speed_to_screen(&self, v: SpeedPoint) -> Point {
        let c = self.center();
        let h = self.half_extent();
        let sx = self.mapping.speed_x();
        let sy = self.mapping.speed_y();
        Point::new(
            to_screen_x(sx.quantity.value(v), c.x, h, self.speed_range, sx.reversed),
            to_screen_y(sy.quantity.value(v), c.y, h, self.speed_range, sy.reversed),
        )
    }

    /// Projects a coefficient pair to pixels.
    #[must_use]
    pub fn coefficients_to_screen(&self, k: CoefficientPoint) -> Point {
        let c = self.center();
        let h = self.half_extent();
        let cx = self.mapping.coefficient_x();
        let cy = self.mapping.coefficient_y();
        Point::new(
            to_screen_x(cx.quantity.value(k), c.x, h, self.coefficient_range, cx.reversed),
            to_screen_y(cy.quantity.value(k), c.y, h, self.coefficient_range, cy.reversed),
        )
    }

    /// Reads a speed pair back from pixels.
    #[must_use]
    pub fn screen_to_speed(&self, p: Point) -> SpeedPoint {
        let x = self.unproject(p.x, self.center().x, self.mapping.speed_x(), self.speed_range);
        let y = self.unproject(p.y, self.center().y, self.mapping.speed_y(), self.speed_range);
        let mut out = SpeedPoint::ORIGIN;
        for (binding, value) in [(self.mapping.speed_x(), x), (self.mapping.speed_y(), y)] {
            match binding.quantity {
                SpeedQuantity::Vxs => out.vxs = value,
                SpeedQuantity::Vys => out.vys = value,
            }
        }
        out
    }

    /// Reads a coefficient pair back from pixels.
    #[must_use]
    pub fn screen_to_coefficients(&self, p: Point) -> CoefficientPoint {
        let range = self.coefficient_range;
        let x = self.unproject(p.x, self.center().x, self.mapping.coefficient_x(), range);
        let y = self.unproject(p.y, self.center().y, self.mapping.coefficient_y(), range);
        let mut out = CoefficientPoint::ORIGIN;
        for (binding, value) in [
            (self.mapping.coefficient_x(), x),
            (self.mapping.coefficient_y(), y),
        ] {
            match binding.quantity {
                CoefficientQuantity::Lift => out.cl = value,
                CoefficientQuantity::Drag => out.cd = value,
            }
        }
        out
    }

    /// Pixel rectangle covering speed values in `[0, range]` on both axes.
    #[must_use]
    pub fn positive_speed_quadrant(&self) -> Rect {
        Rect::from_points(
            self.speed_to_screen(SpeedPoint::ORIGIN),
            self.speed_to_screen(SpeedPoint::new(self.speed_range, self.speed_range)),
        )
    }

    /// Pixel rectangle covering coefficient values in `[0, range]` on both axes.
    #[must_use]
    pub fn positive_coefficient_quadrant(&self) -> Rect {
        let r = self.coefficient_range;
        Rect::from_points(
            self.coefficients_to_screen(CoefficientPoint::ORIGIN),
            self.coefficients_to_screen(CoefficientPoint::new(r, r)),
        )
    }

    fn unproject<Q>(&self, pixel: f64, center: f64, binding: AxisBinding<Q>, range: f64) -> f64 {
        from_screen(pixel, center, self.half_extent(), range, binding.reversed)
    }
}
