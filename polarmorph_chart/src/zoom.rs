// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};
use polarmorph_ease::ease_out_in_expo;

/// Largest magnification the zoom emphasis applies.
pub const MAX_ZOOM: f64 = 4.0;

/// Fraction of the focus size added on every side before fitting.
const FOCUS_PADDING: f64 = 0.1;

/// The outer pan/zoom wrapped around a whole frame.
///
/// `forward` maps chart pixels (as laid out by the projection) to view
/// pixels; `inverse` undoes it exactly, for reading a cursor position back
/// into chart coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    forward: Affine,
    inverse: Affine,
    factor: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    /// No pan and no zoom.
    pub const IDENTITY: Self = Self {
        forward: Affine::IDENTITY,
        inverse: Affine::IDENTITY,
        factor: 1.0,
    };

    /// Centres `focus` in `plot`, magnified as far as it fits but no more
    /// than `max_zoom` and never below `1`.
    ///
    /// The transform is translate · scale · translate: move the focus centre
    /// to the origin, scale, then move the origin to the plot centre.
    /// Degenerate rectangles give [`Self::IDENTITY`].
    #[must_use]
    pub fn focus(plot: Rect, focus: Rect, max_zoom: f64) -> Self {
        let focus = focus.abs();
        let plot = plot.abs();
        if !(focus.area() > 0.0 && plot.area() > 0.0) {
            return Self::IDENTITY;
        }
        let padded = focus.inflate(
            focus.width() * FOCUS_PADDING,
            focus.height() * FOCUS_PADDING,
        );
        let fit = (plot.width() / padded.width()).min(plot.height() / padded.height());
        let factor = fit.clamp(1.0, max_zoom.max(1.0));
        let forward = Affine::translate(plot.center().to_vec2())
            * Affine::scale(factor)
            * Affine::translate(-padded.center().to_vec2());
        Self {
            forward,
            inverse: forward.inverse(),
            factor,
        }
    }

    /// Chart pixels to view pixels.
    #[must_use]
    pub fn forward(&self) -> Affine {
        self.forward
    }

    /// View pixels to chart pixels.
    #[must_use]
    pub fn inverse(&self) -> Affine {
        self.inverse
    }

    /// Uniform magnification.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Maps a view pixel back into chart pixels.
    #[must_use]
    pub fn view_to_chart(&self, p: Point) -> Point {
        self.inverse * p
    }

    /// Maps a chart pixel into view pixels.
    #[must_use]
    pub fn chart_to_view(&self, p: Point) -> Point {
        self.forward * p
    }
}

/// The focus rectangle at `progress`, moving from the speed-space focus to
/// the coefficient-space focus along the fast-slow-fast ease.
#[must_use]
pub fn blend_focus(speed: Rect, coefficient: Rect, progress: f64) -> Rect {
    let t = ease_out_in_expo(progress);
    let lerp = |a: f64, b: f64| a + (b - a) * t;
    Rect::new(
        lerp(speed.x0, coefficient.x0),
        lerp(speed.y0, coefficient.y0),
        lerp(speed.x1, coefficient.x1),
        lerp(speed.y1, coefficient.y1),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{MAX_ZOOM, ZoomTransform, blend_focus};

    const PLOT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    #[test]
    fn inverse_recovers_chart_coordinates() {
        let zoom = ZoomTransform::focus(PLOT, Rect::new(400.0, 100.0, 650.0, 300.0), MAX_ZOOM);
        for p in [
            Point::new(0.0, 0.0),
            Point::new(412.5, 233.0),
            Point::new(-90.0, 1e4),
        ] {
            let back = zoom.view_to_chart(zoom.chart_to_view(p));
            assert!((back - p).hypot() < 1e-9);
        }
    }

    #[test]
    fn focus_centre_lands_on_plot_centre() {
        let focus = Rect::new(400.0, 100.0, 650.0, 300.0);
        let zoom = ZoomTransform::focus(PLOT, focus, MAX_ZOOM);
        let c = zoom.chart_to_view(focus.center());
        assert!((c - PLOT.center()).hypot() < 1e-9);
    }

    #[test]
    fn factor_is_clamped() {
        let tiny = ZoomTransform::focus(PLOT, Rect::new(10.0, 10.0, 11.0, 11.0), MAX_ZOOM);
        assert_eq!(tiny.factor(), MAX_ZOOM);
        let huge = ZoomTransform::focus(PLOT, Rect::new(-1e4, -1e4, 1e4, 1e4), MAX_ZOOM);
        assert_eq!(huge.factor(), 1.0);
    }

    #[test]
    fn degenerate_focus_is_identity() {
        let flat = Rect::new(10.0, 10.0, 10.0, 50.0);
        assert_eq!(ZoomTransform::focus(PLOT, flat, MAX_ZOOM), ZoomTransform::IDENTITY);
    }

    #[test]
    fn blended_focus_hits_both_ends() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 70.0, 90.0);
        assert_eq!(blend_focus(a, b, 0.0), a);
        assert_eq!(blend_focus(a, b, 1.0), b);
        let mid = blend_focus(a, b, 0.5);
        assert!((mid.x0 - 25.0).abs() < 1e-12);
    }
}
