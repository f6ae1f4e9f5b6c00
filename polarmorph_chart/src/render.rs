// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Point, Rect};
use polarmorph_axis::{AxisRole, Projection, ResolvedAxis};
use polarmorph_dataset::DatasetCollection;
use polarmorph_grid::{CurveCategory, Grid};
use polarmorph_physics::{CoefficientPoint, SpeedPoint};

use crate::label::{anchor_index, label_position, label_side};
use crate::zoom::{MAX_ZOOM, ZoomTransform, blend_focus};
use crate::{
    ColorScheme, Frame, Interpolation, Label, LabelRole, Marker, Polyline, StrokeRole,
    VisibilityState,
};

/// Stroke width of grid curves.
pub const GRID_STROKE_WIDTH: f64 = 1.0;
/// Stroke width of the axis lines.
pub const AXIS_STROKE_WIDTH: f64 = 1.5;
/// Radius of dataset markers.
pub const MARKER_RADIUS: f64 = 3.0;

/// Everything one frame is rendered from.
#[derive(Clone, Copy, Debug)]
pub struct RenderInput<'a> {
    /// Curves for the current parameters.
    pub grid: &'a Grid,
    /// Loaded datasets, derived for the same parameters.
    pub datasets: &'a DatasetCollection,
    /// Pixel layout of both spaces.
    pub projection: Projection,
    /// Morph progress: 0 is speed space, 1 is coefficient space.
    pub progress: f64,
    /// What to draw.
    pub visibility: &'a VisibilityState,
    /// Colours of axes and background. Curve colours come from the grid.
    pub colors: &'a ColorScheme,
    /// How the two screen positions of a sample are blended.
    pub interpolation: Interpolation,
    /// Whether the zoom emphasis is applied.
    pub zoom: bool,
}

/// Builds the display list for one frame.
///
/// Every paired sample is projected into both spaces and the two pixel
/// positions are blended at `progress`. Samples that land more than one
/// plot size outside the plot break their polyline instead of being drawn.
#[must_use]
pub fn render_frame(input: &RenderInput<'_>) -> Frame {
    let progress = if input.progress.is_nan() {
        0.0
    } else {
        input.progress.clamp(0.0, 1.0)
    };
    let projection = &input.projection;
    let plot = projection.plot();
    let zoom = if input.zoom {
        zoom_for(projection, input.datasets, input.visibility, progress)
    } else {
        ZoomTransform::IDENTITY
    };
    let cull = plot.abs().inflate(plot.width().abs(), plot.height().abs());
    let visible = |p: Point| cull.contains(zoom.chart_to_view(p));
    let blend = |v: SpeedPoint, c: CoefficientPoint| {
        input.interpolation.blend(
            projection.speed_to_screen(v),
            projection.coefficients_to_screen(c),
            progress,
            projection.center(),
        )
    };

    let mut frame = Frame {
        plot,
        progress,
        background: input.colors.background,
        transform: zoom.forward(),
        inverse: zoom.inverse(),
        polylines: Vec::new(),
        markers: Vec::new(),
        labels: Vec::new(),
    };

    for category in CurveCategory::ALL {
        if !input.visibility.shows(category) {
            continue;
        }
        let side = label_side(category);
        for curve in input.grid.category(category) {
            let points: Vec<Point> = curve.pairs().map(|(v, c)| blend(v, c)).collect();
            if let Some(path) = broken_polyline(&points, visible) {
                frame.polylines.push(Polyline {
                    role: StrokeRole::Curve(category),
                    color: curve.color(),
                    width: GRID_STROKE_WIDTH,
                    path,
                });
            }
            let Some(text) = curve.label().filter(|_| input.visibility.labels) else {
                continue;
            };
            let index = anchor_index(curve, progress);
            if !points.get(index).is_some_and(|&p| visible(p)) {
                continue;
            }
            if let Some(position) = label_position(&points, index, side) {
                frame.labels.push(Label {
                    role: LabelRole::Curve(category),
                    text: text.to_owned(),
                    position,
                    color: curve.color(),
                });
            }
        }
    }

    if input.visibility.axes {
        push_axes(&mut frame, input, zoom, progress);
    }

    if input.visibility.datasets {
        for dataset in input.datasets.visible() {
            for (index, (v, c)) in dataset.pairs().enumerate() {
                let center = blend(v, c);
                if visible(center) {
                    frame.markers.push(Marker {
                        dataset: dataset.id(),
                        index,
                        center,
                        radius: MARKER_RADIUS,
                        color: dataset.color(),
                    });
                }
            }
        }
    }

    tracing::trace!(
        progress,
        polylines = frame.polylines.len(),
        markers = frame.markers.len(),
        labels = frame.labels.len(),
        zoom = zoom.factor(),
        "rendered frame"
    );
    frame
}

/// Builds a polyline through the visible points; every run of invisible
/// points lifts the pen. Returns `None` when nothing would be drawn.
fn broken_polyline(points: &[Point], visible: impl Fn(Point) -> bool) -> Option<BezPath> {
    let mut path = BezPath::new();
    let mut pen_down = false;
    let mut segments = 0_usize;
    for &p in points {
        if !visible(p) {
            pen_down = false;
            continue;
        }
        if pen_down {
            path.line_to(p);
            segments += 1;
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    (segments > 0).then_some(path)
}

/// Zoom focusing on the visible datasets, or on the positive quadrant of
/// each space when there are none.
pub(crate) fn zoom_for(
    projection: &Projection,
    datasets: &DatasetCollection,
    visibility: &VisibilityState,
    progress: f64,
) -> ZoomTransform {
    let mut speed = None;
    let mut coefficient = None;
    if visibility.datasets {
        for dataset in datasets.visible() {
            for (v, c) in dataset.pairs() {
                grow(&mut speed, projection.speed_to_screen(v));
                grow(&mut coefficient, projection.coefficients_to_screen(c));
            }
        }
    }
    let speed = speed.unwrap_or_else(|| projection.positive_speed_quadrant());
    let coefficient = coefficient.unwrap_or_else(|| projection.positive_coefficient_quadrant());
    ZoomTransform::focus(
        projection.plot(),
        blend_focus(speed, coefficient, progress),
        MAX_ZOOM,
    )
}

fn grow(bounds: &mut Option<Rect>, p: Point) {
    if !p.is_finite() {
        return;
    }
    *bounds = Some(match *bounds {
        Some(rect) => rect.union_pt(p),
        None => Rect::from_points(p, p),
    });
}

/// Axis lines through the plot centre spanning the visible area, and a
/// title at the positive end of each. Titles follow the space the morph is
/// closer to.
fn push_axes(frame: &mut Frame, input: &RenderInput<'_>, zoom: ZoomTransform, progress: f64) {
    let projection = &input.projection;
    let color = input.colors.axis;
    let center = projection.center();
    let view = zoom.inverse().transform_rect_bbox(projection.plot().abs());

    for (from, to) in [
        (Point::new(view.x0, center.y), Point::new(view.x1, center.y)),
        (Point::new(center.x, view.y0), Point::new(center.x, view.y1)),
    ] {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        frame.polylines.push(Polyline {
            role: StrokeRole::Axis,
            color,
            width: AXIS_STROKE_WIDTH,
            path,
        });
    }

    let mapping = projection.mapping();
    let roles = if progress < 0.5 {
        [AxisRole::SpeedX, AxisRole::SpeedY]
    } else {
        [AxisRole::CoefficientX, AxisRole::CoefficientY]
    };
    let mode = input.grid.key().mode;
    let [(x_title, x_reversed), (y_title, y_reversed)] = roles.map(|role| {
        let resolved = mapping.resolve(role);
        let title = match resolved {
            ResolvedAxis::Speed(binding) => binding.quantity.symbol(),
            ResolvedAxis::Coefficient(binding) => binding.quantity.symbol(mode),
        };
        (title, resolved.reversed())
    });
    // Screen y grows downward, so an unreversed vertical axis is positive at
    // the bottom.
    let x_end = if x_reversed { view.x0 + 24.0 } else { view.x1 - 24.0 };
    let y_end = if y_reversed { view.y0 + 14.0 } else { view.y1 - 14.0 };
    for (text, position) in [
        (x_title, Point::new(x_end, center.y - 12.0)),
        (y_title, Point::new(center.x + 20.0, y_end)),
    ] {
        frame.labels.push(Label {
            role: LabelRole::AxisTitle,
            text: text.to_owned(),
            position,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{PathEl, Point};

    use super::broken_polyline;

    #[test]
    fn invisible_points_lift_the_pen() {
        let points: Vec<_> = (0..6).map(|i| Point::new(f64::from(i), 0.0)).collect();
        let path = broken_polyline(&points, |p| p.x != 2.0).unwrap();
        let p = |x: f64| Point::new(x, 0.0);
        assert_eq!(
            path.elements(),
            [
                PathEl::MoveTo(p(0.0)),
                PathEl::LineTo(p(1.0)),
                PathEl::MoveTo(p(3.0)),
                PathEl::LineTo(p(4.0)),
                PathEl::LineTo(p(5.0)),
            ]
        );
    }

    #[test]
    fn nothing_visible_draws_nothing() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(broken_polyline(&points, |_| false).is_none());
        assert!(broken_polyline(&points[..1], |_| true).is_none());
    }
}
