// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Point, Rect};
use peniko::Color;
use polarmorph_dataset::DatasetId;
use polarmorph_grid::CurveCategory;

/// What a stroked polyline depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrokeRole {
    /// One of the two axis lines.
    Axis,
    /// A grid curve.
    Curve(CurveCategory),
}

/// A stroked, possibly broken, polyline in chart pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    /// What the polyline depicts.
    pub role: StrokeRole,
    /// Stroke colour.
    pub color: Color,
    /// Stroke width in chart pixels.
    pub width: f64,
    /// Geometry; culled runs start a new subpath.
    pub path: BezPath,
}

/// A filled dot marking one dataset sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Dataset the sample belongs to.
    pub dataset: DatasetId,
    /// Index of the sample within the dataset.
    pub index: usize,
    /// Position in chart pixels.
    pub center: Point,
    /// Radius in chart pixels.
    pub radius: f64,
    /// Fill colour.
    pub color: Color,
}

/// What a text label annotates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelRole {
    /// Value of a grid curve.
    Curve(CurveCategory),
    /// Title at the positive end of an axis.
    AxisTitle,
}

/// A text label centred on a position in chart pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// What the label annotates.
    pub role: LabelRole,
    /// Text.
    pub text: String,
    /// Centre of the text.
    pub position: Point,
    /// Text colour.
    pub color: Color,
}

/// Display list for one animation frame.
///
/// Everything except the background is in chart pixels and is drawn under
/// [`Frame::transform`].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Plot rectangle in view pixels.
    pub plot: Rect,
    /// Morph progress the frame was rendered at.
    pub progress: f64,
    /// Background fill of the plot rectangle.
    pub background: Color,
    /// Chart pixels to view pixels.
    pub transform: Affine,
    /// View pixels to chart pixels.
    pub inverse: Affine,
    /// Axis lines and grid curves, in drawing order.
    pub polylines: Vec<Polyline>,
    /// Dataset samples.
    pub markers: Vec<Marker>,
    /// Curve labels and axis titles.
    pub labels: Vec<Label>,
}

impl Frame {
    /// Maps a view pixel (for example a cursor position) to chart pixels.
    #[must_use]
    pub fn view_to_chart(&self, p: Point) -> Point {
        self.inverse * p
    }

    /// Issues the frame's draw calls on `canvas`.
    pub fn replay<C: ChartCanvas + ?Sized>(&self, canvas: &mut C) {
        canvas.set_transform(Affine::IDENTITY);
        canvas.fill_rect(self.plot, self.background);
        canvas.set_transform(self.transform);
        for line in &self.polylines {
            canvas.stroke_path(&line.path, line.color, line.width);
        }
        for marker in &self.markers {
            canvas.fill_circle(marker.center, marker.radius, marker.color);
        }
        for label in &self.labels {
            canvas.draw_text(&label.text, label.position, label.color);
        }
    }
}

/// Drawing surface a [`Frame`] is replayed onto.
///
/// Implementations only need to provide stroke, fill and text primitives; the
/// frame carries all chart logic.
pub trait ChartCanvas {
    /// Sets the transform applied to subsequent calls.
    fn set_transform(&mut self, transform: Affine);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes a path.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Draws text centred on `position`.
    fn draw_text(&mut self, text: &str, position: Point, color: Color);
}

/// A call captured by [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    /// See [`ChartCanvas::set_transform`].
    SetTransform(Affine),
    /// See [`ChartCanvas::fill_rect`].
    FillRect {
        /// Rectangle.
        rect: Rect,
        /// Fill colour.
        color: Color,
    },
    /// See [`ChartCanvas::stroke_path`].
    StrokePath {
        /// Path.
        path: BezPath,
        /// Stroke colour.
        color: Color,
        /// Stroke width.
        width: f64,
    },
    /// See [`ChartCanvas::fill_circle`].
    FillCircle {
        /// Centre.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill colour.
        color: Color,
    },
    /// See [`ChartCanvas::draw_text`].
    DrawText {
        /// Text.
        text: String,
        /// Centre of the text.
        position: Point,
        /// Text colour.
        color: Color,
    },
}

/// Canvas that records every call, for tests and inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in order.
    #[must_use]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Takes the recorded calls, leaving the recording empty.
    pub fn take(&mut self) -> Vec<CanvasOp> {
        core::mem::take(&mut self.ops)
    }
}

impl ChartCanvas for RecordingCanvas {
    fn set_transform(&mut self, transform: Affine) {
        self.ops.push(CanvasOp::SetTransform(transform));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(CanvasOp::FillRect { rect, color });
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        self.ops.push(CanvasOp::StrokePath {
            path: path.clone(),
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(CanvasOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) {
        self.ops.push(CanvasOp::DrawText {
            text: text.to_owned(),
            position,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, BezPath, Point, Rect};
    use peniko::Color;

    use super::{CanvasOp, Frame, Label, LabelRole, Polyline, RecordingCanvas, StrokeRole};

    #[test]
    fn replay_draws_background_then_content_under_transform() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        let zoom = Affine::scale(2.0);
        let frame = Frame {
            plot: Rect::new(0.0, 0.0, 100.0, 100.0),
            progress: 0.0,
            background: Color::BLACK,
            transform: zoom,
            inverse: zoom.inverse(),
            polylines: vec![Polyline {
                role: StrokeRole::Axis,
                color: Color::WHITE,
                width: 1.0,
                path: path.clone(),
            }],
            markers: Vec::new(),
            labels: vec![Label {
                role: LabelRole::AxisTitle,
                text: "VXS".into(),
                position: Point::new(5.0, 5.0),
                color: Color::WHITE,
            }],
        };

        let mut canvas = RecordingCanvas::new();
        frame.replay(&mut canvas);
        let ops = canvas.take();
        assert_eq!(ops.len(), 5);
        assert_eq!(ops[0], CanvasOp::SetTransform(Affine::IDENTITY));
        assert!(matches!(ops[1], CanvasOp::FillRect { .. }));
        assert_eq!(ops[2], CanvasOp::SetTransform(zoom));
        assert!(matches!(&ops[3], CanvasOp::StrokePath { path: p, .. } if *p == path));
        assert!(matches!(&ops[4], CanvasOp::DrawText { text, .. } if text == "VXS"));
        assert!(canvas.ops().is_empty());

        assert_eq!(frame.view_to_chart(Point::new(20.0, 8.0)), Point::new(10.0, 4.0));
    }
}
