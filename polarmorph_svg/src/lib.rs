// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export for Polarmorph chart frames.
//!
//! [`SvgCanvas`] implements [`ChartCanvas`] by writing SVG elements as the
//! calls arrive; [`SvgCanvas::to_svg`] wraps them in a document. It is meant
//! for inspection and headless output, not pixel-exact rendering: text uses
//! the viewer's default sans-serif font and is centred with
//! `text-anchor`/`dominant-baseline`.
//!
//! ```rust
//! use kurbo::Rect;
//! use polarmorph_chart::{Chart, ChartConfig};
//! use polarmorph_svg::frame_to_svg;
//!
//! let mut chart = Chart::new(&ChartConfig::default(), Rect::new(0.0, 0.0, 640.0, 480.0)).unwrap();
//! let svg = frame_to_svg(&chart.render(), 640, 480);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("VXS"));
//! ```

use core::fmt::Write as _;

use kurbo::{Affine, BezPath, PathEl, Point, Rect};
use peniko::Color;
use polarmorph_chart::{ChartCanvas, Frame};

/// Font size of labels, in chart pixels.
pub const FONT_SIZE: f64 = 11.0;

/// A [`ChartCanvas`] that accumulates SVG markup.
#[derive(Clone, Debug, Default)]
pub struct SvgCanvas {
    body: String,
    group_open: bool,
}

impl SvgCanvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops everything drawn so far.
    pub fn clear(&mut self) {
        self.body.clear();
        self.group_open = false;
    }

    /// Wraps the markup drawn so far in an SVG document.
    ///
    /// `width`/`height` set both the `width`/`height` attributes and
    /// `viewBox="0 0 width height"`.
    #[must_use]
    pub fn to_svg(&self, width: u32, height: u32) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\" font-family=\"sans-serif\" font-size=\"{}\">",
            fmt_num(FONT_SIZE)
        );
        out.push_str(&self.body);
        if self.group_open {
            out.push_str("</g>");
        }
        out.push_str("</svg>");
        out
    }
}

/// Replays `frame` onto a fresh [`SvgCanvas`] and returns the document.
#[must_use]
pub fn frame_to_svg(frame: &Frame, width: u32, height: u32) -> String {
    let mut canvas = SvgCanvas::new();
    frame.replay(&mut canvas);
    canvas.to_svg(width, height)
}

impl ChartCanvas for SvgCanvas {
    fn set_transform(&mut self, transform: Affine) {
        if self.group_open {
            self.body.push_str("</g>");
            self.group_open = false;
        }
        if transform != Affine::IDENTITY {
            let _ = write!(self.body, "<g transform=\"{}\">", svg_matrix(transform));
            self.group_open = true;
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.abs();
        let _ = write!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
            fmt_num(rect.x0),
            fmt_num(rect.y0),
            fmt_num(rect.width()),
            fmt_num(rect.height()),
            paint_attrs("fill", color),
        );
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        let d = path_data(path);
        if d.is_empty() {
            return;
        }
        let _ = write!(
            self.body,
            "<path d=\"{d}\" fill=\"none\" stroke-width=\"{}\" stroke-linejoin=\"round\"{}/>",
            fmt_num(width),
            paint_attrs("stroke", color),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let _ = write!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius),
            paint_attrs("fill", color),
        );
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) {
        let _ = write!(
            self.body,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\"{}>",
            fmt_num(position.x),
            fmt_num(position.y),
            paint_attrs("fill", color),
        );
        escape_into(&mut self.body, text);
        self.body.push_str("</text>");
    }
}

/// `fill="#rrggbb"` (or `stroke=`), plus an opacity attribute when the colour
/// is translucent.
fn paint_attrs(kind: &str, color: Color) -> String {
    let rgba = color.to_rgba8();
    let mut attrs = format!(" {kind}=\"#{:02x}{:02x}{:02x}\"", rgba.r, rgba.g, rgba.b);
    if rgba.a != 255 {
        let _ = write!(
            attrs,
            " {kind}-opacity=\"{}\"",
            fmt_num(f64::from(rgba.a) / 255.0)
        );
    }
    attrs
}

fn svg_matrix(xf: Affine) -> String {
    let c = xf.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        fmt_num(c[0]),
        fmt_num(c[1]),
        fmt_num(c[2]),
        fmt_num(c[3]),
        fmt_num(c[4]),
        fmt_num(c[5]),
    )
}

fn path_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.iter() {
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{} {}", fmt_num(p.x), fmt_num(p.y));
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(
                    d,
                    "Q{} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y)
                );
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{} {} {} {} {} {}",
                    fmt_num(p1.x),
                    fmt_num(p1.y),
                    fmt_num(p2.x),
                    fmt_num(p2.y),
                    fmt_num(p3.x),
                    fmt_num(p3.y)
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

/// Formats with at most two decimals and no trailing zeros.
fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let mut s = format!("{v:.2}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, BezPath, Point, Rect};
    use peniko::Color;
    use polarmorph_chart::ChartCanvas;

    use super::{SvgCanvas, fmt_num};

    #[test]
    fn exports_basic_elements() {
        let mut canvas = SvgCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::from_rgba8(255, 0, 0, 255));
        let mut path = BezPath::new();
        path.move_to((1.0, 2.0));
        path.line_to((3.5, 4.25));
        canvas.stroke_path(&path, Color::from_rgba8(0, 0, 255, 128), 1.5);
        canvas.fill_circle(Point::new(10.0, 10.0), 3.0, Color::WHITE);
        let svg = canvas.to_svg(100, 50);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 100 50\""));
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"100\" height=\"50\" fill=\"#ff0000\"/>"));
        assert!(svg.contains("d=\"M1 2L3.5 4.25\""));
        assert!(svg.contains("stroke=\"#0000ff\" stroke-opacity=\"0.5\""));
        assert!(svg.contains("<circle cx=\"10\" cy=\"10\" r=\"3\" fill=\"#ffffff\"/>"));
    }

    #[test]
    fn transforms_open_and_close_groups() {
        let mut canvas = SvgCanvas::new();
        canvas.set_transform(Affine::scale(2.0));
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::BLACK);
        canvas.set_transform(Affine::IDENTITY);
        canvas.set_transform(Affine::translate((5.0, -3.0)));
        let svg = canvas.to_svg(10, 10);
        assert!(svg.contains("<g transform=\"matrix(2 0 0 2 0 0)\"><circle"));
        assert!(svg.contains("</g><g transform=\"matrix(1 0 0 1 5 -3)\">"));
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
    }

    #[test]
    fn text_is_escaped() {
        let mut canvas = SvgCanvas::new();
        canvas.draw_text("a<b & \"c\"", Point::new(1.0, 2.0), Color::WHITE);
        let svg = canvas.to_svg(10, 10);
        assert!(svg.contains(">a&lt;b &amp; &quot;c&quot;</text>"));
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(3.0), "3");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(1.005_1), "1.01");
        assert_eq!(fmt_num(f64::NAN), "0");
    }
}
