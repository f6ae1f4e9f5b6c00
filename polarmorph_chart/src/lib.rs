// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polarmorph Chart: the animated morph between speed and coefficient space.
//!
//! A [`Chart`] is one interactive session. It owns a small set of value
//! objects ([`ParameterState`], [`VisibilityState`], [`ColorScheme`],
//! [`AnimationState`]), the cached grid and the loaded datasets. Each frame it
//! hands them to the pure [`render_frame`], which projects every paired sample
//! into both spaces, blends the two pixel positions at the current progress
//! and returns a [`Frame`]: a display list any [`ChartCanvas`] can replay.
//!
//! ## Animation
//!
//! The caller drives time. [`Chart::switch_view`] starts a morph,
//! [`Chart::tick`] advances it from a display-synchronised callback and
//! reports whether a redraw is needed. Only one morph runs at a time; a
//! switch request during a morph is ignored. When the morph completes its
//! progress is exactly `0` or `1`.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Rect;
//! use polarmorph_chart::{Chart, ChartConfig, RecordingCanvas, View};
//!
//! let mut chart = Chart::new(&ChartConfig::default(), Rect::new(0.0, 0.0, 800.0, 800.0)).unwrap();
//! assert_eq!(chart.view_label(), "SPEED VIEW");
//!
//! chart.switch_view(Duration::ZERO);
//! chart.tick(Duration::from_millis(750));
//! let halfway = chart.render();
//! assert!(halfway.progress > 0.0 && halfway.progress < 1.0);
//!
//! chart.tick(Duration::from_secs(2));
//! assert_eq!(chart.progress(), 1.0);
//! assert_eq!(chart.view(), View::Coefficient);
//!
//! let mut canvas = RecordingCanvas::new();
//! chart.render().replay(&mut canvas);
//! assert!(!canvas.ops().is_empty());
//! ```

mod animation;
mod chart;
mod config;
mod frame;
mod interpolate;
mod label;
mod render;
mod state;
mod zoom;

pub use animation::{AnimationState, DEFAULT_DURATION, Transition, View};
pub use chart::Chart;
pub use config::{ChartConfig, ConfigError, ParameterConfig};
pub use frame::{
    CanvasOp, ChartCanvas, Frame, Label, LabelRole, Marker, Polyline, RecordingCanvas, StrokeRole,
};
pub use interpolate::Interpolation;
pub use label::{LABEL_OFFSET, anchor_index, label_position, label_side};
pub use render::{AXIS_STROKE_WIDTH, GRID_STROKE_WIDTH, MARKER_RADIUS, RenderInput, render_frame};
pub use state::{ColorScheme, ColorUpdate, ParameterState, VisibilityState, VisibilityUpdate};
pub use zoom::{MAX_ZOOM, ZoomTransform, blend_focus};
