// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exporting whole chart frames.

use core::time::Duration;

use kurbo::Rect;
use polarmorph_chart::{Chart, ChartConfig, VisibilityUpdate};
use polarmorph_svg::frame_to_svg;

fn chart() -> Chart {
    Chart::new(&ChartConfig::default(), Rect::new(0.0, 0.0, 600.0, 600.0)).unwrap()
}

#[test]
fn one_path_per_polyline() {
    let mut chart = chart();
    let frame = chart.render();
    let svg = frame_to_svg(&frame, 600, 600);
    assert_eq!(svg.matches("<path ").count(), frame.polylines.len());
    assert_eq!(svg.matches("<text ").count(), frame.labels.len());
    assert_eq!(svg.matches("<rect ").count(), 1);
}

#[test]
fn dataset_markers_become_circles() {
    let mut chart = chart();
    chart
        .add_dataset("suit", r#"stallpoint: [{"cl": 0.4, "cd": 0.5}, {"cl": 0.5, "cd": 0.4}]"#)
        .unwrap();
    chart.update_visibility(VisibilityUpdate {
        grid: Some(false),
        ..VisibilityUpdate::default()
    });
    let svg = frame_to_svg(&chart.render(), 600, 600);
    assert_eq!(svg.matches("<circle ").count(), 2);
}

#[test]
fn coefficient_view_uses_coefficient_titles() {
    let mut chart = chart();
    chart.switch_view(Duration::ZERO);
    chart.tick(Duration::from_secs(10));
    let svg = frame_to_svg(&chart.render(), 600, 600);
    assert!(svg.contains(">CL</text>"));
    assert!(svg.contains(">CD</text>"));
    assert!(!svg.contains(">VXS</text>"));
}
