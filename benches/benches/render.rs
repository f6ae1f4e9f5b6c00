// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use polarmorph_chart::{Chart, ChartConfig, Interpolation};

/// A synthetic polar: `n` samples sweeping the lift coefficient.
fn dataset_text(n: u32) -> String {
    let mut text = String::from("stallpoint: [");
    for i in 0..n {
        let cl = 0.2 + 0.8 * f64::from(i) / f64::from(n);
        let cd = 0.3 + 0.5 * (cl - 0.5) * (cl - 0.5);
        if i > 0 {
            text.push(',');
        }
        text.push_str(&format!("{{\"cl\":{cl},\"cd\":{cd}}}"));
    }
    text.push(']');
    text
}

fn chart_at(fraction: f64, interpolation: Interpolation, zoom: bool) -> Chart {
    let config = ChartConfig {
        interpolation,
        zoom,
        ..ChartConfig::default()
    };
    let mut chart = Chart::new(&config, Rect::new(0.0, 0.0, 1024.0, 768.0))
        .expect("default config is valid");
    chart
        .add_dataset("synthetic", &dataset_text(500))
        .expect("synthetic dataset parses");
    if fraction > 0.0 {
        let duration = chart.animation().duration();
        chart.switch_view(Duration::ZERO);
        chart.tick(duration.mul_f64(fraction));
    }
    chart
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("polarmorph_chart");

    for (name, interpolation, zoom) in [
        ("linear", Interpolation::Linear, false),
        ("polar", Interpolation::Polar, false),
        ("linear_zoom", Interpolation::Linear, true),
    ] {
        for fraction in [0.0, 0.5, 1.0] {
            let mut chart = chart_at(fraction, interpolation, zoom);
            // Warm the grid cache so only frame building is measured.
            let _ = chart.render();
            group.bench_function(format!("render({name},t={fraction})"), |b| {
                b.iter(|| black_box(chart.render()));
            });
        }
    }

    group.bench_function("add_dataset(500)", |b| {
        let text = dataset_text(500);
        b.iter_batched(
            || chart_at(0.0, Interpolation::Linear, false),
            |mut chart| black_box(chart.add_dataset("bench", &text).map(|a| a.id)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
