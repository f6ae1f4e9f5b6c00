// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use polarmorph_grid::{GridCache, GridInput, GridKey, GridPalette, GridSpec, generate};
use polarmorph_physics::{CoefficientMode, PhysicalParameters, SpeedUnit};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("polarmorph_grid");
    let palette = GridPalette::default();

    for unit in [SpeedUnit::MilesPerHour, SpeedUnit::MetersPerSecond] {
        for mode in [CoefficientMode::Dimensionless, CoefficientMode::Dimensional] {
            let spec = GridSpec::for_unit(unit);
            let input = GridInput {
                params: PhysicalParameters::STANDARD,
                mode,
                unit,
                palette: &palette,
                spec: &spec,
            };
            group.bench_function(format!("generate({unit:?},{mode:?})"), |b| {
                b.iter(|| black_box(generate(black_box(&input))));
            });
        }
    }

    // Alternating keys defeat the cache on every lookup.
    let mut cache = GridCache::new(GridSpec::for_unit(SpeedUnit::MilesPerHour));
    let keys = [
        GridKey {
            params: PhysicalParameters::STANDARD,
            mode: CoefficientMode::Dimensionless,
            unit: SpeedUnit::MilesPerHour,
        },
        GridKey {
            params: PhysicalParameters::STANDARD,
            mode: CoefficientMode::Dimensional,
            unit: SpeedUnit::MilesPerHour,
        },
    ];
    group.bench_function("cache_hit", |b| {
        b.iter(|| black_box(cache.get(keys[0], &palette).point_count()));
    });
    let mut flip = 0_usize;
    group.bench_function("cache_miss", |b| {
        b.iter(|| {
            flip ^= 1;
            black_box(cache.get(keys[flip], &palette).point_count())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
