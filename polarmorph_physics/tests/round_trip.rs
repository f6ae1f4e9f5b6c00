// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Round-trip and degenerate-input behavior of the speed/coefficient transforms.

use approx::assert_relative_eq;
use polarmorph_physics::{
    CoefficientPoint, PhysicalParameters, SpeedPoint, SpeedUnit, coefficients_to_display_speeds,
    coefficients_to_speeds, display_speeds_to_coefficients, speeds_to_coefficients,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn skydiver_scenario_matches_closed_form() {
    let params = PhysicalParameters::new(1.0, 2.0, 70.0).unwrap();
    let v = coefficients_to_speeds(CoefficientPoint::new(0.486, 0.485), &params);
    assert!((v.vxs - 22.373_897).abs() < 5e-7, "vxs = {}", v.vxs);
    assert!((v.vys - 22.327_860).abs() < 5e-7, "vys = {}", v.vys);

    let back = speeds_to_coefficients(v, &params);
    assert!((back.cl - 0.486).abs() < 1e-6);
    assert!((back.cd - 0.485).abs() < 1e-6);
}

#[test]
fn random_coefficients_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed_cafe);
    for _ in 0..2_000 {
        let params = PhysicalParameters::new(
            rng.gen_range(0.3..1.4),
            rng.gen_range(0.2..30.0),
            rng.gen_range(20.0..150.0),
        )
        .unwrap();
        let c = CoefficientPoint::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let back = speeds_to_coefficients(coefficients_to_speeds(c, &params), &params);
        assert_relative_eq!(back.cl, c.cl, epsilon = 1e-12, max_relative = 1e-6);
        assert_relative_eq!(back.cd, c.cd, epsilon = 1e-12, max_relative = 1e-6);
    }
}

#[test]
fn random_display_speeds_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    let params = PhysicalParameters::STANDARD;
    for unit in [SpeedUnit::MilesPerHour, SpeedUnit::MetersPerSecond] {
        for _ in 0..500 {
            let v = SpeedPoint::new(rng.gen_range(-150.0..150.0), rng.gen_range(-150.0..150.0));
            let c = display_speeds_to_coefficients(v, &params, unit);
            let back = coefficients_to_display_speeds(c, &params, unit);
            assert_relative_eq!(back.vxs, v.vxs, epsilon = 1e-9, max_relative = 1e-6);
            assert_relative_eq!(back.vys, v.vys, epsilon = 1e-9, max_relative = 1e-6);
        }
    }
}

#[test]
fn origin_is_exact_for_any_parameters() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let params = PhysicalParameters::new(
            rng.gen_range(0.01..5.0),
            rng.gen_range(0.01..100.0),
            rng.gen_range(0.1..1_000.0),
        )
        .unwrap();
        assert_eq!(
            coefficients_to_speeds(CoefficientPoint::ORIGIN, &params),
            SpeedPoint::ORIGIN
        );
        assert_eq!(
            speeds_to_coefficients(SpeedPoint::ORIGIN, &params),
            CoefficientPoint::ORIGIN
        );
    }
}

#[test]
fn single_axis_points_stay_on_their_axis() {
    let params = PhysicalParameters::STANDARD;
    let v = coefficients_to_speeds(CoefficientPoint::new(0.0, 0.8), &params);
    assert_eq!(v.vxs, 0.0);
    assert!(v.vys > 0.0);
    let c = speeds_to_coefficients(SpeedPoint::new(-40.0, 0.0), &params);
    assert_eq!(c.cd, 0.0);
    assert!(c.cl < 0.0);
}
