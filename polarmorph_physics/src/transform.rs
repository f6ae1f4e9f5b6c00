// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed-form transforms between coefficient and speed space.
//!
//! In sustained flight the aerodynamic force balances weight:
//! `½ρS·CL·v·vxs = m·g` and likewise for drag with `vys`, where
//! `v = |(vxs, vys)|`. Writing `K = (KL, KD) = (CL, CD)·k/g` with
//! `k = ½ρS/m` this gives `v = |K|^-½` and `(vxs, vys) = K / |K|^(3/2)`,
//! whose inverse is `K = V / |V|³`.

use crate::{CoefficientPoint, PhysicalParameters, SpeedPoint, SpeedUnit};

/// Gravitational acceleration in m/s².
pub const G: f64 = 9.8;

/// Converts dimensional coefficients `(KL, KD)` into sustained speeds in m/s.
///
/// The origin maps to the origin.
#[must_use]
pub fn dimensional_to_speeds(k: CoefficientPoint) -> SpeedPoint {
    let denom = libm::pow(k.cl * k.cl + k.cd * k.cd, 0.75);
    if denom == 0.0 {
        return SpeedPoint::ORIGIN;
    }
    SpeedPoint::new(k.cl / denom, k.cd / denom)
}

/// Converts sustained speeds in m/s into dimensional coefficients `(KL, KD)`.
///
/// The origin maps to the origin.
#[must_use]
pub fn speeds_to_dimensional(v: SpeedPoint) -> CoefficientPoint {
    let denom = libm::pow(v.vxs * v.vxs + v.vys * v.vys, 1.5);
    if denom == 0.0 {
        return CoefficientPoint::ORIGIN;
    }
    CoefficientPoint::new(v.vxs / denom, v.vys / denom)
}

/// Converts dimensionless `(CL, CD)` into sustained speeds in m/s.
///
/// This is called for every grid sample, so the parameters are trusted as
/// already validated by [`PhysicalParameters::new`]. The origin maps to the
/// origin rather than to a NaN.
#[must_use]
pub fn coefficients_to_speeds(c: CoefficientPoint, params: &PhysicalParameters) -> SpeedPoint {
    dimensional_to_speeds(c.scale(params.k_over_g()))
}

/// Converts sustained speeds in m/s into dimensionless `(CL, CD)`.
///
/// The origin maps to the origin rather than to a NaN.
#[must_use]
pub fn speeds_to_coefficients(v: SpeedPoint, params: &PhysicalParameters) -> CoefficientPoint {
    speeds_to_dimensional(v).scale(1.0 / params.k_over_g())
}

/// [`coefficients_to_speeds`] with the result expressed in `unit`.
#[must_use]
pub fn coefficients_to_display_speeds(
    c: CoefficientPoint,
    params: &PhysicalParameters,
    unit: SpeedUnit,
) -> SpeedPoint {
    unit.speed_from_mps(coefficients_to_speeds(c, params))
}

/// [`speeds_to_coefficients`] for speeds expressed in `unit`.
#[must_use]
pub fn display_speeds_to_coefficients(
    v: SpeedPoint,
    params: &PhysicalParameters,
    unit: SpeedUnit,
) -> CoefficientPoint {
    speeds_to_coefficients(unit.speed_to_mps(v), params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PhysicalParameters {
        PhysicalParameters::new(1.0, 2.0, 70.0).unwrap()
    }

    #[test]
    fn origin_maps_to_origin_both_ways() {
        let p = params();
        let v = coefficients_to_speeds(CoefficientPoint::ORIGIN, &p);
        assert_eq!(v, SpeedPoint::ORIGIN);
        let c = speeds_to_coefficients(SpeedPoint::ORIGIN, &p);
        assert_eq!(c, CoefficientPoint::ORIGIN);
        assert!(v.is_finite() && c.is_finite());
    }

    #[test]
    fn matches_closed_form() {
        let p = params();
        let k = 0.5 * 1.0 * 2.0 / 70.0;
        let kl = 0.486 * k / G;
        let kd = 0.485 * k / G;
        let d = libm::pow(kl * kl + kd * kd, 0.75);
        let v = coefficients_to_speeds(CoefficientPoint::new(0.486, 0.485), &p);
        assert!((v.vxs - kl / d).abs() < 1e-9);
        assert!((v.vys - kd / d).abs() < 1e-9);
    }

    #[test]
    fn speed_magnitude_is_inverse_root_of_k_magnitude() {
        let k = CoefficientPoint::new(0.0, 0.0016);
        let v = dimensional_to_speeds(k);
        assert!(v.vxs.abs() < 1e-12);
        assert!((v.vys - 25.0).abs() < 1e-9);
    }

    #[test]
    fn display_unit_conversion_round_trips() {
        let p = params();
        let c = CoefficientPoint::new(0.7, 0.3);
        let mph = coefficients_to_display_speeds(c, &p, SpeedUnit::MilesPerHour);
        let mps = coefficients_to_speeds(c, &p);
        assert!((mph.vxs / mps.vxs - crate::MPS_TO_MPH).abs() < 1e-12);
        let back = display_speeds_to_coefficients(mph, &p, SpeedUnit::MilesPerHour);
        assert!((back.cl - c.cl).abs() < 1e-12);
        assert!((back.cd - c.cd).abs() < 1e-12);
    }
}
