// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    CoefficientPoint, PhysicalParameters, SpeedPoint, SpeedUnit, dimensional_to_speeds,
    speeds_to_dimensional,
};

/// Grid unit of the dimensional coefficient space, in s²/m².
///
/// A `KL` of this size corresponds to a `CL` of roughly one for a 70 kg body
/// with a 2 m² reference area at sea level, so both modes produce grids of
/// similar density.
pub const DIMENSIONAL_GRID_UNIT: f64 = 0.002;

/// Which coefficient pair spans coefficient space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoefficientMode {
    /// Dimensionless lift and drag coefficients `CL`/`CD`.
    #[default]
    Dimensionless,
    /// Dimensional `KL`/`KD = (CL, CD)·k/g`, independent of `ρ`, `S` and `m`.
    Dimensional,
}

impl CoefficientMode {
    /// Spacing unit of the coefficient grid in this mode.
    #[must_use]
    pub const fn grid_unit(self) -> f64 {
        match self {
            Self::Dimensionless => 1.0,
            Self::Dimensional => DIMENSIONAL_GRID_UNIT,
        }
    }

    /// Label of the lift axis.
    #[must_use]
    pub const fn lift_symbol(self) -> &'static str {
        match self {
            Self::Dimensionless => "CL",
            Self::Dimensional => "KL",
        }
    }

    /// Label of the drag axis.
    #[must_use]
    pub const fn drag_symbol(self) -> &'static str {
        match self {
            Self::Dimensionless => "CD",
            Self::Dimensional => "KD",
        }
    }

    /// Maps dimensionless `(CL, CD)` into this mode's coefficient space.
    #[must_use]
    pub fn from_dimensionless(
        self,
        c: CoefficientPoint,
        params: &PhysicalParameters,
    ) -> CoefficientPoint {
        match self {
            Self::Dimensionless => c,
            Self::Dimensional => c.scale(params.k_over_g()),
        }
    }

    /// Maps a point of this mode's coefficient space to speeds in `unit`.
    #[must_use]
    pub fn to_speeds(
        self,
        c: CoefficientPoint,
        params: &PhysicalParameters,
        unit: SpeedUnit,
    ) -> SpeedPoint {
        let k = match self {
            Self::Dimensionless => c.scale(params.k_over_g()),
            Self::Dimensional => c,
        };
        unit.speed_from_mps(dimensional_to_speeds(k))
    }

    /// Maps speeds in `unit` to a point of this mode's coefficient space.
    #[must_use]
    pub fn from_speeds(
        self,
        v: SpeedPoint,
        params: &PhysicalParameters,
        unit: SpeedUnit,
    ) -> CoefficientPoint {
        let k = speeds_to_dimensional(unit.speed_to_mps(v));
        match self {
            Self::Dimensionless => k.scale(1.0 / params.k_over_g()),
            Self::Dimensional => k,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CoefficientMode;
    use crate::{CoefficientPoint, PhysicalParameters, SpeedUnit, coefficients_to_speeds};

    #[test]
    fn dimensional_grid_is_parameter_free() {
        let light = PhysicalParameters::new(1.225, 2.0, 60.0).unwrap();
        let heavy = PhysicalParameters::new(0.9, 1.5, 110.0).unwrap();
        let k = CoefficientPoint::new(0.0015, 0.001);
        let a = CoefficientMode::Dimensional.to_speeds(k, &light, SpeedUnit::MetersPerSecond);
        let b = CoefficientMode::Dimensional.to_speeds(k, &heavy, SpeedUnit::MetersPerSecond);
        assert_eq!(a, b);
    }

    #[test]
    fn dimensionless_matches_plain_transform() {
        let p = PhysicalParameters::STANDARD;
        let c = CoefficientPoint::new(0.4, 0.25);
        let v = CoefficientMode::Dimensionless.to_speeds(c, &p, SpeedUnit::MetersPerSecond);
        assert_eq!(v, coefficients_to_speeds(c, &p));
    }

    #[test]
    fn modes_agree_on_speeds() {
        let p = PhysicalParameters::STANDARD;
        let c = CoefficientPoint::new(0.9, -0.2);
        let k = CoefficientMode::Dimensional.from_dimensionless(c, &p);
        let a = CoefficientMode::Dimensionless.to_speeds(c, &p, SpeedUnit::MilesPerHour);
        let b = CoefficientMode::Dimensional.to_speeds(k, &p, SpeedUnit::MilesPerHour);
        assert!((a.vxs - b.vxs).abs() < 1e-9);
        assert!((a.vys - b.vys).abs() < 1e-9);
        let back = CoefficientMode::Dimensional.from_speeds(b, &p, SpeedUnit::MilesPerHour);
        assert!((back.cl - k.cl).abs() < 1e-15);
    }
}
