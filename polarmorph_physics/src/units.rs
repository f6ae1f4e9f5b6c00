// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::SpeedPoint;

/// Miles per hour in one metre per second.
pub const MPS_TO_MPH: f64 = 2.236_936_292_054_402;

/// Unit used to display speeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedUnit {
    /// Miles per hour.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "mph"))]
    MilesPerHour,
    /// Metres per second.
    #[cfg_attr(feature = "serde", serde(rename = "mps"))]
    MetersPerSecond,
}

impl SpeedUnit {
    /// Display units per m/s.
    #[must_use]
    pub const fn per_mps(self) -> f64 {
        match self {
            Self::MilesPerHour => MPS_TO_MPH,
            Self::MetersPerSecond => 1.0,
        }
    }

    /// Converts a value in m/s into this unit.
    #[inline]
    #[must_use]
    pub fn from_mps(self, value: f64) -> f64 {
        value * self.per_mps()
    }

    /// Converts a value in this unit into m/s.
    #[inline]
    #[must_use]
    pub fn to_mps(self, value: f64) -> f64 {
        value / self.per_mps()
    }

    /// Converts a speed pair in m/s into this unit.
    #[inline]
    #[must_use]
    pub fn speed_from_mps(self, v: SpeedPoint) -> SpeedPoint {
        v.scale(self.per_mps())
    }

    /// Converts a speed pair in this unit into m/s.
    #[inline]
    #[must_use]
    pub fn speed_to_mps(self, v: SpeedPoint) -> SpeedPoint {
        v.scale(1.0 / self.per_mps())
    }

    /// Unit suffix for labels.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::MilesPerHour => "mph",
            Self::MetersPerSecond => "m/s",
        }
    }

    /// Parses the short names used by configuration (`"mph"`, `"mps"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mph" => Some(Self::MilesPerHour),
            "mps" | "m/s" => Some(Self::MetersPerSecond),
            _ => None,
        }
    }
}
