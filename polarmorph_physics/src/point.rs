// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A lift/drag coefficient pair.
///
/// Depending on the [`crate::CoefficientMode`] in use this holds either the
/// dimensionless `CL`/`CD` pair or the dimensional `KL`/`KD` pair.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CoefficientPoint {
    /// Lift coefficient.
    pub cl: f64,
    /// Drag coefficient.
    pub cd: f64,
}

impl CoefficientPoint {
    /// The origin of coefficient space.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a coefficient pair.
    #[inline]
    #[must_use]
    pub const fn new(cl: f64, cd: f64) -> Self {
        Self { cl, cd }
    }

    /// Returns `true` if both components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_origin(self) -> bool {
        self.cl == 0.0 && self.cd == 0.0
    }

    /// Returns `true` if both components are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.cl.is_finite() && self.cd.is_finite()
    }

    /// Multiplies both components by `factor`.
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.cl * factor, self.cd * factor)
    }
}

/// A sustained horizontal/vertical speed pair.
///
/// `vys` is positive in descent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SpeedPoint {
    /// Horizontal sustained speed.
    pub vxs: f64,
    /// Vertical sustained speed, positive downwards.
    pub vys: f64,
}

impl SpeedPoint {
    /// The origin of speed space.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a speed pair.
    #[inline]
    #[must_use]
    pub const fn new(vxs: f64, vys: f64) -> Self {
        Self { vxs, vys }
    }

    /// Returns `true` if both components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_origin(self) -> bool {
        self.vxs == 0.0 && self.vys == 0.0
    }

    /// Returns `true` if both components are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.vxs.is_finite() && self.vys.is_finite()
    }

    /// Multiplies both components by `factor`.
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.vxs * factor, self.vys * factor)
    }

    /// Total speed along the flight path.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f64 {
        libm::hypot(self.vxs, self.vys)
    }

    /// Horizontal distance covered per unit of height lost.
    ///
    /// Returns `None` when there is no vertical speed.
    #[must_use]
    pub fn glide_ratio(self) -> Option<f64> {
        if self.vys == 0.0 {
            None
        } else {
            Some(self.vxs / self.vys)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoefficientPoint, SpeedPoint};

    #[test]
    fn origin_detection() {
        assert!(SpeedPoint::ORIGIN.is_origin());
        assert!(CoefficientPoint::ORIGIN.is_origin());
        assert!(!SpeedPoint::new(0.0, -1.0).is_origin());
        assert!(!CoefficientPoint::new(1e-300, 0.0).is_origin());
    }

    #[test]
    fn glide_ratio_needs_vertical_speed() {
        assert_eq!(SpeedPoint::new(30.0, 10.0).glide_ratio(), Some(3.0));
        assert_eq!(SpeedPoint::new(30.0, 0.0).glide_ratio(), None);
    }

    #[test]
    fn magnitude_is_euclidean() {
        assert!((SpeedPoint::new(3.0, 4.0).magnitude() - 5.0).abs() < 1e-12);
    }
}
