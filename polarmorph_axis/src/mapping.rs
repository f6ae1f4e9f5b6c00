// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use polarmorph_physics::{CoefficientMode, CoefficientPoint, SpeedPoint};

/// A speed-space quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpeedQuantity {
    /// Horizontal sustained speed.
    Vxs,
    /// Vertical sustained speed.
    Vys,
}

impl SpeedQuantity {
    /// Reads this quantity from a speed pair.
    #[inline]
    #[must_use]
    pub fn value(self, v: SpeedPoint) -> f64 {
        match self {
            Self::Vxs => v.vxs,
            Self::Vys => v.vys,
        }
    }

    /// Axis title.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Vxs => "VXS",
            Self::Vys => "VYS",
        }
    }
}

/// A coefficient-space quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoefficientQuantity {
    /// Lift (`CL` or `KL`).
    Lift,
    /// Drag (`CD` or `KD`).
    Drag,
}

impl CoefficientQuantity {
    /// Reads this quantity from a coefficient pair.
    #[inline]
    #[must_use]
    pub fn value(self, c: CoefficientPoint) -> f64 {
        match self {
            Self::Lift => c.cl,
            Self::Drag => c.cd,
        }
    }

    /// Axis title in the given coefficient mode.
    #[must_use]
    pub const fn symbol(self, mode: CoefficientMode) -> &'static str {
        match self {
            Self::Lift => mode.lift_symbol(),
            Self::Drag => mode.drag_symbol(),
        }
    }
}

/// One of the four axis roles of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRole {
    /// Horizontal axis in speed space.
    SpeedX,
    /// Vertical axis in speed space.
    SpeedY,
    /// Horizontal axis in coefficient space.
    CoefficientX,
    /// Vertical axis in coefficient space.
    CoefficientY,
}

/// A quantity bound to an axis, with an optional sign reversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisBinding<Q> {
    /// Quantity shown on the axis.
    pub quantity: Q,
    /// Whether the axis runs opposite to the screen direction.
    pub reversed: bool,
}

impl<Q> AxisBinding<Q> {
    /// Binds `quantity` in the screen direction.
    #[must_use]
    pub const fn new(quantity: Q) -> Self {
        Self {
            quantity,
            reversed: false,
        }
    }

    /// Binds `quantity` against the screen direction.
    #[must_use]
    pub const fn reversed(quantity: Q) -> Self {
        Self {
            quantity,
            reversed: true,
        }
    }

    /// `-1.0` for reversed axes, `1.0` otherwise.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> f64 {
        if self.reversed { -1.0 } else { 1.0 }
    }
}

/// Quantity and sign of an axis role, independent of its space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedAxis {
    /// The role shows a speed quantity.
    Speed(AxisBinding<SpeedQuantity>),
    /// The role shows a coefficient quantity.
    Coefficient(AxisBinding<CoefficientQuantity>),
}

impl ResolvedAxis {
    /// Whether the resolved axis is reversed.
    #[must_use]
    pub fn reversed(&self) -> bool {
        match self {
            Self::Speed(b) => b.reversed,
            Self::Coefficient(b) => b.reversed,
        }
    }
}

/// Assignment of quantities to the four axis roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AxisMapping {
    speed_x: AxisBinding<SpeedQuantity>,
    speed_y: AxisBinding<SpeedQuantity>,
    coefficient_x: AxisBinding<CoefficientQuantity>,
    coefficient_y: AxisBinding<CoefficientQuantity>,
}

impl AxisMapping {
    /// Creates a mapping.
    ///
    /// Returns `None` if a space would show the same quantity on both axes.
    #[must_use]
    pub fn new(
        speed_x: AxisBinding<SpeedQuantity>,
        speed_y: AxisBinding<SpeedQuantity>,
        coefficient_x: AxisBinding<CoefficientQuantity>,
        coefficient_y: AxisBinding<CoefficientQuantity>,
    ) -> Option<Self> {
        if speed_x.quantity == speed_y.quantity || coefficient_x.quantity == coefficient_y.quantity
        {
            return None;
        }
        Some(Self {
            speed_x,
            speed_y,
            coefficient_x,
            coefficient_y,
        })
    }

    /// Binding of the horizontal speed axis.
    #[must_use]
    pub fn speed_x(&self) -> AxisBinding<SpeedQuantity> {
        self.speed_x
    }

    /// Binding of the vertical speed axis.
    #[must_use]
    pub fn speed_y(&self) -> AxisBinding<SpeedQuantity> {
        self.speed_y
    }

    /// Binding of the horizontal coefficient axis.
    #[must_use]
    pub fn coefficient_x(&self) -> AxisBinding<CoefficientQuantity> {
        self.coefficient_x
    }

    /// Binding of the vertical coefficient axis.
    #[must_use]
    pub fn coefficient_y(&self) -> AxisBinding<CoefficientQuantity> {
        self.coefficient_y
    }

    /// Resolves the quantity and sign of a role.
    #[must_use]
    pub fn resolve(&self, role: AxisRole) -> ResolvedAxis {
        match role {
            AxisRole::SpeedX => ResolvedAxis::Speed(self.speed_x),
            AxisRole::SpeedY => ResolvedAxis::Speed(self.speed_y),
            AxisRole::CoefficientX => ResolvedAxis::Coefficient(self.coefficient_x),
            AxisRole::CoefficientY => ResolvedAxis::Coefficient(self.coefficient_y),
        }
    }
}

impl Default for AxisMapping {
    fn default() -> Self {
        AxisPreset::default().mapping()
    }
}

/// Named axis mappings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AxisPreset {
    /// `VXS`/`VYS` against `CL`/`CD`: every point and its co-image share a
    /// ray from the origin, so the morph is purely radial.
    #[default]
    Aligned,
    /// The aligned layout mirrored vertically, descent drawn upward.
    DescentUp,
    /// Classic drag polar in coefficient space: `CD` across, `CL` up.
    DragPolar,
}

impl AxisPreset {
    /// Every preset, in menu order.
    pub const ALL: [Self; 3] = [Self::Aligned, Self::DescentUp, Self::DragPolar];

    /// The mapping this preset names.
    #[must_use]
    pub const fn mapping(self) -> AxisMapping {
        use CoefficientQuantity::{Drag, Lift};
        use SpeedQuantity::{Vxs, Vys};
        match self {
            Self::Aligned => AxisMapping {
                speed_x: AxisBinding::new(Vxs),
                speed_y: AxisBinding::new(Vys),
                coefficient_x: AxisBinding::new(Lift),
                coefficient_y: AxisBinding::new(Drag),
            },
            Self::DescentUp => AxisMapping {
                speed_x: AxisBinding::new(Vxs),
                speed_y: AxisBinding::reversed(Vys),
                coefficient_x: AxisBinding::new(Lift),
                coefficient_y: AxisBinding::reversed(Drag),
            },
            Self::DragPolar => AxisMapping {
                speed_x: AxisBinding::new(Vxs),
                speed_y: AxisBinding::new(Vys),
                coefficient_x: AxisBinding::new(Drag),
                coefficient_y: AxisBinding::reversed(Lift),
            },
        }
    }

    /// Configuration name of the preset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aligned => "aligned",
            Self::DescentUp => "descent_up",
            Self::DragPolar => "drag_polar",
        }
    }

    /// Looks a preset up by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_round_trip_by_name() {
        for preset in AxisPreset::ALL {
            assert_eq!(AxisPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(AxisPreset::from_name("sideways"), None);
    }

    #[test]
    fn resolve_reports_quantity_and_sign() {
        let m = AxisPreset::DragPolar.mapping();
        assert_eq!(
            m.resolve(AxisRole::CoefficientY),
            ResolvedAxis::Coefficient(AxisBinding::reversed(CoefficientQuantity::Lift))
        );
        assert!(!m.resolve(AxisRole::SpeedY).reversed());
        assert_eq!(
            m.resolve(AxisRole::CoefficientX),
            ResolvedAxis::Coefficient(AxisBinding::new(CoefficientQuantity::Drag))
        );
        assert!(m.resolve(AxisRole::CoefficientY).reversed());
    }

    #[test]
    fn mapping_rejects_duplicate_quantities() {
        let dup = AxisMapping::new(
            AxisBinding::new(SpeedQuantity::Vxs),
            AxisBinding::reversed(SpeedQuantity::Vxs),
            AxisBinding::new(CoefficientQuantity::Lift),
            AxisBinding::new(CoefficientQuantity::Drag),
        );
        assert!(dup.is_none());
    }

    #[test]
    fn coefficient_symbols_follow_mode() {
        assert_eq!(
            CoefficientQuantity::Lift.symbol(CoefficientMode::Dimensionless),
            "CL"
        );
        assert_eq!(
            CoefficientQuantity::Drag.symbol(CoefficientMode::Dimensional),
            "KD"
        );
    }
}
