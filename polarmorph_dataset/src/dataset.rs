// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use peniko::Color;
use polarmorph_physics::{
    CoefficientMode, CoefficientPoint, PhysicalParameters, SpeedPoint, SpeedUnit,
    coefficients_to_display_speeds,
};

/// Stable identifier of a loaded dataset. Never reused within a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetId(pub(crate) u64);

impl DatasetId {
    /// The raw id value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inputs the derived sequences of a dataset were computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Derivation {
    /// Air density, area and mass.
    pub params: PhysicalParameters,
    /// Coefficient space the display coefficients are expressed in.
    pub mode: CoefficientMode,
    /// Unit the speeds are expressed in.
    pub unit: SpeedUnit,
}

/// A loaded set of measured samples.
///
/// The parsed `(CL, CD)` samples are authoritative and never change. The
/// speeds and display coefficients are derived from them for the current
/// [`Derivation`] and always have the same length as the source.
#[derive(Clone, Debug)]
pub struct Dataset {
    id: DatasetId,
    name: String,
    color: Color,
    visible: bool,
    source: Vec<CoefficientPoint>,
    speeds: Vec<SpeedPoint>,
    coefficients: Vec<CoefficientPoint>,
    derivation: Derivation,
}

impl Dataset {
    pub(crate) fn new(
        id: DatasetId,
        name: String,
        color: Color,
        source: Vec<CoefficientPoint>,
        derivation: Derivation,
    ) -> Self {
        let mut dataset = Self {
            id,
            name,
            color,
            visible: true,
            source,
            speeds: Vec::new(),
            coefficients: Vec::new(),
            derivation,
        };
        dataset.derive(derivation);
        dataset
    }

    /// Recomputes the derived sequences.
    pub(crate) fn derive(&mut self, derivation: Derivation) {
        let Derivation { params, mode, unit } = derivation;
        self.speeds.clear();
        self.speeds.extend(
            self.source
                .iter()
                .map(|&c| coefficients_to_display_speeds(c, &params, unit)),
        );
        self.coefficients.clear();
        self.coefficients.extend(
            self.source
                .iter()
                .map(|&c| mode.from_dimensionless(c, &params)),
        );
        self.derivation = derivation;
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Identifier within the owning collection.
    #[must_use]
    pub fn id(&self) -> DatasetId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marker colour.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the dataset is drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The parsed dimensionless `(CL, CD)` samples.
    #[must_use]
    pub fn source(&self) -> &[CoefficientPoint] {
        &self.source
    }

    /// Sustained speeds of each sample, in [`Derivation::unit`].
    #[must_use]
    pub fn speeds(&self) -> &[SpeedPoint] {
        &self.speeds
    }

    /// Each sample in the coefficient space of [`Derivation::mode`].
    #[must_use]
    pub fn coefficients(&self) -> &[CoefficientPoint] {
        &self.coefficients
    }

    /// The inputs the derived sequences currently reflect.
    #[must_use]
    pub fn derivation(&self) -> Derivation {
        self.derivation
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Whether the dataset has no samples. Never true for a loaded dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Speed/coefficient pairs, index by index.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (SpeedPoint, CoefficientPoint)> + '_ {
        self.speeds
            .iter()
            .copied()
            .zip(self.coefficients.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;
    use polarmorph_physics::{
        CoefficientMode, CoefficientPoint, PhysicalParameters, SpeedUnit, coefficients_to_speeds,
    };

    use super::{Dataset, DatasetId, Derivation};

    #[test]
    fn derives_speeds_in_display_unit() {
        let params = PhysicalParameters::new(1.0, 2.0, 70.0).unwrap();
        let c = CoefficientPoint::new(0.486, 0.485);
        let mps = Derivation {
            params,
            mode: CoefficientMode::Dimensionless,
            unit: SpeedUnit::MetersPerSecond,
        };
        let mut dataset = Dataset::new(DatasetId(0), "a".into(), Color::BLACK, vec![c], mps);
        let expected = coefficients_to_speeds(c, &params);
        assert!((dataset.speeds()[0].vxs - expected.vxs).abs() < 1e-12);

        dataset.derive(Derivation {
            unit: SpeedUnit::MilesPerHour,
            mode: CoefficientMode::Dimensional,
            ..mps
        });
        let mph = dataset.speeds()[0];
        assert!((mph.vxs - SpeedUnit::MilesPerHour.from_mps(expected.vxs)).abs() < 1e-9);
        let k = dataset.coefficients()[0];
        assert!((k.cl - 0.486 * params.k_over_g()).abs() < 1e-15);
        assert_eq!(dataset.source()[0], c);
        assert_eq!(dataset.pairs().len(), 1);
    }

    #[test]
    fn id_displays_with_hash() {
        assert_eq!(DatasetId(4).to_string(), "#4");
    }
}
