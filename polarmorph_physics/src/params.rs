// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Identifies one of the three physical parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterField {
    /// Air density `ρ` in kg/m³.
    Density,
    /// Reference (wing) area `S` in m².
    Area,
    /// Mass `m` in kg.
    Mass,
}

impl ParameterField {
    /// Short human-readable name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Density => "air density",
            Self::Area => "area",
            Self::Mass => "mass",
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejected physical parameter value.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// The value was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// Offending field.
        field: ParameterField,
        /// Rejected value.
        value: f64,
    },
    /// The value was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Offending field.
        field: ParameterField,
        /// Rejected value.
        value: f64,
    },
}

impl ParameterError {
    /// The field whose value was rejected.
    #[must_use]
    pub fn field(&self) -> ParameterField {
        match *self {
            Self::NonFinite { field, .. } | Self::NonPositive { field, .. } => field,
        }
    }
}

/// Air density, reference area and mass of the flying body.
///
/// All three values are finite and strictly positive; the only way to obtain
/// a value of this type is through validation, so the transforms can rely on
/// it without re-checking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalParameters {
    density: f64,
    area: f64,
    mass: f64,
}

impl PhysicalParameters {
    /// Sea-level air density, a 2 m² reference area and a 70 kg body.
    pub const STANDARD: Self = Self {
        density: 1.225,
        area: 2.0,
        mass: 70.0,
    };

    /// Validates and creates a parameter set.
    pub fn new(density: f64, area: f64, mass: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            density: validate(ParameterField::Density, density)?,
            area: validate(ParameterField::Area, area)?,
            mass: validate(ParameterField::Mass, mass)?,
        })
    }

    /// Returns a copy with one field replaced, validating the new value.
    pub fn with(self, field: ParameterField, value: f64) -> Result<Self, ParameterError> {
        let value = validate(field, value)?;
        let mut out = self;
        match field {
            ParameterField::Density => out.density = value,
            ParameterField::Area => out.area = value,
            ParameterField::Mass => out.mass = value,
        }
        Ok(out)
    }

    /// Air density in kg/m³.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Reference area in m².
    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Mass in kg.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Returns the value of one field.
    #[must_use]
    pub fn get(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::Density => self.density,
            ParameterField::Area => self.area,
            ParameterField::Mass => self.mass,
        }
    }

    /// The parameter group `k = ½·ρ·S/m` (1/m).
    #[must_use]
    pub fn k(&self) -> f64 {
        0.5 * self.density * self.area / self.mass
    }

    /// Factor converting dimensionless coefficients into dimensional ones,
    /// `k/g` (s²/m²).
    #[must_use]
    pub fn k_over_g(&self) -> f64 {
        self.k() / crate::G
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn validate(field: ParameterField, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ParameterError::NonPositive { field, value });
    }
    Ok(value)
}
