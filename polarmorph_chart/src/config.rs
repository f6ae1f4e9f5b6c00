// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use polarmorph_axis::AxisPreset;
use polarmorph_ease::Easing;
use polarmorph_physics::{CoefficientMode, ParameterError, PhysicalParameters, SpeedUnit};
use serde::{Deserialize, Serialize};

use crate::{Interpolation, VisibilityState};

/// Why a configuration was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The text is not a valid configuration document.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// A physical parameter is not a positive finite number.
    #[error("invalid configuration: {0}")]
    Parameter(#[from] ParameterError),
}

/// Physical parameters as written in a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterConfig {
    /// Air density in kg/m³.
    pub density: f64,
    /// Reference area in m².
    pub area: f64,
    /// Mass in kg.
    pub mass: f64,
}

impl Default for ParameterConfig {
    fn default() -> Self {
        let p = PhysicalParameters::STANDARD;
        Self {
            density: p.density(),
            area: p.area(),
            mass: p.mass(),
        }
    }
}

impl From<PhysicalParameters> for ParameterConfig {
    fn from(p: PhysicalParameters) -> Self {
        Self {
            density: p.density(),
            area: p.area(),
            mass: p.mass(),
        }
    }
}

impl TryFrom<ParameterConfig> for PhysicalParameters {
    type Error = ParameterError;

    fn try_from(p: ParameterConfig) -> Result<Self, Self::Error> {
        Self::new(p.density, p.area, p.mass)
    }
}

/// Initial state of a [`Chart`](crate::Chart), loadable from JSON.
///
/// Every field is optional in the document:
///
/// ```json
/// {
///   "parameters": { "density": 1.225, "area": 2.0, "mass": 70.0 },
///   "coefficient_mode": "dimensionless",
///   "speed_unit": "mph",
///   "axis_preset": "aligned",
///   "visibility": { "inner_speed": false },
///   "animation_ms": 1500,
///   "easing": "in_out_expo",
///   "zoom": false,
///   "interpolation": "linear"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Physical parameters.
    pub parameters: ParameterConfig,
    /// Coefficient space.
    pub coefficient_mode: CoefficientMode,
    /// Speed display unit.
    pub speed_unit: SpeedUnit,
    /// Named axis mapping.
    pub axis_preset: AxisPreset,
    /// Initial visibility.
    pub visibility: VisibilityState,
    /// Length of one morph in milliseconds.
    pub animation_ms: u64,
    /// Pacing curve of the morph.
    pub easing: Easing,
    /// Whether the zoom emphasis starts enabled.
    pub zoom: bool,
    /// Blending policy during the morph.
    pub interpolation: Interpolation,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            parameters: ParameterConfig::default(),
            coefficient_mode: CoefficientMode::default(),
            speed_unit: SpeedUnit::default(),
            axis_preset: AxisPreset::default(),
            visibility: VisibilityState::default(),
            animation_ms: 1500,
            easing: Easing::default(),
            zoom: false,
            interpolation: Interpolation::default(),
        }
    }
}

impl ChartConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.physical_parameters()?;
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The validated physical parameters.
    pub fn physical_parameters(&self) -> Result<PhysicalParameters, ConfigError> {
        Ok(PhysicalParameters::try_from(self.parameters)?)
    }

    /// Length of one morph.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}
