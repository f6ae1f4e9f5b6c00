// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cohesive value objects the renderer reads.

use peniko::Color;
use polarmorph_dataset::Derivation;
use polarmorph_grid::{CurveCategory, GridKey, GridPalette};
use polarmorph_physics::{CoefficientMode, PhysicalParameters, SpeedUnit};
use serde::{Deserialize, Serialize};

/// The physical inputs every curve and dataset is derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParameterState {
    /// Validated density, area and mass.
    pub params: PhysicalParameters,
    /// Coefficient space in use.
    pub mode: CoefficientMode,
    /// Speed display unit.
    pub unit: SpeedUnit,
}

impl ParameterState {
    /// Key for the grid cache.
    #[must_use]
    pub fn grid_key(&self) -> GridKey {
        GridKey {
            params: self.params,
            mode: self.mode,
            unit: self.unit,
        }
    }

    /// Derivation inputs for datasets.
    #[must_use]
    pub fn derivation(&self) -> Derivation {
        Derivation {
            params: self.params,
            mode: self.mode,
            unit: self.unit,
        }
    }
}

/// Which parts of the chart are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityState {
    /// Master switch for every grid category.
    pub grid: bool,
    /// Outer constant-speed lines.
    pub outer_speed: bool,
    /// Inner constant-speed lines.
    pub inner_speed: bool,
    /// Core constant-coefficient lines.
    pub outer_coefficient: bool,
    /// Extended-range coefficient segments.
    pub extended_coefficient: bool,
    /// Glide-ratio rays.
    pub glide_rays: bool,
    /// Curve labels.
    pub labels: bool,
    /// Axis lines and titles.
    pub axes: bool,
    /// Dataset markers.
    pub datasets: bool,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            grid: true,
            outer_speed: true,
            inner_speed: true,
            outer_coefficient: true,
            extended_coefficient: true,
            glide_rays: true,
            labels: true,
            axes: true,
            datasets: true,
        }
    }
}

impl VisibilityState {
    /// Whether curves of `category` are drawn, including the master switch.
    #[must_use]
    pub fn shows(&self, category: CurveCategory) -> bool {
        self.grid
            && match category {
                CurveCategory::OuterSpeed => self.outer_speed,
                CurveCategory::InnerSpeed => self.inner_speed,
                CurveCategory::OuterCoefficient => self.outer_coefficient,
                CurveCategory::ExtendedCoefficient => self.extended_coefficient,
                CurveCategory::GlideRay => self.glide_rays,
            }
    }

    /// Applies the fields that are set in `update`.
    pub fn apply(&mut self, update: VisibilityUpdate) {
        let VisibilityUpdate {
            grid,
            outer_speed,
            inner_speed,
            outer_coefficient,
            extended_coefficient,
            glide_rays,
            labels,
            axes,
            datasets,
        } = update;
        for (slot, value) in [
            (&mut self.grid, grid),
            (&mut self.outer_speed, outer_speed),
            (&mut self.inner_speed, inner_speed),
            (&mut self.outer_coefficient, outer_coefficient),
            (&mut self.extended_coefficient, extended_coefficient),
            (&mut self.glide_rays, glide_rays),
            (&mut self.labels, labels),
            (&mut self.axes, axes),
            (&mut self.datasets, datasets),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

/// A partial [`VisibilityState`]; `None` leaves a field unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[expect(missing_docs, reason = "fields mirror VisibilityState")]
pub struct VisibilityUpdate {
    pub grid: Option<bool>,
    pub outer_speed: Option<bool>,
    pub inner_speed: Option<bool>,
    pub outer_coefficient: Option<bool>,
    pub extended_coefficient: Option<bool>,
    pub glide_rays: Option<bool>,
    pub labels: Option<bool>,
    pub axes: Option<bool>,
    pub datasets: Option<bool>,
}

/// Colours of everything that is not a dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScheme {
    /// Per-category grid colours.
    pub grid: GridPalette,
    /// Axis lines and titles.
    pub axis: Color,
    /// Plot background.
    pub background: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            grid: GridPalette::default(),
            axis: Color::from_rgba8(230, 230, 230, 255),
            background: Color::from_rgba8(18, 20, 26, 255),
        }
    }
}

impl ColorScheme {
    /// Applies the fields that are set in `update`.
    ///
    /// Returns whether a grid colour changed, in which case cached curves
    /// carry stale colours and must be regenerated.
    pub fn apply(&mut self, update: &ColorUpdate) -> bool {
        let mut grid_changed = false;
        for (category, color) in [
            (CurveCategory::OuterSpeed, update.outer_speed),
            (CurveCategory::InnerSpeed, update.inner_speed),
            (CurveCategory::OuterCoefficient, update.outer_coefficient),
            (CurveCategory::ExtendedCoefficient, update.extended_coefficient),
            (CurveCategory::GlideRay, update.glide_ray),
        ] {
            if let Some(color) = color {
                self.grid.set(category, color);
                grid_changed = true;
            }
        }
        if let Some(axis) = update.axis {
            self.axis = axis;
        }
        if let Some(background) = update.background {
            self.background = background;
        }
        grid_changed
    }
}

/// A partial [`ColorScheme`]; `None` leaves a colour unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
#[expect(missing_docs, reason = "fields mirror ColorScheme and GridPalette")]
pub struct ColorUpdate {
    pub outer_speed: Option<Color>,
    pub inner_speed: Option<Color>,
    pub outer_coefficient: Option<Color>,
    pub extended_coefficient: Option<Color>,
    pub glide_ray: Option<Color>,
    pub axis: Option<Color>,
    pub background: Option<Color>,
}
