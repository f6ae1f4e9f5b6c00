// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Point, Rect};
use peniko::Color;
use polarmorph_axis::{AxisPreset, Projection};
use polarmorph_dataset::{Added, DatasetCollection, DatasetError, DatasetId};
use polarmorph_grid::{GridCache, GridSpec};
use polarmorph_physics::{
    CoefficientMode, ParameterError, ParameterField, PhysicalParameters, SpeedUnit,
};

use crate::render::zoom_for;
use crate::zoom::ZoomTransform;
use crate::{
    AnimationState, ChartConfig, ColorScheme, ColorUpdate, ConfigError, Frame, Interpolation,
    ParameterState, RenderInput, View, VisibilityState, VisibilityUpdate, render_frame,
};

/// Marker colours handed to datasets in load order.
const DATASET_COLORS: [(u8, u8, u8); 6] = [
    (255, 196, 0),
    (0, 200, 255),
    (255, 80, 120),
    (120, 230, 90),
    (200, 130, 255),
    (255, 140, 40),
];

/// An interactive chart session.
///
/// Owns the parameter, visibility, colour and animation state, the cached
/// grid and the loaded datasets, and turns them into a [`Frame`] on demand.
/// All mutation happens between frames through the methods below; invalid
/// input is rejected without touching the current state.
#[derive(Clone, Debug)]
pub struct Chart {
    parameters: ParameterState,
    axis_preset: AxisPreset,
    plot: Rect,
    visibility: VisibilityState,
    colors: ColorScheme,
    animation: AnimationState,
    interpolation: Interpolation,
    zoom: bool,
    grid: GridCache,
    datasets: DatasetCollection,
    loaded: usize,
}

impl Chart {
    /// Creates a chart in speed view laid out in `plot`.
    pub fn new(config: &ChartConfig, plot: Rect) -> Result<Self, ConfigError> {
        let parameters = ParameterState {
            params: config.physical_parameters()?,
            mode: config.coefficient_mode,
            unit: config.speed_unit,
        };
        Ok(Self {
            parameters,
            axis_preset: config.axis_preset,
            plot,
            visibility: config.visibility,
            colors: ColorScheme::default(),
            animation: AnimationState::new(config.animation_duration()).with_easing(config.easing),
            interpolation: config.interpolation,
            zoom: config.zoom,
            grid: GridCache::new(GridSpec::for_unit(parameters.unit)),
            datasets: DatasetCollection::new(parameters.derivation()),
            loaded: 0,
        })
    }

    /// Physical parameters, coefficient mode and speed unit.
    #[must_use]
    pub fn parameters(&self) -> ParameterState {
        self.parameters
    }

    /// Replaces all three physical parameters.
    ///
    /// Invalid values are rejected and the previous parameters are kept.
    pub fn set_parameters(
        &mut self,
        density: f64,
        area: f64,
        mass: f64,
    ) -> Result<(), ParameterError> {
        let params = PhysicalParameters::new(density, area, mass)
            .inspect_err(|err| tracing::warn!(%err, "rejected parameter update"))?;
        self.apply_params(params);
        Ok(())
    }

    /// Replaces one physical parameter.
    ///
    /// An invalid value is rejected and the previous parameters are kept.
    pub fn set_parameter(&mut self, field: ParameterField, value: f64) -> Result<(), ParameterError> {
        let params = self
            .parameters
            .params
            .with(field, value)
            .inspect_err(|err| tracing::warn!(%err, "rejected parameter update"))?;
        self.apply_params(params);
        Ok(())
    }

    fn apply_params(&mut self, params: PhysicalParameters) {
        if params == self.parameters.params {
            return;
        }
        tracing::debug!(
            density = params.density(),
            area = params.area(),
            mass = params.mass(),
            "parameters changed"
        );
        self.parameters.params = params;
        self.rederive();
    }

    /// Switches between `CL`/`CD` and `KL`/`KD`.
    pub fn set_coefficient_mode(&mut self, mode: CoefficientMode) {
        if mode != self.parameters.mode {
            self.parameters.mode = mode;
            self.rederive();
        }
    }

    /// Switches the speed display unit, along with the unit's grid spacing.
    pub fn set_speed_unit(&mut self, unit: SpeedUnit) {
        if unit != self.parameters.unit {
            self.parameters.unit = unit;
            self.grid.set_spec(GridSpec::for_unit(unit));
            self.rederive();
        }
    }

    fn rederive(&mut self) {
        self.datasets.regenerate_all(self.parameters.derivation());
    }

    /// Changes how quantities are assigned to screen axes.
    ///
    /// Curve data is unaffected; only the projection changes.
    pub fn set_axis_preset(&mut self, preset: AxisPreset) {
        self.axis_preset = preset;
    }

    /// Current axis preset.
    #[must_use]
    pub fn axis_preset(&self) -> AxisPreset {
        self.axis_preset
    }

    /// Moves or resizes the plot area.
    pub fn set_plot_rect(&mut self, plot: Rect) {
        self.plot = plot;
    }

    /// Changes the length of the morph, including one in flight.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animation.set_duration(duration);
    }

    /// Chooses how sample positions are blended during the morph.
    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    /// Parses `text` as a dataset and adds it with the next marker colour.
    ///
    /// On error nothing changes.
    pub fn add_dataset(
        &mut self,
        name: impl Into<String>,
        text: &str,
    ) -> Result<Added, DatasetError> {
        let (r, g, b) = DATASET_COLORS[self.loaded % DATASET_COLORS.len()];
        let added = self
            .datasets
            .add(name, text, Color::from_rgba8(r, g, b, 255))?;
        self.loaded += 1;
        Ok(added)
    }

    /// Removes a dataset. Returns `false` if `id` is unknown.
    pub fn remove_dataset(&mut self, id: DatasetId) -> bool {
        self.datasets.remove(id).is_some()
    }

    /// Recolours a dataset. Returns `false` if `id` is unknown.
    pub fn set_dataset_color(&mut self, id: DatasetId, color: Color) -> bool {
        self.datasets.set_color(id, color)
    }

    /// Shows or hides a dataset. Returns `false` if `id` is unknown.
    pub fn set_dataset_visible(&mut self, id: DatasetId, visible: bool) -> bool {
        self.datasets.set_visible(id, visible)
    }

    /// Loaded datasets.
    #[must_use]
    pub fn datasets(&self) -> &DatasetCollection {
        &self.datasets
    }

    /// Starts the morph to the other view.
    ///
    /// Ignored, returning `false`, while a morph is already running.
    pub fn switch_view(&mut self, now: Duration) -> bool {
        self.animation.toggle(now)
    }

    /// Advances the morph to `now`. Returns whether a redraw is needed.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.animation.tick(now)
    }

    /// Returns to idle speed view.
    pub fn reset(&mut self) {
        self.animation.reset();
    }

    /// Flips the grid master switch and returns its new state.
    pub fn toggle_grid(&mut self) -> bool {
        self.visibility.grid = !self.visibility.grid;
        self.visibility.grid
    }

    /// Flips the zoom emphasis and returns its new state.
    pub fn toggle_zoom(&mut self) -> bool {
        self.zoom = !self.zoom;
        self.zoom
    }

    /// Applies a partial colour update.
    pub fn update_colors(&mut self, update: &ColorUpdate) {
        if self.colors.apply(update) {
            self.grid.invalidate();
        }
    }

    /// Applies a partial visibility update.
    pub fn update_visibility(&mut self, update: VisibilityUpdate) {
        self.visibility.apply(update);
    }

    /// Current visibility.
    #[must_use]
    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    /// Current colours.
    #[must_use]
    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Animation state.
    #[must_use]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// The view the chart rests in, or is heading to.
    #[must_use]
    pub fn view(&self) -> View {
        self.animation.view()
    }

    /// Caption for the view indicator.
    #[must_use]
    pub fn view_label(&self) -> &'static str {
        self.view().label()
    }

    /// Morph progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.animation.progress()
    }

    /// Whether a morph is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Whether the zoom emphasis is enabled.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom
    }

    /// Pixel layout of both spaces for the current state.
    #[must_use]
    pub fn projection(&self) -> Projection {
        let spec = self.grid.spec();
        Projection::new(
            self.axis_preset.mapping(),
            self.plot,
            spec.speed.outer_limit,
            spec.coefficient.core_limit * self.parameters.mode.grid_unit(),
        )
    }

    /// Renders the current state.
    pub fn render(&mut self) -> Frame {
        let projection = self.projection();
        let grid = self.grid.get(self.parameters.grid_key(), &self.colors.grid);
        render_frame(&RenderInput {
            grid,
            datasets: &self.datasets,
            projection,
            progress: self.animation.progress(),
            visibility: &self.visibility,
            colors: &self.colors,
            interpolation: self.interpolation,
            zoom: self.zoom,
        })
    }

    /// Maps a view pixel, such as a cursor position, back through the
    /// current zoom into chart pixels.
    #[must_use]
    pub fn view_to_chart(&self, p: Point) -> Point {
        self.zoom_transform().view_to_chart(p)
    }

    /// The current outer zoom transform.
    #[must_use]
    pub fn zoom_transform(&self) -> ZoomTransform {
        if self.zoom {
            zoom_for(
                &self.projection(),
                &self.datasets,
                &self.visibility,
                self.animation.progress(),
            )
        } else {
            ZoomTransform::IDENTITY
        }
    }

    /// Number of times the grid has been generated.
    #[must_use]
    pub fn grid_generation(&self) -> u64 {
        self.grid.generation()
    }
}
