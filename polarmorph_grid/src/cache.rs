// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use polarmorph_physics::{CoefficientMode, PhysicalParameters, SpeedUnit};

use crate::{Grid, GridInput, GridPalette, GridSpec, generate};

/// The inputs a generated [`Grid`] depends on, apart from palette and spec.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridKey {
    /// Air density, area and mass.
    pub params: PhysicalParameters,
    /// Coefficient mode.
    pub mode: CoefficientMode,
    /// Speed display unit.
    pub unit: SpeedUnit,
}

/// Keeps the most recent [`Grid`] and regenerates it only when needed.
///
/// The grid is rebuilt when [`get`](Self::get) is called with a different
/// [`GridKey`] or after [`invalidate`](Self::invalidate).
#[derive(Clone, Debug)]
pub struct GridCache {
    spec: GridSpec,
    grid: Option<Grid>,
    generation: u64,
}

impl GridCache {
    /// Creates an empty cache that generates with `spec`.
    #[must_use]
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            grid: None,
            generation: 0,
        }
    }

    /// The sampling policy in use.
    #[must_use]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Replaces the sampling policy and drops the cached grid.
    pub fn set_spec(&mut self, spec: GridSpec) {
        self.spec = spec;
        self.invalidate();
    }

    /// Drops the cached grid so the next [`get`](Self::get) rebuilds it.
    pub fn invalidate(&mut self) {
        self.grid = None;
    }

    /// Number of times a grid has been generated.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the grid for `key`, generating it with `palette` on a miss.
    pub fn get(&mut self, key: GridKey, palette: &GridPalette) -> &Grid {
        if self.grid.as_ref().is_some_and(|g| g.key() != key) {
            self.grid = None;
        }
        let Self {
            spec,
            grid,
            generation,
        } = self;
        grid.get_or_insert_with(|| {
            *generation += 1;
            tracing::trace!(generation = *generation, "grid cache miss");
            generate(&GridInput {
                params: key.params,
                mode: key.mode,
                unit: key.unit,
                palette,
                spec: &*spec,
            })
        })
    }
}

impl Default for GridCache {
    fn default() -> Self {
        Self::new(GridSpec::for_unit(SpeedUnit::default()))
    }
}
