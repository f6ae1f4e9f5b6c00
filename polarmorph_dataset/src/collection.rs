// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::{Dataset, DatasetError, DatasetId, Derivation, parse_stallpoints};

/// Outcome of a successful [`DatasetCollection::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Added {
    /// Id of the new dataset.
    pub id: DatasetId,
    /// Number of malformed samples that were skipped.
    pub skipped: usize,
}

/// The loaded datasets, kept derived for one [`Derivation`].
#[derive(Clone, Debug, Default)]
pub struct DatasetCollection {
    datasets: Vec<Dataset>,
    next_id: u64,
    derivation: Derivation,
}

impl DatasetCollection {
    /// Creates an empty collection deriving with `derivation`.
    #[must_use]
    pub fn new(derivation: Derivation) -> Self {
        Self {
            datasets: Vec::new(),
            next_id: 0,
            derivation,
        }
    }

    /// Parses `text` and adds it as a new, visible dataset.
    ///
    /// On error the collection is left unchanged.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        text: &str,
        color: Color,
    ) -> Result<Added, DatasetError> {
        let name = name.into();
        let parsed = parse_stallpoints(text).inspect_err(|err| {
            tracing::warn!(name = %name, %err, "rejected dataset");
        })?;
        let id = DatasetId(self.next_id);
        self.next_id += 1;
        tracing::info!(
            %id,
            name = %name,
            samples = parsed.samples.len(),
            skipped = parsed.skipped,
            "loaded dataset"
        );
        self.datasets
            .push(Dataset::new(id, name, color, parsed.samples, self.derivation));
        Ok(Added {
            id,
            skipped: parsed.skipped,
        })
    }

    /// Removes and returns the dataset with `id`.
    pub fn remove(&mut self, id: DatasetId) -> Option<Dataset> {
        let index = self.datasets.iter().position(|d| d.id() == id)?;
        let removed = self.datasets.remove(index);
        tracing::info!(%id, name = removed.name(), "removed dataset");
        Some(removed)
    }

    /// Changes the marker colour. Returns `false` if `id` is unknown.
    pub fn set_color(&mut self, id: DatasetId, color: Color) -> bool {
        self.get_mut(id).map(|d| d.set_color(color)).is_some()
    }

    /// Shows or hides a dataset. Returns `false` if `id` is unknown.
    pub fn set_visible(&mut self, id: DatasetId, visible: bool) -> bool {
        self.get_mut(id).map(|d| d.set_visible(visible)).is_some()
    }

    /// Re-derives every dataset for `derivation`.
    pub fn regenerate_all(&mut self, derivation: Derivation) {
        self.derivation = derivation;
        for dataset in &mut self.datasets {
            dataset.derive(derivation);
        }
        tracing::debug!(datasets = self.datasets.len(), "re-derived datasets");
    }

    /// The inputs datasets are currently derived for.
    #[must_use]
    pub fn derivation(&self) -> Derivation {
        self.derivation
    }

    /// The dataset with `id`.
    #[must_use]
    pub fn get(&self, id: DatasetId) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id() == id)
    }

    fn get_mut(&mut self, id: DatasetId) -> Option<&mut Dataset> {
        self.datasets.iter_mut().find(|d| d.id() == id)
    }

    /// All datasets in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Dataset> + '_ {
        self.datasets.iter()
    }

    /// Visible datasets in load order.
    pub fn visible(&self) -> impl Iterator<Item = &Dataset> + '_ {
        self.datasets.iter().filter(|d| d.is_visible())
    }

    /// Number of datasets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Whether no dataset is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
