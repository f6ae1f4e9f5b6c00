// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polarmorph Dataset: measured coefficient samples and their derived speeds.
//!
//! A dataset file is plain text that embeds a `stallpoint:` key followed by a
//! JSON array of `{ "cl": .., "cd": .. }` objects. [`parse_stallpoints`]
//! extracts that array; [`DatasetCollection`] owns the loaded datasets and
//! keeps their derived sequences in step with the current physical
//! parameters, coefficient mode and speed unit.
//!
//! Errors follow one policy:
//! - structural problems (no marker, no array, unbalanced brackets, invalid
//!   JSON, nothing usable) reject the whole file with a [`DatasetError`] and
//!   leave the collection untouched;
//! - an individual element without finite numeric `cl`/`cd` is skipped, logged
//!   at `warn` level and counted in [`ParsedSamples::skipped`].
//!
//! ```rust
//! use peniko::Color;
//! use polarmorph_dataset::{DatasetCollection, Derivation};
//!
//! let mut datasets = DatasetCollection::new(Derivation::default());
//! let text = r#"polar = { stallpoint: [{"cl": 0.5, "cd": 0.4}, {"cl": 0.7, "cd": 0.3}] }"#;
//! let added = datasets.add("suit A", text, Color::from_rgba8(0, 128, 255, 255)).unwrap();
//! assert_eq!(added.skipped, 0);
//! let dataset = datasets.get(added.id).unwrap();
//! assert_eq!(dataset.speeds().len(), 2);
//!
//! assert!(datasets.add("broken", "no marker here", Color::WHITE).is_err());
//! assert_eq!(datasets.len(), 1);
//! ```

mod collection;
mod dataset;
mod parse;

pub use collection::{Added, DatasetCollection};
pub use dataset::{Dataset, DatasetId, Derivation};
pub use parse::{DatasetError, ParsedSamples, STALLPOINT_KEY, parse_stallpoints};
