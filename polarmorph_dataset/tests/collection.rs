// Copyright 2025 the Polarmorph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset collection lifecycle.

use peniko::Color;
use polarmorph_dataset::{DatasetCollection, DatasetError, Derivation};
use polarmorph_physics::{
    CoefficientMode, PhysicalParameters, SpeedUnit, display_speeds_to_coefficients,
};

const SUIT: &str = r#"{
    "name": "test suit",
    "stallpoint": [
        {"cl": 0.2, "cd": 0.5},
        {"cl": 0.486, "cd": 0.485},
        {"cl": 0.6, "cd": 0.3}
    ]
}"#;

const RED: Color = Color::from_rgba8(255, 0, 0, 255);

#[test]
fn missing_marker_leaves_collection_unchanged() {
    let mut datasets = DatasetCollection::new(Derivation::default());
    let first = datasets.add("suit", SUIT, RED).unwrap();

    let err = datasets
        .add("notes", "cl, cd\n0.5, 0.4\n", RED)
        .unwrap_err();
    assert!(matches!(err, DatasetError::MissingMarker));
    assert_eq!(datasets.len(), 1);
    assert_eq!(datasets.get(first.id).unwrap().len(), 3);
}

#[test]
fn ids_are_never_reused() {
    let mut datasets = DatasetCollection::default();
    let a = datasets.add("a", SUIT, RED).unwrap().id;
    assert!(datasets.remove(a).is_some());
    let b = datasets.add("b", SUIT, RED).unwrap().id;
    assert_ne!(a, b);
    assert!(datasets.remove(a).is_none());
    assert!(datasets.get(b).is_some());
}

#[test]
fn visibility_and_color_updates() {
    let mut datasets = DatasetCollection::default();
    let a = datasets.add("a", SUIT, RED).unwrap().id;
    let b = datasets.add("b", SUIT, RED).unwrap().id;

    assert!(datasets.set_visible(a, false));
    let visible: Vec<_> = datasets.visible().map(|d| d.id()).collect();
    assert_eq!(visible, [b]);

    assert!(datasets.set_color(b, Color::WHITE));
    assert_eq!(datasets.get(b).unwrap().color().to_rgba8().g, 255);

    assert!(datasets.remove(b).is_some());
    assert!(!datasets.set_visible(b, true));
    assert!(!datasets.set_color(b, RED));
    assert_eq!(datasets.visible().count(), 0);
}

#[test]
fn regenerate_all_follows_new_parameters() {
    let mut datasets = DatasetCollection::default();
    let id = datasets.add("a", SUIT, RED).unwrap().id;
    let before = datasets.get(id).unwrap().speeds()[1];

    let derivation = Derivation {
        params: PhysicalParameters::new(1.0, 2.0, 70.0).unwrap(),
        mode: CoefficientMode::Dimensionless,
        unit: SpeedUnit::MetersPerSecond,
    };
    datasets.regenerate_all(derivation);

    let dataset = datasets.get(id).unwrap();
    assert_eq!(dataset.derivation(), derivation);
    let after = dataset.speeds()[1];
    assert!((after.vxs - before.vxs).abs() > 1.0);
    // The paired points still describe the same physical state.
    for (v, c) in dataset.pairs() {
        let back = display_speeds_to_coefficients(v, &derivation.params, derivation.unit);
        assert!((back.cl - c.cl).abs() < 1e-9);
        assert!((back.cd - c.cd).abs() < 1e-9);
    }
}

#[test]
fn partially_malformed_file_is_loaded() {
    let text = r#"stallpoint: [{"cl": 0.4, "cd": 0.4}, {"cl": "x", "cd": 1}]"#;
    let mut datasets = DatasetCollection::default();
    let added = datasets.add("partial", text, RED).unwrap();
    assert_eq!(added.skipped, 1);
    assert_eq!(datasets.get(added.id).unwrap().len(), 1);
}
