//! End-to-end coverage of the Group/Connection Model and saved
//! visualizations.

#![allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use ditrune_cores::error::Error;
use ditrune_cores::figurate::{generate, GenerationParams};
use ditrune_cores::groups::{
    matching_indices, Color, ColorJson, ConnectionJson, FigureType, GroupModel, Pattern, SetOp,
    SavedVisualization, VisualizationIndex, DEFAULT_GROUP,
};

fn black() -> Color {
    Color { r: 0, g: 0, b: 0, a: 255 }
}

#[test]
fn scenario_s8_group_set_algebra() {
    let dots = generate(GenerationParams { sides: 3, index: 10, centered: false, star: false }).unwrap();
    let mut model = GroupModel::new(&dots);
    model.ensure_group("A").unwrap();
    model.ensure_group("B").unwrap();
    model.set_active("A").unwrap();
    model.select(&[1, 2, 3]);
    model.set_active("B").unwrap();
    model.select(&[2, 3, 4]);

    model.set_operation(&["A", "B"], SetOp::Union, "union").unwrap();
    model.set_operation(&["A", "B"], SetOp::Intersection, "intersection").unwrap();
    model.set_operation(&["A", "B"], SetOp::Difference, "difference").unwrap();
    model.set_operation(&["A", "B"], SetOp::SymmetricDifference, "symdiff").unwrap();

    assert_eq!(model.group("union").unwrap(), &[1, 2, 3, 4].into_iter().collect());
    assert_eq!(model.group("intersection").unwrap(), &[2, 3].into_iter().collect());
    assert_eq!(model.group("difference").unwrap(), &[1].into_iter().collect());
    assert_eq!(model.group("symdiff").unwrap(), &[1, 4].into_iter().collect());
}

#[test]
fn default_group_always_exists_and_connections_are_symmetric() {
    let dots = generate(GenerationParams { sides: 3, index: 4, centered: false, star: false }).unwrap();
    let mut model = GroupModel::new(&dots);
    assert_eq!(model.active_group_name(), DEFAULT_GROUP);

    model.select(&[1, 2, 3]);
    model.connect(black(), 2, 1);
    model.close_polygon(black(), 2, 1);

    assert!(model.has_connection(1, 2));
    assert!(model.has_connection(2, 1));
    assert!(model.has_connection(3, 1));
}

#[test]
fn pattern_selection_feeds_directly_into_group_selection() {
    let dots = generate(GenerationParams { sides: 4, index: 10, centered: false, star: false }).unwrap();
    let mut model = GroupModel::new(&dots);
    let primes = matching_indices(Pattern::Prime, dots.len());
    model.select(&primes);
    assert_eq!(model.group(DEFAULT_GROUP).unwrap(), &primes.into_iter().collect());
}

#[test]
fn saved_visualization_round_trips_through_json_and_restore() {
    let stamp = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let mut groups = BTreeMap::new();
    groups.insert("Default".to_string(), vec![1, 2, 3]);
    let mut colors = BTreeMap::new();
    colors.insert("Default".to_string(), ColorJson::from(black()));

    let saved = SavedVisualization {
        id: "viz-roundtrip".to_string(),
        name: "Triangular sample".to_string(),
        description: "a small figure".to_string(),
        figure_type: FigureType::Regular,
        sides: 3,
        index: 6,
        groups,
        colors,
        connections: vec![ConnectionJson::from(ditrune_cores::groups::Connection {
            dot1: 1,
            dot2: 2,
            color: black(),
            width: 1,
            style: 1,
        })],
        created: stamp,
        modified: stamp,
    };

    let json = saved.to_json().unwrap();
    let reloaded = SavedVisualization::from_json(&json).unwrap();
    let (dots, model) = reloaded.restore().unwrap();

    assert_eq!(dots.len(), 21); // regular_count(3, 6) = 1*6*5/2 + 6
    assert_eq!(model.group("Default").unwrap(), &[1, 2, 3].into_iter().collect());
    assert!(model.has_connection(1, 2));

    let mut index = VisualizationIndex::new();
    index.upsert(&reloaded);
    assert!(index.get("viz-roundtrip").is_some());
}

#[test]
fn saved_visualization_with_stale_group_index_fails_to_restore() {
    let stamp = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let mut groups = BTreeMap::new();
    groups.insert("Default".to_string(), vec![1, 9999]);

    let saved = SavedVisualization {
        id: "viz-stale".to_string(),
        name: "Stale".to_string(),
        description: String::new(),
        figure_type: FigureType::Regular,
        sides: 3,
        index: 2,
        groups,
        colors: BTreeMap::new(),
        connections: vec![],
        created: stamp,
        modified: stamp,
    };

    assert!(matches!(saved.restore(), Err(Error::GroupIndexOutOfRange { .. })));
}
