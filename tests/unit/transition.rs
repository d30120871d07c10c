//! End-to-end coverage of the Ternary Transition Algebra's public API.

#![allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
#![allow(
    clippy::indexing_slicing,
    reason = "test assertions index cycle/state vectors known to be non-empty"
)]

use ditrune_cores::error::Error;
use ditrune_cores::transition::{apply, apply_conrune, apply_multiple, find_cycle, TransitionMap};

#[test]
fn scenario_s1_transition_and_cycle() {
    let map = TransitionMap::default_map();
    assert_eq!(apply("220", "111", &map).unwrap(), "002");

    let cycle = find_cycle("220", "111", &map, 50).unwrap();
    assert_eq!(cycle.period, 3);
    assert_eq!(
        cycle.cycle,
        vec![
            ("220".to_string(), "111".to_string()),
            ("002".to_string(), "220".to_string()),
            ("111".to_string(), "002".to_string()),
        ]
    );
}

#[test]
fn scenario_s2_conrune_is_self_inverse() {
    let once = apply_conrune("11220").unwrap();
    assert_eq!(once, "22110");
    assert_eq!(apply_conrune(&once).unwrap(), "11220");
}

#[test]
fn boundary_all_zero_operand_is_a_fixed_point() {
    let map = TransitionMap::default_map();
    assert_eq!(apply("000", "000", &map).unwrap(), "000");
}

#[test]
fn custom_rule_string_round_trips_through_apply() {
    let map = TransitionMap::from_rule_string("00:1,01:1,02:1,10:1,11:1,12:1,20:1,21:1,22:1")
        .unwrap();
    assert_eq!(apply("012", "210", &map).unwrap(), "111");
}

#[test]
fn apply_multiple_matches_find_cycle_prefix() {
    let map = TransitionMap::default_map();
    let states = apply_multiple("220", "111", &map, 6).unwrap();
    let cycle = find_cycle("220", "111", &map, 50).unwrap();
    assert_eq!(states[0], cycle.cycle[0]);
    assert_eq!(states[3], cycle.cycle[0]);
}

#[test]
fn negative_operand_is_rejected() {
    let map = TransitionMap::default_map();
    assert!(matches!(
        apply("-1", "0", &map),
        Err(Error::NegativeInput { .. })
    ));
}

#[test]
fn incomplete_map_is_rejected_at_construction() {
    assert!(matches!(
        TransitionMap::from_rule_string("00:0,01:1"),
        Err(Error::IncompleteMap { .. })
    ));
}
