//! End-to-end coverage of Figurate-Number Geometry's public API.

#![allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
#![allow(
    clippy::indexing_slicing,
    reason = "test assertions index freshly generated, non-empty dot vectors"
)]

use ditrune_cores::error::Error;
use ditrune_cores::figurate::{generate, real_indices, Dot, GenerationParams};

fn params(sides: u32, index: u32, centered: bool, star: bool) -> GenerationParams {
    GenerationParams { sides, index, centered, star }
}

#[test]
fn scenario_s6_triangular_layer_layout() {
    let dots = generate(params(3, 4, false, false)).unwrap();
    assert_eq!(dots.len(), 10);
    let layers: Vec<f64> = dots
        .iter()
        .map(|dot| match *dot {
            Dot::Real { layer, .. } => layer,
            Dot::SkippedVertex { .. } => panic!("triangular never skips vertices"),
        })
        .collect();
    assert_eq!(layers, vec![0.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0]);
}

#[test]
fn scenario_s7_centered_hexagonal_layer_counts() {
    let dots = generate(params(6, 3, true, false)).unwrap();
    assert_eq!(dots.len(), 19);
    let count_at = |layer: f64| {
        dots.iter()
            .filter(|d| matches!(d, Dot::Real { layer: l, .. } if *l == layer))
            .count()
    };
    assert_eq!(count_at(0.0), 1);
    assert_eq!(count_at(1.0), 6);
    assert_eq!(count_at(2.0), 12);
}

#[test]
fn boundary_index_one_is_a_single_origin_dot() {
    for (sides, centered, star) in [(3, false, false), (4, false, false), (6, true, false), (5, false, true)] {
        let dots = generate(params(sides, 1, centered, star)).unwrap();
        assert_eq!(dots.len(), 1);
        assert!(matches!(dots[0], Dot::Real { x, y, layer, index: 1 } if x == 0.0 && y == 0.0 && layer == 0.0));
    }
}

#[test]
fn indices_are_always_contiguous_from_one() {
    for (sides, index, centered, star) in [
        (3u32, 8u32, false, false),
        (4, 6, false, false),
        (7, 5, false, false),
        (6, 4, true, false),
        (9, 4, false, true),
    ] {
        let dots = generate(params(sides, index, centered, star)).unwrap();
        let indices = real_indices(&dots);
        let expected: Vec<usize> = (1..=indices.len()).collect();
        assert_eq!(indices, expected, "sides={sides} index={index}");
    }
}

#[test]
fn generation_is_deterministic_across_repeated_calls() {
    let p = params(9, 6, false, true);
    assert_eq!(generate(p).unwrap(), generate(p).unwrap());
}

#[test]
fn star_below_five_sides_is_rejected() {
    assert!(matches!(
        generate(params(4, 3, false, true)),
        Err(Error::InvalidParameters { .. })
    ));
}

#[test]
fn invalid_domain_parameters_are_rejected() {
    assert!(matches!(
        generate(params(2, 1, false, false)),
        Err(Error::InvalidParameters { .. })
    ));
    assert!(matches!(
        generate(params(5, 0, false, false)),
        Err(Error::InvalidParameters { .. })
    ));
}
