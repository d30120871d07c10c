//! End-to-end coverage of the Kamea Analysis Engine's public API, built
//! over a small synthetic grid that still satisfies the Conrune-pair
//! integrity invariant.

#![allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
#![allow(
    clippy::indexing_slicing,
    reason = "test fixture indices are always within the GRID_SIZE bounds it allocated, and the \
              ditrune substring slice below is a fixed ASCII offset"
)]

use ditrune_cores::error::Error;
use ditrune_cores::kamea::{
    cartesian_to_grid, ditrune_to_bigrams, ditrune_to_locator, find_by_decimal, find_by_quadsum,
    find_by_ternary_substring, grid_to_cartesian, locator_to_ditrune, octaset, quadset, KameaGrid,
    GRID_SIZE,
};
use ditrune_cores::ternary::{from_ternary, to_ternary_padded};
use ditrune_cores::transition::apply_conrune;

/// Builds a 27x27 grid where each Conrune-pair partner is derived from its
/// counterpart, so the loader's integrity checks pass without needing a
/// real Kamea data file on disk.
fn synthetic_grid() -> KameaGrid {
    let mut decimal = vec![vec![0u16; GRID_SIZE]; GRID_SIZE];
    let mut ditrune = vec![vec![String::new(); GRID_SIZE]; GRID_SIZE];
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let (x, y) = grid_to_cartesian(row, col);
            let is_primary = x > 0 || (x == 0 && y >= 0);
            if !is_primary {
                continue;
            }
            let value = u16::try_from((row * GRID_SIZE + col) % 729).unwrap();
            let code = to_ternary_padded(i64::from(value), 6);
            decimal[row][col] = value;
            ditrune[row][col] = code.clone();

            let (neg_row, neg_col) = cartesian_to_grid(-x, -y).unwrap();
            let partner_code = apply_conrune(&code).unwrap();
            let partner_value = u16::try_from(from_ternary(&partner_code).unwrap()).unwrap();
            decimal[neg_row][neg_col] = partner_value;
            ditrune[neg_row][neg_col] = partner_code;
        }
    }
    KameaGrid::from_matrices(decimal, ditrune).unwrap()
}

#[test]
fn scenario_s4_bigram_decomposition() {
    let bigrams = ditrune_to_bigrams("210102").unwrap();
    assert_eq!(bigrams.bigram1_dec(), 8);
    assert_eq!(bigrams.bigram2_dec(), 3);
    assert_eq!(bigrams.bigram3_dec(), 1);

    let locator = ditrune_to_locator("210102").unwrap();
    assert_eq!(locator.to_rac_string(), "1-3-8");
    assert_eq!(locator_to_ditrune(&locator).unwrap(), "210102");
}

#[test]
fn scenario_s5_quadset_and_octaset() {
    let mut quad = quadset(2, 3);
    quad.sort_unstable();
    let mut expected_quad = vec![(2, 3), (-2, 3), (-2, -3), (2, -3)];
    expected_quad.sort_unstable();
    assert_eq!(quad, expected_quad);

    let octa = octaset(2, 3);
    assert_eq!(octa.len(), 8);
}

#[test]
fn origin_coordinate_maps_to_grid_center() {
    assert_eq!(grid_to_cartesian(13, 13), (0, 0));
    assert_eq!(cartesian_to_grid(0, 0).unwrap(), (13, 13));
}

#[test]
fn out_of_bounds_coordinate_is_an_error() {
    assert!(matches!(
        cartesian_to_grid(14, -14),
        Err(Error::OutOfBounds { .. })
    ));
}

#[test]
fn grid_loads_and_conrune_pairs_hold_across_every_cell() {
    let grid = synthetic_grid();
    for x in -13..=13 {
        for y in -13..=13 {
            let here = grid.ditrune_at(x, y).unwrap();
            let there = grid.ditrune_at(-x, -y).unwrap();
            assert_eq!(apply_conrune(&here).unwrap(), there);
        }
    }
}

#[test]
fn pattern_search_finds_the_cell_it_was_built_from() {
    let grid = synthetic_grid();
    let target_ditrune = grid.ditrune_at(5, -7).unwrap();
    let target_decimal = grid.decimal_at(5, -7).unwrap();

    let by_decimal = find_by_decimal(&grid, target_decimal);
    assert!(by_decimal.contains(&(5, -7)));

    let substring = &target_ditrune[1..4];
    let by_substring = find_by_ternary_substring(&grid, substring);
    assert!(by_substring.contains(&(5, -7)));

    let mut target_quadsum = 0u32;
    for (px, py) in quadset(5, -7) {
        target_quadsum += u32::from(grid.decimal_at(px, py).unwrap());
    }
    let quadsum_matches = find_by_quadsum(&grid, target_quadsum).unwrap();
    assert!(quadsum_matches.contains(&(5, -7)));
}
