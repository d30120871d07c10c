//! Kamea Analysis Engine (component C).
//!
//! Interpretation of 6-digit ternary "ditrunes" on a 27x27 fractal grid:
//! bigram decomposition, Kamea-locator computation, quadset/octaset
//! construction via coordinate reflections, pattern search, and the
//! aspect-event table this engine reads and writes as an external cache.

mod aspect;
mod bigram;
mod grid;
mod sets;

pub use aspect::{AspectKind, AspectRecord, AspectStore};
pub use bigram::{
    decimal_to_ditrune, ditrune_to_bigrams, ditrune_to_decimal, ditrune_to_locator,
    locator_to_ditrune, Bigrams, Locator, DITRUNE_LEN,
};
pub use grid::{cartesian_to_grid, grid_to_cartesian, KameaGrid, GRID_SIZE, MAX_COORD};
pub use sets::{
    find_by_decimal, find_by_quadsum, find_by_ternary_substring, octaset, octasum, quadset,
    quadsum,
};
