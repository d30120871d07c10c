//! Ternary Transition Algebra (component B).
//!
//! A transition map is a total function on ternary digit pairs; applying it
//! digit-wise to two equal-length ternary strings produces a third. Iterating
//! the operator drives the state `(first, second)` through a finite space,
//! so repeated application is always eventually periodic.

mod algebra;
mod map;

pub use algebra::{apply, apply_conrune, apply_multiple, find_cycle, CycleResult};
pub use map::{conrune_digit, TransitionMap};
