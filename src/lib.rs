//! # `ditrune_cores`
//!
//! Five deterministic, single-threaded cores for esoteric-mathematics
//! tooling: ternary arithmetic codecs, a ternary transition algebra, a
//! 27x27 Kamea analysis grid, figurate-number geometry, and a
//! polygonal-group/connection overlay with JSON-serialized saved
//! visualizations.
//!
//! ## Components
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`ternary`] | Decimal <-> standard ternary <-> balanced ternary conversion |
//! | [`transition`] | The 3x3 digit-pair transition map, Conrune involution, cycle search |
//! | [`kamea`] | Ditrune bigram decomposition, grid locator, quadset/octaset, aspect cache |
//! | [`figurate`] | Regular, centered, and star polygonal-number dot generation |
//! | [`groups`] | Named dot groups, set operations, connection graph, saved visualizations |
//!
//! ## Quick start
//!
//! ```rust
//! use ditrune_cores::ternary::{to_ternary, from_ternary};
//! use ditrune_cores::transition::{apply, TransitionMap};
//!
//! let map = TransitionMap::default_map();
//! let result = apply("220", "111", &map).unwrap();
//! assert_eq!(result, "002");
//!
//! assert_eq!(to_ternary(5), "12");
//! assert_eq!(from_ternary("12").unwrap(), 5);
//! ```
//!
//! ## Design
//!
//! Every core is single-threaded and synchronous (see `SPEC_FULL.md` §5).
//! Transition maps, the Kamea grid, and figurate coordinate sets are
//! immutable once constructed; only [`groups::GroupModel`] is mutable, and
//! it is owned by a single session with no cross-session sharing. The
//! crate never initializes a logger or reads configuration itself — see
//! [`logging`] and [`config`] for the host-side contract.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

pub mod config;
pub mod error;
pub mod figurate;
pub mod groups;
pub mod kamea;
pub mod logging;
pub mod ternary;
pub mod transition;

pub use error::{Error, Result};
