//! Integration-level unit tests mirroring the src directory structure.
//!
//! Inline `#[cfg(test)]` modules in `src/` cover per-function behavior;
//! these files exercise the public API end-to-end, one file per core,
//! against the scenarios and invariants recorded in `SPEC_FULL.md`.

mod error;
mod figurate;
mod groups;
mod kamea;
mod ternary;
mod transition;
