//! Polygonal Set-Operation/Group Model (component E).
//!
//! A mutable session overlay over a figurate coordinate set: named dot
//! groups, set operations between them, pattern-based selection
//! predicates, a connection graph, and JSON-serialized saved
//! visualizations.

mod model;
mod patterns;
mod visualization;

pub use model::{Color, Connection, GroupModel, SetOp, DEFAULT_GROUP};
pub use patterns::{matching_indices, Pattern};
pub use visualization::{ColorJson, ConnectionJson, FigureType, IndexEntry, SavedVisualization, VisualizationIndex};
