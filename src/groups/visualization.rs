//! Persisted visualizations: a generation recipe plus the groups,
//! colors, and connections drawn over it, serialized as JSON.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::figurate::{generate, real_indices, GenerationParams};

use super::model::{Color, Connection, GroupModel};

/// The figurate family a [`SavedVisualization`] was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureType {
    /// A non-centered, non-star regular polygonal number.
    Regular,
    /// A centered polygonal number.
    Centered,
    /// A star polygon.
    Star,
}

/// Wire form of [`Color`]: four named `u8` channels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColorJson {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<Color> for ColorJson {
    fn from(color: Color) -> Self {
        Self { r: color.r, g: color.g, b: color.b, a: color.a }
    }
}

impl From<ColorJson> for Color {
    fn from(json: ColorJson) -> Self {
        Self { r: json.r, g: json.g, b: json.b, a: json.a }
    }
}

/// Wire form of [`Connection`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionJson {
    dot1: usize,
    dot2: usize,
    color: ColorJson,
    width: u32,
    style: i32,
}

impl From<Connection> for ConnectionJson {
    fn from(connection: Connection) -> Self {
        Self {
            dot1: connection.dot1,
            dot2: connection.dot2,
            color: connection.color.into(),
            width: connection.width,
            style: connection.style,
        }
    }
}

impl From<ConnectionJson> for Connection {
    fn from(json: ConnectionJson) -> Self {
        Self {
            dot1: json.dot1,
            dot2: json.dot2,
            color: json.color.into(),
            width: json.width,
            style: json.style,
        }
    }
}

/// A fully serializable snapshot of one figurate diagram's generation
/// recipe plus the session overlay drawn over it: named dot groups, their
/// colors, and the connection list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedVisualization {
    /// Unique identifier, typically a UUID string.
    pub id: String,
    /// User-facing name.
    pub name: String,
    /// User-facing free-text description.
    pub description: String,
    /// Which figurate family this diagram was generated from.
    #[serde(rename = "type")]
    pub figure_type: FigureType,
    /// Number of sides.
    pub sides: u32,
    /// Polygonal-number index.
    pub index: u32,
    /// Named groups, each a list of dot indices.
    pub groups: BTreeMap<String, Vec<usize>>,
    /// Named group display colors.
    pub colors: BTreeMap<String, ColorJson>,
    /// The connection list.
    pub connections: Vec<ConnectionJson>,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last-modified timestamp.
    pub modified: DateTime<Utc>,
}

impl SavedVisualization {
    /// Builds the [`GenerationParams`] this visualization was generated
    /// from.
    #[must_use]
    pub const fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            sides: self.sides,
            index: self.index,
            centered: matches!(self.figure_type, FigureType::Centered),
            star: matches!(self.figure_type, FigureType::Star),
        }
    }

    /// Regenerates this visualization's dot coordinate set and rebuilds a
    /// live [`GroupModel`] from the stored groups and connections.
    ///
    /// Generation parameters are applied first; if any stored group
    /// references a dot index absent from the regenerated set, loading
    /// fails with [`Error::GroupIndexOutOfRange`] rather than silently
    /// dropping the reference.
    ///
    /// # Errors
    /// Propagates [`GenerationParams::validate`] failures, and returns
    /// [`Error::GroupIndexOutOfRange`] if a stored group or connection
    /// references a dot index outside the regenerated set.
    pub fn restore(&self) -> Result<(Vec<crate::figurate::Dot>, GroupModel)> {
        log::debug!("restoring saved visualization {:?} ({})", self.id, self.name);
        let dots = generate(self.generation_params())?;
        let valid: std::collections::BTreeSet<usize> = real_indices(&dots).into_iter().collect();

        for (name, indices) in &self.groups {
            for &index in indices {
                if !valid.contains(&index) {
                    log::warn!(
                        "visualization {:?} group {name:?} references missing dot index {index}",
                        self.id
                    );
                    return Err(Error::GroupIndexOutOfRange { group: name.clone(), index });
                }
            }
        }

        let mut model = GroupModel::new(&dots);
        for (name, indices) in &self.groups {
            model.ensure_group(name)?;
            model.set_active(name)?;
            model.select(indices);
        }
        for connection_json in &self.connections {
            let connection: Connection = connection_json.clone().into();
            if !valid.contains(&connection.dot1) {
                return Err(Error::GroupIndexOutOfRange {
                    group: "<connection>".to_string(),
                    index: connection.dot1,
                });
            }
            if !valid.contains(&connection.dot2) {
                return Err(Error::GroupIndexOutOfRange {
                    group: "<connection>".to_string(),
                    index: connection.dot2,
                });
            }
        }
        model.set_active(super::model::DEFAULT_GROUP)?;
        Ok((dots, model))
    }

    /// Serializes this visualization to a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns an error if serialization fails (never expected to, given
    /// this struct's field types, but `serde_json` still returns a
    /// `Result`).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a visualization from its JSON form.
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid `SavedVisualization`
    /// document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// One entry in a [`VisualizationIndex`]: the short metadata shown in a
/// visualization picker without loading the full document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEntry {
    /// User-facing name.
    pub name: String,
    /// User-facing free-text description.
    pub description: String,
    /// Which figurate family this diagram was generated from.
    #[serde(rename = "type")]
    pub figure_type: FigureType,
    /// Number of sides.
    pub sides: u32,
    /// Polygonal-number index.
    pub index: u32,
    /// Last-modified timestamp.
    pub modified: DateTime<Utc>,
}

impl From<&SavedVisualization> for IndexEntry {
    fn from(saved: &SavedVisualization) -> Self {
        Self {
            name: saved.name.clone(),
            description: saved.description.clone(),
            figure_type: saved.figure_type,
            sides: saved.sides,
            index: saved.index,
            modified: saved.modified,
        }
    }
}

/// The `index.json` sidecar: a map from visualization ID to its short
/// metadata, kept in sync whenever a visualization is saved or removed so
/// a picker UI never needs to load every full document to list them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualizationIndex {
    entries: BTreeMap<String, IndexEntry>,
}

impl VisualizationIndex {
    /// An empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the metadata entry for `saved`.
    pub fn upsert(&mut self, saved: &SavedVisualization) {
        self.entries.insert(saved.id.clone(), saved.into());
    }

    /// Removes the entry for `id`, if present.
    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }

    /// The metadata entry for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&IndexEntry> {
        self.entries.get(id)
    }

    /// All indexed IDs, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Serializes this index to a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses an index from its JSON form.
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid `VisualizationIndex`
    /// document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
