//! The mutable session overlay: named dot groups, the active selection,
//! and a connection graph over a figurate coordinate set.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::figurate::Dot;

/// The always-present default group name.
pub const DEFAULT_GROUP: &str = "Default";

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// An unordered pair of dot indices plus opaque rendering attributes.
/// Equality and hashing are defined over the canonicalized, symmetric
/// pair: `(a, b)` and `(b, a)` are the same connection.
#[derive(Debug, Clone, Copy)]
pub struct Connection {
    /// One endpoint.
    pub dot1: usize,
    /// The other endpoint.
    pub dot2: usize,
    /// Rendering color, opaque to set/graph semantics.
    pub color: Color,
    /// Rendering line width, opaque to set/graph semantics.
    pub width: u32,
    /// Rendering line style (solid = 1), opaque to set/graph semantics.
    pub style: i32,
}

impl Connection {
    /// The canonical `(min, max)` form of this connection's endpoints,
    /// used for symmetric storage and lookup.
    #[must_use]
    pub const fn canonical_pair(&self) -> (usize, usize) {
        if self.dot1 <= self.dot2 {
            (self.dot1, self.dot2)
        } else {
            (self.dot2, self.dot1)
        }
    }
}

/// One of the four set operations available to [`GroupModel::set_operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    /// Union of all named groups.
    Union,
    /// Intersection of all named groups.
    Intersection,
    /// First group minus the union of the rest.
    Difference,
    /// Dots appearing in an odd number of the named groups.
    SymmetricDifference,
}

/// The mutable overlay over a figurate coordinate set: named dot groups,
/// an active-group selection, a connection list, and color metadata.
pub struct GroupModel {
    valid_indices: BTreeSet<usize>,
    groups: BTreeMap<String, BTreeSet<usize>>,
    group_colors: BTreeMap<String, Color>,
    active: String,
    connections: Vec<Connection>,
}

impl GroupModel {
    /// Creates a model over the dots generated for one figurate coordinate
    /// set, with the `"Default"` group pre-created and active.
    #[must_use]
    pub fn new(dots: &[Dot]) -> Self {
        let valid_indices = crate::figurate::real_indices(dots).into_iter().collect();
        let mut groups = BTreeMap::new();
        groups.insert(DEFAULT_GROUP.to_string(), BTreeSet::new());
        Self {
            valid_indices,
            groups,
            group_colors: BTreeMap::new(),
            active: DEFAULT_GROUP.to_string(),
            connections: Vec::new(),
        }
    }

    /// The name of the currently active group.
    #[must_use]
    pub fn active_group_name(&self) -> &str {
        &self.active
    }

    /// The dot indices of `name`, or `None` if no such group exists.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&BTreeSet<usize>> {
        self.groups.get(name)
    }

    /// The connection list, in insertion order.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Creates an empty group named `name` with no color, if it does not
    /// already exist.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if `name` is empty.
    pub fn ensure_group(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::invalid_parameters("group name must not be empty"));
        }
        self.groups.entry(name.to_string()).or_default();
        Ok(())
    }

    /// Switches the active group, creating it if necessary.
    ///
    /// # Errors
    /// Propagates the errors of [`Self::ensure_group`].
    pub fn set_active(&mut self, name: &str) -> Result<()> {
        self.ensure_group(name)?;
        self.active = name.to_string();
        Ok(())
    }

    /// Unions `indices` into the active group, silently skipping any index
    /// not present in the current figurate set.
    pub fn select(&mut self, indices: &[usize]) {
        let valid = &self.valid_indices;
        let active = self.active.clone();
        let group = self.groups.entry(active).or_default();
        for &index in indices {
            if valid.contains(&index) {
                group.insert(index);
            }
        }
    }

    /// Empties the active group and the connection list. The group name
    /// itself is retained.
    pub fn clear(&mut self) {
        if let Some(group) = self.groups.get_mut(&self.active) {
            group.clear();
        }
        self.connections.clear();
    }

    /// Unions every dot index whose layer matches `target_layer` into the
    /// active group. When `centered_layer_offset` is set, `target_layer`
    /// is interpreted as a UI-facing layer one greater than the
    /// calculator's internal layer (the model performs that translation),
    /// matching the off-by-one convention used for centered figures.
    pub fn select_by_layer(&mut self, dots: &[Dot], target_layer: i64, centered_layer_offset: bool) {
        #[allow(clippy::cast_precision_loss, reason = "layers are small integers in practice")]
        let internal_layer = if centered_layer_offset {
            (target_layer - 1) as f64
        } else {
            target_layer as f64
        };
        let matching: Vec<usize> = dots
            .iter()
            .filter_map(|dot| match *dot {
                Dot::Real { layer, index, .. } if layer == internal_layer => Some(index),
                _ => None,
            })
            .collect();
        self.select(&matching);
    }

    /// Appends connections `(aᵢ, aᵢ₊₁)` for consecutive dots in the active
    /// group's iteration order (ascending index, since groups are sets).
    /// Duplicate unordered pairs are dropped.
    pub fn connect(&mut self, color: Color, width: u32, style: i32) {
        let Some(group) = self.groups.get(&self.active) else {
            return;
        };
        let ordered: Vec<usize> = group.iter().copied().collect();
        for pair in ordered.windows(2) {
            let &[a, b] = pair else {
                continue;
            };
            self.push_connection_if_new(a, b, color, width, style);
        }
    }

    /// If `|active group| >= 3`, connects the last selected dot back to
    /// the first, closing the polygon.
    pub fn close_polygon(&mut self, color: Color, width: u32, style: i32) {
        let Some(group) = self.groups.get(&self.active) else {
            return;
        };
        if group.len() < 3 {
            return;
        }
        let (Some(&first), Some(&last)) = (group.iter().next(), group.iter().next_back()) else {
            return;
        };
        self.push_connection_if_new(last, first, color, width, style);
    }

    fn push_connection_if_new(&mut self, a: usize, b: usize, color: Color, width: u32, style: i32) {
        let canonical = if a <= b { (a, b) } else { (b, a) };
        let already_present = self
            .connections
            .iter()
            .any(|c| c.canonical_pair() == canonical);
        if !already_present {
            self.connections.push(Connection { dot1: a, dot2: b, color, width, style });
        }
    }

    /// `true` if a connection between `a` and `b` exists, in either order.
    #[must_use]
    pub fn has_connection(&self, a: usize, b: usize) -> bool {
        let canonical = if a <= b { (a, b) } else { (b, a) };
        self.connections.iter().any(|c| c.canonical_pair() == canonical)
    }

    /// Computes `op` over the named groups (at least 2 required) and
    /// writes the result into `result_name`, creating it if necessary.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if fewer than 2 group names
    /// are given or any named group does not exist.
    pub fn set_operation(&mut self, names: &[&str], op: SetOp, result_name: &str) -> Result<()> {
        if names.len() < 2 {
            return Err(Error::invalid_parameters(
                "set operations require at least 2 group names",
            ));
        }
        let mut sets = Vec::with_capacity(names.len());
        for &name in names {
            let set = self.groups.get(name).ok_or_else(|| {
                Error::invalid_parameters(format!("unknown group {name:?} in set operation"))
            })?;
            sets.push(set.clone());
        }

        let result: BTreeSet<usize> = match op {
            SetOp::Union => sets.iter().flatten().copied().collect(),
            SetOp::Intersection => {
                let mut iter = sets.iter();
                #[allow(clippy::expect_used, reason = "names.len() >= 2 checked above")]
                let first = iter.next().expect("at least 2 sets").clone();
                iter.fold(first, |acc, s| acc.intersection(s).copied().collect())
            }
            SetOp::Difference => {
                #[allow(clippy::expect_used, reason = "names.len() >= 2 checked above")]
                let (first, rest) = sets.split_first().expect("at least 2 sets");
                let rest_union: BTreeSet<usize> = rest.iter().flatten().copied().collect();
                first.difference(&rest_union).copied().collect()
            }
            SetOp::SymmetricDifference => {
                let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
                for set in &sets {
                    for &index in set {
                        *counts.entry(index).or_insert(0) += 1;
                    }
                }
                counts
                    .into_iter()
                    .filter(|&(_, count)| count % 2 == 1)
                    .map(|(index, _)| index)
                    .collect()
            }
        };

        self.groups.insert(result_name.to_string(), result);
        Ok(())
    }
}
