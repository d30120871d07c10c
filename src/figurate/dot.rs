//! The dot record shared by every figurate generator.

/// A single point in a figurate-number diagram.
///
/// Real dots carry a contiguous 1-based index and a layer tag (layer 0 is
/// reserved for the center of centered and star forms; star inner vertices
/// use a half-integer layer, one less than their outer layer). Skipped
/// vertices are placeholders emitted where a regular polygon's side
/// terminus would duplicate the next side's initial vertex; renderers
/// must skip them, and they never receive a real index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dot {
    /// A real, indexed dot.
    Real {
        /// x coordinate.
        x: f64,
        /// y coordinate.
        y: f64,
        /// Gnomon layer; 0 is the center.
        layer: f64,
        /// 1-based, contiguous dot index.
        index: usize,
    },
    /// A placeholder at a shared vertex position, not independently
    /// indexed or rendered.
    SkippedVertex {
        /// x coordinate.
        x: f64,
        /// y coordinate.
        y: f64,
    },
}

impl Dot {
    /// The `(x, y)` position of this dot, real or skipped.
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        match *self {
            Self::Real { x, y, .. } | Self::SkippedVertex { x, y } => (x, y),
        }
    }

    /// `true` for [`Dot::Real`].
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real { .. })
    }
}

/// Returns the contiguous `1..=count` index sequence of the real dots in
/// `dots`, ignoring skipped-vertex placeholders.
#[must_use]
pub fn real_indices(dots: &[Dot]) -> Vec<usize> {
    dots.iter()
        .filter_map(|dot| match *dot {
            Dot::Real { index, .. } => Some(index),
            Dot::SkippedVertex { .. } => None,
        })
        .collect()
}
