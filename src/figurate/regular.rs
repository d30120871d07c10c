//! Regular (non-centered, non-star) polygonal number dot generation.

use std::f64::consts::PI;

use super::dot::Dot;

/// `(k-2)*n*(n-1)/2 + n`, the closed-form count of a regular k-gonal
/// number's index-`n` term.
#[must_use]
pub const fn regular_count(sides: u32, index: u32) -> u64 {
    let k = sides as u64;
    let n = index as u64;
    (k - 2) * n * (n - 1) / 2 + n
}

/// Cumulative-walk vertices of a k-gon with unit side length `side_length`:
/// vertex 0 is the origin, and vertex `i` (`i >= 1`) is vertex `i-1`
/// offset by `side_length` in direction `2*pi*i/k`. Because the sum of
/// unit vectors at all `k` such angles is zero, the implied closing edge
/// from vertex `k-1` back to vertex 0 also has length `side_length`.
fn walk_vertices(sides: usize, side_length: f64) -> Vec<(f64, f64)> {
    let mut vertices = Vec::with_capacity(sides);
    vertices.push((0.0, 0.0));
    #[allow(clippy::cast_precision_loss, reason = "sides is always small (<= a few hundred)")]
    let sides_f = sides as f64;
    for i in 1..sides {
        #[allow(clippy::cast_precision_loss, reason = "i < sides, always small")]
        let angle = 2.0 * PI * (i as f64) / sides_f;
        #[allow(
            clippy::indexing_slicing,
            reason = "i ranges over 1..sides, so i - 1 indexes the element just pushed"
        )]
        let (prev_x, prev_y) = vertices[i - 1];
        vertices.push((
            side_length.mul_add(angle.cos(), prev_x),
            side_length.mul_add(angle.sin(), prev_y),
        ));
    }
    vertices
}

/// Dots for triangular numbers (`sides == 3`): axis-aligned rows, row
/// `layer` holding `layer + 1` dots centered under the apex.
#[must_use]
pub fn triangular(index: u32) -> Vec<Dot> {
    let mut dots = vec![Dot::Real { x: 0.0, y: 0.0, layer: 0.0, index: 1 }];
    for layer in 1..index {
        #[allow(clippy::cast_precision_loss, reason = "layer is a small dot count")]
        let layer_f = f64::from(layer);
        let y = layer_f * 3f64.sqrt() / 2.0;
        for i in 0..=layer {
            #[allow(clippy::cast_precision_loss, reason = "i is a small dot count")]
            let x = f64::from(i) - layer_f / 2.0;
            let next_index = dots.len() + 1;
            dots.push(Dot::Real { x, y, layer: layer_f, index: next_index });
        }
    }
    dots
}

/// Dots for square numbers (`sides == 4`): an L-shaped gnomon added around
/// each previous square.
#[must_use]
pub fn square(index: u32) -> Vec<Dot> {
    let mut dots = vec![Dot::Real { x: 0.0, y: 0.0, layer: 0.0, index: 1 }];
    for layer in 1..index {
        #[allow(clippy::cast_precision_loss, reason = "layer is a small dot count")]
        let layer_f = f64::from(layer);
        for i in 0..layer {
            #[allow(clippy::cast_precision_loss, reason = "i is a small dot count")]
            let x = f64::from(i);
            let next_index = dots.len() + 1;
            dots.push(Dot::Real { x, y: layer_f, layer: layer_f, index: next_index });
        }
        for i in 0..=layer {
            #[allow(clippy::cast_precision_loss, reason = "i is a small dot count")]
            let y = f64::from(i);
            let next_index = dots.len() + 1;
            dots.push(Dot::Real { x: layer_f, y, layer: layer_f, index: next_index });
        }
    }
    dots
}

/// Dots for pentagonal numbers (`sides == 5`): the generic side-walk, but
/// shared vertices between consecutive sides are dropped silently rather
/// than kept as skipped-vertex placeholders (pentagon is below the
/// placeholder threshold of `sides >= 6`).
#[must_use]
pub fn pentagonal(index: u32) -> Vec<Dot> {
    side_walk(5, index, false)
}

/// Dots for general k-gonal numbers with `sides >= 6`: the same
/// side-walk as [`pentagonal`], but shared vertices are kept as
/// [`Dot::SkippedVertex`] placeholders (`layer = -1`, no index) so
/// renderers can still see where they are without double-counting them.
#[must_use]
pub fn general(sides: u32, index: u32) -> Vec<Dot> {
    side_walk(sides, index, true)
}

fn side_walk(sides: u32, index: u32, emit_skipped_placeholder: bool) -> Vec<Dot> {
    let k = sides as usize;
    let mut dots = vec![Dot::Real { x: 0.0, y: 0.0, layer: 0.0, index: 1 }];
    for layer in 1..index {
        #[allow(clippy::cast_precision_loss, reason = "layer is a small dot count")]
        let side_length = f64::from(layer);
        let dots_per_side = layer as usize + 1;
        let vertices = walk_vertices(k, side_length);

        for i in 0..k {
            #[allow(
                clippy::indexing_slicing,
                reason = "i < k == vertices.len() and (i + 1) % k is always < k"
            )]
            let (v1, v2) = (vertices[i], vertices[(i + 1) % k]);
            let start_j = usize::from(i == 0);
            for j in start_j..dots_per_side {
                let is_shared_terminus = j == dots_per_side - 1;
                #[allow(clippy::cast_precision_loss, reason = "j, dots_per_side are small counts")]
                let t = j as f64 / (dots_per_side - 1) as f64;
                let x = t.mul_add(v2.0 - v1.0, v1.0);
                let y = t.mul_add(v2.1 - v1.1, v1.1);
                if is_shared_terminus {
                    if emit_skipped_placeholder {
                        dots.push(Dot::SkippedVertex { x, y });
                    }
                    continue;
                }
                #[allow(clippy::cast_precision_loss, reason = "layer is a small dot count")]
                let layer_f = f64::from(layer);
                let next_index = super::dot::real_indices(&dots).len() + 1;
                dots.push(Dot::Real { x, y, layer: layer_f, index: next_index });
            }
        }
    }
    dots
}

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    reason = "test assertions index fixed-size literals and freshly generated, non-empty dot vectors"
)]
mod tests {
    use super::*;

    #[test]
    fn triangular_index_4_matches_spec_example() {
        let dots = triangular(4);
        assert_eq!(dots.len(), usize::try_from(regular_count(3, 4)).unwrap());
        let layers: Vec<f64> = dots
            .iter()
            .map(|d| match *d {
                Dot::Real { layer, .. } => layer,
                Dot::SkippedVertex { .. } => f64::NAN,
            })
            .collect();
        assert_eq!(layers, vec![0.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn regular_count_matches_closed_form() {
        assert_eq!(regular_count(3, 4), 10);
        assert_eq!(regular_count(4, 4), 16);
    }

    #[test]
    fn index_one_is_single_origin_dot() {
        for sides in [3u32, 4, 5, 6, 7] {
            let dots = match sides {
                3 => triangular(1),
                4 => square(1),
                5 => pentagonal(1),
                k => general(k, 1),
            };
            assert_eq!(dots.len(), 1);
            assert!(matches!(
                dots[0],
                Dot::Real { x, y, layer, index: 1 } if x == 0.0 && y == 0.0 && layer == 0.0
            ));
        }
    }

    #[test]
    fn square_index_4_matches_closed_form_count() {
        let dots = square(4);
        assert_eq!(dots.len(), usize::try_from(regular_count(4, 4)).unwrap());
    }

    #[test]
    fn general_hexagon_emits_skipped_placeholders() {
        let dots = general(6, 3);
        assert!(dots.iter().any(|d| matches!(d, Dot::SkippedVertex { .. })));
    }

    #[test]
    fn pentagonal_and_general_real_dot_counts_match_closed_form() {
        for (sides, index) in [(5u32, 3u32), (5, 6), (6, 2), (6, 4), (7, 3), (9, 5)] {
            let dots = if sides == 5 {
                pentagonal(index)
            } else {
                general(sides, index)
            };
            let real_count = super::super::dot::real_indices(&dots).len();
            assert_eq!(
                real_count,
                usize::try_from(regular_count(sides, index)).unwrap(),
                "sides={sides} index={index}"
            );
        }
    }

    #[test]
    fn pentagonal_never_emits_skipped_placeholders() {
        let dots = pentagonal(4);
        assert!(!dots.iter().any(|d| matches!(d, Dot::SkippedVertex { .. })));
    }

    #[test]
    fn real_indices_are_contiguous() {
        let dots = general(7, 5);
        let indices = super::super::dot::real_indices(&dots);
        let expected: Vec<usize> = (1..=indices.len()).collect();
        assert_eq!(indices, expected);
    }
}
