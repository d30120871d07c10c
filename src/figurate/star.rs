//! Star polygon dot generation: outer vertices, inner chord
//! intersections, and (for `index >= 3`) interpolated dots along each
//! star point.

use std::f64::consts::PI;

use super::dot::Dot;
use super::geometry::{is_new_point, line_intersection, point_on_segment};

/// Returns the fixed skip value for small, well-known star polygons, or
/// `sides / 2` (decremented by one if both `sides` and the quotient are
/// even) for anything larger.
#[must_use]
pub const fn skip_value(sides: u32) -> u32 {
    match sides {
        5 | 6 => 2,
        7 | 8 => 3,
        9 => 4,
        10 => 3,
        11 | 12 => 5,
        _ => {
            let s = sides / 2;
            if s % 2 == 0 && sides % 2 == 0 {
                s - 1
            } else {
                s
            }
        }
    }
}

/// Generates dots for a star polygon: outer vertices and inner
/// intersection points for every layer `1..=index`, plus interpolated
/// dots along each star point when `index >= 3`.
///
/// Outer vertices carry an integer `layer`; inner intersection vertices
/// carry `layer - 0.5`.
#[must_use]
pub fn star(sides: u32, index: u32) -> Vec<Dot> {
    let k = sides as usize;
    let skip = skip_value(sides) as usize;
    let mut dots = vec![Dot::Real { x: 0.0, y: 0.0, layer: 0.0, index: 1 }];

    for layer in 1..=index {
        #[allow(clippy::cast_precision_loss, reason = "layer is a small count")]
        let layer_f = f64::from(layer);

        let math_vertices: Vec<(f64, f64)> = (0..k)
            .map(|i| {
                #[allow(clippy::cast_precision_loss, reason = "i, k are small counts")]
                let angle = 2.0 * PI * (i as f64) / (k as f64);
                (layer_f * angle.cos(), layer_f * angle.sin())
            })
            .collect();

        for &(x, y) in &math_vertices {
            let next_index = super::dot::real_indices(&dots).len() + 1;
            dots.push(Dot::Real { x, y, layer: layer_f, index: next_index });
        }

        let vertex_dist = layer_f; // math_vertices[0] is always distance `layer` from center.
        let mut intersections: Vec<(f64, f64)> = Vec::new();
        for i in 0..k {
            let i_next = (i + skip) % k;
            for j in (i + 1)..k {
                let j_next = (j + skip) % k;
                if i_next == j || j_next == i {
                    continue;
                }
                #[allow(
                    clippy::indexing_slicing,
                    reason = "i, j, i_next, j_next are all reduced mod k == math_vertices.len()"
                )]
                let Some(point) = line_intersection(
                    math_vertices[i],
                    math_vertices[i_next],
                    math_vertices[j],
                    math_vertices[j_next],
                ) else {
                    continue;
                };
                let center_dist = point.0.hypot(point.1);
                if center_dist < vertex_dist * 0.9 && is_new_point(&intersections, point) {
                    intersections.push(point);
                }
            }
        }

        for &(x, y) in &intersections {
            let next_index = super::dot::real_indices(&dots).len() + 1;
            dots.push(Dot::Real { x, y, layer: layer_f - 0.5, index: next_index });
        }

        if index >= 3 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "index >= 3 checked above")]
            let dots_per_side = (index - 2) as usize;
            for i in 0..k {
                #[allow(
                    clippy::indexing_slicing,
                    reason = "i < k == math_vertices.len()"
                )]
                let outer = math_vertices[i];
                let target1 = (i + skip) % k;
                let target2 = (i + k - skip) % k;

                let mut connected = Vec::new();
                for &point in &intersections {
                    #[allow(
                        clippy::indexing_slicing,
                        reason = "i, target1, target2 are all reduced mod k == math_vertices.len()"
                    )]
                    {
                        if point_on_segment(math_vertices[i], math_vertices[target1], point) {
                            connected.push(point);
                        }
                        if point_on_segment(math_vertices[i], math_vertices[target2], point) {
                            connected.push(point);
                        }
                    }
                }

                for &inner in connected.iter().take(2) {
                    for step in 1..=dots_per_side {
                        #[allow(clippy::cast_precision_loss, reason = "step, dots_per_side are small counts")]
                        let t = step as f64 / (dots_per_side + 1) as f64;
                        let x = t.mul_add(inner.0 - outer.0, outer.0);
                        let y = t.mul_add(inner.1 - outer.1, outer.1);
                        let next_index = super::dot::real_indices(&dots).len() + 1;
                        dots.push(Dot::Real { x, y, layer: layer_f, index: next_index });
                    }
                }
            }
        }
    }

    dots
}
