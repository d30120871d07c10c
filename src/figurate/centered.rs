//! Centered polygonal number dot generation.

use std::f64::consts::PI;

use super::dot::Dot;

/// `sides*n*(n-1)/2 + 1`, the closed-form count of a centered k-gonal
/// number's index-`n` term.
#[must_use]
pub const fn centered_count(sides: u32, index: u32) -> u64 {
    let k = sides as u64;
    let n = index as u64;
    k * n * (n - 1) / 2 + 1
}

fn layer_vertices(sides: u32, layer: u32) -> Vec<(f64, f64)> {
    #[allow(clippy::cast_precision_loss, reason = "layer and sides are small counts")]
    let layer_f = f64::from(layer);
    #[allow(clippy::cast_precision_loss, reason = "sides is a small count")]
    let sides_f = f64::from(sides);
    (0..sides)
        .map(|i| {
            #[allow(clippy::cast_precision_loss, reason = "i is a small count")]
            let angle = 2.0 * PI * f64::from(i) / sides_f + PI / sides_f;
            (layer_f * angle.cos(), layer_f * angle.sin())
        })
        .collect()
}

/// Appends one full ring of `sides * layer` dots at the given layer.
fn add_full_layer(dots: &mut Vec<Dot>, sides: u32, layer: u32) {
    let vertices = layer_vertices(sides, layer);
    let k = sides as usize;
    #[allow(clippy::cast_precision_loss, reason = "layer is a small count")]
    let layer_f = f64::from(layer);
    for i in 0..k {
        #[allow(
            clippy::indexing_slicing,
            reason = "i < k == vertices.len() and (i + 1) % k is always < k"
        )]
        let (v1, v2) = (vertices[i], vertices[(i + 1) % k]);
        for j in 0..layer {
            #[allow(clippy::cast_precision_loss, reason = "j, layer are small counts")]
            let t = f64::from(j) / layer_f;
            let x = t.mul_add(v2.0 - v1.0, v1.0);
            let y = t.mul_add(v2.1 - v1.1, v1.1);
            let next_index = dots.len() + 1;
            dots.push(Dot::Real { x, y, layer: layer_f, index: next_index });
        }
    }
}

/// Appends dots for a ring, walking sides in order, until `dots_to_add`
/// dots have been placed (used when the target count falls inside a
/// layer rather than landing on a layer boundary).
fn add_partial_layer(dots: &mut Vec<Dot>, sides: u32, layer: u32, dots_to_add: u64) {
    let vertices = layer_vertices(sides, layer);
    let k = sides as usize;
    #[allow(clippy::cast_precision_loss, reason = "layer is a small count")]
    let layer_f = f64::from(layer);
    let mut placed: u64 = 0;
    'sides: for i in 0..k {
        #[allow(
            clippy::indexing_slicing,
            reason = "i < k == vertices.len() and (i + 1) % k is always < k"
        )]
        let (v1, v2) = (vertices[i], vertices[(i + 1) % k]);
        for j in 0..layer {
            if placed >= dots_to_add {
                break 'sides;
            }
            #[allow(clippy::cast_precision_loss, reason = "j, layer are small counts")]
            let t = f64::from(j) / layer_f;
            let x = t.mul_add(v2.0 - v1.0, v1.0);
            let y = t.mul_add(v2.1 - v1.1, v1.1);
            let next_index = dots.len() + 1;
            dots.push(Dot::Real { x, y, layer: layer_f, index: next_index });
            placed += 1;
        }
    }
}

/// Generates dots for a centered k-gonal number: the origin at layer 0,
/// then successive full rings at layers `1..index-1`, stopping early with
/// a partial ring if the next full ring would overshoot the closed-form
/// count.
#[must_use]
pub fn centered(sides: u32, index: u32) -> Vec<Dot> {
    let mut dots = vec![Dot::Real { x: 0.0, y: 0.0, layer: 0.0, index: 1 }];
    if index == 1 {
        return dots;
    }
    let target = centered_count(sides, index);
    let mut placed: u64 = 1;
    for layer in 1..index {
        let dots_in_layer = u64::from(sides) * u64::from(layer);
        if placed + dots_in_layer > target {
            add_partial_layer(&mut dots, sides, layer, target - placed);
            break;
        }
        add_full_layer(&mut dots, sides, layer);
        placed += dots_in_layer;
    }
    dots
}

#[cfg(test)]
#[allow(
    clippy::indexing_slicing,
    reason = "test assertions index freshly generated, non-empty dot vectors"
)]
mod tests {
    use super::*;

    #[test]
    fn centered_hexagonal_index_3_matches_spec_example() {
        let dots = centered(6, 3);
        assert_eq!(dots.len(), 19);
        assert_eq!(usize::try_from(centered_count(6, 3)).unwrap(), 19);

        let layer0 = dots.iter().filter(|d| matches!(d, Dot::Real { layer, .. } if *layer == 0.0)).count();
        let layer1 = dots.iter().filter(|d| matches!(d, Dot::Real { layer, .. } if *layer == 1.0)).count();
        let layer2 = dots.iter().filter(|d| matches!(d, Dot::Real { layer, .. } if *layer == 2.0)).count();
        assert_eq!(layer0, 1);
        assert_eq!(layer1, 6);
        assert_eq!(layer2, 12);
    }

    #[test]
    fn index_one_is_single_origin_dot() {
        let dots = centered(5, 1);
        assert_eq!(dots.len(), 1);
        assert!(matches!(dots[0], Dot::Real { x, y, layer, index: 1 } if x == 0.0 && y == 0.0 && layer == 0.0));
    }

    #[test]
    fn real_indices_are_contiguous() {
        let dots = centered(8, 4);
        let indices = super::dot::real_indices(&dots);
        let expected: Vec<usize> = (1..=indices.len()).collect();
        assert_eq!(indices, expected);
    }
}
