//! Shared line-geometry helpers used by the star-polygon generator.

/// Absolute tolerance used throughout this module to treat two floating
/// point coordinates as equal.
pub const EPSILON: f64 = 1e-6;

/// Computes the intersection of the infinite lines through `(p1, p2)` and
/// `(p3, p4)`, using the standard algebraic form `a*x + b*y = c` and the
/// determinant `a1*b2 - a2*b1`. Returns `None` for parallel lines (zero
/// determinant).
#[must_use]
pub fn line_intersection(
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    p4: (f64, f64),
) -> Option<(f64, f64)> {
    let a1 = p2.1 - p1.1;
    let b1 = p1.0 - p2.0;
    let c1 = a1.mul_add(p1.0, b1 * p1.1);

    let a2 = p4.1 - p3.1;
    let b2 = p3.0 - p4.0;
    let c2 = a2.mul_add(p3.0, b2 * p3.1);

    let determinant = a1 * b2 - a2 * b1;
    if determinant == 0.0 {
        return None;
    }

    let x = (b2 * c1 - b1 * c2) / determinant;
    let y = (a1 * c2 - a2 * c1) / determinant;
    Some((x, y))
}

/// Checks whether `p` lies on the closed segment from `p1` to `p2`, within
/// [`EPSILON`] of the line and with its projection falling between the
/// endpoints.
#[must_use]
pub fn point_on_segment(p1: (f64, f64), p2: (f64, f64), p: (f64, f64)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x, y) = p;

    let length_squared = (x2 - x1).mul_add(x2 - x1, (y2 - y1) * (y2 - y1));
    if length_squared == 0.0 {
        return (x - x1).abs() < EPSILON && (y - y1).abs() < EPSILON;
    }

    let r = ((x - x1) * (x2 - x1) + (y - y1) * (y2 - y1)) / length_squared;
    if !(0.0..=1.0).contains(&r) {
        return false;
    }

    let distance =
        ((y2 - y1) * x - (x2 - x1) * y + x2 * y1 - y2 * x1).abs() / length_squared.sqrt();
    distance < EPSILON
}

/// Returns `true` if `point` is not already present in `seen`, within
/// [`EPSILON`] on both axes.
#[must_use]
pub fn is_new_point(seen: &[(f64, f64)], point: (f64, f64)) -> bool {
    !seen
        .iter()
        .any(|&(x, y)| (x - point.0).abs() < EPSILON && (y - point.1).abs() < EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_lines_intersect_at_origin() {
        let result = line_intersection((-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0));
        let (x, y) = result.expect("lines are not parallel");
        assert!(x.abs() < EPSILON);
        assert!(y.abs() < EPSILON);
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        assert_eq!(
            line_intersection((0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)),
            None
        );
    }

    #[test]
    fn midpoint_is_on_segment() {
        assert!(point_on_segment((0.0, 0.0), (2.0, 2.0), (1.0, 1.0)));
    }

    #[test]
    fn point_off_segment_line_is_rejected() {
        assert!(!point_on_segment((0.0, 0.0), (2.0, 0.0), (1.0, 1.0)));
    }
}
