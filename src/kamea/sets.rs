//! Quadset/octaset orbit construction and pattern search over a loaded
//! [`KameaGrid`].

use super::grid::{cartesian_to_grid, KameaGrid, MAX_COORD};
use crate::error::Result;

/// The four-cell reflection orbit of a Cartesian point, clipped to grid
/// bounds. For axis-free `(x, y)` (`x != 0 && y != 0`) this always has 4
/// distinct members; `(0, 0)` clips down to a single member.
#[must_use]
pub fn quadset(x: i32, y: i32) -> Vec<(i32, i32)> {
    let mut members = vec![(x, y), (-x, y), (-x, -y), (x, -y)];
    members.sort_unstable();
    members.dedup();
    members.retain(|&(px, py)| (-MAX_COORD..=MAX_COORD).contains(&px) && (-MAX_COORD..=MAX_COORD).contains(&py));
    members
}

/// The eight-cell orbit under reflection and axis-swap: the quadset united
/// with the axis-swapped quadset `{(y,x), (-y,x), (-y,-x), (y,-x)}`. Has 8
/// members unless `|x| == |y|`, in which case the two quadsets coincide
/// and it degenerates to 4.
#[must_use]
pub fn octaset(x: i32, y: i32) -> Vec<(i32, i32)> {
    let mut members = quadset(x, y);
    members.extend(quadset(y, x));
    members.sort_unstable();
    members.dedup();
    members
}

/// The arithmetic sum of decimal values at the cells of `quadset(x, y)`.
///
/// # Errors
/// Returns [`Error::OutOfBounds`] if any quadset member falls outside the
/// grid (should not occur for in-bounds `(x, y)` since the quadset is
/// clipped, but coordinates derived externally are still checked).
///
/// [`Error::OutOfBounds`]: crate::error::Error::OutOfBounds
pub fn quadsum(grid: &KameaGrid, x: i32, y: i32) -> Result<u32> {
    let mut total = 0u32;
    for (px, py) in quadset(x, y) {
        total += u32::from(grid.decimal_at(px, py)?);
    }
    Ok(total)
}

/// The arithmetic sum of decimal values at the cells of `octaset(x, y)`.
///
/// # Errors
/// Propagates the errors of [`KameaGrid::decimal_at`].
pub fn octasum(grid: &KameaGrid, x: i32, y: i32) -> Result<u32> {
    let mut total = 0u32;
    for (px, py) in octaset(x, y) {
        total += u32::from(grid.decimal_at(px, py)?);
    }
    Ok(total)
}

/// Returns every grid cell (as Cartesian coordinates) whose decimal value
/// equals `target`.
#[must_use]
pub fn find_by_decimal(grid: &KameaGrid, target: u16) -> Vec<(i32, i32)> {
    grid.iter_cells()
        .filter(|&(_, _, decimal, _)| decimal == target)
        .map(|(x, y, _, _)| (x, y))
        .collect()
}

/// Returns every grid cell whose 6-digit ditrune contains `substring`.
#[must_use]
pub fn find_by_ternary_substring(grid: &KameaGrid, substring: &str) -> Vec<(i32, i32)> {
    grid.iter_cells()
        .filter(|&(_, _, _, ditrune)| ditrune.contains(substring))
        .map(|(x, y, _, _)| (x, y))
        .collect()
}

/// Returns every grid cell belonging to a quadset whose sum equals
/// `target`, considering each non-axis `(x, y)` exactly once.
///
/// # Errors
/// Propagates the errors of [`quadsum`].
pub fn find_by_quadsum(grid: &KameaGrid, target: u32) -> Result<Vec<(i32, i32)>> {
    let mut matches = Vec::new();
    for x in 1..=MAX_COORD {
        for y in 1..=MAX_COORD {
            if quadsum(grid, x, y)? == target {
                matches.extend(quadset(x, y));
            }
        }
    }
    matches.sort_unstable();
    matches.dedup();
    Ok(matches)
}

/// Validates that `(x, y)` lies within the grid, surfacing
/// [`Error::OutOfBounds`] the same way indexing the grid would.
///
/// [`Error::OutOfBounds`]: crate::error::Error::OutOfBounds
pub fn validate_in_bounds(x: i32, y: i32) -> Result<()> {
    cartesian_to_grid(x, y).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadset_of_origin_is_singleton() {
        assert_eq!(quadset(0, 0), vec![(0, 0)]);
    }

    #[test]
    fn quadset_matches_spec_example() {
        let mut members = quadset(2, 3);
        members.sort_unstable();
        let mut expected = vec![(2, 3), (-2, 3), (-2, -3), (2, -3)];
        expected.sort_unstable();
        assert_eq!(members, expected);
    }

    #[test]
    fn octaset_matches_spec_example() {
        let members = octaset(2, 3);
        assert_eq!(members.len(), 8);
        for expected in [
            (2, 3),
            (-2, 3),
            (-2, -3),
            (2, -3),
            (3, 2),
            (-3, 2),
            (-3, -2),
            (3, -2),
        ] {
            assert!(members.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn octaset_degenerates_on_diagonal() {
        let members = octaset(5, 5);
        assert_eq!(members.len(), 4);
    }
}
