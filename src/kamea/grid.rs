//! Loading and coordinate geometry for the 27x27 Kamea grid.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ternary::to_ternary_padded;
use crate::transition::apply_conrune;

use super::bigram::DITRUNE_LEN;

/// Side length of the Kamea grid.
pub const GRID_SIZE: usize = 27;

/// Half-width of the centered coordinate range; valid Cartesian
/// coordinates are `-MAX_COORD..=MAX_COORD` on both axes.
pub const MAX_COORD: i32 = 13;

/// A loaded, validated 27x27 grid of ditrunes, indexed either by raw grid
/// `(row, col)` or by centered Cartesian `(x, y)`.
#[derive(Debug, Clone)]
pub struct KameaGrid {
    decimal: Vec<Vec<u16>>,
    ditrune: Vec<Vec<String>>,
}

/// Converts centered Cartesian coordinates to grid `(row, col)` indices.
///
/// # Errors
/// Returns [`Error::OutOfBounds`] if `x` or `y` is outside
/// `[-MAX_COORD, MAX_COORD]`.
pub fn cartesian_to_grid(x: i32, y: i32) -> Result<(usize, usize)> {
    if !(-MAX_COORD..=MAX_COORD).contains(&x) || !(-MAX_COORD..=MAX_COORD).contains(&y) {
        return Err(Error::out_of_bounds(x, y));
    }
    let row = MAX_COORD - y;
    let col = x + MAX_COORD;
    #[allow(
        clippy::cast_sign_loss,
        reason = "row, col are checked within 0..GRID_SIZE above"
    )]
    Ok((row as usize, col as usize))
}

/// Converts grid `(row, col)` indices to centered Cartesian coordinates.
#[must_use]
pub const fn grid_to_cartesian(row: usize, col: usize) -> (i32, i32) {
    #[allow(
        clippy::cast_possible_wrap,
        reason = "row, col are always < GRID_SIZE (27)"
    )]
    let (row, col) = (row as i32, col as i32);
    (col - MAX_COORD, MAX_COORD - row)
}

impl KameaGrid {
    /// Builds a grid from already-parsed decimal and ditrune matrices,
    /// zero-padding every ditrune to 6 characters and validating that:
    /// 1. The two matrices are both exactly `27x27`.
    /// 2. Every decimal value is in `0..=728`.
    /// 3. The ditrune at every cell equals the base-3 representation of
    ///    that cell's decimal value.
    /// 4. The Conrune-pair invariant holds: the ditrune at `(-x, -y)` is
    ///    the Conrune of the ditrune at `(x, y)`, for every Cartesian
    ///    `(x, y)` on the grid.
    ///
    /// # Errors
    /// Returns [`Error::IntegrityError`] if any of the above checks fail.
    pub fn from_matrices(decimal: Vec<Vec<u16>>, ditrune: Vec<Vec<String>>) -> Result<Self> {
        if decimal.len() != GRID_SIZE || ditrune.len() != GRID_SIZE {
            return Err(Error::integrity(format!(
                "Kamea grid must have exactly {GRID_SIZE} rows, got {} decimal rows and {} ditrune rows",
                decimal.len(),
                ditrune.len()
            )));
        }
        for (r, row) in decimal.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(Error::integrity(format!(
                    "decimal row {r} has {} columns, expected {GRID_SIZE}",
                    row.len()
                )));
            }
        }

        let mut padded_ditrune = Vec::with_capacity(GRID_SIZE);
        for (r, row) in ditrune.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(Error::integrity(format!(
                    "ditrune row {r} has {} columns, expected {GRID_SIZE}",
                    row.len()
                )));
            }
            let mut padded_row = Vec::with_capacity(GRID_SIZE);
            for (c, cell) in row.iter().enumerate() {
                if cell.len() > DITRUNE_LEN {
                    return Err(Error::integrity(format!(
                        "ditrune at ({r}, {c}) is longer than {DITRUNE_LEN} characters: {cell:?}"
                    )));
                }
                let mut padded = "0".repeat(DITRUNE_LEN - cell.len());
                padded.push_str(cell);
                padded_row.push(padded);
            }
            padded_ditrune.push(padded_row);
        }

        let grid = Self {
            decimal,
            ditrune: padded_ditrune,
        };
        grid.validate_agreement()?;
        grid.validate_conrune_pairs()?;
        Ok(grid)
    }

    fn validate_agreement(&self) -> Result<()> {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                #[allow(
                    clippy::indexing_slicing,
                    reason = "r, c are bounded by GRID_SIZE and both matrices were checked \
                              to have exactly GRID_SIZE rows/columns in from_matrices"
                )]
                let decimal = self.decimal[r][c];
                if decimal > 728 {
                    return Err(Error::integrity(format!(
                        "decimal at ({r}, {c}) is {decimal}, outside the ditrune range 0..=728"
                    )));
                }
                let expected = to_ternary_padded(i64::from(decimal), DITRUNE_LEN);
                #[allow(
                    clippy::indexing_slicing,
                    reason = "r, c are bounded by GRID_SIZE, checked in from_matrices"
                )]
                let actual = &self.ditrune[r][c];
                if &expected != actual {
                    return Err(Error::integrity(format!(
                        "grid disagreement at ({r}, {c}): decimal {decimal} implies ditrune {expected:?}, file has {actual:?}"
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_conrune_pairs(&self) -> Result<()> {
        for x in -MAX_COORD..=MAX_COORD {
            for y in -MAX_COORD..=MAX_COORD {
                let here = self.ditrune_at(x, y)?;
                let there = self.ditrune_at(-x, -y)?;
                let expected = apply_conrune(&here)?;
                if expected != there {
                    return Err(Error::integrity(format!(
                        "Conrune-pair invariant violated: ({x}, {y}) = {here:?} but ({-x}, {-y}) = {there:?}, expected Conrune {expected:?}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Reads a Kamea grid from two parallel CSV files: a decimal grid and
    /// a ditrune grid, each 27 rows by 27 columns with no header.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if either file cannot be read, and the
    /// errors of [`Self::from_matrices`] if the loaded data fails
    /// validation.
    pub fn load_from_csv(decimal_path: &Path, ditrune_path: &Path) -> Result<Self> {
        log::debug!(
            "loading Kamea grid from {} and {}",
            decimal_path.display(),
            ditrune_path.display()
        );
        let decimal = Self::read_decimal_csv(decimal_path)?;
        let ditrune = Self::read_ditrune_csv(ditrune_path)?;
        let grid = Self::from_matrices(decimal, ditrune)?;
        log::debug!("Kamea grid loaded and validated");
        Ok(grid)
    }

    fn read_decimal_csv(path: &Path) -> Result<Vec<Vec<u16>>> {
        let mut reader = Self::csv_reader(path)?;
        let mut rows = Vec::with_capacity(GRID_SIZE);
        for record in reader.records() {
            let record = record.map_err(|e| Error::io(format!("reading {}", path.display()), std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
            let mut row = Vec::with_capacity(GRID_SIZE);
            for field in record.iter() {
                let value: u16 = field.trim().parse().map_err(|_| {
                    Error::integrity(format!("non-numeric decimal cell {field:?} in {}", path.display()))
                })?;
                row.push(value);
            }
            rows.push(row);
        }
        Ok(rows)
    }

    fn read_ditrune_csv(path: &Path) -> Result<Vec<Vec<String>>> {
        let mut reader = Self::csv_reader(path)?;
        let mut rows = Vec::with_capacity(GRID_SIZE);
        for record in reader.records() {
            let record = record.map_err(|e| Error::io(format!("reading {}", path.display()), std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
            rows.push(record.iter().map(|field| field.trim().to_string()).collect());
        }
        Ok(rows)
    }

    fn csv_reader(path: &Path) -> Result<csv::Reader<std::io::Cursor<Vec<u8>>>> {
        let mut file = std::fs::File::open(path)
            .map_err(|e| Error::io(format!("opening {}", path.display()), e))?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| Error::io(format!("reading {}", path.display()), e))?;
        Ok(csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(std::io::Cursor::new(contents)))
    }

    /// Returns the decimal value at centered Cartesian `(x, y)`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the
    /// grid.
    pub fn decimal_at(&self, x: i32, y: i32) -> Result<u16> {
        let (row, col) = cartesian_to_grid(x, y)?;
        #[allow(
            clippy::indexing_slicing,
            reason = "cartesian_to_grid only returns row, col within 0..GRID_SIZE"
        )]
        Ok(self.decimal[row][col])
    }

    /// Returns the ditrune at centered Cartesian `(x, y)`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the
    /// grid.
    pub fn ditrune_at(&self, x: i32, y: i32) -> Result<String> {
        let (row, col) = cartesian_to_grid(x, y)?;
        #[allow(
            clippy::indexing_slicing,
            reason = "cartesian_to_grid only returns row, col within 0..GRID_SIZE"
        )]
        Ok(self.ditrune[row][col].clone())
    }

    /// Iterates over every `(x, y, decimal, ditrune)` cell in the grid, in
    /// row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, u16, &str)> + '_ {
        (0..GRID_SIZE).flat_map(move |row| {
            (0..GRID_SIZE).map(move |col| {
                let (x, y) = grid_to_cartesian(row, col);
                #[allow(
                    clippy::indexing_slicing,
                    reason = "row, col are both drawn from 0..GRID_SIZE ranges"
                )]
                (x, y, self.decimal[row][col], self.ditrune[row][col].as_str())
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
#[allow(
    clippy::indexing_slicing,
    reason = "test fixture indices are always within the GRID_SIZE bounds it allocated"
)]
mod tests {
    use super::*;
    use crate::ternary::to_ternary_padded;

    fn build_valid_grid() -> KameaGrid {
        let mut decimal = vec![vec![0u16; GRID_SIZE]; GRID_SIZE];
        let mut ditrune = vec![vec![String::new(); GRID_SIZE]; GRID_SIZE];
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (x, y) = grid_to_cartesian(row, col);
                let (neg_row, neg_col) = cartesian_to_grid(-x, -y).unwrap();
                // Fill only once per Conrune pair to keep construction simple:
                // process (x,y) with x>0 or (x==0 and y>=0) as "primary" and
                // derive its partner from it.
                let is_primary = x > 0 || (x == 0 && y >= 0);
                if is_primary {
                    #[allow(
                        clippy::cast_sign_loss,
                        clippy::cast_possible_truncation,
                        reason = "row/col fit u16 for this small test grid"
                    )]
                    let value = ((row * GRID_SIZE + col) % 729) as u16;
                    decimal[row][col] = value;
                    ditrune[row][col] = to_ternary_padded(i64::from(value), DITRUNE_LEN);
                    let partner_ditrune = apply_conrune(&ditrune[row][col]).unwrap();
                    let partner_value = crate::ternary::from_ternary(&partner_ditrune).unwrap();
                    #[allow(clippy::cast_sign_loss, reason = "partner_value is 0..=728")]
                    let partner_value = partner_value as u16;
                    decimal[neg_row][neg_col] = partner_value;
                    ditrune[neg_row][neg_col] = partner_ditrune;
                }
            }
        }
        KameaGrid::from_matrices(decimal, ditrune).unwrap()
    }

    #[test]
    fn valid_grid_loads_and_round_trips_coordinates() {
        let grid = build_valid_grid();
        assert_eq!(grid.decimal_at(0, 0).unwrap(), 0);
    }

    #[test]
    fn coordinate_conversion_round_trips() {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (x, y) = grid_to_cartesian(row, col);
                let (r2, c2) = cartesian_to_grid(x, y).unwrap();
                assert_eq!((row, col), (r2, c2));
            }
        }
    }

    #[test]
    fn origin_is_grid_center() {
        assert_eq!(grid_to_cartesian(13, 13), (0, 0));
    }

    #[test]
    fn out_of_bounds_coordinate_is_rejected() {
        assert!(matches!(
            cartesian_to_grid(14, 0),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn mismatched_decimal_and_ditrune_is_integrity_error() {
        let mut decimal = vec![vec![0u16; GRID_SIZE]; GRID_SIZE];
        let ditrune = vec![vec!["000000".to_string(); GRID_SIZE]; GRID_SIZE];
        decimal[0][0] = 1; // disagrees with ditrune "000000"
        assert!(matches!(
            KameaGrid::from_matrices(decimal, ditrune),
            Err(Error::IntegrityError { .. })
        ));
    }
}
