//! Bigram decomposition and Kamea-locator conversion for ditrunes.

use crate::error::{Error, Result};
use crate::ternary::{from_ternary, to_ternary_padded};

/// A 6-digit standard-ternary string, decimal range `0..=728`.
pub const DITRUNE_LEN: usize = 6;

/// Validates that `s` is a well-formed, non-negative 6-digit ternary
/// string and returns its digit bytes (each `0..=2`), most-significant
/// first.
fn ditrune_digits(s: &str) -> Result<[u8; DITRUNE_LEN]> {
    if s.len() != DITRUNE_LEN || !s.is_ascii() {
        return Err(Error::invalid_parameters(format!(
            "ditrune must be exactly {DITRUNE_LEN} ASCII ternary digits, got {s:?}"
        )));
    }
    let mut digits = [0u8; DITRUNE_LEN];
    for (i, c) in s.chars().enumerate() {
        let digit = match c {
            '0' => 0,
            '1' => 1,
            '2' => 2,
            other => return Err(Error::invalid_digit("ditrune_digits", i, other)),
        };
        #[allow(
            clippy::indexing_slicing,
            reason = "s.len() == DITRUNE_LEN was checked above, so i < DITRUNE_LEN"
        )]
        {
            digits[i] = digit;
        }
    }
    Ok(digits)
}

/// The three bigrams of a ditrune, each an ordered pair of ternary digits
/// taken from opposite-end positions, and each bigram's decimal value
/// (`0..=8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bigrams {
    /// `(digit6, digit1)`, the pair closest to the string's two ends.
    pub bigram1: (u8, u8),
    /// `(digit5, digit2)`.
    pub bigram2: (u8, u8),
    /// `(digit4, digit3)`, the innermost pair.
    pub bigram3: (u8, u8),
}

impl Bigrams {
    /// Decimal value of `bigram1`, read as a 2-digit base-3 number.
    #[must_use]
    pub const fn bigram1_dec(&self) -> u8 {
        self.bigram1.0 * 3 + self.bigram1.1
    }

    /// Decimal value of `bigram2`.
    #[must_use]
    pub const fn bigram2_dec(&self) -> u8 {
        self.bigram2.0 * 3 + self.bigram2.1
    }

    /// Decimal value of `bigram3`.
    #[must_use]
    pub const fn bigram3_dec(&self) -> u8 {
        self.bigram3.0 * 3 + self.bigram3.1
    }
}

/// Decomposes a 6-digit ditrune into its three bigrams by pairing from
/// opposite ends: `bigram1 = (d6, d1)`, `bigram2 = (d5, d2)`,
/// `bigram3 = (d4, d3)`, where `d1` is the least-significant (rightmost)
/// digit.
///
/// # Errors
/// Returns [`Error::InvalidParameters`] if `ditrune` is not exactly 6
/// ASCII characters, and [`Error::InvalidDigit`] if any character is
/// outside `{0,1,2}`.
pub fn ditrune_to_bigrams(ditrune: &str) -> Result<Bigrams> {
    let d = ditrune_digits(ditrune)?;
    // d[0]=d6 .. d[5]=d1
    #[allow(
        clippy::indexing_slicing,
        reason = "d is a fixed-size [u8; DITRUNE_LEN] array, every index below is a literal in range"
    )]
    Ok(Bigrams {
        bigram1: (d[0], d[5]),
        bigram2: (d[1], d[4]),
        bigram3: (d[2], d[3]),
    })
}

/// The `R-A-C` triple identifying a ditrune's position in the Kamea's
/// fractal 9x9 / 3x3 / cell decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    /// Decimal of bigram3: which of the 9 regions (9x9 decomposition).
    pub region: u8,
    /// Decimal of bigram2: which of the 9 areas within the region.
    pub area: u8,
    /// Decimal of bigram1: which cell within the area.
    pub cell: u8,
}

impl Locator {
    /// Formats this locator as `"R-A-C"`.
    #[must_use]
    pub fn to_rac_string(&self) -> String {
        format!("{}-{}-{}", self.region, self.area, self.cell)
    }
}

/// Computes the Kamea locator for a ditrune: `region` = decimal of
/// bigram3, `area` = decimal of bigram2, `cell` = decimal of bigram1.
///
/// # Errors
/// Propagates the errors of [`ditrune_to_bigrams`].
pub fn ditrune_to_locator(ditrune: &str) -> Result<Locator> {
    let bigrams = ditrune_to_bigrams(ditrune)?;
    Ok(Locator {
        region: bigrams.bigram3_dec(),
        area: bigrams.bigram2_dec(),
        cell: bigrams.bigram1_dec(),
    })
}

/// Reconstructs the original ditrune from a locator, the inverse of
/// [`ditrune_to_locator`].
///
/// # Errors
/// Returns [`Error::InvalidParameters`] if `region`, `area`, or `cell` is
/// outside `0..=8`.
pub fn locator_to_ditrune(locator: &Locator) -> Result<String> {
    for (name, value) in [
        ("region", locator.region),
        ("area", locator.area),
        ("cell", locator.cell),
    ] {
        if value > 8 {
            return Err(Error::invalid_parameters(format!(
                "locator {name} {value} outside 0..=8"
            )));
        }
    }
    let bigram3 = to_ternary_padded(i64::from(locator.region), 2);
    let bigram2 = to_ternary_padded(i64::from(locator.area), 2);
    let bigram1 = to_ternary_padded(i64::from(locator.cell), 2);
    let b3 = bigram3.as_bytes();
    let b2 = bigram2.as_bytes();
    let b1 = bigram1.as_bytes();
    // d6 d5 d4 d3 d2 d1 = bigram1.0 bigram2.0 bigram3.0 bigram3.1 bigram2.1 bigram1.1
    #[allow(
        clippy::indexing_slicing,
        reason = "b1, b2, b3 are always exactly 2 bytes: to_ternary_padded(_, 2) on a value <= 8"
    )]
    let ditrune = [b1[0], b2[0], b3[0], b3[1], b2[1], b1[1]];
    Ok(String::from_utf8_lossy(&ditrune).into_owned())
}

/// Zero-pads a decimal value's standard-ternary representation to 6
/// digits, the canonical ditrune form.
///
/// # Errors
/// Returns [`Error::InvalidParameters`] if `decimal` is outside `0..=728`.
pub fn decimal_to_ditrune(decimal: u16) -> Result<String> {
    if decimal > 728 {
        return Err(Error::invalid_parameters(format!(
            "decimal {decimal} outside the ditrune range 0..=728"
        )));
    }
    Ok(to_ternary_padded(i64::from(decimal), DITRUNE_LEN))
}

/// Parses a 6-digit ditrune back to its decimal value.
///
/// # Errors
/// Propagates the errors of [`from_ternary`].
pub fn ditrune_to_decimal(ditrune: &str) -> Result<i64> {
    from_ternary(ditrune)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
mod tests {
    use super::*;

    #[test]
    fn bigrams_match_spec_example() {
        let bigrams = ditrune_to_bigrams("210102").unwrap();
        assert_eq!(bigrams.bigram1_dec(), 8); // "22"
        assert_eq!(bigrams.bigram2_dec(), 3); // "10"
        assert_eq!(bigrams.bigram3_dec(), 1); // "01"
    }

    #[test]
    fn locator_matches_spec_example() {
        let locator = ditrune_to_locator("210102").unwrap();
        assert_eq!(locator.to_rac_string(), "1-3-8");
    }

    #[test]
    fn locator_ditrune_round_trip() {
        for decimal in 0..729u16 {
            let ditrune = decimal_to_ditrune(decimal).unwrap();
            let locator = ditrune_to_locator(&ditrune).unwrap();
            let rebuilt = locator_to_ditrune(&locator).unwrap();
            assert_eq!(rebuilt, ditrune, "round-trip failed for decimal {decimal}");
        }
    }

    #[test]
    fn decimal_to_ditrune_rejects_out_of_range() {
        assert!(matches!(
            decimal_to_ditrune(729),
            Err(Error::InvalidParameters { .. })
        ));
    }

    #[test]
    fn ditrune_to_bigrams_rejects_wrong_length() {
        assert!(matches!(
            ditrune_to_bigrams("12"),
            Err(Error::InvalidParameters { .. })
        ));
    }
}
