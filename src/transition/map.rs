//! Transition maps: the total, validated 3x3 digit-pair tables that define
//! the binary transition operator.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Applies the Conrune involution to a single ternary digit: `0 -> 0`,
/// `1 -> 2`, `2 -> 1`, fixed and not configurable.
#[must_use]
pub const fn conrune_digit(digit: u8) -> u8 {
    match digit {
        1 => 2,
        2 => 1,
        _ => digit,
    }
}

/// A total function from ternary digit pairs to a ternary digit, validated
/// to cover all nine pairs in `{0,1,2}^2` at construction time.
///
/// Once built, `get` never fails: totality is a type-level guarantee rather
/// than a runtime check on every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionMap {
    table: [[u8; 3]; 3],
}

impl TransitionMap {
    /// The default Taoist transition map from `spec.md` §4.2.
    #[must_use]
    pub const fn default_map() -> Self {
        Self {
            table: [[0, 2, 1], [2, 1, 0], [1, 0, 2]],
        }
    }

    /// Looks up the result digit for `(a, b)`. Both `a` and `b` must be in
    /// `0..=2`; out-of-range digits saturate to the `2` row/column rather
    /// than panicking, since this is only reached by callers who already
    /// validated their ternary strings.
    #[must_use]
    pub const fn get(&self, a: u8, b: u8) -> u8 {
        let row = if a > 2 { 2 } else { a };
        let col = if b > 2 { 2 } else { b };
        #[allow(
            clippy::indexing_slicing,
            reason = "row, col are clamped to 0..=2 just above, table is a fixed [[u8; 3]; 3]"
        )]
        {
            self.table[row as usize][col as usize]
        }
    }

    /// Builds a transition map from an explicit list of `((a, b), z)`
    /// entries, validating totality, range, and absence of duplicates.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if any digit is outside
    /// `0..=2`, [`Error::IntegrityError`] if a pair is repeated, or
    /// [`Error::IncompleteMap`] if fewer than all nine pairs are given.
    pub fn from_entries(entries: &[((u8, u8), u8)]) -> Result<Self> {
        let mut seen: HashMap<(u8, u8), u8> = HashMap::with_capacity(9);
        for &((a, b), z) in entries {
            if a > 2 || b > 2 || z > 2 {
                return Err(Error::invalid_parameters(format!(
                    "transition entry ({a}, {b}) -> {z} uses a digit outside 0..=2"
                )));
            }
            if seen.insert((a, b), z).is_some() {
                return Err(Error::integrity(format!(
                    "transition map has a duplicate entry for pair ({a}, {b})"
                )));
            }
        }

        let mut missing = Vec::new();
        for a in 0..3u8 {
            for b in 0..3u8 {
                if !seen.contains_key(&(a, b)) {
                    missing.push((a, b));
                }
            }
        }
        if !missing.is_empty() {
            return Err(Error::IncompleteMap { missing });
        }

        let mut table = [[0u8; 3]; 3];
        for a in 0..3usize {
            for b in 0..3usize {
                #[allow(clippy::cast_possible_truncation, reason = "a, b are < 3")]
                let key = (a as u8, b as u8);
                #[allow(
                    clippy::indexing_slicing,
                    reason = "a, b are < 3, and table is a fixed [[u8; 3]; 3]"
                )]
                {
                    table[a][b] = seen.get(&key).copied().unwrap_or(0);
                }
            }
        }
        Ok(Self { table })
    }

    /// Parses a rule string of the form
    /// `"00:0,01:2,02:1,10:2,11:1,12:0,20:1,21:0,22:2"`.
    ///
    /// Whitespace around entries is ignored. All nine pairs must appear
    /// exactly once.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] if an entry does not match the
    /// `xy:z` grammar, and the same errors as [`Self::from_entries`]
    /// otherwise.
    pub fn from_rule_string(rule: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for raw_entry in rule.split(',') {
            let entry = raw_entry.trim();
            let bytes = entry.as_bytes();
            let malformed = || {
                Error::invalid_parameters(format!(
                    "invalid rule entry {entry:?}, expected format 'xy:z' with x,y,z in 0..=2"
                ))
            };
            let &[x_byte, y_byte, colon, z_byte] = bytes else {
                return Err(malformed());
            };
            if colon != b':' {
                return Err(malformed());
            }
            let parse_digit = |c: u8| -> Result<u8> {
                if c.is_ascii_digit() {
                    Ok(c - b'0')
                } else {
                    Err(malformed())
                }
            };
            let a = parse_digit(x_byte)?;
            let b = parse_digit(y_byte)?;
            let z = parse_digit(z_byte)?;
            entries.push(((a, b), z));
        }
        Self::from_entries(&entries)
    }
}

impl Default for TransitionMap {
    fn default() -> Self {
        Self::default_map()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
mod tests {
    use super::*;

    #[test]
    fn default_map_matches_table() {
        let map = TransitionMap::default_map();
        assert_eq!(map.get(0, 0), 0);
        assert_eq!(map.get(0, 1), 2);
        assert_eq!(map.get(1, 2), 0);
        assert_eq!(map.get(2, 2), 2);
    }

    #[test]
    fn conrune_is_involution() {
        for d in 0..3u8 {
            assert_eq!(conrune_digit(conrune_digit(d)), d);
        }
    }

    #[test]
    fn conrune_fixes_zero_swaps_one_two() {
        assert_eq!(conrune_digit(0), 0);
        assert_eq!(conrune_digit(1), 2);
        assert_eq!(conrune_digit(2), 1);
    }

    #[test]
    fn from_rule_string_matches_default() {
        let rule = "00:0,01:2,02:1,10:2,11:1,12:0,20:1,21:0,22:2";
        let map = TransitionMap::from_rule_string(rule).unwrap();
        assert_eq!(map, TransitionMap::default_map());
    }

    #[test]
    fn from_rule_string_rejects_incomplete() {
        let rule = "00:0,01:2,02:1";
        assert!(matches!(
            TransitionMap::from_rule_string(rule),
            Err(Error::IncompleteMap { .. })
        ));
    }

    #[test]
    fn from_rule_string_rejects_duplicates() {
        let rule = "00:0,00:1,01:2,02:1,10:2,11:1,12:0,20:1,21:0,22:2";
        assert!(matches!(
            TransitionMap::from_rule_string(rule),
            Err(Error::IntegrityError { .. })
        ));
    }

    #[test]
    fn from_rule_string_rejects_malformed_entry() {
        assert!(matches!(
            TransitionMap::from_rule_string("0x:0"),
            Err(Error::InvalidParameters { .. })
        ));
    }

    #[test]
    fn from_entries_rejects_out_of_range_digit() {
        let entries = [((0u8, 0u8), 3u8)];
        assert!(matches!(
            TransitionMap::from_entries(&entries),
            Err(Error::InvalidParameters { .. })
        ));
    }
}
