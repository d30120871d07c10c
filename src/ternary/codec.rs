//! Exact bijections between signed integers, standard ternary strings, and
//! balanced ternary strings.
//!
//! All conversions are total within their documented domain: there is no
//! loss of information at any step, and every operation has a defined
//! inverse (see the crate-level round-trip tests in `tests/unit/ternary.rs`).

use crate::error::{Error, Result};

/// Converts a digit character (`'0'`, `'1'`, or `'2'`) to its numeric value.
fn digit_value(c: char, function: &'static str, position: usize) -> Result<u8> {
    match c {
        '0' => Ok(0),
        '1' => Ok(1),
        '2' => Ok(2),
        other => Err(Error::invalid_digit(function, position, other)),
    }
}

/// Validates that `s` contains only ternary digits, with an optional leading
/// `-` at position 0. Returns the byte offset where the digit body starts.
fn validate_standard(s: &str, function: &'static str) -> Result<usize> {
    if s.is_empty() {
        return Err(Error::empty_input(function));
    }
    let mut body_start = 0;
    for (i, c) in s.char_indices() {
        if c == '-' {
            if i != 0 {
                return Err(Error::bad_sign_position(function, i));
            }
            body_start = 1;
            continue;
        }
        digit_value(c, function, i)?;
    }
    if s.len() == body_start {
        return Err(Error::empty_input(function));
    }
    Ok(body_start)
}

/// Converts a decimal integer to its standard ternary representation
/// (digits `0`, `1`, `2`), most-significant digit first.
///
/// Zero maps to `"0"`. Negative numbers carry a leading `-`.
#[must_use]
pub fn to_ternary(n: i64) -> String {
    to_ternary_padded(n, 0)
}

/// Converts a decimal integer to standard ternary, left-padding the digit
/// body with zeros to `pad_length` (the sign, if any, is not counted
/// against the pad length).
#[must_use]
pub fn to_ternary_padded(n: i64, pad_length: usize) -> String {
    let negative = n < 0;
    let magnitude = n.unsigned_abs();
    let mut digits = magnitude_to_ternary_digits(magnitude);
    while digits.len() < pad_length {
        digits.insert(0, 0);
    }
    let body: String = digits.iter().map(|d| char_for_digit(*d)).collect();
    if negative { format!("-{body}") } else { body }
}

fn magnitude_to_ternary_digits(mut magnitude: u64) -> Vec<u8> {
    if magnitude == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while magnitude > 0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "magnitude % 3 always fits in u8"
        )]
        digits.push((magnitude % 3) as u8);
        magnitude /= 3;
    }
    digits.reverse();
    digits
}

const fn char_for_digit(d: u8) -> char {
    match d {
        1 => '1',
        2 => '2',
        _ => '0',
    }
}

/// Parses a standard ternary string back to a decimal integer.
///
/// # Errors
/// Returns [`Error::EmptyInput`] for an empty string, [`Error::InvalidDigit`]
/// for characters outside `{0,1,2,-}`, and [`Error::BadSignPosition`] if `-`
/// appears anywhere but position 0.
pub fn from_ternary(s: &str) -> Result<i64> {
    let body_start = validate_standard(s, "from_ternary")?;
    let negative = body_start == 1;
    let mut value: i64 = 0;
    #[allow(
        clippy::indexing_slicing,
        reason = "body_start is 0 or 1, returned by validate_standard as a valid char boundary <= s.len()"
    )]
    let body = &s[body_start..];
    for c in body.chars() {
        let digit = digit_value(c, "from_ternary", 0)?;
        value = value * 3 + i64::from(digit);
    }
    Ok(if negative { -value } else { value })
}

/// Converts a decimal integer to balanced ternary (digits `T`, `0`, `1`,
/// where `T` denotes −1). Handles negative input directly; no sign
/// character is ever emitted.
#[must_use]
pub fn to_balanced(n: i64) -> String {
    to_balanced_padded(n, 0)
}

/// Converts a decimal integer to balanced ternary, left-padding with zeros
/// to `pad_length`.
#[must_use]
pub fn to_balanced_padded(n: i64, pad_length: usize) -> String {
    if n == 0 {
        let mut s = String::new();
        for _ in 0..pad_length.max(1) {
            s.push('0');
        }
        return s;
    }
    let mut digits = Vec::new();
    let mut num = n;
    while num != 0 {
        let mut remainder = num.rem_euclid(3);
        let mut quotient = num.div_euclid(3);
        if remainder == 2 {
            remainder = -1;
            quotient += 1;
        }
        digits.push(match remainder {
            -1 => 'T',
            0 => '0',
            _ => '1',
        });
        num = quotient;
    }
    while digits.len() < pad_length {
        digits.push('0');
    }
    digits.reverse();
    digits.into_iter().collect()
}

/// Parses a balanced ternary string (`T`, `0`, `1`) to a decimal integer.
///
/// # Errors
/// Returns [`Error::EmptyInput`] for an empty string or [`Error::InvalidDigit`]
/// for characters outside `{T,0,1}`.
pub fn from_balanced(s: &str) -> Result<i64> {
    if s.is_empty() {
        return Err(Error::empty_input("from_balanced"));
    }
    let mut value: i64 = 0;
    for (i, c) in s.char_indices() {
        let weight = match c {
            'T' => -1,
            '0' => 0,
            '1' => 1,
            other => return Err(Error::invalid_digit("from_balanced", i, other)),
        };
        value = value * 3 + weight;
    }
    Ok(value)
}

/// Converts balanced ternary to standard ternary by substituting `T` with
/// `2`; other digits pass through unchanged.
///
/// # Errors
/// Returns [`Error::EmptyInput`] for an empty string or [`Error::InvalidDigit`]
/// for characters outside `{T,0,1}`.
pub fn balanced_to_standard(s: &str) -> Result<String> {
    if s.is_empty() {
        return Err(Error::empty_input("balanced_to_standard"));
    }
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        match c {
            'T' => out.push('2'),
            '0' => out.push('0'),
            '1' => out.push('1'),
            other => return Err(Error::invalid_digit("balanced_to_standard", i, other)),
        }
    }
    Ok(out)
}

/// Applies zero-padding and/or right-to-left digit grouping to an existing
/// standard ternary string.
///
/// Padding is applied before grouping; grouping never changes the numeric
/// value, only its textual presentation. A leading `-` sign is preserved
/// outside of both operations.
///
/// # Errors
/// Returns [`Error::EmptyInput`]/[`Error::InvalidDigit`]/[`Error::BadSignPosition`]
/// under the same conditions as [`from_ternary`].
pub fn format_ternary(
    s: &str,
    pad_length: usize,
    group_size: usize,
    group_separator: &str,
) -> Result<String> {
    let body_start = validate_standard(s, "format_ternary")?;
    let negative = body_start == 1;
    #[allow(
        clippy::indexing_slicing,
        reason = "body_start is 0 or 1, returned by validate_standard as a valid char boundary <= s.len()"
    )]
    let mut body = s[body_start..].to_string();

    while body.len() < pad_length {
        body.insert(0, '0');
    }

    if group_size > 0 {
        let bytes = body.as_bytes();
        let mut groups = Vec::new();
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(group_size);
            #[allow(
                clippy::indexing_slicing,
                reason = "start <= end <= body.len(), body is all-ASCII ternary digits so every byte offset is a char boundary"
            )]
            groups.push(body[start..end].to_string());
            end = start;
        }
        groups.reverse();
        body = groups.join(group_separator);
    }

    Ok(if negative { format!("-{body}") } else { body })
}

/// Splits a (non-negative) standard ternary string into its individual
/// digits, most-significant first. An optional leading `-` is accepted and
/// discarded; callers that care about sign should check for it separately.
///
/// # Errors
/// Returns [`Error::EmptyInput`] or [`Error::InvalidDigit`].
pub fn split_digits(s: &str) -> Result<Vec<u8>> {
    let body_start = validate_standard(s, "split_digits")?;
    #[allow(
        clippy::indexing_slicing,
        reason = "body_start is 0 or 1, returned by validate_standard as a valid char boundary <= s.len()"
    )]
    let body = &s[body_start..];
    body.char_indices()
        .map(|(i, c)| digit_value(c, "split_digits", i))
        .collect()
}

/// Returns `(power_of_three, digit)` pairs for the standard-ternary
/// representation of `n`, most-significant first, padded on the high side
/// to at least `min_length` positions.
///
/// # Errors
/// Returns [`Error::NegativeInput`] if `n` is negative; digit-position
/// decomposition is only defined for non-negative magnitudes.
pub fn digit_positions(n: i64, min_length: usize) -> Result<Vec<(u32, u8)>> {
    if n < 0 {
        return Err(Error::negative_input("digit_positions"));
    }
    #[allow(
        clippy::cast_sign_loss,
        reason = "n is checked non-negative above"
    )]
    let mut digits = magnitude_to_ternary_digits(n as u64);
    while digits.len() < min_length {
        digits.insert(0, 0);
    }
    let len = digits.len();
    Ok(digits
        .into_iter()
        .enumerate()
        .map(|(i, d)| (u32::try_from(len - 1 - i).unwrap_or(u32::MAX), d))
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]
mod tests {
    use super::*;

    #[test]
    fn to_ternary_zero() {
        assert_eq!(to_ternary(0), "0");
    }

    #[test]
    fn to_ternary_42_is_1120() {
        assert_eq!(to_ternary(42), "1120");
        assert_eq!(from_ternary("1120").unwrap(), 42);
    }

    #[test]
    fn to_ternary_negative() {
        assert_eq!(to_ternary(-5), "-12");
        assert_eq!(from_ternary("-12").unwrap(), -5);
    }

    #[test]
    fn to_balanced_zero() {
        assert_eq!(to_balanced(0), "0");
    }

    #[test]
    fn to_balanced_13_is_111() {
        assert_eq!(to_balanced(13), "111");
        assert_eq!(from_balanced("111").unwrap(), 13);
    }

    #[test]
    fn from_balanced_1t1_is_7() {
        assert_eq!(from_balanced("1T1").unwrap(), 7);
    }

    #[test]
    fn to_balanced_negative() {
        let s = to_balanced(-5);
        assert_eq!(from_balanced(&s).unwrap(), -5);
    }

    #[test]
    fn balanced_to_standard_examples() {
        assert_eq!(balanced_to_standard("1T1T").unwrap(), "1212");
        assert_eq!(balanced_to_standard("T11").unwrap(), "211");
    }

    #[test]
    fn format_ternary_padding() {
        assert_eq!(format_ternary("111", 6, 0, " ").unwrap(), "000111");
    }

    #[test]
    fn format_ternary_grouping() {
        assert_eq!(format_ternary("111222", 0, 3, " ").unwrap(), "111 222");
    }

    #[test]
    fn format_ternary_padding_and_grouping() {
        assert_eq!(format_ternary("12", 6, 3, " ").unwrap(), "000 012");
    }

    #[test]
    fn format_ternary_preserves_sign() {
        assert_eq!(format_ternary("-12", 4, 0, " ").unwrap(), "-0012");
    }

    #[test]
    fn from_ternary_rejects_empty() {
        assert!(matches!(from_ternary(""), Err(Error::EmptyInput { .. })));
    }

    #[test]
    fn from_ternary_rejects_invalid_digit() {
        assert!(matches!(
            from_ternary("102a"),
            Err(Error::InvalidDigit { .. })
        ));
    }

    #[test]
    fn from_ternary_rejects_misplaced_sign() {
        assert!(matches!(
            from_ternary("1-02"),
            Err(Error::BadSignPosition { .. })
        ));
    }

    #[test]
    fn split_digits_order() {
        assert_eq!(split_digits("102").unwrap(), vec![1, 0, 2]);
    }

    #[test]
    fn digit_positions_13() {
        let positions = digit_positions(13, 1).unwrap();
        assert_eq!(positions, vec![(2, 1), (1, 1), (0, 1)]);
    }

    #[test]
    fn digit_positions_min_length_pads() {
        let positions = digit_positions(1, 4).unwrap();
        assert_eq!(positions, vec![(3, 0), (2, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn digit_positions_rejects_negative() {
        assert!(matches!(
            digit_positions(-1, 0),
            Err(Error::NegativeInput { .. })
        ));
    }

    #[test]
    fn round_trip_standard_many_values() {
        for n in -200..200 {
            assert_eq!(from_ternary(&to_ternary(n)).unwrap(), n);
        }
    }

    #[test]
    fn round_trip_balanced_many_values() {
        for n in -200..200 {
            assert_eq!(from_balanced(&to_balanced(n)).unwrap(), n);
        }
    }
}
