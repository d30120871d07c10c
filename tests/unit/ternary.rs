//! End-to-end coverage of the Ternary Arithmetic Core's public API.

#![allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]

use ditrune_cores::error::Error;
use ditrune_cores::ternary::{
    digit_positions, format_ternary, from_balanced, from_ternary, split_digits, to_balanced,
    to_ternary,
};

#[test]
fn scenario_s3_codec_examples() {
    assert_eq!(to_ternary(42), "1120");
    assert_eq!(from_ternary("1120").unwrap(), 42);
    assert_eq!(to_balanced(13), "111");
    assert_eq!(from_balanced("1T1").unwrap(), 7);
}

#[test]
fn boundary_zero_maps_to_single_digit() {
    assert_eq!(to_ternary(0), "0");
    assert_eq!(to_balanced(0), "0");
}

#[test]
fn round_trip_holds_across_a_wide_integer_range() {
    for n in -2000i64..2000 {
        assert_eq!(from_ternary(&to_ternary(n)).unwrap(), n);
        assert_eq!(from_balanced(&to_balanced(n)).unwrap(), n);
    }
}

#[test]
fn split_digits_feeds_digit_positions_consistently() {
    let digits = split_digits("1120").unwrap();
    let positions = digit_positions(42, 0).unwrap();
    assert_eq!(digits.len(), positions.len());
    for (digit, (_, position_digit)) in digits.iter().zip(positions.iter()) {
        assert_eq!(digit, position_digit);
    }
}

#[test]
fn format_ternary_composes_padding_then_grouping() {
    let formatted = format_ternary("1120", 9, 3, "-").unwrap();
    assert_eq!(formatted, "000-001-120");
}

#[test]
fn malformed_input_is_rejected_with_the_documented_error_kinds() {
    assert!(matches!(from_ternary(""), Err(Error::EmptyInput { .. })));
    assert!(matches!(
        from_ternary("1-2"),
        Err(Error::BadSignPosition { .. })
    ));
    assert!(matches!(
        from_ternary("103"),
        Err(Error::InvalidDigit { .. })
    ));
}
