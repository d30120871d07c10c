//! Ternary Arithmetic Core (component A).
//!
//! Exact, total conversions between decimal integers and the two ternary
//! encodings used throughout the rest of this crate: standard ternary
//! (digits `0`, `1`, `2`, signed with a leading `-`) and balanced ternary
//! (digits `T`, `0`, `1`, unsigned).

mod codec;

pub use codec::{
    balanced_to_standard, digit_positions, format_ternary, from_balanced, from_ternary,
    split_digits, to_balanced, to_balanced_padded, to_ternary, to_ternary_padded,
};
