//! Coverage of the crate-wide error type as it surfaces from real
//! operations across cores, not just its `Display` formatting.

#![allow(clippy::unwrap_used, reason = "test code uses unwrap for conciseness")]

use ditrune_cores::error::Error;
use ditrune_cores::figurate::{generate, GenerationParams};
use ditrune_cores::kamea::KameaGrid;
use ditrune_cores::ternary::from_ternary;
use ditrune_cores::transition::{apply, TransitionMap};

#[test]
fn ternary_errors_report_the_offending_position() {
    let err = from_ternary("12x").unwrap_err();
    match err {
        Error::InvalidDigit { position, found, .. } => {
            assert_eq!(position, 2);
            assert_eq!(found, 'x');
        }
        other => panic!("expected InvalidDigit, got {other:?}"),
    }
}

#[test]
fn transition_map_validation_reports_every_missing_pair() {
    let err = TransitionMap::from_entries(&[((0, 0), 0)]).unwrap_err();
    match err {
        Error::IncompleteMap { missing } => assert_eq!(missing.len(), 8),
        other => panic!("expected IncompleteMap, got {other:?}"),
    }
}

#[test]
fn negative_transition_operand_is_rejected_before_any_digit_parsing() {
    let map = TransitionMap::default_map();
    assert!(matches!(
        apply("-1", "not-ternary-either", &map),
        Err(Error::NegativeInput { .. })
    ));
}

#[test]
fn figurate_validation_errors_carry_a_human_readable_detail() {
    let params = GenerationParams { sides: 5, index: 1, centered: false, star: true };
    // Valid: star requires sides >= 5 and this satisfies it.
    assert!(generate(params).is_ok());

    let invalid = GenerationParams { sides: 4, index: 1, centered: false, star: true };
    let err = generate(invalid).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters { .. }));
    assert!(format!("{err}").contains("star"));
}

#[test]
fn kamea_grid_with_wrong_dimensions_is_an_integrity_error_not_a_panic() {
    let decimal = vec![vec![0u16; 10]; 10];
    let ditrune = vec![vec!["000000".to_string(); 10]; 10];
    assert!(matches!(
        KameaGrid::from_matrices(decimal, ditrune),
        Err(Error::IntegrityError { .. })
    ));
}

#[test]
fn error_implements_std_error_and_exposes_io_source() {
    use std::error::Error as _;
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "grid file missing");
    let wrapped = Error::io("loading Kamea grid", io_err);
    assert!(wrapped.source().is_some());
    assert!(format!("{wrapped}").contains("loading Kamea grid"));
}
