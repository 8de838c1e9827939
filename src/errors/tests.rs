//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '?' },
        Position(10, 3, Rc::new("test.py".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, 7, Rc::new("test.py".to_string()));
    let error = Error::new(ErrorImpl::UnterminatedString, pos.clone());

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1, 7);
}

#[test]
fn test_first_line_indent_error() {
    let error = Error::new(ErrorImpl::FirstLineIndent, Position::null());

    assert_eq!(error.get_error_name(), "FirstLineIndent");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("indented")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_dedent_mismatch_error() {
    let error = Error::new(
        ErrorImpl::DedentMismatch { width: 6 },
        Position(3, 6, Rc::new("test.py".to_string())),
    );

    assert_eq!(error.get_error_name(), "DedentMismatch");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("6")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_malformed_literal_error() {
    let error = Error::new(
        ErrorImpl::MalformedLiteral {
            literal: "10e".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "MalformedLiteral");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("10e")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_unrecognised_character_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '?' },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_invalid_input_error() {
    let error = Error::new(
        ErrorImpl::InvalidInput {
            reason: "stream did not contain valid UTF-8".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "InvalidInput");
}
