//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::deque::deque::DequeError;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::UnmatchedParen, "UnmatchedParen"),
        (
            ErrorImpl::MalformedExpression {
                message: "x".to_string(),
            },
            "MalformedExpression",
        ),
        (ErrorImpl::StackOverflow { capacity: 4 }, "StackOverflow"),
        (ErrorImpl::StackUnderflow, "StackUnderflow"),
        (ErrorImpl::DivisionByZero, "DivisionByZero"),
        (
            ErrorImpl::InputTooLong {
                length: 2000,
                limit: 1024,
            },
            "InputTooLong",
        ),
        (ErrorImpl::NestingTooDeep { limit: 2048 }, "NestingTooDeep"),
    ];

    for (kind, name) in cases {
        assert_eq!(Error::new(kind, Position(0)).get_error_name(), name);
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::DivisionByZero, Position(3));
    assert_eq!(error.to_string(), "division by zero at position 3");

    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "x".to_string(),
        },
        Position(0),
    );
    assert_eq!(error.to_string(), "unrecognised token: \"x\" at position 0");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MalformedExpression {
            message: "operator `+` is missing an operand".to_string(),
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "operator `+` is missing an operand"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_deque_error_conversion() {
    assert_eq!(
        ErrorImpl::from(DequeError::Overflow { capacity: 8 }),
        ErrorImpl::StackOverflow { capacity: 8 }
    );
    assert_eq!(ErrorImpl::from(DequeError::Underflow), ErrorImpl::StackUnderflow);
}
