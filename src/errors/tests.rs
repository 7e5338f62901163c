//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            found: "@".to_string(),
        },
        10,
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_line() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        42,
    );

    assert_eq!(error.get_line(), 42);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_type_match_error() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            expected: "i32".to_string(),
            received: "'str".to_string(),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
}

#[test]
fn test_variable_not_declared_error() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_variable_already_declared_error() {
    let error = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string(),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            found: "@".to_string(),
        },
        1,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        1,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
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
fn test_too_many_arguments_error() {
    let error = Error::new(ErrorImpl::TooManyArguments { expected: 2 }, 1);

    assert_eq!(error.get_error_name(), "TooManyArguments");
}

#[test]
fn test_missing_arguments_error() {
    let error = Error::new(
        ErrorImpl::MissingArguments {
            expected: 3,
            received: 1,
        },
        1,
    );

    assert_eq!(error.get_error_name(), "MissingArguments");
}

#[test]
fn test_not_a_type_error() {
    let error = Error::new(ErrorImpl::NotAType, 7);

    assert_eq!(error.get_error_name(), "NotAType");
    assert_eq!(error.get_error().to_string(), "expression is not a type");
}

#[test]
fn test_unterminated_string_message() {
    let error = Error::new(ErrorImpl::UnterminatedString, 2);

    assert_eq!(error.get_error().to_string(), "unterminated string literal");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_coercion_message_contains_types() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            expected: "u32".to_string(),
            received: "f64".to_string(),
        },
        1,
    );

    let message = error.get_error().to_string();
    assert!(message.contains("u32"));
    assert!(message.contains("f64"));
}

#[test]
fn test_offending_text() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        },
        1,
    );

    assert_eq!(error.get_offending(), Some("foo"));

    let error = Error::new(ErrorImpl::NotAType, 1);

    assert_eq!(error.get_offending(), None);
}
