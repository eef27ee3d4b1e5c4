//! Errors raised by function setup and evaluation
//!
//! The two enums follow the two lifecycle phases: a `ValidationError`
//! rejects the whole registration before any event flows, an `EvalError`
//! aborts only the single call that triggered it. Nothing is retried or
//! defaulted here; the host decides what a failure means for the event.

use crate::AttributeType;
use thiserror::Error;

/// Setup-time failure. Fatal to the registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid number of arguments passed to {function}, required {expected}, but found {found}")]
    InvalidArity {
        function: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("invalid parameter type found for argument {position} of {function}, required {expected} but found {found}")]
    InvalidArgumentType {
        function: &'static str,
        position: usize,
        expected: AttributeType,
        found: AttributeType,
    },

    #[error("no function named '{name}' is registered")]
    UnknownFunction { name: String },
}

/// Evaluation-time failure. Fatal to the single triggering call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("invalid input given to {function}, argument {position} cannot be null")]
    NullArgument {
        function: &'static str,
        position: usize,
    },

    #[error("argument {position} of {function} cannot be read as {expected}, found {found}")]
    TypeCoercion {
        function: &'static str,
        position: usize,
        expected: AttributeType,
        found: &'static str,
    },

    #[error("provided format '{pattern}' does not match with the timestamp '{value}': {reason}")]
    FormatMismatch {
        pattern: String,
        value: String,
        reason: String,
    },
}
