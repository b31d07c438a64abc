//! Centralised error hierarchy for the **Monkey interpreter**.
//!
//! The three tiers are kept apart:
//!
//! * lexical problems are not errors at all, they surface as `ILLEGAL` tokens;
//! * [`ParseError`]s are *accumulated* by the parser, which keeps going;
//! * [`EvalError`]s are fatal and abort evaluation immediately.
//!
//! [`MonkeyError`] wraps the last two (plus REPL I/O) for callers that just want a
//! single `Result<T>`. The module **does not** print diagnostics itself.

use std::io;
use thiserror::Error;

use log::debug;

use crate::ast::{InfixOperator, PrefixOperator};
use crate::object::ObjectType;
use crate::token::TokenType;

/// A syntactic defect recorded by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedToken {
        expected: TokenType,
        actual: TokenType,
    },

    /// No expression can start with this token.
    #[error("no prefix parser function from {0} found")]
    NoPrefixParser(TokenType),

    /// A digit run that does not fit a 64‑bit signed integer.
    #[error("could not parse {0} as integer")]
    InvalidInteger(String),
}

impl ParseError {
    /// Helper constructor for a failed `expect_peek`.
    pub fn unexpected(expected: TokenType, actual: TokenType) -> Self {
        debug!(
            "Creating parse error: expected={}, actual={}",
            expected, actual
        );

        ParseError::UnexpectedToken { expected, actual }
    }
}

/// Fatal runtime failure raised by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvalError {
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    /// Infix operands of different runtime types.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ObjectType,
        operator: InfixOperator,
        right: ObjectType,
    },

    #[error("unknown operator: {operator}{right}")]
    UnknownPrefixOperator {
        operator: PrefixOperator,
        right: ObjectType,
    },

    /// Operands share a type that does not support the operator.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: ObjectType,
        operator: InfixOperator,
        right: ObjectType,
    },

    #[error("not a function: {found}")]
    NotAFunction { found: ObjectType },

    #[error("wrong number of arguments: expected {expected}, got {found}")]
    WrongArgumentCount { expected: usize, found: usize },

    #[error("division by zero")]
    DivisionByZero,
}

/// Canonical error type for whole‑pipeline callers (CLI, embedding).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MonkeyError {
    /// One or more syntax errors; the program was not evaluated.
    #[error("{} parse error(s): {}", .0.len(), join(.0))]
    Parse(Vec<ParseError>),

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Wrapper around `std::io::Error` (transparent). Enables `?` on the
    /// REPL's reads and writes.
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn join(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, MonkeyError>;
