//! FILENAME: parser/src/error.rs

use thiserror::Error;

/// Why an expression was rejected. Errors carry the offending token or a
/// description, never a position.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("Unbalanced parentheses: {0}")]
    UnbalancedParentheses(String),

    #[error("Unknown token: '{0}'")]
    UnknownToken(String),

    #[error("Function {name} expects {expected} argument(s), found {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
}

pub type ParseResult<T> = Result<T, ParseError>;
