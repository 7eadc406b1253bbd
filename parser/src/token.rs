//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are produced by the lexer, rewritten by the unary pass in
//! `tokenize`, and consumed by the shunting-yard converter.

use crate::ast::{BinaryOperator, UnaryOperator};

/// Tokens recognized by the expression lexer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    // Literals
    /// Digit text kept verbatim, so `007` converts to `007`.
    Number(String),
    /// Function name. Any identifier is accepted; arity is not checked here.
    Identifier(String),

    // Operators
    Operator(BinaryOperator),
    /// Produced only by the unary pass, never by the lexer itself.
    Unary(UnaryOperator),

    // Delimiters
    LParen,
    RParen,
    Comma,

    // Special
    EOF,
    /// A fragment that is neither a number nor an identifier, e.g. `1 @ 2`.
    Illegal(String),
}

impl Token {
    /// True for binary and unary operators.
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_) | Token::Unary(_))
    }

    /// Classifies a trimmed, non-delimiter fragment of the input.
    pub(crate) fn from_fragment(fragment: &str) -> Token {
        if is_number(fragment) {
            Token::Number(fragment.to_string())
        } else if is_identifier(fragment) {
            Token::Identifier(fragment.to_string())
        } else {
            Token::Illegal(fragment.to_string())
        }
    }
}

/// `^\d+$`
fn is_number(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// `^[_a-zA-Z][_a-zA-Z0-9]*$`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(digits) => write!(f, "{}", digits),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Unary(op) => write!(f, "{}", op.postfix_symbol()),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::EOF => write!(f, "EOF"),
            Token::Illegal(s) => write!(f, "ILLEGAL({})", s),
        }
    }
}
