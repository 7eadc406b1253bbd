//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the infix to postfix (RPN) converter.
//! CONTEXT: This crate exposes the lexer, the shunting-yard converter and the
//! AST whose renderers serve as the converter's test oracle.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Unary pass --> Converter --> Postfix
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, ^ (power, right-associative)
//! - Unary plus and minus: -5, 3 * -7, ---5
//! - Function calls with any number of arguments: sin(3), iff(1, 2, 3)
//! - Parentheses for grouping

pub mod ast;
pub mod converter;
pub mod error;
pub mod functions;
pub mod lexer;
pub mod operator;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{BinaryOperator, Expression, UnaryOperator};
pub use converter::{to_postfix, to_postfix_with, Converter};
pub use error::{ParseError, ParseResult};
pub use functions::BuiltinFunction;
pub use lexer::{tokenize, tokenize_with, Lexer, UnaryMode};
pub use operator::{operator_info, Associativity, Operator, OperatorInfo};
pub use token::Token;
