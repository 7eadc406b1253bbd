//! FILENAME: parser/src/operator.rs
//! PURPOSE: Precedence and associativity of every operator.
//! CONTEXT: The single lookup table shared by the converter (stack popping
//! decisions) and the AST readable renderer (parenthesization).
//!
//! | operator      | precedence | associativity |
//! |---------------|------------|---------------|
//! | un+ un-       | 15         | right         |
//! | ^             | 20         | right         |
//! | * /           | 10         | left          |
//! | + -           | 5          | left          |
//! | function name | 100        | -             |
//! | ( )           | 0          | -             |

use crate::ast::{BinaryOperator, UnaryOperator};

/// Function names outrank every operator. A pending call is protected by
/// the `(` pushed above it and leaves the stack only through its `)`.
pub const FUNCTION_PRECEDENCE: u8 = 100;

/// Parentheses sit at the bottom so no operator comparison pops them.
pub const PAREN_PRECEDENCE: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub precedence: u8,
    pub associativity: Associativity,
}

/// Looks up precedence and associativity for `op`.
///
/// Unary operators sit between `*`/`/` and `^`, so `-2^2` is `-(2^2)` while
/// `-2*3` is `(-2)*3`. They are right-associative so a pending unary
/// operator is never popped by one of equal precedence.
pub fn operator_info(op: Operator) -> OperatorInfo {
    let (precedence, associativity) = match op {
        Operator::Binary(BinaryOperator::Add | BinaryOperator::Subtract) => (5, Associativity::Left),
        Operator::Binary(BinaryOperator::Multiply | BinaryOperator::Divide) => {
            (10, Associativity::Left)
        }
        Operator::Unary(UnaryOperator::Plus | UnaryOperator::Minus) => (15, Associativity::Right),
        Operator::Binary(BinaryOperator::Power) => (20, Associativity::Right),
    };

    OperatorInfo {
        precedence,
        associativity,
    }
}

impl BinaryOperator {
    pub fn precedence(self) -> u8 {
        operator_info(Operator::Binary(self)).precedence
    }

    pub fn associativity(self) -> Associativity {
        operator_info(Operator::Binary(self)).associativity
    }
}

impl UnaryOperator {
    pub fn precedence(self) -> u8 {
        operator_info(Operator::Unary(self)).precedence
    }

    pub fn associativity(self) -> Associativity {
        operator_info(Operator::Unary(self)).associativity
    }
}
