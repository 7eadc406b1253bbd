//! FILENAME: parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for arithmetic expressions.
//! CONTEXT: Trees are built bottom-up, either by hand or by the random
//! generator, and are immutable afterwards. Two renderers turn a tree back
//! into text: postfix (RPN) and minimally parenthesized infix. Feeding the
//! infix rendering through the converter must reproduce the postfix one.
//!
//! SUPPORTED EXPRESSIONS:
//! - Non-negative integer literals
//! - Unary operations: + and - (rendered as un+ / un- in postfix)
//! - Binary operations: +, -, *, /, ^
//! - Function calls with any number of arguments: POW(2, 3), IFF(1, 2, 3)

use crate::functions::BuiltinFunction;
use crate::error::{ParseError, ParseResult};

/// Priority of numbers and function calls. Higher than any operator, so
/// they are never wrapped in parentheses.
pub const ATOMIC_PRIORITY: u8 = u8::MAX;

/// A parsed arithmetic expression. Each node owns its children.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression {
    /// An integer literal.
    Number(u64),

    /// A unary operation: op operand (e.g., -5).
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    /// A binary operation: left op right (e.g., 5 + 3).
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },

    /// A function call like SIN(3) or IFF(1, 2, 3).
    FunctionCall { name: String, args: Vec<Expression> },
}

/// Binary operators, lowest precedence first.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Power,    // ^
}

/// Unary operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum UnaryOperator {
    Plus,  // +
    Minus, // -
}

impl UnaryOperator {
    /// Infix spelling: `+` or `-`.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
        }
    }

    /// Postfix spelling, distinct from the binary operators: `un+` or `un-`.
    pub fn postfix_symbol(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "un+",
            UnaryOperator::Minus => "un-",
        }
    }
}

impl Expression {
    pub fn number(value: u64) -> Self {
        Expression::Number(value)
    }

    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expression, op: BinaryOperator, right: Expression) -> Self {
        Expression::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            name: name.into(),
            args,
        }
    }

    /// Binding strength of this node when it appears inside another one.
    pub fn priority(&self) -> u8 {
        match self {
            Expression::Number(_) | Expression::FunctionCall { .. } => ATOMIC_PRIORITY,
            Expression::UnaryOp { op, .. } => op.precedence(),
            Expression::BinaryOp { op, .. } => op.precedence(),
        }
    }

    /// Number of levels in the tree; a lone literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Number(_) => 1,
            Expression::UnaryOp { operand, .. } => 1 + operand.depth(),
            Expression::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Expression::FunctionCall { args, .. } => {
                1 + args.iter().map(Expression::depth).max().unwrap_or(0)
            }
        }
    }

    /// Renders the tree in postfix order, tokens separated by single spaces.
    pub fn to_postfix_string(&self) -> String {
        let mut parts = Vec::new();
        self.collect_postfix(&mut parts);
        parts.join(" ")
    }

    fn collect_postfix(&self, parts: &mut Vec<String>) {
        match self {
            Expression::Number(n) => parts.push(n.to_string()),
            Expression::UnaryOp { op, operand } => {
                operand.collect_postfix(parts);
                parts.push(op.postfix_symbol().to_string());
            }
            Expression::BinaryOp { left, op, right } => {
                left.collect_postfix(parts);
                right.collect_postfix(parts);
                parts.push(op.to_string());
            }
            Expression::FunctionCall { name, args } => {
                for arg in args {
                    arg.collect_postfix(parts);
                }
                parts.push(name.clone());
            }
        }
    }

    /// Renders the tree as infix text with as few parentheses as the
    /// priority rule allows.
    pub fn to_infix_string(&self) -> String {
        self.to_readable(0)
    }

    /// Renders this node as infix text, parenthesized iff its priority does
    /// not exceed `outside_priority`.
    ///
    /// Children are rendered against this node's own priority. Equal
    /// priorities are always parenthesized, so `(1 - 2) - 3` and
    /// `1 - (2 - 3)` both keep their parentheses and associativity never
    /// has to be consulted.
    pub fn to_readable(&self, outside_priority: u8) -> String {
        let priority = self.priority();

        match self {
            Expression::Number(n) => n.to_string(),

            Expression::UnaryOp { op, operand } => parens_if(
                priority <= outside_priority,
                format!("{}{}", op.symbol(), operand.to_readable(priority)),
            ),

            Expression::BinaryOp { left, op, right } => parens_if(
                priority <= outside_priority,
                format!(
                    "{} {} {}",
                    left.to_readable(priority),
                    op,
                    right.to_readable(priority)
                ),
            ),

            Expression::FunctionCall { name, args } => {
                let args: Vec<String> = args.iter().map(|arg| arg.to_readable(0)).collect();
                format!("{}({})", name, args.join(", "))
            }
        }
    }

    /// Checks every call to a built-in function against its fixed arity.
    /// Calls to unknown names are accepted with any number of arguments.
    pub fn validate(&self) -> ParseResult<()> {
        match self {
            Expression::Number(_) => Ok(()),
            Expression::UnaryOp { operand, .. } => operand.validate(),
            Expression::BinaryOp { left, right, .. } => {
                left.validate()?;
                right.validate()
            }
            Expression::FunctionCall { name, args } => {
                if let Some(function) = BuiltinFunction::from_name(name) {
                    if function.arity() != args.len() {
                        return Err(ParseError::ArityMismatch {
                            name: name.clone(),
                            expected: function.arity(),
                            found: args.len(),
                        });
                    }
                }
                args.iter().try_for_each(Expression::validate)
            }
        }
    }
}

fn parens_if(cond: bool, s: String) -> String {
    if cond {
        format!("({})", s)
    } else {
        s
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
            BinaryOperator::Power => write!(f, "^"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_infix_string())
    }
}
