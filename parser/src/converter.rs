//! FILENAME: parser/src/converter.rs
//! PURPOSE: Shunting-yard conversion of an infix token stream into postfix.
//! CONTEXT: This is the second stage of the pipeline. It consumes the tokens
//! produced by `tokenize` and emits them in postfix order using an operator
//! stack and an output queue that live only for one conversion.
//!
//! RULES (per input token):
//!   number     --> output
//!   identifier --> stack (emitted by the `)` closing its argument list)
//!   "("        --> stack
//!   ")"        --> pop to output until "(", drop it, then emit a function
//!                  name if one is now on top
//!   ","        --> pop to output until "(" (which stays)
//!   operator   --> pop while top binds tighter, or equally tight and
//!                  left-associative; then push
//!   un+ / un-  --> stack

use crate::error::{ParseError, ParseResult};
use crate::lexer::{tokenize_with, UnaryMode};
use crate::operator::{
    operator_info, Associativity, Operator, FUNCTION_PRECEDENCE, PAREN_PRECEDENCE,
};
use crate::token::Token;
use log::{debug, trace, warn};

/// Holds the pending input and the per-conversion stack and output.
pub struct Converter {
    input: std::vec::IntoIter<Token>,
    operator_stack: Vec<Token>,
    output: Vec<Token>,
}

impl Converter {
    pub fn new(tokens: Vec<Token>) -> Self {
        Converter {
            input: tokens.into_iter(),
            operator_stack: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Runs the conversion and returns the postfix tokens.
    /// Nothing is returned on failure; a malformed stream never yields
    /// partial output.
    pub fn convert(mut self) -> ParseResult<Vec<Token>> {
        while let Some(token) = self.input.next() {
            trace!(
                "token {} | stack [{}] | output [{}]",
                token,
                join_tokens(&self.operator_stack),
                join_tokens(&self.output)
            );

            match token {
                Token::LParen => self.operator_stack.push(token),
                Token::RParen => self.close_paren()?,
                Token::Comma => self.separate_argument()?,
                Token::Operator(_) | Token::Unary(_) => self.push_operator(token),
                Token::Number(_) => self.output.push(token),
                Token::Identifier(_) => self.operator_stack.push(token),
                Token::EOF | Token::Illegal(_) => {
                    return Err(ParseError::UnknownToken(unknown_token_text(&token)))
                }
            }
        }

        while let Some(top) = self.operator_stack.pop() {
            if top == Token::LParen {
                return Err(ParseError::UnbalancedParentheses(
                    "'(' is never closed".to_string(),
                ));
            }
            self.output.push(top);
        }

        Ok(self.output)
    }

    fn close_paren(&mut self) -> ParseResult<()> {
        loop {
            match self.operator_stack.pop() {
                Some(Token::LParen) => break,
                Some(top) => self.output.push(top),
                None => {
                    return Err(ParseError::UnbalancedParentheses(
                        "')' has no matching '('".to_string(),
                    ))
                }
            }
        }

        if matches!(self.operator_stack.last(), Some(Token::Identifier(_))) {
            if let Some(function) = self.operator_stack.pop() {
                self.output.push(function);
            }
        }

        Ok(())
    }

    /// Flushes the current argument. The `(` of the enclosing call stays on
    /// the stack for the closing `)`.
    fn separate_argument(&mut self) -> ParseResult<()> {
        loop {
            match self.operator_stack.last() {
                Some(Token::LParen) => return Ok(()),
                Some(_) => {
                    if let Some(top) = self.operator_stack.pop() {
                        self.output.push(top);
                    }
                }
                None => {
                    return Err(ParseError::UnbalancedParentheses(
                        "',' outside of parentheses".to_string(),
                    ))
                }
            }
        }
    }

    /// A prefix operator has no left operand yet, so pushing it never pops:
    /// `2 ^ -3` must keep `^` waiting for its right-hand side.
    fn push_operator(&mut self, token: Token) {
        if let Token::Unary(_) = token {
            self.operator_stack.push(token);
            return;
        }

        let incoming = stack_precedence(&token);

        while let Some(top) = self.operator_stack.last() {
            let top_precedence = stack_precedence(top);
            let pops = top_precedence > incoming
                || (top_precedence == incoming
                    && stack_associativity(top) == Some(Associativity::Left));
            if !pops {
                break;
            }
            if let Some(top) = self.operator_stack.pop() {
                self.output.push(top);
            }
        }

        self.operator_stack.push(token);
    }
}

/// Precedence of anything that can sit on the operator stack.
fn stack_precedence(token: &Token) -> u8 {
    match token {
        Token::Operator(op) => operator_info(Operator::Binary(*op)).precedence,
        Token::Unary(op) => operator_info(Operator::Unary(*op)).precedence,
        Token::Identifier(_) => FUNCTION_PRECEDENCE,
        _ => PAREN_PRECEDENCE,
    }
}

/// Function names and parentheses have no associativity.
fn stack_associativity(token: &Token) -> Option<Associativity> {
    match token {
        Token::Operator(op) => Some(operator_info(Operator::Binary(*op)).associativity),
        Token::Unary(op) => Some(operator_info(Operator::Unary(*op)).associativity),
        _ => None,
    }
}

fn unknown_token_text(token: &Token) -> String {
    match token {
        Token::Illegal(fragment) => fragment.clone(),
        other => other.to_string(),
    }
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts an infix expression to space-separated postfix, treating `+`/`-`
/// in operand position as unary.
pub fn to_postfix(input: &str) -> ParseResult<String> {
    to_postfix_with(input, UnaryMode::Disambiguate)
}

/// Converts an infix expression to space-separated postfix.
pub fn to_postfix_with(input: &str, mode: UnaryMode) -> ParseResult<String> {
    let tokens = tokenize_with(input, mode);

    match Converter::new(tokens).convert() {
        Ok(postfix) => {
            let result = join_tokens(&postfix);
            debug!("converted '{}' to '{}'", input, result);
            Ok(result)
        }
        Err(e) => {
            warn!("failed to convert '{}': {}", input, e);
            Err(e)
        }
    }
}
