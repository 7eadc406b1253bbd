//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Splits a raw expression string into Tokens.
//! CONTEXT: This is the first stage of the conversion pipeline. The lexer
//! cuts the input at the delimiter characters, keeping each delimiter as its
//! own token, and classifies the trimmed text between delimiters. Tokenizing
//! never fails: unrecognized fragments become `Token::Illegal` and are
//! rejected by the converter.
//!
//! DELIMITERS: + - * / ^ ( ) ,
//!
//! UNARY OPERATORS:
//! `+` and `-` are rewritten to `un+` / `un-` exactly where a new
//! sub-expression may start: at the beginning of the input, after `(`,
//! after `,`, and after any operator. After a number, identifier or `)`
//! they stay binary.

use crate::ast::{BinaryOperator, UnaryOperator};
use crate::token::Token;
use std::iter::Peekable;
use std::str::Chars;

/// Controls whether `tokenize_with` rewrites `+`/`-` into unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnaryMode {
    /// Rewrite `+`/`-` in operand position to `un+`/`un-`.
    #[default]
    Disambiguate,
    /// Every `+`/`-` is binary. `-5` converts to `5 -`.
    BinaryOnly,
}

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        match self.input.peek().copied() {
            None => Token::EOF,
            Some(ch) => match delimiter_token(ch) {
                Some(token) => {
                    self.input.next();
                    token
                }
                None => self.read_fragment(),
            },
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    /// Reads up to the next delimiter. Inner whitespace is kept, so `3 4`
    /// is one (illegal) fragment rather than two numbers.
    fn read_fragment(&mut self) -> Token {
        let mut fragment = String::new();

        while let Some(&ch) = self.input.peek() {
            if delimiter_token(ch).is_some() {
                break;
            }
            fragment.push(ch);
            self.input.next();
        }

        Token::from_fragment(fragment.trim_end())
    }
}

fn delimiter_token(ch: char) -> Option<Token> {
    let token = match ch {
        '+' => Token::Operator(BinaryOperator::Add),
        '-' => Token::Operator(BinaryOperator::Subtract),
        '*' => Token::Operator(BinaryOperator::Multiply),
        '/' => Token::Operator(BinaryOperator::Divide),
        '^' => Token::Operator(BinaryOperator::Power),
        '(' => Token::LParen,
        ')' => Token::RParen,
        ',' => Token::Comma,
        _ => return None,
    };
    Some(token)
}

/// Tokenizes `input` with unary operator disambiguation.
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_with(input, UnaryMode::Disambiguate)
}

/// Tokenizes `input`, applying the unary pass only in `UnaryMode::Disambiguate`.
pub fn tokenize_with(input: &str, mode: UnaryMode) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token() {
            Token::EOF => break,
            token => tokens.push(token),
        }
    }

    match mode {
        UnaryMode::Disambiguate => mark_unary_operators(tokens),
        UnaryMode::BinaryOnly => tokens,
    }
}

fn mark_unary_operators(tokens: Vec<Token>) -> Vec<Token> {
    let mut allow_unary = true;

    tokens
        .into_iter()
        .map(|token| match token {
            // allow_unary stays set, so `---5` yields three unary minuses
            Token::Operator(BinaryOperator::Add) if allow_unary => Token::Unary(UnaryOperator::Plus),
            Token::Operator(BinaryOperator::Subtract) if allow_unary => {
                Token::Unary(UnaryOperator::Minus)
            }
            token => {
                allow_unary = matches!(token, Token::LParen | Token::Comma) || token.is_operator();
                token
            }
        })
        .collect()
}
