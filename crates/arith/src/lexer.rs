//! Lexer implementation.

use crate::error::Error;
use logos::Logos;
use std::fmt;

/// A token produced by [`Lexer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Symbol(char),
    End,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Symbol,
    End,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Number(..) => TokenKind::Number,
            Self::Symbol(..) => TokenKind::Symbol,
            Self::End => TokenKind::End,
        }
    }

    /// Return the value of a `Number` token.
    ///
    /// Asking any other token for a number is a contract violation on the caller's
    /// side and is reported as [`Error::TypeMismatch`].
    pub fn as_number(&self) -> Result<i64, Error> {
        match *self {
            Self::Number(n) => Ok(n),
            found => Err(Error::TypeMismatch {
                expected: TokenKind::Number,
                found,
            }),
        }
    }

    /// Return the character of a `Symbol` token.
    pub fn as_symbol(&self) -> Result<char, Error> {
        match *self {
            Self::Symbol(c) => Ok(c),
            found => Err(Error::TypeMismatch {
                expected: TokenKind::Symbol,
                found,
            }),
        }
    }

    pub fn is_symbol(&self, c: char) -> bool {
        matches!(*self, Self::Symbol(s) if s == c)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number `{}'", n),
            Self::Symbol(c) => write!(f, "`{}'", c),
            Self::End => f.write_str("end of input"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Number => "number",
            Self::Symbol => "symbol",
            Self::End => "end of input",
        })
    }
}

// Anything outside the grammar alphabet is noise and never reaches the parser.
#[derive(Debug, Copy, Clone, Logos, PartialEq)]
#[logos(skip r"[^0-9+\-*/()]+")]
enum Lexeme {
    #[regex(r"[0-9]+", |lex| accumulate_digits(lex.slice()))]
    Number(i64),

    #[regex(r"[+\-*/()]", |lex| lex.slice().chars().next())]
    Symbol(char),
}

fn accumulate_digits(digits: &str) -> i64 {
    digits.bytes().fold(0i64, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(i64::from(b - b'0'))
    })
}

/// Scans the input on demand, holding exactly one token of lookahead.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Lexeme>,
    current: Token,
}

impl fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("current", &self.current)
            .field("remainder", &self.inner.remainder())
            .finish()
    }
}

impl<'source> Lexer<'source> {
    /// Create a lexer over `input` and scan its first token.
    pub fn new(input: &'source str) -> Self {
        let mut lexer = Self {
            inner: Lexeme::lexer(input),
            current: Token::End,
        };
        lexer.advance();
        lexer
    }

    /// The most recently scanned token.
    #[inline]
    pub fn current(&self) -> Token {
        self.current
    }

    /// Scan the next token, replacing [`current`](Self::current).
    ///
    /// Once the input is exhausted every further call yields `Token::End`.
    pub fn advance(&mut self) {
        self.current = loop {
            match self.inner.next() {
                Some(Ok(Lexeme::Number(n))) => break Token::Number(n),
                Some(Ok(Lexeme::Symbol(c))) => break Token::Symbol(c),
                Some(Err(())) => continue,
                None => break Token::End,
            }
        };
        tracing::trace!("scanned token {:?}", self.current);
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            Token::End => None,
            token => {
                self.advance();
                Some(token)
            }
        }
    }
}
