use crate::lexer::{Token, TokenKind};

/// The error type returned from parsing and evaluating expressions.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A token was asked for a payload it does not hold.
    #[error("current token is not a {} (found {})", expected, found)]
    TypeMismatch { expected: TokenKind, found: Token },

    #[error("syntax error: expected {}, found {}", expected, found)]
    Syntax { expected: &'static str, found: Token },

    #[error("syntax error: expected `)', found {}", found)]
    UnclosedParen { found: Token },

    #[error("syntax error: unexpected trailing {}", found)]
    TrailingInput { found: Token },

    #[error("division by zero")]
    DivisionByZero,
}
