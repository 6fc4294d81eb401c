//! Recursive-descent parser.
//!
//! ```text
//! expression   := term ( ('+' | '-') term )*
//! term         := factor ( ('*' | '/') factor )*
//! factor       := NUMBER | '(' expression ')' | '-' factor-inner
//! factor-inner := NUMBER | '(' expression ')'
//! ```

use crate::{
    error::Error,
    lexer::{Lexer, Token, TokenKind},
    syntax::{BinOp, Expr},
};

/// Parser settings.
///
/// The default is permissive: the token standing where a closing `)` is expected
/// is skipped without being inspected, and anything left after a complete
/// expression is ignored.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Config {
    strict_parens: bool,
    reject_trailing_input: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with every check enabled.
    pub fn strict() -> Self {
        Self::new()
            .strict_parens(true)
            .reject_trailing_input(true)
    }

    /// Require the token closing a parenthesized expression to be `)`.
    pub fn strict_parens(mut self, enabled: bool) -> Self {
        self.strict_parens = enabled;
        self
    }

    /// Fail with [`Error::TrailingInput`] when tokens remain after the expression.
    pub fn reject_trailing_input(mut self, enabled: bool) -> Self {
        self.reject_trailing_input = enabled;
        self
    }
}

/// Parse `input` with the default (permissive) configuration.
pub fn parse(input: &str) -> Result<Expr, Error> {
    parse_with(input, Config::default())
}

pub fn parse_with(input: &str, config: Config) -> Result<Expr, Error> {
    let span = tracing::trace_span!("parse");
    let _entered = span.enter();

    let mut lexer = Lexer::new(input);
    let mut parser = Parser::new(&mut lexer, config);
    let expr = parser.parse_expression()?;
    parser.finish()?;
    Ok(expr)
}

#[derive(Debug)]
pub struct Parser<'l, 'source> {
    lexer: &'l mut Lexer<'source>,
    config: Config,
}

impl<'l, 'source> Parser<'l, 'source> {
    pub fn new(lexer: &'l mut Lexer<'source>, config: Config) -> Self {
        Self { lexer, config }
    }

    pub fn parse_expression(&mut self) -> Result<Expr, Error> {
        let mut expr = self.parse_term()?;
        while let Some(op) = self.lookahead_op(&[BinOp::Add, BinOp::Sub])? {
            self.lexer.advance();
            let rhs = self.parse_term()?;
            tracing::trace!("reduce: expression -> expression `{}' term", op.symbol());
            expr = Expr::binary(op, expr, rhs);
        }
        Ok(expr)
    }

    pub fn parse_term(&mut self) -> Result<Expr, Error> {
        let mut expr = self.parse_factor()?;
        while let Some(op) = self.lookahead_op(&[BinOp::Mul, BinOp::Div])? {
            self.lexer.advance();
            let rhs = self.parse_factor()?;
            tracing::trace!("reduce: term -> term `{}' factor", op.symbol());
            expr = Expr::binary(op, expr, rhs);
        }
        Ok(expr)
    }

    pub fn parse_factor(&mut self) -> Result<Expr, Error> {
        if self.lexer.current().is_symbol('-') {
            self.lexer.advance();
            let mut expr = match self.parse_atom()? {
                Some(expr) => expr,
                None => {
                    return Err(Error::Syntax {
                        expected: "number or `(' after unary `-'",
                        found: self.lexer.current(),
                    })
                }
            };
            tracing::trace!("reduce: factor -> `-' factor-inner");
            expr.apply_minus();
            return Ok(expr);
        }

        match self.parse_atom()? {
            Some(expr) => Ok(expr),
            None => Err(Error::Syntax {
                expected: "number, `(' or unary `-'",
                found: self.lexer.current(),
            }),
        }
    }

    /// Check that nothing but the end of input is left, if so configured.
    pub fn finish(&mut self) -> Result<(), Error> {
        let current = self.lexer.current();
        if self.config.reject_trailing_input && current != Token::End {
            return Err(Error::TrailingInput { found: current });
        }
        Ok(())
    }

    // factor-inner := NUMBER | '(' expression ')'
    //
    // Returns `None` without consuming anything when the lookahead starts neither.
    fn parse_atom(&mut self) -> Result<Option<Expr>, Error> {
        let current = self.lexer.current();
        match current.kind() {
            TokenKind::Number => {
                let value = current.as_number()?;
                self.lexer.advance();
                tracing::trace!("reduce: factor -> NUMBER({})", value);
                Ok(Some(Expr::constant(value)))
            }
            TokenKind::Symbol if current.is_symbol('(') => {
                self.lexer.advance();
                let expr = self.parse_expression()?;
                self.expect_rparen()?;
                tracing::trace!("reduce: factor -> `(' expression `)'");
                Ok(Some(expr))
            }
            _ => Ok(None),
        }
    }

    fn expect_rparen(&mut self) -> Result<(), Error> {
        let current = self.lexer.current();
        if self.config.strict_parens && !current.is_symbol(')') {
            return Err(Error::UnclosedParen { found: current });
        }
        // In permissive mode whatever stands here is consumed as the `)'.
        self.lexer.advance();
        Ok(())
    }

    fn lookahead_op(&self, ops: &[BinOp]) -> Result<Option<BinOp>, Error> {
        let current = self.lexer.current();
        if current.kind() != TokenKind::Symbol {
            return Ok(None);
        }
        let op = BinOp::from_symbol(current.as_symbol()?);
        Ok(op.filter(|op| ops.contains(op)))
    }
}
