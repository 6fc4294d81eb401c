//! Integer arithmetic expression evaluator.
//!
//! ```
//! assert_eq!(arith::evaluate_expression("2 + 3*4"), Ok(14));
//! assert_eq!(arith::evaluate_expression("5/(2-2)"), Err(arith::Error::DivisionByZero));
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod syntax;

pub use crate::{error::Error, parser::Config};

/// Parse `input` and compute its value.
///
/// Parsing, evaluation and dropping of the tree all recurse once per tree level.
/// A flat chain such as `1+1+...+1` is as deep as it has terms, so inputs with
/// tens of thousands of terms may exhaust the stack of a small (e.g. debug,
/// 2-8 MiB) thread.
pub fn evaluate_expression(input: &str) -> Result<i64, Error> {
    evaluate_expression_with(input, Config::default())
}

pub fn evaluate_expression_with(input: &str, config: Config) -> Result<i64, Error> {
    let expr = parser::parse_with(input, config).map_err(|err| {
        tracing::debug!("failed to parse {:?}: {}", input, err);
        err
    })?;
    let value = expr.evaluate().map_err(|err| {
        tracing::debug!("failed to evaluate {}: {}", expr, err);
        err
    })?;
    tracing::debug!("evaluated {:?} ({}) = {}", input, expr, value);
    Ok(value)
}
