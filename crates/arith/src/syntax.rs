//! Syntax tree and its evaluation.

use crate::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    fn apply(self, lhs: i64, rhs: i64) -> Result<i64, Error> {
        Ok(match self {
            Self::Add => lhs.wrapping_add(rhs),
            Self::Sub => lhs.wrapping_sub(rhs),
            Self::Mul => lhs.wrapping_mul(rhs),
            Self::Div => {
                if rhs == 0 {
                    return Err(Error::DivisionByZero);
                }
                // truncates toward zero; `i64::MIN / -1` wraps to `i64::MIN`.
                lhs.wrapping_div(rhs)
            }
        })
    }
}

/// A node of the syntax tree.
///
/// Unary minus is not a node of its own: it toggles the `negated` flag of the
/// operand, so `-(-(1 + 2))` is a single `BinaryOp` whose flag is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Constant {
        value: i64,
        negated: bool,
    },
    BinaryOp {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        negated: bool,
    },
}

impl Expr {
    pub fn constant(value: i64) -> Self {
        Self::Constant {
            value,
            negated: false,
        }
    }

    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Self::BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            negated: false,
        }
    }

    /// Apply a unary minus to this node in place.
    pub fn apply_minus(&mut self) {
        match self {
            Self::Constant { negated, .. } | Self::BinaryOp { negated, .. } => *negated ^= true,
        }
    }

    pub fn is_negated(&self) -> bool {
        match self {
            Self::Constant { negated, .. } | Self::BinaryOp { negated, .. } => *negated,
        }
    }

    /// Compute the value of this tree.
    ///
    /// Both operands of a binary node are always evaluated, left first. Arithmetic
    /// wraps around on overflow; a zero divisor fails with [`Error::DivisionByZero`].
    pub fn evaluate(&self) -> Result<i64, Error> {
        let (value, negated) = match self {
            Self::Constant { value, negated } => (*value, *negated),
            Self::BinaryOp {
                op,
                lhs,
                rhs,
                negated,
            } => {
                let lhs = lhs.evaluate()?;
                let rhs = rhs.evaluate()?;
                (op.apply(lhs, rhs)?, *negated)
            }
        };
        Ok(if negated { value.wrapping_neg() } else { value })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            f.write_str("(neg ")?;
        }
        match self {
            Self::Constant { value, .. } => write!(f, "{}", value)?,
            Self::BinaryOp { op, lhs, rhs, .. } => {
                write!(f, "({} {} {})", op.symbol(), lhs, rhs)?
            }
        }
        if self.is_negated() {
            f.write_str(")")?;
        }
        Ok(())
    }
}
