//! Dynamically typed interval operations
//!
//! The typed API on [`Interval`] makes most operand mismatches impossible at
//! compile time. Operands that arrive as text (the `calc` command) are
//! checked here instead: every operation states which operand kinds it
//! accepts and refuses anything else with
//! [`DomainError::UnsupportedOperand`] rather than coercing.

use crate::error::{DomainError, Result};
use crate::interval::Interval;
use crate::tolerance::Tolerance;
use std::fmt;
use std::str::FromStr;

/// A value that can appear on either side of an operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Real number
    Scalar(f64),
    /// Interval value
    Interval(Interval),
}

impl Operand {
    /// Kind name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "float",
            Operand::Interval(_) => "Interval",
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<Interval> for Operand {
    fn from(value: Interval) -> Self {
        Operand::Interval(value)
    }
}

impl FromStr for Operand {
    type Err = DomainError;

    /// Parse `"x"` as a scalar, `"mid rad"`, `"mid±rad"` or `"mid+-rad"` as an interval
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace('±', " ").replace("+-", " ");
        let parts: Vec<&str> = normalized.split_whitespace().collect();
        let parse = |token: &str| {
            token
                .parse::<f64>()
                .map_err(|_| DomainError::InvalidOperand(s.to_string()))
        };

        match parts.as_slice() {
            [value] => Ok(Operand::Scalar(parse(value)?)),
            [mid, rad] => Ok(Operand::Interval(Interval::new(parse(mid)?, parse(rad)?)?)),
            _ => Err(DomainError::InvalidOperand(s.to_string())),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(value) => write!(f, "{}", value),
            Operand::Interval(interval) => write!(f, "{}", interval),
        }
    }
}

/// Supported binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Interval addition
    Add,
    /// Interval subtraction
    Sub,
    /// Multiplication by a scalar or an interval
    Mul,
    /// Division by a scalar or an interval
    Div,
    /// Tolerance-aware equality
    Eq,
    /// Membership of a scalar in an interval
    Contains,
    /// Chebyshev distance between intervals
    Distance,
}

impl Operation {
    /// Operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Eq => "==",
            Operation::Contains => "in",
            Operation::Distance => "dist",
        }
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" => Ok(Operation::Add),
            "-" | "sub" => Ok(Operation::Sub),
            "*" | "x" | "mul" => Ok(Operation::Mul),
            "/" | "div" => Ok(Operation::Div),
            "==" | "eq" => Ok(Operation::Eq),
            "in" | "contains" => Ok(Operation::Contains),
            "dist" | "distance" => Ok(Operation::Distance),
            _ => Err(DomainError::InvalidOperand(s.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Result of an evaluated operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Arithmetic result
    Interval(Interval),
    /// Comparison or membership result
    Bool(bool),
    /// Distance result
    Number(f64),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Interval(interval) => write!(f, "{}", interval),
            Outcome::Bool(value) => write!(f, "{}", value),
            Outcome::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Evaluate `lhs <op> rhs`
///
/// # Errors
/// [`DomainError::UnsupportedOperand`] when the operand kinds do not fit the
/// operation, plus whatever the underlying interval operation reports.
pub fn evaluate(
    lhs: Operand,
    op: Operation,
    rhs: Operand,
    tolerance: &Tolerance,
) -> Result<Outcome> {
    use self::Operand::{Interval as I, Scalar as S};

    match (op, lhs, rhs) {
        (Operation::Add, I(a), I(b)) => Ok(Outcome::Interval(a.checked_add(&b)?)),
        (Operation::Sub, I(a), I(b)) => Ok(Outcome::Interval(a.checked_sub(&b)?)),
        (Operation::Mul, I(a), S(k)) => Ok(Outcome::Interval(a.scale(k)?)),
        (Operation::Mul, I(a), I(b)) => Ok(Outcome::Interval(a.checked_mul(&b)?)),
        (Operation::Div, I(a), S(k)) => Ok(Outcome::Interval(a.div_scalar(k)?)),
        (Operation::Div, I(a), I(b)) => Ok(Outcome::Interval(a.div(&b, tolerance)?)),
        (Operation::Eq, I(a), I(b)) => Ok(Outcome::Bool(a.approx_eq(&b, tolerance))),
        (Operation::Contains, S(x), I(b)) => Ok(Outcome::Bool(b.contains(x, tolerance))),
        (Operation::Distance, I(a), I(b)) => Ok(Outcome::Number(a.distance_to(&b))),
        _ => Err(DomainError::UnsupportedOperand {
            op: op.symbol(),
            lhs: lhs.kind(),
            rhs: rhs.kind(),
        }),
    }
}
