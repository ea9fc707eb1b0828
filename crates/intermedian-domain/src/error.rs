//! Error types for the domain layer.

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Errors raised by interval arithmetic and the median estimators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Radius below zero
    #[error("Radius must be non-negative, got {rad}")]
    NegativeRadius {
        /// Offending radius
        rad: f64,
    },

    /// NaN or infinite input
    #[error("Non-finite value for {what}: {value}")]
    NonFinite {
        /// Which quantity was non-finite
        what: &'static str,
        /// Offending value
        value: f64,
    },

    /// Lower bound above upper bound
    #[error("Lower bound {min} is greater than upper bound {max}")]
    InvalidBounds {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Scalar division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Interval division by an interval containing zero
    #[error("Divisor {divisor} contains zero")]
    DivisorContainsZero {
        /// Rendered divisor
        divisor: String,
    },

    /// Operation invoked with operands it does not accept
    #[error("unsupported operand type(s) for {op}: '{lhs}' and '{rhs}'")]
    UnsupportedOperand {
        /// Operator symbol
        op: &'static str,
        /// Kind of the left operand
        lhs: &'static str,
        /// Kind of the right operand
        rhs: &'static str,
    },

    /// Operand text that is neither a scalar nor an interval
    #[error("Invalid operand '{0}': expected 'x', 'mid rad' or 'mid±rad'")]
    InvalidOperand(String),

    /// Tolerance parameters out of range
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),

    /// Estimator given no subintervals
    #[error("Subinterval sequence is empty")]
    EmptySubintervals,

    /// Frequency vector sums to zero
    #[error("Total frequency is zero; no subinterval is covered by any interval")]
    ZeroTotalFrequency,

    /// Subintervals and frequencies are not parallel
    #[error("Got {subintervals} subintervals but {frequencies} frequencies")]
    LengthMismatch {
        /// Number of subintervals
        subintervals: usize,
        /// Number of frequencies
        frequencies: usize,
    },
}
