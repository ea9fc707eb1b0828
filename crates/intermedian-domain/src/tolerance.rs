//! Floating-point closeness parameters
//!
//! Every approximate comparison in the crate (interval equality, boundary
//! containment, breakpoint deduplication, the frequency-median split test)
//! takes a [`Tolerance`] explicitly so results are reproducible.

use crate::error::{DomainError, Result};

/// Default relative tolerance (default: 1e-9)
pub const DEFAULT_RELATIVE: f64 = 1e-9;

/// Default absolute tolerance (default: 0.0)
pub const DEFAULT_ABSOLUTE: f64 = 0.0;

/// Relative and absolute tolerance for "close enough" comparisons
///
/// Two values `a` and `b` are close when
/// `|a - b| <= max(relative * max(|a|, |b|), absolute)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Relative tolerance, scaled by the larger magnitude
    pub relative: f64,
    /// Absolute floor, useful for comparisons near zero
    pub absolute: f64,
}

impl Tolerance {
    /// Create a tolerance, rejecting negative or non-finite parameters
    pub fn new(relative: f64, absolute: f64) -> Result<Self> {
        for (name, value) in [("relative", relative), ("absolute", absolute)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidTolerance(format!(
                    "{} tolerance must be finite and >= 0, got {}",
                    name, value
                )));
            }
        }
        Ok(Self { relative, absolute })
    }

    /// Exact comparison (both tolerances zero)
    pub fn exact() -> Self {
        Self {
            relative: 0.0,
            absolute: 0.0,
        }
    }

    /// Check whether `a` and `b` are close
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= (self.relative * a.abs().max(b.abs())).max(self.absolute)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: DEFAULT_RELATIVE,
            absolute: DEFAULT_ABSOLUTE,
        }
    }
}
