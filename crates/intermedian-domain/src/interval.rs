//! Interval value type
//!
//! An [`Interval`] is a closed real range stored as a center (`mid`) and a
//! half-width (`rad`). The bounds `min = mid - rad` and `max = mid + rad` are
//! derived on demand.
//!
//! Arithmetic follows midpoint-radius interval arithmetic: radii always add
//! under addition and subtraction, and multiplication uses the corner-point
//! rule over the bounds. Every operation returns a `Result` so a value whose
//! bounds overflow `f64` is reported instead of carried along as `inf`.

use crate::error::{DomainError, Result};
use crate::tolerance::Tolerance;
use std::fmt;

/// Closed interval `[mid - rad, mid + rad]`
///
/// The derived `PartialEq` is exact; use [`Interval::approx_eq`] for the
/// tolerance-aware equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    mid: f64,
    rad: f64,
}

impl Interval {
    /// Create an interval from its midpoint and radius
    ///
    /// # Errors
    /// Returns [`DomainError::NonFinite`] for NaN or infinite input, or when
    /// `mid ± rad` overflows, and [`DomainError::NegativeRadius`] when
    /// `rad < 0`.
    pub fn new(mid: f64, rad: f64) -> Result<Self> {
        if !mid.is_finite() {
            return Err(DomainError::NonFinite { what: "mid", value: mid });
        }
        if !rad.is_finite() {
            return Err(DomainError::NonFinite { what: "rad", value: rad });
        }
        if rad < 0.0 {
            return Err(DomainError::NegativeRadius { rad });
        }
        let interval = Self { mid, rad };
        if !interval.min().is_finite() {
            return Err(DomainError::NonFinite { what: "min", value: interval.min() });
        }
        if !interval.max().is_finite() {
            return Err(DomainError::NonFinite { what: "max", value: interval.max() });
        }
        Ok(interval)
    }

    /// Create an interval from its bounds
    pub fn from_bounds(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() {
            return Err(DomainError::NonFinite { what: "min", value: min });
        }
        if !max.is_finite() {
            return Err(DomainError::NonFinite { what: "max", value: max });
        }
        if min > max {
            return Err(DomainError::InvalidBounds { min, max });
        }
        // halves first: `max - min` alone overflows for bounds near f64::MAX
        Self::new(min / 2.0 + max / 2.0, max / 2.0 - min / 2.0)
    }

    /// Degenerate interval holding a single point
    pub fn point(value: f64) -> Result<Self> {
        Self::new(value, 0.0)
    }

    /// Midpoint
    pub fn mid(&self) -> f64 {
        self.mid
    }

    /// Radius (half-width)
    pub fn rad(&self) -> f64 {
        self.rad
    }

    /// Lower bound
    pub fn min(&self) -> f64 {
        self.mid - self.rad
    }

    /// Upper bound
    pub fn max(&self) -> f64 {
        self.mid + self.rad
    }

    /// Tolerance-aware equality: both midpoints and both radii are close
    pub fn approx_eq(&self, other: &Interval, tolerance: &Tolerance) -> bool {
        tolerance.is_close(self.mid, other.mid) && tolerance.is_close(self.rad, other.rad)
    }

    /// Multiply by a scalar
    ///
    /// The midpoint scales linearly; the radius scales by `|factor|` so a
    /// negative factor mirrors the interval instead of inverting its bounds.
    pub fn scale(&self, factor: f64) -> Result<Interval> {
        if !factor.is_finite() {
            return Err(DomainError::NonFinite { what: "factor", value: factor });
        }
        Interval::new(self.mid * factor, self.rad * factor.abs())
    }

    /// Divide by a scalar
    pub fn div_scalar(&self, divisor: f64) -> Result<Interval> {
        if !divisor.is_finite() {
            return Err(DomainError::NonFinite { what: "divisor", value: divisor });
        }
        if divisor == 0.0 {
            return Err(DomainError::DivisionByZero);
        }
        Interval::new(self.mid / divisor, self.rad / divisor.abs())
    }

    /// Divide by another interval
    ///
    /// Multiplies by the reciprocal interval `[1 / max, 1 / min]`.
    ///
    /// # Errors
    /// Returns [`DomainError::DivisorContainsZero`] when `divisor` contains 0.
    pub fn div(&self, divisor: &Interval, tolerance: &Tolerance) -> Result<Interval> {
        if divisor.contains(0.0, tolerance) {
            return Err(DomainError::DivisorContainsZero {
                divisor: divisor.to_string(),
            });
        }
        let reciprocal = Interval::from_bounds(1.0 / divisor.max(), 1.0 / divisor.min())?;
        self.checked_mul(&reciprocal)
    }

    /// Check whether `point` lies in the interval
    ///
    /// Bounds are inclusive, and a point close to either bound counts as
    /// contained even when rounding puts it just outside.
    pub fn contains(&self, point: f64, tolerance: &Tolerance) -> bool {
        let (min, max) = (self.min(), self.max());
        (min <= point && point <= max)
            || tolerance.is_close(point, min)
            || tolerance.is_close(point, max)
    }

    /// Chebyshev distance between the endpoint pairs
    pub fn distance_to(&self, other: &Interval) -> f64 {
        (self.min() - other.min())
            .abs()
            .max((self.max() - other.max()).abs())
    }

    /// Elementwise average of midpoints and radii, i.e. `(self + other) / 2`
    pub fn average(&self, other: &Interval) -> Result<Interval> {
        Interval::new(
            self.mid / 2.0 + other.mid / 2.0,
            self.rad / 2.0 + other.rad / 2.0,
        )
    }

    /// Interval sum: midpoints and radii add
    ///
    /// # Errors
    /// [`DomainError::NonFinite`] when the result overflows.
    pub fn checked_add(&self, rhs: &Interval) -> Result<Interval> {
        Interval::new(self.mid + rhs.mid, self.rad + rhs.rad)
    }

    /// Interval difference
    ///
    /// Radii add: subtraction widens uncertainty, it is not set difference.
    pub fn checked_sub(&self, rhs: &Interval) -> Result<Interval> {
        Interval::new(self.mid - rhs.mid, self.rad + rhs.rad)
    }

    /// Interval product by the corner-point rule
    ///
    /// # Errors
    /// [`DomainError::NonFinite`] when a corner product overflows.
    pub fn checked_mul(&self, rhs: &Interval) -> Result<Interval> {
        let corners = [
            self.min() * rhs.min(),
            self.min() * rhs.max(),
            self.max() * rhs.min(),
            self.max() * rhs.max(),
        ];
        let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Interval::from_bounds(lo, hi)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}], {} ± {}",
            general(self.min()),
            general(self.max()),
            general(self.mid),
            general(self.rad)
        )
    }
}

/// Six significant digits with trailing zeros dropped, as C's `%g`
fn general(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // `{:.5e}` rounds to six significant digits before the exponent is read
    let scientific = format!("{:.5e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..6).contains(&exponent) {
        let decimals = (5 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(mid: f64, rad: f64) -> Interval {
        Interval::new(mid, rad).unwrap()
    }

    #[test]
    fn test_interval_creation() {
        let i = iv(2.0, 0.5);
        assert_eq!(i.mid(), 2.0);
        assert_eq!(i.rad(), 0.5);
        assert_eq!(i.min(), 1.5);
        assert_eq!(i.max(), 2.5);
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert_eq!(
            Interval::new(0.0, -1.0),
            Err(DomainError::NegativeRadius { rad: -1.0 })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(DomainError::NonFinite { what: "mid", .. })
        ));
        assert!(matches!(
            Interval::new(0.0, f64::INFINITY),
            Err(DomainError::NonFinite { what: "rad", .. })
        ));
    }

    #[test]
    fn test_from_bounds() {
        let i = Interval::from_bounds(-1.0, 3.0).unwrap();
        assert_eq!(i, iv(1.0, 2.0));
        assert!(Interval::from_bounds(3.0, -1.0).is_err());
    }

    #[test]
    fn test_add_and_sub() {
        let a = iv(1.0, 0.5);
        let b = iv(3.0, 0.25);
        assert_eq!(a.checked_add(&b).unwrap(), iv(4.0, 0.75));
        assert_eq!(a.checked_sub(&b).unwrap(), iv(-2.0, 0.75));
    }

    #[test]
    fn test_scale() {
        let a = iv(2.0, 1.0);
        assert_eq!(a.scale(3.0).unwrap(), iv(6.0, 3.0));
        assert_eq!(a.scale(-2.0).unwrap(), iv(-4.0, 2.0));
        assert!(a.scale(f64::NAN).is_err());
    }

    #[test]
    fn test_mul_corner_rule() {
        // [1, 3] * [-2, 4] = [-6, 12]
        let a = Interval::from_bounds(1.0, 3.0).unwrap();
        let b = Interval::from_bounds(-2.0, 4.0).unwrap();
        let product = a.checked_mul(&b).unwrap();
        assert_eq!(product.min(), -6.0);
        assert_eq!(product.max(), 12.0);
    }

    #[test]
    fn test_div_scalar() {
        let a = iv(4.0, 2.0);
        assert_eq!(a.div_scalar(2.0).unwrap(), iv(2.0, 1.0));
        assert_eq!(a.div_scalar(-2.0).unwrap(), iv(-2.0, 1.0));
        assert_eq!(a.div_scalar(0.0), Err(DomainError::DivisionByZero));
    }

    #[test]
    fn test_div_interval() {
        let tol = Tolerance::default();
        // [2, 4] / [1, 2] = [2, 4] * [0.5, 1] = [1, 4]
        let a = Interval::from_bounds(2.0, 4.0).unwrap();
        let b = Interval::from_bounds(1.0, 2.0).unwrap();
        let q = a.div(&b, &tol).unwrap();
        assert!(tol.is_close(q.min(), 1.0));
        assert!(tol.is_close(q.max(), 4.0));
    }

    #[test]
    fn test_div_by_interval_containing_zero() {
        let tol = Tolerance::default();
        let a = iv(1.0, 1.0);
        let b = iv(0.0, 1.0);
        assert!(matches!(
            a.div(&b, &tol),
            Err(DomainError::DivisorContainsZero { .. })
        ));
        // zero as an endpoint
        let c = Interval::from_bounds(0.0, 2.0).unwrap();
        assert!(a.div(&c, &tol).is_err());
    }

    #[test]
    fn test_contains() {
        let tol = Tolerance::default();
        let a = iv(0.0, 1.0);
        assert!(a.contains(0.0, &tol));
        assert!(a.contains(-1.0, &tol));
        assert!(a.contains(1.0, &tol));
        assert!(!a.contains(1.5, &tol));
    }

    #[test]
    fn test_contains_tolerates_roundoff() {
        let tol = Tolerance::default();
        let a = Interval::from_bounds(0.1, 0.3).unwrap();
        assert!(a.contains(0.1 + 0.2, &tol));
        assert!(a.contains(0.1 - 1e-17, &tol));
        assert!(!a.contains(0.3 + 1e-6, &tol));
    }

    #[test]
    fn test_approx_eq() {
        let tol = Tolerance::default();
        let a = iv(0.3, 0.1);
        let b = iv(0.1 + 0.2, 0.1);
        assert!(a.approx_eq(&b, &tol));
        assert!(!a.approx_eq(&iv(0.3, 0.2), &tol));
    }

    #[test]
    fn test_distance_to() {
        let a = Interval::from_bounds(0.0, 2.0).unwrap();
        let b = Interval::from_bounds(1.0, 5.0).unwrap();
        assert_eq!(a.distance_to(&b), 3.0);
        assert_eq!(b.distance_to(&a), 3.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_average() {
        let a = iv(0.0, 1.0);
        let b = iv(5.0, 4.0);
        assert_eq!(a.average(&b).unwrap(), iv(2.5, 2.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(1.0, 0.5).to_string(), "[0.5, 1.5], 1 ± 0.5");
    }

    #[test]
    fn test_display_six_significant_digits() {
        let i = iv(0.1 + 0.2, 0.0);
        assert_eq!(i.to_string(), "[0.3, 0.3], 0.3 ± 0");
        assert_eq!(iv(1234567.0, 0.5).to_string(), "[1.23457e+06, 1.23457e+06], 1.23457e+06 ± 0.5");
        assert_eq!(iv(0.0, 0.00001234).to_string(), "[-1.234e-05, 1.234e-05], 0 ± 1.234e-05");
    }

    #[test]
    fn test_general_format() {
        assert_eq!(general(2.5), "2.5");
        assert_eq!(general(-3.0), "-3");
        assert_eq!(general(100000.0), "100000");
        assert_eq!(general(999999.5), "1e+06");
        assert_eq!(general(0.0001), "0.0001");
        assert_eq!(general(1e200), "1e+200");
        assert_eq!(general(2.0 / 3.0), "0.666667");
    }

    #[test]
    fn test_overflowing_bounds_rejected() {
        assert!(matches!(
            Interval::new(-1.7e308, 1e307),
            Err(DomainError::NonFinite { what: "min", .. })
        ));
        assert!(matches!(
            Interval::new(1.7e308, 1e307),
            Err(DomainError::NonFinite { what: "max", .. })
        ));
        assert!(Interval::from_bounds(f64::NEG_INFINITY, 0.0).is_err());
        assert!(Interval::from_bounds(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_from_bounds_spanning_the_whole_range() {
        let i = Interval::from_bounds(-f64::MAX, f64::MAX).unwrap();
        assert_eq!(i.mid(), 0.0);
        assert_eq!(i.rad(), f64::MAX);
        assert_eq!(i.min(), -f64::MAX);
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let huge = iv(1e200, 0.0);
        assert!(matches!(
            huge.checked_mul(&huge),
            Err(DomainError::NonFinite { .. })
        ));

        let edge = iv(1.7e308, 0.0);
        assert!(edge.checked_add(&edge).is_err());
        assert!(iv(-1.7e308, 0.0).checked_sub(&edge).is_err());
        assert!(edge.scale(10.0).is_err());
        assert!(edge.div_scalar(0.1).is_err());
    }

    #[test]
    fn test_div_by_tiny_divisor_overflows() {
        let tol = Tolerance::default();
        let tiny = Interval::from_bounds(1e-310, 2e-310).unwrap();
        assert!(matches!(
            iv(1.0, 0.0).div(&tiny, &tol),
            Err(DomainError::NonFinite { .. })
        ));
    }
}
