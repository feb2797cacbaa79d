//! Normalized scientific-notation numbers
//!
//! A [`Coefficient`] stores `mantissa x 10^exponent` with `1 <= |mantissa| < 10`.
//! Every operation hands back a freshly normalized value.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{QuantityError, Result};

const BASE: f64 = 10.0;

/// Relative mantissa difference under which two coefficients compare equal
const RELATIVE_TOLERANCE: f64 = 1e-12;

const MAX_ROUNDING_DIGITS: usize = 17;

/// A real number in normalized decimal scientific notation.
///
/// Zero is stored as `0 x 10^0`. Non-finite mantissas (from a division by
/// zero) are kept as-is with a zero exponent instead of being normalized.
#[derive(Debug, Clone, Copy)]
pub struct Coefficient {
    mantissa: f64,
    exponent: i32,
}

impl Coefficient {
    pub const ZERO: Coefficient = Coefficient {
        mantissa: 0.0,
        exponent: 0,
    };

    pub const ONE: Coefficient = Coefficient {
        mantissa: 1.0,
        exponent: 0,
    };

    /// Normalize `mantissa x 10^exponent` into canonical form
    pub fn new(mantissa: f64, exponent: i32) -> Self {
        if mantissa == 0.0 {
            return Self::ZERO;
        }
        if !mantissa.is_finite() {
            tracing::trace!(mantissa, exponent, "keeping non-finite mantissa unnormalized");
            return Self {
                mantissa,
                exponent: 0,
            };
        }

        let mut mantissa = mantissa;
        let mut exponent = exponent;
        loop {
            if mantissa.abs() >= BASE {
                mantissa /= BASE;
                match exponent.checked_add(1) {
                    Some(e) => exponent = e,
                    None => return Self::saturated(mantissa, true),
                }
            } else if mantissa.abs() < 1.0 {
                mantissa *= BASE;
                match exponent.checked_sub(1) {
                    Some(e) => exponent = e,
                    None => return Self::saturated(mantissa, false),
                }
            } else {
                break;
            }
        }

        Self { mantissa, exponent }
    }

    /// Stand-in for a magnitude whose exponent no longer fits an `i32`:
    /// signed infinity when it grew out of range, zero when it shrank
    fn saturated(mantissa: f64, overflow: bool) -> Self {
        tracing::trace!(mantissa, overflow, "exponent out of range, saturating");
        if overflow {
            Self {
                mantissa: f64::INFINITY.copysign(mantissa),
                exponent: 0,
            }
        } else {
            Self::ZERO
        }
    }

    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.mantissa.is_finite()
    }

    /// Collapse back to a plain float (may overflow to infinity)
    pub fn to_f64(&self) -> f64 {
        self.mantissa * BASE.powi(self.exponent)
    }

    pub fn abs(self) -> Self {
        Self {
            mantissa: self.mantissa.abs(),
            exponent: self.exponent,
        }
    }

    /// Raise to an integer power: mantissa^n x 10^(exponent*n).
    ///
    /// An exponent product outside `i32` saturates to signed infinity or zero.
    pub fn powi(self, n: i32) -> Self {
        if n == 0 {
            return Self::ONE;
        }
        let mantissa = self.mantissa.powi(n);
        match self.exponent.checked_mul(n) {
            Some(exponent) => Coefficient::new(mantissa, exponent),
            None => Self::saturated(mantissa, (self.exponent > 0) == (n > 0)),
        }
    }

    /// Like [`powi`](Self::powi), for exponents that arrive as an arbitrary [`Scalar`]
    pub fn try_pow(self, n: impl Into<Scalar>) -> Result<Self> {
        Ok(self.powi(n.into().as_integer()?))
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Coefficient::new(value, 0)
    }
}

impl From<i32> for Coefficient {
    fn from(value: i32) -> Self {
        Coefficient::new(f64::from(value), 0)
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= RELATIVE_TOLERANCE * a.abs().max(b.abs())
}

impl PartialEq for Coefficient {
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return self.is_zero() && other.is_zero();
        }
        if !self.is_finite() || !other.is_finite() {
            return self.mantissa == other.mantissa;
        }
        // Rounding can leave equal numbers straddling a decade boundary
        match i64::from(self.exponent) - i64::from(other.exponent) {
            0 => close(self.mantissa, other.mantissa),
            1 => close(self.mantissa * BASE, other.mantissa),
            -1 => close(self.mantissa, other.mantissa * BASE),
            _ => false,
        }
    }
}

impl PartialOrd for Coefficient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        (*self - *other).mantissa.partial_cmp(&0.0)
    }
}

impl Add for Coefficient {
    type Output = Coefficient;

    fn add(self, rhs: Coefficient) -> Coefficient {
        if rhs.is_zero() {
            return self;
        }
        if self.is_zero() {
            return rhs;
        }
        let exponent = self.exponent.max(rhs.exponent);
        let mantissa = self.mantissa * BASE.powi(self.exponent - exponent)
            + rhs.mantissa * BASE.powi(rhs.exponent - exponent);
        Coefficient::new(mantissa, exponent)
    }
}

impl Sub for Coefficient {
    type Output = Coefficient;

    fn sub(self, rhs: Coefficient) -> Coefficient {
        self + -rhs
    }
}

impl Neg for Coefficient {
    type Output = Coefficient;

    fn neg(self) -> Coefficient {
        Coefficient {
            mantissa: -self.mantissa,
            exponent: self.exponent,
        }
    }
}

impl Mul for Coefficient {
    type Output = Coefficient;

    fn mul(self, rhs: Coefficient) -> Coefficient {
        Coefficient::new(self.mantissa * rhs.mantissa, self.exponent + rhs.exponent)
    }
}

impl Div for Coefficient {
    type Output = Coefficient;

    fn div(self, rhs: Coefficient) -> Coefficient {
        Coefficient::new(self.mantissa / rhs.mantissa, self.exponent - rhs.exponent)
    }
}

// Plain floats are promoted to `Coefficient(value, 0)` on either side.

impl Add<f64> for Coefficient {
    type Output = Coefficient;

    fn add(self, rhs: f64) -> Coefficient {
        if rhs == 0.0 {
            return self;
        }
        self + Coefficient::from(rhs)
    }
}

impl Add<Coefficient> for f64 {
    type Output = Coefficient;

    fn add(self, rhs: Coefficient) -> Coefficient {
        rhs + self
    }
}

impl Sub<f64> for Coefficient {
    type Output = Coefficient;

    fn sub(self, rhs: f64) -> Coefficient {
        self + -rhs
    }
}

impl Sub<Coefficient> for f64 {
    type Output = Coefficient;

    fn sub(self, rhs: Coefficient) -> Coefficient {
        -rhs + self
    }
}

impl Mul<f64> for Coefficient {
    type Output = Coefficient;

    fn mul(self, rhs: f64) -> Coefficient {
        self * Coefficient::from(rhs)
    }
}

impl Mul<Coefficient> for f64 {
    type Output = Coefficient;

    fn mul(self, rhs: Coefficient) -> Coefficient {
        Coefficient::from(self) * rhs
    }
}

impl Div<f64> for Coefficient {
    type Output = Coefficient;

    fn div(self, rhs: f64) -> Coefficient {
        self / Coefficient::from(rhs)
    }
}

impl Div<Coefficient> for f64 {
    type Output = Coefficient;

    fn div(self, rhs: Coefficient) -> Coefficient {
        Coefficient::from(self) / rhs
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) if self.is_finite() => {
                // Round first so that 9.9996 at 3 digits prints as 1.000 x 10^1
                // Past f64's ~17 significant digits rounding changes nothing
                let scale = BASE.powi(precision.min(MAX_ROUNDING_DIGITS) as i32);
                let rounded = Coefficient::new((self.mantissa * scale).round() / scale, self.exponent);
                write!(f, "{:.*} x 10^{}", precision, rounded.mantissa, rounded.exponent)
            }
            _ => write!(f, "{} x 10^{}", self.mantissa, self.exponent),
        }
    }
}

/// Either a plain real number or an already-normalized coefficient.
///
/// Every API that accepts "a number" takes `impl Into<Scalar>`, so the
/// accepted shapes are exactly the `From` impls below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Real(f64),
    Normalized(Coefficient),
}

impl Scalar {
    pub fn to_coefficient(self) -> Coefficient {
        match self {
            Scalar::Real(value) => Coefficient::from(value),
            Scalar::Normalized(coefficient) => coefficient,
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Scalar::Real(value) => value,
            Scalar::Normalized(coefficient) => coefficient.to_f64(),
        }
    }

    /// The value as an exponent, rejecting anything that is not an `i32` integer
    pub fn as_integer(self) -> Result<i32> {
        let value = self.to_f64();
        if value.is_finite()
            && value.fract() == 0.0
            && value >= f64::from(i32::MIN)
            && value <= f64::from(i32::MAX)
        {
            Ok(value as i32)
        } else {
            Err(QuantityError::TypeConstraintViolation(format!(
                "exponent must be an integer, got {value}"
            )))
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Real(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Real(f64::from(value))
    }
}

impl From<Coefficient> for Scalar {
    fn from(value: Coefficient) -> Self {
        Scalar::Normalized(value)
    }
}

impl From<Scalar> for Coefficient {
    fn from(value: Scalar) -> Self {
        value.to_coefficient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_normalized(c: Coefficient) {
        let m = c.mantissa().abs();
        assert!((1.0..10.0).contains(&m), "mantissa {m} out of range in {c}");
    }

    #[test]
    fn test_normalization() {
        for input in [1.0, 9.99, 10.0, 123.456, 0.5, 0.000_042, -7.5e12, -0.003, 6.02e23, 1e-300] {
            let c = Coefficient::from(input);
            assert_normalized(c);
            assert!((c.to_f64() - input).abs() <= input.abs() * 1e-12, "{input} -> {c}");
        }
    }

    #[test]
    fn test_normalization_shifts_exponent() {
        let c = Coefficient::new(1234.5, -2);
        assert!((c.mantissa() - 1.2345).abs() < 1e-12);
        assert_eq!(c.exponent(), 1);

        let c = Coefficient::new(0.05, 4);
        assert!((c.mantissa() - 5.0).abs() < 1e-12);
        assert_eq!(c.exponent(), 2);
    }

    #[test]
    fn test_zero_does_not_hang() {
        let zero = Coefficient::new(0.0, 17);
        assert!(zero.is_zero());
        assert_eq!(zero.exponent(), 0);
        assert_eq!(Coefficient::new(-0.0, -3), Coefficient::ZERO);
    }

    #[test]
    fn test_non_finite_is_kept() {
        let inf = Coefficient::ONE / Coefficient::ZERO;
        assert!(!inf.is_finite());
        assert_eq!(inf.exponent(), 0);
    }

    #[test]
    fn test_add_aligns_to_larger_exponent() {
        let sum = Coefficient::new(5.0, 3) + Coefficient::new(2.5, 1);
        assert_eq!(sum, Coefficient::new(5.025, 3));

        let sum = Coefficient::new(9.0, 0) + Coefficient::new(2.0, 0);
        assert_eq!(sum.exponent(), 1);
        assert_eq!(sum, Coefficient::from(11.0));
    }

    #[test]
    fn test_add_zero_is_noop() {
        let c = Coefficient::new(3.3, -7);
        assert_eq!((c + 0.0).exponent(), -7);
        assert_eq!(c + Coefficient::ZERO, c);
        assert_eq!(Coefficient::ZERO + c, c);
    }

    #[test]
    fn test_sub_and_neg() {
        let diff = Coefficient::from(10.0) - Coefficient::from(2.5);
        assert_eq!(diff, Coefficient::from(7.5));
        assert_eq!(-Coefficient::from(4.0), Coefficient::from(-4.0));
        assert!((Coefficient::from(1.0) - 1.0).is_zero());
        assert_eq!(1.0 - Coefficient::from(3.0), Coefficient::from(-2.0));
    }

    #[test]
    fn test_mul_and_div() {
        let product = Coefficient::new(4.0, 3) * Coefficient::new(5.0, -1);
        assert_eq!(product.exponent(), 3);
        assert_eq!(product, Coefficient::from(2000.0));

        let quotient = Coefficient::new(1.0, 0) / Coefficient::new(4.0, 2);
        assert_eq!(quotient, Coefficient::from(0.0025));

        assert_eq!(2.0 * Coefficient::from(3.0), Coefficient::from(6.0));
        assert_eq!(1.0 / Coefficient::from(8.0), Coefficient::from(0.125));
    }

    #[test]
    fn test_powi() {
        assert_eq!(Coefficient::new(3.0, 2).powi(3), Coefficient::from(27e6));
        assert_eq!(Coefficient::new(2.0, 1).powi(-2), Coefficient::from(0.0025));
        assert_eq!(Coefficient::new(7.0, 9).powi(0), Coefficient::ONE);
    }

    #[test]
    fn test_try_pow_rejects_fractions() {
        assert_eq!(Coefficient::from(2.0).try_pow(3.0), Ok(Coefficient::from(8.0)));
        assert!(matches!(
            Coefficient::from(2.0).try_pow(0.5),
            Err(QuantityError::TypeConstraintViolation(_))
        ));
        assert!(Coefficient::from(2.0).try_pow(f64::NAN).is_err());
    }

    #[test]
    fn test_abs() {
        let c = Coefficient::new(-6.5, -2).abs();
        assert_eq!(c.mantissa(), 6.5);
        assert_eq!(c.exponent(), -2);
    }

    #[test]
    fn test_equality_tolerates_rounding() {
        let a = Coefficient::from(0.1) + Coefficient::from(0.2);
        assert_eq!(a, Coefficient::from(0.3));
        assert_ne!(Coefficient::from(1.0), Coefficient::from(1.0001));
        assert_ne!(Coefficient::new(1.0, 0), Coefficient::new(1.0, 5));
    }

    #[test]
    fn test_ordering() {
        assert!(Coefficient::from(2.0) < Coefficient::from(30.0));
        assert!(Coefficient::from(-1e9) < Coefficient::from(1e-9));
        assert!(Coefficient::ZERO > Coefficient::from(-0.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coefficient::new(3.5, 2).to_string(), "3.5 x 10^2");
        assert_eq!(format!("{:.2}", Coefficient::from(0.00123)), "1.23 x 10^-3");
        assert_eq!(format!("{:.3}", Coefficient::from(9.9996)), "1.000 x 10^1");
        assert_eq!(Coefficient::ZERO.to_string(), "0 x 10^0");
    }

    #[test]
    fn test_scalar_integer_check() {
        assert_eq!(Scalar::from(3).as_integer(), Ok(3));
        assert_eq!(Scalar::from(Coefficient::new(2.0, 1)).as_integer(), Ok(20));
        assert!(Scalar::from(1.5).as_integer().is_err());
        assert!(Scalar::from(1e12).as_integer().is_err());
    }

    #[test]
    fn test_powi_saturates_out_of_range_exponents() {
        let huge = Coefficient::new(2.0, 100_000).powi(100_000);
        assert!(!huge.is_finite());
        assert!(huge.mantissa() > 0.0);

        let tiny = Coefficient::new(2.0, -100_000).powi(100_000);
        assert!(tiny.is_zero());
        assert!(Coefficient::new(2.0, 100_000).powi(-100_000).is_zero());

        let negative = Coefficient::new(-2.0, 100_000).powi(100_001);
        assert!(negative.mantissa().is_infinite() && negative.mantissa() < 0.0);
    }

    #[test]
    fn test_normalization_at_exponent_limits() {
        let c = Coefficient::new(50.0, i32::MAX);
        assert!(!c.is_finite());
        assert!(Coefficient::new(0.5, i32::MIN).is_zero());
        assert_eq!(Coefficient::new(5.0, i32::MAX).exponent(), i32::MAX);
    }

    #[test]
    fn test_display_with_large_precision() {
        let text = format!("{:.400}", Coefficient::new(1.5, 2));
        assert!(text.starts_with("1.5000"), "{text}");
        assert!(text.ends_with(" x 10^2"), "{text}");
    }
}
