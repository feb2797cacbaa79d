//! Dimensioned quantities

use std::fmt;
use std::ops::{Div, Mul, Neg};

use super::{Coefficient, DerivedUnit, Prefix, Scalar, Unit};
use crate::error::{QuantityError, Result};

/// A physical quantity: this many of this unit.
///
/// Coefficients and units combine independently under `*`, `/` and `powi`.
/// Addition and subtraction are only defined between equal units and are
/// therefore exposed as the fallible [`try_add`](Self::try_add) and
/// [`try_sub`](Self::try_sub).
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    coefficient: Coefficient,
    unit: Unit,
}

impl Value {
    pub fn new(amount: impl Into<Scalar>, unit: Unit) -> Self {
        Self {
            coefficient: amount.into().to_coefficient(),
            unit,
        }
    }

    /// A pure number
    pub fn dimensionless(amount: impl Into<Scalar>) -> Self {
        Value::new(amount, Unit::dimensionless())
    }

    pub fn coefficient(&self) -> Coefficient {
        self.coefficient
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Whether `self` and `other` can be added or converted into each other
    pub fn is_compatible(&self, other: &Value) -> bool {
        self.unit == other.unit
    }

    pub fn try_add(&self, other: &Value) -> Result<Value> {
        if !self.is_compatible(other) {
            return Err(QuantityError::unit_mismatch("add", &self.unit, &other.unit));
        }
        Ok(Value::new(self.coefficient + other.coefficient, self.unit.clone()))
    }

    pub fn try_sub(&self, other: &Value) -> Result<Value> {
        if !self.is_compatible(other) {
            return Err(QuantityError::unit_mismatch("subtract", &self.unit, &other.unit));
        }
        Ok(Value::new(self.coefficient - other.coefficient, self.unit.clone()))
    }

    /// Raise coefficient and unit to the integer power `n`
    pub fn powi(&self, n: i32) -> Value {
        Value::new(self.coefficient.powi(n), self.unit.powi(n))
    }

    /// Like [`powi`](Self::powi), failing on a non-integer exponent or when
    /// the unit's exponents overflow
    pub fn try_pow(&self, n: impl Into<Scalar>) -> Result<Value> {
        let n = n.into().as_integer()?;
        Ok(Value::new(self.coefficient.powi(n), self.unit.try_pow(n)?))
    }

    /// Define a named unit from this quantity, e.g. `(&*METER * 1609.344).name("mile")`
    pub fn name(&self, name: impl Into<String>) -> DerivedUnit {
        DerivedUnit::new(self.clone(), name)
    }

    /// Magnitude of `self` in `target`: the coefficient divided by the
    /// target's [`prefix_factor`](DerivedUnit::prefix_factor)
    pub fn convert_to(&self, target: &DerivedUnit) -> Result<Coefficient> {
        if self.unit != *target.unit() {
            return Err(QuantityError::unit_mismatch("convert", &self.unit, target.unit()));
        }
        let factor = target.prefix_factor();
        if target.coefficient() != factor {
            tracing::debug!(
                unit = %target,
                magnitude = %target.coefficient(),
                %factor,
                "unit magnitude is not its prefix factor, rendering by prefixes only"
            );
        }
        Ok(self.coefficient / factor)
    }

    /// Borrowing view that displays `self` in the named unit `target`.
    ///
    /// A precision passed to the formatter applies to the magnitude:
    /// `format!("{:.3}", charge.in_unit(&microcoulomb)?)`.
    pub fn in_unit<'a>(&self, target: &'a DerivedUnit) -> Result<Converted<'a>> {
        Ok(Converted {
            magnitude: self.convert_to(target)?,
            target,
        })
    }

    /// Render `self` as `"<magnitude> <derived unit name>"`
    pub fn to_string_in(&self, target: &DerivedUnit) -> Result<String> {
        Ok(self.in_unit(target)?.to_string())
    }
}

impl AsRef<Value> for Value {
    fn as_ref(&self) -> &Value {
        self
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.coefficient, self.unit),
            None => write!(f, "{} {}", self.coefficient, self.unit),
        }
    }
}

/// A value already divided by a target unit's conversion factor
#[derive(Debug, Clone, Copy)]
pub struct Converted<'a> {
    magnitude: Coefficient,
    target: &'a DerivedUnit,
}

impl Converted<'_> {
    pub fn magnitude(&self) -> Coefficient {
        self.magnitude
    }
}

impl fmt::Display for Converted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.magnitude)?,
            None => write!(f, "{}", self.magnitude)?,
        }
        let name = self.target.derived_string();
        if !name.is_empty() {
            write!(f, " {name}")?;
        }
        Ok(())
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        Value::new(-self.coefficient, self.unit.clone())
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        -&self
    }
}

impl Mul<&Value> for &Value {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        Value::new(self.coefficient * rhs.coefficient, &self.unit * &rhs.unit)
    }
}

impl Div<&Value> for &Value {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        Value::new(self.coefficient / rhs.coefficient, &self.unit / &rhs.unit)
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        &self * &rhs
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        &self / &rhs
    }
}

// Plain numbers scale the coefficient and leave the unit alone; dividing a
// number by a value inverts the unit.

impl Mul<f64> for &Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        Value::new(self.coefficient * rhs, self.unit.clone())
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        rhs * self
    }
}

impl Mul<f64> for Value {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        &self * rhs
    }
}

impl Mul<Value> for f64 {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        &rhs * self
    }
}

impl Div<f64> for &Value {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        Value::new(self.coefficient / rhs, self.unit.clone())
    }
}

impl Div<&Value> for f64 {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        Value::new(self / rhs.coefficient, rhs.unit.invert())
    }
}

impl Div<f64> for Value {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        &self / rhs
    }
}

impl Div<Value> for f64 {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        self / &rhs
    }
}

impl Mul<Coefficient> for &Value {
    type Output = Value;

    fn mul(self, rhs: Coefficient) -> Value {
        Value::new(self.coefficient * rhs, self.unit.clone())
    }
}

impl Div<Coefficient> for &Value {
    type Output = Value;

    fn div(self, rhs: Coefficient) -> Value {
        Value::new(self.coefficient / rhs, self.unit.clone())
    }
}

// A prefix applied to a bare quantity is just its power-of-ten factor.

impl Mul<Prefix> for &Value {
    type Output = Value;

    fn mul(self, rhs: Prefix) -> Value {
        self * rhs.factor()
    }
}

impl Mul<&Value> for Prefix {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        rhs * self.factor()
    }
}

impl Div<Prefix> for &Value {
    type Output = Value;

    fn div(self, rhs: Prefix) -> Value {
        self / rhs.factor()
    }
}

impl Div<&Value> for Prefix {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        Value::new(self.factor() / rhs.coefficient, rhs.unit.invert())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::prefix::{KILO, MILLI};
    use crate::types::Dimension;
    use pretty_assertions::assert_eq;

    fn meters(amount: f64) -> Value {
        Value::new(amount, Unit::base(Dimension::Length))
    }

    fn seconds(amount: f64) -> Value {
        Value::new(amount, Unit::base(Dimension::Time))
    }

    #[test]
    fn test_add_same_unit() {
        let sum = meters(3.0).try_add(&meters(4.5)).unwrap();
        assert_eq!(sum, meters(7.5));
        let diff = meters(3.0).try_sub(&meters(4.5)).unwrap();
        assert_eq!(diff, meters(-1.5));
    }

    #[test]
    fn test_add_unit_mismatch() {
        let err = meters(1.0).try_add(&seconds(1.0)).unwrap_err();
        assert!(matches!(err, QuantityError::UnitMismatch { operation: "add", .. }));
        assert!(meters(1.0).try_sub(&seconds(1.0)).is_err());
    }

    #[test]
    fn test_multiply_and_divide_values() {
        let speed = &meters(100.0) / &seconds(10.0);
        assert_eq!(speed.coefficient(), Coefficient::from(10.0));
        assert_eq!(speed.unit().exponent(Dimension::Time), -1);

        let back = &speed * &seconds(10.0);
        assert_eq!(back, meters(100.0));
    }

    #[test]
    fn test_scalar_operands() {
        assert_eq!(&meters(2.0) * 3.0, meters(6.0));
        assert_eq!(3.0 * &meters(2.0), meters(6.0));
        assert_eq!(&meters(6.0) / 4.0, meters(1.5));

        let frequency = 2.0 / &seconds(4.0);
        assert_eq!(frequency.coefficient(), Coefficient::from(0.5));
        assert_eq!(*frequency.unit(), !Unit::base(Dimension::Time));
    }

    #[test]
    fn test_prefix_operands() {
        assert_eq!(&meters(2.0) * KILO, meters(2000.0));
        assert_eq!(KILO * &meters(2.0), meters(2000.0));
        assert_eq!(&meters(2.0) / MILLI, meters(2000.0));

        let per_ms = MILLI / &seconds(1.0);
        assert_eq!(per_ms.coefficient(), Coefficient::from(0.001));
        assert_eq!(per_ms.unit().exponent(Dimension::Time), -1);
    }

    #[test]
    fn test_negate() {
        assert_eq!(-meters(2.0), meters(-2.0));
    }

    #[test]
    fn test_power() {
        let volume = meters(2.0).powi(3);
        assert_eq!(volume.coefficient(), Coefficient::from(8.0));
        assert_eq!(volume.unit().exponent(Dimension::Length), 3);
        assert!(matches!(
            meters(2.0).try_pow(1.5),
            Err(QuantityError::TypeConstraintViolation(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(meters(250.0).to_string(), "2.5 x 10^2 LENGTH");
        assert_eq!(format!("{:.1}", seconds(0.25)), "2.5 x 10^-1 TIME");
        assert_eq!(Value::dimensionless(3).to_string(), "3 x 10^0 unitless");
    }

    #[test]
    fn test_name_then_convert_to_itself() {
        let value = meters(5.0);
        let named = value.name("stride");
        assert_eq!(named.prefix_factor(), Coefficient::ONE);
        assert_eq!(value.convert_to(&named).unwrap(), Coefficient::from(5.0));
        assert_eq!(value.to_string_in(&named).unwrap(), "5 x 10^0 stride");
    }

    #[test]
    fn test_convert_unit_mismatch() {
        let named = meters(1.0).name("meter");
        let err = seconds(1.0).to_string_in(&named).unwrap_err();
        assert!(matches!(err, QuantityError::UnitMismatch { operation: "convert", .. }));
    }
}
