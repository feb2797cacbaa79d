//! Named, optionally prefixed composite units
//!
//! A [`DerivedUnit`] is a [`Value`] that also remembers which named symbols
//! it was built from, e.g. `joule coulomb^-1` before being renamed `volt`.
//! The symbol multiset is an ordered association list: multiplying two units
//! sums multiplicities per symbol, dividing subtracts them, so names cancel
//! exactly when the underlying dimensions do. Both halves are updated in the
//! same step by every operation below.

use std::fmt;
use std::ops::{Div, Mul, Neg};

use super::prefix::UNIT;
use super::{Coefficient, Prefix, Scalar, Unit, Value};
use crate::error::{QuantityError, Result};

/// A unit name together with the prefix attached to it ("micro" + "farad")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub prefix: Prefix,
    pub name: String,
}

impl Symbol {
    pub fn new(prefix: Prefix, name: impl Into<String>) -> Self {
        Self {
            prefix,
            name: name.into(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix.name, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct DerivedUnit {
    value: Value,
    /// Insertion-ordered; multiplicities may be negative or zero
    symbols: Vec<(Symbol, i32)>,
}

impl DerivedUnit {
    /// Name `value` with a single unprefixed symbol
    pub fn new(value: Value, name: impl Into<String>) -> Self {
        Self {
            value,
            symbols: vec![(Symbol::new(UNIT, name), 1)],
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn coefficient(&self) -> Coefficient {
        self.value.coefficient()
    }

    pub fn unit(&self) -> &Unit {
        self.value.unit()
    }

    /// Stored symbols with their multiplicities, zero entries included
    pub fn symbols(&self) -> impl Iterator<Item = (&Symbol, i32)> {
        self.symbols.iter().map(|(s, m)| (s, *m))
    }

    /// Rename this unit, collapsing its symbols into one: `(&joule / &coulomb).name("volt")`
    pub fn name(&self, name: impl Into<String>) -> DerivedUnit {
        self.value.name(name)
    }

    /// Sum with a value or unit of the same dimension; the names are dropped
    pub fn try_add(&self, other: impl AsRef<Value>) -> Result<Value> {
        self.value.try_add(other.as_ref())
    }

    pub fn try_sub(&self, other: impl AsRef<Value>) -> Result<Value> {
        self.value.try_sub(other.as_ref())
    }

    /// `amount` of this unit, e.g. `microfarad.of(6.22)`
    pub fn of(&self, amount: impl Into<Scalar>) -> Value {
        &self.value * amount.into().to_coefficient()
    }

    /// Re-tag the single unprefixed symbol with `prefix` and scale by it.
    ///
    /// A symbol carries at most one SI prefix, so this fails for composite
    /// units and for units whose symbol is already prefixed.
    pub fn with_prefix(&self, prefix: Prefix) -> Result<DerivedUnit> {
        let [(symbol, multiplicity)] = self.symbols.as_slice() else {
            return Err(QuantityError::InvalidPrefixApplication(format!(
                "`{}` is built from {} names, a prefix needs exactly one",
                self.derived_string(),
                self.symbols.len()
            )));
        };
        if !symbol.prefix.is_unit() {
            return Err(QuantityError::InvalidPrefixApplication(format!(
                "`{symbol}` already carries the {} prefix",
                symbol.prefix.name
            )));
        }

        tracing::trace!(prefix = prefix.name, name = %symbol.name, "applying prefix");
        Ok(DerivedUnit {
            value: &self.value * prefix,
            symbols: vec![(Symbol::new(prefix, symbol.name.clone()), *multiplicity)],
        })
    }

    /// Raise value, unit and every symbol multiplicity to the power `n`
    pub fn powi(&self, n: i32) -> DerivedUnit {
        DerivedUnit {
            value: self.value.powi(n),
            symbols: self
                .symbols
                .iter()
                .map(|(s, m)| (s.clone(), m.saturating_mul(n)))
                .collect(),
        }
    }

    /// Like [`powi`](Self::powi), failing on a non-integer exponent or on
    /// exponent overflow
    pub fn try_pow(&self, n: impl Into<Scalar>) -> Result<DerivedUnit> {
        let n = n.into().as_integer()?;
        let value = self.value.try_pow(n)?;
        let symbols = self
            .symbols
            .iter()
            .map(|(s, m)| {
                m.checked_mul(n).map(|m| (s.clone(), m)).ok_or_else(|| {
                    QuantityError::TypeConstraintViolation(format!(
                        "`{s}^{m}` raised to {n} overflows the exponent range"
                    ))
                })
            })
            .collect::<Result<_>>()?;
        Ok(DerivedUnit { value, symbols })
    }

    /// `10^(sum of prefix scale x multiplicity)` over the prefixed symbols.
    ///
    /// This is the factor a value is divided by when rendered in this unit.
    /// Only prefixes contribute: the magnitude of an unprefixed name such
    /// as `mile` is not part of it.
    pub fn prefix_factor(&self) -> Coefficient {
        let exponent = self
            .symbols
            .iter()
            .filter(|(s, _)| !s.prefix.is_unit())
            .fold(0i32, |sum, (s, m)| sum.saturating_add(s.prefix.scale.saturating_mul(*m)));
        Coefficient::new(1.0, exponent)
    }

    /// Space-joined symbols with `^n` suffixes, zero multiplicities skipped
    pub fn derived_string(&self) -> String {
        self.symbols
            .iter()
            .filter(|(_, m)| *m != 0)
            .map(|(symbol, multiplicity)| {
                if *multiplicity == 1 {
                    symbol.to_string()
                } else {
                    format!("{symbol}^{multiplicity}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn merge(&self, other: &DerivedUnit, sign: i32, value: Value) -> DerivedUnit {
        let mut symbols = self.symbols.clone();
        for (symbol, multiplicity) in &other.symbols {
            let delta = sign.saturating_mul(*multiplicity);
            match symbols.iter().position(|(s, _)| s == symbol) {
                Some(i) => symbols[i].1 = symbols[i].1.saturating_add(delta),
                None => symbols.push((symbol.clone(), delta)),
            }
        }
        DerivedUnit { value, symbols }
    }

    fn multiplicity(&self, symbol: &Symbol) -> i32 {
        self.symbols
            .iter()
            .filter(|(s, _)| s == symbol)
            .map(|(_, m)| *m)
            .sum()
    }
}

impl PartialEq for DerivedUnit {
    /// Equal values built from the same symbols, ignoring order and zero entries
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.symbols.iter().all(|(s, _)| self.multiplicity(s) == other.multiplicity(s))
            && other.symbols.iter().all(|(s, _)| self.multiplicity(s) == other.multiplicity(s))
    }
}

impl fmt::Display for DerivedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.derived_string())
    }
}

impl AsRef<Value> for DerivedUnit {
    fn as_ref(&self) -> &Value {
        &self.value
    }
}

impl From<DerivedUnit> for Value {
    fn from(unit: DerivedUnit) -> Self {
        unit.value
    }
}

impl Mul<&DerivedUnit> for &DerivedUnit {
    type Output = DerivedUnit;

    fn mul(self, rhs: &DerivedUnit) -> DerivedUnit {
        self.merge(rhs, 1, &self.value * &rhs.value)
    }
}

impl Div<&DerivedUnit> for &DerivedUnit {
    type Output = DerivedUnit;

    fn div(self, rhs: &DerivedUnit) -> DerivedUnit {
        self.merge(rhs, -1, &self.value / &rhs.value)
    }
}

impl Mul for DerivedUnit {
    type Output = DerivedUnit;

    fn mul(self, rhs: DerivedUnit) -> DerivedUnit {
        &self * &rhs
    }
}

impl Div for DerivedUnit {
    type Output = DerivedUnit;

    fn div(self, rhs: DerivedUnit) -> DerivedUnit {
        &self / &rhs
    }
}

impl Mul<&DerivedUnit> for Prefix {
    type Output = Result<DerivedUnit>;

    fn mul(self, rhs: &DerivedUnit) -> Result<DerivedUnit> {
        rhs.with_prefix(self)
    }
}

// Mixing with anything other than another derived unit drops the names and
// falls back to plain value arithmetic.

impl Mul<f64> for &DerivedUnit {
    type Output = Value;

    fn mul(self, rhs: f64) -> Value {
        &self.value * rhs
    }
}

impl Mul<&DerivedUnit> for f64 {
    type Output = Value;

    fn mul(self, rhs: &DerivedUnit) -> Value {
        &rhs.value * self
    }
}

impl Div<f64> for &DerivedUnit {
    type Output = Value;

    fn div(self, rhs: f64) -> Value {
        &self.value / rhs
    }
}

impl Div<&DerivedUnit> for f64 {
    type Output = Value;

    fn div(self, rhs: &DerivedUnit) -> Value {
        self / &rhs.value
    }
}

impl Div<&DerivedUnit> for Prefix {
    type Output = Value;

    fn div(self, rhs: &DerivedUnit) -> Value {
        self / &rhs.value
    }
}

impl Mul<Coefficient> for &DerivedUnit {
    type Output = Value;

    fn mul(self, rhs: Coefficient) -> Value {
        &self.value * rhs
    }
}

impl Div<Coefficient> for &DerivedUnit {
    type Output = Value;

    fn div(self, rhs: Coefficient) -> Value {
        &self.value / rhs
    }
}

impl Mul<Prefix> for &DerivedUnit {
    type Output = Value;

    fn mul(self, rhs: Prefix) -> Value {
        &self.value * rhs
    }
}

impl Div<Prefix> for &DerivedUnit {
    type Output = Value;

    fn div(self, rhs: Prefix) -> Value {
        &self.value / rhs
    }
}

impl Mul<&Value> for &DerivedUnit {
    type Output = Value;

    fn mul(self, rhs: &Value) -> Value {
        &self.value * rhs
    }
}

impl Mul<&DerivedUnit> for &Value {
    type Output = Value;

    fn mul(self, rhs: &DerivedUnit) -> Value {
        self * &rhs.value
    }
}

impl Div<&Value> for &DerivedUnit {
    type Output = Value;

    fn div(self, rhs: &Value) -> Value {
        &self.value / rhs
    }
}

impl Div<&DerivedUnit> for &Value {
    type Output = Value;

    fn div(self, rhs: &DerivedUnit) -> Value {
        self / &rhs.value
    }
}

impl Neg for &DerivedUnit {
    type Output = Value;

    fn neg(self) -> Value {
        -&self.value
    }
}
