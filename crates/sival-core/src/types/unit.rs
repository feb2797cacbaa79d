//! Dimensional signatures
//!
//! A [`Unit`] is a sparse vector of integer exponents over [`Dimension`].
//! Under multiplication units form a free abelian group: `*` adds exponents,
//! `/` subtracts them, `!` negates them and `powi` scales them. A dimension
//! whose exponent reaches zero is dropped, so two units are equal exactly
//! when their stored maps are.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Div, Mul, Not};

use super::{Dimension, Prefix, Scalar};
use crate::error::{QuantityError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Unit {
    exponents: BTreeMap<Dimension, i32>,
}

impl Unit {
    /// Build a unit from `(dimension, exponent)` pairs, summing repeats and
    /// dropping zero exponents
    pub fn new(exponents: impl IntoIterator<Item = (Dimension, i32)>) -> Self {
        let mut unit = Unit::dimensionless();
        for (dimension, exponent) in exponents {
            unit.accumulate(dimension, exponent);
        }
        unit
    }

    /// The empty signature of a pure number
    pub fn dimensionless() -> Self {
        Self {
            exponents: BTreeMap::new(),
        }
    }

    /// A single dimension to the first power
    pub fn base(dimension: Dimension) -> Self {
        Unit::new([(dimension, 1)])
    }

    /// Exponent of `dimension`, zero when absent
    pub fn exponent(&self, dimension: Dimension) -> i32 {
        self.exponents.get(&dimension).copied().unwrap_or(0)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Stored `(dimension, exponent)` pairs in rendering order
    pub fn dimensions(&self) -> impl Iterator<Item = (Dimension, i32)> + '_ {
        self.exponents.iter().map(|(d, e)| (*d, *e))
    }

    fn accumulate(&mut self, dimension: Dimension, exponent: i32) {
        let sum = self.exponent(dimension).saturating_add(exponent);
        if sum == 0 {
            self.exponents.remove(&dimension);
        } else {
            self.exponents.insert(dimension, sum);
        }
    }

    /// Scale every exponent by `n`, saturating at the `i32` bounds.
    /// [`try_pow`](Self::try_pow) reports overflow instead.
    pub fn powi(&self, n: i32) -> Unit {
        if n == 0 {
            return Unit::dimensionless();
        }
        Unit {
            exponents: self.exponents.iter().map(|(d, e)| (*d, e.saturating_mul(n))).collect(),
        }
    }

    /// Like [`powi`](Self::powi), failing on a non-integer exponent or on
    /// one that overflows a dimension's exponent
    pub fn try_pow(&self, n: impl Into<Scalar>) -> Result<Unit> {
        let n = n.into().as_integer()?;
        if n == 0 {
            return Ok(Unit::dimensionless());
        }
        let exponents = self
            .exponents
            .iter()
            .map(|(d, e)| {
                e.checked_mul(n).map(|e| (*d, e)).ok_or_else(|| {
                    QuantityError::TypeConstraintViolation(format!(
                        "{d}^{e} raised to {n} overflows the exponent range"
                    ))
                })
            })
            .collect::<Result<_>>()?;
        Ok(Unit { exponents })
    }

    /// Negate every exponent (`unit ** -1`)
    pub fn invert(&self) -> Unit {
        self.powi(-1)
    }

    /// Render with each dimension annotated by a prefix name, e.g. `kiloLENGTH`
    pub fn to_string_with(&self, prefixes: &BTreeMap<Dimension, Prefix>) -> String {
        self.render(|dimension| prefixes.get(&dimension).map_or("", |p| p.name))
    }

    fn render<'a>(&self, prefix_name: impl Fn(Dimension) -> &'a str) -> String {
        if self.is_dimensionless() {
            return "unitless".to_string();
        }
        self.dimensions()
            .map(|(dimension, exponent)| {
                let name = format!("{}{}", prefix_name(dimension), dimension);
                if exponent == 1 {
                    name
                } else {
                    format!("{name}^{exponent}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(|_| ""))
    }
}

impl Mul<&Unit> for &Unit {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        let mut product = self.clone();
        for (dimension, exponent) in rhs.dimensions() {
            product.accumulate(dimension, exponent);
        }
        product
    }
}

impl Div<&Unit> for &Unit {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        let mut quotient = self.clone();
        for (dimension, exponent) in rhs.dimensions() {
            quotient.accumulate(dimension, -exponent);
        }
        quotient
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        &self * &rhs
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        &self / &rhs
    }
}

impl Not for &Unit {
    type Output = Unit;

    fn not(self) -> Unit {
        self.invert()
    }
}

impl Not for Unit {
    type Output = Unit;

    fn not(self) -> Unit {
        self.invert()
    }
}
