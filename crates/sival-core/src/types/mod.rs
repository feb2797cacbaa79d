//! Value types for sival quantity arithmetic

mod coefficient;
mod derived;
mod dimension;
pub mod prefix;
mod unit;
mod value;

pub use coefficient::{Coefficient, Scalar};
pub use derived::{DerivedUnit, Symbol};
pub use dimension::Dimension;
pub use prefix::{Prefix, PREFIXES};
pub use unit::Unit;
pub use value::{Converted, Value};
