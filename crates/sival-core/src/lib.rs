//! sival-core: dimensioned quantities with checked units
//!
//! Quantities are built from named base units, combined with ordinary
//! arithmetic and rendered in any named, SI-prefixed unit of the same
//! dimension. Numbers are stored as normalized scientific notation
//! ([`Coefficient`]); dimensions as integer exponent vectors ([`Unit`]).
//! There is no I/O and no shared mutable state, so every type here can be
//! used from any thread.
//!
//! # Example
//!
//! ```
//! use sival_core::prefix::MICRO;
//! use sival_core::units::{FARAD, VOLT, COULOMB};
//!
//! let microfarad = FARAD.with_prefix(MICRO)?;
//! let a1 = 6.22 * &microfarad;
//! let a2 = 6.0 * &microfarad;
//!
//! // Two capacitors in series
//! let series = 1.0 / &(1.0 / &a1).try_add(&(1.0 / &a2))?;
//! assert_eq!(format!("{:.3}", series.in_unit(&microfarad)?), "3.054 x 10^0 microfarad");
//!
//! // Charge at 90 V, in microcoulombs
//! let charge = &series * &VOLT.of(90.0);
//! let microcoulomb = COULOMB.with_prefix(MICRO)?;
//! assert_eq!(format!("{:.2}", charge.in_unit(&microcoulomb)?), "2.75 x 10^2 microcoulomb");
//!
//! // Units are checked
//! assert!(a1.try_add(&charge).is_err());
//! # Ok::<(), sival_core::QuantityError>(())
//! ```

pub mod error;
pub mod types;
pub mod units;

pub use error::{QuantityError, Result};
pub use types::prefix;
pub use types::{
    Coefficient, Converted, DerivedUnit, Dimension, Prefix, Scalar, Symbol, Unit, Value, PREFIXES,
};
