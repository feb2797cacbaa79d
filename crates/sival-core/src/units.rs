//! Named unit constants
//!
//! Base magnitudes are coherent SI: one of each base-dimension unit has a
//! coefficient of one, except for mass where the kilogram is the base and
//! the gram is `1 x 10^-3`. Every prefixed coherent unit built from these
//! therefore has a magnitude equal to its prefix factor. Rendering divides
//! by the prefix factor alone, so `GRAM` and `MILE` display base-unit
//! magnitudes.

use std::sync::LazyLock;

use crate::types::prefix::KILO;
use crate::types::{DerivedUnit, Dimension, Unit, Value};

fn base(dimension: Dimension, magnitude: f64, name: &str) -> DerivedUnit {
    Value::new(magnitude, Unit::base(dimension)).name(name)
}

pub static SECOND: LazyLock<DerivedUnit> = LazyLock::new(|| base(Dimension::Time, 1.0, "second"));
pub static METER: LazyLock<DerivedUnit> = LazyLock::new(|| base(Dimension::Length, 1.0, "meter"));
pub static GRAM: LazyLock<DerivedUnit> = LazyLock::new(|| base(Dimension::Mass, 1e-3, "gram"));
pub static AMPERE: LazyLock<DerivedUnit> = LazyLock::new(|| base(Dimension::Current, 1.0, "ampere"));

pub static KILOGRAM: LazyLock<DerivedUnit> = LazyLock::new(|| {
    GRAM.with_prefix(KILO)
        .expect("gram is a single unprefixed symbol")
});

/// International mile
pub static MILE: LazyLock<DerivedUnit> = LazyLock::new(|| (&*METER * 1609.344).name("mile"));

pub static NEWTON: LazyLock<DerivedUnit> =
    LazyLock::new(|| (&(&*KILOGRAM * &*METER) / &SECOND.powi(2)).name("newton"));
pub static JOULE: LazyLock<DerivedUnit> = LazyLock::new(|| (&*NEWTON * &*METER).name("joule"));
pub static COULOMB: LazyLock<DerivedUnit> =
    LazyLock::new(|| (&*AMPERE * &*SECOND).name("coulomb"));
pub static VOLT: LazyLock<DerivedUnit> = LazyLock::new(|| (&*JOULE / &*COULOMB).name("volt"));
pub static FARAD: LazyLock<DerivedUnit> = LazyLock::new(|| (&*COULOMB / &*VOLT).name("farad"));

/// Every named constant, base units first
pub fn all() -> [&'static DerivedUnit; 11] {
    [
        &*SECOND, &*METER, &*GRAM, &*AMPERE, &*KILOGRAM, &*MILE, &*NEWTON, &*JOULE, &*COULOMB,
        &*VOLT, &*FARAD,
    ]
}
