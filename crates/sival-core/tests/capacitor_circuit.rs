//! Series/parallel capacitor network charged from a fixed voltage

use pretty_assertions::assert_eq;
use sival_core::prefix::MICRO;
use sival_core::units::{COULOMB, FARAD, VOLT};
use sival_core::{DerivedUnit, Value};

fn microfarad() -> DerivedUnit {
    (MICRO * &*FARAD).unwrap()
}

fn microcoulomb() -> DerivedUnit {
    (MICRO * &*COULOMB).unwrap()
}

fn series(a: &Value, b: &Value) -> Value {
    1.0 / &(1.0 / a).try_add(&(1.0 / b)).unwrap()
}

fn approx(value: f64, expected: f64) -> bool {
    (value - expected).abs() <= expected.abs() * 1e-9
}

#[test]
fn test_series_capacitance() {
    let mf = microfarad();
    let a1 = 6.22 * &mf;
    let a2 = 6.0 * &mf;

    let b1 = series(&a1, &a2);
    let expected = 1.0 / (1.0 / 6.22 + 1.0 / 6.0);
    assert!(approx(b1.convert_to(&mf).unwrap().to_f64(), expected));
    assert_eq!(format!("{:.4}", b1.in_unit(&mf).unwrap()), "3.0540 x 10^0 microfarad");
    assert_eq!(b1.unit(), FARAD.unit());
}

#[test]
fn test_parallel_sum() {
    let mf = microfarad();
    let b1 = series(&(6.22 * &mf), &(6.0 * &mf));
    let b2 = series(&(2.0 * &mf), &(8.54 * &mf));
    let c = b1.try_add(&b2).unwrap();

    let expected = 1.0 / (1.0 / 6.22 + 1.0 / 6.0) + 1.0 / (1.0 / 2.0 + 1.0 / 8.54);
    assert!(approx(c.convert_to(&mf).unwrap().to_f64(), expected));
}

#[test]
fn test_charge_in_microcoulombs() {
    let mf = microfarad();
    let b1 = series(&(6.22 * &mf), &(6.0 * &mf));
    let voltage = 90.0 * &*VOLT;

    let charge = &b1 * &voltage;
    assert_eq!(charge.unit(), COULOMB.unit());

    let b1_in_farads = b1.convert_to(&FARAD).unwrap().to_f64();
    let expected = b1_in_farads * 90.0 * 1e6;
    assert!(approx(charge.convert_to(&microcoulomb()).unwrap().to_f64(), expected));
    assert!((expected - 274.861).abs() < 1e-3, "{expected}");
}

#[test]
fn test_charge_is_not_a_capacitance() {
    let mf = microfarad();
    let charge = &(6.0 * &mf) * &(90.0 * &*VOLT);
    assert!(charge.to_string_in(&mf).is_err());
    assert!(charge.try_add(&(1.0 * &mf)).is_err());
}
