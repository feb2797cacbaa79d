//! Series/parallel capacitor network
//!
//! Each pair is two capacitors in series, `1 / (1/a + 1/b)`; the pairs are
//! wired in parallel across the supply. Both capacitors of a series pair hold
//! the pair's charge.

use sival_core::prefix::MICRO;
use sival_core::units::{COULOMB, FARAD, VOLT};
use sival_core::{DerivedUnit, Result, Value};

/// Capacitances (µF) of the network the tool charges when no pair is given
pub const DEFAULT_PAIRS: [(f64, f64); 2] = [(6.22, 6.0), (2.0, 8.54)];

pub fn parse_pair(s: &str) -> std::result::Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two capacitances `A,B`, got `{s}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid capacitance `{part}`: {e}"))
    };
    Ok((parse(a)?, parse(b)?))
}

/// Capacitances and charges of a charged network
#[derive(Debug)]
pub struct Report {
    microfarad: DerivedUnit,
    microcoulomb: DerivedUnit,
    pairs: Vec<Value>,
    total: Value,
    charges: Vec<Value>,
}

fn series(a: &Value, b: &Value) -> Result<Value> {
    Ok(1.0 / &(1.0 / a).try_add(&(1.0 / b))?)
}

pub fn charge(voltage: f64, pairs: &[(f64, f64)]) -> Result<Report> {
    let microfarad = (MICRO * &*FARAD)?;
    let microcoulomb = (MICRO * &*COULOMB)?;
    let supply = voltage * &*VOLT;

    let mut capacitances = Vec::with_capacity(pairs.len());
    for (i, (a, b)) in pairs.iter().enumerate() {
        let capacitance = series(&microfarad.of(*a), &microfarad.of(*b))?;
        tracing::debug!(pair = i + 1, capacitance = %capacitance, "reduced series pair");
        capacitances.push(capacitance);
    }

    let mut total = Value::new(0.0, FARAD.unit().clone());
    for capacitance in &capacitances {
        total = total.try_add(capacitance)?;
    }

    let charges = capacitances.iter().map(|c| c * &supply).collect();

    Ok(Report {
        microfarad,
        microcoulomb,
        pairs: capacitances,
        total,
        charges,
    })
}

impl Report {
    pub fn pairs(&self) -> &[Value] {
        &self.pairs
    }

    pub fn total(&self) -> &Value {
        &self.total
    }

    pub fn charges(&self) -> &[Value] {
        &self.charges
    }

    /// Human-readable summary, capacitances in µF and charges in µC
    pub fn lines(&self, precision: usize) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for (i, pair) in self.pairs.iter().enumerate() {
            lines.push(format!("C{}: {:.*}", i + 1, precision, pair.in_unit(&self.microfarad)?));
        }
        lines.push(format!("total: {:.*}", precision, self.total.in_unit(&self.microfarad)?));
        for (i, charge) in self.charges.iter().enumerate() {
            let charge = charge.in_unit(&self.microcoulomb)?;
            lines.push(format!("Q{}a: {:.*}", i + 1, precision, charge));
            lines.push(format!("Q{}b: {:.*}", i + 1, precision, charge));
        }
        Ok(lines)
    }
}
