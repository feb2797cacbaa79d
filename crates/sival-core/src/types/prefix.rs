//! SI decimal prefixes
//!
//! The registry is a plain static table: it is built at compile time, never
//! mutated, and can be shared across threads freely. Lookups scan it the same
//! way regardless of which key is used.

use std::fmt;

use super::Coefficient;

/// A named power-of-ten scale factor (kilo = 10^3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    /// Long name, prepended to unit names when rendering ("kilo")
    pub name: &'static str,
    /// Power of ten this prefix scales by
    pub scale: i32,
    /// Short display symbol ("k")
    pub symbol: &'static str,
}

pub const QUETTA: Prefix = Prefix::new("quetta", 30, "Q");
pub const RONNA: Prefix = Prefix::new("ronna", 27, "R");
pub const YOTTA: Prefix = Prefix::new("yotta", 24, "Y");
pub const ZETTA: Prefix = Prefix::new("zetta", 21, "Z");
pub const EXA: Prefix = Prefix::new("exa", 18, "E");
pub const PETA: Prefix = Prefix::new("peta", 15, "P");
pub const TERA: Prefix = Prefix::new("tera", 12, "T");
pub const GIGA: Prefix = Prefix::new("giga", 9, "G");
pub const MEGA: Prefix = Prefix::new("mega", 6, "M");
pub const KILO: Prefix = Prefix::new("kilo", 3, "k");
pub const HECTO: Prefix = Prefix::new("hecto", 2, "h");
pub const DECA: Prefix = Prefix::new("deca", 1, "da");
/// The zero-scale prefix carried by unprefixed unit names
pub const UNIT: Prefix = Prefix::new("", 0, "");
pub const DECI: Prefix = Prefix::new("deci", -1, "d");
pub const CENTI: Prefix = Prefix::new("centi", -2, "c");
pub const MILLI: Prefix = Prefix::new("milli", -3, "m");
pub const MICRO: Prefix = Prefix::new("micro", -6, "µ");
pub const NANO: Prefix = Prefix::new("nano", -9, "n");
pub const PICO: Prefix = Prefix::new("pico", -12, "p");
pub const FEMTO: Prefix = Prefix::new("femto", -15, "f");
pub const ATTO: Prefix = Prefix::new("atto", -18, "a");
pub const ZEPTO: Prefix = Prefix::new("zepto", -21, "z");
pub const YOCTO: Prefix = Prefix::new("yocto", -24, "y");
pub const RONTO: Prefix = Prefix::new("ronto", -27, "r");
pub const QUECTO: Prefix = Prefix::new("quecto", -30, "q");

/// Complete prefix ladder, largest scale first.
/// To add a prefix: declare the constant above and list it here.
pub static PREFIXES: &[Prefix] = &[
    QUETTA, RONNA, YOTTA, ZETTA, EXA, PETA, TERA, GIGA, MEGA, KILO, HECTO, DECA, UNIT, DECI,
    CENTI, MILLI, MICRO, NANO, PICO, FEMTO, ATTO, ZEPTO, YOCTO, RONTO, QUECTO,
];

impl Prefix {
    pub const fn new(name: &'static str, scale: i32, symbol: &'static str) -> Self {
        Self {
            name,
            scale,
            symbol,
        }
    }

    /// Find the registered prefix for a power of ten
    pub fn from_scale(scale: i32) -> Option<Prefix> {
        PREFIXES.iter().find(|p| p.scale == scale).copied()
    }

    /// Find a registered prefix by its long name ("micro")
    pub fn from_name(name: &str) -> Option<Prefix> {
        PREFIXES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// Iterator over the registry
    pub fn all() -> impl Iterator<Item = Prefix> {
        PREFIXES.iter().copied()
    }

    /// Whether this is the zero-scale [`UNIT`] prefix
    pub fn is_unit(&self) -> bool {
        self.scale == 0
    }

    /// The scale factor as a coefficient, `1 x 10^scale`
    pub fn factor(&self) -> Coefficient {
        Coefficient::new(1.0, self.scale)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
