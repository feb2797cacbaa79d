//! Base physical dimensions

use std::fmt;

/// The base quantities a [`Unit`](super::Unit) carries exponents for.
///
/// Declaration order is the rendering order of composite units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Time,
    Length,
    Mass,
    Current,
}

impl Dimension {
    /// Every dimension, in rendering order
    pub const ALL: [Dimension; 4] = [
        Dimension::Time,
        Dimension::Length,
        Dimension::Mass,
        Dimension::Current,
    ];

    /// Upper-case name used when rendering a unit signature
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Time => "TIME",
            Dimension::Length => "LENGTH",
            Dimension::Mass => "MASS",
            Dimension::Current => "CURRENT",
        }
    }

    /// Conventional dimension symbol (T, L, M, I)
    pub fn symbol(&self) -> &'static str {
        match self {
            Dimension::Time => "T",
            Dimension::Length => "L",
            Dimension::Mass => "M",
            Dimension::Current => "I",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
