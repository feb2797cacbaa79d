//! Errors raised by quantity arithmetic

use thiserror::Error;

use crate::types::Unit;

/// Precondition failures of the quantity algebra.
///
/// Arithmetic is otherwise total, so every error aborts the expression
/// being evaluated and is handed straight back to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    /// Add, subtract or convert between values whose units differ
    #[error("cannot {operation} `{left}` and `{right}`: units differ")]
    UnitMismatch {
        operation: &'static str,
        left: Unit,
        right: Unit,
    },

    /// An operand outside the accepted set (e.g. a fractional exponent)
    #[error("type constraint violated: {0}")]
    TypeConstraintViolation(String),

    /// A prefix applied to a composite or already-prefixed unit
    #[error("invalid prefix application: {0}")]
    InvalidPrefixApplication(String),
}

impl QuantityError {
    pub(crate) fn unit_mismatch(operation: &'static str, left: &Unit, right: &Unit) -> Self {
        QuantityError::UnitMismatch {
            operation,
            left: left.clone(),
            right: right.clone(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QuantityError>;
