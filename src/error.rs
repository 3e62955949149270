//! Error types for monetary operations.

use crate::domain::{Currency, RoundingMode};

/// Domain-level errors (business rule violations).
///
/// Every operation in this crate is pure and deterministic, so a failed
/// call fails identically on retry unless its inputs change.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    #[error("Amount is not a whole number of units: {0}")]
    NonIntegralAmount(String),

    #[error("Malformed amount string: {0:?}")]
    InvalidAmountString(String),

    #[error("Invalid numeric operand: {0}")]
    InvalidOperand(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Ratio list must not be empty")]
    EmptyRatios,

    #[error("Ratios must sum to a positive value")]
    ZeroRatioSum,

    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),

    #[error("Rounding mode {0} is not implemented")]
    UnimplementedRounding(RoundingMode),
}
