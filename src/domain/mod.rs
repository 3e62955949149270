//! Domain models for currency-safe monetary arithmetic.

pub mod currency;
pub mod money;
pub mod parse;
pub mod rounding;

pub use currency::Currency;
pub use money::{Money, Operand};
pub use parse::string_to_units;
pub use rounding::RoundingMode;
