//! # Money Types
//!
//! Currency-safe monetary values with exact decimal arithmetic.
//! This crate has ZERO external IO dependencies - only value types
//! and the business rules that govern them.
//!
//! ## Contents
//!
//! - `domain/` - Pure value types (Money, Currency, RoundingMode) and the
//!   minor-unit string parser
//! - `error/` - Domain error types
//!
//! Every operation is a pure function: operands are never mutated, results
//! are always new values, and mixing currencies is an error rather than a
//! silent coercion.

pub mod domain;
pub mod error;

// Re-export commonly used types
pub use domain::{Currency, Money, Operand, RoundingMode, string_to_units};
pub use error::DomainError;
