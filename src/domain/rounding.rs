//! Rounding modes for mapping exact products and quotients back to whole
//! monetary units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The rounding policy applied by [`Money::multiply`] and [`Money::divide`].
///
/// All four modes are recognized, but only `HalfUp` and `HalfDown` are
/// implemented; requesting `HalfEven` or `HalfOdd` fails with
/// [`DomainError::UnimplementedRounding`] rather than falling back.
///
/// [`Money::multiply`]: super::Money::multiply
/// [`Money::divide`]: super::Money::divide
/// [`DomainError::UnimplementedRounding`]: crate::error::DomainError::UnimplementedRounding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    #[default]
    HalfUp,
    HalfDown,
    HalfEven,
    HalfOdd,
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::HalfUp => write!(f, "HALF_UP"),
            RoundingMode::HalfDown => write!(f, "HALF_DOWN"),
            RoundingMode::HalfEven => write!(f, "HALF_EVEN"),
            RoundingMode::HalfOdd => write!(f, "HALF_ODD"),
        }
    }
}
