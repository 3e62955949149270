//! Currency identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque currency code in the ISO 4217 style (e.g. `"EUR"`).
///
/// Equality is value equality on the code. Two amounts carry the same
/// currency iff their codes compare equal; no ordering or conversion is
/// defined across currencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the currency code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Returns the number of minor-unit digits for this currency
    /// (the ISO 4217 exponent). Unknown codes default to 2.
    pub fn minor_unit_digits(&self) -> u32 {
        match self.0.as_str() {
            "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF"
            | "UGX" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
            "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
