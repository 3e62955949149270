//! Currency-safe monetary value with exact decimal arithmetic.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::rounding::RoundingMode;
use crate::error::DomainError;

/// A numeric scalar accepted by [`Money::multiply`] and [`Money::divide`].
///
/// `Integer` and `Decimal` convert exactly. `Float` goes through
/// [`Decimal::from_f64`]; non-finite values are rejected, and a binary
/// float that cannot represent the intended decimal exactly is a caller
/// hazard, not something this type can detect.
#[derive(Debug, Clone, Copy)]
pub enum Operand {
    Integer(i64),
    Decimal(Decimal),
    Float(f64),
}

impl Operand {
    fn into_decimal(self) -> Result<Decimal, DomainError> {
        match self {
            Operand::Integer(n) => Ok(Decimal::from(n)),
            Operand::Decimal(d) => Ok(d),
            Operand::Float(x) => Decimal::from_f64(x).ok_or_else(|| {
                DomainError::InvalidOperand(format!("{x} is not representable as a decimal"))
            }),
        }
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Integer(n)
    }
}

impl From<Decimal> for Operand {
    fn from(d: Decimal) -> Self {
        Operand::Decimal(d)
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Float(x)
    }
}

/// An immutable monetary amount paired with a currency.
///
/// The amount is a count of caller-defined units held as an exact decimal;
/// the type does not assume "cents" or any other scale. Every operation is
/// pure: operands are never mutated and results are new values. Binary
/// operations between different currencies fail with
/// [`DomainError::CurrencyMismatch`] instead of coercing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a Money value from a whole number of units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::from(amount),
            currency,
        }
    }

    /// Creates a Money value from a currency code and a whole number of
    /// units, resolving the code at the call site.
    pub fn of(code: &str, amount: i64) -> Self {
        Self::new(amount, Currency::new(code))
    }

    /// Creates a zero-value Money for the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Parses a decimal-formatted string into a Money value, scaling by the
    /// currency's minor-unit exponent (`"1.23"` in EUR becomes 123 units).
    ///
    /// Fails with [`DomainError::NonIntegralAmount`] if a fractional
    /// remainder survives the scaling, e.g. `"1.234"` in a two-digit
    /// currency.
    pub fn from_decimal_str(value: &str, currency: Currency) -> Result<Self, DomainError> {
        let parsed: Decimal = value
            .parse()
            .map_err(|_| DomainError::InvalidAmountString(value.to_string()))?;
        let exponent = Decimal::from(10_i64.pow(currency.minor_unit_digits()));
        let scaled = parsed
            .checked_mul(exponent)
            .ok_or_else(|| DomainError::AmountOutOfRange(value.to_string()))?;
        if !scaled.fract().is_zero() {
            return Err(DomainError::NonIntegralAmount(value.to_string()));
        }
        Ok(Self {
            amount: scaled.normalize(),
            currency,
        })
    }

    /// Creates a Money value from a floating-point number of units.
    ///
    /// Only values with a zero fractional part are accepted. Note that a
    /// binary float above 2^53 cannot represent every integer; callers
    /// feeding large magnitudes through this constructor own that hazard.
    pub fn from_f64(value: f64, currency: Currency) -> Result<Self, DomainError> {
        let amount = Decimal::from_f64(value).ok_or_else(|| {
            DomainError::InvalidOperand(format!("{value} is not representable as a decimal"))
        })?;
        if !amount.fract().is_zero() {
            return Err(DomainError::NonIntegralAmount(value.to_string()));
        }
        Ok(Self {
            amount: amount.normalize(),
            currency,
        })
    }

    /// Returns the amount in units.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if both values carry the same currency.
    pub fn is_same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    /// Compares two same-currency amounts by exact decimal ordering.
    pub fn compare(&self, other: &Money) -> Result<Ordering, DomainError> {
        self.require_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn greater_than(&self, other: &Money) -> Result<bool, DomainError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn greater_than_or_equal(&self, other: &Money) -> Result<bool, DomainError> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    pub fn less_than(&self, other: &Money) -> Result<bool, DomainError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Money) -> Result<bool, DomainError> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Checked addition - returns an error if currencies don't match.
    pub fn checked_add(&self, other: &Money) -> Result<Money, DomainError> {
        self.require_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::AmountOutOfRange(format!("{} + {}", self, other)))?;
        Ok(self.with_amount(amount))
    }

    /// Checked subtraction - returns an error if currencies don't match.
    pub fn checked_sub(&self, other: &Money) -> Result<Money, DomainError> {
        self.require_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| DomainError::AmountOutOfRange(format!("{} - {}", self, other)))?;
        Ok(self.with_amount(amount))
    }

    /// Returns the amount with its sign flipped.
    pub fn negate(&self) -> Money {
        self.with_amount(-self.amount)
    }

    /// Returns the absolute value of the amount.
    pub fn abs(&self) -> Money {
        self.with_amount(self.amount.abs())
    }

    /// Multiplies by a scalar factor, then rounds the exact product to a
    /// whole number of units.
    ///
    /// `HalfUp` takes the ceiling of the exact product, `HalfDown` the
    /// floor. `HalfEven` and `HalfOdd` are recognized but fail with
    /// [`DomainError::UnimplementedRounding`].
    pub fn multiply<F>(&self, factor: F, mode: RoundingMode) -> Result<Money, DomainError>
    where
        F: Into<Operand>,
    {
        let factor = factor.into().into_decimal()?;
        let product = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| DomainError::AmountOutOfRange(format!("{} * {}", self, factor)))?;
        let rounded = match mode {
            RoundingMode::HalfUp => product.ceil(),
            RoundingMode::HalfDown => product.floor(),
            RoundingMode::HalfEven | RoundingMode::HalfOdd => {
                return Err(DomainError::UnimplementedRounding(mode));
            }
        };
        Ok(self.with_amount(rounded))
    }

    /// Divides by a scalar divisor, then rounds the quotient to a whole
    /// number of units.
    ///
    /// The midpoint test compares the magnitude of the quotient's
    /// fractional part against 0.5; negative quotients round by the same
    /// magnitude rule. `HalfEven` and `HalfOdd` are recognized but fail
    /// with [`DomainError::UnimplementedRounding`].
    pub fn divide<F>(&self, divisor: F, mode: RoundingMode) -> Result<Money, DomainError>
    where
        F: Into<Operand>,
    {
        let divisor = divisor.into().into_decimal()?;
        if divisor.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        let quotient = self
            .amount
            .checked_div(divisor)
            .ok_or_else(|| DomainError::AmountOutOfRange(format!("{} / {}", self, divisor)))?;
        let fraction = quotient.abs().fract();
        let rounded = match mode {
            RoundingMode::HalfUp => {
                if fraction > dec!(0.5) {
                    quotient.ceil()
                } else {
                    quotient.floor()
                }
            }
            RoundingMode::HalfDown => {
                if fraction < dec!(0.5) {
                    quotient.ceil()
                } else {
                    quotient.floor()
                }
            }
            RoundingMode::HalfEven | RoundingMode::HalfOdd => {
                return Err(DomainError::UnimplementedRounding(mode));
            }
        };
        Ok(self.with_amount(rounded))
    }

    /// Distributes the amount into parts proportional to `ratios`, in ratio
    /// order, with the parts summing exactly to the amount.
    ///
    /// Each part starts at `floor(amount * ratio / total)`; the remainder
    /// is then handed out one whole unit at a time starting at index 0.
    /// Flooring loses less than one unit per part, so the remainder never
    /// reaches `ratios.len()` and the hand-out never wraps.
    pub fn allocate(&self, ratios: &[u32]) -> Result<Vec<Money>, DomainError> {
        if ratios.is_empty() {
            return Err(DomainError::EmptyRatios);
        }
        let total: u64 = ratios.iter().map(|&r| u64::from(r)).sum();
        if total == 0 {
            return Err(DomainError::ZeroRatioSum);
        }
        let total = Decimal::from(total);

        let mut parts = Vec::with_capacity(ratios.len());
        let mut allocated = Decimal::ZERO;
        for &ratio in ratios {
            let share = self
                .amount
                .checked_mul(Decimal::from(ratio))
                .and_then(|scaled| scaled.checked_div(total))
                .ok_or_else(|| DomainError::AmountOutOfRange(format!("{} * {}", self, ratio)))?
                .floor();
            allocated += share;
            parts.push(self.with_amount(share));
        }

        let mut remainder = self.amount - allocated;
        for part in parts.iter_mut() {
            if remainder <= Decimal::ZERO {
                break;
            }
            part.amount += Decimal::ONE;
            remainder -= Decimal::ONE;
        }
        Ok(parts)
    }

    /// Splits the amount into `targets` equal parts, earlier parts taking
    /// the remainder.
    pub fn allocate_to(&self, targets: u32) -> Result<Vec<Money>, DomainError> {
        self.allocate(&vec![1; targets as usize])
    }

    fn require_same_currency(&self, other: &Money) -> Result<(), DomainError> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                expected: self.currency.clone(),
                got: other.currency.clone(),
            });
        }
        Ok(())
    }

    fn with_amount(&self, amount: Decimal) -> Money {
        Money {
            amount,
            currency: self.currency.clone(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
