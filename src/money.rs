//! Monetary amounts in whole cents.
//!
//! Amounts never carry more than two decimal places. Text with finer
//! precision is rejected rather than rounded, so the amount a client asks
//! for is exactly the amount that gets checked, applied and logged.

use crate::error::AmountError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// An amount of money with at most two decimal places.
///
/// Balance arithmetic goes through [`checked_add`](Self::checked_add) and
/// [`checked_sub`](Self::checked_sub); there are no panicking operators.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use banking_ledger::Money;
///
/// let amount = Money::from_str("10,5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// assert!(Money::from_str("10.005").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    pub const DECIMAL_PLACES: u32 = 2;

    pub const ZERO: Self = Money(Decimal::ZERO);

    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, Self::DECIMAL_PLACES))
    }

    /// Wraps `value`, refusing anything finer than a cent.
    ///
    /// Trailing zeros don't count: `1.500` is accepted as `1.50`.
    pub fn from_decimal(value: Decimal) -> Result<Self, AmountError> {
        let normalized = value.normalize();
        if normalized.scale() > Self::DECIMAL_PLACES {
            return Err(AmountError::TooPrecise(value.to_string()));
        }
        Ok(Money(normalized))
    }

    /// `true` if strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Sum, or `None` if it does not fit.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Difference, or `None` if it does not fit.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

impl FromStr for Money {
    type Err = AmountError;

    /// Accepts `"12.34"` and the comma form `"12,34"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(&s.trim().replace(',', "."))?;
        Money::from_decimal(decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
