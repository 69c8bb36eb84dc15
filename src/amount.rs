//! Exact monetary amounts backed by `rust_decimal`.
//!
//! An [`Amount`] remembers the scale it was written with, so `500` and
//! `20.5` keep their literal text form. Statement layout measures that
//! literal form, while balances are always shown with two decimals.
//!
//! Arithmetic is checked: sums that leave the `Decimal` range return `None`
//! instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// A decimal money value.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use budget_ledger::Amount;
///
/// let amount = Amount::from_str("20.5").unwrap();
/// assert_eq!(amount.to_string(), "20.5");
/// assert_eq!(amount.to_fixed(), "20.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Decimal places used by [`Amount::to_fixed`].
    pub const DISPLAY_SCALE: u32 = 2;

    /// Midpoints round half away from zero when shown with two decimals.
    pub const DISPLAY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Returns the underlying decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Drops the fractional part, rounding toward zero.
    pub fn trunc(&self) -> Self {
        Amount(self.0.trunc())
    }

    /// Adds `rhs`, or `None` if the result overflows.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Subtracts `rhs`, or `None` if the result overflows.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Number of characters in the literal form (`500` is 3, `20.5` is 4).
    pub fn literal_width(&self) -> usize {
        self.0.to_string().chars().count()
    }

    /// Renders with exactly two decimal places.
    pub fn to_fixed(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, Self::DISPLAY_ROUNDING);
        format!("{:.2}", rounded)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(Decimal::from(value))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reads the literal text of a CSV field, keeping its scale.
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}
