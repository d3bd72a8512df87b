//! Money type for amounts and budgets
//!
//! Amounts are held as integer cents so that sums over many transactions
//! never drift. The currency is a separate label owned by the tracker, so
//! `Money` itself carries no symbol.
//!
//! On the wire an amount is a plain number of currency units (`2000`,
//! `42.5`), rounded to the nearest cent when read back. Arithmetic saturates
//! at the `i64` bounds instead of overflowing.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create an amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole units (e.g. 150 -> 150.00)
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional part in cents (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Amount as a float, for percentages and CSV output only
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Nearest whole cent to a float amount of units; `None` if out of range
    pub fn from_f64(units: f64) -> Option<Self> {
        let cents = (units * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
            Some(Self(cents as i64))
        } else {
            None
        }
    }

    /// Parse a user-entered amount
    ///
    /// Accepts "150", "150.5", "150.50", "-20", and thousands separators
    /// ("1,200.00"). More than two fractional digits is rejected rather than
    /// silently rounded.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
        let (negative, body) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };
        if body.is_empty() {
            return Err(invalid());
        }

        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => frac.parse().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -total } else { total }))
    }

    /// Format prefixed with a currency code, e.g. "MYR 150.00"
    pub fn format_with_code(&self, code: &str) -> String {
        format!("{} {}", code, self)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an amount in currency units")
    }

    fn visit_i64<E: de::Error>(self, units: i64) -> Result<Money, E> {
        units
            .checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom(format!("amount {} is out of range", units)))
    }

    fn visit_u64<E: de::Error>(self, units: u64) -> Result<Money, E> {
        let units = i64::try_from(units)
            .map_err(|_| E::custom(format!("amount {} is out of range", units)))?;
        self.visit_i64(units)
    }

    fn visit_f64<E: de::Error>(self, units: f64) -> Result<Money, E> {
        Money::from_f64(units).ok_or_else(|| E::custom(format!("amount {} is out of range", units)))
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Money, E> {
        Money::parse(text).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_and_cents() {
        let m = Money::from_cents(15050);
        assert_eq!(m.units(), 150);
        assert_eq!(m.cents_part(), 50);
        assert_eq!(Money::from_units(2000).cents(), 200_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(15000).to_string(), "150.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_units(2000).format_with_code("MYR"), "MYR 2000.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("150").unwrap().cents(), 15000);
        assert_eq!(Money::parse("150.5").unwrap().cents(), 15050);
        assert_eq!(Money::parse("150.05").unwrap().cents(), 15005);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("-20").unwrap().cents(), -2000);
        assert_eq!(Money::parse("1,200.00").unwrap().cents(), 120_000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("$5").is_err());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!((-a).cents(), -1000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::parse("90000000000000000").unwrap();
        let total: Money = vec![huge, huge].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert!(total > huge);

        assert_eq!((-huge - huge).cents(), i64::MIN);
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_units() {
        assert_eq!(serde_json::to_string(&Money::from_units(2000)).unwrap(), "2000");
        assert_eq!(serde_json::to_string(&Money::from_cents(4250)).unwrap(), "42.5");
        assert_eq!(serde_json::to_string(&Money::from_cents(-1005)).unwrap(), "-10.05");
    }

    #[test]
    fn test_deserializes_units() {
        let budget: Money = serde_json::from_str("2000").unwrap();
        assert_eq!(budget, Money::from_units(2000));

        let amount: Money = serde_json::from_str("42.5").unwrap();
        assert_eq!(amount.cents(), 4250);

        let rounded: Money = serde_json::from_str("0.125").unwrap();
        assert_eq!(rounded.cents(), 13);

        let text: Money = serde_json::from_str("\"150.00\"").unwrap();
        assert_eq!(text, Money::from_units(150));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("1e30").is_err());
        assert!(serde_json::from_str::<Money>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Money>("true").is_err());
    }
}
