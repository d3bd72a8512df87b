//! Transaction model
//!
//! A transaction is a single income or expense record. The stored amount is
//! always a magnitude; whether it adds to or subtracts from the balance is
//! carried by [`TransactionType`].
//!
//! Loose caller input goes through [`TransactionDraft::validate`], which
//! produces a [`NewTransaction`] or a declared [`ValidationError`]. The tracker
//! only accepts the validated form.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::ValidationError;

/// Direction of a money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(ValidationError::UnknownType(s.trim().to_string())),
        }
    }
}

/// A recorded transaction as held by the tracker and written to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Assigned at creation, never changes
    pub id: TransactionId,

    /// Magnitude of the movement
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Free-text label; may name a category that no longer exists
    pub category: String,

    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// A validated transaction that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount: Money,
    pub kind: TransactionType,
    pub category: String,
    /// When `None`, the tracker stamps the creation time
    pub date: Option<DateTime<Utc>>,
}

impl NewTransaction {
    pub fn new(amount: Money, kind: TransactionType, category: impl Into<String>) -> Self {
        Self {
            amount,
            kind,
            category: category.into(),
            date: None,
        }
    }

    pub fn income(amount: Money, category: impl Into<String>) -> Self {
        Self::new(amount, TransactionType::Income, category)
    }

    pub fn expense(amount: Money, category: impl Into<String>) -> Self {
        Self::new(amount, TransactionType::Expense, category)
    }

    /// Set an explicit date
    pub fn on(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Attach the tracker-assigned id and date
    pub(crate) fn into_transaction(self, id: TransactionId, now: DateTime<Utc>) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            date: self.date.unwrap_or(now),
        }
    }
}

/// Unvalidated transaction input, as collected from a form, a JSON payload
/// or the command line
///
/// Fields hold whatever shape the caller sent (`"amount": 150` and
/// `"amount": "150.00"` are both fine). Shape problems surface from
/// [`TransactionDraft::validate`] as a [`ValidationError`], not from
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionDraft {
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default, rename = "type")]
    pub kind: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
}

impl TransactionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(Value::String(amount.into()));
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(Value::String(kind.into()));
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Value::String(category.into()));
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(Value::String(date.into()));
        self
    }

    /// Check the draft and build a [`NewTransaction`]
    ///
    /// Null and blank strings count as missing. Amounts may be numbers or
    /// numeric strings; the sign is not checked. A missing category becomes
    /// an empty label.
    pub fn validate(self) -> Result<NewTransaction, ValidationError> {
        let amount = match present(self.amount).ok_or(ValidationError::MissingAmount)? {
            Value::String(text) => {
                Money::parse(&text).map_err(|_| ValidationError::InvalidAmount(text))?
            }
            Value::Number(n) => number_to_money(&n)
                .ok_or_else(|| ValidationError::InvalidAmount(n.to_string()))?,
            other => return Err(ValidationError::InvalidAmount(other.to_string())),
        };

        let kind: TransactionType = match present(self.kind).ok_or(ValidationError::MissingType)? {
            Value::String(text) => text.parse()?,
            other => return Err(ValidationError::UnknownType(other.to_string())),
        };

        let date = match present(self.date) {
            None => None,
            Some(Value::String(text)) => Some(parse_date(&text)?),
            Some(other) => return Err(ValidationError::InvalidDate(other.to_string())),
        };

        let category = match present(self.category) {
            None => String::new(),
            Some(Value::String(text)) => text.trim().to_string(),
            Some(other) => other.to_string(),
        };

        Ok(NewTransaction {
            amount,
            kind,
            category,
            date,
        })
    }
}

impl From<Value> for TransactionDraft {
    /// Anything that is not an object becomes an empty draft
    fn from(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

fn number_to_money(n: &serde_json::Number) -> Option<Money> {
    match n.as_i64() {
        Some(units) => units.checked_mul(100).map(Money::from_cents),
        None => n.as_f64().and_then(Money::from_f64),
    }
}

fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        _ => true,
    })
}

/// Parse a caller-supplied date
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; the latter are
/// taken as midnight UTC.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, ValidationError> {
    let input = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }
    let day = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ValidationError::InvalidDate(input.to_string()))?;
    Ok(Utc.from_utc_datetime(&midnight))
}
