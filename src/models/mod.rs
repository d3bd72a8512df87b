//! Core data models for the finance tracker
//!
//! Transactions, category labels, the monthly budget and the display
//! currency, plus the `Money` amount type they share.

pub mod budget;
pub mod category;
pub mod currency;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::DEFAULT_MONTHLY_BUDGET;
pub use category::{CategorySet, DEFAULT_CATEGORIES};
pub use currency::{Currency, DEFAULT_CURRENCY};
pub use ids::{IdGenerator, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{parse_date, NewTransaction, Transaction, TransactionDraft, TransactionType};
