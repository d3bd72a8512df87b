//! Finance Tracker - personal income and expense tracking
//!
//! Keeps a list of income and expense transactions, a set of category labels,
//! a monthly budget and a display currency, and derives the balance, totals
//! and over-budget status from them. State lives behind a small key-value
//! persistence interface with a file-backed and an in-memory backend.
//!
//! # Architecture
//!
//! - `models`: transactions, categories, money, currency
//! - `storage`: the `KeyValueStore` trait and its backends
//! - `services`: the `FinanceTracker` state container and aggregates
//! - `audit`: JSON-lines audit log of every mutation
//! - `config`: path resolution and user settings
//! - `reports`, `export`, `display`, `cli`: the command-line surface
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::models::{Money, NewTransaction};
//! use finance_tracker::services::FinanceTracker;
//! use finance_tracker::storage::MemoryStore;
//!
//! let mut tracker = FinanceTracker::open(MemoryStore::new())?;
//! tracker.add_transaction(NewTransaction::expense(Money::from_units(150), "Food"))?;
//! assert!(!tracker.is_over_budget());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
