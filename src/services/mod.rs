//! Business logic layer
//!
//! `tracker` holds the state container; `aggregate` holds the pure
//! functions it uses for derived figures.

pub mod aggregate;
pub mod tracker;

pub use aggregate::Summary;
pub use tracker::{FinanceTracker, TrackerOptions, TransactionFilter};
