//! CLI command handlers
//!
//! Bridges the clap argument parsing with the tracker. Every handler takes
//! the opened tracker and prints its result to stdout.

pub mod budget;
pub mod category;
pub mod currency;
pub mod export;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, handle_summary_command, ReportArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{FinanceResult, ValidationError};
use crate::models::Money;

/// Parse a command-line amount such as "150" or "1,200.50"
pub(crate) fn parse_amount(input: &str) -> FinanceResult<Money> {
    Money::parse(input).map_err(|_| ValidationError::InvalidAmount(input.trim().to_string()).into())
}
