//! CSV export of transactions

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::services::FinanceTracker;
use crate::storage::KeyValueStore;

/// Write one row per transaction, in insertion order
///
/// Amounts are written as decimal units with the sign applied, so a column
/// sum in a spreadsheet equals the balance.
pub fn export_transactions_csv<S: KeyValueStore, W: Write>(
    tracker: &FinanceTracker<S>,
    writer: W,
) -> FinanceResult<()> {
    let export_err = |e: csv::Error| FinanceError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Type", "Category", "Amount", "Currency"])
        .map_err(export_err)?;

    let currency = tracker.currency().code();
    for txn in tracker.transactions() {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.kind.to_string(),
                txn.category.clone(),
                txn.signed_amount().to_string(),
                currency.to_string(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))
}
