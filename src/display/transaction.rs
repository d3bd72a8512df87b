//! Transaction display formatting

use std::fmt::Write;

use chrono::{DateTime, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CategorySet, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a date, falling back to ISO dates if `date_format` is not valid
fn format_date(date: &DateTime<Utc>, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

fn category_label(category: &str, known: &CategorySet) -> String {
    if category.is_empty() {
        "(uncategorized)".to_string()
    } else if known.contains(category) {
        category.to_string()
    } else {
        format!("{} (removed)", category)
    }
}

/// Format transactions as a table; amounts carry their sign
pub fn format_transaction_table<'a, I>(
    transactions: I,
    known: &CategorySet,
    date_format: &str,
) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let rows: Vec<_> = transactions
        .into_iter()
        .map(|txn| TransactionRow {
            id: txn.id.to_string(),
            date: format_date(&txn.date, date_format),
            kind: txn.kind.to_string(),
            category: category_label(&txn.category, known),
            amount: txn.signed_amount().to_string(),
        })
        .collect();

    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

pub fn format_transaction_details(
    txn: &Transaction,
    known: &CategorySet,
    currency: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.to_rfc3339()));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", category_label(&txn.category, known)));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_code(currency)));
    output
}
