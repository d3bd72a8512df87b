//! Transaction CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{parse_date, TransactionDraft, TransactionId, TransactionType};
use crate::services::{FinanceTracker, TransactionFilter};
use crate::storage::KeyValueStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "150" or "150.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Either "income" or "expense"
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Change fields of an existing transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New type
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,
        /// New category label
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a transaction
    #[command(alias = "rm")]
    Remove {
        /// Transaction ID
        id: String,
    },

    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },

    /// List transactions, newest first
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only "income" or "expense"
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,
        /// Earliest date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn parse_id(input: &str) -> FinanceResult<TransactionId> {
    input
        .parse()
        .map_err(|_| FinanceError::transaction_not_found(input.trim()))
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    tracker: &mut FinanceTracker<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            kind,
            category,
            date,
        } => {
            let mut draft = TransactionDraft::new().amount(amount).kind(kind);
            if let Some(category) = category {
                draft = draft.category(category);
            }
            if let Some(date) = date {
                draft = draft.date(date);
            }
            let new = draft.validate()?;

            if !new.category.is_empty() && !tracker.categories().contains(&new.category) {
                println!("Note: '{}' is not a known category", new.category);
            }

            let txn = tracker.add_transaction(new)?;
            println!(
                "Recorded {}: {}",
                txn.kind,
                txn.amount.format_with_code(tracker.currency().code())
            );
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::Edit {
            id,
            amount,
            kind,
            category,
            date,
        } => {
            let id = parse_id(&id)?;
            let mut txn = tracker
                .transaction(id)
                .cloned()
                .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

            if let Some(amount) = amount {
                txn.amount = parse_amount(&amount)?;
            }
            if let Some(kind) = kind {
                txn.kind = kind.parse()?;
            }
            if let Some(category) = category {
                txn.category = category.trim().to_string();
            }
            if let Some(date) = date {
                txn.date = parse_date(&date)?;
            }

            tracker.edit_transaction(txn)?;
            println!("Updated transaction {}", id);
        }

        TransactionCommands::Remove { id } => {
            let id = parse_id(&id)?;
            if !tracker.remove_transaction(id)? {
                return Err(FinanceError::transaction_not_found(id.to_string()));
            }
            println!("Removed transaction {}", id);
        }

        TransactionCommands::Show { id } => {
            let id = parse_id(&id)?;
            let txn = tracker
                .transaction(id)
                .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;
            print!(
                "{}",
                format_transaction_details(txn, tracker.categories(), tracker.currency().code())
            );
        }

        TransactionCommands::List {
            category,
            kind,
            from,
            to,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(kind) = kind {
                filter = filter.kind(kind.parse::<TransactionType>()?);
            }
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            filter = filter.date_range(from, to);

            let transactions = tracker.list(&filter);
            print!(
                "{}",
                format_transaction_table(transactions, tracker.categories(), &settings.date_format)
            );
        }
    }

    Ok(())
}
