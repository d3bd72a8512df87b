//! Currency CLI commands

use clap::Subcommand;

use crate::error::FinanceResult;
use crate::services::FinanceTracker;
use crate::storage::KeyValueStore;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the display currency
    Show,

    /// Set the display currency code (e.g., "USD")
    Set { code: String },
}

/// Handle a currency command
pub fn handle_currency_command<S: KeyValueStore>(
    tracker: &mut FinanceTracker<S>,
    cmd: CurrencyCommands,
) -> FinanceResult<()> {
    match cmd {
        CurrencyCommands::Show => println!("{}", tracker.currency()),
        CurrencyCommands::Set { code } => {
            tracker.set_currency(&code)?;
            println!("Currency set to {}", tracker.currency());
        }
    }

    Ok(())
}
