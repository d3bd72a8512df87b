//! Budget CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::error::FinanceResult;
use crate::services::FinanceTracker;
use crate::storage::KeyValueStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the monthly budget against total expenses
    Show,

    /// Set the monthly budget
    Set {
        /// Amount (e.g., "2000" or "2000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    tracker: &mut FinanceTracker<S>,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let code = tracker.currency().code().to_string();

    match cmd {
        BudgetCommands::Show => {
            let summary = tracker.summary();
            println!("Monthly budget: {}", summary.monthly_budget.format_with_code(&code));
            println!("Spent:          {}", summary.total_expenses.format_with_code(&code));
            println!("Remaining:      {}", summary.remaining_budget.format_with_code(&code));
            if summary.is_over_budget {
                println!();
                println!("Over budget!");
            }
        }

        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            tracker.set_budget(amount)?;
            println!("Monthly budget set to {}", amount.format_with_code(&code));
        }
    }

    Ok(())
}
