//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{FinanceError, FinanceResult};
use crate::services::FinanceTracker;
use crate::storage::KeyValueStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Add a category
    Add {
        /// Category name
        name: String,
    },

    /// Delete a category (transactions keep their label)
    Delete {
        /// Category name
        name: String,
    },

    /// Rename a category and relabel its transactions
    Rename {
        /// Current name
        old: String,
        /// New name
        new: String,
    },
}

/// Handle a category command
pub fn handle_category_command<S: KeyValueStore>(
    tracker: &mut FinanceTracker<S>,
    cmd: CategoryCommands,
) -> FinanceResult<()> {
    match cmd {
        CategoryCommands::List => {
            let usage = |name: &str| {
                tracker
                    .transactions()
                    .iter()
                    .filter(|t| t.category == name)
                    .count()
            };
            print!("{}", format_category_list(tracker.categories(), usage));

            let dangling = tracker.dangling_categories();
            if !dangling.is_empty() {
                println!();
                println!("Labels in use but no longer defined:");
                for label in dangling {
                    let shown = if label.is_empty() { "(uncategorized)" } else { label };
                    println!("  {}", shown);
                }
            }
        }

        CategoryCommands::Add { name } => {
            if tracker.add_category(&name)? {
                println!("Added category: {}", name.trim());
            } else {
                println!("Category already exists: {}", name.trim());
            }
        }

        CategoryCommands::Delete { name } => {
            if !tracker.delete_category(&name)? {
                return Err(FinanceError::category_not_found(name.trim()));
            }
            println!("Deleted category: {}", name.trim());
        }

        CategoryCommands::Rename { old, new } => {
            let relabelled = tracker
                .update_category(&old, &new)?
                .ok_or_else(|| FinanceError::category_not_found(old.trim()))?;
            println!("Renamed category: {} -> {}", old.trim(), new.trim());
            println!("  {} transaction(s) relabelled", relabelled);
        }
    }

    Ok(())
}
