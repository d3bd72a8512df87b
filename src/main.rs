use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use finance_tracker::audit::AuditLogger;
use finance_tracker::cli::{
    handle_budget_command, handle_category_command, handle_currency_command,
    handle_export_command, handle_report_command, handle_summary_command,
    handle_transaction_command, BudgetCommands, CategoryCommands, CurrencyCommands, ExportArgs,
    ReportArgs, TransactionCommands,
};
use finance_tracker::config::{paths::DATA_DIR_ENV, DecodePolicy, FinancePaths, Settings};
use finance_tracker::services::{FinanceTracker, TrackerOptions};
use finance_tracker::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal income and expense tracker",
    long_about = "Records income and expense transactions, tracks spending against \
                  a monthly budget and keeps everything in plain JSON files."
)]
struct Cli {
    /// Directory for data, settings and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Tx(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Display currency commands
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Show balance, income, expenses and budget status
    Summary,

    /// Show spending by category
    Report(ReportArgs),

    /// Export all data
    Export(ExportArgs),

    /// Delete all transactions and restore default settings
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show or change configuration
    Config {
        /// What to do with stored values that fail to load (strict, fallback)
        #[arg(long)]
        decode_policy: Option<DecodePolicy>,
        /// Turn the audit log on or off
        #[arg(long)]
        audit: Option<bool>,
    },

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Finance Tracker - income, expenses and a monthly budget");
        println!();
        println!("Run 'finance --help' for usage information.");
        return Ok(());
    };

    // Commands that do not need the stored data
    match command {
        Commands::Config {
            decode_policy,
            audit,
        } => {
            let changed = decode_policy.is_some() || audit.is_some();
            if let Some(policy) = decode_policy {
                settings.decode_policy = policy;
            }
            if let Some(enabled) = audit {
                settings.audit_enabled = enabled;
            }
            if changed {
                settings.save(&paths)?;
            }

            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Decode policy: {}", settings.decode_policy);
            println!("  Audit enabled: {}", settings.audit_enabled);
            println!("  Date format:   {}", settings.date_format);
            return Ok(());
        }
        Commands::Log { count } => {
            let entries = AuditLogger::new(paths.audit_log()).read_recent(count)?;
            if entries.is_empty() {
                println!("No audit log entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
            return Ok(());
        }
        Commands::Reset { yes: false } => {
            bail!("Reset deletes all transactions; run again with --yes to confirm");
        }
        _ => {}
    }

    let store = FileStore::open(paths.data_dir())?;
    let mut options = TrackerOptions::new().decode_policy(settings.decode_policy);
    if settings.audit_enabled {
        options = options.audit(AuditLogger::new(paths.audit_log()));
    }
    let mut tracker = FinanceTracker::open_with(store, options)?;

    match command {
        Commands::Tx(cmd) => handle_transaction_command(&mut tracker, &settings, cmd)?,
        Commands::Category(cmd) => handle_category_command(&mut tracker, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut tracker, cmd)?,
        Commands::Currency(cmd) => handle_currency_command(&mut tracker, cmd)?,
        Commands::Summary => handle_summary_command(&tracker)?,
        Commands::Report(args) => handle_report_command(&tracker, args)?,
        Commands::Export(args) => handle_export_command(&tracker, args)?,
        Commands::Reset { .. } => {
            tracker.reset()?;
            println!("All data reset to defaults.");
        }
        Commands::Config { .. } | Commands::Log { .. } => {}
    }

    Ok(())
}
