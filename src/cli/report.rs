//! Summary and report CLI commands

use clap::Args;

use crate::display::format_summary;
use crate::error::FinanceResult;
use crate::models::parse_date;
use crate::reports::SpendingReport;
use crate::services::FinanceTracker;
use crate::storage::KeyValueStore;

/// Options for the spending report
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Earliest date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

pub fn handle_summary_command<S: KeyValueStore>(tracker: &FinanceTracker<S>) -> FinanceResult<()> {
    print!("{}", format_summary(&tracker.summary(), tracker.currency().code()));
    Ok(())
}

/// Print spending by category
pub fn handle_report_command<S: KeyValueStore>(
    tracker: &FinanceTracker<S>,
    args: ReportArgs,
) -> FinanceResult<()> {
    let from = args.from.as_deref().map(parse_date).transpose()?;
    let to = args.to.as_deref().map(parse_date).transpose()?;

    let report = SpendingReport::for_tracker(tracker, from, to);
    print!("{}", report.format_terminal(tracker.currency().code()));
    Ok(())
}
