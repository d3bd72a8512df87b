//! CLI command for data export

use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_json, export_transactions_csv, export_yaml, ExportFormat};
use crate::services::FinanceTracker;
use crate::storage::KeyValueStore;

/// Export options
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format: json, yaml or csv (transactions only)
    #[arg(short, long, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command<S: KeyValueStore>(
    tracker: &FinanceTracker<S>,
    args: ExportArgs,
) -> FinanceResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinanceError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(tracker, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| FinanceError::Export(e.to_string()))?;

            match args.format {
                ExportFormat::Csv => println!(
                    "Exported {} transactions to: {}",
                    tracker.transactions().len(),
                    path.display()
                ),
                _ => println!("Full snapshot exported to: {}", path.display()),
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(tracker, args.format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<S: KeyValueStore, W: Write>(
    tracker: &FinanceTracker<S>,
    format: ExportFormat,
    writer: &mut W,
) -> FinanceResult<()> {
    match format {
        ExportFormat::Json => {
            export_json(tracker, writer, true)?;
            writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))
        }
        ExportFormat::Yaml => export_yaml(tracker, writer),
        ExportFormat::Csv => export_transactions_csv(tracker, writer),
    }
}
