//! Data export
//!
//! - JSON: full snapshot, machine-readable
//! - YAML: full snapshot with a comment header, human-readable
//! - CSV: transactions only, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_json, Snapshot, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use std::fmt;
use std::str::FromStr;

use crate::error::FinanceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(FinanceError::Export(format!(
                "Unknown export format '{}' (expected json, yaml or csv)",
                other
            ))),
        }
    }
}
