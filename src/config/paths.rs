//! Path management for the finance tracker
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/finance-tracker` on Linux)
//! 3. `$HOME/.config/finance-tracker`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinanceError;

pub const DATA_DIR_ENV: &str = "FINANCE_TRACKER_DATA_DIR";

const APP_NAME: &str = "finance-tracker";

/// Locations of everything the tracker writes to disk
#[derive(Debug, Clone)]
pub struct FinancePaths {
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if neither the platform config directory nor `HOME`
    /// can be determined.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };
        Ok(Self { base_dir })
    }

    /// Use a fixed base directory (tests, `--data-dir`)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON file per storage key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinanceError::Io(format!("Failed to create base directory: {}", e)))?;
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinanceError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, FinanceError> {
    if let Some(dirs) = ProjectDirs::from("", "", APP_NAME) {
        return Ok(dirs.config_dir().to_path_buf());
    }
    let home = std::env::var("HOME")
        .map_err(|_| FinanceError::Config("Could not determine a home directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join(APP_NAME))
}
