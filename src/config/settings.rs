//! User settings
//!
//! Stored as `config.json` next to the data directory. Missing fields fall
//! back to their defaults so older files keep loading.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::FinancePaths;
use crate::error::FinanceError;

/// What to do when a stored value cannot be decoded at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Refuse to start; the corrupt file is left untouched for inspection
    #[default]
    Strict,
    /// Install the default for the corrupt key and carry on
    Fallback,
}

impl fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

impl FromStr for DecodePolicy {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "fallback" => Ok(Self::Fallback),
            other => Err(FinanceError::Config(format!(
                "Unknown decode policy '{}' (expected 'strict' or 'fallback')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub decode_policy: DecodePolicy,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Date format for listings (strftime)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            decode_policy: DecodePolicy::default(),
            audit_enabled: default_audit_enabled(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values that would fail later, at display time
    pub fn validate(&self) -> Result<(), FinanceError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(FinanceError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.decode_policy, DecodePolicy::Strict);
        assert!(settings.audit_enabled);
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            decode_policy: DecodePolicy::Fallback,
            audit_enabled: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.decode_policy, DecodePolicy::Fallback);
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"decode_policy":"fallback"}"#).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_invalid_date_format_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format":"%Y-%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinanceError::Config(_)));
        assert!(err.to_string().contains("%Y-%Q"));
    }

    #[test]
    fn test_date_format_validation() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.date_format = "%d/%m/%Y %H:%M".to_string();
        assert!(settings.validate().is_ok());

        settings.date_format = "%".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Fallback".parse::<DecodePolicy>().unwrap(), DecodePolicy::Fallback);
        assert!("lenient".parse::<DecodePolicy>().is_err());
    }
}
