//! Configuration module for the finance tracker
//!
//! - Data directory resolution (env override, platform config dir)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::{DecodePolicy, Settings};
