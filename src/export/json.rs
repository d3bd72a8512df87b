//! JSON snapshot export

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategorySet, Currency, Money, Transaction};
use crate::services::{FinanceTracker, Summary};
use crate::storage::KeyValueStore;

pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the tracker holds, plus the derived figures at export time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub currency: Currency,
    pub monthly_budget: Money,
    pub categories: CategorySet,
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
}

impl Snapshot {
    pub fn from_tracker<S: KeyValueStore>(tracker: &FinanceTracker<S>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency: tracker.currency().clone(),
            monthly_budget: tracker.monthly_budget(),
            categories: tracker.categories().clone(),
            transactions: tracker.transactions().to_vec(),
            summary: tracker.summary(),
        }
    }
}

pub fn export_json<S: KeyValueStore, W: Write>(
    tracker: &FinanceTracker<S>,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let snapshot = Snapshot::from_tracker(tracker);

    if pretty {
        serde_json::to_writer_pretty(writer, &snapshot)
    } else {
        serde_json::to_writer(writer, &snapshot)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))
}
