//! YAML snapshot export

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::Snapshot;
use crate::services::FinanceTracker;
use crate::storage::KeyValueStore;

pub fn export_yaml<S: KeyValueStore, W: Write>(
    tracker: &FinanceTracker<S>,
    writer: &mut W,
) -> FinanceResult<()> {
    let snapshot = Snapshot::from_tracker(tracker);
    let export_err = |e: std::io::Error| FinanceError::Export(e.to_string());

    writeln!(writer, "# Finance Tracker Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", snapshot.app_version).map_err(export_err)?;
    writeln!(writer, "# Amounts are in cents.").map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| FinanceError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction};
    use crate::storage::MemoryStore;

    #[test]
    fn test_yaml_export() {
        let mut tracker = FinanceTracker::open(MemoryStore::new()).unwrap();
        tracker.add_category("Rent").unwrap();
        tracker
            .add_transaction(NewTransaction::income(Money::from_units(3000), "Salary"))
            .unwrap();

        let mut out = Vec::new();
        export_yaml(&tracker, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Finance Tracker Export"));
        assert!(text.contains("Rent"));
        assert!(text.contains("currency: MYR"));

        let body: String = text
            .lines()
            .filter(|l| !l.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: Snapshot = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.transactions.len(), 1);
    }
}
