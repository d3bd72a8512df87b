//! Spending Report
//!
//! Expenses grouped by category label, largest first, with each label's
//! share of total spending. Labels that are no longer in the category set
//! still get a row, flagged as removed.

use chrono::{DateTime, Utc};

use crate::models::{CategorySet, Money, Transaction};
use crate::services::FinanceTracker;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    /// Label as stored on the transactions; empty for uncategorized
    pub category: String,
    pub total_spending: Money,
    pub transaction_count: usize,
    /// Share of total spending, 0-100
    pub percentage: f64,
    /// The label is not in the current category set
    pub removed: bool,
}

#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_income: Money,
    pub expense_count: usize,
}

impl SpendingReport {
    /// Build the report from transactions within the inclusive date range
    pub fn generate(
        transactions: &[Transaction],
        known: &CategorySet,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        let in_range = transactions.iter().filter(|t| {
            from.map_or(true, |f| t.date >= f) && to.map_or(true, |end| t.date <= end)
        });

        // Vec rather than a map so ties keep first-seen order
        let mut rows: Vec<SpendingByCategory> = Vec::new();
        let mut total_spending = Money::zero();
        let mut total_income = Money::zero();
        let mut expense_count = 0;

        for txn in in_range {
            if txn.is_income() {
                total_income += txn.amount;
                continue;
            }

            total_spending += txn.amount;
            expense_count += 1;

            match rows.iter_mut().find(|r| r.category == txn.category) {
                Some(row) => {
                    row.total_spending += txn.amount;
                    row.transaction_count += 1;
                }
                None => rows.push(SpendingByCategory {
                    category: txn.category.clone(),
                    total_spending: txn.amount,
                    transaction_count: 1,
                    percentage: 0.0,
                    removed: !txn.category.is_empty() && !known.contains(&txn.category),
                }),
            }
        }

        for row in &mut rows {
            row.percentage = if total_spending.is_zero() {
                0.0
            } else {
                row.total_spending.as_f64() / total_spending.as_f64() * 100.0
            };
        }
        rows.sort_by(|a, b| b.total_spending.cmp(&a.total_spending));

        Self {
            from,
            to,
            categories: rows,
            total_spending,
            total_income,
            expense_count,
        }
    }

    pub fn for_tracker<S: KeyValueStore>(
        tracker: &FinanceTracker<S>,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        Self::generate(tracker.transactions(), tracker.categories(), from, to)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        let bound = |d: Option<DateTime<Utc>>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "...".to_string())
        };
        output.push_str(&format!(
            "Spending Report: {} to {} ({})\n",
            bound(self.from),
            bound(self.to),
            currency
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<28} {:>12} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.categories {
            let mut label = if row.category.is_empty() {
                "(uncategorized)".to_string()
            } else {
                row.category.clone()
            };
            if row.removed {
                label.push_str(" (removed)");
            }
            output.push_str(&format!(
                "{:<28} {:>12} {:>8} {:>7.1}%\n",
                label,
                row.total_spending.to_string(),
                row.transaction_count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12} {:>8}\n",
            "TOTAL SPENDING",
            self.total_spending.to_string(),
            self.expense_count
        ));
        output.push_str(&format!("{:<28} {:>12}\n", "TOTAL INCOME", self.total_income.to_string()));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, NewTransaction};
    use crate::storage::MemoryStore;

    fn tracker() -> FinanceTracker<MemoryStore> {
        let mut t = FinanceTracker::open(MemoryStore::new()).unwrap();
        let d = |s| parse_date(s).unwrap();
        for (units, cat, day) in [
            (100, "Food", "2026-01-10"),
            (300, "Transport", "2026-02-01"),
            (50, "Food", "2026-02-03"),
            (50, "Gym", "2026-02-04"),
        ] {
            t.add_transaction(NewTransaction::expense(Money::from_units(units), cat).on(d(day)))
                .unwrap();
        }
        t.add_transaction(NewTransaction::income(Money::from_units(1000), "Salary"))
            .unwrap();
        t
    }

    #[test]
    fn test_groups_by_category() {
        let report = SpendingReport::for_tracker(&tracker(), None, None);

        assert_eq!(report.total_spending, Money::from_units(500));
        assert_eq!(report.total_income, Money::from_units(1000));
        assert_eq!(report.expense_count, 4);

        let names: Vec<_> = report.categories.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, ["Transport", "Food", "Gym"]);
        assert_eq!(report.categories[1].transaction_count, 2);
        assert!((report.categories[0].percentage - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_flags_removed_labels() {
        let report = SpendingReport::for_tracker(&tracker(), None, None);
        let gym = report.categories.iter().find(|r| r.category == "Gym").unwrap();
        assert!(gym.removed);
        assert!(!report.categories[0].removed);
    }

    #[test]
    fn test_date_range() {
        let from = parse_date("2026-02-01").ok();
        let report = SpendingReport::for_tracker(&tracker(), from, None);
        assert_eq!(report.total_spending, Money::from_units(400));
    }

    #[test]
    fn test_terminal_output() {
        let output = SpendingReport::for_tracker(&tracker(), None, None).format_terminal("MYR");
        assert!(output.contains("Spending Report: ... to ... (MYR)"));
        assert!(output.contains("Gym (removed)"));
        assert!(output.contains("500.00"));
    }

    #[test]
    fn test_empty_report() {
        let t = FinanceTracker::open(MemoryStore::new()).unwrap();
        let output = SpendingReport::for_tracker(&t, None, None).format_terminal("MYR");
        assert!(output.contains("No expenses recorded."));
    }
}
