//! Summary display formatting

use crate::services::Summary;

pub fn format_summary(summary: &Summary, currency: &str) -> String {
    let line = |label: &str, value: String| format!("{:<18}{}\n", label, value);

    let mut output = String::new();
    output.push_str(&line("Transactions:", summary.transaction_count.to_string()));
    output.push_str(&line("Total income:", summary.total_income.format_with_code(currency)));
    output.push_str(&line("Total expenses:", summary.total_expenses.format_with_code(currency)));
    output.push_str(&line("Balance:", summary.total_balance.format_with_code(currency)));
    output.push_str(&line("Monthly budget:", summary.monthly_budget.format_with_code(currency)));
    output.push_str(&line("Remaining:", summary.remaining_budget.format_with_code(currency)));
    if summary.is_over_budget {
        output.push_str("\nOver budget!\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_over_budget_flag() {
        let summary = Summary::compute(&[], Money::from_units(-1));
        let output = format_summary(&summary, "MYR");
        assert!(output.contains("Balance:          MYR 0.00"));
        assert!(output.contains("Over budget!"));
    }
}
