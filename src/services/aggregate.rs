//! Derived figures
//!
//! Pure functions over a transaction slice and a budget. Nothing here is
//! cached; callers recompute on every read so the result always reflects
//! the latest mutation.

use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction};

/// Income minus expenses
pub fn total_balance(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::signed_amount).sum()
}

pub fn total_income(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

pub fn total_expenses(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum()
}

/// Spending strictly above the budget; spending exactly the budget is fine
pub fn is_over_budget(total_expenses: Money, monthly_budget: Money) -> bool {
    total_expenses > monthly_budget
}

/// Snapshot of every derived figure at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub transaction_count: usize,
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_balance: Money,
    pub monthly_budget: Money,
    /// Budget left to spend; negative once over budget
    pub remaining_budget: Money,
    pub is_over_budget: bool,
}

impl Summary {
    pub fn compute(transactions: &[Transaction], monthly_budget: Money) -> Self {
        let total_expenses = total_expenses(transactions);
        Self {
            transaction_count: transactions.len(),
            total_income: total_income(transactions),
            total_expenses,
            total_balance: total_balance(transactions),
            monthly_budget,
            remaining_budget: monthly_budget - total_expenses,
            is_over_budget: is_over_budget(total_expenses, monthly_budget),
        }
    }
}
