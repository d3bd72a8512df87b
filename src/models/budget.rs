//! Monthly spending budget

use super::money::Money;

/// Budget installed when nothing has been stored yet: 2000.00
pub const DEFAULT_MONTHLY_BUDGET: Money = Money::from_units(2000);
