//! The finance tracker state container
//!
//! `FinanceTracker` owns the transactions, the monthly budget, the category
//! set and the display currency. It is the only way to change them. Every
//! mutating method updates memory and then writes the storage keys it touched
//! before returning, so a caller never sees state that has not been handed to
//! the store.
//!
//! Lookups by id or name that find nothing are not errors: the method returns
//! `false` (or `None`) and nothing is written. The only errors come from the
//! store itself or, at startup, from stored values that cannot be decoded.
//!
//! A mutation writes the store first and the audit log second. If the audit
//! append fails, the error is returned but the stored change stands and is
//! visible on the next open.
//!
//! Mutation takes `&mut self`, so calls are serialized by construction. Share
//! a tracker between threads by putting it behind a single `Mutex`.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::DecodePolicy;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    CategorySet, Currency, IdGenerator, Money, NewTransaction, Transaction, TransactionId,
    TransactionType, DEFAULT_MONTHLY_BUDGET,
};
use crate::storage::{load_value, save_value, KeyValueStore, StorageKey};

use super::aggregate::{self, Summary};

/// How a tracker is opened
#[derive(Debug, Clone, Default)]
pub struct TrackerOptions {
    pub decode_policy: DecodePolicy,
    /// Where to record mutations; `None` disables auditing
    pub audit: Option<AuditLogger>,
}

impl TrackerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    pub fn audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }
}

/// Criteria for listing transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub category: Option<String>,
    pub kind: Option<TransactionType>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Inclusive date range
    pub fn date_range(mut self, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.category.as_deref().map_or(true, |c| txn.category == c)
            && self.kind.map_or(true, |k| txn.kind == k)
            && self.from.map_or(true, |from| txn.date >= from)
            && self.to.map_or(true, |to| txn.date <= to)
    }
}

pub struct FinanceTracker<S: KeyValueStore> {
    store: S,
    transactions: Vec<Transaction>,
    monthly_budget: Money,
    categories: CategorySet,
    currency: Currency,
    ids: IdGenerator,
    audit: Option<AuditLogger>,
}

impl<S: KeyValueStore> FinanceTracker<S> {
    /// Open with strict decoding and no audit log
    pub fn open(store: S) -> FinanceResult<Self> {
        Self::open_with(store, TrackerOptions::default())
    }

    /// Load all four values from `store`, installing defaults for absent keys
    ///
    /// With [`DecodePolicy::Strict`] a value that fails to decode aborts the
    /// open with a `Decode` error. With [`DecodePolicy::Fallback`] the
    /// default is used instead and a warning goes to the audit log; the bad
    /// value stays in the store until that key is next written.
    pub fn open_with(store: S, options: TrackerOptions) -> FinanceResult<Self> {
        let policy = options.decode_policy;
        let mut warnings = Vec::new();

        let transactions: Vec<Transaction> =
            load_or_default(&store, StorageKey::Transactions, policy, &mut warnings)?
                .unwrap_or_default();
        let monthly_budget =
            load_or_default(&store, StorageKey::MonthlyBudget, policy, &mut warnings)?
                .unwrap_or(DEFAULT_MONTHLY_BUDGET);
        let categories: CategorySet =
            load_or_default(&store, StorageKey::Categories, policy, &mut warnings)?
                .unwrap_or_default();
        let currency: Currency =
            load_or_default(&store, StorageKey::Currency, policy, &mut warnings)?
                .unwrap_or_default();

        let ids = IdGenerator::starting_after(transactions.iter().map(|t| t.id).max());

        let tracker = Self {
            store,
            transactions,
            monthly_budget,
            categories,
            currency,
            ids,
            audit: options.audit,
        };
        tracker.record_all(&warnings)?;
        Ok(tracker)
    }

    // === Reads ===

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Transactions matching `filter`, newest first
    pub fn list(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        let mut matching: Vec<_> = self.transactions.iter().filter(|t| filter.matches(t)).collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        if let Some(limit) = filter.limit {
            matching.truncate(limit);
        }
        matching
    }

    pub fn monthly_budget(&self) -> Money {
        self.monthly_budget
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Category labels used by transactions but missing from the category set
    pub fn dangling_categories(&self) -> Vec<&str> {
        let mut dangling: Vec<&str> = Vec::new();
        for txn in &self.transactions {
            let label = txn.category.as_str();
            if !self.categories.contains(label) && !dangling.contains(&label) {
                dangling.push(label);
            }
        }
        dangling
    }

    // === Derived figures ===

    pub fn total_balance(&self) -> Money {
        aggregate::total_balance(&self.transactions)
    }

    pub fn total_income(&self) -> Money {
        aggregate::total_income(&self.transactions)
    }

    pub fn total_expenses(&self) -> Money {
        aggregate::total_expenses(&self.transactions)
    }

    pub fn is_over_budget(&self) -> bool {
        aggregate::is_over_budget(self.total_expenses(), self.monthly_budget)
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.transactions, self.monthly_budget)
    }

    // === Transaction operations ===

    /// Append a transaction with a fresh id and, if none was given, the
    /// current time as its date
    pub fn add_transaction(&mut self, new: NewTransaction) -> FinanceResult<Transaction> {
        let id = self.ids.next_id().ok_or(FinanceError::IdsExhausted)?;
        let txn = new.into_transaction(id, Utc::now());
        self.transactions.push(txn.clone());

        self.persist(StorageKey::Transactions)?;
        self.record(AuditEntry::create(EntityType::Transaction, id.to_string(), &txn))?;
        Ok(txn)
    }

    /// Replace the transaction with the same id; returns false if none exists
    pub fn edit_transaction(&mut self, updated: Transaction) -> FinanceResult<bool> {
        let Some(slot) = self.transactions.iter_mut().find(|t| t.id == updated.id) else {
            return Ok(false);
        };
        let before = std::mem::replace(slot, updated.clone());

        self.persist(StorageKey::Transactions)?;
        self.record(AuditEntry::update(
            EntityType::Transaction,
            updated.id.to_string(),
            &before,
            &updated,
        ))?;
        Ok(true)
    }

    /// Remove every transaction with `id`; returns false if none matched
    pub fn remove_transaction(&mut self, id: TransactionId) -> FinanceResult<bool> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.transactions)
            .into_iter()
            .partition(|t| t.id == id);
        self.transactions = kept;
        if removed.is_empty() {
            return Ok(false);
        }

        self.persist(StorageKey::Transactions)?;
        let entries: Vec<_> = removed
            .iter()
            .map(|t| AuditEntry::delete(EntityType::Transaction, id.to_string(), t))
            .collect();
        self.record_all(&entries)?;
        Ok(true)
    }

    // === Settings operations ===

    /// Replace the monthly budget; any value is accepted
    pub fn set_budget(&mut self, amount: Money) -> FinanceResult<()> {
        let before = std::mem::replace(&mut self.monthly_budget, amount);

        self.persist(StorageKey::MonthlyBudget)?;
        self.record(AuditEntry::update(
            EntityType::Budget,
            StorageKey::MonthlyBudget.as_str(),
            &before,
            &amount,
        ))
    }

    pub fn set_currency(&mut self, code: &str) -> FinanceResult<()> {
        let currency = Currency::new(code);
        let before = std::mem::replace(&mut self.currency, currency.clone());

        self.persist(StorageKey::Currency)?;
        self.record(AuditEntry::update(
            EntityType::Currency,
            StorageKey::Currency.as_str(),
            &before,
            &currency,
        ))
    }

    // === Category operations ===

    /// Add a label if it is not present yet
    ///
    /// Returns false for duplicates and for blank names.
    pub fn add_category(&mut self, name: &str) -> FinanceResult<bool> {
        let name = name.trim();
        if name.is_empty() || !self.categories.insert(name) {
            return Ok(false);
        }

        self.persist(StorageKey::Categories)?;
        self.record(AuditEntry::create(EntityType::Category, name, name))?;
        Ok(true)
    }

    /// Remove a label; transactions that use it keep the old label
    pub fn delete_category(&mut self, name: &str) -> FinanceResult<bool> {
        let name = name.trim();
        if !self.categories.remove(name) {
            return Ok(false);
        }

        self.persist(StorageKey::Categories)?;
        self.record(AuditEntry::delete(EntityType::Category, name, name))?;
        Ok(true)
    }

    /// Rename a label in place and relabel every transaction that used it
    ///
    /// Returns the number of transactions relabelled, or `None` if `old` is
    /// not in the category set.
    pub fn update_category(&mut self, old: &str, new: &str) -> FinanceResult<Option<usize>> {
        let old = old.trim();
        let new = new.trim();
        if new.is_empty() || !self.categories.rename(old, new) {
            return Ok(None);
        }

        let mut relabelled = 0;
        for txn in self.transactions.iter_mut().filter(|t| t.category == old) {
            txn.category = new.to_string();
            relabelled += 1;
        }

        self.persist(StorageKey::Categories)?;
        self.persist(StorageKey::Transactions)?;
        self.record(
            AuditEntry::update(EntityType::Category, old, old, new).with_message(format!(
                "renamed to \"{}\", {} transaction(s) relabelled",
                new, relabelled
            )),
        )?;
        Ok(Some(relabelled))
    }

    // === Reset ===

    /// Restore every value to its default and delete the four owned keys
    ///
    /// Other keys in the same store are left alone. Ids already issued are
    /// still never reused by this tracker.
    pub fn reset(&mut self) -> FinanceResult<()> {
        self.transactions.clear();
        self.monthly_budget = DEFAULT_MONTHLY_BUDGET;
        self.categories = CategorySet::default();
        self.currency = Currency::default();

        for key in StorageKey::ALL {
            self.store.remove(key.as_str())?;
        }
        self.record(AuditEntry::reset())
    }

    // === Store access ===

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to reopen it as a fresh tracker
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self, key: StorageKey) -> FinanceResult<()> {
        match key {
            StorageKey::Transactions => save_value(&mut self.store, key, &self.transactions),
            StorageKey::MonthlyBudget => save_value(&mut self.store, key, &self.monthly_budget),
            StorageKey::Categories => save_value(&mut self.store, key, &self.categories),
            StorageKey::Currency => save_value(&mut self.store, key, &self.currency),
        }
    }

    fn record(&self, entry: AuditEntry) -> FinanceResult<()> {
        self.record_all(std::slice::from_ref(&entry))
    }

    fn record_all(&self, entries: &[AuditEntry]) -> FinanceResult<()> {
        match &self.audit {
            Some(logger) => logger.log_batch(entries),
            None => Ok(()),
        }
    }
}

fn load_or_default<S, T>(
    store: &S,
    key: StorageKey,
    policy: DecodePolicy,
    warnings: &mut Vec<AuditEntry>,
) -> FinanceResult<Option<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match load_value(store, key) {
        Err(e) if e.is_decode() && policy == DecodePolicy::Fallback => {
            warnings.push(AuditEntry::warn(
                EntityType::Store,
                key.as_str(),
                format!("{}; using default", e),
            ));
            Ok(None)
        }
        other => other,
    }
}
