//! Persistence layer for the finance tracker
//!
//! A small key-value contract ([`KeyValueStore`]) with two backends: one JSON
//! file per key on disk ([`FileStore`]) and an in-process map
//! ([`MemoryStore`]). Values are serialized JSON text.

pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_io::{read_text, write_text_atomic};
pub use file_store::FileStore;
pub use memory::MemoryStore;

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{FinanceError, FinanceResult};

/// Durable string-keyed storage for serialized values
///
/// Writes overwrite, reads return the last written value, and `clear_all`
/// removes every key the backend manages, including keys written by other
/// components sharing the same backend.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> FinanceResult<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> FinanceResult<()>;

    /// Remove one key; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> FinanceResult<()>;

    fn clear_all(&mut self) -> FinanceResult<()>;

    /// All keys currently present, sorted
    fn keys(&self) -> FinanceResult<Vec<String>>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn read(&self, key: &str) -> FinanceResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> FinanceResult<()> {
        (**self).remove(key)
    }

    fn clear_all(&mut self) -> FinanceResult<()> {
        (**self).clear_all()
    }

    fn keys(&self) -> FinanceResult<Vec<String>> {
        (**self).keys()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> FinanceResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> FinanceResult<()> {
        (**self).remove(key)
    }

    fn clear_all(&mut self) -> FinanceResult<()> {
        (**self).clear_all()
    }

    fn keys(&self) -> FinanceResult<Vec<String>> {
        (**self).keys()
    }
}

/// The four keys owned by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Transactions,
    MonthlyBudget,
    Categories,
    Currency,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Transactions,
        StorageKey::MonthlyBudget,
        StorageKey::Categories,
        StorageKey::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::MonthlyBudget => "monthlyBudget",
            Self::Categories => "categories",
            Self::Currency => "currency",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialize a value and write it under `key`
pub fn save_value<S, T>(store: &mut S, key: StorageKey, value: &T) -> FinanceResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| FinanceError::Storage(format!("Failed to serialize '{}': {}", key, e)))?;
    store.write(key.as_str(), &json)
}

/// Read and decode the value under `key`
///
/// Returns `Ok(None)` when the key is absent and a `Decode` error when the
/// stored text does not match `T`.
pub fn load_value<S, T>(store: &S, key: StorageKey) -> FinanceResult<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.read(key.as_str())? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| FinanceError::decode(key.as_str(), e)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_key_names() {
        let names: Vec<_> = StorageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["transactions", "monthlyBudget", "categories", "currency"]);
    }

    #[test]
    fn test_save_and_load_value() {
        let mut store = MemoryStore::new();
        save_value(&mut store, StorageKey::MonthlyBudget, &Money::from_units(1500)).unwrap();

        let loaded: Option<Money> = load_value(&store, StorageKey::MonthlyBudget).unwrap();
        assert_eq!(loaded, Some(Money::from_units(1500)));
    }

    #[test]
    fn test_load_absent_is_none() {
        let store = MemoryStore::new();
        let loaded: Option<Money> = load_value(&store, StorageKey::MonthlyBudget).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_corrupt_is_decode_error() {
        let mut store = MemoryStore::new();
        store.write("monthlyBudget", "{not json").unwrap();

        let err = load_value::<_, Money>(&store, StorageKey::MonthlyBudget).unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("monthlyBudget"));
    }

    #[test]
    fn test_mut_ref_is_a_store() {
        let mut store = MemoryStore::new();
        {
            let mut borrowed = &mut store;
            save_value(&mut borrowed, StorageKey::Currency, "USD").unwrap();
        }
        assert_eq!(store.read("currency").unwrap().as_deref(), Some("\"USD\""));
    }
}
