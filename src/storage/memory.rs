//! In-memory key-value store

use std::collections::BTreeMap;

use super::KeyValueStore;
use crate::error::FinanceResult;

/// Volatile store backed by an ordered map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> FinanceResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> FinanceResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear_all(&mut self) -> FinanceResult<()> {
        self.entries.clear();
        Ok(())
    }

    fn keys(&self) -> FinanceResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}
