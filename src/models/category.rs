//! Category labels
//!
//! Categories are plain string labels. The set keeps insertion order for
//! display, but membership is what matters: no label appears twice.

use serde::{Deserialize, Deserializer, Serialize};

/// Labels seeded on first run and restored by a reset
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Utilities",
    "Entertainment",
    "Salary",
    "Healthcare",
    "Shopping",
];

/// Ordered set of unique category labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a set, dropping repeated labels after their first occurrence
    pub fn from_labels<I, T>(labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut set = Self::new();
        for label in labels {
            set.insert(label);
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|c| c == name)
    }

    /// Append a label; returns false if it was already present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Remove a label; returns false if it was absent
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new` in place; returns false if `old` was absent
    ///
    /// If `new` already exists elsewhere in the set, the slot of `old` is
    /// dropped instead so the set stays duplicate-free.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        let Some(idx) = self.position(old) else {
            return false;
        };
        if old == new {
            return true;
        }
        if self.contains(new) {
            self.0.remove(idx);
        } else {
            self.0[idx] = new.to_string();
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::from_labels(DEFAULT_CATEGORIES)
    }
}

impl<'de> Deserialize<'de> for CategorySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let labels = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_labels(labels))
    }
}
