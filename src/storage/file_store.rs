//! File-backed key-value store
//!
//! Each key lives in its own `<key>.json` file inside one directory, so the
//! four tracker values can be inspected or edited independently.

use std::fs;
use std::path::{Path, PathBuf};

use super::file_io::{read_text, remove_if_exists, write_text_atomic};
use super::KeyValueStore;
use crate::error::{FinanceError, FinanceResult};

const EXTENSION: &str = "json";

/// Store that keeps one JSON file per key under `dir`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> FinanceResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            FinanceError::Storage(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> FinanceResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(FinanceError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.{}", key, EXTENSION)))
    }

    fn json_files(&self) -> FinanceResult<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(FinanceError::Storage(format!(
                    "Failed to list {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> FinanceResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn write(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }

    fn remove(&mut self, key: &str) -> FinanceResult<()> {
        remove_if_exists(self.path_for(key)?)?;
        Ok(())
    }

    fn clear_all(&mut self) -> FinanceResult<()> {
        for path in self.json_files()? {
            remove_if_exists(&path)?;
        }
        Ok(())
    }

    fn keys(&self) -> FinanceResult<Vec<String>> {
        Ok(self
            .json_files()?
            .iter()
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, FileStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path().join("data")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_one_file_per_key() {
        let (_temp_dir, mut store) = create_test_store();
        store.write("monthlyBudget", "200000").unwrap();

        let path = store.dir().join("monthlyBudget.json");
        assert_eq!(fs::read_to_string(path).unwrap(), "200000");
        assert_eq!(store.keys().unwrap(), vec!["monthlyBudget".to_string()]);
    }

    #[test]
    fn test_survives_reopen() {
        let (temp_dir, mut store) = create_test_store();
        store.write("currency", "\"USD\"").unwrap();

        let reopened = FileStore::open(temp_dir.path().join("data")).unwrap();
        assert_eq!(reopened.read("currency").unwrap().as_deref(), Some("\"USD\""));
    }

    #[test]
    fn test_remove_only_touches_one_key() {
        let (_temp_dir, mut store) = create_test_store();
        store.write("currency", "\"USD\"").unwrap();
        store.write("theme", "\"dark\"").unwrap();

        store.remove("currency").unwrap();
        assert!(store.read("currency").unwrap().is_none());
        assert!(store.read("theme").unwrap().is_some());
    }

    #[test]
    fn test_clear_all_leaves_other_files() {
        let (_temp_dir, mut store) = create_test_store();
        store.write("currency", "\"USD\"").unwrap();
        store.write("transactions", "[]").unwrap();
        fs::write(store.dir().join("notes.txt"), "keep me").unwrap();

        store.clear_all().unwrap();
        assert!(store.keys().unwrap().is_empty());
        assert!(store.dir().join("notes.txt").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (_temp_dir, mut store) = create_test_store();
        assert!(store.write("../escape", "1").is_err());
        assert!(store.read("").is_err());
    }
}
