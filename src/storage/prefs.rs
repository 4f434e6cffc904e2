//! Namespaced key-value preference store
//!
//! All scalar settings and the serialized transaction list live as named
//! keys in one JSON object on disk. Every change rewrites the whole file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::{Number, Value};

use crate::error::PocketError;

use super::file_io::{load_json, save_json, set_aside};

type PrefMap = BTreeMap<String, Value>;

/// File-backed key-value store
pub struct PreferenceStore {
    path: PathBuf,
    values: RwLock<PrefMap>,
}

impl PreferenceStore {
    /// Open the store at `path`, starting empty if the file doesn't exist
    ///
    /// An unreadable file is moved to `<name>.corrupt` and the store starts
    /// empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PocketError> {
        let path = path.into();
        let values: PrefMap = match load_json(&path) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(error = %e, "preference file unreadable, starting empty");
                match set_aside(&path) {
                    Ok(moved) => tracing::warn!(to = %moved.display(), "kept unreadable preferences"),
                    Err(err) => tracing::warn!(error = %err, "could not move unreadable preferences"),
                }
                PrefMap::new()
            }
        };
        tracing::debug!(path = %path.display(), keys = values.len(), "opened preference store");

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, key: &str) -> Result<bool, PocketError> {
        Ok(self.get(key)?.is_some())
    }

    pub fn get_string(&self, key: &str) -> Result<Option<String>, PocketError> {
        Ok(self.get(key)?.and_then(|v| v.as_str().map(str::to_string)))
    }

    pub fn get_f64(&self, key: &str) -> Result<Option<f64>, PocketError> {
        Ok(self.get(key)?.and_then(|v| v.as_f64()))
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, PocketError> {
        Ok(self.get(key)?.and_then(|v| v.as_bool()))
    }

    pub fn put_string(&self, key: &str, value: impl Into<String>) -> Result<(), PocketError> {
        self.put(key, Value::String(value.into()))
    }

    pub fn put_f64(&self, key: &str, value: f64) -> Result<(), PocketError> {
        let number = Number::from_f64(value).ok_or_else(|| {
            PocketError::Validation(format!("Cannot store non-finite number for '{}'", key))
        })?;
        self.put(key, Value::Number(number))
    }

    pub fn put_bool(&self, key: &str, value: bool) -> Result<(), PocketError> {
        self.put(key, Value::Bool(value))
    }

    /// Remove a key; persists even when the key was absent
    pub fn remove(&self, key: &str) -> Result<(), PocketError> {
        self.edit(|values| {
            values.remove(key);
        })
    }

    fn get(&self, key: &str) -> Result<Option<Value>, PocketError> {
        let values = self.values.read().map_err(|e| {
            PocketError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(values.get(key).cloned())
    }

    fn put(&self, key: &str, value: Value) -> Result<(), PocketError> {
        self.edit(|values| {
            values.insert(key.to_string(), value);
        })
    }

    /// Apply `change` to a copy, write it out, then swap it in
    fn edit<F>(&self, change: F) -> Result<(), PocketError>
    where
        F: FnOnce(&mut PrefMap),
    {
        let mut values = self.values.write().map_err(|e| {
            PocketError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let mut updated = values.clone();
        change(&mut updated);
        save_json(&self.path, &updated)?;
        *values = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, PreferenceStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = PreferenceStore::open(temp_dir.path().join("prefs.json")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_missing_keys_are_none() {
        let (_temp_dir, store) = create_test_store();
        assert_eq!(store.get_string("currency").unwrap(), None);
        assert_eq!(store.get_f64("budget").unwrap(), None);
        assert_eq!(store.get_bool("flag").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let (temp_dir, store) = create_test_store();
        store.put_string("currency", "€").unwrap();
        store.put_f64("budget", 1500.5).unwrap();
        store.put_bool("onboarding_completed", true).unwrap();

        let reopened = PreferenceStore::open(temp_dir.path().join("prefs.json")).unwrap();
        assert_eq!(reopened.get_string("currency").unwrap().as_deref(), Some("€"));
        assert_eq!(reopened.get_f64("budget").unwrap(), Some(1500.5));
        assert_eq!(reopened.get_bool("onboarding_completed").unwrap(), Some(true));
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, store) = create_test_store();
        store.put_string("logged_in_user", "alice").unwrap();
        assert!(store.contains("logged_in_user").unwrap());

        store.remove("logged_in_user").unwrap();
        assert!(!store.contains("logged_in_user").unwrap());
    }

    #[test]
    fn test_type_mismatch_reads_as_none() {
        let (_temp_dir, store) = create_test_store();
        store.put_string("budget", "lots").unwrap();
        assert_eq!(store.get_f64("budget").unwrap(), None);
    }

    #[test]
    fn test_unreadable_file_starts_empty_and_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = PreferenceStore::open(&path).unwrap();
        assert_eq!(store.get_string("currency").unwrap(), None);
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("prefs.json.corrupt")).unwrap(),
            "{not json"
        );

        store.put_string("currency", "£").unwrap();
        let reopened = PreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get_string("currency").unwrap().as_deref(), Some("£"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.put_f64("budget", f64::NAN).is_err());
        assert!(!store.path().exists());
    }
}
