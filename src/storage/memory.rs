//! In-process preference store.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{PreferenceStore, StorageError};

/// A store kept in memory for the lifetime of the value.
///
/// An optional quota caps the combined byte length of all keys and values;
/// a write that would exceed it fails and leaves the store untouched.
///
/// # Example
///
/// ```rust
/// use popup_theme::{MemoryStore, PreferenceStore};
///
/// let store = MemoryStore::new();
/// store.set("popup-theme-value", "dark").unwrap();
/// assert_eq!(store.get("popup-theme-value").unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes beyond `limit` bytes in total.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: RefCell::default(),
            quota: Some(limit),
        }
    }

    /// Adds an entry, returning the store for chaining.
    ///
    /// Seeding bypasses the quota.
    pub fn seed(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            if self.used_bytes_without(key) + key.len() + value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    limit,
                });
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
