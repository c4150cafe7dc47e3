//! Persistent key-value storage for the theme preference.
//!
//! - [`PreferenceStore`]: the synchronous `get`/`set` contract
//! - [`MemoryStore`]: in-process storage with an optional byte quota
//! - [`FileStore`]: a JSON object on disk, one file per storage area
//! - [`StorageError`]: faults from either backend
//!
//! Store methods take `&self` so one store can be shared between several
//! providers (through `&T` or `Rc<T>`), the way one storage area is shared
//! by every page of an extension.

mod error;
mod file;
mod memory;

use std::rc::Rc;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A synchronous string key-value store.
pub trait PreferenceStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
