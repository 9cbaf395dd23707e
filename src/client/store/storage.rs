use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use crate::client::model::error::StorageError;

/// String key/value persistence shared by the session and theme stores.
pub trait KeyValueStorage {
    fn get(&self, key: &'static str) -> Option<String>;
    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &'static str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(feature = "web")]
impl LocalStorage {
    fn raw() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "web")]
impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &'static str) -> Option<String> {
        Self::raw().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        Self::raw()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed { key })
    }

    fn remove(&self, key: &'static str) -> Result<(), StorageError> {
        Self::raw()?
            .remove_item(key)
            .map_err(|_| StorageError::WriteFailed { key })
    }
}

/// Process-local storage used outside the browser and in tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<&'static str, String>>,
    read_only: Cell<bool>,
}

impl MemoryStorage {
    /// Storage that rejects every write, like a browser with storage disabled.
    pub fn read_only() -> Self {
        let storage = Self::default();
        storage.set_read_only(true);
        storage
    }

    /// Starts or stops rejecting writes, keeping the stored entries.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &'static str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::WriteFailed { key });
        }
        self.entries.borrow_mut().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: &'static str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::WriteFailed { key });
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
