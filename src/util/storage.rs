//! Key-value persistence with an in-memory fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session and preference stores persist through [`KeyValueStore`] so
//! they run against `localStorage` in the browser and against memory in
//! native tests.
//!
//! ERROR HANDLING
//! ==============
//! [`FallbackStorage`] swallows every [`StorageError`]: the first failure is
//! logged, the primary store is abandoned, and the rest of the session runs
//! on the in-memory shadow.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// String key-value persistence.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Outside the `csr` build every call reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        _ => Err(StorageError::Unavailable),
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        browser_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Operation { op: "read", key: key.to_owned() })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        browser_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Operation { op: "write", key: key.to_owned() })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        browser_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Operation { op: "remove", key: key.to_owned() })
    }
}

#[cfg(not(feature = "csr"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Shared in-memory map. Clones see the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    pub fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.delete(key);
        Ok(())
    }
}

/// A primary store shadowed in memory. Reads and writes never fail.
pub struct FallbackStorage {
    primary: Box<dyn KeyValueStore>,
    shadow: MemoryStorage,
    degraded: Cell<bool>,
}

impl FallbackStorage {
    pub fn new(primary: impl KeyValueStore + 'static) -> Self {
        Self { primary: Box::new(primary), shadow: MemoryStorage::default(), degraded: Cell::new(false) }
    }

    /// Browser `localStorage` with the in-memory fallback.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    pub fn read(&self, key: &str) -> Option<String> {
        if !self.degraded.get() {
            match self.primary.get(key) {
                Ok(value) => {
                    match &value {
                        Some(v) => self.shadow.insert(key, v),
                        None => self.shadow.delete(key),
                    }
                    return value;
                }
                Err(e) => self.degrade(&e),
            }
        }
        self.shadow.value(key)
    }

    pub fn write(&self, key: &str, value: &str) {
        self.shadow.insert(key, value);
        if !self.degraded.get() {
            if let Err(e) = self.primary.set(key, value) {
                self.degrade(&e);
            }
        }
    }

    pub fn delete(&self, key: &str) {
        self.shadow.delete(key);
        if !self.degraded.get() {
            if let Err(e) = self.primary.remove(key) {
                self.degrade(&e);
            }
        }
    }

    fn degrade(&self, err: &StorageError) {
        log::warn!("persistent storage disabled for this session: {err}");
        self.degraded.set(true);
    }
}
