/// Key-value storage backends for the URL list
///
/// A backend is an untyped string-to-string map. The store never knows
/// which variant it holds:
/// - `LocalStorage` persists to `window.localStorage`
/// - `NullStorage` discards writes and never has a value
/// - `MemoryStorage` keeps values in-process (tests, non-browser hosts)

use crate::error::{Result, StorageError};
use std::collections::HashMap;

pub trait StorageBackend {
    /// Value last set for `key`, or `None` if never set (or cleared externally)
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Browser-durable storage
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))?;

        Ok(LocalStorage { storage })
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("Failed to read {}: {:?}", key, e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("Failed to write {}: {:?}", key, e)))
    }
}

/// Used when persistence is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStorage;

impl StorageBackend for NullStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage {
            entries: HashMap::new(),
        }
    }

    /// Seed a raw value, bypassing the store (e.g. data written by another session)
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_storage_always_absent() {
        let mut storage = NullStorage;

        storage.set("url-list", "[\"https://a.example/data.csv\"]").unwrap();

        assert_eq!(storage.get("url-list").unwrap(), None);
        assert_eq!(storage.get("anything").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_get_set() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("key").unwrap(), None);

        storage.set("key", "first").unwrap();
        storage.set("key", "second").unwrap();

        assert_eq!(storage.get("key").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_memory_storage_cleared_externally() {
        let mut storage = MemoryStorage::new().with_entry("key", "value");

        assert_eq!(storage.remove("key"), Some("value".to_string()));
        assert_eq!(storage.get("key").unwrap(), None);
    }

    #[test]
    fn test_boxed_backend_delegates() {
        let mut boxed: Box<dyn StorageBackend> = Box::new(MemoryStorage::new());

        boxed.set("key", "value").unwrap();

        assert_eq!(boxed.get("key").unwrap(), Some("value".to_string()));
    }
}
