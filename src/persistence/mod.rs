//! Key/value persistence backends
//!
//! The game persists exactly one value (the best score), but storage is kept
//! behind a small string key/value trait so the same code runs against:
//! - [`MemoryStore`]: tests and storage-less hosts
//! - [`FileStore`]: native, one JSON file per key under the platform data dir
//! - [`LocalStore`]: browser LocalStorage (wasm32)

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local;

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// Storage failure
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("invalid value: {0}")]
    Invalid(String),
}

/// String key/value storage
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write (or overwrite) a value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("best", "12").unwrap();
        assert_eq!(store.get("best").unwrap().as_deref(), Some("12"));
        store.set("best", "15").unwrap();
        assert_eq!(store.get("best").unwrap().as_deref(), Some("15"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn test_error_messages() {
        let err = StoreError::Unavailable("no window".into());
        assert_eq!(err.to_string(), "storage backend unavailable: no window");

        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = StoreError::from(json_err);
        assert!(err.to_string().starts_with("stored value is not valid JSON"));
    }
}
