//! Browser LocalStorage store (wasm32)

use web_sys::Storage;

use super::{KeyValueStore, StoreError};

/// Keys are namespaced so several games can share an origin
const KEY_PREFIX: &str = "dino_runner_";

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn new() -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not accessible".to_string()))?;
        Ok(Self { storage })
    }
}

fn js_error(context: &str, err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(format!("{context}: {err:?}"))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(&format!("{KEY_PREFIX}{key}"))
            .map_err(|e| js_error("get_item", e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(&format!("{KEY_PREFIX}{key}"), value)
            .map_err(|e| js_error("set_item", e))
    }
}
