use wasm_bindgen::JsValue;
use web_sys::Storage;

use irchat_core::{SessionStore, StoreError};

/// Session store over `window.localStorage`
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, JsValue> {
        let storage = crate::window()?
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage is not available"))?;
        Ok(Self { storage })
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Read(describe(e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(describe(e)))
    }
}
