//! `localStorage` behind the storefront's `KeyValueStore` trait.

use sf_storage::{KeyValueStore, Result, StoreError};
use wasm_bindgen::JsValue;

#[derive(Clone)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    /// Open the window's `localStorage`. A blocked or missing store is
    /// reported once here; every later call then fails with `Unavailable`.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            gloo_console::warn!("localStorage is not available; state will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

fn backend(err: JsValue) -> StoreError {
    StoreError::Backend(format!("{:?}", err))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(backend)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(backend)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(backend)
    }
}
