//! Browser `localStorage` store (WASM only)

use super::{ScoreStore, StoreError};

/// Values kept as decimal strings in `window.localStorage`
#[derive(Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl ScoreStore for LocalStore {
    fn get(&self, key: &str) -> Option<u32> {
        let storage = Self::storage().ok()?;
        let raw = storage.get_item(key).ok().flatten()?;
        raw.trim().parse().ok()
    }

    fn set(&mut self, key: &str, value: u32) {
        match Self::storage() {
            Ok(storage) => {
                if storage.set_item(key, &value.to_string()).is_err() {
                    log::warn!("localStorage rejected {}={}", key, value);
                }
            }
            Err(e) => log::warn!("Cannot save {}: {}", key, e),
        }
    }
}
