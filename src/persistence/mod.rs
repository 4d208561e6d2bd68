//! Key/value persistence for the best score
//!
//! Stores are fire-and-forget from the game's point of view: reads that fail
//! look like missing keys, writes that fail are logged and dropped.

mod file;
#[cfg(target_arch = "wasm32")]
mod local;

use std::collections::HashMap;

use thiserror::Error;

pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// Failures inside a store backend (never surfaced to the sim)
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store file could not be read or written")]
    Io(#[from] std::io::Error),
    #[error("store contents are not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("browser storage is unavailable")]
    Unavailable,
}

/// Integer key/value store
pub trait ScoreStore {
    /// Read a value; anything unreadable is `None`
    fn get(&self, key: &str) -> Option<u32>;
    /// Write a value, best effort
    fn set(&mut self, key: &str, value: u32);
}

/// In-memory store (tests, headless runs without a save file)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls seen so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.writes += 1;
        self.values.insert(key.to_string(), value);
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get(&self, key: &str) -> Option<u32> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: u32) {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("best"), None);
        store.set("best", 4);
        store.set("best", 9);
        assert_eq!(store.get("best"), Some(9));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn ScoreStore> = Box::new(MemoryStore::new());
        store.set("best", 3);
        assert_eq!(store.get("best"), Some(3));
    }
}
