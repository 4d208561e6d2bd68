//! JSON file store for native builds

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ScoreStore, StoreError};

/// Key/value pairs kept in a small JSON object on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, u32>,
}

impl FileStore {
    /// Open the store at `path`. A missing or corrupt file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read(&path) {
            Ok(values) => {
                log::info!("Loaded {} value(s) from {}", values.len(), path.display());
                values
            }
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No store at {}, starting fresh", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                log::warn!("Ignoring store at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> Result<BTreeMap<String, u32>, StoreError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        // Write to a sibling then rename so a crash never leaves half a file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
        match self.write() {
            Ok(()) => log::debug!("Saved {}={} to {}", key, value, self.path.display()),
            Err(e) => log::warn!("Failed to save {} to {}: {}", key, self.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("flap-sim-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("scores.json")
    }

    #[test]
    fn test_missing_file_is_empty() {
        let path = scratch("missing");
        let store = FileStore::open(&path);
        assert_eq!(store.get("best"), None);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_set_persists_across_open() {
        let path = scratch("persist");
        let mut store = FileStore::open(&path);
        store.set("best", 17);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("best"), Some(17));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let path = scratch("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = FileStore::open(&path);
        assert_eq!(store.get("best"), None);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
