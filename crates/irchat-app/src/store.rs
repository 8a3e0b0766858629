use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use irchat_core::{SessionStore, StoreError};

/// Session store backed by a small JSON object on disk.
///
/// The file is read once when opened; every `set` rewrites it.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open `path`, treating a missing file as an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| StoreError::Read(format!("{}: {}", path.display(), e)))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .map_err(|e| StoreError::Read(format!("{}: {}", path.display(), e)))?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::Write(format!("{}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StoreError::Write(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irchat_core::{SessionId, SESSION_KEY};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path().join("session.json")).unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_session_survives_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("session.json");

        let first = {
            let mut store = FileStore::open(&path).unwrap();
            SessionId::bootstrap(&mut store).unwrap()
        };
        assert!(path.exists());

        let mut generated = false;
        let second = {
            let mut store = FileStore::open(&path).unwrap();
            SessionId::bootstrap_with(&mut store, || {
                generated = true;
                "unexpected".to_string()
            })
            .unwrap()
        };

        assert_eq!(first, second);
        assert!(!generated);
    }

    #[test]
    fn test_corrupt_file_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(FileStore::open(&path), Err(StoreError::Read(_))));
    }

    #[test]
    fn test_other_keys_are_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        store.set(SESSION_KEY, "abc").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get(SESSION_KEY).unwrap().as_deref(), Some("abc"));
    }
}
