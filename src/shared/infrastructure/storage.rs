//! Durable key-value client storage.
//!
//! The session and display preferences survive restarts through a small
//! string key-value store. [`FileStore`] is the process implementation (a
//! JSON map on disk, written through on every mutation); [`MemoryStore`]
//! backs tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::shared::errors::AppResult;

/// Key for the serialized session user.
pub const KEY_USER: &str = "user";
/// Key for the current user's id.
pub const KEY_ID: &str = "id";
/// Key for the current user's display name.
pub const KEY_NAME: &str = "name";
/// Key for the current user's avatar URL.
pub const KEY_PROFILE_IMG: &str = "profile_img";
/// Key for the bearer token sent on authenticated calls.
pub const KEY_AUTH_TOKEN: &str = "auth_token";
/// Key for the absolute session expiry, epoch milliseconds.
pub const KEY_MAX_AGE: &str = "max_age";
/// Key for the display theme.
pub const KEY_THEME: &str = "theme";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// JSON-file backed store. Mutations are written through immediately so a
/// crash never loses a committed session.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, loading any existing entries. A missing
    /// file is an empty store; an unreadable one is logged and discarded
    /// rather than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(err) => {
                    log::warn!(
                        "Discarding unreadable session file {}: {}",
                        path.display(),
                        err
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        self.persist(&entries)
    }

    fn clear(&self) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
        self.persist(&entries)
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("miteru-storage-{}-{}.json", tag, std::process::id()))
    }

    #[test]
    fn file_store_round_trips_entries() {
        let path = temp_store_path("roundtrip");
        let _ = fs::remove_file(&path);

        let store = FileStore::open(&path).unwrap();
        store.set(KEY_AUTH_TOKEN, "abc123").unwrap();
        store.set(KEY_ID, "7").unwrap();

        // A fresh handle sees the persisted entries.
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(KEY_AUTH_TOKEN).as_deref(), Some("abc123"));
        assert_eq!(reopened.get(KEY_ID).as_deref(), Some("7"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn clear_removes_everything() {
        let path = temp_store_path("clear");
        let _ = fs::remove_file(&path);

        let store = FileStore::open(&path).unwrap();
        store.set(KEY_NAME, "rin").unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(KEY_NAME), None);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(KEY_NAME), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let path = temp_store_path("corrupt");
        fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(KEY_USER), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn memory_store_behaves_like_a_map() {
        let store = MemoryStore::new();
        assert_eq!(store.get(KEY_THEME), None);
        store.set(KEY_THEME, "dark").unwrap();
        assert_eq!(store.get(KEY_THEME).as_deref(), Some("dark"));
        store.remove(KEY_THEME).unwrap();
        assert_eq!(store.get(KEY_THEME), None);
    }
}
