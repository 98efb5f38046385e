//! Durable key/value storage backends.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::PersistError;

/// Minimal string key/value store, modelled on browser local storage.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError>;
    fn remove_item(&self, key: &str) -> Result<(), PersistError>;
}

/// In-memory storage. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistError> {
        self.items.lock().remove(key);
        Ok(())
    }
}

/// One JSON file per key inside a directory.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous record intact.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default location: `<data_dir>/frontstate`.
    pub fn default_dir() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("frontstate")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Does not check the key; see [`is_valid_key`].
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("persist-{key}.json"))
    }

    fn checked_path(&self, key: &str) -> Result<PathBuf, PersistError> {
        if !is_valid_key(key) {
            return Err(PersistError::Rejected {
                key: key.to_string(),
                reason: "key may only contain ASCII letters, digits, '-', '_' and '.'".to_string(),
            });
        }
        Ok(self.path_for(key))
    }
}

/// Whether `key` can name a file inside the storage directory: non-empty,
/// ASCII letters, digits, `-`, `_` and `.` only, no leading dot.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        let path = self.checked_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistError::Read { path, source: e }),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let path = self.checked_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| PersistError::Write {
            path: self.dir.clone(),
            source: e,
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| PersistError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &path).map_err(|e| PersistError::Write {
            path: path.clone(),
            source: e,
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistError> {
        let path = self.checked_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistError::Write { path, source: e }),
        }
    }
}
