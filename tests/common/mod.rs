//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::Path;
use std::sync::Arc;

use frontstate::config::{BuildMode, Config};
use frontstate::error::PersistError;
use frontstate::persist::{FileStorage, MemoryStorage, Storage};
use frontstate::slices::auth::User;
use frontstate::store::Store;
use parking_lot::Mutex;

/// Store over fresh in-memory storage.
pub fn memory_store(mode: BuildMode) -> Store {
    store_with(Arc::new(MemoryStorage::new()), mode)
}

pub fn store_with(storage: Arc<dyn Storage>, mode: BuildMode) -> Store {
    Store::builder(Config::default())
        .storage(storage)
        .mode(mode)
        .build()
}

/// Store persisting to `dir` through the default file storage.
pub fn file_store(dir: &Path, mode: BuildMode) -> Store {
    let mut config = Config::default();
    config.persist.dir = Some(dir.to_path_buf());
    Store::builder(config).mode(mode).build()
}

pub fn raw_record(dir: &Path) -> Option<String> {
    FileStorage::new(dir).get_item("root").unwrap()
}

pub fn sample_user() -> User {
    User {
        id: "u-42".to_string(),
        name: "Grace".to_string(),
        email: Some("grace@example.com".to_string()),
    }
}

/// Reads fine, refuses every write.
#[derive(Default)]
pub struct ReadOnlyStorage {
    pub inner: MemoryStorage,
    pub attempts: Mutex<usize>,
}

impl Storage for ReadOnlyStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), PersistError> {
        *self.attempts.lock() += 1;
        Err(PersistError::Rejected {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistError> {
        self.inner.remove_item(key)
    }
}
