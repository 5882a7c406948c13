// SPDX-License-Identifier: MPL-2.0
//! On-device key/value storage.
//!
//! Values are opaque byte strings addressed by a text key. [`FileStore`]
//! keeps every entry in a single CBOR file (`storage.cbor`) in the app data
//! directory and rewrites it on each write. [`MemoryStore`] keeps entries in
//! memory only and backs the tests.
//!
//! # Path Resolution
//!
//! 1. Use [`FileStore::open_at`] with an explicit file path
//! 2. Pass a base directory to [`FileStore::open`]
//! 3. Set `ADENA_DATA_DIR` or `--data-dir`
//! 4. Falls back to the platform data directory

use crate::app::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
pub const STORAGE_FILE: &str = "storage.cbor";

/// Byte-oriented key/value storage.
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&[u8]>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be made durable.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()>;
}

// =============================================================================
// Memory Store
// =============================================================================

/// Volatile storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

// =============================================================================
// File Store
// =============================================================================

/// Storage persisted to a CBOR file.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// `None` when no data directory could be resolved; writes then stay in
    /// memory.
    path: Option<PathBuf>,
    entries: BTreeMap<String, Vec<u8>>,
}

impl FileStore {
    /// Opens the store in `base_dir`, or in the resolved data directory.
    ///
    /// Returns the store and an optional warning key. A missing file is not
    /// an error; an unreadable or corrupted one yields an empty store and a
    /// warning.
    pub fn open(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        match paths::get_app_data_dir_with_override(base_dir) {
            Some(mut path) => {
                path.push(STORAGE_FILE);
                Self::open_at(path)
            }
            None => {
                tracing::warn!("no data directory available, storage will not persist");
                (
                    Self {
                        path: None,
                        entries: BTreeMap::new(),
                    },
                    Some("notification-storage-path-error".to_string()),
                )
            }
        }
    }

    /// Opens the store backed by the file at `path`.
    pub fn open_at(path: PathBuf) -> (Self, Option<String>) {
        let (entries, warning) = if path.exists() {
            match read_entries(&path) {
                Ok(entries) => (entries, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "discarding unreadable storage");
                    (
                        BTreeMap::new(),
                        Some("notification-storage-read-error".to_string()),
                    )
                }
            }
        } else {
            (BTreeMap::new(), None)
        };
        (
            Self {
                path: Some(path),
                entries,
            },
            warning,
        )
    }

    /// Path of the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(&self.entries, writer).map_err(Error::from)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, Vec<u8>>> {
    let reader = BufReader::new(fs::File::open(path)?);
    ciborium::from_reader(reader).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_replaces_values() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", vec![1]).unwrap();
        store.set("k", vec![2, 3]).unwrap();
        assert_eq!(store.get("k"), Some(&[2u8, 3][..]));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (mut store, warning) = FileStore::open(Some(base_dir.clone()));
        assert!(warning.is_none());
        store.set("AddToCart", vec![9, 8, 7]).expect("write should succeed");
        assert!(base_dir.join(STORAGE_FILE).exists());

        let (reopened, warning) = FileStore::open(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(reopened.get("AddToCart"), Some(&[9u8, 8, 7][..]));
    }

    #[test]
    fn file_store_creates_missing_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("a").join("b").join(STORAGE_FILE);
        let (mut store, _) = FileStore::open_at(path.clone());
        store.set("x", Vec::new()).expect("write should succeed");
        assert!(path.exists());
        assert_eq!(store.path(), Some(path.as_path()));
    }

    #[test]
    fn corrupted_file_yields_empty_store_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join(STORAGE_FILE);
        fs::write(&path, b"\xff\x00not cbor").expect("write file");

        let (store, warning) = FileStore::open_at(path);
        assert_eq!(warning.as_deref(), Some("notification-storage-read-error"));
        assert_eq!(store.get("AddToCart"), None);
    }
}
