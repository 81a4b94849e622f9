//! Persisted key-value storage.
//!
//! Every feature reads and writes its state through the [`KeyValueStore`]
//! capability instead of reaching for a global. Three backends are provided:
//! - [`MemoryStore`] - in-memory map with injectable failures
//! - [`EframeStore`] / [`EframeSnapshot`] - eframe's persisted storage
//! - [`FileStore`] - a JSON document on disk

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage is read-only")]
    ReadOnly,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("permission denied")]
    PermissionDenied,
    #[error("i/o error: {0}")]
    Io(String),
    #[error("stored data is corrupt: {0}")]
    Corrupt(String),
    /// Arbitrary failure detail, displayed verbatim.
    #[error("{0}")]
    Other(String),
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied,
            _ => StoreError::Io(err.to_string()),
        }
    }
}

/// String-keyed, string-valued persisted store.
pub trait KeyValueStore {
    /// Returns the text stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, mostly useful as a test fake.
///
/// Read and write failures can be injected independently; while a failure is
/// injected every matching call returns a clone of it and leaves the data alone.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<String, String>,
    read_failure: Option<StoreError>,
    write_failure: Option<StoreError>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            data: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn fail_reads_with(&mut self, err: StoreError) {
        self.read_failure = Some(err);
    }

    pub fn fail_writes_with(&mut self, err: StoreError) {
        self.write_failure = Some(err);
    }

    pub fn clear_failures(&mut self) {
        self.read_failure = None;
        self.write_failure = None;
    }

    /// Reads the raw entry, bypassing any injected failure.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if let Some(err) = &self.read_failure {
            return Err(err.clone());
        }
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(err) = &self.write_failure {
            return Err(err.clone());
        }
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Writable adapter over eframe's persisted storage.
///
/// eframe hands out storage only when the `persistence` feature found a place
/// to keep it, so a missing storage is reported as [`StoreError::Unavailable`].
pub struct EframeStore<'a> {
    storage: Option<&'a mut (dyn eframe::Storage + 'static)>,
}

impl<'a> EframeStore<'a> {
    pub fn new(storage: Option<&'a mut (dyn eframe::Storage + 'static)>) -> Self {
        Self { storage }
    }
}

impl KeyValueStore for EframeStore<'_> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_deref().ok_or(StoreError::Unavailable)?;
        Ok(storage.get_string(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_deref_mut().ok_or(StoreError::Unavailable)?;
        storage.set_string(key, value.to_string());
        storage.flush();
        Ok(())
    }
}

/// Read-only adapter over eframe's storage, as seen from the creation context.
pub struct EframeSnapshot<'a> {
    storage: Option<&'a dyn eframe::Storage>,
}

impl<'a> EframeSnapshot<'a> {
    pub fn new(storage: Option<&'a dyn eframe::Storage>) -> Self {
        Self { storage }
    }
}

impl KeyValueStore for EframeSnapshot<'_> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.ok_or(StoreError::Unavailable)?;
        Ok(storage.get_string(key))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::ReadOnly)
    }
}

/// Store backed by a JSON object file.
///
/// The file is re-read on every access and rewritten on every write, so two
/// processes sharing a file see each other's last completed write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text).map_err(|e| StoreError::Corrupt(e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| StoreError::Other(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
