//! JSON file backed document store.
//!
//! Entries are decoded one username at a time. An entry that does not decode
//! is left out of the loaded document but kept as raw JSON and written back
//! unchanged on the next save, so one damaged user never costs the others
//! their data.

use super::{Document, DocumentStore};
use crate::error::StorageError;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A document persisted as one pretty-printed JSON object on disk
pub struct JsonFileStore<T> {
    path: PathBuf,
    /// Raw entries from the last load that could not be decoded
    unreadable: Mutex<BTreeMap<String, Value>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            unreadable: Mutex::new(BTreeMap::new()),
            _marker: PhantomData,
        }
    }

    /// Usernames whose stored entry could not be decoded on the last load
    pub fn unreadable_entries(&self) -> Vec<String> {
        self.unreadable.lock().keys().cloned().collect()
    }

    /// Copy the current document into `backup_dir` as
    /// `<stem>_backup_<YYYYmmdd_HHMMSS>.<ext>`.
    ///
    /// Returns `None` when there is no document on disk yet.
    pub fn backup(&self, backup_dir: &Path) -> Result<Option<PathBuf>, StorageError> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| StorageError::InvalidPath(self.path.display().to_string()))?;
        let ext = self
            .path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("json");
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");

        std::fs::create_dir_all(backup_dir)?;
        let target = backup_dir.join(format!("{}_backup_{}.{}", stem, timestamp, ext));
        std::fs::copy(&self.path, &target)?;
        tracing::info!(source = %self.path.display(), target = %target.display(), "document backed up");
        Ok(Some(target))
    }

    /// Decode the on-disk object entry by entry. Entries that fail to decode
    /// are returned separately as raw JSON.
    fn read_entries(&self) -> (Document<T>, BTreeMap<String, Value>)
    where
        T: DeserializeOwned,
    {
        let empty = (Document::new(), BTreeMap::new());
        if !self.path.exists() {
            return empty;
        }

        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}, treating as empty", self.path.display(), e);
                return empty;
            }
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => entries,
            Ok(_) => {
                tracing::warn!(
                    "Top level of {} is not an object, treating as empty",
                    self.path.display()
                );
                return empty;
            }
            Err(e) => {
                tracing::warn!(
                    "Malformed JSON in {}: {}, treating as empty",
                    self.path.display(),
                    e
                );
                return empty;
            }
        };

        let mut document = Document::new();
        let mut unreadable = BTreeMap::new();
        for (key, entry) in entries {
            match <T as serde::Deserialize>::deserialize(&entry) {
                Ok(value) => {
                    document.insert(key, value);
                }
                Err(e) => {
                    tracing::warn!(
                        entry = %key,
                        "Unreadable entry in {}: {}, keeping it as stored",
                        self.path.display(),
                        e
                    );
                    unreadable.insert(key, entry);
                }
            }
        }
        (document, unreadable)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl<T> DocumentStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Document<T> {
        let (document, unreadable) = self.read_entries();
        *self.unreadable.lock() = unreadable;
        document
    }

    fn save(&self, document: &Document<T>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut entries: BTreeMap<String, Value> = BTreeMap::new();
        for (key, value) in document {
            entries.insert(key.clone(), serde_json::to_value(value)?);
        }
        for (key, raw) in self.unreadable.lock().iter() {
            if entries.contains_key(key) {
                tracing::warn!(entry = %key, "Replacing unreadable entry in {}", self.path.display());
            } else {
                entries.insert(key.clone(), raw.clone());
            }
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries.serialize(&mut serializer)?;

        // Write beside the target, then swap it in
        let temp = self.temp_path();
        std::fs::write(&temp, &buf)?;
        if let Err(e) = std::fs::rename(&temp, &self.path) {
            let _ = std::fs::remove_file(&temp);
            return Err(StorageError::IoError(e));
        }

        tracing::debug!(path = %self.path.display(), users = entries.len(), "document saved");
        Ok(())
    }

    fn is_unreadable(&self, key: &str) -> bool {
        self.unreadable.lock().contains_key(key)
    }

    fn discard_unreadable(&self, key: &str) {
        if self.unreadable.lock().remove(key).is_some() {
            tracing::warn!(entry = %key, "Discarding unreadable entry in {}", self.path.display());
        }
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
