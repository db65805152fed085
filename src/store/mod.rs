//! Document Store
//!
//! A document is the whole JSON object for one store (users or notes), keyed by
//! username. Stores load and save documents as a unit; there is no partial
//! update. Every mutation goes through [`transact`].

pub mod json_file;

use crate::error::StorageError;
use std::collections::BTreeMap;
use std::path::Path;

pub use json_file::JsonFileStore;

/// Username -> per-user value
pub type Document<T> = BTreeMap<String, T>;

/// Persistence port for one document
pub trait DocumentStore<T>: Send + Sync {
    /// Load the full document. Missing or unreadable documents load as empty.
    fn load(&self) -> Document<T>;

    /// Replace the persisted document with `document`
    fn save(&self, document: &Document<T>) -> Result<(), StorageError>;

    /// Location of the persisted document
    fn location(&self) -> &Path;

    /// Whether the last load found `key` but could not decode it
    fn is_unreadable(&self, _key: &str) -> bool {
        false
    }

    /// Drop an entry the last load could not decode, so the next save
    /// omits it instead of writing it back
    fn discard_unreadable(&self, _key: &str) {}
}

/// Serde helper: a `null` field deserializes like an absent one
pub(crate) fn null_as_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: serde::Deserializer<'de>,
    V: Default + serde::Deserialize<'de>,
{
    Ok(<Option<V> as serde::Deserialize>::deserialize(deserializer)?.unwrap_or_default())
}

/// Load the full document, apply `mutation`, and persist the result.
///
/// If `mutation` fails nothing is written. If the save fails the error is
/// returned and the caller must treat the mutation as not having happened.
pub fn transact<T, S, R, E, F>(store: &S, mutation: F) -> Result<R, E>
where
    S: DocumentStore<T> + ?Sized,
    F: FnOnce(&mut Document<T>) -> Result<R, E>,
    E: From<StorageError>,
{
    let mut document = store.load();
    let outcome = mutation(&mut document)?;
    store.save(&document).map_err(E::from)?;
    Ok(outcome)
}
