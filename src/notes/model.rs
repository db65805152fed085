//! Note entity and its persisted shape.

use crate::codec;
use crate::store::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Timestamp format used for `created_at` / `updated_at`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in [`TIMESTAMP_FORMAT`]
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// A single note
///
/// Content is held encoded exactly as persisted. Lockedness is derived from
/// the lock hash; `is_locked` only exists in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredNote", into = "StoredNote")]
pub struct Note {
    pub id: u64,
    content: String,
    lock_hash: String,
    pub created_at: String,
    pub updated_at: String,
    pub tags: Vec<String>,
    pub favorite: bool,
}

impl Note {
    /// Create a note; an empty or absent lock key leaves it unlocked
    pub fn new(id: u64, content: &str, lock_key: Option<&str>, tags: Vec<String>) -> Self {
        let now = timestamp_now();
        let mut note = Self {
            id,
            content: codec::encode(content),
            lock_hash: String::new(),
            created_at: now.clone(),
            updated_at: now,
            tags,
            favorite: false,
        };
        if let Some(key) = lock_key.filter(|k| !k.is_empty()) {
            note.lock_with(key);
        }
        note
    }

    /// Decoded content, or the corruption sentinel
    pub fn content(&self) -> String {
        codec::decode(&self.content)
    }

    /// Content as persisted
    pub fn encoded_content(&self) -> &str {
        &self.content
    }

    pub fn lock_hash(&self) -> &str {
        &self.lock_hash
    }

    pub fn is_locked(&self) -> bool {
        !self.lock_hash.is_empty()
    }

    /// Whether `key` opens this note. Unlocked notes accept anything.
    pub fn accepts_key(&self, key: &str) -> bool {
        !self.is_locked() || codec::verify_secret(key, &self.lock_hash)
    }

    /// Replace the content and refresh `updated_at`
    pub fn set_content(&mut self, content: &str) {
        self.content = codec::encode(content);
        self.updated_at = timestamp_now();
    }

    pub fn lock_with(&mut self, key: &str) {
        self.lock_hash = codec::hash_secret(key);
    }

    pub fn unlock(&mut self) {
        self.lock_hash.clear();
    }

    /// Case-insensitive substring match on the decoded content
    pub fn content_contains(&self, needle_lower: &str) -> bool {
        self.content().to_lowercase().contains(needle_lower)
    }

    /// Case-insensitive substring match on any tag
    pub fn tag_contains(&self, needle_lower: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle_lower))
    }

    /// Case-insensitive exact match on any tag
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

/// Aggregate counts over one user's notes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStatistics {
    pub total: usize,
    pub locked: usize,
    pub unlocked: usize,
    pub favorites: usize,
    pub unique_tags: usize,
}

impl NoteStatistics {
    pub fn from_notes(notes: &[Note]) -> Self {
        let locked = notes.iter().filter(|n| n.is_locked()).count();
        let unique_tags: BTreeSet<&str> = notes
            .iter()
            .flat_map(|n| n.tags.iter().map(String::as_str))
            .collect();
        Self {
            total: notes.len(),
            locked,
            unlocked: notes.len() - locked,
            favorites: notes.iter().filter(|n| n.favorite).count(),
            unique_tags: unique_tags.len(),
        }
    }
}

/// On-disk form of a note
///
/// Only `content` is required. Other fields fall back to their defaults when
/// absent or `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredNote {
    #[serde(default, deserialize_with = "null_as_default")]
    id: u64,
    content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    lock: String,
    #[serde(default, deserialize_with = "null_as_default")]
    is_locked: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    updated_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    favorite: bool,
}

impl From<StoredNote> for Note {
    fn from(stored: StoredNote) -> Self {
        if stored.is_locked != !stored.lock.is_empty() {
            tracing::warn!(
                note_id = stored.id,
                is_locked = stored.is_locked,
                "is_locked disagrees with lock hash; trusting the hash"
            );
        }
        Self {
            id: stored.id,
            content: stored.content,
            lock_hash: stored.lock,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
            tags: stored.tags,
            favorite: stored.favorite,
        }
    }
}

impl From<Note> for StoredNote {
    fn from(note: Note) -> Self {
        Self {
            is_locked: note.is_locked(),
            id: note.id,
            content: note.content,
            lock: note.lock_hash,
            created_at: note.created_at,
            updated_at: note.updated_at,
            tags: note.tags,
            favorite: note.favorite,
        }
    }
}
