//! Note repository: per-user ordered note lists over a [`DocumentStore`].
//!
//! Notes are addressed by their 0-based position in the user's list. Locked
//! notes can only be viewed, edited, or deleted with their key, and never
//! appear in search results.

use crate::error::NoteError;
use crate::notes::model::{Note, NoteStatistics};
use crate::store::{self, Document, DocumentStore};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

/// The notes document: username -> ordered notes
pub type NotesDocument = Document<Vec<Note>>;

/// Fields to change in [`NoteRepository::edit`]; `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct NoteEdit {
    pub new_content: Option<String>,
    /// `Some("")` removes the lock, any other `Some` replaces it
    pub new_lock: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NoteEdit {
    pub fn is_empty(&self) -> bool {
        self.new_content.is_none() && self.new_lock.is_none() && self.tags.is_none()
    }
}

/// Result of a successful add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddedNote {
    pub index: usize,
    pub id: u64,
}

pub struct NoteRepository {
    store: Arc<dyn DocumentStore<Vec<Note>>>,
    write_lock: Mutex<()>,
}

impl NoteRepository {
    pub fn new(store: Arc<dyn DocumentStore<Vec<Note>>>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Run one read-modify-write cycle against the notes document
    pub(crate) fn transact<R, F>(&self, mutation: F) -> Result<R, NoteError>
    where
        F: FnOnce(&mut NotesDocument) -> Result<R, NoteError>,
    {
        let _guard = self.write_lock.lock();
        store::transact(self.store.as_ref(), mutation)
    }

    fn user_notes(&self, username: &str) -> Vec<Note> {
        self.store.load().remove(username).unwrap_or_default()
    }

    /// Append a new note
    pub fn add(
        &self,
        username: &str,
        content: &str,
        lock_key: Option<&str>,
        tags: Vec<String>,
    ) -> Result<AddedNote, NoteError> {
        if content.is_empty() {
            return Err(NoteError::EmptyContent);
        }
        let added = self.transact(|doc| {
            let notes = doc.entry(username.to_string()).or_default();
            let id = notes.len() as u64 + 1;
            notes.push(Note::new(id, content, lock_key, tags));
            Ok(AddedNote {
                index: notes.len() - 1,
                id,
            })
        })?;
        info!(user = username, index = added.index, id = added.id, "note added");
        Ok(added)
    }

    /// All notes in insertion order; locked notes are omitted unless `include_locked`
    pub fn list(&self, username: &str, include_locked: bool) -> Vec<Note> {
        let mut notes = self.user_notes(username);
        if !include_locked {
            notes.retain(|n| !n.is_locked());
        }
        debug!(user = username, count = notes.len(), "notes listed");
        notes
    }

    pub fn get_by_index(&self, username: &str, index: usize) -> Result<Note, NoteError> {
        let mut notes = self.user_notes(username);
        let len = notes.len();
        if index >= len {
            return Err(NoteError::NotFound { index, len });
        }
        Ok(notes.swap_remove(index))
    }

    /// Decoded content of a note, passing the lock gate
    pub fn view(&self, username: &str, index: usize, key: Option<&str>) -> Result<String, NoteError> {
        let note = self.get_by_index(username, index)?;
        check_key(&note, key)?;
        debug!(user = username, index, "note viewed");
        Ok(note.content())
    }

    /// Apply `edit` to a note after passing the lock gate; returns the updated note
    pub fn edit(
        &self,
        username: &str,
        index: usize,
        edit: NoteEdit,
        key: Option<&str>,
    ) -> Result<Note, NoteError> {
        if matches!(edit.new_content.as_deref(), Some("")) {
            return Err(NoteError::EmptyContent);
        }
        let updated = self.transact(|doc| {
            let note = note_mut(doc, username, index)?;
            check_key(note, key)?;

            if let Some(content) = &edit.new_content {
                note.set_content(content);
            }
            match edit.new_lock.as_deref() {
                None => {}
                Some("") => note.unlock(),
                Some(new_key) => note.lock_with(new_key),
            }
            if let Some(tags) = edit.tags {
                note.tags = tags;
            }
            Ok(note.clone())
        })?;
        info!(user = username, index, locked = updated.is_locked(), "note edited");
        Ok(updated)
    }

    /// Remove a note after passing the lock gate; later notes shift down by one
    pub fn delete(&self, username: &str, index: usize, key: Option<&str>) -> Result<Note, NoteError> {
        let removed = self.transact(|doc| {
            let note = note_mut(doc, username, index)?;
            check_key(note, key)?;
            let notes = doc
                .get_mut(username)
                .ok_or(NoteError::NotFound { index, len: 0 })?;
            Ok(notes.remove(index))
        })?;
        info!(user = username, index, id = removed.id, "note deleted");
        Ok(removed)
    }

    /// Case-insensitive keyword search over unlocked notes
    pub fn search(&self, username: &str, keyword: &str, search_tags: bool) -> Vec<(usize, Note)> {
        let needle = keyword.to_lowercase();
        let results: Vec<(usize, Note)> = self
            .user_notes(username)
            .into_iter()
            .enumerate()
            .filter(|(_, note)| !note.is_locked())
            .filter(|(_, note)| {
                note.content_contains(&needle) || (search_tags && note.tag_contains(&needle))
            })
            .collect();
        debug!(user = username, matches = results.len(), search_tags, "notes searched");
        results
    }

    /// Unlocked notes carrying `tag` (case-insensitive exact match)
    pub fn by_tag(&self, username: &str, tag: &str) -> Vec<(usize, Note)> {
        self.user_notes(username)
            .into_iter()
            .enumerate()
            .filter(|(_, note)| !note.is_locked() && note.has_tag(tag))
            .collect()
    }

    /// Notes marked favorite, locked ones included
    pub fn favorites(&self, username: &str) -> Vec<(usize, Note)> {
        self.user_notes(username)
            .into_iter()
            .enumerate()
            .filter(|(_, note)| note.favorite)
            .collect()
    }

    /// Flip the favorite flag; returns the new value
    pub fn toggle_favorite(&self, username: &str, index: usize) -> Result<bool, NoteError> {
        let favorite = self.transact(|doc| {
            let note = note_mut(doc, username, index)?;
            note.favorite = !note.favorite;
            Ok(note.favorite)
        })?;
        info!(user = username, index, favorite, "favorite toggled");
        Ok(favorite)
    }

    pub fn statistics(&self, username: &str) -> NoteStatistics {
        NoteStatistics::from_notes(&self.user_notes(username))
    }

    /// Drop every note belonging to `username`; returns how many were removed
    pub fn clear(&self, username: &str) -> Result<usize, NoteError> {
        let removed = self.transact(|doc| {
            self.store.discard_unreadable(username);
            Ok(doc.remove(username).map_or(0, |n| n.len()))
        })?;
        info!(user = username, removed, "notes cleared");
        Ok(removed)
    }
}

fn note_mut<'a>(
    doc: &'a mut NotesDocument,
    username: &str,
    index: usize,
) -> Result<&'a mut Note, NoteError> {
    let len = doc.get(username).map_or(0, Vec::len);
    doc.get_mut(username)
        .and_then(|notes| notes.get_mut(index))
        .ok_or(NoteError::NotFound { index, len })
}

/// The lock gate shared by view, edit, and delete
fn check_key(note: &Note, key: Option<&str>) -> Result<(), NoteError> {
    if !note.is_locked() {
        return Ok(());
    }
    match key {
        None => Err(NoteError::KeyRequired),
        Some(key) if note.accepts_key(key) => Ok(()),
        Some(_) => Err(NoteError::WrongKey),
    }
}
