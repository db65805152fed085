//! Export and import of notes as plain JSON arrays.
//!
//! Exported files hold decoded content, so exporting locked notes writes their
//! text in the clear. That only happens when explicitly requested.

use crate::error::NoteError;
use crate::notes::model::Note;
use crate::notes::repository::NoteRepository;
use crate::store::null_as_default;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One entry of an export file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNote {
    pub content: String,
    pub tags: Vec<String>,
    pub favorite: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Note> for ExportedNote {
    fn from(note: &Note) -> Self {
        Self {
            content: note.content(),
            tags: note.tags.clone(),
            favorite: note.favorite,
            created_at: note.created_at.clone(),
            updated_at: note.updated_at.clone(),
        }
    }
}

/// One entry of an import file; everything but `content` is optional
#[derive(Debug, Deserialize)]
struct ImportRecord {
    #[serde(default)]
    content: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<String>,
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Replace characters that are invalid in file names with `_`
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c => c,
        })
        .collect()
}

impl NoteRepository {
    /// Write eligible notes to `destination`; returns how many were written
    pub fn export(
        &self,
        username: &str,
        destination: &Path,
        include_locked: bool,
    ) -> Result<usize, NoteError> {
        let exported: Vec<ExportedNote> = self
            .list(username, include_locked)
            .iter()
            .map(ExportedNote::from)
            .collect();
        if exported.is_empty() {
            return Err(NoteError::NothingToExport);
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        exported
            .serialize(&mut serializer)
            .map_err(|e| NoteError::Format(e.to_string()))?;

        std::fs::write(destination, &buf).map_err(|source| NoteError::ExportFailed {
            path: destination.to_path_buf(),
            source,
        })?;

        info!(
            user = username,
            count = exported.len(),
            include_locked,
            destination = %destination.display(),
            "notes exported"
        );
        Ok(exported.len())
    }

    /// Add every record with non-empty content from `source`
    ///
    /// The file is parsed completely before anything is added, so a malformed
    /// file imports nothing. All records are appended in one save.
    pub fn import(&self, username: &str, source: &Path) -> Result<ImportSummary, NoteError> {
        let raw = std::fs::read_to_string(source)
            .map_err(|e| NoteError::Format(format!("{}: {}", source.display(), e)))?;
        let records: Vec<ImportRecord> = serde_json::from_str(&raw)
            .map_err(|e| NoteError::Format(format!("{}: {}", source.display(), e)))?;

        let total = records.len();
        let accepted: Vec<(String, Vec<String>)> = records
            .into_iter()
            .filter_map(|r| match r.content {
                Some(content) if !content.is_empty() => Some((content, r.tags)),
                _ => None,
            })
            .collect();
        let imported = accepted.len();

        if imported > 0 {
            self.transact(|doc| {
                let notes = doc.entry(username.to_string()).or_default();
                for (content, tags) in accepted {
                    let id = notes.len() as u64 + 1;
                    notes.push(Note::new(id, &content, None, tags));
                }
                Ok(())
            })?;
        }

        let summary = ImportSummary {
            imported,
            skipped: total - imported,
        };
        info!(user = username, imported, skipped = summary.skipped, "notes imported");
        Ok(summary)
    }
}
