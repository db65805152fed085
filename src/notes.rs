//! Notes
//!
//! Per-user note lists with optional lock keys, stored as one JSON document.

pub mod model;
pub mod repository;
pub mod transfer;

pub use model::{timestamp_now, Note, NoteStatistics, TIMESTAMP_FORMAT};
pub use repository::{AddedNote, NoteEdit, NoteRepository, NotesDocument};
pub use transfer::{sanitize_filename, ExportedNote, ImportSummary};
