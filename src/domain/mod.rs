//! Core types: Tag, the three note shapes, ids, and filtering

mod filter;
mod id;
mod note;
mod tag;

pub use filter::{NoteFilter, filter_notes};
pub use id::{NoteId, ParseIdError, TagId};
pub use note::{InvalidNoteError, Note, NoteData, RawNote};
pub use tag::{ParseTagError, Tag, normalize_label};
