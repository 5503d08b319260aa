//! The application state: notes and tags, their persistence, and the
//! projected view.

mod commands;
pub mod notes;
mod projection;
pub mod registry;

pub use projection::{Projection, project};

use std::sync::Arc;
use thiserror::Error;

use crate::domain::{Note, NoteFilter, NoteId, ParseTagError, RawNote, Tag, TagId};
use crate::store::{KeyValueStore, PersistentCell, StorageError};

/// Storage key holding the JSON array of stored notes.
pub const NOTES_KEY: &str = "NOTES";

/// Storage key holding the JSON array of tags.
pub const TAGS_KEY: &str = "TAGS";

/// Errors raised by notebook commands.
#[derive(Debug, Error)]
pub enum NotebookError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    InvalidTag(#[from] ParseTagError),
}

/// Result type for notebook operations.
pub type NotebookResult<T> = Result<T, NotebookError>;

/// A tag together with the number of notes that reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUsage {
    pub tag: Tag,
    pub notes: usize,
}

/// Owns the note store, the tag registry, and the storage they persist to.
///
/// All reads and commands go through this one value; nothing is global.
/// Both collections are immutable snapshots that get replaced wholesale by
/// commands, which is what lets [`Notebook::notes`] hand back a cached
/// projection when nothing changed.
pub struct Notebook<S: KeyValueStore> {
    store: S,
    notes: PersistentCell<Vec<RawNote>>,
    tags: PersistentCell<Vec<Tag>>,
    projection: Projection,
}

impl<S: KeyValueStore> Notebook<S> {
    /// Loads notes and tags from `store`. Unset keys start out empty.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read or holds a value that does not
    /// parse. Nothing is repaired or overwritten in that case.
    pub fn open(store: S) -> NotebookResult<Self> {
        let notes = PersistentCell::load_or_else(&store, NOTES_KEY, Vec::new)?;
        let tags = PersistentCell::load_or_else(&store, TAGS_KEY, Vec::new)?;
        tracing::debug!(
            notes = notes.get().len(),
            tags = tags.get().len(),
            "opened notebook"
        );

        Ok(Self {
            store,
            notes,
            tags,
            projection: Projection::new(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// The stored notes, tag references unresolved.
    pub fn raw_notes(&self) -> &Arc<Vec<RawNote>> {
        self.notes.get()
    }

    /// The tag registry in insertion order.
    pub fn tags(&self) -> &Arc<Vec<Tag>> {
        self.tags.get()
    }

    pub fn tag(&self, id: &TagId) -> Option<&Tag> {
        registry::find(self.tags.get(), id)
    }

    /// Every note with its tags resolved.
    pub fn notes(&mut self) -> Arc<Vec<Note>> {
        self.projection.get(self.notes.get(), self.tags.get())
    }

    pub fn note(&mut self, id: &NoteId) -> Option<Note> {
        self.notes().iter().find(|n| n.id() == id).cloned()
    }

    /// Projected notes passing `filter`, in stored order.
    pub fn filtered(&mut self, filter: &NoteFilter) -> Vec<Note> {
        let notes = self.notes();
        filter.apply(&notes).into_iter().cloned().collect()
    }

    /// Each tag with the number of notes currently showing it.
    pub fn tag_usage(&mut self) -> Vec<TagUsage> {
        let notes = self.notes();
        self.tags
            .get()
            .iter()
            .map(|tag| TagUsage {
                tag: tag.clone(),
                notes: notes.iter().filter(|n| n.has_tag(tag.id())).count(),
            })
            .collect()
    }
}
