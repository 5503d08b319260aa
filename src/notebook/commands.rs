//! Mutating commands.
//!
//! Every command computes the replacement collection, persists it, and only
//! then swaps it in. Commands that name an id which does not exist change
//! nothing, write nothing, and return `Ok(false)`.

use tracing::{debug, info};

use super::{Notebook, NotebookResult, notes, registry};
use crate::domain::{NoteData, NoteId, Tag, TagId, normalize_label};
use crate::store::KeyValueStore;

impl<S: KeyValueStore> Notebook<S> {
    // ===========================================
    // Notes
    // ===========================================

    /// Stores a new note and returns its freshly generated id.
    pub fn create_note(&mut self, data: &NoteData) -> NotebookResult<NoteId> {
        let id = NoteId::new();
        let next = notes::create(self.notes.get(), id.clone(), data);
        self.notes.replace(&mut self.store, next)?;
        info!(note = %id, tags = data.tags().len(), "created note");
        Ok(id)
    }

    /// Replaces the title, body and tags of an existing note.
    pub fn update_note(&mut self, id: &NoteId, data: &NoteData) -> NotebookResult<bool> {
        let Some(next) = notes::update(self.notes.get(), id, data) else {
            debug!(note = %id, "update skipped, no such note");
            return Ok(false);
        };
        self.notes.replace(&mut self.store, next)?;
        info!(note = %id, "updated note");
        Ok(true)
    }

    pub fn delete_note(&mut self, id: &NoteId) -> NotebookResult<bool> {
        let Some(next) = notes::delete(self.notes.get(), id) else {
            debug!(note = %id, "delete skipped, no such note");
            return Ok(false);
        };
        self.notes.replace(&mut self.store, next)?;
        info!(note = %id, "deleted note");
        Ok(true)
    }

    // ===========================================
    // Tags
    // ===========================================

    /// Appends `tag` to the registry.
    pub fn add_tag(&mut self, tag: Tag) -> NotebookResult<()> {
        let id = tag.id().clone();
        let next = registry::add(self.tags.get(), tag);
        self.tags.replace(&mut self.store, next)?;
        info!(tag = %id, "added tag");
        Ok(())
    }

    /// Creates a tag with a fresh id, registers it, and returns it.
    pub fn create_tag(&mut self, label: &str) -> NotebookResult<Tag> {
        let tag = Tag::new(label)?;
        self.add_tag(tag.clone())?;
        Ok(tag)
    }

    /// Changes a tag's label. Every note referencing the tag sees the new
    /// label on its next projection.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::InvalidTag` if the label is blank.
    pub fn rename_tag(&mut self, id: &TagId, label: &str) -> NotebookResult<bool> {
        let label = normalize_label(label)?;
        let Some(next) = registry::rename(self.tags.get(), id, &label) else {
            debug!(tag = %id, "rename skipped, no such tag or same label");
            return Ok(false);
        };
        self.tags.replace(&mut self.store, next)?;
        info!(tag = %id, label = %label, "renamed tag");
        Ok(true)
    }

    /// Removes a tag from the registry. Notes keep their reference, which
    /// projection then hides.
    pub fn delete_tag(&mut self, id: &TagId) -> NotebookResult<bool> {
        let Some(next) = registry::remove(self.tags.get(), id) else {
            debug!(tag = %id, "delete skipped, no such tag");
            return Ok(false);
        };
        self.tags.replace(&mut self.store, next)?;
        info!(tag = %id, "deleted tag");
        Ok(true)
    }
}
