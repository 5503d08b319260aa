//! The three note shapes and the conversions between them.
//!
//! - [`NoteData`] is what a user submits when creating or editing a note.
//! - [`RawNote`] is what gets persisted: tags are referenced by id only.
//! - [`Note`] is the projected view, with tag ids resolved against the
//!   current tag registry.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::{NoteId, Tag, TagId};

/// Error returned when a note submission is missing a required field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidNoteError {
    #[error("note title cannot be empty")]
    EmptyTitle,

    #[error("note body cannot be empty")]
    EmptyBody,
}

// ===========================================
// NoteData
// ===========================================

/// A note submission: title, markdown body and the selected tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteData {
    title: String,
    markdown: String,
    tags: Vec<Tag>,
}

impl NoteData {
    /// Validates a submission.
    ///
    /// The title is trimmed. The body is kept verbatim but must contain
    /// something other than whitespace. Repeated tags are collapsed to their
    /// first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNoteError` if the title or the body is blank.
    pub fn new(
        title: &str,
        markdown: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Result<Self, InvalidNoteError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(InvalidNoteError::EmptyTitle);
        }

        let markdown = markdown.into();
        if markdown.trim().is_empty() {
            return Err(InvalidNoteError::EmptyBody);
        }

        let mut seen = HashSet::new();
        let tags = tags
            .into_iter()
            .filter(|t| seen.insert(t.id().clone()))
            .collect();

        Ok(Self {
            title: title.to_string(),
            markdown,
            tags,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The tag references that get persisted for this submission.
    pub fn tag_ids(&self) -> Vec<TagId> {
        self.tags.iter().map(|t| t.id().clone()).collect()
    }
}

// ===========================================
// RawNote
// ===========================================

/// The persisted note shape.
///
/// `tag_ids` may name tags that no longer exist; those references are left
/// in place and hidden by projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNote {
    id: NoteId,
    title: String,
    markdown: String,
    tag_ids: Vec<TagId>,
}

impl RawNote {
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        markdown: impl Into<String>,
        tag_ids: Vec<TagId>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            markdown: markdown.into(),
            tag_ids,
        }
    }

    /// Converts a submission into a stored note under the given id.
    pub fn from_data(id: NoteId, data: &NoteData) -> Self {
        Self::new(id, data.title(), data.markdown(), data.tag_ids())
    }

    /// Returns this note with every field but the id replaced by `data`.
    pub fn with_data(&self, data: &NoteData) -> Self {
        Self::from_data(self.id.clone(), data)
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn tag_ids(&self) -> &[TagId] {
        &self.tag_ids
    }

    /// Resolves tag references through `lookup`.
    ///
    /// Tags come out in the order their ids are listed. Ids that `lookup`
    /// cannot resolve are dropped, as are repeats of an id already resolved.
    pub fn project<'a, F>(&self, lookup: F) -> Note
    where
        F: Fn(&TagId) -> Option<&'a Tag>,
    {
        let mut seen = HashSet::new();
        let tags = self
            .tag_ids
            .iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| lookup(id).cloned())
            .collect();

        Note {
            id: self.id.clone(),
            title: self.title.clone(),
            markdown: self.markdown.clone(),
            tags,
        }
    }
}

// ===========================================
// Note
// ===========================================

/// A note joined with its current tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    title: String,
    markdown: String,
    tags: Vec<Tag>,
}

impl Note {
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn has_tag(&self, id: &TagId) -> bool {
        self.tags.iter().any(|t| t.id() == id)
    }

    /// The submission that would recreate this note as it currently looks.
    ///
    /// Used to prefill an edit. Returns `None` for stored notes that would
    /// not pass validation today (blank title or body).
    pub fn to_data(&self) -> Option<NoteData> {
        NoteData::new(&self.title, self.markdown.clone(), self.tags.clone()).ok()
    }
}
