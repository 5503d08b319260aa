//! Builder for seeded notes with sensible defaults.

use quill::domain::{NoteId, RawNote, TagId};

/// Builder for creating stored notes directly, bypassing the CLI.
///
/// Tag references are raw ids, so a test can seed dangling references as
/// easily as valid ones.
#[derive(Debug, Clone)]
pub struct TestNote {
    id: NoteId,
    title: String,
    body: String,
    tag_ids: Vec<TagId>,
}

impl TestNote {
    /// Creates a new test note with the given title and a placeholder body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            body: "Body text.".to_string(),
            tag_ids: Vec::new(),
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: &str) -> Self {
        self.id = id.parse().expect("Invalid NoteId");
        self
    }

    /// References a tag id.
    pub fn tag_id(mut self, id: &str) -> Self {
        self.tag_ids.push(id.parse().expect("Invalid TagId"));
        self
    }

    /// Sets the body content.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the note's id.
    pub fn get_id(&self) -> &NoteId {
        &self.id
    }

    /// Converts to the stored note shape.
    pub fn to_raw(&self) -> RawNote {
        RawNote::new(
            self.id.clone(),
            self.title.clone(),
            self.body.clone(),
            self.tag_ids.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let raw = TestNote::new("Title").to_raw();
        assert_eq!(raw.title(), "Title");
        assert!(!raw.markdown().is_empty());
        assert!(raw.tag_ids().is_empty());
    }

    #[test]
    fn test_note_builder_sets_fields() {
        let raw = TestNote::new("Title")
            .id("n1")
            .tag_id("t1")
            .tag_id("t2")
            .body("hello")
            .to_raw();
        assert_eq!(raw.id().as_str(), "n1");
        assert_eq!(raw.markdown(), "hello");
        assert_eq!(raw.tag_ids().len(), 2);
    }
}
