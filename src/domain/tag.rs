//! Tags: a stable id paired with a mutable, human-readable label.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TagId;

/// A label that can be attached to any number of notes.
///
/// Notes refer to a tag by its [`TagId`] only, so the label can change
/// without touching a single note. Labels need not be unique.
///
/// # Examples
///
/// ```
/// use quill::domain::Tag;
///
/// let tag = Tag::new("  work ").unwrap();
/// assert_eq!(tag.label(), "work");
/// assert!(tag.matches_label("WORK"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    label: String,
}

/// Error returned when a tag label is rejected.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

/// Trims a label and checks that something is left.
pub fn normalize_label(label: &str) -> Result<String, ParseTagError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ParseTagError("tag label cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

impl Tag {
    /// Creates a tag with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the label is empty or whitespace-only.
    pub fn new(label: &str) -> Result<Self, ParseTagError> {
        Ok(Self {
            id: TagId::new(),
            label: normalize_label(label)?,
        })
    }

    /// Builds a tag from an existing id and label, as stored.
    pub fn with_id(id: TagId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    pub fn id(&self) -> &TagId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns a copy of this tag carrying a different label.
    pub fn relabeled(&self, label: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            label: label.into(),
        }
    }

    /// Case-insensitive comparison against a user-typed label.
    pub fn matches_label(&self, label: &str) -> bool {
        self.label.to_lowercase() == label.trim().to_lowercase()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
