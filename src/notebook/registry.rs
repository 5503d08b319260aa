//! Tag registry updates.
//!
//! Each function takes the current tag list and returns the replacement
//! list, or `None` when the update would change nothing. The input is never
//! modified in place.

use crate::domain::{Tag, TagId};

/// Looks up a tag by id.
pub fn find<'a>(tags: &'a [Tag], id: &TagId) -> Option<&'a Tag> {
    tags.iter().find(|t| t.id() == id)
}

/// Appends `tag`. Id uniqueness is the caller's responsibility.
pub fn add(tags: &[Tag], tag: Tag) -> Vec<Tag> {
    let mut next = Vec::with_capacity(tags.len() + 1);
    next.extend_from_slice(tags);
    next.push(tag);
    next
}

/// Replaces the label of the tag with `id`, keeping its position.
pub fn rename(tags: &[Tag], id: &TagId, label: &str) -> Option<Vec<Tag>> {
    let current = find(tags, id)?;
    if current.label() == label {
        return None;
    }

    Some(
        tags.iter()
            .map(|t| {
                if t.id() == id {
                    t.relabeled(label)
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

/// Removes the tag with `id`. Notes referencing it are left alone.
pub fn remove(tags: &[Tag], id: &TagId) -> Option<Vec<Tag>> {
    find(tags, id)?;
    Some(tags.iter().filter(|t| t.id() != id).cloned().collect())
}
