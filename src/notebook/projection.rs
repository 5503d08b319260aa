//! Joining stored notes with the current tags.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

use crate::domain::{Note, RawNote, Tag, TagId};

/// Resolves every note's tag references against `tags`.
///
/// Tags appear in the order each note lists them; references to tags that
/// no longer exist are dropped.
pub fn project(notes: &[RawNote], tags: &[Tag]) -> Vec<Note> {
    let index: HashMap<&TagId, &Tag> = tags.iter().map(|t| (t.id(), t)).collect();
    notes
        .iter()
        .map(|n| n.project(|id| index.get(id).copied()))
        .collect()
}

struct Cached {
    notes: Arc<Vec<RawNote>>,
    tags: Arc<Vec<Tag>>,
    view: Arc<Vec<Note>>,
}

/// Memoized [`project`].
///
/// Inputs are compared by identity: as long as the same two snapshots are
/// passed in, the same projected snapshot comes back.
#[derive(Default)]
pub struct Projection {
    cached: Option<Cached>,
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, notes: &Arc<Vec<RawNote>>, tags: &Arc<Vec<Tag>>) -> Arc<Vec<Note>> {
        if let Some(cached) = &self.cached
            && Arc::ptr_eq(&cached.notes, notes)
            && Arc::ptr_eq(&cached.tags, tags)
        {
            return Arc::clone(&cached.view);
        }

        trace!(notes = notes.len(), tags = tags.len(), "recomputing projection");
        let view = Arc::new(project(notes, tags));
        self.cached = Some(Cached {
            notes: Arc::clone(notes),
            tags: Arc::clone(tags),
            view: Arc::clone(&view),
        });
        view
    }
}
