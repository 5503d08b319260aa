//! Title and tag filtering over projected notes.

use super::{Note, Tag, TagId};

/// A title substring plus a set of tags every match must carry.
///
/// An empty query matches every title and an empty tag set matches every
/// note, so `NoteFilter::default()` lets everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    title_query: String,
    required: Vec<TagId>,
}

impl NoteFilter {
    pub fn new(title_query: impl Into<String>, required_tags: &[Tag]) -> Self {
        Self {
            title_query: title_query.into(),
            required: required_tags.iter().map(|t| t.id().clone()).collect(),
        }
    }

    pub fn title_query(&self) -> &str {
        &self.title_query
    }

    pub fn required(&self) -> &[TagId] {
        &self.required
    }

    /// True if the title contains the query (ignoring case) and the note
    /// carries every required tag.
    pub fn matches(&self, note: &Note) -> bool {
        self.matches_title(note) && self.required.iter().all(|id| note.has_tag(id))
    }

    fn matches_title(&self, note: &Note) -> bool {
        self.title_query.is_empty()
            || note
                .title()
                .to_lowercase()
                .contains(&self.title_query.to_lowercase())
    }

    /// Returns the matching notes in their original order.
    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|n| self.matches(n)).collect()
    }
}

/// Convenience wrapper: filters `notes` by `title_query` and `required_tags`.
pub fn filter_notes(notes: &[Note], title_query: &str, required_tags: &[Tag]) -> Vec<Note> {
    NoteFilter::new(title_query, required_tags)
        .apply(notes)
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawNote;
    use pretty_assertions::assert_eq;

    fn tag(id: &str, label: &str) -> Tag {
        Tag::with_id(id.parse().unwrap(), label)
    }

    fn note(id: &str, title: &str, tag_ids: &[&str], tags: &[Tag]) -> Note {
        let raw = RawNote::new(
            id.parse().unwrap(),
            title,
            "body",
            tag_ids.iter().map(|s| s.parse().unwrap()).collect(),
        );
        raw.project(|id| tags.iter().find(|t| t.id() == id))
    }

    fn titles(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.title()).collect()
    }

    fn fixture() -> (Vec<Tag>, Vec<Note>) {
        let tags = vec![tag("a", "alpha"), tag("b", "beta"), tag("c", "gamma")];
        let notes = vec![
            note("n1", "Shopping list", &["a"], &tags),
            note("n2", "Meeting notes", &["a", "b"], &tags),
            note("n3", "Reading list", &["b", "c", "a"], &tags),
            note("n4", "Untagged", &[], &tags),
        ];
        (tags, notes)
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let (_, notes) = fixture();
        let out = filter_notes(&notes, "", &[]);
        assert_eq!(out, notes);
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let (_, notes) = fixture();
        let out = filter_notes(&notes, "LIST", &[]);
        assert_eq!(titles(&out), vec!["Shopping list", "Reading list"]);
    }

    #[test]
    fn required_tags_use_set_containment() {
        let (tags, notes) = fixture();
        let out = filter_notes(&notes, "", &[tags[0].clone(), tags[1].clone()]);
        assert_eq!(titles(&out), vec!["Meeting notes", "Reading list"]);
    }

    #[test]
    fn required_tags_compare_by_id_not_label() {
        let (_, notes) = fixture();
        let stale = tag("a", "old alpha label");
        let out = filter_notes(&notes, "", &[stale]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn both_predicates_must_hold() {
        let (tags, notes) = fixture();
        let out = filter_notes(&notes, "list", &[tags[2].clone()]);
        assert_eq!(titles(&out), vec!["Reading list"]);
    }

    #[test]
    fn unknown_required_tag_matches_nothing() {
        let (_, notes) = fixture();
        let out = filter_notes(&notes, "", &[tag("zzz", "nope")]);
        assert!(out.is_empty());
    }

    #[test]
    fn worked_example() {
        let work = tag("t1", "work");
        let tags = vec![work.clone()];
        let notes = vec![note("n1", "Todo", &["t1"], &tags)];

        let hit = filter_notes(&notes, "to", &[work]);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].id().as_str(), "n1");

        assert!(filter_notes(&notes, "xyz", &[]).is_empty());
    }

    #[test]
    fn apply_borrows_matches() {
        let (tags, notes) = fixture();
        let filter = NoteFilter::new("", &tags[2..]);
        let out = filter.apply(&notes);
        assert_eq!(out.len(), 1);
        assert!(std::ptr::eq(out[0], &notes[2]));
    }
}
