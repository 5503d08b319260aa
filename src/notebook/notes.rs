//! Note store updates. Same contract as the tag registry: the current list
//! goes in, the replacement list (or `None` for "nothing to do") comes out.

use crate::domain::{NoteData, NoteId, RawNote};

pub fn find<'a>(notes: &'a [RawNote], id: &NoteId) -> Option<&'a RawNote> {
    notes.iter().find(|n| n.id() == id)
}

/// Appends a new note built from `data` under `id`.
pub fn create(notes: &[RawNote], id: NoteId, data: &NoteData) -> Vec<RawNote> {
    let mut next = Vec::with_capacity(notes.len() + 1);
    next.extend_from_slice(notes);
    next.push(RawNote::from_data(id, data));
    next
}

/// Replaces title, body and tag references of the note with `id`.
///
/// The note keeps its id and its position in the list.
pub fn update(notes: &[RawNote], id: &NoteId, data: &NoteData) -> Option<Vec<RawNote>> {
    find(notes, id)?;
    Some(
        notes
            .iter()
            .map(|n| if n.id() == id { n.with_data(data) } else { n.clone() })
            .collect(),
    )
}

pub fn delete(notes: &[RawNote], id: &NoteId) -> Option<Vec<RawNote>> {
    find(notes, id)?;
    Some(notes.iter().filter(|n| n.id() != id).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Tag, TagId};
    use pretty_assertions::assert_eq;

    fn tag(id: &str, label: &str) -> Tag {
        Tag::with_id(id.parse().unwrap(), label)
    }

    fn nid(s: &str) -> NoteId {
        s.parse().unwrap()
    }

    fn data(title: &str, tags: Vec<Tag>) -> NoteData {
        NoteData::new(title, "body", tags).unwrap()
    }

    fn sample() -> Vec<RawNote> {
        let notes = create(&[], nid("n1"), &data("First", vec![tag("t1", "a")]));
        create(&notes, nid("n2"), &data("Second", vec![]))
    }

    #[test]
    fn create_appends_with_tag_ids() {
        let notes = sample();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id(), &nid("n1"));
        assert_eq!(notes[0].tag_ids(), &["t1".parse::<TagId>().unwrap()]);
        assert_eq!(notes[1].title(), "Second");
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let notes = update(
            &sample(),
            &nid("n1"),
            &data("Renamed", vec![tag("t2", "b"), tag("t3", "c")]),
        )
        .unwrap();

        assert_eq!(notes[0].id(), &nid("n1"));
        assert_eq!(notes[0].title(), "Renamed");
        let ids: Vec<_> = notes[0].tag_ids().iter().map(|t| t.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t3"]);
        assert_eq!(notes[1], sample()[1]);
    }

    #[test]
    fn update_missing_id_is_noop() {
        assert_eq!(update(&sample(), &nid("n9"), &data("x", vec![])), None);
    }

    #[test]
    fn delete_removes_note() {
        let notes = delete(&sample(), &nid("n1")).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id(), &nid("n2"));
    }

    #[test]
    fn delete_missing_id_is_noop() {
        assert_eq!(delete(&sample(), &nid("n9")), None);
    }
}
