//! Turning what the user typed into notes and tags.

use anyhow::{Result, bail};

use crate::domain::{Note, Tag};
use crate::notebook::Notebook;
use crate::store::KeyValueStore;

/// Minimum length before an identifier is tried as an id prefix.
const MIN_PREFIX_LEN: usize = 4;

/// Result of resolving an identifier.
#[derive(Debug, PartialEq)]
pub enum ResolveResult<T> {
    /// Exactly one item matched.
    Unique(T),
    /// Multiple items matched (ambiguous).
    Ambiguous(Vec<T>),
    /// Nothing matched.
    NotFound,
}

impl<T> ResolveResult<T> {
    fn from_candidates(mut candidates: Vec<T>) -> Self {
        match candidates.len() {
            0 => ResolveResult::NotFound,
            1 => ResolveResult::Unique(candidates.remove(0)),
            _ => ResolveResult::Ambiguous(candidates),
        }
    }
}

fn has_id_prefix(id: &str, prefix: &str) -> bool {
    id.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Resolves a note identifier.
///
/// Resolution order:
/// 1. Exact id
/// 2. Id prefix (4 or more characters); a single prefix hit wins outright
/// 3. Title, ignoring case
pub fn resolve_note(notes: &[Note], identifier: &str) -> ResolveResult<Note> {
    let identifier = identifier.trim();

    if let Some(note) = notes.iter().find(|n| n.id().as_str() == identifier) {
        return ResolveResult::Unique(note.clone());
    }

    let mut candidates: Vec<Note> = Vec::new();

    if identifier.len() >= MIN_PREFIX_LEN {
        let id_matches: Vec<&Note> = notes
            .iter()
            .filter(|n| has_id_prefix(n.id().as_str(), identifier))
            .collect();
        if let [only] = id_matches.as_slice() {
            return ResolveResult::Unique((*only).clone());
        }
        candidates.extend(id_matches.into_iter().cloned());
    }

    let lowered = identifier.to_lowercase();
    for note in notes.iter().filter(|n| n.title().to_lowercase() == lowered) {
        if !candidates.iter().any(|c| c.id() == note.id()) {
            candidates.push(note.clone());
        }
    }

    ResolveResult::from_candidates(candidates)
}

/// Resolves a tag identifier: exact id first, then label ignoring case.
pub fn resolve_tag(tags: &[Tag], identifier: &str) -> ResolveResult<Tag> {
    let identifier = identifier.trim();

    if let Some(tag) = tags.iter().find(|t| t.id().as_str() == identifier) {
        return ResolveResult::Unique(tag.clone());
    }

    ResolveResult::from_candidates(
        tags.iter()
            .filter(|t| t.matches_label(identifier))
            .cloned()
            .collect(),
    )
}

/// Prints the candidates of an ambiguous note identifier.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id().prefix(), note.title());
        if !note.tags().is_empty() {
            let tags: Vec<_> = note.tags().iter().map(|t| t.label()).collect();
            eprintln!("      tags: {}", tags.join(", "));
        }
    }
    eprintln!();
    eprintln!("Use the ID prefix to specify which note you mean.");
}

pub(crate) fn print_ambiguous_tags(identifier: &str, tags: &[Tag]) {
    eprintln!("Ambiguous: '{}' matches {} tags:", identifier, tags.len());
    for tag in tags {
        eprintln!("  {} - {}", tag.id(), tag.label());
    }
    eprintln!();
    eprintln!("Use the tag ID to specify which tag you mean.");
}

/// Resolves a note or fails with a user-facing error.
pub(crate) fn require_note<S: KeyValueStore>(
    notebook: &mut Notebook<S>,
    identifier: &str,
) -> Result<Note> {
    let notes = notebook.notes();
    match resolve_note(&notes, identifier) {
        ResolveResult::Unique(note) => Ok(note),
        ResolveResult::Ambiguous(notes) => {
            print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Resolves a tag or fails with a user-facing error.
pub(crate) fn require_tag(tags: &[Tag], identifier: &str) -> Result<Tag> {
    match resolve_tag(tags, identifier) {
        ResolveResult::Unique(tag) => Ok(tag),
        ResolveResult::Ambiguous(tags) => {
            print_ambiguous_tags(identifier, &tags);
            bail!("ambiguous tag identifier");
        }
        ResolveResult::NotFound => bail!("tag not found: '{}'", identifier),
    }
}

/// Tags picked for a note, some of which may not be registered yet.
#[derive(Debug, Default)]
pub struct TagSelection {
    /// Every selected tag, in the order given.
    pub tags: Vec<Tag>,
    /// The subset that still has to be added to the registry.
    pub created: Vec<Tag>,
}

/// Picks tags by id or label. Labels that match nothing become new tags,
/// reused if the same new label appears twice.
///
/// Nothing is registered here; callers add `created` once the rest of the
/// submission has been validated.
pub fn select_tags(registry: &[Tag], inputs: &[String]) -> Result<TagSelection> {
    let mut selection = TagSelection::default();

    for input in inputs {
        let tag = match resolve_tag(registry, input) {
            ResolveResult::Unique(tag) => tag,
            ResolveResult::Ambiguous(tags) => {
                print_ambiguous_tags(input, &tags);
                bail!("ambiguous tag identifier");
            }
            ResolveResult::NotFound => {
                match selection.created.iter().find(|t| t.matches_label(input)) {
                    Some(pending) => pending.clone(),
                    None => {
                        let tag = Tag::new(input)?;
                        selection.created.push(tag.clone());
                        tag
                    }
                }
            }
        };
        selection.tags.push(tag);
    }

    Ok(selection)
}
