//! New, show, edit, and rm command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::editor::{EditorLauncher, edit_text};
use super::resolve::{TagSelection, require_note, select_tags};
use crate::cli::output::{Output, OutputFormat, tag_labels};
use crate::cli::{EditArgs, NewArgs, RemoveArgs, ShowArgs};
use crate::domain::{NoteData, NoteId};
use crate::notebook::Notebook;
use crate::render::markdown_to_html;
use crate::store::KeyValueStore;

/// Reads the body from `--body` or `--body-file`, whichever was given.
pub(crate) fn read_body(body: Option<&str>, body_file: Option<&Path>) -> Result<Option<String>> {
    if let Some(body) = body {
        return Ok(Some(body.to_string()));
    }
    match body_file {
        Some(path) => std::fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("failed to read body file: {}", path.display())),
        None => Ok(None),
    }
}

/// Registers tags that were created while selecting, then prints them.
///
/// Called only after the note is saved, so a failed save registers nothing.
fn register_created<S: KeyValueStore>(
    notebook: &mut Notebook<S>,
    selection: &TagSelection,
) -> Result<()> {
    for tag in &selection.created {
        notebook
            .add_tag(tag.clone())
            .with_context(|| format!("failed to add tag '{}'", tag.label()))?;
        println!("Created tag: {}", tag.label());
    }
    Ok(())
}

pub fn handle_new<S: KeyValueStore, E: EditorLauncher>(
    args: &NewArgs,
    notebook: &mut Notebook<S>,
    editor: &E,
) -> Result<NoteId> {
    let body = match read_body(args.body.as_deref(), args.body_file.as_deref())? {
        Some(body) => body,
        None if args.edit => edit_text(editor, "")?,
        None => bail!("a note body is required: pass --body, --body-file, or --edit"),
    };

    let selection = select_tags(notebook.tags(), &args.tags)?;
    let data = NoteData::new(&args.title, body, selection.tags.clone())?;

    let id = notebook
        .create_note(&data)
        .context("failed to save note")?;
    register_created(notebook, &selection)?;

    println!("Created: {} [{}]", data.title(), id.prefix());
    Ok(id)
}

pub fn handle_show<S: KeyValueStore>(args: &ShowArgs, notebook: &mut Notebook<S>) -> Result<()> {
    let note = require_note(notebook, &args.note)?;

    if args.html {
        print!("{}", markdown_to_html(note.markdown()));
        return Ok(());
    }

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.title());
            println!();

            match note.id().timestamp() {
                Some(created) => println!(
                    "ID: {}  Created: {}",
                    note.id().prefix(),
                    created.format("%Y-%m-%d")
                ),
                None => println!("ID: {}", note.id().prefix()),
            }

            if !note.tags().is_empty() {
                println!("Tags: {}", tag_labels(note.tags()));
            }

            println!();
            println!("{}", note.markdown());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&note))?);
        }
    }

    Ok(())
}

/// Returns whether anything changed.
pub fn handle_edit<S: KeyValueStore, E: EditorLauncher>(
    args: &EditArgs,
    notebook: &mut Notebook<S>,
    editor: &E,
) -> Result<bool> {
    let note = require_note(notebook, &args.note)?;

    let field_given = args.title.is_some()
        || args.body.is_some()
        || args.body_file.is_some()
        || !args.tags.is_empty()
        || args.clear_tags;

    let title = args.title.as_deref().unwrap_or(note.title());
    let body = match read_body(args.body.as_deref(), args.body_file.as_deref())? {
        Some(body) => body,
        None if !field_given => edit_text(editor, note.markdown())?,
        None => note.markdown().to_string(),
    };

    let selection = if args.clear_tags {
        TagSelection::default()
    } else if args.tags.is_empty() {
        TagSelection {
            tags: note.tags().to_vec(),
            created: Vec::new(),
        }
    } else {
        select_tags(notebook.tags(), &args.tags)?
    };

    let data = NoteData::new(title, body, selection.tags.clone())?;
    if note.to_data().as_ref() == Some(&data) {
        println!("No changes: {} [{}]", note.title(), note.id().prefix());
        return Ok(false);
    }

    notebook
        .update_note(note.id(), &data)
        .context("failed to save note")?;
    register_created(notebook, &selection)?;

    println!("Edited: {} [{}]", data.title(), note.id().prefix());
    Ok(true)
}

pub fn handle_remove<S: KeyValueStore>(
    args: &RemoveArgs,
    notebook: &mut Notebook<S>,
) -> Result<()> {
    let note = require_note(notebook, &args.note)?;
    notebook
        .delete_note(note.id())
        .context("failed to delete note")?;
    println!("Deleted: {} [{}]", note.title(), note.id().prefix());
    Ok(())
}
