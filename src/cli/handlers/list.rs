//! List command handler.

use anyhow::Result;

use super::resolve::require_tag;
use super::truncate_str;
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat, tag_labels};
use crate::domain::{NoteFilter, Tag};
use crate::notebook::Notebook;
use crate::store::KeyValueStore;

/// Builds the filter for `ls` from its arguments.
///
/// Every `--tag` must name an existing tag.
pub(crate) fn build_filter(args: &ListArgs, registry: &[Tag]) -> Result<NoteFilter> {
    let required = args
        .tags
        .iter()
        .map(|t| require_tag(registry, t))
        .collect::<Result<Vec<_>>>()?;
    Ok(NoteFilter::new(args.title.as_str(), &required))
}

pub fn handle_list<S: KeyValueStore>(args: &ListArgs, notebook: &mut Notebook<S>) -> Result<()> {
    let filter = build_filter(args, notebook.tags())?;
    let notes = notebook.filtered(&filter);

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                println!("{:<10}  {:<40}  {}", "ID", "Title", "Tags");
                println!(
                    "{:<10}  {:<40}  {}",
                    "----------", "----------------------------------------", "----"
                );

                for note in &notes {
                    println!(
                        "{:<10}  {:<40}  {}",
                        note.id().prefix(),
                        truncate_str(note.title(), 40),
                        tag_labels(note.tags())
                    );
                }

                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
