//! Tag listing and tag editing handlers.

use anyhow::{Context, Result};

use super::resolve::require_tag;
use crate::cli::output::{Output, OutputFormat, TagListing};
use crate::cli::{TagAction, TagArgs, TagsArgs};
use crate::notebook::Notebook;
use crate::store::KeyValueStore;

pub fn handle_tags<S: KeyValueStore>(args: &TagsArgs, notebook: &mut Notebook<S>) -> Result<()> {
    let usage = notebook.tag_usage();

    match args.format {
        OutputFormat::Human => {
            if usage.is_empty() {
                println!("No tags found.");
            }
            for u in &usage {
                if args.counts {
                    println!("{} ({})", u.tag.label(), u.notes);
                } else {
                    println!("{}", u.tag.label());
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = usage
                .iter()
                .map(|u| TagListing {
                    id: u.tag.id().to_string(),
                    label: u.tag.label().to_string(),
                    count: args.counts.then_some(u.notes),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }

    Ok(())
}

pub fn handle_tag<S: KeyValueStore>(args: &TagArgs, notebook: &mut Notebook<S>) -> Result<()> {
    match &args.action {
        TagAction::Add { label } => {
            let tag = notebook
                .create_tag(label)
                .with_context(|| format!("failed to add tag '{}'", label))?;
            println!("Added tag: {} [{}]", tag.label(), tag.id().prefix());
        }
        TagAction::Rename { tag, label } => {
            let current = require_tag(notebook.tags(), tag)?;
            let renamed = notebook
                .rename_tag(current.id(), label)
                .with_context(|| format!("failed to rename tag '{}'", current.label()))?;
            if renamed {
                println!("Renamed tag: {} -> {}", current.label(), label.trim());
            } else {
                println!("Tag unchanged: {}", current.label());
            }
        }
        TagAction::Remove { tag } => {
            let current = require_tag(notebook.tags(), tag)?;
            let used_by = notebook
                .tag_usage()
                .into_iter()
                .find(|u| u.tag.id() == current.id())
                .map_or(0, |u| u.notes);
            notebook
                .delete_tag(current.id())
                .with_context(|| format!("failed to delete tag '{}'", current.label()))?;
            println!(
                "Deleted tag: {} (removed from {} note(s))",
                current.label(),
                used_by
            );
        }
    }
    Ok(())
}
