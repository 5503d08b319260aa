//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// quill - short markdown notes with shared, renameable tags
#[derive(Parser, Debug)]
#[command(name = "quill", version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes, optionally filtered by title and tags
    #[command(name = "ls")]
    List(ListArgs),

    /// Create a new note
    New(NewArgs),

    /// Show a note
    Show(ShowArgs),

    /// Edit a note's title, body, or tags
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// List all tags
    Tags(TagsArgs),

    /// Add, rename, or delete tags
    Tag(TagArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only notes whose title contains this text (case-insensitive)
    #[arg(long, default_value = "")]
    pub title: String,

    /// Only notes carrying this tag, by label or id (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Markdown body
    #[arg(short, long, conflicts_with_all = ["body_file", "edit"])]
    pub body: Option<String>,

    /// Read the markdown body from a file
    #[arg(long, conflicts_with = "edit")]
    pub body_file: Option<PathBuf>,

    /// Write the body in your editor
    #[arg(short, long)]
    pub edit: bool,

    /// Tag by label or id; unknown labels create a new tag (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID, ID prefix, or title
    pub note: String,

    /// Render the body to HTML
    #[arg(long, conflicts_with = "format")]
    pub html: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
///
/// With no field options the body is opened in your editor.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID, ID prefix, or title
    pub note: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New markdown body
    #[arg(short, long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the new markdown body from a file
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    /// Replace the note's tags, by label or id (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Remove all tags from the note
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Note ID, ID prefix, or title
    pub note: String,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Show note counts for each tag
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tag` command
#[derive(Parser, Debug)]
pub struct TagArgs {
    #[command(subcommand)]
    pub action: TagAction,
}

#[derive(Subcommand, Debug)]
pub enum TagAction {
    /// Create a new tag
    Add {
        /// Label for the tag
        label: String,
    },

    /// Change a tag's label everywhere it is used
    Rename {
        /// Tag label or id
        tag: String,

        /// New label
        label: String,
    },

    /// Delete a tag (notes keep their text, the tag disappears from them)
    #[command(name = "rm")]
    Remove {
        /// Tag label or id
        tag: String,
    },
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
