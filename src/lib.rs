//! quill - short markdown notes with shared, renameable tags

pub mod cli;
pub mod domain;
pub mod notebook;
pub mod render;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::Level;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        ConfiguredEditor, handle_edit, handle_list, handle_new, handle_remove, handle_show,
        handle_tag, handle_tags,
    },
};
use notebook::Notebook;
use store::open_backend;

/// Installs a stderr log subscriber at a level picked by `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // A subscriber may already be set when running inside tests.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(args.shell, &mut cmd, "quill", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());
    tracing::debug!(dir = %data_dir.display(), backend = %config.backend, "opening notebook");

    let store = open_backend(config.backend, &data_dir)
        .with_context(|| format!("failed to open storage at {}", data_dir.display()))?;
    let mut notebook = Notebook::open(store)
        .with_context(|| format!("failed to load notes from {}", data_dir.display()))?;
    let editor = ConfiguredEditor(&config);

    match &cli.command {
        Command::List(args) => handle_list(args, &mut notebook),
        Command::New(args) => handle_new(args, &mut notebook, &editor).map(|_| ()),
        Command::Show(args) => handle_show(args, &mut notebook),
        Command::Edit(args) => handle_edit(args, &mut notebook, &editor).map(|_| ()),
        Command::Remove(args) => handle_remove(args, &mut notebook),
        Command::Tags(args) => handle_tags(args, &mut notebook),
        Command::Tag(args) => handle_tag(args, &mut notebook),
        Command::Completions(_) => Ok(()),
    }
}
