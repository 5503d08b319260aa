//! Writing note bodies in an external editor.

use anyhow::{Context, Result, bail};
use std::io::Write as IoWrite;
use std::path::Path;
use std::process::Command;

use crate::cli::config::Config;

/// Trait for launching an editor (allows mocking in tests).
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Launches the editor configured in [`Config::editor`].
pub struct ConfiguredEditor<'a>(pub &'a Config);

impl EditorLauncher for ConfiguredEditor<'_> {
    fn open(&self, path: &Path) -> Result<()> {
        let editor = self.0.editor();

        // May include args like "code --wait"
        let parts: Vec<&str> = editor.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            bail!("editor command is empty");
        };

        let status = Command::new(cmd)
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch editor '{}'", editor))?;

        if !status.success() {
            bail!("editor '{}' exited with non-zero status", editor);
        }

        Ok(())
    }
}

/// Opens `initial` in the editor and returns the saved text.
pub fn edit_text<E: EditorLauncher>(editor: &E, initial: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("quill-")
        .suffix(".md")
        .tempfile()
        .context("failed to create temporary file for editing")?;
    file.write_all(initial.as_bytes())
        .and_then(|_| file.flush())
        .context("failed to write temporary file for editing")?;

    editor.open(file.path())?;

    std::fs::read_to_string(file.path()).context("failed to read edited text")
}
