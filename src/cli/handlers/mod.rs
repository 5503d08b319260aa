//! Command handlers for the CLI.

mod editor;
mod list;
mod note;
mod resolve;
mod tags;


// Re-export public items
pub use editor::{ConfiguredEditor, EditorLauncher, edit_text};
pub use list::handle_list;
pub use note::{handle_edit, handle_new, handle_remove, handle_show};
pub use resolve::{ResolveResult, TagSelection, resolve_note, resolve_tag, select_tags};
pub use tags::{handle_tag, handle_tags};

// Re-export for tests
#[cfg(test)]
pub(crate) use list::build_filter;
#[cfg(test)]
pub(crate) use note::read_body;

// ===========================================
// Shared Utilities
// ===========================================

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
