//! Isolated test environment with temp directories.

use super::{QuillCommand, TestNote};
use quill::domain::{RawNote, Tag};
use quill::notebook::{NOTES_KEY, TAGS_KEY};
use quill::store::{FileStore, KeyValueStore, read, write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment.
///
/// Holds a temporary data directory and a temporary config home, both
/// cleaned up on drop. Commands run through [`TestEnv::cmd`] never see the
/// developer's real config file.
pub struct TestEnv {
    temp_dir: TempDir,
    data_dir: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data directory");
        std::fs::create_dir_all(&config_home).expect("Failed to create config directory");
        Self {
            temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the directory used as `XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    /// Writes `contents` as the quill config file.
    pub fn write_config(&self, contents: &str) {
        let dir = self.config_home.join("quill");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
    }

    fn store(&self) -> FileStore {
        FileStore::open(&self.data_dir).expect("Failed to open file store")
    }

    /// Seeds the tag registry.
    pub fn add_tags(&self, tags: &[(&str, &str)]) {
        let mut store = self.store();
        let mut current: Vec<Tag> = read(&store, TAGS_KEY, Vec::new).expect("Failed to read tags");
        current.extend(
            tags.iter()
                .map(|(id, label)| Tag::with_id(id.parse().expect("Invalid TagId"), *label)),
        );
        write(&mut store, TAGS_KEY, &current).expect("Failed to write tags");
    }

    /// Seeds a stored note.
    pub fn add_note(&self, note: &TestNote) {
        let mut store = self.store();
        let mut current: Vec<RawNote> =
            read(&store, NOTES_KEY, Vec::new).expect("Failed to read notes");
        current.push(note.to_raw());
        write(&mut store, NOTES_KEY, &current).expect("Failed to write notes");
    }

    /// Reads back the stored notes.
    pub fn stored_notes(&self) -> Vec<RawNote> {
        read(&self.store(), NOTES_KEY, Vec::new).expect("Failed to read notes")
    }

    /// Reads back the tag registry.
    pub fn stored_tags(&self) -> Vec<Tag> {
        read(&self.store(), TAGS_KEY, Vec::new).expect("Failed to read tags")
    }

    /// Writes a raw value under `key`, e.g. to simulate corruption.
    pub fn write_raw(&self, key: &str, value: &str) {
        self.store().set(key, value).expect("Failed to write raw value");
    }

    /// Writes a file inside the environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a QuillCommand configured for this test environment.
    pub fn cmd(&self) -> QuillCommand {
        QuillCommand::new()
            .config_home(&self.config_home)
            .dir(&self.data_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_directories() {
        let env = TestEnv::new();
        assert!(env.data_dir().is_dir());
        assert!(env.config_home().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.data_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_seeds_and_reads_back() {
        let env = TestEnv::new();
        env.add_tags(&[("t1", "work")]);
        env.add_note(&TestNote::new("Todo").tag_id("t1"));
        env.add_note(&TestNote::new("Other"));

        assert_eq!(env.stored_tags().len(), 1);
        let notes = env.stored_notes();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title(), "Todo");
    }
}
