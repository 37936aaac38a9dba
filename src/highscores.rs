//! High-score persistence
//!
//! A single non-negative integer in a newline-terminated text file.
//! Read failures degrade to 0 and are logged, never propagated; write
//! failures surface as `io::Result` for the caller to log. Negative
//! scores are unrepresentable at this boundary by construction.

use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::config::home_dir;

/// File-backed high-score store.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Default location under the user's home directory.
    pub fn default_path() -> PathBuf {
        home_dir().join(".advanced_snake_highscore")
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored high score. A missing file or unparsable content
    /// is worth 0, never an error.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse::<u32>() {
                Ok(score) => score,
                Err(err) => {
                    log::warn!("invalid high score in {}: {err}", self.path.display());
                    0
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => {
                log::warn!("failed to read {}: {err}", self.path.display());
                0
            }
        }
    }

    /// Persist a new high score, creating parent directories as needed.
    pub fn save(&self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, format!("{score}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    /// A unique scratch path per test; removed on drop.
    struct ScratchFile(PathBuf);

    impl ScratchFile {
        fn new(name: &str) -> Self {
            let path = env::temp_dir().join(format!(
                "advanced_snake_{name}_{}",
                std::process::id()
            ));
            let _ = fs::remove_file(&path);
            Self(path)
        }
    }

    impl Drop for ScratchFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let scratch = ScratchFile::new("round_trip");
        let store = HighScoreStore::new(&scratch.0);
        store.save(42).unwrap();
        assert_eq!(store.load(), 42);
    }

    #[test]
    fn file_format_is_a_newline_terminated_integer() {
        let scratch = ScratchFile::new("format");
        let store = HighScoreStore::new(&scratch.0);
        store.save(7).unwrap();
        assert_eq!(fs::read_to_string(&scratch.0).unwrap(), "7\n");
    }

    #[test]
    fn missing_file_loads_as_zero() {
        let scratch = ScratchFile::new("missing");
        let store = HighScoreStore::new(&scratch.0);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn corrupt_file_loads_as_zero() {
        let scratch = ScratchFile::new("corrupt");
        fs::write(&scratch.0, "not a number\n").unwrap();
        let store = HighScoreStore::new(&scratch.0);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn load_tolerates_surrounding_whitespace() {
        let scratch = ScratchFile::new("whitespace");
        fs::write(&scratch.0, "  123  \n").unwrap();
        let store = HighScoreStore::new(&scratch.0);
        assert_eq!(store.load(), 123);
    }
}
