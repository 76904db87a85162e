//! Dictionary wordlist management
//!
//! Holds the common words the dictionary rule looks for, optionally
//! extended from an external file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra wordlist file.
pub const WORDLIST_PATH_ENV: &str = "PWD_WORDLIST_PATH";

const COMMON_WORDS: &[&str] = &[
    "password",
    "admin",
    "123456",
    "letmein",
    "qwerty",
    "welcome",
    "password123",
];

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Lowercased words matched as substrings of a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// The builtin list of common words.
    pub fn builtin() -> Self {
        Self {
            words: COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Loads a wordlist from a file, one word per line.
    ///
    /// Lines are trimmed and lowercased; blank lines and duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no words
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let mut list = Self { words: Vec::new() };
        list.extend_from_path(path)?;
        Ok(list)
    }

    /// Returns this wordlist with the words of `path` appended.
    pub fn extended_from_path<P: AsRef<Path>>(mut self, path: P) -> Result<Self, WordlistError> {
        self.extend_from_path(path)?;
        Ok(self)
    }

    fn extend_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), WordlistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist loading FAILED: FileNotFound {:?}", path);
            return Err(WordlistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist loading FAILED: Empty file {:?}", path);
            return Err(WordlistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        let before = self.words.len();

        let mut seen: HashSet<String> = self.words.iter().cloned().collect();
        for line in content.lines() {
            let word = line.trim().to_lowercase();
            if !word.is_empty() && seen.insert(word.clone()) {
                self.words.push(word);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Wordlist extended: {} words from {:?}",
            self.words.len() - before,
            path
        );

        Ok(())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks whether any word occurs inside an already lowercased candidate.
    pub fn contains_in(&self, lowered: &str) -> bool {
        self.words.iter().any(|w| lowered.contains(w.as_str()))
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Returns the extra wordlist path from `PWD_WORDLIST_PATH`, if set.
pub fn wordlist_path_from_env() -> Option<PathBuf> {
    std::env::var_os(WORDLIST_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in words {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_builtin_words() {
        let list = Wordlist::builtin();
        assert_eq!(list.len(), 7);
        assert!(list.words().iter().any(|w| w == "letmein"));
    }

    #[test]
    fn test_contains_in_substring() {
        let list = Wordlist::builtin();
        assert!(list.contains_in("xxadminxx"));
        assert!(list.contains_in("mywelcome!"));
        assert!(!list.contains_in("tr7#kwm9$vbx4&zp"));
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = Wordlist::from_path("/nonexistent/path/words.txt");
        assert!(matches!(result, Err(WordlistError::FileNotFound(_))));
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp_file = setup_with_tempfile(&["", "   "]);
        let result = Wordlist::from_path(temp_file.path());
        assert!(matches!(result, Err(WordlistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_normalizes_and_dedups() {
        let temp_file = setup_with_tempfile(&["  Dragon ", "dragon", "", "MONKEY"]);
        let list = Wordlist::from_path(temp_file.path()).unwrap();
        assert_eq!(list.words(), &["dragon".to_string(), "monkey".to_string()]);
    }

    #[test]
    fn test_extended_keeps_builtin() {
        let temp_file = setup_with_tempfile(&["sunshine", "admin"]);
        let list = Wordlist::builtin()
            .extended_from_path(temp_file.path())
            .unwrap();
        assert_eq!(list.len(), 8);
        assert!(list.contains_in("mysunshine"));
        assert!(list.contains_in("password"));
    }

    #[test]
    fn test_large_wordlist_loads_quickly() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for i in 0..50_000 {
            writeln!(temp_file, "word{}", i).expect("Failed to write");
        }
        writeln!(temp_file, "WORD7").expect("Failed to write");

        let start = std::time::Instant::now();
        let list = Wordlist::builtin()
            .extended_from_path(temp_file.path())
            .unwrap();
        assert!(start.elapsed() < std::time::Duration::from_secs(2));
        assert_eq!(list.len(), 7 + 50_000);
        assert_eq!(list.words()[7], "word0");
    }

    #[test]
    #[serial]
    fn test_wordlist_path_from_env() {
        remove_env(WORDLIST_PATH_ENV);
        assert_eq!(wordlist_path_from_env(), None);

        set_env(WORDLIST_PATH_ENV, "/custom/words.txt");
        assert_eq!(
            wordlist_path_from_env(),
            Some(PathBuf::from("/custom/words.txt"))
        );

        remove_env(WORDLIST_PATH_ENV);
    }
}
