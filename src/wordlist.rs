//! Wordlist loading and matching.
//!
//! Wordlists are plain text files with one entry per line. They are read in
//! full every time a rule needs them; callers validating many passwords
//! against large lists should keep their own copy around.

use std::path::Path;

use crate::error::{Result, ValidatorError};

/// Substring entries must be longer than this many characters to count.
pub const MIN_SUBSTRING_ENTRY_LEN: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    entries: Vec<String>,
}

impl Wordlist {
    /// Reads a wordlist file.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::ResourceNotFound`] if the file does not exist
    /// or cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist load FAILED: {} ({})", path.display(), source);
            ValidatorError::ResourceNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let wordlist = Self::parse(&content);

        #[cfg(feature = "tracing")]
        tracing::debug!("Wordlist loaded: {} entries from {:?}", wordlist.len(), path);

        Ok(wordlist)
    }

    /// Splits on `\n`. Entries are trimmed; blank lines are kept as empty
    /// entries.
    pub fn parse(content: &str) -> Self {
        let entries = content.split('\n').map(|l| l.trim().to_string()).collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive exact match of the trimmed password.
    ///
    /// An empty password never matches, even against blank lines.
    pub fn contains_exact(&self, password: &str) -> bool {
        let needle = password.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.entries.iter().any(|entry| entry.to_lowercase() == needle)
    }

    /// Entries longer than [`MIN_SUBSTRING_ENTRY_LEN`] characters found inside
    /// the password, case-insensitively, in file order.
    pub fn substring_matches(&self, password: &str) -> Vec<&str> {
        let haystack = password.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.chars().count() > MIN_SUBSTRING_ENTRY_LEN)
            .filter(|entry| haystack.contains(&entry.to_lowercase()))
            .map(String::as_str)
            .collect()
    }
}
