//! `word_store`: the dictionary as an append-only, ordered list of owned words.
//!
//! The store is the ground truth the anagram index is built from. It keeps
//! words in insertion order and keeps duplicates; every stored word is a
//! non-empty run of lowercase ASCII letters.
//!
//! The parsing logic:
//! - The input is split into lines; `\r` and surrounding whitespace are trimmed.
//! - Empty lines are skipped silently.
//! - Each word is lowercased.
//! - Words containing anything outside a-z (digits, apostrophes, accented
//!   letters, `*`) are skipped and counted; the count is logged once.
//!
//! `parse_from_str(...)` does no I/O, so it can be fed from any source;
//! `load_from_path(...)` is the file-reading convenience wrapper.

use std::path::Path;

use log::{info, warn};

use crate::equivalence::are_anagrams;
use crate::errors::AnagramError;
use crate::letters::AnagramChar;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStore {
    words: Vec<String>,
}

impl WordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word. The caller is responsible for it being clean lowercase letters.
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Parse a raw word list from an in-memory string (one word per line).
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordStore {
        let mut skipped = 0usize;
        let words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }
                let word = line.to_lowercase();
                if word.bytes().all(|c| c.is_letter()) {
                    Some(word)
                } else {
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            warn!("Skipped {skipped} dictionary line(s) with characters outside a-z");
        }

        WordStore { words }
    }

    /// Read a word list from `path` and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`AnagramError::DictionaryRead`] if the file cannot be read.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<WordStore, AnagramError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| AnagramError::DictionaryRead {
            path: path_ref.display().to_string(),
            source,
        })?;

        let store = Self::parse_from_str(&data);
        info!("Loaded {} words from '{}'", store.len(), path_ref.display());
        Ok(store)
    }

    /// Like [`Self::load_from_path`], but a list with no usable words is an error.
    ///
    /// # Errors
    ///
    /// - [`AnagramError::DictionaryRead`] if the file cannot be read.
    /// - [`AnagramError::EmptyDictionary`] if every line was empty or skipped.
    pub fn load_nonempty<P: AsRef<Path>>(path: P) -> Result<WordStore, AnagramError> {
        let path_ref = path.as_ref();
        let store = Self::load_from_path(path_ref)?;
        if store.is_empty() {
            return Err(AnagramError::EmptyDictionary {
                path: path_ref.display().to_string(),
            });
        }
        Ok(store)
    }

    /// Linear scan: every stored word that is an anagram of `query`, in store order.
    ///
    /// Wildcards in `query` are handled by the equivalence test directly, so
    /// this needs no expansion step. It is O(n) in the dictionary size and is
    /// mostly useful as a reference for the hashed index.
    #[must_use]
    pub fn search_anagrams(&self, query: &str) -> Vec<&str> {
        self.iter().filter(|word| are_anagrams(query, word)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for WordStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordStore { words: iter.into_iter().map(Into::into).collect() }
    }
}
