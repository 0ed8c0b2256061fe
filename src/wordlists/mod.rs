//! Word lists for the game
//!
//! Provides the embedded word list compiled into the binary, a loader for
//! custom lists, and `WordList`, the random word source a session draws from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::SecretWord;
use rand::Rng;
use std::fmt;
use std::io;

/// Error type for word lists that cannot be used
#[derive(Debug)]
pub enum WordListError {
    Empty,
    Io { path: String, source: io::Error },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid words"),
            Self::Io { path, source } => write!(f, "Failed to read word list {path}: {source}"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// A non-empty pool of secret words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<SecretWord>,
}

impl WordList {
    /// Wrap a list of words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<SecretWord>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: loader::words_from_slice(WORDS),
        }
    }

    /// Load a custom list from a file
    ///
    /// # Errors
    /// Returns an error if the file can't be read or holds no valid words.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, WordListError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Pick a word uniformly at random; repeats across games are allowed
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &SecretWord {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }
}
