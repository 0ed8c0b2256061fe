//! Secret word representation
//!
//! A SecretWord stores the hidden word along with its set of distinct letters
//! for constant-time membership checks during play.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// The word the player has to guess
///
/// Non-empty, lowercase ASCII a-z only. Immutable for the duration of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: FxHashSet<u8>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretWordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for SecretWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::NonAscii => write!(f, "Secret word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Secret word contains invalid characters"),
        }
    }
}

impl std::error::Error for SecretWordError {}

impl SecretWord {
    /// Create a new SecretWord from a string
    ///
    /// Surrounding whitespace is trimmed and ASCII uppercase is folded to lowercase.
    ///
    /// # Errors
    /// Returns `SecretWordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::SecretWord;
    ///
    /// let word = SecretWord::new("React").unwrap();
    /// assert_eq!(word.text(), "react");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("re act").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, SecretWordError> {
        let text = text.as_ref().trim().to_ascii_lowercase();

        if text.is_empty() {
            return Err(SecretWordError::Empty);
        }

        if !text.is_ascii() {
            return Err(SecretWordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(SecretWordError::InvalidCharacters);
        }

        let letters = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of positions in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter.byte())
    }

    /// The word's letters in position order (duplicates included)
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.chars().filter_map(|c| Letter::new(c).ok())
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn secret_word_creation_valid() {
        let word = SecretWord::new("react").unwrap();
        assert_eq!(word.text(), "react");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn secret_word_uppercase_normalized() {
        assert_eq!(SecretWord::new("REACT").unwrap().text(), "react");
        assert_eq!(SecretWord::new("  ReAcT\n").unwrap().text(), "react");
    }

    #[test]
    fn secret_word_empty_rejected() {
        assert_eq!(SecretWord::new(""), Err(SecretWordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(SecretWordError::Empty));
    }

    #[test]
    fn secret_word_invalid_characters() {
        assert_eq!(
            SecretWord::new("node.js"),
            Err(SecretWordError::InvalidCharacters)
        );
        assert!(SecretWord::new("c3po").is_err());
        assert!(SecretWord::new("two words").is_err());
        assert_eq!(SecretWord::new("café"), Err(SecretWordError::NonAscii));
    }

    #[test]
    fn secret_word_contains() {
        let word = SecretWord::new("react").unwrap();
        assert!(word.contains(letter('r')));
        assert!(word.contains(letter('t')));
        assert!(!word.contains(letter('q')));
    }

    #[test]
    fn secret_word_distinct_letters() {
        let word = SecretWord::new("letter").unwrap();
        assert_eq!(word.len(), 6);
        assert_eq!(word.distinct_letters(), 4);
    }

    #[test]
    fn secret_word_letters_in_order() {
        let word = SecretWord::new("abba").unwrap();
        let letters: String = word.letters().map(Letter::as_char).collect();
        assert_eq!(letters, "abba");
    }

    #[test]
    fn secret_word_display() {
        let word = SecretWord::new("react").unwrap();
        assert_eq!(format!("{word}"), "react");
    }
}
