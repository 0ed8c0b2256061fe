//! Single guessable letter
//!
//! A Letter is always a lowercase ASCII letter (a-z). Uppercase input is
//! normalized; anything else is rejected at construction, so game logic never
//! sees an out-of-alphabet guess.

use std::fmt;

/// The fixed keyboard alphabet, in display order
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for characters outside the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    NotALetter(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotALetter(c) => write!(f, "'{}' is not a letter a-z", c.escape_debug()),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a Letter from a character
    ///
    /// # Errors
    /// Returns `LetterError::NotALetter` for anything other than ASCII a-z / A-Z.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Letter;
    ///
    /// assert_eq!(Letter::new('R').unwrap().as_char(), 'r');
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub const fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self((c as u8).to_ascii_lowercase()))
        } else {
            Err(LetterError::NotALetter(c))
        }
    }

    /// Iterate the alphabet a..=z
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn to_uppercase(self) -> char {
        self.0.to_ascii_uppercase() as char
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_lowercase_accepted() {
        let letter = Letter::new('r').unwrap();
        assert_eq!(letter.as_char(), 'r');
        assert_eq!(letter.byte(), b'r');
    }

    #[test]
    fn letter_uppercase_normalized() {
        assert_eq!(Letter::new('Q').unwrap(), Letter::new('q').unwrap());
        assert_eq!(Letter::new('q').unwrap().to_uppercase(), 'Q');
    }

    #[test]
    fn letter_rejects_non_letters() {
        assert_eq!(Letter::new('3'), Err(LetterError::NotALetter('3')));
        assert!(Letter::new(' ').is_err());
        assert!(Letter::new('-').is_err());
        assert!(Letter::new('é').is_err());
    }

    #[test]
    fn alphabet_matches_all() {
        let collected: String = Letter::all().map(Letter::as_char).collect();
        assert_eq!(collected, ALPHABET);
    }

    #[test]
    fn letter_try_from() {
        let letter: Letter = 'z'.try_into().unwrap();
        assert_eq!(format!("{letter}"), "z");
    }
}
