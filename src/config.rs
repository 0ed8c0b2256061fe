//! Game configuration
//!
//! Collects the rule-defining inputs of a game: the secret word pool and the
//! language chips. The chips fix the attempt budget.

use crate::content::{LANGUAGES, Language};
use crate::wordlists::WordList;
use std::fmt;

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    TooFewLanguages(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewLanguages(n) => {
                write!(f, "At least 2 language chips are required, got {n}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Rules of a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    words: WordList,
    languages: Vec<Language>,
}

impl GameConfig {
    /// Default chips with the given word pool
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            languages: LANGUAGES.to_vec(),
        }
    }

    /// Use a custom set of chips
    ///
    /// # Errors
    /// Returns `ConfigError::TooFewLanguages` if fewer than two chips are given;
    /// one chip always survives, so a single chip would leave no attempts.
    pub fn with_languages(mut self, languages: Vec<Language>) -> Result<Self, ConfigError> {
        if languages.len() < 2 {
            return Err(ConfigError::TooFewLanguages(languages.len()));
        }
        self.languages = languages;
        Ok(self)
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Maximum tolerated wrong guesses: every chip but the last
    #[must_use]
    pub fn attempt_budget(&self) -> usize {
        self.languages.len() - 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(WordList::embedded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_eight() {
        assert_eq!(GameConfig::default().attempt_budget(), 8);
    }

    #[test]
    fn custom_languages_change_budget() {
        let config = GameConfig::default()
            .with_languages(LANGUAGES[..4].to_vec())
            .unwrap();
        assert_eq!(config.attempt_budget(), 3);
        assert_eq!(config.languages().len(), 4);
    }

    #[test]
    fn single_language_rejected() {
        let result = GameConfig::default().with_languages(LANGUAGES[..1].to_vec());
        assert_eq!(result.unwrap_err(), ConfigError::TooFewLanguages(1));
    }
}
