//! Derived game status
//!
//! Everything here is recomputed from the secret word, the guessed letters
//! and the attempt budget on every read. Nothing is cached.

use crate::core::{GuessedLetters, Letter, SecretWord};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

/// Snapshot of all derived values for one game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    pub wrong_guess_count: usize,
    pub attempt_budget: usize,
    pub is_won: bool,
    pub is_lost: bool,
    pub last_guessed_letter: Option<Letter>,
    pub is_last_guess_incorrect: bool,
}

/// Guessed letters that do not occur in the word
#[must_use]
pub fn wrong_guess_count(word: &SecretWord, guessed: &GuessedLetters) -> usize {
    guessed.iter().filter(|&l| !word.contains(l)).count()
}

/// Every letter of the word has been guessed at least once
#[must_use]
pub fn is_won(word: &SecretWord, guessed: &GuessedLetters) -> bool {
    word.letters().all(|l| guessed.contains(l))
}

impl GameStatus {
    #[must_use]
    pub fn evaluate(word: &SecretWord, guessed: &GuessedLetters, attempt_budget: usize) -> Self {
        let wrong_guess_count = wrong_guess_count(word, guessed);
        let last_guessed_letter = guessed.last();

        Self {
            wrong_guess_count,
            attempt_budget,
            is_won: is_won(word, guessed),
            is_lost: wrong_guess_count >= attempt_budget,
            last_guessed_letter,
            is_last_guess_incorrect: last_guessed_letter.is_some_and(|l| !word.contains(l)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_won || self.is_lost
    }

    /// Won takes precedence if both conditions were ever to hold together
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.is_won {
            Phase::Won
        } else if self.is_lost {
            Phase::Lost
        } else {
            Phase::Playing
        }
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempt_budget.saturating_sub(self.wrong_guess_count)
    }
}
