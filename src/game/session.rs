//! Game state store
//!
//! A `GameSession` exclusively owns the secret word and the guessed letters
//! of the game in progress. Front ends hold one session and mutate it only
//! through `start_new_game` and `guess_letter`.

use super::status::GameStatus;
use crate::core::{GuessedLetters, Letter, SecretWord};
use crate::wordlists::WordList;
use rand::Rng;

/// What a call to `guess_letter` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New letter, present in the word
    Correct,
    /// New letter, absent from the word
    Incorrect,
    /// Letter was guessed before; nothing changed
    AlreadyGuessed,
    /// The game is already won or lost; nothing changed
    GameOver,
}

impl GuessOutcome {
    /// Whether the guess changed the session
    #[must_use]
    pub const fn is_recorded(self) -> bool {
        matches!(self, Self::Correct | Self::Incorrect)
    }
}

/// One game: secret word, guesses so far, and how many wrong guesses are tolerated
#[derive(Debug, Clone)]
pub struct GameSession {
    word: SecretWord,
    guessed: GuessedLetters,
    attempt_budget: usize,
}

impl GameSession {
    /// Start a session with a random word from `words`
    pub fn new<R: Rng + ?Sized>(words: &WordList, attempt_budget: usize, rng: &mut R) -> Self {
        Self::with_word(words.random_word(rng).clone(), attempt_budget)
    }

    /// Start a session with a known word
    #[must_use]
    pub fn with_word(word: SecretWord, attempt_budget: usize) -> Self {
        log::debug!(
            "new game: {} letters, budget {attempt_budget}",
            word.len()
        );
        Self {
            word,
            guessed: GuessedLetters::new(),
            attempt_budget,
        }
    }

    /// Pick a fresh word at random and clear all guesses
    ///
    /// The same word may be picked again.
    pub fn start_new_game<R: Rng + ?Sized>(&mut self, words: &WordList, rng: &mut R) {
        self.restart_with(words.random_word(rng).clone());
    }

    /// Replace the word and clear all guesses
    pub fn restart_with(&mut self, word: SecretWord) {
        log::debug!("new game: {} letters", word.len());
        self.word = word;
        self.guessed.clear();
    }

    /// Record a guess
    ///
    /// Re-guessing a letter, or guessing after the game is over, is a no-op.
    pub fn guess_letter(&mut self, letter: Letter) -> GuessOutcome {
        if self.status().is_over() {
            log::trace!("ignored guess '{letter}': game over");
            return GuessOutcome::GameOver;
        }

        if !self.guessed.insert(letter) {
            log::trace!("ignored guess '{letter}': already guessed");
            return GuessOutcome::AlreadyGuessed;
        }

        if self.word.contains(letter) {
            log::trace!("guess '{letter}': correct");
            GuessOutcome::Correct
        } else {
            log::trace!("guess '{letter}': incorrect");
            GuessOutcome::Incorrect
        }
    }

    /// Derived status, recomputed on every call
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(&self.word, &self.guessed, self.attempt_budget)
    }

    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    #[must_use]
    pub const fn attempt_budget(&self) -> usize {
        self.attempt_budget
    }
}
