//! Core domain types for the game
//!
//! This module contains the fundamental value types: letters, the secret word,
//! and the record of guesses. Everything here is pure and infallible once
//! constructed.

mod guessed;
mod letter;
mod secret_word;

pub use guessed::GuessedLetters;
pub use letter::{ALPHABET, Letter, LetterError};
pub use secret_word::{SecretWord, SecretWordError};
