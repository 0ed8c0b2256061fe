//! Replay command
//!
//! Applies a sequence of guesses to a known word and records every step.

use crate::core::{Letter, SecretWord};
use crate::game::display::word_tiles;
use crate::game::{GameSession, GuessOutcome, Phase};
use crate::output::formatters::tiles_to_string;

/// Configuration for a replay
pub struct ReplayConfig {
    pub word: String,
    pub letters: String,
    pub attempt_budget: usize,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(word: String, letters: String, attempt_budget: usize) -> Self {
        Self {
            word,
            letters,
            attempt_budget,
        }
    }
}

/// A single guess in the replay
#[derive(Debug, Clone)]
pub struct ReplayStep {
    pub letter: Letter,
    pub outcome: GuessOutcome,
    pub wrong_guess_count: usize,
    pub tiles: String,
}

/// Result of a replay
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub word: String,
    pub steps: Vec<ReplayStep>,
    pub phase: Phase,
    pub wrong_guess_count: usize,
    pub attempts_remaining: usize,
}

/// Parse a guess sequence
///
/// Letters may be separated by whitespace or commas. Uppercase is folded.
///
/// # Errors
/// Returns an error naming the first character that is not a letter.
pub fn parse_letters(letters: &str) -> Result<Vec<Letter>, String> {
    letters
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| Letter::new(c).map_err(|e| format!("Invalid guess: {e}")))
        .collect()
}

/// Replay `config.letters` against `config.word`
///
/// Guesses after the game is over are kept in the record as `GameOver` steps.
///
/// # Errors
///
/// Returns an error if the word is not a valid secret word or a guess is not a letter.
pub fn replay(config: &ReplayConfig) -> Result<ReplayResult, String> {
    let word = SecretWord::new(&config.word).map_err(|e| format!("Invalid word: {e}"))?;
    let letters = parse_letters(&config.letters)?;

    let mut session = GameSession::with_word(word, config.attempt_budget);
    let steps = letters
        .into_iter()
        .map(|letter| {
            let outcome = session.guess_letter(letter);
            ReplayStep {
                letter,
                outcome,
                wrong_guess_count: session.status().wrong_guess_count,
                tiles: tiles_to_string(&word_tiles(&session)),
            }
        })
        .collect();

    let status = session.status();
    Ok(ReplayResult {
        word: session.word().text().to_string(),
        steps,
        phase: status.phase(),
        wrong_guess_count: status.wrong_guess_count,
        attempts_remaining: status.attempts_remaining(),
    })
}
