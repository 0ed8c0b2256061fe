//! Reactions to game state transitions
//!
//! Sound and visual effects react to the state machine without living in it:
//! front ends compare the status before and after each mutation with
//! `Transition::detect` and pass the resulting event to their observers.

use super::session::{GameSession, GuessOutcome};
use super::status::{GameStatus, Phase};
use crate::core::Letter;
use crate::wordlists::WordList;
use rand::Rng;
use std::io::{self, Write};

/// A state transition worth reacting to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    NewGame,
    Won { word: String },
    Lost { word: String },
}

/// Transition detection between two status snapshots
pub struct Transition;

impl Transition {
    /// Event for the step from `before` to `after`, if the phase changed
    #[must_use]
    pub fn detect(before: &GameStatus, after: &GameStatus, word: &str) -> Option<GameEvent> {
        match (before.phase(), after.phase()) {
            (Phase::Playing, Phase::Won) => Some(GameEvent::Won {
                word: word.to_string(),
            }),
            (Phase::Playing, Phase::Lost) => Some(GameEvent::Lost {
                word: word.to_string(),
            }),
            (Phase::Won | Phase::Lost, Phase::Playing) => Some(GameEvent::NewGame),
            _ => None,
        }
    }
}

/// Something that reacts to game events
///
/// Observers are fire-and-forget: they cannot fail the game or change its state.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Rings the terminal bell when the game is lost
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameObserver for TerminalBell<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if matches!(event, GameEvent::Lost { .. }) {
            if let Err(e) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
                log::warn!("failed to ring bell: {e}");
            }
        }
    }
}

/// Writes every event to the log
pub struct EventLog;

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::NewGame => log::info!("new game started"),
            GameEvent::Won { word } => log::info!("game won: {word}"),
            GameEvent::Lost { word } => log::info!("game lost: {word}"),
        }
    }
}

/// Fan-out to several observers
#[derive(Default)]
pub struct Observers {
    observers: Vec<Box<dyn GameObserver>>,
}

impl Observers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&mut self, event: &GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }

    /// Guess a letter and notify on a phase change
    ///
    /// Returns the outcome and the event that was dispatched, if any.
    pub fn guess_letter(
        &mut self,
        session: &mut GameSession,
        letter: Letter,
    ) -> (GuessOutcome, Option<GameEvent>) {
        let before = session.status();
        let outcome = session.guess_letter(letter);
        let event = Transition::detect(&before, &session.status(), session.word().text());
        if let Some(ref event) = event {
            self.notify(event);
        }
        (outcome, event)
    }

    /// Start a new game and notify
    pub fn start_new_game<R: Rng + ?Sized>(
        &mut self,
        session: &mut GameSession,
        words: &WordList,
        rng: &mut R,
    ) -> GameEvent {
        session.start_new_game(words, rng);
        let event = GameEvent::NewGame;
        self.notify(&event);
        event
    }
}
