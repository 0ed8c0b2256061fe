//! Assembly: Endgame
//!
//! A hangman-style word game for the terminal. Every wrong guess knocks out a
//! programming language; lose them all and Assembly takes over.
//!
//! # Quick Start
//!
//! ```rust
//! use assembly_endgame::core::{Letter, SecretWord};
//! use assembly_endgame::game::{GameSession, GuessOutcome};
//!
//! let word = SecretWord::new("react").unwrap();
//! let mut session = GameSession::with_word(word, 8);
//!
//! for c in "react".chars() {
//!     let outcome = session.guess_letter(Letter::new(c).unwrap());
//!     assert_eq!(outcome, GuessOutcome::Correct);
//! }
//! assert!(session.status().is_won);
//! ```

// Core domain types
pub mod core;

// Game state, derived status, presentation mapping, observers
pub mod game;

// Language chips and farewell messages
pub mod content;

// Rules configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
