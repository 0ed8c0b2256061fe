//! Game state, derived status, and presentation mapping
//!
//! - `session`: the state store (`start_new_game`, `guess_letter`)
//! - `status`: derived values (wrong guesses, won, lost, ...)
//! - `display`: pure mapping from state to tiles, keys, chips and banners
//! - `observer`: transition events for sound and visual effects
//! - `stats`: win/loss counts for the current run

pub mod display;
pub mod observer;
pub mod session;
pub mod stats;
pub mod status;

pub use display::{Banner, Chip, LetterVariant, Tile};
pub use observer::{EventLog, GameEvent, GameObserver, Observers, TerminalBell, Transition};
pub use session::{GameSession, GuessOutcome};
pub use stats::Statistics;
pub use status::{GameStatus, Phase};
