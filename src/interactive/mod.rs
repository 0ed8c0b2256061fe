//! Interactive TUI interface

mod app;
mod confetti;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use confetti::Confetti;
