//! Static game content: language chips and farewell messages

pub mod farewell;
pub mod languages;

pub use farewell::farewell_text;
pub use languages::{LANGUAGES, Language, Rgb};
