//! Formatting utilities for terminal output

use crate::game::{LetterVariant, Tile};

/// Placeholder for an unrevealed position
pub const HIDDEN_TILE: char = '_';

/// Format word tiles as space-separated uppercase letters
#[must_use]
pub fn tiles_to_string(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| match tile {
            Tile::Hidden => HIDDEN_TILE,
            Tile::Revealed(l) | Tile::Missed(l) => l.to_uppercase(),
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-character marker for a key variant, for uncoloured output
#[must_use]
pub const fn variant_marker(variant: LetterVariant) -> char {
    match variant {
        LetterVariant::Unrevealed => ' ',
        LetterVariant::Correct => '+',
        LetterVariant::Wrong => 'x',
        LetterVariant::Disabled => '.',
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as a bar
#[must_use]
pub fn attempts_bar(remaining: usize, budget: usize) -> String {
    create_progress_bar(remaining, budget, budget)
}
