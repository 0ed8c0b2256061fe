//! Ordered, duplicate-free record of guessed letters

use super::Letter;

/// Letters the player has tried, in the order they were first guessed
///
/// Membership is tracked in a 26-bit mask alongside the ordered list, so
/// `contains` never scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    order: Vec<Letter>,
    mask: u32,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    const fn bit(letter: Letter) -> u32 {
        1 << (letter.byte() - b'a')
    }

    /// Insert a letter, returning `false` if it was already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = Self::bit(letter);
        if self.mask & bit != 0 {
            return false;
        }
        self.mask |= bit;
        self.order.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.mask & Self::bit(letter) != 0
    }

    /// Most recently inserted letter
    #[must_use]
    pub fn last(&self) -> Option<Letter> {
        self.order.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.order.iter().copied()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.mask = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn insert_new_letter() {
        let mut guessed = GuessedLetters::new();
        assert!(guessed.insert(letter('r')));
        assert!(guessed.contains(letter('r')));
        assert_eq!(guessed.len(), 1);
    }

    #[test]
    fn insert_duplicate_is_noop() {
        let mut guessed = GuessedLetters::new();
        assert!(guessed.insert(letter('r')));
        assert!(!guessed.insert(letter('r')));
        assert_eq!(guessed.len(), 1);
        assert_eq!(guessed.iter().collect::<Vec<_>>(), vec![letter('r')]);
    }

    #[test]
    fn last_tracks_most_recent_new_insert() {
        let mut guessed = GuessedLetters::new();
        assert_eq!(guessed.last(), None);

        guessed.insert(letter('a'));
        guessed.insert(letter('b'));
        assert_eq!(guessed.last(), Some(letter('b')));

        // Re-guessing an older letter does not move it to the end
        guessed.insert(letter('a'));
        assert_eq!(guessed.last(), Some(letter('b')));
    }

    #[test]
    fn clear_resets_everything() {
        let mut guessed = GuessedLetters::new();
        guessed.insert(letter('z'));
        guessed.clear();
        assert!(guessed.is_empty());
        assert!(!guessed.contains(letter('z')));
        assert!(guessed.insert(letter('z')));
    }

    #[test]
    fn boundary_letters() {
        let mut guessed = GuessedLetters::new();
        guessed.insert(letter('a'));
        guessed.insert(letter('z'));
        assert!(guessed.contains(letter('a')));
        assert!(guessed.contains(letter('z')));
        assert!(!guessed.contains(letter('m')));
    }
}
