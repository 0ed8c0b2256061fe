//! Mapping from game state to what the player sees
//!
//! Pure functions shared by the TUI and the line-mode CLI. Each one takes the
//! session (and static content) and returns plain values; no styling here.

use super::session::GameSession;
use crate::content::Language;
use crate::core::Letter;

/// How a keyboard key is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVariant {
    /// Not guessed yet and still available
    Unrevealed,
    /// Guessed and in the word
    Correct,
    /// Guessed and not in the word
    Wrong,
    /// Not guessed, but the game is over
    Disabled,
}

/// Variant of a single key
#[must_use]
pub fn letter_variant(letter: Letter, session: &GameSession) -> LetterVariant {
    if session.guessed().contains(letter) {
        if session.word().contains(letter) {
            LetterVariant::Correct
        } else {
            LetterVariant::Wrong
        }
    } else if session.status().is_over() {
        LetterVariant::Disabled
    } else {
        LetterVariant::Unrevealed
    }
}

/// The whole keyboard, a..=z
#[must_use]
pub fn keyboard(session: &GameSession) -> Vec<(Letter, LetterVariant)> {
    let over = session.status().is_over();
    Letter::all()
        .map(|letter| {
            let variant = match (session.guessed().contains(letter), over) {
                (true, _) if session.word().contains(letter) => LetterVariant::Correct,
                (true, _) => LetterVariant::Wrong,
                (false, true) => LetterVariant::Disabled,
                (false, false) => LetterVariant::Unrevealed,
            };
            (letter, variant)
        })
        .collect()
}

/// One position of the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Hidden,
    Revealed(Letter),
    /// Shown only because the game was lost; the player never found it
    Missed(Letter),
}

#[must_use]
pub fn word_tiles(session: &GameSession) -> Vec<Tile> {
    let lost = session.status().is_lost;
    session
        .word()
        .letters()
        .map(|letter| {
            if session.guessed().contains(letter) {
                Tile::Revealed(letter)
            } else if lost {
                Tile::Missed(letter)
            } else {
                Tile::Hidden
            }
        })
        .collect()
}

/// A language chip and whether it has been lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip<'a> {
    pub language: &'a Language,
    pub lost: bool,
}

/// Chips in order; the first `wrong_guess_count` are lost
#[must_use]
pub fn language_chips<'a>(session: &GameSession, languages: &'a [Language]) -> Vec<Chip<'a>> {
    let wrong = session.status().wrong_guess_count;
    languages
        .iter()
        .enumerate()
        .map(|(index, language)| Chip {
            language,
            lost: index < wrong,
        })
        .collect()
}

/// Status banner above the chips
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    None,
    Farewell(String),
    Won,
    Lost,
}

impl Banner {
    #[must_use]
    pub const fn title(&self) -> Option<&'static str> {
        match self {
            Self::Won => Some("You win!"),
            Self::Lost => Some("Game over!"),
            Self::None | Self::Farewell(_) => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Farewell(text) => Some(text.as_str()),
            Self::Won => Some("Well done! 🎉"),
            Self::Lost => Some("You lose! Better start learning Assembly 😭"),
        }
    }
}

/// Pick the banner for the current state
///
/// `farewell` renders the farewell text for the name of the language the
/// last wrong guess knocked out.
pub fn status_banner<F>(session: &GameSession, languages: &[Language], farewell: F) -> Banner
where
    F: FnOnce(&str) -> String,
{
    let status = session.status();
    if !status.is_over() && status.is_last_guess_incorrect {
        return status
            .wrong_guess_count
            .checked_sub(1)
            .and_then(|index| languages.get(index))
            .map_or(Banner::None, |lang| Banner::Farewell(farewell(lang.name)));
    }
    if status.is_won {
        return Banner::Won;
    }
    if status.is_lost {
        return Banner::Lost;
    }
    Banner::None
}

/// Accessible status line about the last guess
#[must_use]
pub fn announcement(session: &GameSession) -> Option<String> {
    let status = session.status();
    let letter = status.last_guessed_letter?;
    let verdict = if session.word().contains(letter) {
        format!("Correct! The letter {letter} is in the word.")
    } else {
        format!("Sorry, the letter {letter} is not in the word.")
    };
    let remaining = status.attempts_remaining();
    let plural = if remaining == 1 { "attempt" } else { "attempts" };
    Some(format!("{verdict} You have {remaining} {plural} left."))
}

/// The word as a screen reader would read it: guessed letters, `blank` otherwise
#[must_use]
pub fn spoken_word(session: &GameSession) -> String {
    let spoken: String = session
        .word()
        .letters()
        .map(|letter| {
            if session.guessed().contains(letter) {
                format!("{letter}.")
            } else {
                "blank.".to_string()
            }
        })
        .collect();
    format!("Current word: {spoken}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LANGUAGES;
    use crate::core::SecretWord;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn session(word: &str, guesses: &str) -> GameSession {
        let mut session = GameSession::with_word(SecretWord::new(word).unwrap(), 8);
        for c in guesses.chars() {
            session.guess_letter(letter(c));
        }
        session
    }

    #[test]
    fn letter_variants_while_playing() {
        let s = session("react", "rq");
        assert_eq!(letter_variant(letter('r'), &s), LetterVariant::Correct);
        assert_eq!(letter_variant(letter('q'), &s), LetterVariant::Wrong);
        assert_eq!(letter_variant(letter('e'), &s), LetterVariant::Unrevealed);
        assert_eq!(letter_variant(letter('z'), &s), LetterVariant::Unrevealed);
    }

    #[test]
    fn unguessed_keys_disabled_when_over() {
        let s = session("react", "react");
        assert_eq!(letter_variant(letter('r'), &s), LetterVariant::Correct);
        assert_eq!(letter_variant(letter('z'), &s), LetterVariant::Disabled);
    }

    #[test]
    fn keyboard_agrees_with_letter_variant() {
        for s in [session("react", "rqe"), session("react", "qwxzjkvb")] {
            let keys = keyboard(&s);
            assert_eq!(keys.len(), 26);
            for (l, variant) in keys {
                assert_eq!(variant, letter_variant(l, &s), "mismatch for {l}");
            }
        }
    }

    #[test]
    fn tiles_hide_unguessed_while_playing() {
        let s = session("react", "rt");
        assert_eq!(
            word_tiles(&s),
            vec![
                Tile::Revealed(letter('r')),
                Tile::Hidden,
                Tile::Hidden,
                Tile::Hidden,
                Tile::Revealed(letter('t')),
            ]
        );
    }

    #[test]
    fn tiles_reveal_missed_on_loss() {
        let s = session("react", "rqwxzjkvb");
        let tiles = word_tiles(&s);
        assert_eq!(tiles[0], Tile::Revealed(letter('r')));
        assert_eq!(tiles[1], Tile::Missed(letter('e')));
        assert!(!tiles.contains(&Tile::Hidden));
    }

    #[test]
    fn chips_lost_left_to_right() {
        let s = session("react", "qwx");
        let chips = language_chips(&s, LANGUAGES);
        assert_eq!(chips.len(), 9);
        assert_eq!(chips.iter().filter(|c| c.lost).count(), 3);
        assert!(chips[2].lost);
        assert!(!chips[3].lost);
        assert!(!chips[8].lost);
    }

    #[test]
    fn banner_farewell_keyed_by_last_lost_language() {
        let s = session("react", "qw");
        let banner = status_banner(&s, LANGUAGES, |name| format!("Bye {name}"));
        assert_eq!(banner, Banner::Farewell("Bye CSS".to_string()));
    }

    #[test]
    fn banner_none_after_correct_guess() {
        let s = session("react", "qr");
        assert_eq!(status_banner(&s, LANGUAGES, str::to_string), Banner::None);
        let fresh = session("react", "");
        assert_eq!(status_banner(&fresh, LANGUAGES, str::to_string), Banner::None);
    }

    #[test]
    fn banner_won_and_lost() {
        let won = session("react", "react");
        assert_eq!(status_banner(&won, LANGUAGES, str::to_string), Banner::Won);
        assert_eq!(Banner::Won.title(), Some("You win!"));

        let lost = session("react", "qwxzjkvb");
        assert_eq!(status_banner(&lost, LANGUAGES, str::to_string), Banner::Lost);
        assert!(Banner::Lost.message().unwrap().contains("Assembly"));
    }

    #[test]
    fn announcement_texts() {
        assert_eq!(announcement(&session("react", "")), None);
        assert_eq!(
            announcement(&session("react", "r")).unwrap(),
            "Correct! The letter r is in the word. You have 8 attempts left."
        );
        assert_eq!(
            announcement(&session("react", "qwxzjkv")).unwrap(),
            "Sorry, the letter v is not in the word. You have 1 attempt left."
        );
    }

    #[test]
    fn spoken_word_marks_blanks() {
        assert_eq!(
            spoken_word(&session("react", "rt")),
            "Current word: r.blank.blank.blank.t."
        );
    }
}
