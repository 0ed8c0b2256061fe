//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::config::GameConfig;
use crate::content::farewell_text;
use crate::core::Letter;
use crate::game::display::status_banner;
use crate::game::{Banner, GameSession, GuessOutcome, Observers, Statistics};
use crate::output::{write_board, write_header};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Guess(Letter),
    NewGame,
    Quit,
    Help,
    Invalid,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let mut chars = line.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Letter::new(c).map_or(Input::Invalid, Input::Guess);
    }
    match line.to_lowercase().as_str() {
        "quit" | "exit" => Input::Quit,
        "new" | "restart" => Input::NewGame,
        "help" => Input::Help,
        _ => Input::Invalid,
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
    observers: &mut Observers,
) -> Result<Statistics> {
    let stdin = io::stdin();
    run_simple_with(config, rng, observers, stdin.lock(), io::stdout().lock())
}

/// Run the simple mode over arbitrary input and output
///
/// Ends on `quit`, `exit` or end of input.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple_with<R, I, W>(
    config: &GameConfig,
    rng: &mut R,
    observers: &mut Observers,
    mut input: I,
    mut out: W,
) -> Result<Statistics>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut stats = Statistics::default();
    let mut session = GameSession::new(config.words(), config.attempt_budget(), rng);
    let mut banner = Banner::None;

    write_header(&mut out, config.attempt_budget())?;
    writeln!(
        out,
        "\nType a letter and press Enter. Commands: 'new' for a new game, 'quit' to exit.\n"
    )?;

    loop {
        write_board(&mut out, &session, config.languages(), &banner)?;

        let prompt = if session.status().is_over() {
            "Play again? ('new' or 'quit')"
        } else {
            "Guess a letter"
        };
        write!(out, "\n{prompt}: ")?;
        out.flush().context("failed to flush output")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_input(&line) {
            Input::Quit => break,
            Input::Help => {
                writeln!(
                    out,
                    "Guess one letter a-z per line. 'new' starts over, 'quit' exits."
                )?;
            }
            Input::NewGame => {
                observers.start_new_game(&mut session, config.words(), rng);
                banner = Banner::None;
                writeln!(out, "\n{}", "🔄 New game started!".cyan())?;
            }
            Input::Guess(letter) => {
                let (outcome, event) = observers.guess_letter(&mut session, letter);
                match outcome {
                    GuessOutcome::AlreadyGuessed => {
                        writeln!(out, "You already tried {}.", letter.to_uppercase())?;
                    }
                    GuessOutcome::GameOver => {
                        writeln!(out, "The game is over. Type 'new' to play again.")?;
                    }
                    GuessOutcome::Correct | GuessOutcome::Incorrect => {
                        banner = status_banner(&session, config.languages(), |name| {
                            farewell_text(name, &mut *rng)
                        });
                    }
                }
                if let Some(event) = event {
                    stats.record(&event);
                }
            }
            Input::Invalid => {
                writeln!(out, "{}", "❌ Enter a single letter a-z.".red())?;
            }
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! Won {} of {} finished games.\n",
        stats.games_won,
        stats.games_finished()
    )?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn react_config() -> GameConfig {
        GameConfig::new(WordList::new(words_from_slice(&["react"])).unwrap())
    }

    fn play(script: &str) -> (Statistics, String) {
        colored::control::set_override(false);
        let config = react_config();
        let mut rng = StdRng::seed_from_u64(11);
        let mut observers = Observers::new();
        let mut out = Vec::new();
        let stats =
            run_simple_with(&config, &mut rng, &mut observers, script.as_bytes(), &mut out)
                .unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_input_variants() {
        assert_eq!(parse_input("r\n"), Input::Guess(Letter::new('r').unwrap()));
        assert_eq!(parse_input(" R "), Input::Guess(Letter::new('r').unwrap()));
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input("NEW"), Input::NewGame);
        assert_eq!(parse_input("help"), Input::Help);
        assert_eq!(parse_input("7"), Input::Invalid);
        assert_eq!(parse_input("re"), Input::Invalid);
        assert_eq!(parse_input(""), Input::Invalid);
    }

    #[test]
    fn winning_script() {
        let (stats, text) = play("r\ne\na\nc\nt\nquit\n");
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.games_lost, 0);
        assert!(text.contains("You win!"));
        assert!(text.contains("R E A C T"));
    }

    #[test]
    fn losing_script_then_new_game() {
        let (stats, text) = play("q\nw\nx\nz\nj\nk\nv\nb\nr\nnew\nr\n");
        assert_eq!(stats.games_lost, 1);
        assert!(text.contains("Game over!"));
        assert!(text.contains("The game is over."));
        assert!(text.contains("New game started!"));
    }

    #[test]
    fn repeated_and_invalid_guesses() {
        let (stats, text) = play("r\nr\n5\n");
        assert_eq!(stats.games_finished(), 0);
        assert!(text.contains("You already tried R."));
        assert!(text.contains("Enter a single letter a-z."));
    }
}
