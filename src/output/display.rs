//! Display functions for the line-mode game and command results

use super::formatters::{attempts_bar, tiles_to_string, variant_marker};
use crate::commands::ReplayResult;
use crate::content::Language;
use crate::game::display::{announcement, keyboard, language_chips, spoken_word, word_tiles};
use crate::game::{Banner, GameSession, LetterVariant};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Print the game title
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_header<W: Write>(out: &mut W, attempt_budget: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "Assembly: Endgame".bright_cyan().bold())?;
    writeln!(
        out,
        " Guess the word within {attempt_budget} attempts to keep the programming world safe from Assembly!"
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())
}

fn chip(language: &Language, lost: bool) -> ColoredString {
    let fg = language.foreground;
    let bg = language.background;
    let text = format!(" {} ", language.name)
        .truecolor(fg.0, fg.1, fg.2)
        .on_truecolor(bg.0, bg.1, bg.2);
    if lost { text.strikethrough().dimmed() } else { text }
}

fn key(letter: char, variant: LetterVariant) -> ColoredString {
    let text = format!("{letter}{}", variant_marker(variant));
    match variant {
        LetterVariant::Unrevealed => text.black().on_yellow(),
        LetterVariant::Correct => text.white().on_green().bold(),
        LetterVariant::Wrong => text.white().on_red(),
        LetterVariant::Disabled => text.bright_black(),
    }
}

fn write_banner<W: Write>(out: &mut W, banner: &Banner) -> io::Result<()> {
    match banner {
        Banner::None => Ok(()),
        Banner::Farewell(text) => writeln!(out, "\n  {}", text.magenta().italic()),
        Banner::Won | Banner::Lost => {
            let title = banner.title().unwrap_or_default();
            let message = banner.message().unwrap_or_default();
            if matches!(banner, Banner::Won) {
                writeln!(out, "\n  {}", title.bright_green().bold())?;
                writeln!(out, "  {}", message.green())
            } else {
                writeln!(out, "\n  {}", title.bright_red().bold())?;
                writeln!(out, "  {}", message.red())
            }
        }
    }
}

/// Print the whole board: banner, chips, word, keyboard and status line
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_board<W: Write>(
    out: &mut W,
    session: &GameSession,
    languages: &[Language],
    banner: &Banner,
) -> io::Result<()> {
    write_banner(out, banner)?;

    let chips: Vec<String> = language_chips(session, languages)
        .iter()
        .map(|c| chip(c.language, c.lost).to_string())
        .collect();
    writeln!(out, "\n  {}", chips.join(" "))?;

    let tiles = word_tiles(session);
    writeln!(
        out,
        "\n  {}",
        tiles_to_string(&tiles).bright_white().bold()
    )?;

    let keys = keyboard(session);
    for row in keys.chunks(13) {
        let line: Vec<String> = row
            .iter()
            .map(|&(l, variant)| key(l.to_uppercase(), variant).to_string())
            .collect();
        writeln!(out, "  {}", line.join(" "))?;
    }

    let status = session.status();
    writeln!(
        out,
        "\n  Attempts: [{}] {}/{}",
        attempts_bar(status.attempts_remaining(), status.attempt_budget).green(),
        status.attempts_remaining(),
        status.attempt_budget
    )?;
    if let Some(line) = announcement(session) {
        writeln!(out, "  {}", line.bright_black())?;
    }
    writeln!(out, "  {}", spoken_word(session).bright_black())
}

/// Print the result of a replay
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn write_replay_result<W: Write>(out: &mut W, result: &ReplayResult) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Replaying: {}",
        result.word.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.steps.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {}  {:<15} {}  wrong: {}",
            i + 1,
            step.letter.to_uppercase(),
            format!("{:?}", step.outcome),
            step.tiles,
            step.wrong_guess_count
        )?;
    }

    writeln!(out)?;
    let summary = match result.phase {
        crate::game::Phase::Won => format!(
            "✅ Won with {} wrong {}",
            result.wrong_guess_count,
            if result.wrong_guess_count == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold(),
        crate::game::Phase::Lost => "❌ Lost: Assembly takes over".red().bold(),
        crate::game::Phase::Playing => format!(
            "… Still playing: {} attempts left",
            result.attempts_remaining
        )
        .yellow()
        .bold(),
    };
    writeln!(out, "{summary}")
}

/// Print the result of a replay to stdout
pub fn print_replay_result(result: &ReplayResult) {
    if let Err(e) = write_replay_result(&mut io::stdout().lock(), result) {
        log::warn!("failed to print replay result: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LANGUAGES;
    use crate::core::{Letter, SecretWord};
    use crate::game::display::status_banner;

    fn session(word: &str, guesses: &str) -> GameSession {
        let mut session = GameSession::with_word(SecretWord::new(word).unwrap(), 8);
        for c in guesses.chars() {
            session.guess_letter(Letter::new(c).unwrap());
        }
        session
    }

    #[test]
    fn board_mentions_languages_and_status() {
        colored::control::set_override(false);
        let s = session("react", "rq");
        let banner = status_banner(&s, LANGUAGES, |name| format!("Farewell, {name}"));

        let mut out = Vec::new();
        write_board(&mut out, &s, LANGUAGES, &banner).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Farewell, HTML"));
        assert!(text.contains("Assembly"));
        assert!(text.contains("R _ _ _ _"));
        assert!(text.contains("7/8"));
        assert!(text.contains("Sorry, the letter q is not in the word."));
        assert!(text.contains("Current word: r.blank.blank.blank.blank."));
    }

    #[test]
    fn header_mentions_budget() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_header(&mut out, 8).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("within 8 attempts"));
    }
}
