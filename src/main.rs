//! Assembly: Endgame - CLI
//!
//! Hangman-style word game with TUI and line-mode front ends.

use anyhow::{Context, Result};
use assembly_endgame::{
    commands::{ReplayConfig, replay, run_simple},
    config::GameConfig,
    game::{EventLog, Observers, Statistics, TerminalBell},
    output::print_replay_result,
    wordlists::WordList,
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assembly_endgame",
    about = "Guess the word before every programming language falls to Assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for word selection and farewell messages (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Don't ring the terminal bell when a game is lost
    #[arg(long, global = true)]
    no_bell: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Apply a sequence of guesses to a word and show every step
    Replay {
        /// The secret word
        word: String,

        /// Letters to guess, in order (e.g. "react" or "r,e,a")
        letters: String,
    },

    /// Show the active word list
    Words {
        /// Number of words to print
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

/// Load the word list selected by the -w flag
fn load_words(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "embedded" => Ok(WordList::embedded()),
        path => WordList::from_file(path).with_context(|| format!("cannot use word list {path}")),
    }
}

/// Route logs to `log_file` if given, otherwise to stderr unless a TUI owns the terminal
fn init_logging(log_file: Option<&PathBuf>, tui: bool) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else if tui {
        return Ok(());
    }

    builder.try_init().context("failed to initialize logging")
}

fn build_observers(no_bell: bool) -> Observers {
    let mut observers = Observers::new();
    observers.add(EventLog);
    if !no_bell {
        observers.add(TerminalBell::stdout());
    }
    observers
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_ref(), matches!(command, Commands::Play))?;

    let config = GameConfig::new(load_words(&cli.wordlist)?);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    log::debug!(
        "{} words, attempt budget {}",
        config.words().len(),
        config.attempt_budget()
    );

    match command {
        Commands::Play => {
            let stats = run_play_command(&config, rng, build_observers(cli.no_bell))?;
            print_session_summary(&stats);
            Ok(())
        }
        Commands::Simple => {
            let mut rng = rng;
            let mut observers = build_observers(cli.no_bell);
            run_simple(&config, &mut rng, &mut observers).map(|_| ())
        }
        Commands::Replay { word, letters } => run_replay_command(word, letters, &config),
        Commands::Words { count } => {
            run_words_command(&config, count);
            Ok(())
        }
    }
}

fn run_play_command(config: &GameConfig, rng: StdRng, observers: Observers) -> Result<Statistics> {
    use assembly_endgame::interactive::{App, run_tui};

    let app = App::new(config, rng, observers);
    run_tui(app)
}

fn print_session_summary(stats: &Statistics) {
    if stats.games_finished() > 0 {
        println!(
            "Won {} of {} games ({:.0}%). Thanks for playing!",
            stats.games_won,
            stats.games_finished(),
            stats.win_rate()
        );
    }
}

fn run_replay_command(word: String, letters: String, config: &GameConfig) -> Result<()> {
    let replay_config = ReplayConfig::new(word, letters, config.attempt_budget());
    let result = replay(&replay_config).map_err(|e| anyhow::anyhow!(e))?;

    print_replay_result(&result);
    Ok(())
}

fn run_words_command(config: &GameConfig, count: usize) {
    let words = config.words();
    println!("{} words in the active list", words.len());
    for word in words.words().iter().take(count) {
        println!("  • {word}");
    }
}
