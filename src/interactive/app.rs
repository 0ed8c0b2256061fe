//! TUI application state and logic

use super::confetti::Confetti;
use crate::config::GameConfig;
use crate::content::farewell_text;
use crate::core::Letter;
use crate::game::display::status_banner;
use crate::game::{Banner, GameEvent, GameSession, GuessOutcome, Observers, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;

/// Frame interval while the confetti is falling
const TICK: Duration = Duration::from_millis(40);

/// Application state
pub struct App<'a> {
    pub config: &'a GameConfig,
    pub session: GameSession,
    pub rng: StdRng,
    pub observers: Observers,
    pub banner: Banner,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub confetti: Confetti,
    pub area: Rect,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(config: &'a GameConfig, mut rng: StdRng, observers: Observers) -> Self {
        let session = GameSession::new(config.words(), config.attempt_budget(), &mut rng);

        Self {
            config,
            session,
            rng,
            observers,
            banner: Banner::None,
            messages: vec![Message {
                text: "Type a letter to guess. Esc quits.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            confetti: Confetti::new(),
            area: Rect::new(0, 0, 80, 24),
            should_quit: false,
        }
    }

    pub fn guess(&mut self, c: char) {
        let letter = match Letter::new(c) {
            Ok(letter) => letter,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let (outcome, event) = self.observers.guess_letter(&mut self.session, letter);
        match outcome {
            GuessOutcome::AlreadyGuessed => {
                self.add_message(
                    &format!("You already tried {}", letter.to_uppercase()),
                    MessageStyle::Info,
                );
            }
            GuessOutcome::GameOver => {
                self.add_message("Game over! Press Enter for a new game", MessageStyle::Info);
            }
            GuessOutcome::Correct | GuessOutcome::Incorrect => {
                let rng = &mut self.rng;
                self.banner = status_banner(&self.session, self.config.languages(), |name| {
                    farewell_text(name, rng)
                });
            }
        }

        if let Some(event) = event {
            self.on_event(&event);
        }
    }

    /// Local reactions to a transition, after the shared observers ran
    fn on_event(&mut self, event: &GameEvent) {
        self.stats.record(event);
        match event {
            GameEvent::Won { word } => {
                let count = Confetti::pieces_for(self.area);
                self.confetti.burst(self.area, count, &mut self.rng);
                self.add_message(
                    &format!("🎉 You saved the world! The word was {}", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            GameEvent::Lost { word } => {
                self.add_message(
                    &format!("The word was {}. Assembly wins.", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            GameEvent::NewGame => {}
        }
    }

    pub fn new_game(&mut self) {
        let event =
            self.observers
                .start_new_game(&mut self.session, self.config.words(), &mut self.rng);
        self.on_event(&event);
        self.banner = Banner::None;
        self.confetti.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn on_tick(&mut self) {
        if self.confetti.is_active() {
            self.confetti.tick(self.area);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter if self.session.status().is_over() => self.new_game(),
            KeyCode::Char(c) if !ctrl => self.guess(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        let size = terminal.size()?;
        app.area = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = if app.confetti.is_active() {
            TICK
        } else {
            Duration::from_secs(1)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        } else {
            app.on_tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn react_config() -> GameConfig {
        GameConfig::new(WordList::new(words_from_slice(&["react"])).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_all(app: &mut App, letters: &str) {
        for c in letters.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_word_wins_and_starts_confetti() {
        let config = react_config();
        let mut app = App::new(&config, StdRng::seed_from_u64(1), Observers::new());
        type_all(&mut app, "REACT");

        assert!(app.session.status().is_won);
        assert_eq!(app.banner, Banner::Won);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.confetti.is_active());
    }

    #[test]
    fn wrong_guess_sets_farewell_banner() {
        let config = react_config();
        let mut app = App::new(&config, StdRng::seed_from_u64(1), Observers::new());
        type_all(&mut app, "q");

        match &app.banner {
            Banner::Farewell(text) => assert!(text.contains("HTML")),
            other => panic!("expected farewell, got {other:?}"),
        }
    }

    #[test]
    fn enter_starts_new_game_only_when_over() {
        let config = react_config();
        let mut app = App::new(&config, StdRng::seed_from_u64(1), Observers::new());
        type_all(&mut app, "r");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.guessed().len(), 1);

        type_all(&mut app, "qwxzjkvb");
        assert!(app.session.status().is_lost);
        assert_eq!(app.stats.games_lost, 1);

        press(&mut app, KeyCode::Enter);
        assert!(app.session.guessed().is_empty());
        assert_eq!(app.banner, Banner::None);
    }

    #[test]
    fn ctrl_n_restarts_mid_game() {
        let config = react_config();
        let mut app = App::new(&config, StdRng::seed_from_u64(1), Observers::new());
        type_all(&mut app, "rq");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert!(app.session.guessed().is_empty());
    }

    #[test]
    fn non_letters_report_error() {
        let config = react_config();
        let mut app = App::new(&config, StdRng::seed_from_u64(1), Observers::new());
        type_all(&mut app, "7");
        assert!(app.session.guessed().is_empty());
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn escape_quits() {
        let config = react_config();
        let mut app = App::new(&config, StdRng::seed_from_u64(1), Observers::new());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_capped_at_five() {
        let config = react_config();
        let mut app = App::new(&config, StdRng::seed_from_u64(1), Observers::new());
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
