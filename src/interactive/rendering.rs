//! TUI rendering with ratatui
//!
//! Header, status banner, language chips, word tiles, keyboard, messages
//! and a status bar, with confetti drawn on top after a win.

use super::app::{App, MessageStyle};
use crate::game::display::{announcement, keyboard, language_chips, word_tiles};
use crate::game::{Banner, LetterVariant, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let status = app.session.status();
    let border_color = if status.is_lost {
        Color::Red
    } else if status.is_won {
        Color::Green
    } else {
        Color::Cyan
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border_color));
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Status banner
            Constraint::Length(2), // Language chips
            Constraint::Length(3), // Word
            Constraint::Length(4), // Keyboard
            Constraint::Min(3),    // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(inner);

    render_header(f, app, chunks[0]);
    render_banner(f, app, chunks[1]);
    render_chips(f, app, chunks[2]);
    render_word(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    render_messages(f, app, chunks[5]);
    render_status(f, app, chunks[6]);

    app.confetti.render(f.buffer_mut(), inner);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Assembly: Endgame",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Guess the word within {} attempts to keep the programming world safe from Assembly!",
                app.config.attempt_budget()
            ),
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let (lines, color) = match &app.banner {
        Banner::None => (Vec::new(), Color::DarkGray),
        Banner::Farewell(text) => (
            vec![Line::from(Span::styled(
                text.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            ))],
            Color::Magenta,
        ),
        banner @ (Banner::Won | Banner::Lost) => {
            let color = if matches!(banner, Banner::Won) {
                Color::Green
            } else {
                Color::Red
            };
            (
                vec![
                    Line::from(Span::styled(
                        banner.title().unwrap_or_default(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(banner.message().unwrap_or_default().to_string()),
                ],
                color,
            )
        }
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_chips(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for chip in language_chips(&app.session, app.config.languages()) {
        let lang = chip.language;
        let style = if chip.lost {
            Style::default()
                .fg(Color::DarkGray)
                .bg(Color::Black)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
                .fg(Color::Rgb(lang.foreground.0, lang.foreground.1, lang.foreground.2))
                .bg(Color::Rgb(lang.background.0, lang.background.1, lang.background.2))
        };
        let label = if chip.lost {
            format!(" 💀{} ", lang.name)
        } else {
            format!(" {} ", lang.name)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let chips = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(chips, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for tile in word_tiles(&app.session) {
        let (text, style) = match tile {
            Tile::Hidden => (
                "   ".to_string(),
                Style::default()
                    .bg(Color::Rgb(0x32, 0x32, 0x32))
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Tile::Revealed(l) => (
                format!(" {} ", l.to_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Rgb(0x32, 0x32, 0x32))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Tile::Missed(l) => (
                format!(" {} ", l.to_uppercase()),
                Style::default()
                    .fg(Color::LightRed)
                    .bg(Color::Rgb(0x32, 0x32, 0x32))
                    .add_modifier(Modifier::UNDERLINED),
            ),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    let word = Paragraph::new(vec![Line::default(), Line::from(spans)])
        .alignment(Alignment::Center);
    f.render_widget(word, area);
}

fn key_style(variant: LetterVariant) -> Style {
    match variant {
        LetterVariant::Unrevealed => Style::default()
            .fg(Color::Black)
            .bg(Color::Rgb(0xFC, 0xBA, 0x29))
            .add_modifier(Modifier::BOLD),
        LetterVariant::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Rgb(0x10, 0xA9, 0x5B))
            .add_modifier(Modifier::BOLD),
        LetterVariant::Wrong => Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(0xEC, 0x5D, 0x49)),
        LetterVariant::Disabled => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keys = keyboard(&app.session);
    let lines: Vec<Line> = keys
        .chunks(13)
        .map(|row| {
            let mut spans = Vec::new();
            for &(letter, variant) in row {
                spans.push(Span::styled(
                    format!(" {} ", letter.to_uppercase()),
                    key_style(variant),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .title(" Keyboard ")
            .title_alignment(Alignment::Center),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();
    if let Some(line) = announcement(&app.session) {
        items.push(ListItem::new(line).style(Style::default().fg(Color::Gray)));
    }
    items.extend(app.messages.iter().rev().map(|msg| {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        ListItem::new(msg.text.clone()).style(style)
    }));

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::TOP));
    f.render_widget(messages, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let status = app.session.status();
    let attempts = Paragraph::new(format!(
        "Attempts left: {}/{}",
        status.attempts_remaining(),
        status.attempt_budget
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_finished(),
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if status.is_over() {
        "Enter: New Game | Esc: Quit"
    } else {
        "a-z: Guess | Ctrl-N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
