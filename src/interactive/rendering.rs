//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MAX_ATTEMPTS, SessionOutcome};
use crate::output::drawing_frame;
use crate::output::formatters::{format_guessed, format_pattern, format_score};
use crate::wordlists::WordSelector;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordSelector>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Game state, scores, messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let incorrect = app.session.as_ref().map_or(0, |s| s.incorrect_count());
    let color = match app.session.as_ref().map(|s| s.outcome()) {
        Some(SessionOutcome::Lost) => Color::Red,
        Some(SessionOutcome::Won) => Color::Green,
        _ => Color::White,
    };

    let lines: Vec<Line> = drawing_frame(incorrect)
        .iter()
        .map(|&line| Line::from(line))
        .collect();

    let gallows = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows, area);
}

fn render_info_panel<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word and guessed letters
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(4),    // Leaderboard
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_leaderboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_word<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let content = if let Some(session) = &app.session {
        let word = if session.is_over() {
            // Show the full word once the round is finished
            session
                .secret()
                .letters()
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            format_pattern(session)
        };
        vec![
            Line::from(vec![
                Span::raw("Current word:    "),
                Span::styled(
                    word,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Guessed letters: {}", format_guessed(session))),
            Line::from(format!(
                "Remaining attempts: {}",
                session.remaining_attempts()
            )),
        ]
    } else {
        vec![Line::from("Press 'n' to start a new game")]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_attempts<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let incorrect = app.session.as_ref().map_or(0, |s| s.incorrect_count());
    let percent = (incorrect * 100 / MAX_ATTEMPTS).min(100) as u16;

    let gauge = Gauge::default()
        .block(Block::default().title(" Misses ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Red))
        .percent(percent)
        .label(format!("{incorrect}/{MAX_ATTEMPTS}"));

    f.render_widget(gauge, area);
}

fn render_leaderboard<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let items: Vec<ListItem> = app
        .ledger
        .top_scores()
        .iter()
        .enumerate()
        .map(|(i, record)| ListItem::new(format_score(i + 1, record)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Top 10 Scores ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Welcome => (" Press 'n' or Enter to start | 'q' to quit ", Color::Cyan),
        InputMode::Guess => (" Guess a letter | Enter to submit ", Color::Yellow),
        InputMode::NameEntry => (" Enter your name | Enter to save ", Color::Cyan),
        InputMode::GameOver => (" Press 'n' for new game or 'q' to quit ", Color::Green),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: WordSelector>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Esc/Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
