//! TUI rendering with ratatui
//!
//! Game board, keyboard hints, messages and session status.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Mark, WORD_LENGTH};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::round::RoundState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

const fn mark_style(mark: Option<Mark>) -> Style {
    match mark {
        Some(Mark::Exact) => Style::new().fg(Color::Black).bg(Color::Green),
        Some(Mark::Present) => Style::new().fg(Color::Black).bg(Color::Yellow),
        Some(Mark::Absent) => Style::new().fg(Color::White).bg(Color::DarkGray),
        None => Style::new().fg(Color::White),
    }
}

fn tile(letter: char, mark: Option<Mark>) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        mark_style(mark).add_modifier(Modifier::BOLD),
    )
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE - Guess the hidden word")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.round.history();
    let mut lines = Vec::new();

    // Played rows plus the typed one, padded with empty rows while they fit
    let fitting = usize::from(area.height.saturating_sub(2)) / 2;
    let rows = board_rows(app.round.max_attempts(), history.len(), fitting);

    for row in 0..rows {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        if let Some((guess, verdict)) = history.get(row) {
            for (&letter, &mark) in guess.letters().iter().zip(verdict.marks()) {
                spans.push(tile(char::from(letter), Some(mark)));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            // Row being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for i in 0..WORD_LENGTH {
                let letter = typed.get(i).copied().unwrap_or('_');
                spans.push(Span::styled(
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let (RoundState::Lost, Some(secret)) = (app.round.state(), app.round.revealed_secret()) {
        lines.push(Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                secret.text().to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

const fn board_rows(max_attempts: usize, played: usize, fitting: usize) -> usize {
    let wanted = if played + 1 > fitting { played + 1 } else { fitting };
    if wanted < max_attempts { wanted } else { max_attempts }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);
    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .bytes()
            .map(|letter| tile(char::from(letter), app.board.mark(letter)))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type your guess | Enter: submit | Backspace: delete | Esc: quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Round over | n: new round | q: quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempt_text = match app.round.state() {
        RoundState::AwaitingGuess { attempt } => {
            format!("Attempt {attempt}/{}", app.round.max_attempts())
        }
        RoundState::Won { attempts } => format!("Won in {attempts}"),
        RoundState::Lost => "Lost".to_string(),
    };
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.best_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let pool_text = format!("Words left: {}", app.pool.len());
    let pool = Paragraph::new(pool_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(pool, chunks[3]);
}
