//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and statistics for the game interface.

use super::app::{App, MessageStyle};
use crate::core::{Letter, Verdict};
use crate::output::formatters::{KEYBOARD_ROWS, create_progress_bar, keyboard_row, share_grid};
use crate::session::{Outcome, Phase, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Messages and statistics
        ])
        .split(chunks[1]);

    render_game_panel(f, app.game.session(), main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn tile_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: Letter, verdict: Option<Verdict>) -> Span<'static> {
    Span::styled(format!(" {letter} "), tile_style(verdict))
}

fn empty_tile() -> Span<'static> {
    Span::styled(" · ", Style::default().fg(Color::DarkGray))
}

/// One line per board row: evaluated rows, the row being typed, then blanks
fn board_lines(session: &Session) -> Vec<Line<'static>> {
    let config = session.config();
    let mut lines = Vec::with_capacity(config.max_guesses);

    for row in session.rows() {
        let mut spans = Vec::new();
        for (letter, verdict) in row.tiles() {
            spans.push(tile(letter, Some(verdict)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if !session.is_over() {
        let typed = session.current_letters();
        let mut spans = Vec::new();
        for col in 0..config.word_length {
            spans.push(typed.get(col).map_or_else(empty_tile, |&l| tile(l, None)));
            spans.push(Span::raw(" "));
        }
        let style = if session.phase() == Phase::Locked {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        lines.push(Line::from(spans).style(style));
    }

    while lines.len() < config.max_guesses {
        let spans: Vec<Span> = (0..config.word_length)
            .flat_map(|_| [empty_tile(), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

fn keyboard_lines(session: &Session) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = keyboard_row(row)
                .map(|letter| tile(letter, session.keyboard().get(letter)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_game_panel(f: &mut Frame, session: &Session, area: Rect) {
    let board_height = u16::try_from(session.config().max_guesses).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height.saturating_add(2)), // Board
            Constraint::Length(5),                              // Keyboard
            Constraint::Min(0),                                 // Share grid
        ])
        .split(area);

    let board = Paragraph::new(board_lines(session))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, chunks[0]);

    let keyboard = Paragraph::new(keyboard_lines(session))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, chunks[1]);

    if let Phase::Over(outcome) = session.phase() {
        render_summary(f, session, outcome, chunks[2]);
    }
}

fn render_summary(f: &mut Frame, session: &Session, outcome: Outcome, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    if let Some(secret) = session.revealed_secret() {
        lines.push(Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                secret.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }
    let grid = share_grid(session.rows(), outcome, session.config().max_guesses);
    lines.extend(grid.lines().map(|l| Line::from(l.to_string())));

    let color = match outcome {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
    };
    let summary = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Share ")
            .borders(Borders::ALL)
            .style(Style::default().fg(color)),
    );
    f.render_widget(summary, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Win rate gauge
            Constraint::Percentage(50), // Guess distribution
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_distribution(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // win rate is within 0..=100
fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.game.stats();
    let rate = stats.win_rate();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(rate.clamp(0.0, 100.0) as u16)
        .label(format!(
            "{rate:.0}% of {} | streak {} (max {})",
            stats.games_played, stats.current_streak, stats.max_streak
        ));

    f.render_widget(gauge, area);
}

#[allow(clippy::cast_precision_loss)]
fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.game.stats();
    let max_count = stats.guess_distribution.iter().copied().max().unwrap_or(0);

    let lines: Vec<Line> = stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let bar = create_progress_bar(count as f64, max_count as f64, 16);
            Line::from(vec![
                Span::raw(format!("{}: ", i + 1)),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let distribution = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(distribution, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let session = app.game.session();
    let (mode_text, mode_color) = match session.phase() {
        Phase::Active => ("Playing", Color::White),
        Phase::Locked => ("Checking word...", Color::Yellow),
        Phase::Over(Outcome::Won) => ("Solved!", Color::Green),
        Phase::Over(Outcome::Lost) => ("Out of guesses", Color::Red),
    };
    let mode = Paragraph::new(format!("Mode: {mode_text}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(mode_color));
    f.render_widget(mode, chunks[0]);

    let row_text = format!(
        "Guess {}/{}",
        (session.row() + 1).min(session.config().max_guesses),
        session.config().max_guesses
    );
    let row = Paragraph::new(row_text).alignment(Alignment::Center);
    f.render_widget(row, chunks[1]);

    let help_text = if session.is_over() {
        "Enter/n: New Game | q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::{Event, GameConfig, Input, Validation};

    fn session_after(guesses: &[&str], secret: &str) -> Session {
        let mut session =
            Session::new(GameConfig::default(), Word::new(secret).unwrap()).unwrap();
        for guess in guesses {
            for ch in guess.chars() {
                session.handle(Input::from_char(ch).unwrap().into());
            }
            session.handle(Input::Submit.into());
            session.handle(Event::Validated {
                guess: Word::new(guess).unwrap(),
                outcome: Validation::Accepted,
            });
        }
        session
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_has_one_line_per_row() {
        let session = session_after(&["crane"], "apple");
        let lines = board_lines(&session);
        assert_eq!(lines.len(), 6);
        assert_eq!(line_text(&lines[0]).trim_end(), " C   R   A   N   E");
        assert!(line_text(&lines[1]).contains('·'));
    }

    #[test]
    fn evaluated_tiles_are_coloured() {
        let session = session_after(&["paper"], "apple");
        let lines = board_lines(&session);
        let p = &lines[0].spans[0];
        assert_eq!(p.style.bg, Some(Color::Yellow));
        let third = &lines[0].spans[4];
        assert_eq!(third.style.bg, Some(Color::Green));
    }

    #[test]
    fn finished_board_has_no_typing_row() {
        let session = session_after(&["apple"], "apple");
        let lines = board_lines(&session);
        assert_eq!(lines.len(), 6);
        assert!(line_text(&lines[1]).chars().all(|c| c == '·' || c == ' '));
    }

    #[test]
    fn keyboard_uses_marks() {
        let session = session_after(&["crane"], "apple");
        let lines = keyboard_lines(&session);
        assert_eq!(lines.len(), 3);
        // C is on the bottom row: Z X C
        assert_eq!(lines[2].spans[2].style.bg, Some(Color::DarkGray));
        // Q never guessed
        assert_eq!(lines[0].spans[0].style.bg, None);
    }
}
