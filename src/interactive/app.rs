//! TUI application state and logic

use crate::session::{GameController, Input, Signal};
use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const NEW_GAME_HINT: &str = "Press Enter for a new game or 'q' to quit.";

/// Application state
pub struct App {
    pub game: GameController,
    pub messages: Vec<Message>,
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

impl App {
    #[must_use]
    pub fn new(game: GameController) -> Self {
        let config = game.session().config();
        Self {
            game,
            messages: vec![
                Message {
                    text: format!(
                        "Guess the {}-letter word in {} tries.",
                        config.word_length, config.max_guesses
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Backspace to delete.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.game.session().is_over() => self.handle_game_over_key(key.code),
            KeyCode::Char(c) => {
                if let Some(input) = Input::from_char(c) {
                    self.dispatch(input);
                }
            }
            KeyCode::Backspace => self.dispatch(Input::Delete),
            KeyCode::Enter => self.dispatch(Input::Submit),
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char('n') => {
                if self.game.request_new_game() {
                    self.add_message("Fetching a new word...", MessageStyle::Info);
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, input: Input) {
        let signals = self.game.dispatch(input);
        self.apply(&signals);
    }

    /// Turn signals into toast messages; the board itself is drawn from state
    pub fn apply(&mut self, signals: &[Signal]) {
        for signal in signals {
            match signal {
                Signal::RowRejected(reason) => {
                    self.add_message(&reason.to_string(), MessageStyle::Error);
                }
                Signal::GameWon(_) => {
                    let celebration = match self.game.session().rows().len() {
                        1 => "🎯 Genius! First try! 🌟",
                        2 => "🔥 Magnificent! 🔥",
                        3 => "✨ Impressive! ✨",
                        4 => "👏 Splendid! 👏",
                        5 => "🎉 Great! 🎉",
                        _ => "😅 Phew! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message(NEW_GAME_HINT, MessageStyle::Info);
                }
                Signal::GameLost(secret) => {
                    self.add_message(&format!("The word was {secret}"), MessageStyle::Error);
                    self.add_message(NEW_GAME_HINT, MessageStyle::Info);
                }
                Signal::SessionReset => {
                    self.messages.clear();
                    self.add_message("New game started!", MessageStyle::Info);
                }
                _ => {}
            }
        }
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                // Only process key press events (fixes Windows double-input bug)
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            signals = app.game.next_signals(), if app.game.is_busy() => {
                app.apply(&signals);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GameConfig, Phase};
    use crate::sources::Services;
    use crate::wordlists::loader::words_from_slice;

    async fn new_app() -> App {
        let services = Services::local(
            words_from_slice(&["apple"]),
            words_from_slice(&["apple", "crane"]),
            1,
        );
        let game = GameController::start(GameConfig::default(), services)
            .await
            .unwrap();
        App::new(game)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[tokio::test]
    async fn short_submit_shows_toast() {
        let mut app = new_app().await;
        type_text(&mut app, "app");
        press(&mut app, KeyCode::Enter);
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Not enough letters");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[tokio::test]
    async fn q_is_a_letter_while_playing() {
        let mut app = new_app().await;
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.game.session().cursor(), 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.game.session().cursor(), 0);
    }

    #[tokio::test]
    async fn winning_then_new_game() {
        let mut app = new_app().await;
        type_text(&mut app, "apple");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.session().phase(), Phase::Locked);

        let signals = app.game.settle().await;
        app.apply(&signals);
        assert!(app.game.session().is_over());
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );

        press(&mut app, KeyCode::Enter);
        let signals = app.game.settle().await;
        app.apply(&signals);
        assert_eq!(app.game.session().phase(), Phase::Active);
        assert_eq!(app.messages.last().unwrap().text, "New game started!");
    }

    #[tokio::test]
    async fn escape_and_ctrl_c_quit() {
        let mut app = new_app().await;
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app().await;
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn messages_are_capped() {
        let mut app = new_app().await;
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
