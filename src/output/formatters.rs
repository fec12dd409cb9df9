//! Formatting utilities for terminal output

use crate::core::{GuessRow, Letter, Verdict};
use crate::session::Outcome;
use colored::{ColoredString, Colorize};

/// On-screen keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Letters of one keyboard row
pub fn keyboard_row(row: &str) -> impl Iterator<Item = Letter> + '_ {
    row.chars().filter_map(Letter::from_char)
}

/// Render a letter as a coloured tile; unmarked tiles are plain
#[must_use]
pub fn colored_tile(letter: Letter, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Build the shareable emoji summary of a finished game
///
/// # Examples
/// ```
/// use wordle_game::core::{GuessRow, Word};
/// use wordle_game::output::formatters::share_grid;
/// use wordle_game::session::Outcome;
///
/// let secret = Word::new("apple").unwrap();
/// let rows = vec![GuessRow::evaluate(Word::new("apple").unwrap(), &secret)];
/// assert_eq!(share_grid(&rows, Outcome::Won, 6), "Wordle 1/6\n\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_grid(rows: &[GuessRow], outcome: Outcome, max_guesses: usize) -> String {
    let score = match outcome {
        Outcome::Won => rows.len().to_string(),
        Outcome::Lost => "X".to_string(),
    };
    let grid: Vec<String> = rows.iter().map(|row| row.feedback().to_emoji()).collect();
    format!("Wordle {score}/{max_guesses}\n\n{}", grid.join("\n"))
}

/// Create a progress bar string
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)] // clamped to [0, width]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
