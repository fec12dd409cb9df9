//! Display functions for the line-based game

use super::formatters::{KEYBOARD_ROWS, colored_tile, create_progress_bar, keyboard_row};
use crate::core::{Feedback, Word};
use crate::session::Session;
use crate::stats::Statistics;
use colored::Colorize;

/// Print the board: evaluated rows, the row being typed, then empty rows
pub fn print_board(session: &Session) {
    let config = session.config();
    println!();
    for row in session.rows() {
        let tiles: Vec<String> = row
            .tiles()
            .map(|(letter, verdict)| colored_tile(letter, Some(verdict)).to_string())
            .collect();
        println!("  {}", tiles.join(" "));
    }

    let mut remaining = config.max_guesses.saturating_sub(session.rows().len());
    if !session.is_over() && remaining > 0 {
        let typed: Vec<String> = session
            .current_letters()
            .iter()
            .map(|&letter| colored_tile(letter, None).to_string())
            .chain(
                std::iter::repeat_n(" _ ".bright_black().to_string(), config.word_length)
                    .skip(session.cursor()),
            )
            .collect();
        println!("  {}", typed.join(" "));
        remaining -= 1;
    }

    for _ in 0..remaining {
        let blanks = vec![" · ".bright_black().to_string(); config.word_length];
        println!("  {}", blanks.join(" "));
    }
    println!();
}

/// Print the on-screen keyboard coloured by the session's marks
pub fn print_keyboard(session: &Session) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = keyboard_row(row)
            .map(|letter| colored_tile(letter, session.keyboard().get(letter)).to_string())
            .collect();
        println!("  {}{}", "  ".repeat(indent), keys.join(""));
    }
    println!();
}

/// Print one evaluation result
pub fn print_feedback(guess: &Word, feedback: &Feedback) {
    let tiles: Vec<String> = guess
        .letters()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| colored_tile(letter, Some(verdict)).to_string())
        .collect();
    println!("\n  {}   {}\n", tiles.join(" "), feedback.to_emoji());
}

/// Print running statistics
#[allow(clippy::cast_precision_loss)] // game counts are small
pub fn print_statistics(stats: &Statistics) {
    println!("{}", "─".repeat(40).cyan());
    println!(" {}", "STATISTICS".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());
    println!(
        "  Played: {}   Win %: {:.0}   Streak: {}   Max: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max as f64, 20);
        println!("  {}: {} {count}", i + 1, bar.green());
    }
    println!();
}
