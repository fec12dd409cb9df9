//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line typed is one guess.

use crate::output::formatters::share_grid;
use crate::output::{print_board, print_keyboard, print_statistics};
use crate::session::{GameConfig, GameController, Input, Phase, Signal};
use crate::sources::Services;
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::cmp::Ordering;
use std::io::{self, Write};
use std::time::Duration;
use thiserror::Error;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if no secret word can be found or there's an I/O error
/// reading user input.
pub async fn run_simple(config: GameConfig, services: Services) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Simple Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries.",
        config.word_length, config.max_guesses
    );
    println!("  {} right letter, right spot", " G ".black().on_green());
    println!("  {} right letter, wrong spot", " Y ".black().on_yellow());
    println!("  {} not in the word", " - ".white().on_bright_black());
    println!("\nCommands: ':quit' to exit, ':stats' for statistics, ':new' after a game\n");

    let mut game = GameController::start(config, services)
        .await
        .context("Failed to start game")?;

    loop {
        print_board(game.session());
        if !game.session().is_over() {
            print_keyboard(game.session());
        }

        let prompt = if game.session().is_over() {
            "Play again? (new/quit)"
        } else {
            "Guess"
        };
        let Some(input) = get_user_input(prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_command(&input, game.session().is_over()) {
            Some(Command::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Some(Command::Stats) => print_statistics(game.stats()),
            Some(Command::NewGame) if game.session().is_over() => {
                if game.request_new_game() {
                    let signals = game.settle().await;
                    report(&game, &signals);
                }
            }
            Some(Command::NewGame) => println!("Finish this game first."),
            None if game.session().is_over() => println!("Type 'new' or 'quit'."),
            None => match submit_line(&mut game, &input).await {
                Ok(signals) => report(&game, &signals),
                Err(err) => println!("{}", format!("❌ {err}").red().bold()),
            },
        }
    }
}

/// Commands recognised besides guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Stats,
    NewGame,
}

/// Parse a command
///
/// While a game runs, commands need a `:` prefix so that every word stays
/// guessable. Once it is over, the bare words work too.
fn parse_command(input: &str, game_over: bool) -> Option<Command> {
    let lowered = input.to_lowercase();
    let name = match lowered.strip_prefix(':') {
        Some(rest) => rest,
        None if game_over => lowered.as_str(),
        None => return None,
    };
    match name {
        "q" | "quit" | "exit" => Some(Command::Quit),
        "stats" => Some(Command::Stats),
        "n" | "new" | "y" | "yes" => Some(Command::NewGame),
        _ => None,
    }
}

/// Why a typed line was not put on the board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum LineError {
    #[error("Not enough letters")]
    TooShort,
    #[error("Too many letters")]
    TooLong,
    #[error("Letters only, got {0:?}")]
    InvalidCharacter(char),
}

/// Turn a typed line into exactly `length` letter inputs
fn parse_line(line: &str, length: usize) -> Result<Vec<Input>, LineError> {
    let inputs = line
        .chars()
        .map(|ch| Input::from_char(ch).ok_or(LineError::InvalidCharacter(ch)))
        .collect::<Result<Vec<_>, _>>()?;
    match inputs.len().cmp(&length) {
        Ordering::Less => Err(LineError::TooShort),
        Ordering::Greater => Err(LineError::TooLong),
        Ordering::Equal => Ok(inputs),
    }
}

/// Replace the current row with `line` and submit it
///
/// The board is left untouched when the line is not a full guess.
async fn submit_line(game: &mut GameController, line: &str) -> Result<Vec<Signal>, LineError> {
    let inputs = parse_line(line, game.session().config().word_length)?;
    for _ in 0..game.session().cursor() {
        game.dispatch(Input::Delete);
    }
    for input in inputs {
        game.dispatch(input);
    }

    let mut signals = game.dispatch(Input::Submit);
    if game.is_busy() {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Checking word...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        signals.extend(game.settle().await);
        spinner.finish_and_clear();
    }
    Ok(signals)
}

/// Print the player-facing messages for a batch of signals
fn report(game: &GameController, signals: &[Signal]) {
    let session = game.session();
    for signal in signals {
        match signal {
            Signal::RowRejected(reason) => {
                println!("{}", format!("❌ {reason}").red().bold());
            }
            Signal::GameWon(secret) => {
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!(
                    "{}",
                    format!("    🎉 Solved! {secret} in {} 🎉", session.rows().len())
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(60).bright_cyan());
            }
            Signal::GameLost(secret) => {
                println!(
                    "\n{} {}",
                    "The word was".bright_white(),
                    secret.text().bright_yellow().bold()
                );
            }
            Signal::SessionReset => println!("\n🔄 New game started!"),
            _ => {}
        }
    }

    if let Phase::Over(outcome) = session.phase()
        && signals
            .iter()
            .any(|s| matches!(s, Signal::GameWon(_) | Signal::GameLost(_)))
    {
        println!("\n{}\n", share_grid(session.rows(), outcome, session.config().max_guesses));
        print_statistics(game.stats());
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
