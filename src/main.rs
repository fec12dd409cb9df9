//! Wordle Game - CLI
//!
//! Play Wordle in a full-screen TUI or a line-based terminal, or score a guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{run_simple, score_guess},
    interactive::{App, run_tui},
    output::print_feedback,
    session::{GameConfig, GameController},
    sources::{DEFAULT_DICTIONARY_API, DEFAULT_WORD_API, ServiceConfig, Services},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, env = "WORDLE_LENGTH", default_value = "5")]
    length: usize,

    /// Number of guesses allowed
    #[arg(short = 'g', long, global = true, env = "WORDLE_MAX_GUESSES", default_value = "6")]
    max_guesses: usize,

    /// Use only the built-in word lists, never the network
    #[arg(long, global = true, env = "WORDLE_OFFLINE")]
    offline: bool,

    /// Seed for the offline word choice (default: today's date)
    #[arg(long, global = true, env = "WORDLE_SEED")]
    seed: Option<u64>,

    /// Random word API endpoint
    #[arg(long, global = true, env = "WORDLE_WORD_API", default_value = DEFAULT_WORD_API)]
    word_api: String,

    /// Dictionary API endpoint used to check guesses
    #[arg(long, global = true, env = "WORDLE_DICTIONARY_API", default_value = DEFAULT_DICTIONARY_API)]
    dictionary_api: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, env = "WORDLE_TIMEOUT_SECS", default_value = "5")]
    timeout_secs: u64,

    /// Extra word list file (one word per line), added to the offline lists
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere without it)
    #[arg(long, global = true, env = "WORDLE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a secret word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        GameConfig::new(self.length, self.max_guesses).context("Invalid game settings")
    }

    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            offline: self.offline,
            word_api: self.word_api.clone(),
            dictionary_api: self.dictionary_api.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            seed: self.seed,
            wordlist: self.wordlist.clone(),
        }
    }
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given. Otherwise they go to stderr, unless the
/// TUI owns the terminal, in which case nothing is installed.
fn init_logging(log_file: Option<&PathBuf>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if !tui => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_ref(), matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&cli).await,
        Commands::Simple => run_simple_command(&cli).await,
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
    }
}

async fn run_play_command(cli: &Cli) -> Result<()> {
    let config = cli.game_config()?;
    let services = Services::from_config(&cli.service_config())?;
    let game = GameController::start(config, services)
        .await
        .context("Could not start a game")?;
    run_tui(App::new(game)).await
}

async fn run_simple_command(cli: &Cli) -> Result<()> {
    let config = cli.game_config()?;
    let services = Services::from_config(&cli.service_config())?;
    run_simple(config, services).await
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_guess(guess, secret)?;
    print_feedback(&result.guess, &result.feedback);
    if result.feedback.is_solved() {
        println!("{}", "Solved!".green().bold());
    }
    Ok(())
}
