//! The session state machine
//!
//! A [`Session`] owns the board for one play-through. It never performs I/O:
//! [`Session::handle`] takes an [`Event`], mutates the state, and returns the
//! [`Effect`]s the caller must carry out (signals to show, words to validate).

use super::config::{ConfigError, GameConfig};
use super::event::{Effect, Event, Input, Signal, TurnError, Validation};
use crate::core::{GuessRow, KeyboardMarks, Letter, Word, WordError};
use thiserror::Error;
use tracing::{debug, info};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting key presses
    Active,
    /// A submitted guess is waiting for validation
    Locked,
    /// Won or lost; only a reset is accepted
    Over(Outcome),
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Error type for sessions that cannot start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Secret word does not fit the board: {0}")]
    Secret(#[from] WordError),
}

/// State of one game from word selection to win or loss
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    secret: Word,
    row: usize,
    letters: Vec<Letter>,
    phase: Phase,
    rows: Vec<GuessRow>,
    keyboard: KeyboardMarks,
}

impl Session {
    /// Start a session with the given secret word
    ///
    /// # Errors
    /// Returns `SessionError` if the configuration is invalid or the secret
    /// word's length differs from the configured word length.
    pub fn new(config: GameConfig, secret: Word) -> Result<Self, SessionError> {
        let config = config.validate()?;
        if secret.len() != config.word_length {
            return Err(WordError::InvalidLength {
                expected: config.word_length,
                actual: secret.len(),
            }
            .into());
        }

        info!(
            word_length = config.word_length,
            max_guesses = config.max_guesses,
            "session started"
        );

        Ok(Self {
            config,
            secret,
            row: 0,
            letters: Vec::with_capacity(config.word_length),
            phase: Phase::Active,
            rows: Vec::with_capacity(config.max_guesses),
            keyboard: KeyboardMarks::new(),
        })
    }

    /// Apply one event and return the effects it produced
    ///
    /// Events that don't apply in the current phase are dropped and produce
    /// no effects.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match (self.phase, event) {
            (Phase::Active, Event::Input(input)) => self.handle_input(input),
            (Phase::Locked, Event::Validated { guess, outcome }) => {
                self.handle_validation(guess, outcome)
            }
            (Phase::Over(_), Event::Reset(secret)) => self.reset(secret),
            (phase, event) => {
                debug!(?phase, ?event, "input ignored");
                Vec::new()
            }
        }
    }

    fn handle_input(&mut self, input: Input) -> Vec<Effect> {
        match input {
            Input::Letter(letter) => {
                if self.letters.len() >= self.config.word_length {
                    debug!(%letter, "row full, letter ignored");
                    return Vec::new();
                }
                let col = self.letters.len();
                self.letters.push(letter);
                vec![Effect::Emit(Signal::LetterEntered {
                    row: self.row,
                    col,
                    letter,
                })]
            }
            Input::Delete => match self.letters.pop() {
                Some(_) => vec![Effect::Emit(Signal::LetterCleared {
                    row: self.row,
                    col: self.letters.len(),
                })],
                None => Vec::new(),
            },
            Input::Submit => {
                if self.letters.len() < self.config.word_length {
                    return vec![Effect::Emit(Signal::RowRejected(
                        TurnError::IncompleteGuess,
                    ))];
                }
                let guess = Word::from_letters(self.letters.clone());
                debug!(%guess, row = self.row, "guess submitted");
                self.phase = Phase::Locked;
                vec![Effect::Validate(guess)]
            }
        }
    }

    fn handle_validation(&mut self, guess: Word, outcome: Validation) -> Vec<Effect> {
        if guess.letters() != self.letters.as_slice() {
            debug!(%guess, "stale validation result ignored");
            return Vec::new();
        }

        match outcome {
            Validation::Accepted => self.accept(guess),
            Validation::Rejected => self.reject(TurnError::WordNotAccepted),
            Validation::Unavailable => self.reject(TurnError::ValidationUnavailable),
        }
    }

    fn reject(&mut self, reason: TurnError) -> Vec<Effect> {
        debug!(code = reason.code(), "guess rejected");
        self.phase = Phase::Active;
        vec![Effect::Emit(Signal::RowRejected(reason))]
    }

    fn accept(&mut self, guess: Word) -> Vec<Effect> {
        let row = GuessRow::evaluate(guess, &self.secret);
        let solved = row.feedback().is_solved();

        let mut effects = vec![Effect::Emit(Signal::RowEvaluated {
            row: self.row,
            verdicts: row.feedback().verdicts().to_vec(),
        })];
        effects.extend(
            self.keyboard
                .apply_row(&row)
                .into_iter()
                .map(|(letter, verdict)| {
                    Effect::Emit(Signal::KeyboardMarkUpdated { letter, verdict })
                }),
        );
        self.rows.push(row);
        self.letters.clear();

        if solved {
            info!(guesses = self.rows.len(), "game won");
            self.phase = Phase::Over(Outcome::Won);
            effects.push(Effect::Emit(Signal::GameWon(self.secret.clone())));
        } else if self.row == self.config.last_row() {
            info!(secret = %self.secret, "game lost");
            self.phase = Phase::Over(Outcome::Lost);
            effects.push(Effect::Emit(Signal::GameLost(self.secret.clone())));
        } else {
            self.row += 1;
            self.phase = Phase::Active;
        }

        effects
    }

    fn reset(&mut self, secret: Word) -> Vec<Effect> {
        match Self::new(self.config, secret) {
            Ok(fresh) => {
                *self = fresh;
                vec![Effect::Emit(Signal::SessionReset)]
            }
            Err(err) => {
                debug!(%err, "reset ignored");
                Vec::new()
            }
        }
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// Index of the row currently being typed (or the final row once over)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column where the next letter goes
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.letters.len()
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current_letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Evaluated rows, oldest first
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardMarks {
        &self.keyboard
    }

    /// The secret word, revealed only once the session is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.is_over().then_some(&self.secret)
    }
}
