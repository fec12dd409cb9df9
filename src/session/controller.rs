//! Async driver for a session
//!
//! The controller is the single owner of the [`Session`]. Player input is
//! dispatched directly; validation and new-word lookups run as tasks in a
//! [`JoinSet`] and their results are applied one at a time. Every task yields a
//! message even when the collaborator panics, so a locked row always unlocks.

use super::config::GameConfig;
use super::event::{Effect, Event, Signal, Validation};
use super::state::{Session, SessionError};
use crate::core::Word;
use crate::sources::{Acceptance, ProviderError, Services};
use crate::stats::Statistics;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, warn};

/// Error type for games that cannot start
#[derive(Debug, Error)]
pub enum StartError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Results from spawned tasks
#[derive(Debug)]
enum Message {
    Session(Event),
    /// A task finished without producing an event
    TaskFailed,
}

/// Owns one session at a time plus the services it talks to
pub struct GameController {
    session: Session,
    services: Services,
    stats: Statistics,
    tasks: JoinSet<Message>,
    new_game_pending: bool,
}

impl GameController {
    /// Fetch a secret word and start the first session
    ///
    /// # Errors
    /// Returns `StartError` if the configuration is invalid or no secret word
    /// of the configured length is available even from the fallback vocabulary.
    pub async fn start(config: GameConfig, services: Services) -> Result<Self, StartError> {
        let config = config.validate().map_err(SessionError::from)?;
        let secret = services.words.secret_word(config.word_length).await?;
        let session = Session::new(config, secret)?;

        Ok(Self {
            session,
            services,
            stats: Statistics::new(config.max_guesses),
            tasks: JoinSet::new(),
            new_game_pending: false,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// True while a validation or word lookup is outstanding
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Apply an event and carry out its effects
    ///
    /// Returns the signals for the presentation layer. Validation requests are
    /// spawned; their answers arrive later through [`Self::next_signals`].
    pub fn dispatch(&mut self, event: impl Into<Event>) -> Vec<Signal> {
        let mut signals = Vec::new();
        for effect in self.session.handle(event.into()) {
            match effect {
                Effect::Emit(signal) => {
                    self.record(&signal);
                    signals.push(signal);
                }
                Effect::Validate(guess) => self.spawn_validation(guess),
            }
        }
        signals
    }

    /// Start fetching a new secret word; the reset is applied when it arrives
    ///
    /// Returns false if the current session isn't over or a fetch is already
    /// running.
    pub fn request_new_game(&mut self) -> bool {
        if !self.session.is_over() || self.new_game_pending {
            return false;
        }
        self.new_game_pending = true;

        let words = Arc::clone(&self.services.words);
        let length = self.session.config().word_length;
        self.tasks.spawn(async move {
            let fetched = AssertUnwindSafe(words.secret_word(length))
                .catch_unwind()
                .await;
            match fetched {
                Ok(Ok(word)) => Message::Session(Event::Reset(word)),
                Ok(Err(err)) => {
                    error!(%err, "no secret word available for a new game");
                    Message::TaskFailed
                }
                Err(_) => {
                    error!("word provider panicked");
                    Message::TaskFailed
                }
            }
        });
        true
    }

    /// Wait for the next task result and apply it
    ///
    /// Returns no signals when nothing is outstanding.
    pub async fn next_signals(&mut self) -> Vec<Signal> {
        match self.tasks.join_next().await {
            Some(joined) => self.process(joined),
            None => Vec::new(),
        }
    }

    /// Apply every task result that is already finished
    pub fn drain(&mut self) -> Vec<Signal> {
        let mut signals = Vec::new();
        while let Some(joined) = self.tasks.try_join_next() {
            signals.extend(self.process(joined));
        }
        signals
    }

    /// Wait until no task is outstanding
    pub async fn settle(&mut self) -> Vec<Signal> {
        let mut signals = self.drain();
        while self.is_busy() {
            signals.extend(self.next_signals().await);
        }
        signals
    }

    fn process(&mut self, joined: Result<Message, JoinError>) -> Vec<Signal> {
        let message = joined.unwrap_or_else(|err| {
            error!(%err, "task did not finish");
            Message::TaskFailed
        });
        match message {
            Message::Session(event) => {
                if matches!(event, Event::Reset(_)) {
                    self.new_game_pending = false;
                }
                self.dispatch(event)
            }
            Message::TaskFailed => {
                self.new_game_pending = false;
                Vec::new()
            }
        }
    }

    fn spawn_validation(&mut self, guess: Word) {
        let validator = Arc::clone(&self.services.validator);
        self.tasks.spawn(async move {
            let checked = AssertUnwindSafe(validator.check(&guess))
                .catch_unwind()
                .await;
            let outcome = match checked {
                Ok(Ok(Acceptance::Accepted)) => Validation::Accepted,
                Ok(Ok(Acceptance::Rejected)) => Validation::Rejected,
                Ok(Err(err)) => {
                    warn!(%err, %guess, "word validation unavailable");
                    Validation::Unavailable
                }
                Err(_) => {
                    error!(%guess, "word validator panicked");
                    Validation::Unavailable
                }
            };
            debug!(%guess, ?outcome, "validation finished");
            Message::Session(Event::Validated { guess, outcome })
        });
    }

    fn record(&mut self, signal: &Signal) {
        match signal {
            Signal::GameWon(_) => self.stats.record_win(self.session.rows().len()),
            Signal::GameLost(_) => self.stats.record_loss(),
            _ => {}
        }
    }
}
