//! Game session: configuration, state machine and async controller
//!
//! [`Session`] is the pure `(state, event) -> effects` core; [`GameController`]
//! runs it against the word services.

mod config;
mod controller;
mod event;
mod state;

pub use config::{ConfigError, GameConfig, MAX_ROWS, MAX_WORD_LENGTH};
pub use controller::{GameController, StartError};
pub use event::{Effect, Event, Input, Signal, TurnError, Validation};
pub use state::{Outcome, Phase, Session, SessionError};
