//! Word sources: where secret words come from and how guesses are validated
//!
//! Both collaborators are async traits so the remote (HTTP) and local
//! (embedded list) implementations are interchangeable.

pub mod provider;
pub mod services;
pub mod validator;

pub use provider::{
    FallbackVocabulary, ProviderError, RemoteWordProvider, SecretWordSource, WordProvider,
};
pub use services::{DEFAULT_DICTIONARY_API, DEFAULT_WORD_API, ServiceConfig, Services};
pub use validator::{
    Acceptance, DictionaryApiValidator, ValidatorError, WordListValidator, WordValidator,
};
