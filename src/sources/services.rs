//! Wiring of word provider and validator from configuration

use super::provider::{FallbackVocabulary, RemoteWordProvider, SecretWordSource, WordProvider};
use super::validator::{DictionaryApiValidator, WordListValidator, WordValidator};
use crate::core::Word;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{ALLOWED, ANSWERS};
use anyhow::{Context, Result};
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default random word endpoint
pub const DEFAULT_WORD_API: &str = "https://random-word-api.herokuapp.com/word";

/// Default dictionary endpoint
pub const DEFAULT_DICTIONARY_API: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// How to reach the word services
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Skip the network entirely and use the local lists
    pub offline: bool,
    pub word_api: String,
    pub dictionary_api: String,
    pub timeout: Duration,
    /// Seed for the fallback vocabulary; the day number when absent
    pub seed: Option<u64>,
    /// Extra words for both the fallback vocabulary and the local dictionary
    pub wordlist: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            offline: false,
            word_api: DEFAULT_WORD_API.to_string(),
            dictionary_api: DEFAULT_DICTIONARY_API.to_string(),
            timeout: Duration::from_secs(5),
            seed: None,
            wordlist: None,
        }
    }
}

/// The two collaborators a game needs
#[derive(Clone)]
pub struct Services {
    pub words: Arc<SecretWordSource>,
    pub validator: Arc<dyn WordValidator>,
}

impl Services {
    /// Build services from configuration
    ///
    /// # Errors
    /// Returns an error if the custom word list cannot be read or the HTTP
    /// client cannot be created.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let custom = match &config.wordlist {
            Some(path) => load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?,
            None => Vec::new(),
        };

        let mut answers = words_from_slice(ANSWERS);
        answers.extend(custom.iter().cloned());
        let fallback = match config.seed {
            Some(seed) => FallbackVocabulary::new(answers, seed),
            None => FallbackVocabulary::daily(answers),
        };

        if config.offline {
            info!(words = fallback.len(), "offline mode, using local word lists");
            let dictionary = local_dictionary(custom);
            return Ok(Self {
                words: Arc::new(SecretWordSource::offline(fallback)),
                validator: Arc::new(dictionary),
            });
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let remote: Arc<dyn WordProvider> =
            Arc::new(RemoteWordProvider::new(http.clone(), config.word_api.clone()));
        Ok(Self {
            words: Arc::new(SecretWordSource::new(Some(remote), fallback)),
            validator: Arc::new(DictionaryApiValidator::new(
                http,
                config.dictionary_api.clone(),
            )),
        })
    }

    /// Services that never touch the network, built from explicit lists
    pub fn local(answers: Vec<Word>, allowed: Vec<Word>, seed: u64) -> Self {
        Self {
            words: Arc::new(SecretWordSource::offline(FallbackVocabulary::new(
                answers, seed,
            ))),
            validator: Arc::new(WordListValidator::new(allowed)),
        }
    }
}

/// Embedded dictionary plus answers and any custom words
fn local_dictionary(custom: Vec<Word>) -> WordListValidator {
    WordListValidator::new(
        words_from_slice(ALLOWED)
            .into_iter()
            .chain(words_from_slice(ANSWERS))
            .chain(custom),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::validator::Acceptance;

    #[tokio::test]
    async fn offline_services_use_embedded_lists() {
        let config = ServiceConfig {
            offline: true,
            seed: Some(3),
            ..ServiceConfig::default()
        };
        let services = Services::from_config(&config).unwrap();

        let word = services.words.secret_word(5).await.unwrap();
        assert_eq!(word.len(), 5);
        assert_eq!(
            services.validator.check(&word).await.unwrap(),
            Acceptance::Accepted
        );

        let nonsense = Word::new("qxzvj").unwrap();
        assert_eq!(
            services.validator.check(&nonsense).await.unwrap(),
            Acceptance::Rejected
        );
    }

    #[test]
    fn missing_custom_wordlist_is_an_error() {
        let config = ServiceConfig {
            offline: true,
            wordlist: Some(PathBuf::from("/definitely/not/here.txt")),
            ..ServiceConfig::default()
        };
        assert!(Services::from_config(&config).is_err());
    }

    #[test]
    fn online_services_build_without_network() {
        assert!(Services::from_config(&ServiceConfig::default()).is_ok());
    }
}
