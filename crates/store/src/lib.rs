//! Persistent store for collected cards, settings and the challenge high score.
//!
//! The game only needs a tiny key/value surface, captured by the [`Store`]
//! trait. Two implementations are provided:
//!
//! - [`MemoryStore`]: process-local, used by tests and `COLOR_RECALL_MEMORY=1`
//! - [`JsonFileStore`]: one JSON file per key inside a data directory
//!
//! # Keys
//!
//! | Key | Type | Default |
//! |-----|------|---------|
//! | `collected_cards` | array of card ids | `[]` |
//! | `settings` | `{sfx, bgm, instantFeedback}` | all `true` |
//! | `challenge_high_score` | integer | `0` |
//!
//! Reads never fail: missing or unreadable data falls back to the default
//! and is logged. Writes report errors so the caller can decide what to do.
//!
//! # Environment Variables
//!
//! - `COLOR_RECALL_DATA_DIR`: data directory (default: `.color-recall`)
//! - `COLOR_RECALL_MEMORY`: set to "1" or "true" to keep everything in memory

pub mod json_file;
pub mod memory;

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

pub use color_recall_types as types;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::types::SettingsRecord;

pub const COLLECTED_CARDS_KEY: &str = "collected_cards";
pub const SETTINGS_KEY: &str = "settings";
pub const CHALLENGE_HIGH_SCORE_KEY: &str = "challenge_high_score";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {key}: {source}")]
    Json {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Key/value persistence used by the game session.
pub trait Store {
    fn collected_cards(&self) -> BTreeSet<String>;

    /// Record a card. Returns `true` when it was not collected before.
    fn add_collected_card(&mut self, card_id: &str) -> Result<bool, StoreError>;

    fn settings(&self) -> SettingsRecord;

    fn save_settings(&mut self, settings: SettingsRecord) -> Result<(), StoreError>;

    fn challenge_high_score(&self) -> u32;

    /// Raise the high score to `level`. Returns `true` only if it was raised.
    fn set_challenge_high_score(&mut self, level: u32) -> Result<bool, StoreError>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn collected_cards(&self) -> BTreeSet<String> {
        (**self).collected_cards()
    }

    fn add_collected_card(&mut self, card_id: &str) -> Result<bool, StoreError> {
        (**self).add_collected_card(card_id)
    }

    fn settings(&self) -> SettingsRecord {
        (**self).settings()
    }

    fn save_settings(&mut self, settings: SettingsRecord) -> Result<(), StoreError> {
        (**self).save_settings(settings)
    }

    fn challenge_high_score(&self) -> u32 {
        (**self).challenge_high_score()
    }

    fn set_challenge_high_score(&mut self, level: u32) -> Result<bool, StoreError> {
        (**self).set_challenge_high_score(level)
    }
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub in_memory: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".color-recall"),
            in_memory: false,
        }
    }
}

impl StoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let data_dir = env::var("COLOR_RECALL_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let in_memory = env::var("COLOR_RECALL_MEMORY")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            data_dir,
            in_memory,
        }
    }

    /// Open the store this config describes.
    pub fn open(&self) -> Box<dyn Store> {
        if self.in_memory {
            tracing::info!("using in-memory store");
            Box::new(MemoryStore::new())
        } else {
            tracing::info!(dir = %self.data_dir.display(), "using json file store");
            Box::new(JsonFileStore::new(&self.data_dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".color-recall"));
        assert!(!config.in_memory);
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn Store> = StoreConfig {
            data_dir: PathBuf::new(),
            in_memory: true,
        }
        .open();
        assert!(store.add_collected_card("owl").unwrap());
        assert!(store.collected_cards().contains("owl"));
        assert_eq!(store.challenge_high_score(), 0);
    }
}
