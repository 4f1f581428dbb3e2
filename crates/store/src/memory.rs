//! In-memory store.

use std::collections::BTreeSet;

use crate::types::SettingsRecord;
use crate::{Store, StoreError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    collected: BTreeSet<String>,
    settings: SettingsRecord,
    high_score: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn collected_cards(&self) -> BTreeSet<String> {
        self.collected.clone()
    }

    fn add_collected_card(&mut self, card_id: &str) -> Result<bool, StoreError> {
        Ok(self.collected.insert(card_id.to_string()))
    }

    fn settings(&self) -> SettingsRecord {
        self.settings
    }

    fn save_settings(&mut self, settings: SettingsRecord) -> Result<(), StoreError> {
        self.settings = settings;
        Ok(())
    }

    fn challenge_high_score(&self) -> u32 {
        self.high_score
    }

    fn set_challenge_high_score(&mut self, level: u32) -> Result<bool, StoreError> {
        if level > self.high_score {
            self.high_score = level;
            return Ok(true);
        }
        Ok(false)
    }
}
