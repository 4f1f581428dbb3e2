//! JSON file store: one `<key>.json` file per key in a data directory.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::SettingsRecord;
use crate::{
    Store, StoreError, CHALLENGE_HIGH_SCORE_KEY, COLLECTED_CARDS_KEY, SETTINGS_KEY,
};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read a key, falling back to `T::default()` when missing or corrupt.
    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &'static str) -> T {
        let path = self.path(key);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read store key, using default");
                return T::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "corrupt store key, using default");
                T::default()
            }
        }
    }

    fn write<T: Serialize>(&self, key: &'static str, value: &T) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(value).map_err(|source| StoreError::Json { key, source })?;
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path(key);
        fs::write(&path, json).map_err(|source| StoreError::Io { path, source })
    }

    /// Collected ids in the order they were earned.
    fn collected_list(&self) -> Vec<String> {
        self.read_or_default(COLLECTED_CARDS_KEY)
    }
}

impl Store for JsonFileStore {
    fn collected_cards(&self) -> BTreeSet<String> {
        self.collected_list().into_iter().collect()
    }

    fn add_collected_card(&mut self, card_id: &str) -> Result<bool, StoreError> {
        let mut cards = self.collected_list();
        if cards.iter().any(|c| c == card_id) {
            return Ok(false);
        }
        cards.push(card_id.to_string());
        self.write(COLLECTED_CARDS_KEY, &cards)?;
        Ok(true)
    }

    fn settings(&self) -> SettingsRecord {
        self.read_or_default(SETTINGS_KEY)
    }

    fn save_settings(&mut self, settings: SettingsRecord) -> Result<(), StoreError> {
        self.write(SETTINGS_KEY, &settings)
    }

    fn challenge_high_score(&self) -> u32 {
        self.read_or_default(CHALLENGE_HIGH_SCORE_KEY)
    }

    fn set_challenge_high_score(&mut self, level: u32) -> Result<bool, StoreError> {
        if level <= self.challenge_high_score() {
            return Ok(false);
        }
        self.write(CHALLENGE_HIGH_SCORE_KEY, &level)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_give_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));
        assert!(store.collected_cards().is_empty());
        assert_eq!(store.settings(), SettingsRecord::default());
        assert_eq!(store.challenge_high_score(), 0);
    }

    #[test]
    fn test_values_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());

        assert!(store.add_collected_card("owl").unwrap());
        assert!(!store.add_collected_card("owl").unwrap());
        let settings = SettingsRecord {
            sfx: false,
            ..SettingsRecord::default()
        };
        store.save_settings(settings).unwrap();
        assert!(store.set_challenge_high_score(7).unwrap());

        let reopened = JsonFileStore::new(dir.path());
        assert_eq!(reopened.collected_cards().into_iter().collect::<Vec<_>>(), ["owl"]);
        assert_eq!(reopened.settings(), settings);
        assert_eq!(reopened.challenge_high_score(), 7);
    }

    #[test]
    fn test_corrupt_data_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        fs::write(dir.path().join("challenge_high_score.json"), "\"high\"").unwrap();
        fs::write(dir.path().join("collected_cards.json"), "42").unwrap();

        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.settings(), SettingsRecord::default());
        assert_eq!(store.challenge_high_score(), 0);
        assert!(store.collected_cards().is_empty());
    }

    #[test]
    fn test_collected_file_keeps_earn_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());
        store.add_collected_card("turtle").unwrap();
        store.add_collected_card("bee").unwrap();

        let text = fs::read_to_string(dir.path().join("collected_cards.json")).unwrap();
        let ids: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(ids, ["turtle", "bee"]);
    }

    #[test]
    fn test_high_score_not_lowered() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());
        store.set_challenge_high_score(10).unwrap();
        assert!(!store.set_challenge_high_score(4).unwrap());
        assert_eq!(store.challenge_high_score(), 10);
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let mut store = JsonFileStore::new(&blocker);
        let err = store.save_settings(SettingsRecord::default()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
