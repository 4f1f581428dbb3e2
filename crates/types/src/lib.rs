//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no behaviour beyond lookups, making them
//! usable in any context (rules, persistence, terminal rendering).
//!
//! # Grid
//!
//! A round is played on a square grid of `grid_size × grid_size` cells.
//! Cells are addressed by a row-major [`CellIndex`] in `[0, grid_size²)`.
//!
//! # Timing
//!
//! Both round timers (memory countdown and elapsed play time) run in whole
//! seconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_INTERVAL_MS` | 1000 | Interval between timer ticks |
//! | `FIRST_LEVEL` | 1 | Level a fresh game starts at |
//!
//! # Difficulties
//!
//! | Difficulty | Grid | Colors | Memory time |
//! |------------|------|--------|-------------|
//! | easy | 2×2 | 3 | 5s |
//! | medium | 3×3 | 4 | 5s |
//! | hard | 4×4 | 5 | 4s |
//!
//! Challenge mode ramps through the tiers in [`catalog::CHALLENGE_TIERS`].
//!
//! # Examples
//!
//! ```
//! use color_recall_types::{Difficulty, GameMode, Rarity};
//!
//! let difficulty = Difficulty::from_str("Medium").unwrap();
//! assert_eq!(difficulty.config().grid_size, 3);
//!
//! assert_eq!(GameMode::from_str("challenge"), Some(GameMode::Challenge));
//! assert!(Rarity::Mythic.rank() > Rarity::Legendary.rank());
//! ```

pub mod catalog;

use serde::{Deserialize, Serialize};

pub use catalog::{
    challenge_tier, find_card, CARD_CATALOG, CHALLENGE_TIERS, PALETTE,
};

/// Interval between round timer ticks in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Level every new game starts at.
pub const FIRST_LEVEL: u32 = 1;

/// Row-major index of a grid cell.
pub type CellIndex = usize;

/// A block color from the fixed palette.
///
/// Identity is the `id`; two colors with the same id compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    pub id: &'static str,
    pub name: &'static str,
    pub display_class: &'static str,
    pub hex: &'static str,
}

impl Color {
    /// Parse the `#rrggbb` hex into components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.hex.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(0)
        };
        (channel(0), channel(2), channel(4))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Color {}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Normal-mode difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use color_recall_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("impossible"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Beginner",
            Difficulty::Medium => "Intermediate",
            Difficulty::Hard => "Advanced",
        }
    }

    /// Static grid/color/timing parameters for this difficulty.
    pub fn config(&self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                grid_size: 2,
                color_count: 3,
                memory_time_seconds: 5,
            },
            Difficulty::Medium => DifficultyConfig {
                grid_size: 3,
                color_count: 4,
                memory_time_seconds: 5,
            },
            Difficulty::Hard => DifficultyConfig {
                grid_size: 4,
                color_count: 5,
                memory_time_seconds: 4,
            },
        }
    }
}

/// Game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Normal,
    Challenge,
}

impl GameMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(GameMode::Normal),
            "challenge" => Some(GameMode::Challenge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::Challenge => "challenge",
        }
    }
}

/// Round phase (governs which actions apply and which timer runs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Memory,
    Playing,
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Memory => "memory",
            Phase::Playing => "playing",
            Phase::Finished => "finished",
        }
    }
}

/// Card rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// Position on the fixed order `common < rare < epic < legendary < mythic`.
    pub fn rank(&self) -> u8 {
        match self {
            Rarity::Common => 0,
            Rarity::Rare => 1,
            Rarity::Epic => 2,
            Rarity::Legendary => 3,
            Rarity::Mythic => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Mythic => "mythic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }
}

/// What a round has to achieve to earn a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRequirement {
    /// Normal-mode card: matching difficulty, minimum accuracy, optional time limit.
    Normal {
        difficulty: Difficulty,
        min_accuracy: u8,
        max_time_seconds: Option<u32>,
    },
    /// Challenge-mode card: perfect round at or above a level.
    Challenge { min_level: u32 },
}

/// Collectible reward card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub rarity: Rarity,
    pub requirement: CardRequirement,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub grid_size: usize,
    pub color_count: usize,
    pub memory_time_seconds: u32,
}

/// One level range of the challenge-mode ramp.
///
/// `max_level == None` marks the unbounded last tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeTier {
    pub min_level: u32,
    pub max_level: Option<u32>,
    pub grid_size: usize,
    pub color_count: usize,
    pub memory_time_seconds: u32,
    pub distraction_eligible: bool,
}

impl ChallengeTier {
    pub fn contains(&self, level: u32) -> bool {
        level >= self.min_level && self.max_level.map_or(true, |max| level <= max)
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsRecord {
    pub sfx: bool,
    pub bgm: bool,
    pub instant_feedback: bool,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            sfx: true,
            bgm: true,
            instant_feedback: true,
        }
    }
}

/// Individually toggleable setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Sfx,
    Bgm,
    InstantFeedback,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [SettingKey::Sfx, SettingKey::Bgm, SettingKey::InstantFeedback];

    pub fn label(&self) -> &'static str {
        match self {
            SettingKey::Sfx => "Sound effects",
            SettingKey::Bgm => "Background music",
            SettingKey::InstantFeedback => "Instant feedback",
        }
    }
}

impl SettingsRecord {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Sfx => self.sfx,
            SettingKey::Bgm => self.bgm,
            SettingKey::InstantFeedback => self.instant_feedback,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::Sfx => self.sfx = value,
            SettingKey::Bgm => self.bgm = value,
            SettingKey::InstantFeedback => self.instant_feedback = value,
        }
    }
}

/// State machine actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start {
        mode: GameMode,
        difficulty: Option<Difficulty>,
        level: u32,
    },
    MemoryTick,
    GameTick,
    PlaceBlock {
        block_id: usize,
        position: CellIndex,
    },
    RemoveBlock {
        position: CellIndex,
    },
    Finish,
    NextLevel,
    Reset,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start { .. } => "start",
            GameAction::MemoryTick => "memoryTick",
            GameAction::GameTick => "gameTick",
            GameAction::PlaceBlock { .. } => "placeBlock",
            GameAction::RemoveBlock { .. } => "removeBlock",
            GameAction::Finish => "finish",
            GameAction::NextLevel => "nextLevel",
            GameAction::Reset => "reset",
        }
    }
}
