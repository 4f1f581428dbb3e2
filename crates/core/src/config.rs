//! Round configuration lookup.

use crate::types::{challenge_tier, Difficulty, GameMode};

/// Parameters of one round, resolved from the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub grid_size: usize,
    pub color_count: usize,
    pub memory_time_seconds: u32,
    /// Whether the round may get a distraction block (challenge tiers only).
    pub distraction_eligible: bool,
}

/// Resolve the round config for a mode/difficulty/level.
///
/// Normal mode needs a difficulty and ignores the level; challenge mode
/// ignores the difficulty. Returns `None` for normal mode without a
/// difficulty.
pub fn resolve_config(
    mode: GameMode,
    difficulty: Option<Difficulty>,
    level: u32,
) -> Option<RoundConfig> {
    match mode {
        GameMode::Challenge => {
            let tier = challenge_tier(level);
            Some(RoundConfig {
                grid_size: tier.grid_size,
                color_count: tier.color_count,
                memory_time_seconds: tier.memory_time_seconds,
                distraction_eligible: tier.distraction_eligible,
            })
        }
        GameMode::Normal => {
            let config = difficulty?.config();
            Some(RoundConfig {
                grid_size: config.grid_size,
                color_count: config.color_count,
                memory_time_seconds: config.memory_time_seconds,
                distraction_eligible: false,
            })
        }
    }
}
