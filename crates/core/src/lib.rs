//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and round state management.
//! It has **no dependencies** on UI, storage, or timers, making it:
//!
//! - **Deterministic**: Same seed produces identical layouts and shuffles
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can be driven by a terminal, a GUI or a test harness
//!
//! # Module Structure
//!
//! - [`layout`]: target layout generation, block shuffling, distraction blocks
//! - [`config`]: round parameters from the difficulty and challenge tables
//! - [`scoring`]: comparison of placed blocks against the target layout
//! - [`reward`]: best collectible card earned by a round
//! - [`game_state`]: the `idle → memory → playing → finished` state machine
//! - [`rng`]: seeded LCG with Fisher-Yates shuffle
//!
//! # Game Rules
//!
//! - A layout of `grid_size²` colored cells is shown for a few seconds
//! - The layout is hidden and its cells become a shuffled tray of blocks
//! - The player drops blocks onto cells; each drop gets instant feedback
//! - Finishing scores the round by color per cell
//! - Challenge mode ramps the grid and palette by level and may add a decoy
//!
//! # Example
//!
//! ```
//! use color_recall_core::GameMachine;
//! use color_recall_types::{Difficulty, GameMode, Phase};
//!
//! let mut game = GameMachine::new(12345);
//! game.start(GameMode::Normal, Some(Difficulty::Easy), 1);
//!
//! // Five one-second ticks end the memory phase.
//! for _ in 0..5 {
//!     game.memory_tick();
//! }
//! assert_eq!(game.state().phase(), Phase::Playing);
//!
//! // Put every block back where it came from.
//! let blocks = game.state().shuffled_blocks().to_vec();
//! for block in blocks {
//!     game.place_block(block.id, block.origin_position.unwrap());
//! }
//!
//! let state = game.finish();
//! assert!(state.result().unwrap().is_perfect);
//! ```
//!
//! # Timing
//!
//! The machine has no clock. The driving layer calls
//! [`GameMachine::memory_tick`] or [`GameMachine::game_tick`] once per second
//! depending on the phase.

pub mod config;
pub mod error;
pub mod game_state;
pub mod layout;
pub mod reward;
pub mod rng;
pub mod scoring;

pub use color_recall_types as types;

// Re-export commonly used types for convenience
pub use config::{resolve_config, RoundConfig};
pub use error::CoreError;
pub use game_state::{reduce, Feedback, GameMachine, GameState};
pub use layout::{add_distraction, generate_layout, shuffle_blocks, Block, Layout, LayoutEntry};
pub use reward::{best_card, evaluate_reward, is_eligible};
pub use rng::SimpleRng;
pub use scoring::{
    accuracy_percent, format_time, score, CellResult, Evaluation, PlacedBlock, RoundResult,
    ScoreSummary,
};
