//! Terminal input module.
//!
//! Maps `crossterm` key events into screen-independent [`UiCommand`]s. Each
//! screen decides what a command means (a cursor move on the grid, a menu
//! choice, ...), so this crate has no knowledge of the game rules.

pub mod map;

pub use color_recall_types as types;

pub use map::{handle_key_event, should_quit, UiCommand};
