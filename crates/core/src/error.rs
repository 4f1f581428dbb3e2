//! Core error types.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Grid or palette size out of range. Unreachable with the built-in tables.
    #[error("invalid round config: grid_size={grid_size}, color_count={color_count}")]
    InvalidConfig { grid_size: usize, color_count: usize },
}
