//! Terminal front-end rendering.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer ([`fb`]), and [`renderer`] flushes only what changed to the
//! terminal through `crossterm`. No widget toolkit is involved.
//!
//! - [`screen`]: navigation state (which screen, cursor, selections)
//! - [`game_view`]: pure mapping from a session plus screen to a frame

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use color_recall_core as core;
pub use color_recall_engine as engine;
pub use color_recall_store as store;
pub use color_recall_types as types;

pub use fb::{text_width, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{step, MenuItem, Screen};
