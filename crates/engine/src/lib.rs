//! Driving layer for the color-recall game core.
//!
//! The core state machine has no clock and no storage. This crate supplies
//! both:
//!
//! - [`timer`]: converts elapsed wall time into one-second memory or game
//!   ticks, only for the phase that owns them
//! - [`session`]: a [`Session`] bundling the machine, the timer and a
//!   [`Store`](color_recall_store::Store), applying the round-completion
//!   side effects (collect card, raise challenge high score) and managing
//!   settings
//!
//! Front-ends call [`Session::advance`] with the time since their last
//! frame and forward player actions to the session methods.

pub mod session;
pub mod timer;

pub use color_recall_core as core;
pub use color_recall_store as store;
pub use color_recall_types as types;

pub use session::{CollectionEntry, RoundOutcome, Session};
pub use timer::{PhaseTimer, TickKind, TimerKey};
