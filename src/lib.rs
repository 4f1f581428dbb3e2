//! Color Recall (workspace facade crate).
//!
//! Re-exports the member crates under `color_recall::{core,engine,input,store,term,types}`
//! and hosts the pieces of the terminal runner that are worth testing
//! without a terminal: screen navigation ([`app`]) and environment
//! configuration ([`config`]).

pub mod app;
pub mod config;

pub use color_recall_core as core;
pub use color_recall_engine as engine;
pub use color_recall_input as input;
pub use color_recall_store as store;
pub use color_recall_term as term;
pub use color_recall_types as types;
