//! Runner configuration from the environment.
//!
//! # Environment Variables
//!
//! - `COLOR_RECALL_SEED`: RNG seed (default: derived from the system clock)
//! - `COLOR_RECALL_LOG`: log file path (default: no logging)
//!
//! Store selection (`COLOR_RECALL_DATA_DIR`, `COLOR_RECALL_MEMORY`) is read
//! by [`color_recall_store::StoreConfig::from_env`].

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use color_recall_store::StoreConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub store: StoreConfig,
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let seed = env::var("COLOR_RECALL_SEED")
            .ok()
            .and_then(|v| parse_seed(&v))
            .unwrap_or_else(clock_seed);
        let log_path = env::var("COLOR_RECALL_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            seed,
            log_path,
            store: StoreConfig::from_env(),
        }
    }
}

/// Decimal or `0x`-prefixed hex seed.
pub fn parse_seed(s: &str) -> Option<u32> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
