//! Phase-gated tick scheduling.
//!
//! The memory countdown and the play clock are two independent one-second
//! timers, and at most one of them runs at a time. A [`PhaseTimer`] is armed
//! for a single [`TimerKey`]; presenting a different key restarts it from
//! zero, so time accumulated for a superseded phase or round never turns
//! into a tick.

use crate::types::Phase;

/// Which round timer a phase runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickKind {
    Memory,
    Game,
}

impl TickKind {
    /// Timer governed by `phase`, if any.
    pub fn for_phase(phase: Phase) -> Option<Self> {
        match phase {
            Phase::Memory => Some(TickKind::Memory),
            Phase::Playing => Some(TickKind::Game),
            Phase::Idle | Phase::Finished => None,
        }
    }
}

/// Identity of one timer run: the timer kind within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub kind: TickKind,
    pub round: u64,
}

#[derive(Debug, Clone)]
pub struct PhaseTimer {
    interval_ms: u32,
    accumulated_ms: u32,
    armed: Option<TimerKey>,
}

impl PhaseTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            armed: None,
        }
    }

    pub fn armed(&self) -> Option<TimerKey> {
        self.armed
    }

    /// Milliseconds until the next tick of the armed timer.
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms - self.accumulated_ms
    }

    /// Drop any armed timer and its accumulated time.
    pub fn stop(&mut self) {
        self.armed = None;
        self.accumulated_ms = 0;
    }

    /// Accumulate `elapsed_ms` for `key` and return the number of ticks due.
    pub fn advance(&mut self, key: TimerKey, elapsed_ms: u32) -> u32 {
        if self.armed != Some(key) {
            self.armed = Some(key);
            self.accumulated_ms = 0;
        }
        let total = self.accumulated_ms as u64 + elapsed_ms as u64;
        let interval = self.interval_ms as u64;
        self.accumulated_ms = (total % interval) as u32;
        (total / interval).min(u32::MAX as u64) as u32
    }
}

impl Default for PhaseTimer {
    fn default() -> Self {
        Self::new(crate::types::TICK_INTERVAL_MS)
    }
}
