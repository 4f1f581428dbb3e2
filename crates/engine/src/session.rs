//! Game session: the state machine plus everything a round touches outside
//! of it.
//!
//! A [`Session`] owns the [`GameMachine`], a [`PhaseTimer`] that turns
//! elapsed wall time into memory/game ticks, a handle to the persistent
//! [`Store`], and in-memory copies of the settings, collected cards and
//! challenge high score that were read when the session opened.
//!
//! Finishing a round (explicitly, or by abandoning a challenge run) records
//! the earned card and any new high score, and produces a [`RoundOutcome`]
//! for the result screen. Store write failures are logged and never undo
//! the round.

use std::collections::BTreeSet;

use crate::core::{
    evaluate_reward, resolve_config, Evaluation, GameMachine, GameState, RoundResult,
};
use crate::store::Store;
use crate::timer::{PhaseTimer, TickKind, TimerKey};
use crate::types::{
    Card, CellIndex, Difficulty, GameAction, GameMode, Phase, SettingKey, SettingsRecord,
    CARD_CATALOG, FIRST_LEVEL, TICK_INTERVAL_MS,
};

/// Everything the result screen shows for a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub result: RoundResult,
    pub card: Option<&'static Card>,
    /// `card` was not in the collection before this round.
    pub is_new_card: bool,
    pub new_high_score: bool,
    pub evaluation: Evaluation,
}

/// One row of the collection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionEntry {
    pub card: &'static Card,
    pub collected: bool,
}

pub struct Session<S: Store> {
    machine: GameMachine,
    store: S,
    timer: PhaseTimer,
    /// Bumped whenever a new round begins or the machine resets.
    round: u64,
    settings: SettingsRecord,
    collected: BTreeSet<String>,
    high_score: u32,
    outcome: Option<RoundOutcome>,
}

impl<S: Store> Session<S> {
    /// Open a session, reading settings, collection and high score once.
    pub fn new(store: S, seed: u32) -> Self {
        let settings = store.settings();
        let collected = store.collected_cards();
        let high_score = store.challenge_high_score();
        tracing::debug!(
            collected = collected.len(),
            high_score,
            seed,
            "session opened"
        );
        Self {
            machine: GameMachine::new(seed),
            store,
            timer: PhaseTimer::default(),
            round: 0,
            settings,
            collected,
            high_score,
            outcome: None,
        }
    }

    pub fn state(&self) -> &GameState {
        self.machine.state()
    }

    pub fn settings(&self) -> SettingsRecord {
        self.settings
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn collected(&self) -> &BTreeSet<String> {
        &self.collected
    }

    pub fn is_collected(&self, card_id: &str) -> bool {
        self.collected.contains(card_id)
    }

    /// Outcome of the most recently finished round, until the next round
    /// starts or the session resets.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Milliseconds until the running timer next ticks.
    pub fn next_tick_in_ms(&self) -> Option<u32> {
        let kind = TickKind::for_phase(self.state().phase())?;
        let key = TimerKey {
            kind,
            round: self.round,
        };
        Some(if self.timer.armed() == Some(key) {
            self.timer.remaining_ms()
        } else {
            TICK_INTERVAL_MS
        })
    }

    // ---------------------------------------------------------------------
    // Round control
    // ---------------------------------------------------------------------

    /// Start a round at the first level.
    pub fn start(&mut self, mode: GameMode, difficulty: Option<Difficulty>) -> &GameState {
        self.begin(GameAction::Start {
            mode,
            difficulty,
            level: FIRST_LEVEL,
        })
    }

    /// Start over with the current round's mode and difficulty.
    pub fn replay(&mut self) -> &GameState {
        let state = self.machine.state();
        match (state.phase(), state.mode()) {
            (Phase::Idle, _) | (_, None) => self.machine.state(),
            (_, Some(mode)) => {
                let difficulty = state.difficulty();
                self.start(mode, difficulty)
            }
        }
    }

    pub fn next_level(&mut self) -> &GameState {
        self.begin(GameAction::NextLevel)
    }

    pub fn reset(&mut self) -> &GameState {
        self.begin(GameAction::Reset)
    }

    /// Dispatch a round-replacing action. When the machine accepts it, the
    /// timer restarts and the previous outcome is cleared.
    fn begin(&mut self, action: GameAction) -> &GameState {
        if !replaces_round(self.machine.state(), action) {
            return self.machine.state();
        }
        self.machine.dispatch(action);
        self.round = self.round.wrapping_add(1);
        self.timer.stop();
        self.outcome = None;
        tracing::debug!(
            action = action.as_str(),
            phase = self.machine.state().phase().as_str(),
            level = self.machine.state().level(),
            "round replaced"
        );
        self.machine.state()
    }

    pub fn place_block(&mut self, block_id: usize, position: CellIndex) -> &GameState {
        self.machine.place_block(block_id, position)
    }

    pub fn remove_block(&mut self, position: CellIndex) -> &GameState {
        self.machine.remove_block(position)
    }

    /// Score the round. Returns the outcome only when this call finished it.
    pub fn finish(&mut self) -> Option<&RoundOutcome> {
        if self.machine.state().phase() != Phase::Playing {
            return None;
        }
        self.machine.finish();
        let result = self.machine.state().result()?.clone();
        self.timer.stop();
        self.outcome = Some(self.complete_round(result));
        self.outcome.as_ref()
    }

    /// Leave the game screen.
    ///
    /// A challenge run that is past its first level is scored so the
    /// progress counts; anything else goes back to idle. Returns the outcome
    /// when the round was scored.
    pub fn abandon(&mut self) -> Option<&RoundOutcome> {
        let state = self.machine.state();
        let keeps_progress = state.mode() == Some(GameMode::Challenge)
            && state.phase() == Phase::Playing
            && state.level() > FIRST_LEVEL;
        if keeps_progress {
            self.finish()
        } else {
            self.reset();
            None
        }
    }

    /// Feed `elapsed_ms` of wall time to the running timer.
    ///
    /// Returns the number of ticks delivered. Ticks never cross a phase
    /// boundary: once a tick moves the machine into another phase, the rest
    /// of the elapsed time is dropped and the new phase's timer starts from
    /// zero on the next call.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let Some(kind) = TickKind::for_phase(self.machine.state().phase()) else {
            self.timer.stop();
            return 0;
        };
        let key = TimerKey {
            kind,
            round: self.round,
        };
        let due = self.timer.advance(key, elapsed_ms);

        let mut delivered = 0;
        for _ in 0..due {
            if TickKind::for_phase(self.machine.state().phase()) != Some(kind) {
                break;
            }
            match kind {
                TickKind::Memory => self.machine.memory_tick(),
                TickKind::Game => self.machine.game_tick(),
            };
            delivered += 1;
        }

        if TickKind::for_phase(self.machine.state().phase()) != Some(kind) {
            tracing::debug!(
                phase = self.machine.state().phase().as_str(),
                "phase changed by timer"
            );
            self.timer.stop();
        }
        delivered
    }

    fn complete_round(&mut self, result: RoundResult) -> RoundOutcome {
        let card = evaluate_reward(
            result.difficulty,
            result.accuracy,
            result.time_spent_seconds,
            result.mode,
            result.level,
        );

        let mut is_new_card = false;
        if let Some(card) = card {
            if !self.collected.contains(card.id) {
                is_new_card = true;
                self.collected.insert(card.id.to_string());
                match self.store.add_collected_card(card.id) {
                    Ok(_) => tracing::info!(card = card.id, rarity = card.rarity.as_str(), "card collected"),
                    Err(err) => tracing::warn!(card = card.id, error = %err, "failed to save collected card"),
                }
            }
        }

        let mut new_high_score = false;
        if result.mode == GameMode::Challenge && result.is_perfect {
            let raised_locally = result.level > self.high_score;
            new_high_score = match self.store.set_challenge_high_score(result.level) {
                Ok(raised) => raised,
                Err(err) => {
                    tracing::warn!(level = result.level, error = %err, "failed to save high score");
                    raised_locally
                }
            };
            if raised_locally {
                self.high_score = result.level;
            }
            if new_high_score {
                tracing::info!(level = result.level, "new challenge high score");
            }
        }

        let evaluation = result.evaluation();
        RoundOutcome {
            result,
            card,
            is_new_card,
            new_high_score,
            evaluation,
        }
    }

    // ---------------------------------------------------------------------
    // Settings and collection
    // ---------------------------------------------------------------------

    pub fn toggle_setting(&mut self, key: SettingKey) -> bool {
        let value = !self.settings.get(key);
        self.set_setting(key, value);
        value
    }

    /// Change one setting and save the whole record.
    pub fn set_setting(&mut self, key: SettingKey, value: bool) {
        self.settings.set(key, value);
        if let Err(err) = self.store.save_settings(self.settings) {
            tracing::warn!(setting = key.label(), error = %err, "failed to save settings");
        }
    }

    /// Catalog in order, each card flagged with whether it is collected.
    pub fn collection(&self) -> Vec<CollectionEntry> {
        CARD_CATALOG
            .iter()
            .map(|card| CollectionEntry {
                card,
                collected: self.collected.contains(card.id),
            })
            .collect()
    }

    /// `(collected, total)` over the catalog.
    pub fn collection_progress(&self) -> (usize, usize) {
        let collected = CARD_CATALOG
            .iter()
            .filter(|c| self.collected.contains(c.id))
            .count();
        (collected, CARD_CATALOG.len())
    }
}

/// Whether `action` starts a new round (or resets) from `state`.
fn replaces_round(state: &GameState, action: GameAction) -> bool {
    match action {
        GameAction::Start {
            mode,
            difficulty,
            level,
        } => resolve_config(mode, difficulty, level).is_some(),
        GameAction::NextLevel => {
            state.phase() != Phase::Idle && state.mode() == Some(GameMode::Challenge)
        }
        GameAction::Reset => true,
        _ => false,
    }
}
