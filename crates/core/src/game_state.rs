//! Game state module - the round state machine
//!
//! [`GameState`] is the single aggregate describing a round. It only
//! changes through [`reduce`], which maps `(state, action)` to the next
//! state. Actions whose preconditions do not hold return the state
//! unchanged; nothing here panics or errors on bad input.
//!
//! ```text
//! idle --start--> memory --memoryTick (countdown hits 0)--> playing --finish--> finished
//!                   ^                                                              |
//!                   +------------------------- nextLevel ---------------------------+
//! ```
//!
//! `reset` returns to idle from any phase, and `start` begins a new round
//! from any phase.
//!
//! [`GameMachine`] pairs the state with its RNG for callers that want a
//! method-per-action API.

use crate::config::{resolve_config, RoundConfig};
use crate::layout::{add_distraction, generate_layout, shuffle_blocks, Block, LayoutEntry};
use crate::rng::SimpleRng;
use crate::scoring::{score, PlacedBlock, RoundResult};
use crate::types::*;

/// Instant feedback for an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub position: CellIndex,
    pub is_correct: bool,
}

/// Complete round state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    phase: Phase,
    mode: Option<GameMode>,
    difficulty: Option<Difficulty>,
    level: u32,
    grid_size: usize,
    original_layout: Vec<LayoutEntry>,
    shuffled_blocks: Vec<Block>,
    placed_blocks: Vec<PlacedBlock>,
    /// Ids of blocks still in the tray, in the order they returned to it.
    available_block_ids: Vec<usize>,
    memory_time_left: u32,
    game_time_elapsed: u32,
    feedback: Vec<Feedback>,
    result: Option<RoundResult>,
}

impl Default for GameState {
    fn default() -> Self {
        let easy = Difficulty::Easy.config();
        Self {
            phase: Phase::Idle,
            mode: None,
            difficulty: None,
            level: FIRST_LEVEL,
            grid_size: easy.grid_size,
            original_layout: Vec::new(),
            shuffled_blocks: Vec::new(),
            placed_blocks: Vec::new(),
            available_block_ids: Vec::new(),
            memory_time_left: easy.memory_time_seconds,
            game_time_elapsed: 0,
            feedback: Vec::new(),
            result: None,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    pub fn original_layout(&self) -> &[LayoutEntry] {
        &self.original_layout
    }

    pub fn shuffled_blocks(&self) -> &[Block] {
        &self.shuffled_blocks
    }

    pub fn placed_blocks(&self) -> &[PlacedBlock] {
        &self.placed_blocks
    }

    pub fn available_block_ids(&self) -> &[usize] {
        &self.available_block_ids
    }

    pub fn memory_time_left(&self) -> u32 {
        self.memory_time_left
    }

    pub fn game_time_elapsed(&self) -> u32 {
        self.game_time_elapsed
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    pub fn block(&self, block_id: usize) -> Option<&Block> {
        self.shuffled_blocks.iter().find(|b| b.id == block_id)
    }

    pub fn placed_at(&self, position: CellIndex) -> Option<&PlacedBlock> {
        self.placed_blocks.iter().find(|p| p.position == position)
    }

    pub fn feedback_at(&self, position: CellIndex) -> Option<&Feedback> {
        self.feedback.iter().find(|f| f.position == position)
    }

    pub fn layout_at(&self, position: CellIndex) -> Option<&LayoutEntry> {
        self.original_layout.iter().find(|e| e.position == position)
    }

    pub fn is_available(&self, block_id: usize) -> bool {
        self.available_block_ids.contains(&block_id)
    }

    /// Tray blocks in shuffled order.
    pub fn available_blocks(&self) -> Vec<&Block> {
        self.shuffled_blocks
            .iter()
            .filter(|b| self.is_available(b.id))
            .collect()
    }

    /// Every grid cell holds a block.
    pub fn all_filled(&self) -> bool {
        self.phase == Phase::Playing && self.placed_blocks.len() == self.cell_count()
    }

    /// Fresh memory phase for a new round, or `None` if the config is unusable.
    fn begin_round(
        mode: GameMode,
        difficulty: Option<Difficulty>,
        level: u32,
        rng: &mut SimpleRng,
    ) -> Option<Self> {
        let Some(config) = resolve_config(mode, difficulty, level) else {
            tracing::debug!(mode = mode.as_str(), "no round config without a difficulty");
            return None;
        };

        let layout = match generate_layout(config.grid_size, config.color_count, rng) {
            Ok(layout) => layout,
            Err(err) => {
                tracing::error!(error = %err, "failed to generate layout");
                return None;
            }
        };

        tracing::debug!(
            mode = mode.as_str(),
            difficulty = difficulty.map(|d| d.as_str()),
            level,
            grid_size = config.grid_size,
            "round started"
        );

        Some(Self {
            phase: Phase::Memory,
            mode: Some(mode),
            difficulty,
            level,
            grid_size: config.grid_size,
            original_layout: layout,
            memory_time_left: config.memory_time_seconds,
            ..Self::default()
        })
    }

    fn round_config(&self) -> Option<RoundConfig> {
        resolve_config(self.mode?, self.difficulty, self.level)
    }

    fn memory_tick(&self, rng: &mut SimpleRng) -> Option<Self> {
        if self.phase != Phase::Memory {
            return None;
        }

        let left = self.memory_time_left.saturating_sub(1);
        if left > 0 {
            return Some(Self {
                memory_time_left: left,
                ..self.clone()
            });
        }

        let config = self.round_config()?;
        let mut blocks = shuffle_blocks(&self.original_layout, rng);
        if config.distraction_eligible && rng.next_bool() {
            blocks = add_distraction(blocks, config.color_count, rng);
        }

        tracing::debug!(blocks = blocks.len(), "memory phase over");

        Some(Self {
            phase: Phase::Playing,
            memory_time_left: 0,
            available_block_ids: blocks.iter().map(|b| b.id).collect(),
            shuffled_blocks: blocks,
            placed_blocks: Vec::new(),
            feedback: Vec::new(),
            game_time_elapsed: 0,
            ..self.clone()
        })
    }

    fn game_tick(&self) -> Option<Self> {
        if self.phase != Phase::Playing {
            return None;
        }
        Some(Self {
            game_time_elapsed: self.game_time_elapsed.saturating_add(1),
            ..self.clone()
        })
    }

    fn place_block(&self, block_id: usize, position: CellIndex) -> Option<Self> {
        if self.phase != Phase::Playing || position >= self.cell_count() {
            return None;
        }
        let block = *self.block(block_id)?;

        let previous_cell = self
            .placed_blocks
            .iter()
            .find(|p| p.block_id == block_id)
            .map(|p| p.position);
        if previous_cell == Some(position) {
            return None;
        }
        if previous_cell.is_none() && !self.is_available(block_id) {
            return None;
        }

        let mut next = self.clone();

        // Moving a placed block empties its old cell.
        if let Some(old) = previous_cell {
            next.placed_blocks.retain(|p| p.position != old);
            next.feedback.retain(|f| f.position != old);
        }

        // The current occupant goes back to the tray.
        if let Some(i) = next.placed_blocks.iter().position(|p| p.position == position) {
            let occupant = next.placed_blocks.remove(i);
            next.available_block_ids.push(occupant.block_id);
        }

        next.available_block_ids.retain(|&id| id != block_id);
        next.placed_blocks.push(PlacedBlock {
            position,
            block_id,
            color: block.color,
        });

        let is_correct = self
            .layout_at(position)
            .map_or(false, |entry| entry.color.id == block.color.id);
        next.feedback.retain(|f| f.position != position);
        next.feedback.push(Feedback {
            position,
            is_correct,
        });

        Some(next)
    }

    fn remove_block(&self, position: CellIndex) -> Option<Self> {
        if self.phase != Phase::Playing {
            return None;
        }
        let placed = *self.placed_at(position)?;

        let mut next = self.clone();
        next.placed_blocks.retain(|p| p.position != position);
        next.available_block_ids.push(placed.block_id);
        next.feedback.retain(|f| f.position != position);
        Some(next)
    }

    fn finish(&self) -> Option<Self> {
        if self.phase != Phase::Playing {
            return None;
        }
        let mode = self.mode?;
        let summary = score(&self.original_layout, &self.placed_blocks);
        let result = RoundResult::new(
            summary,
            self.game_time_elapsed,
            self.difficulty,
            mode,
            self.level,
        );

        tracing::debug!(
            correct = result.correct,
            total = result.total,
            accuracy = result.accuracy,
            time = result.time_spent_seconds,
            "round finished"
        );

        Some(Self {
            phase: Phase::Finished,
            result: Some(result),
            ..self.clone()
        })
    }

    fn next_level(&self, rng: &mut SimpleRng) -> Option<Self> {
        if self.phase == Phase::Idle || self.mode != Some(GameMode::Challenge) {
            return None;
        }
        Self::begin_round(GameMode::Challenge, None, self.level.saturating_add(1), rng)
    }
}

/// Apply `action` to `state`, returning the next state.
///
/// Actions whose preconditions are not met return an unchanged copy.
pub fn reduce(state: &GameState, action: GameAction, rng: &mut SimpleRng) -> GameState {
    let next = match action {
        GameAction::Start {
            mode,
            difficulty,
            level,
        } => GameState::begin_round(mode, difficulty, level, rng),
        GameAction::MemoryTick => state.memory_tick(rng),
        GameAction::GameTick => state.game_tick(),
        GameAction::PlaceBlock { block_id, position } => state.place_block(block_id, position),
        GameAction::RemoveBlock { position } => state.remove_block(position),
        GameAction::Finish => state.finish(),
        GameAction::NextLevel => state.next_level(rng),
        GameAction::Reset => Some(GameState::default()),
    };
    next.unwrap_or_else(|| state.clone())
}

/// Round state plus the RNG that drives it.
#[derive(Debug, Clone)]
pub struct GameMachine {
    state: GameState,
    rng: SimpleRng,
}

impl GameMachine {
    /// Create an idle machine with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            state: GameState::default(),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current RNG state (for reproducing the next round)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Apply an action and return the new state.
    pub fn dispatch(&mut self, action: GameAction) -> &GameState {
        self.state = reduce(&self.state, action, &mut self.rng);
        &self.state
    }

    pub fn start(
        &mut self,
        mode: GameMode,
        difficulty: Option<Difficulty>,
        level: u32,
    ) -> &GameState {
        self.dispatch(GameAction::Start {
            mode,
            difficulty,
            level,
        })
    }

    pub fn memory_tick(&mut self) -> &GameState {
        self.dispatch(GameAction::MemoryTick)
    }

    pub fn game_tick(&mut self) -> &GameState {
        self.dispatch(GameAction::GameTick)
    }

    pub fn place_block(&mut self, block_id: usize, position: CellIndex) -> &GameState {
        self.dispatch(GameAction::PlaceBlock { block_id, position })
    }

    pub fn remove_block(&mut self, position: CellIndex) -> &GameState {
        self.dispatch(GameAction::RemoveBlock { position })
    }

    pub fn finish(&mut self) -> &GameState {
        self.dispatch(GameAction::Finish)
    }

    pub fn next_level(&mut self) -> &GameState {
        self.dispatch(GameAction::NextLevel)
    }

    pub fn reset(&mut self) -> &GameState {
        self.dispatch(GameAction::Reset)
    }
}

impl Default for GameMachine {
    fn default() -> Self {
        Self::new(1)
    }
}
