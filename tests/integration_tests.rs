//! Integration tests for the round lifecycle through the public facade

use std::collections::BTreeSet;

use color_recall::core::{
    evaluate_reward, generate_layout, reduce, score, shuffle_blocks, GameMachine, GameState,
    PlacedBlock, SimpleRng,
};
use color_recall::types::{Difficulty, GameAction, GameMode, Phase, PALETTE};

fn playing_easy(seed: u32) -> GameMachine {
    let mut game = GameMachine::new(seed);
    game.start(GameMode::Normal, Some(Difficulty::Easy), 1);
    for _ in 0..5 {
        game.memory_tick();
    }
    game
}

#[test]
fn test_easy_round_lifecycle() {
    let mut game = GameMachine::new(12345);
    let state = game.start(GameMode::Normal, Some(Difficulty::Easy), 1);
    assert_eq!(state.phase(), Phase::Memory);
    assert_eq!(state.memory_time_left(), 5);
    assert_eq!(state.original_layout().len(), 4);

    for expected_left in (1..5).rev() {
        let state = game.memory_tick();
        assert_eq!(state.phase(), Phase::Memory);
        assert_eq!(state.memory_time_left(), expected_left);
    }

    let state = game.memory_tick();
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.memory_time_left(), 0);
    assert_eq!(state.available_block_ids().len(), 4);
    assert!(state.shuffled_blocks().iter().all(|b| !b.is_distraction));
}

#[test]
fn test_layout_uses_palette_prefix() {
    let mut rng = SimpleRng::new(7);
    for grid_size in 1..=5 {
        for color_count in 1..=10 {
            let layout = generate_layout(grid_size, color_count, &mut rng).unwrap();
            assert_eq!(layout.len(), grid_size * grid_size);
            let allowed = &PALETTE[..color_count.min(PALETTE.len())];
            for (i, entry) in layout.iter().enumerate() {
                assert_eq!(entry.position, i);
                assert!(allowed.contains(&entry.color));
            }
        }
    }
}

#[test]
fn test_invalid_layout_config() {
    let mut rng = SimpleRng::new(7);
    assert!(generate_layout(0, 3, &mut rng).is_err());
    assert!(generate_layout(3, 0, &mut rng).is_err());
}

#[test]
fn test_shuffle_is_permutation() {
    let mut rng = SimpleRng::new(99);
    let layout = generate_layout(4, 5, &mut rng).unwrap();
    let blocks = shuffle_blocks(&layout, &mut rng);
    assert_eq!(blocks.len(), layout.len());

    let origins: BTreeSet<_> = blocks.iter().filter_map(|b| b.origin_position).collect();
    assert_eq!(origins, (0..16).collect::<BTreeSet<_>>());
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(block.shuffled_order, i);
        let origin = block.origin_position.unwrap();
        assert_eq!(block.color, layout[origin].color);
    }
}

#[test]
fn test_score_extremes() {
    let mut rng = SimpleRng::new(3);
    let layout = generate_layout(3, 4, &mut rng).unwrap();
    let as_placed: Vec<PlacedBlock> = layout
        .iter()
        .map(|e| PlacedBlock {
            position: e.position,
            block_id: e.position,
            color: e.color,
        })
        .collect();

    let perfect = score(&layout, &as_placed);
    assert_eq!(perfect.correct, perfect.total);
    assert_eq!(perfect.accuracy, 100);
    assert!(perfect.is_perfect);

    let empty = score(&layout, &[]);
    assert_eq!(empty.correct, 0);
    assert_eq!(empty.accuracy, 0);
}

#[test]
fn test_reward_examples() {
    let id = |d, acc, t, mode, level| evaluate_reward(d, acc, t, mode, level).map(|c| c.id);
    assert_eq!(id(Some(Difficulty::Easy), 100, 15, GameMode::Normal, 0), Some("rabbit"));
    assert_eq!(id(Some(Difficulty::Easy), 60, 100, GameMode::Normal, 0), Some("snail"));
    assert_eq!(id(None, 100, 5, GameMode::Challenge, 10), Some("cheetah"));
    assert_eq!(id(None, 100, 5, GameMode::Challenge, 20), Some("dragon"));
}

#[test]
fn test_occupied_cell_returns_occupant_once() {
    let mut game = playing_easy(555);
    let ids: Vec<usize> = game.state().available_block_ids().to_vec();
    let (first, second) = (ids[0], ids[1]);

    game.place_block(first, 0);
    let state = game.place_block(second, 0).clone();

    assert_eq!(state.placed_at(0).map(|p| p.block_id), Some(second));
    let pool = state.available_block_ids();
    assert_eq!(pool.iter().filter(|&&id| id == first).count(), 1);
    assert!(!pool.contains(&second));
    assert_eq!(pool.len(), 3);
}

#[test]
fn test_remove_empty_cell_is_noop() {
    let mut game = playing_easy(8);
    let before = game.state().clone();
    let after = game.remove_block(2).clone();
    assert_eq!(before, after);
}

#[test]
fn test_wrong_phase_actions_are_noops() {
    let idle = GameState::default();
    let mut rng = SimpleRng::new(1);
    for action in [
        GameAction::MemoryTick,
        GameAction::GameTick,
        GameAction::PlaceBlock {
            block_id: 0,
            position: 0,
        },
        GameAction::RemoveBlock { position: 0 },
        GameAction::Finish,
        GameAction::NextLevel,
    ] {
        assert_eq!(reduce(&idle, action, &mut rng), idle, "{}", action.as_str());
    }
}

#[test]
fn test_reset_idempotent() {
    let mut game = playing_easy(21);
    let once = game.reset().clone();
    let twice = game.reset().clone();
    assert_eq!(once, twice);
    assert_eq!(once, GameState::default());
    assert_eq!(once.phase(), Phase::Idle);
}

#[test]
fn test_challenge_levels_ramp_grid() {
    let mut game = GameMachine::new(4);
    game.start(GameMode::Challenge, None, 1);
    assert_eq!(game.state().grid_size(), 2);

    for _ in 1..8 {
        game.next_level();
    }
    assert_eq!(game.state().level(), 8);
    assert_eq!(game.state().grid_size(), 3);
    assert_eq!(game.state().phase(), Phase::Memory);

    game.start(GameMode::Challenge, None, 13);
    assert_eq!(game.state().grid_size(), 4);
}

#[test]
fn test_same_seed_same_round() {
    let a = playing_easy(777);
    let b = playing_easy(777);
    assert_eq!(a.state(), b.state());
}
