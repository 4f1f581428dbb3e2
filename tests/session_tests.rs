//! Session behaviour against the on-disk store

use color_recall::engine::Session;
use color_recall::store::{JsonFileStore, MemoryStore, Store, StoreConfig};
use color_recall::types::{Difficulty, GameMode, Phase, SettingKey};

fn finish_perfect<S: Store>(session: &mut Session<S>) {
    let secs = session.state().memory_time_left();
    session.advance(secs * 1000);
    assert_eq!(session.state().phase(), Phase::Playing);
    let moves: Vec<_> = session
        .state()
        .shuffled_blocks()
        .iter()
        .filter_map(|b| b.origin_position.map(|p| (b.id, p)))
        .collect();
    for (id, pos) in moves {
        session.place_block(id, pos);
    }
    let outcome = session.finish().expect("round was playing");
    assert!(outcome.result.is_perfect);
}

#[test]
fn test_progress_survives_new_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = Session::new(JsonFileStore::new(dir.path()), 31);
    session.start(GameMode::Normal, Some(Difficulty::Easy));
    finish_perfect(&mut session);
    assert_eq!(session.outcome().unwrap().card.map(|c| c.id), Some("rabbit"));

    session.start(GameMode::Challenge, None);
    finish_perfect(&mut session);
    session.next_level();
    finish_perfect(&mut session);
    session.toggle_setting(SettingKey::Sfx);

    let reopened = Session::new(JsonFileStore::new(dir.path()), 32);
    assert!(reopened.is_collected("rabbit"));
    assert_eq!(reopened.high_score(), 2);
    assert!(!reopened.settings().sfx);
    assert_eq!(reopened.collection_progress().0, 1);
}

#[test]
fn test_boxed_store_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_dir: dir.path().join("data"),
        in_memory: false,
    };
    let mut session = Session::new(config.open(), 5);
    session.set_setting(SettingKey::Bgm, false);
    assert!(dir.path().join("data").join("settings.json").exists());
}

#[test]
fn test_timer_never_ticks_superseded_round() {
    let mut session = Session::new(MemoryStore::new(), 3);
    session.start(GameMode::Normal, Some(Difficulty::Medium));
    session.advance(5000);
    assert_eq!(session.state().phase(), Phase::Playing);
    session.advance(999);

    session.reset();
    assert_eq!(session.advance(5000), 0);

    session.start(GameMode::Normal, Some(Difficulty::Easy));
    assert_eq!(session.advance(1), 0);
    assert_eq!(session.state().memory_time_left(), 5);
}
