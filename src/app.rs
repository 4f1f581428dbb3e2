//! Screen navigation: turns [`UiCommand`]s into session calls and screen
//! changes.
//!
//! ```text
//! menu ──► difficulty ──► game ──► result ──► game (replay / next level)
//!   │                      │          │
//!   ├──► collection        └─ Esc ────┴──► menu
//!   └──► settings
//! ```

use crate::engine::Session;
use crate::input::UiCommand;
use crate::store::Store;
use crate::term::{step, MenuItem, Screen};
use crate::types::{Difficulty, GameMode, Phase, SettingKey, CARD_CATALOG};

pub struct App<S: Store> {
    session: Session<S>,
    screen: Screen,
    running: bool,
}

impl<S: Store> App<S> {
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            screen: Screen::default(),
            running: true,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance round timers by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.session.advance(elapsed_ms);
    }

    pub fn handle(&mut self, cmd: UiCommand) {
        match self.screen {
            Screen::Menu { selected } => self.on_menu(selected, cmd),
            Screen::Difficulty { selected } => self.on_difficulty(selected, cmd),
            Screen::Game { cursor, selected } => self.on_game(cursor, selected, cmd),
            Screen::Result => self.on_result(cmd),
            Screen::Collection { selected } => match cmd {
                UiCommand::Up => {
                    self.screen = Screen::Collection {
                        selected: selected.saturating_sub(1),
                    }
                }
                UiCommand::Down => {
                    self.screen = Screen::Collection {
                        selected: (selected + 1).min(CARD_CATALOG.len() - 1),
                    }
                }
                UiCommand::Back => self.go(Screen::Menu { selected: 2 }),
                _ => {}
            },
            Screen::Settings { selected } => self.on_settings(selected, cmd),
        }
    }

    fn go(&mut self, screen: Screen) {
        if screen.name() != self.screen.name() {
            tracing::debug!(from = self.screen.name(), to = screen.name(), "screen change");
        }
        self.screen = screen;
    }

    fn on_menu(&mut self, selected: usize, cmd: UiCommand) {
        let len = MenuItem::ALL.len();
        let selected = match cmd {
            UiCommand::Up => return self.go(Screen::Menu { selected: step(selected, len, -1) }),
            UiCommand::Down => return self.go(Screen::Menu { selected: step(selected, len, 1) }),
            UiCommand::Pick(i) if i < len => i,
            UiCommand::Confirm => selected,
            _ => return,
        };
        self.screen = Screen::Menu { selected };
        match MenuItem::ALL[selected] {
            MenuItem::Normal => self.go(Screen::Difficulty { selected: 0 }),
            MenuItem::Challenge => {
                self.session.start(GameMode::Challenge, None);
                self.go(Screen::game());
            }
            MenuItem::Collection => self.go(Screen::Collection { selected: 0 }),
            MenuItem::Settings => self.go(Screen::Settings { selected: 0 }),
            MenuItem::Quit => self.running = false,
        }
    }

    fn on_difficulty(&mut self, selected: usize, cmd: UiCommand) {
        let len = Difficulty::ALL.len();
        let selected = match cmd {
            UiCommand::Up => return self.go(Screen::Difficulty { selected: step(selected, len, -1) }),
            UiCommand::Down => return self.go(Screen::Difficulty { selected: step(selected, len, 1) }),
            UiCommand::Back => return self.go(Screen::Menu { selected: 0 }),
            UiCommand::Pick(i) if i < len => i,
            UiCommand::Confirm => selected,
            _ => return,
        };
        self.session
            .start(GameMode::Normal, Some(Difficulty::ALL[selected]));
        self.go(Screen::game());
    }

    fn on_game(&mut self, cursor: usize, selected: usize, cmd: UiCommand) {
        if cmd == UiCommand::Back {
            let next = match self.session.abandon() {
                Some(_) => Screen::Result,
                None => Screen::default(),
            };
            return self.go(next);
        }

        let state = self.session.state();
        if state.phase() != Phase::Playing {
            return;
        }
        let n = state.grid_size().max(1);
        let tray_len = state.available_block_ids().len();
        let row = cursor / n;
        let col = cursor % n;

        let (cursor, selected) = match cmd {
            UiCommand::Up => (row.saturating_sub(1) * n + col, selected),
            UiCommand::Down => ((row + 1).min(n - 1) * n + col, selected),
            UiCommand::Left => (row * n + col.saturating_sub(1), selected),
            UiCommand::Right => (row * n + (col + 1).min(n - 1), selected),
            UiCommand::NextBlock => (cursor, step(selected, tray_len, 1)),
            UiCommand::PrevBlock => (cursor, step(selected, tray_len, -1)),
            UiCommand::Pick(i) if i < tray_len => (cursor, i),
            UiCommand::Confirm => {
                let block = state.available_blocks().get(selected).map(|b| b.id);
                if let Some(block_id) = block {
                    self.session.place_block(block_id, cursor);
                }
                let tray_len = self.session.state().available_block_ids().len();
                (cursor, selected.min(tray_len.saturating_sub(1)))
            }
            UiCommand::Remove => {
                self.session.remove_block(cursor);
                (cursor, selected)
            }
            UiCommand::Finish => {
                if state.all_filled() && self.session.finish().is_some() {
                    return self.go(Screen::Result);
                }
                (cursor, selected)
            }
            _ => return,
        };
        self.screen = Screen::Game { cursor, selected };
    }

    fn on_result(&mut self, cmd: UiCommand) {
        let can_continue = self
            .session
            .outcome()
            .map_or(false, |o| o.result.can_continue());
        match cmd {
            UiCommand::Replay => {
                self.session.replay();
                self.go(Screen::game());
            }
            UiCommand::NextLevel | UiCommand::Confirm if can_continue => {
                self.session.next_level();
                self.go(Screen::game());
            }
            UiCommand::Back | UiCommand::Confirm => {
                self.session.reset();
                self.go(Screen::default());
            }
            _ => {}
        }
    }

    fn on_settings(&mut self, selected: usize, cmd: UiCommand) {
        let len = SettingKey::ALL.len();
        match cmd {
            UiCommand::Up => self.screen = Screen::Settings { selected: step(selected, len, -1) },
            UiCommand::Down => self.screen = Screen::Settings { selected: step(selected, len, 1) },
            UiCommand::Confirm | UiCommand::Left | UiCommand::Right => {
                self.session.toggle_setting(SettingKey::ALL[selected]);
            }
            UiCommand::Pick(i) if i < len => {
                self.session.toggle_setting(SettingKey::ALL[i]);
                self.screen = Screen::Settings { selected: i };
            }
            UiCommand::Back => self.go(Screen::Menu { selected: 3 }),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn app() -> App<MemoryStore> {
        App::new(Session::new(MemoryStore::new(), 2024))
    }

    fn play_easy(app: &mut App<MemoryStore>) {
        app.handle(UiCommand::Confirm); // Normal Mode
        app.handle(UiCommand::Confirm); // Beginner
        app.tick(5000);
        assert_eq!(app.session().state().phase(), Phase::Playing);
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = app();
        app.handle(UiCommand::Up);
        assert_eq!(*app.screen(), Screen::Menu { selected: 4 });
        app.handle(UiCommand::Confirm);
        assert!(!app.is_running());
    }

    #[test]
    fn test_difficulty_back() {
        let mut app = app();
        app.handle(UiCommand::Confirm);
        assert_eq!(*app.screen(), Screen::Difficulty { selected: 0 });
        app.handle(UiCommand::Back);
        assert_eq!(*app.screen(), Screen::Menu { selected: 0 });
    }

    #[test]
    fn test_memory_phase_ignores_input() {
        let mut app = app();
        app.handle(UiCommand::Pick(0));
        app.handle(UiCommand::Pick(0));
        app.handle(UiCommand::Right);
        app.handle(UiCommand::Confirm);
        assert_eq!(*app.screen(), Screen::game());
        assert!(app.session().state().placed_blocks().is_empty());
    }

    #[test]
    fn test_cursor_stays_in_grid() {
        let mut app = app();
        play_easy(&mut app);
        app.handle(UiCommand::Up);
        app.handle(UiCommand::Left);
        assert_eq!(*app.screen(), Screen::game());
        app.handle(UiCommand::Right);
        app.handle(UiCommand::Right);
        app.handle(UiCommand::Down);
        app.handle(UiCommand::Down);
        assert!(matches!(*app.screen(), Screen::Game { cursor: 3, .. }));
    }

    #[test]
    fn test_fill_and_finish() {
        let mut app = app();
        play_easy(&mut app);

        app.handle(UiCommand::Finish);
        assert!(matches!(*app.screen(), Screen::Game { .. }));

        for pos in 0..4 {
            app.screen = Screen::Game {
                cursor: pos,
                selected: 0,
            };
            app.handle(UiCommand::Confirm);
        }
        assert!(app.session().state().all_filled());

        app.handle(UiCommand::Finish);
        assert_eq!(*app.screen(), Screen::Result);
        assert!(app.session().outcome().is_some());

        app.handle(UiCommand::Replay);
        assert_eq!(*app.screen(), Screen::game());
        assert_eq!(app.session().state().phase(), Phase::Memory);
    }

    #[test]
    fn test_remove_returns_block() {
        let mut app = app();
        play_easy(&mut app);
        app.handle(UiCommand::Confirm);
        assert_eq!(app.session().state().available_block_ids().len(), 3);
        app.handle(UiCommand::Remove);
        assert_eq!(app.session().state().available_block_ids().len(), 4);
    }

    #[test]
    fn test_leaving_normal_game_resets() {
        let mut app = app();
        play_easy(&mut app);
        app.handle(UiCommand::Back);
        assert_eq!(*app.screen(), Screen::default());
        assert_eq!(app.session().state().phase(), Phase::Idle);
    }

    #[test]
    fn test_result_back_to_menu() {
        let mut app = app();
        play_easy(&mut app);
        app.screen = Screen::Game {
            cursor: 0,
            selected: 0,
        };
        app.session.finish();
        app.screen = Screen::Result;
        // Not perfect in normal mode: Confirm goes home.
        app.handle(UiCommand::Confirm);
        assert_eq!(*app.screen(), Screen::default());
        assert_eq!(app.session().state().phase(), Phase::Idle);
    }

    #[test]
    fn test_settings_toggle() {
        let mut app = app();
        app.handle(UiCommand::Pick(3));
        assert_eq!(*app.screen(), Screen::Settings { selected: 0 });
        app.handle(UiCommand::Down);
        app.handle(UiCommand::Confirm);
        assert!(!app.session().settings().bgm);
        app.handle(UiCommand::Pick(2));
        assert!(!app.session().settings().instant_feedback);
        app.handle(UiCommand::Back);
        assert_eq!(*app.screen(), Screen::Menu { selected: 3 });
    }

    #[test]
    fn test_collection_scroll_clamps() {
        let mut app = app();
        app.handle(UiCommand::Pick(2));
        app.handle(UiCommand::Up);
        assert_eq!(*app.screen(), Screen::Collection { selected: 0 });
        for _ in 0..20 {
            app.handle(UiCommand::Down);
        }
        assert_eq!(*app.screen(), Screen::Collection { selected: 11 });
    }
}
