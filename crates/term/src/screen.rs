//! Navigation state of the terminal front-end.
//!
//! The game state lives in the session; a [`Screen`] only carries what the
//! view needs on top of it (highlighted menu row, grid cursor, tray
//! selection).

use crate::types::CellIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Normal,
    Challenge,
    Collection,
    Settings,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Normal,
        MenuItem::Challenge,
        MenuItem::Collection,
        MenuItem::Settings,
        MenuItem::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Normal => "Normal Mode",
            MenuItem::Challenge => "Challenge Mode",
            MenuItem::Collection => "Card Collection",
            MenuItem::Settings => "Settings",
            MenuItem::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu { selected: usize },
    Difficulty { selected: usize },
    /// `selected` indexes the tray of available blocks in shuffled order.
    Game { cursor: CellIndex, selected: usize },
    Result,
    Collection { selected: usize },
    Settings { selected: usize },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Menu { selected: 0 }
    }
}

impl Screen {
    pub fn game() -> Self {
        Screen::Game {
            cursor: 0,
            selected: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu { .. } => "menu",
            Screen::Difficulty { .. } => "difficulty",
            Screen::Game { .. } => "game",
            Screen::Result => "result",
            Screen::Collection { .. } => "collection",
            Screen::Settings { .. } => "settings",
        }
    }
}

/// Move a row selection by `delta`, wrapping within `len` rows.
pub fn step(selected: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((selected as isize + delta).rem_euclid(len)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps() {
        assert_eq!(step(0, 5, -1), 4);
        assert_eq!(step(4, 5, 1), 0);
        assert_eq!(step(2, 5, 1), 3);
        assert_eq!(step(3, 0, 1), 0);
    }
}
