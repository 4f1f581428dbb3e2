//! Key mapping from terminal events to UI commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key press, as the screens see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiCommand {
    Up,
    Down,
    Left,
    Right,
    /// Enter / space: activate the highlighted item or drop the selected block.
    Confirm,
    /// Esc: leave the current screen.
    Back,
    /// Digit `1`-`9`, zero based.
    Pick(usize),
    NextBlock,
    PrevBlock,
    Remove,
    Finish,
    Replay,
    NextLevel,
}

/// Map keyboard input to a UI command.
///
/// Only presses count; repeats and releases (reported on some platforms)
/// are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<UiCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(UiCommand::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(UiCommand::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(UiCommand::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(UiCommand::Right),

        KeyCode::Enter | KeyCode::Char(' ') => Some(UiCommand::Confirm),
        KeyCode::Esc => Some(UiCommand::Back),

        KeyCode::Char(c @ '1'..='9') => Some(UiCommand::Pick(c as usize - '1' as usize)),
        KeyCode::Tab | KeyCode::Char(']') => Some(UiCommand::NextBlock),
        KeyCode::BackTab | KeyCode::Char('[') => Some(UiCommand::PrevBlock),

        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(UiCommand::Remove)
        }
        KeyCode::Char('f') | KeyCode::Char('F') => Some(UiCommand::Finish),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiCommand::Replay),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(UiCommand::NextLevel),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
