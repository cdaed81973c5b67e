//! Keyboard bindings of the map viewer.
//!
//! Keeps the mapping from `crossterm` key events to viewer commands in one
//! place so the run loop never looks at raw key codes.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// What a key press asks the viewer to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Step the player by the given offset.
    Move { dx: i32, dy: i32 },
    ToggleFullMap,
    ToggleHallucination,
    /// Log a glyph snapshot around the player.
    Snapshot,
    /// Advance a frame without moving.
    Wait,
    None,
}

/// Converts a raw key event into a viewer command. Releases and repeats of
/// non-press kinds are ignored.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Left => step(-1, 0),
        KeyCode::Right => step(1, 0),
        KeyCode::Up => step(0, -1),
        KeyCode::Down => step(0, 1),
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(ch) => handle_char(ch),
        _ => KeyAction::None,
    }
}

fn handle_char(raw: char) -> KeyAction {
    match raw.to_ascii_lowercase() {
        'q' => KeyAction::Quit,
        'm' => KeyAction::ToggleFullMap,
        'h' => KeyAction::ToggleHallucination,
        's' => KeyAction::Snapshot,
        '.' | ' ' => KeyAction::Wait,
        _ => KeyAction::None,
    }
}

fn step(dx: i32, dy: i32) -> KeyAction {
    KeyAction::Move { dx, dy }
}
