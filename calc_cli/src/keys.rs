//! Crossterm key events to TUI actions.
//!
//! Typed keys go through [`calc_core::command_for_key`], the same mapping the
//! GUI uses. The TUI adds its own navigation on top: arrows move the keypad
//! focus, Space presses the focused key, F1-F10 recall history entries.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use calc_core::{command_for_key, Command, Key};

/// What a key press asks the TUI to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Forward to the calculator
    Calculator(Command),
    /// Move keypad focus by (rows, columns)
    MoveFocus(i32, i32),
    /// Press the focused keypad key
    Activate,
    Quit,
    /// Not ours; ignore
    None,
}

/// Reduce a crossterm event to the platform-neutral key
pub fn to_key(event: &KeyEvent) -> Key {
    if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return Key::Other;
    }
    match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    }
}

/// Map a key event to a TUI action
pub fn action_for(event: KeyEvent) -> UiAction {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c' | 'q') => UiAction::Quit,
            _ => UiAction::None,
        };
    }

    match event.code {
        KeyCode::Char('q') => UiAction::Quit,
        KeyCode::Char(' ') => UiAction::Activate,
        KeyCode::Up => UiAction::MoveFocus(-1, 0),
        KeyCode::Down => UiAction::MoveFocus(1, 0),
        KeyCode::Left => UiAction::MoveFocus(0, -1),
        KeyCode::Right => UiAction::MoveFocus(0, 1),
        KeyCode::F(n @ 1..=10) => UiAction::Calculator(Command::RecallHistory(usize::from(n - 1))),
        _ => match command_for_key(to_key(&event)) {
            Some(command) => UiAction::Calculator(command),
            None => UiAction::None,
        },
    }
}
