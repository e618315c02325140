//! # Command Vocabulary
//!
//! Everything a front-end can ask the calculator to do. Button presses and
//! physical key presses are both turned into a [`Command`] and handed to
//! [`crate::calculator::Calculator::apply`], so the two input paths cannot
//! drift apart.
//!
//! Keyboard events are first reduced to the platform-neutral [`Key`] by the
//! front-end, then mapped here by [`command_for_key`]. A `Some` result means
//! the key was recognized and the host should suppress its default handling.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::command::{command_for_key, Command, Key};
//! use calc_core::token::Token;
//!
//! assert_eq!(command_for_key(Key::Char('7')), Some(Command::Insert(Token::from('7'))));
//! assert_eq!(command_for_key(Key::Char('=')), Some(Command::Evaluate));
//! assert_eq!(command_for_key(Key::Escape), Some(Command::ClearAll));
//! assert_eq!(command_for_key(Key::Char('x')), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::token::{Function, Token};

/// A single request to the calculator controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "arg", rename_all = "snake_case")]
pub enum Command {
    /// Replace the sentinel/error marker with the token, or append it
    Insert(Token),
    /// Trig key: inserts the function or its inverse depending on shift
    Trig(Function),
    ClearAll,
    DeleteOne,
    Evaluate,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
    ToggleAngleUnit,
    ToggleShift,
    /// Insert the result of a history entry (index into most-recent-first view)
    RecallHistory(usize),
    ClearHistory,
}

/// Platform-neutral key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
    /// Any key the calculator does not care about
    Other,
}

/// Characters typed on a keyboard that go straight into the expression
pub fn is_insertable(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '(' | ')' | '+' | '-' | '*' | '/' | '^')
}

/// Map a key press to a command.
///
/// Returns `None` for keys the calculator ignores; the host should leave
/// those to their default behavior.
pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::Char('=') | Key::Enter => Some(Command::Evaluate),
        Key::Char(c) if is_insertable(c) => Some(Command::Insert(Token::from(c))),
        Key::Backspace => Some(Command::DeleteOne),
        Key::Escape => Some(Command::ClearAll),
        Key::Char(_) | Key::Other => None,
    }
}
