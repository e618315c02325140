//! # Keypad Layouts
//!
//! Button grids for the two calculator versions. Each key carries the
//! [`Command`] it sends, so a front-end only has to draw the rows and forward
//! whatever key was activated.
//!
//! Basic layout:
//!
//! ```text
//! [ AC ] [ DEL ] [ . ] [ ÷ ]
//! [ 7  ] [ 8   ] [ 9 ] [ × ]
//! [ 4  ] [ 5   ] [ 6 ] [ − ]
//! [ 1  ] [ 2   ] [ 3 ] [ + ]
//! [ 0  ] [ =         ]
//! ```
//!
//! The scientific layout puts three rows of function, toggle and memory keys
//! on top of the basic grid. Trig key labels follow the shift flag and the
//! angle-unit key shows the current unit.

use serde::{Deserialize, Serialize};

use crate::angle::AngleUnit;
use crate::command::Command;
use crate::token::{Function, Token};

/// Which calculator version a front-end presents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Basic,
    #[default]
    Scientific,
}

/// A single key on the keypad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadKey {
    label: &'static str,
    command: Command,
}

impl KeypadKey {
    fn new(label: &'static str, command: Command) -> Self {
        KeypadKey { label, command }
    }

    /// Key inserting its own label
    fn literal(label: &'static str) -> Self {
        KeypadKey::new(label, Command::Insert(Token::from(label)))
    }

    /// Key inserting `text` under a different label
    fn inserting(label: &'static str, token: impl Into<Token>) -> Self {
        KeypadKey::new(label, Command::Insert(token.into()))
    }

    fn trig(function: Function) -> Self {
        KeypadKey::new(function.name(), Command::Trig(function))
    }

    /// Label to draw, given the current shift flag and angle unit
    pub fn label(&self, shift: bool, angle_unit: AngleUnit) -> &'static str {
        match &self.command {
            Command::Trig(function) if shift => function.inverse().unwrap_or(*function).name(),
            Command::ToggleAngleUnit => angle_unit.label(),
            _ => self.label,
        }
    }

    /// Command sent when the key is activated
    pub fn command(&self) -> &Command {
        &self.command
    }
}

/// Rows of keys for one variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    variant: Variant,
    rows: Vec<Vec<KeypadKey>>,
}

impl Keypad {
    /// Layout for the given variant
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Basic => Keypad::basic(),
            Variant::Scientific => Keypad::scientific(),
        }
    }

    /// Arithmetic-only keypad
    pub fn basic() -> Self {
        Keypad {
            variant: Variant::Basic,
            rows: basic_rows(),
        }
    }

    /// Keypad with functions, toggles and memory keys
    pub fn scientific() -> Self {
        let mut rows = vec![
            vec![
                KeypadKey::new("INV", Command::ToggleShift),
                KeypadKey::new("DEG", Command::ToggleAngleUnit),
                KeypadKey::new("MC", Command::MemoryClear),
                KeypadKey::new("MR", Command::MemoryRecall),
                KeypadKey::new("M+", Command::MemoryAdd),
                KeypadKey::new("M−", Command::MemorySubtract),
            ],
            vec![
                KeypadKey::trig(Function::Sin),
                KeypadKey::trig(Function::Cos),
                KeypadKey::trig(Function::Tan),
                KeypadKey::literal("("),
                KeypadKey::literal(")"),
            ],
            vec![
                KeypadKey::inserting("log", Function::Log),
                KeypadKey::inserting("ln", Function::Ln),
                KeypadKey::inserting("log10", Function::Log10),
                KeypadKey::inserting("√", Function::Sqrt),
                KeypadKey::literal("π"),
                KeypadKey::literal("^"),
            ],
        ];
        rows.extend(basic_rows());

        Keypad {
            variant: Variant::Scientific,
            rows,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn rows(&self) -> &[Vec<KeypadKey>] {
        &self.rows
    }

    /// All keys, row by row
    pub fn keys(&self) -> impl Iterator<Item = &KeypadKey> {
        self.rows.iter().flatten()
    }

    /// Find a key by its unshifted label
    pub fn find(&self, label: &str) -> Option<&KeypadKey> {
        self.keys().find(|key| key.label == label)
    }
}

fn basic_rows() -> Vec<Vec<KeypadKey>> {
    vec![
        vec![
            KeypadKey::new("AC", Command::ClearAll),
            KeypadKey::new("DEL", Command::DeleteOne),
            KeypadKey::literal("."),
            KeypadKey::literal("÷"),
        ],
        vec![
            KeypadKey::literal("7"),
            KeypadKey::literal("8"),
            KeypadKey::literal("9"),
            KeypadKey::literal("×"),
        ],
        vec![
            KeypadKey::literal("4"),
            KeypadKey::literal("5"),
            KeypadKey::literal("6"),
            KeypadKey::literal("−"),
        ],
        vec![
            KeypadKey::literal("1"),
            KeypadKey::literal("2"),
            KeypadKey::literal("3"),
            KeypadKey::literal("+"),
        ],
        vec![
            KeypadKey::literal("0"),
            KeypadKey::new("=", Command::Evaluate),
        ],
    ]
}
