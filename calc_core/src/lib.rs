//! # calc_core - Calculator Engine
//!
//! `calc_core` is the logic behind the Keypad calculator front-ends: a small,
//! single-threaded state machine around a display string. Parsing and
//! arithmetic are delegated to the `meval` crate; this crate decides what is
//! shown, what is remembered, and how trigonometry honors the angle unit.
//!
//! ## Design Philosophy
//!
//! - **One controller**: [`Calculator`] owns all mutable state
//! - **One vocabulary**: buttons and keys both become a [`Command`]
//! - **Fail soft**: a bad expression shows the error marker, never panics
//! - **No globals**: the evaluator is a value rebuilt when the angle unit changes
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Calculator, Command, Key, command_for_key};
//!
//! let mut calc = Calculator::new();
//! for c in "12*(3+4)".chars() {
//!     if let Some(command) = command_for_key(Key::Char(c)) {
//!         calc.apply(command);
//!     }
//! }
//! calc.apply(Command::Evaluate);
//! assert_eq!(calc.display(), "84");
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - The controller and its display states
//! - [`command`] - Command vocabulary and keyboard mapping
//! - [`evaluator`] - Angle-aware wrapper around the expression evaluator
//! - [`format`] - Significant-digit result formatting
//! - [`history`] - Bounded history of evaluations
//! - [`memory`] - Memory register
//! - [`keypad`] - Basic and scientific button layouts
//! - [`settings`] - Startup configuration
//! - [`errors`] - Structured error types

pub mod angle;
pub mod calculator;
pub mod command;
pub mod errors;
pub mod evaluator;
pub mod format;
pub mod history;
pub mod keypad;
pub mod memory;
pub mod settings;
pub mod token;

// Re-export commonly used types at crate root for convenience
pub use angle::AngleUnit;
pub use calculator::{Calculator, DisplayState, ERROR_MARKER, ZERO_SENTINEL};
pub use command::{command_for_key, Command, Key};
pub use errors::{CalcError, CalcResult};
pub use keypad::{Keypad, KeypadKey, Variant};
pub use settings::{load_settings, CalculatorSettings};
pub use token::{Function, Token};
