//! UI module for the Keypad GUI
//!
//! # Panel Structure
//! - `display` - Readout of the current expression or result, with status flags
//! - `keypad_panel` - Button grid for the configured variant
//! - `history_panel` - Recent evaluations; clicking one recalls it

pub mod display;
pub mod history_panel;
pub mod keypad_panel;
