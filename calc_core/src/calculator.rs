//! # Calculator Controller
//!
//! [`Calculator`] owns every piece of mutable calculator state and is the
//! only thing that changes it. Front-ends feed it commands and redraw from
//! its accessors afterwards.
//!
//! ## Display states
//!
//! ```text
//!            insert / clear / delete / evaluate ok
//!          ┌──────────────────────────────────────┐
//!          ▼                                      │
//!     ┌──────────┐   evaluate fails   ┌───────┐   │
//!     │ Entering │ ─────────────────► │ Error │ ──┘
//!     └──────────┘                    └───────┘
//! ```
//!
//! The display is never empty. It holds the zero sentinel after a clear,
//! the error marker after a failed evaluation, and otherwise the text typed
//! so far or the last formatted result. Typing over the sentinel or the
//! error marker replaces it.
//!
//! ## Failure contracts
//!
//! - [`Calculator::evaluate_expression`] never fails: evaluator errors turn
//!   into the error marker and history is left alone.
//! - [`Calculator::memory_add`] and [`Calculator::memory_subtract`] ignore
//!   evaluator errors and overflowing sums entirely; memory is left unchanged.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculator::Calculator;
//! use calc_core::token::Function;
//!
//! let mut calc = Calculator::new();
//! calc.insert(Function::Sin);
//! calc.insert("90");
//! calc.insert(")");
//! calc.evaluate_expression();
//! assert_eq!(calc.display(), "1");
//! assert_eq!(calc.history().len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::angle::AngleUnit;
use crate::command::Command;
use crate::errors::CalcResult;
use crate::evaluator::Evaluator;
use crate::format::{format_number, NumberFormat};
use crate::history::History;
use crate::memory::Memory;
use crate::settings::CalculatorSettings;
use crate::token::{Function, Token};

/// Display value after a clear
pub const ZERO_SENTINEL: &str = "0";

/// Display value after a failed evaluation
pub const ERROR_MARKER: &str = "Error";

/// Which of the two display states the calculator is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    Entering,
    Error,
}

/// Calculator state and the operations that change it
#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    angle_unit: AngleUnit,
    shift: bool,
    history: History,
    memory: Memory,
    evaluator: Evaluator,
    number_format: NumberFormat,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

impl Calculator {
    /// Calculator with default settings: degrees, no shift, empty history,
    /// empty memory, `"0"` on the display
    pub fn new() -> Self {
        Calculator::with_settings(&CalculatorSettings::default())
    }

    /// Calculator seeded from settings
    pub fn with_settings(settings: &CalculatorSettings) -> Self {
        Calculator {
            display: ZERO_SENTINEL.to_string(),
            angle_unit: settings.angle_unit,
            shift: false,
            history: History::with_capacity(settings.history_capacity),
            memory: Memory::new(),
            evaluator: Evaluator::new(settings.angle_unit),
            number_format: settings.number_format(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> DisplayState {
        if self.display == ERROR_MARKER {
            DisplayState::Error
        } else {
            DisplayState::Entering
        }
    }

    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn memory(&self) -> Option<f64> {
        self.memory.value()
    }

    /// Evaluator bound to the current angle unit
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    // ========================================================================
    // Display editing
    // ========================================================================

    /// Insert a token: replace the sentinel or error marker, append otherwise.
    ///
    /// Function tokens contribute `name(`. Nothing is validated here.
    pub fn insert(&mut self, token: impl Into<Token>) {
        let text = token.into().text();
        self.insert_text(&text);
    }

    fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.is_replaceable() {
            self.display = text.to_string();
        } else {
            self.display.push_str(text);
        }
        trace!(display = %self.display, "inserted {text:?}");
    }

    fn is_replaceable(&self) -> bool {
        self.display == ZERO_SENTINEL || self.display == ERROR_MARKER
    }

    /// Reset the display to the zero sentinel
    pub fn clear_all(&mut self) {
        self.display = ZERO_SENTINEL.to_string();
    }

    /// Remove the last character, falling back to the zero sentinel
    pub fn delete_one(&mut self) {
        if self.display == ERROR_MARKER || self.display.chars().count() <= 1 {
            self.display = ZERO_SENTINEL.to_string();
        } else {
            self.display.pop();
        }
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the display.
    ///
    /// On success the formatted result replaces the display and the pair
    /// `(previous display, result)` is recorded in history. On failure the
    /// display becomes the error marker. The returned value is the outcome
    /// for callers that want to log or inspect it; the calculator state is
    /// already updated either way.
    pub fn evaluate_expression(&mut self) -> CalcResult<f64> {
        let expression = self.display.clone();
        match self.evaluator.evaluate(&expression) {
            Ok(value) => {
                let result = format_number(value, &self.number_format);
                debug!(%expression, %result, unit = %self.angle_unit, "evaluated");
                self.history.record(expression, result.clone());
                self.display = result;
                Ok(value)
            }
            Err(err) => {
                debug!(%expression, error = %err, "evaluation failed");
                self.display = ERROR_MARKER.to_string();
                Err(err)
            }
        }
    }

    // ========================================================================
    // Angle unit and shift
    // ========================================================================

    /// Switch the angle unit; the display text is untouched
    pub fn set_angle_unit(&mut self, unit: AngleUnit) {
        if unit != self.angle_unit {
            self.angle_unit = unit;
            self.evaluator = Evaluator::new(unit);
            debug!(%unit, "angle unit changed");
        }
    }

    pub fn toggle_angle_unit(&mut self) {
        self.set_angle_unit(self.angle_unit.toggled());
    }

    pub fn toggle_shift(&mut self) {
        self.shift = !self.shift;
    }

    /// Function a trig key inserts right now
    pub fn trig_function(&self, base: Function) -> Function {
        if self.shift {
            base.inverse().unwrap_or(base)
        } else {
            base
        }
    }

    // ========================================================================
    // Memory
    // ========================================================================

    /// Add the value of the display to memory; no-op if it does not evaluate
    pub fn memory_add(&mut self) {
        if let Some(value) = self.evaluate_for_memory() {
            if !self.memory.add(value) {
                debug!(value, "memory add would overflow; skipped");
            }
        }
    }

    /// Subtract the value of the display from memory; no-op if it does not evaluate
    pub fn memory_subtract(&mut self) {
        if let Some(value) = self.evaluate_for_memory() {
            if !self.memory.subtract(value) {
                debug!(value, "memory subtract would overflow; skipped");
            }
        }
    }

    fn evaluate_for_memory(&self) -> Option<f64> {
        match self.evaluator.evaluate(&self.display) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(display = %self.display, error = %err, "memory update skipped");
                None
            }
        }
    }

    /// Insert the stored value, if any, using the insert rule
    pub fn memory_recall(&mut self) {
        if let Some(value) = self.memory.value() {
            let text = format_number(value, &self.number_format);
            self.insert_text(&text);
        }
    }

    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Insert the result of a history entry (0 = most recent)
    pub fn recall_history(&mut self, index: usize) {
        if let Some(entry) = self.history.recent(index) {
            let text = entry.result.clone();
            self.insert_text(&text);
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Run a command from a button or key press
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Insert(token) => self.insert(token),
            Command::Trig(base) => self.insert(self.trig_function(base)),
            Command::ClearAll => self.clear_all(),
            Command::DeleteOne => self.delete_one(),
            Command::Evaluate => {
                // Failure is already reflected on the display.
                let _ = self.evaluate_expression();
            }
            Command::MemoryAdd => self.memory_add(),
            Command::MemorySubtract => self.memory_subtract(),
            Command::MemoryRecall => self.memory_recall(),
            Command::MemoryClear => self.memory_clear(),
            Command::ToggleAngleUnit => self.toggle_angle_unit(),
            Command::ToggleShift => self.toggle_shift(),
            Command::RecallHistory(index) => self.recall_history(index),
            Command::ClearHistory => self.clear_history(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{command_for_key, Key};

    fn calc_with(display: &str) -> Calculator {
        let mut calc = Calculator::new();
        calc.insert(display);
        calc
    }

    fn evaluate(display: &str) -> Calculator {
        let mut calc = calc_with(display);
        let _ = calc.evaluate_expression();
        calc
    }

    // ===== Defaults =====

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), ZERO_SENTINEL);
        assert_eq!(calc.state(), DisplayState::Entering);
        assert_eq!(calc.angle_unit(), AngleUnit::Degrees);
        assert!(!calc.shift());
        assert!(calc.history().is_empty());
        assert_eq!(calc.memory(), None);
    }

    #[test]
    fn test_settings_seed_state() {
        let settings = CalculatorSettings {
            angle_unit: AngleUnit::Radians,
            history_capacity: 2,
            ..CalculatorSettings::default()
        };
        let calc = Calculator::with_settings(&settings);
        assert_eq!(calc.angle_unit(), AngleUnit::Radians);
        assert_eq!(calc.evaluator().angle_unit(), AngleUnit::Radians);
        assert_eq!(calc.history().capacity(), 2);
    }

    #[test]
    fn test_unvalidated_precision_is_bounded() {
        let settings = CalculatorSettings {
            precision: usize::MAX,
            ..CalculatorSettings::default()
        };
        let mut calc = Calculator::with_settings(&settings);
        calc.insert("1/4");
        let _ = calc.evaluate_expression();
        assert_eq!(calc.display(), "0.25");
    }

    // ===== Insert =====

    #[test]
    fn test_insert_replaces_sentinel_then_appends() {
        let mut calc = Calculator::new();
        calc.insert('1');
        calc.insert('2');
        calc.insert('+');
        assert_eq!(calc.display(), "12+");
    }

    #[test]
    fn test_insert_function_adds_paren() {
        let mut calc = Calculator::new();
        calc.insert(Function::Sqrt);
        calc.insert('9');
        assert_eq!(calc.display(), "sqrt(9");
    }

    #[test]
    fn test_insert_replaces_error_marker() {
        let mut calc = evaluate("1/0");
        assert_eq!(calc.state(), DisplayState::Error);
        calc.insert('5');
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.state(), DisplayState::Entering);
    }

    #[test]
    fn test_insert_empty_keeps_display() {
        let mut calc = Calculator::new();
        calc.insert("");
        assert_eq!(calc.display(), ZERO_SENTINEL);
    }

    #[test]
    fn test_insert_is_not_validated() {
        let mut calc = Calculator::new();
        calc.insert(")");
        calc.insert("+");
        calc.insert("*");
        assert_eq!(calc.display(), ")+*");
    }

    #[test]
    fn test_typed_leading_decimal_point() {
        let mut calc = Calculator::new();
        for c in ".5+1".chars() {
            if let Some(command) = command_for_key(Key::Char(c)) {
                calc.apply(command);
            }
        }
        assert_eq!(calc.display(), ".5+1");
        calc.apply(Command::Evaluate);
        assert_eq!(calc.display(), "1.5");
        assert_eq!(calc.history().last().unwrap().expression, ".5+1");
    }

    // ===== Clear / delete =====

    #[test]
    fn test_clear_all_idempotent() {
        let mut calc = calc_with("123");
        calc.clear_all();
        assert_eq!(calc.display(), ZERO_SENTINEL);
        calc.clear_all();
        assert_eq!(calc.display(), ZERO_SENTINEL);
    }

    #[test]
    fn test_clear_all_keeps_other_state() {
        let mut calc = evaluate("2+2");
        calc.memory_add();
        calc.toggle_angle_unit();
        calc.clear_all();
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.memory(), Some(4.0));
        assert_eq!(calc.angle_unit(), AngleUnit::Radians);
    }

    #[test]
    fn test_delete_one() {
        let mut calc = calc_with("12");
        calc.delete_one();
        assert_eq!(calc.display(), "1");
        calc.delete_one();
        assert_eq!(calc.display(), ZERO_SENTINEL);
        calc.delete_one();
        assert_eq!(calc.display(), ZERO_SENTINEL);
    }

    #[test]
    fn test_delete_one_handles_multibyte_glyphs() {
        let mut calc = calc_with("6×");
        calc.delete_one();
        assert_eq!(calc.display(), "6");
    }

    #[test]
    fn test_delete_one_on_error_marker() {
        let mut calc = evaluate("2+");
        calc.delete_one();
        assert_eq!(calc.display(), ZERO_SENTINEL);
    }

    // ===== Evaluate =====

    #[test]
    fn test_evaluate_success_records_history() {
        let calc = evaluate("2+2");
        assert_eq!(calc.display(), "4");
        let entry = calc.history().last().unwrap();
        assert_eq!(entry.expression, "2+2");
        assert_eq!(entry.result, "4");
    }

    #[test]
    fn test_evaluate_failure_sets_marker() {
        for input in ["1/0", "2+*2", "sin(", "asin(2)", "foo"] {
            let calc = evaluate(input);
            assert_eq!(calc.display(), ERROR_MARKER, "input {input}");
            assert!(calc.history().is_empty(), "input {input}");
        }
    }

    #[test]
    fn test_evaluate_returns_outcome() {
        let mut calc = calc_with("6×7");
        assert_eq!(calc.evaluate_expression(), Ok(42.0));

        let mut calc = calc_with("1/0");
        let err = calc.evaluate_expression().unwrap_err();
        assert_eq!(err.error_code(), "NON_FINITE_RESULT");
    }

    #[test]
    fn test_evaluate_glyphs() {
        assert_eq!(evaluate("8÷2−1").display(), "3");
        assert_eq!(evaluate("2×π").display(), "6.2831853071796");
    }

    #[test]
    fn test_error_exits_on_successful_evaluation() {
        let mut calc = evaluate("1/0");
        calc.clear_all();
        calc.insert("3*3");
        let _ = calc.evaluate_expression();
        assert_eq!(calc.display(), "9");
        assert_eq!(calc.state(), DisplayState::Entering);
    }

    #[test]
    fn test_result_can_be_extended() {
        let mut calc = evaluate("2+2");
        calc.insert("*2");
        let _ = calc.evaluate_expression();
        assert_eq!(calc.display(), "8");
        assert_eq!(calc.history().last().unwrap().expression, "4*2");
    }

    #[test]
    fn test_history_bounded() {
        let mut calc = Calculator::new();
        for i in 1..=12 {
            calc.clear_all();
            calc.insert(format!("{i}+0").as_str());
            let _ = calc.evaluate_expression();
        }
        assert_eq!(calc.history().len(), 10);
        assert_eq!(calc.history().iter().next().unwrap().expression, "3+0");
        assert_eq!(calc.history().last().unwrap().expression, "12+0");
    }

    // ===== Angle units =====

    #[test]
    fn test_sin_degrees_and_radians() {
        assert_eq!(evaluate("sin(90)").display(), "1");

        let mut calc = Calculator::new();
        calc.set_angle_unit(AngleUnit::Radians);
        calc.insert("sin(pi/2)");
        let _ = calc.evaluate_expression();
        assert_eq!(calc.display(), "1");
    }

    #[test]
    fn test_inverse_trig_in_degrees() {
        assert_eq!(evaluate("asin(1)").display(), "90");
        assert_eq!(evaluate("atan(1)").display(), "45");
    }

    #[test]
    fn test_toggle_unit_keeps_display() {
        let mut calc = calc_with("sin(90");
        calc.toggle_angle_unit();
        assert_eq!(calc.display(), "sin(90");
        assert_eq!(calc.evaluator().angle_unit(), AngleUnit::Radians);
        calc.insert(')');
        let _ = calc.evaluate_expression();
        assert_eq!(calc.display(), "0.89399666360056");
    }

    // ===== Shift =====

    #[test]
    fn test_shift_selects_inverse() {
        let mut calc = Calculator::new();
        calc.apply(Command::Trig(Function::Cos));
        assert_eq!(calc.display(), "cos(");

        calc.clear_all();
        calc.apply(Command::ToggleShift);
        calc.apply(Command::Trig(Function::Cos));
        assert_eq!(calc.display(), "acos(");
        assert_eq!(calc.trig_function(Function::Ln), Function::Ln);
    }

    // ===== Memory =====

    #[test]
    fn test_memory_sequence() {
        let mut calc = calc_with("5");
        calc.memory_clear();
        calc.memory_add();
        assert_eq!(calc.memory(), Some(5.0));

        calc.clear_all();
        calc.insert('3');
        calc.memory_add();
        assert_eq!(calc.memory(), Some(8.0));

        calc.clear_all();
        calc.memory_recall();
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn test_memory_subtract() {
        let mut calc = calc_with("2*5");
        calc.memory_subtract();
        assert_eq!(calc.memory(), Some(-10.0));
        assert_eq!(calc.display(), "2*5");
    }

    #[test]
    fn test_memory_failure_is_silent() {
        let mut calc = calc_with("4");
        calc.memory_add();
        calc.insert("+");
        calc.memory_add();
        assert_eq!(calc.memory(), Some(4.0));
        assert_eq!(calc.display(), "4+");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_memory_overflow_leaves_memory_unchanged() {
        let mut calc = calc_with("10^308");
        calc.memory_add();
        let stored = calc.memory();
        assert!(stored.is_some_and(f64::is_finite));

        calc.memory_add();
        assert_eq!(calc.memory(), stored);

        calc.clear_all();
        calc.memory_recall();
        assert_eq!(calc.display(), "1e+308");
    }

    #[test]
    fn test_memory_recall_appends_and_noops_when_empty() {
        let mut calc = calc_with("2+");
        calc.memory_recall();
        assert_eq!(calc.display(), "2+");

        calc.clear_all();
        calc.insert("7");
        calc.memory_add();
        calc.clear_all();
        calc.insert("2+");
        calc.memory_recall();
        assert_eq!(calc.display(), "2+7");
    }

    #[test]
    fn test_memory_clear() {
        let mut calc = calc_with("1");
        calc.memory_add();
        calc.memory_clear();
        assert_eq!(calc.memory(), None);
    }

    // ===== History recall =====

    #[test]
    fn test_recall_history() {
        let mut calc = evaluate("2+2");
        calc.clear_all();
        calc.insert("3*3");
        let _ = calc.evaluate_expression();

        calc.clear_all();
        calc.apply(Command::RecallHistory(1));
        assert_eq!(calc.display(), "4");
        calc.apply(Command::Insert(Token::from('+')));
        calc.apply(Command::RecallHistory(0));
        assert_eq!(calc.display(), "4+9");

        calc.apply(Command::RecallHistory(5));
        assert_eq!(calc.display(), "4+9");

        calc.apply(Command::ClearHistory);
        assert!(calc.history().is_empty());
    }

    // ===== Dispatch =====

    #[test]
    fn test_apply_evaluate_and_delete() {
        let mut calc = Calculator::new();
        for c in "12*3".chars() {
            calc.apply(Command::Insert(Token::from(c)));
        }
        calc.apply(Command::DeleteOne);
        calc.apply(Command::Insert(Token::from('4')));
        calc.apply(Command::Evaluate);
        assert_eq!(calc.display(), "48");
        calc.apply(Command::ClearAll);
        assert_eq!(calc.display(), ZERO_SENTINEL);
    }
}
