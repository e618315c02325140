//! # Expression Evaluator
//!
//! Parsing and arithmetic are delegated to [`meval`]. This module only decides
//! what the evaluator sees:
//!
//! - cosmetic glyphs from keypad labels are rewritten to plain operators
//! - `sin`/`cos`/`tan` and their inverses are replaced with versions that
//!   honor the current [`AngleUnit`]
//! - `log`/`log10` are base 10, `ln` is the natural logarithm
//! - results that are NaN or infinite count as failures
//!
//! An [`Evaluator`] is a value parameterized by one angle unit. When the unit
//! changes, build a new one; nothing is shared or mutated globally.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::angle::AngleUnit;
//! use calc_core::evaluator::Evaluator;
//!
//! let degrees = Evaluator::new(AngleUnit::Degrees);
//! assert!((degrees.evaluate("sin(90)").unwrap() - 1.0).abs() < 1e-12);
//!
//! let radians = Evaluator::new(AngleUnit::Radians);
//! assert!((radians.evaluate("sin(pi/2)").unwrap() - 1.0).abs() < 1e-12);
//!
//! assert!(degrees.evaluate("1/0").is_err());
//! ```

use meval::{Context, Expr};

use crate::angle::AngleUnit;
use crate::errors::{CalcError, CalcResult};

/// Identifier the evaluator knows the natural logarithm by
pub const NATURAL_LOG: &str = "ln";

/// Keypad glyphs and their evaluator spelling
const GLYPHS: [(char, &str); 5] = [
    ('×', "*"),
    ('÷', "/"),
    ('−', "-"),
    ('π', "pi"),
    ('√', "sqrt"),
];

/// Evaluation capability bound to a single angle unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    angle_unit: AngleUnit,
}

impl Evaluator {
    /// Evaluator whose trig functions work in `angle_unit`
    pub fn new(angle_unit: AngleUnit) -> Self {
        Evaluator { angle_unit }
    }

    /// The unit this evaluator was built for
    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    /// Evaluate an expression to a finite number.
    ///
    /// The expression is normalized first, so display text can be passed
    /// as-is.
    pub fn evaluate(&self, expression: &str) -> CalcResult<f64> {
        let normalized = normalize(expression);

        let expr: Expr = normalized
            .parse()
            .map_err(|e: meval::Error| CalcError::invalid_expression(expression, e.to_string()))?;

        let value = expr
            .eval_with_context(self.context())
            .map_err(|e| CalcError::invalid_expression(expression, e.to_string()))?;

        if !value.is_finite() {
            return Err(CalcError::non_finite(expression, value));
        }

        Ok(value)
    }

    /// Builtin meval context with the unit-aware overrides installed
    fn context(&self) -> Context<'static> {
        let unit = self.angle_unit;
        let mut ctx = Context::new();
        ctx.func("sin", move |x: f64| unit.to_radians(x).sin())
            .func("cos", move |x: f64| unit.to_radians(x).cos())
            .func("tan", move |x: f64| unit.to_radians(x).tan())
            .func("asin", move |x: f64| unit.from_radians(x.asin()))
            .func("acos", move |x: f64| unit.from_radians(x.acos()))
            .func("atan", move |x: f64| unit.from_radians(x.atan()))
            .func("log", f64::log10)
            .func("log10", f64::log10)
            .func(NATURAL_LOG, f64::ln);
        ctx
    }
}

/// Rewrite keypad glyphs into operators the evaluator understands.
///
/// A `.` that does not follow a digit gets a leading `0` (`.5` becomes
/// `0.5`), since meval only reads numbers that start with a digit.
pub fn normalize(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len() + 1);
    let mut previous = None;
    for c in expression.chars() {
        if c == '.' && !previous.is_some_and(|p: char| p.is_ascii_digit()) {
            out.push('0');
        }
        match GLYPHS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(c),
        }
        previous = Some(c);
    }
    out
}
