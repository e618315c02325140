//! # Number Formatting
//!
//! Turns evaluator results into display text. Values are rounded to a fixed
//! number of significant digits, trailing zeros are dropped, and very small
//! or very large magnitudes switch to exponential notation.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::{format_number, NumberFormat};
//!
//! let fmt = NumberFormat::default();
//! assert_eq!(format_number(0.1 + 0.2, &fmt), "0.3");
//! assert_eq!(format_number(2.5e-10, &fmt), "2.5e-10");
//! assert_eq!(format_number(1e15, &fmt), "1e+15");
//! ```

use serde::{Deserialize, Serialize};

/// Default number of significant digits shown on the display
pub const DEFAULT_PRECISION: usize = 14;

/// Most significant digits an `f64` can carry
pub const MAX_PRECISION: usize = 17;

/// Formatting rules for displayed results.
///
/// A value whose decimal exponent is below `lower_exponent` or at/above
/// `upper_exponent` is written in exponential form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Significant digits kept after rounding
    pub precision: usize,
    /// Values with magnitude below 10^lower_exponent use exponential form
    pub lower_exponent: i32,
    /// Values with magnitude at or above 10^upper_exponent use exponential form
    pub upper_exponent: i32,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            precision: DEFAULT_PRECISION,
            lower_exponent: -9,
            upper_exponent: 15,
        }
    }
}

impl NumberFormat {
    /// Default thresholds with a custom precision, clamped to `1..=MAX_PRECISION`
    pub fn with_precision(precision: usize) -> Self {
        NumberFormat {
            precision: precision.clamp(1, MAX_PRECISION),
            ..NumberFormat::default()
        }
    }
}

/// Format a value for the display.
///
/// Non-finite values are never produced by a successful evaluation; they are
/// rendered with Rust's own spelling if they reach this function anyway.
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = format.precision.clamp(1, MAX_PRECISION);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_end_matches('0');

    let body = if exponent < format.lower_exponent || exponent >= format.upper_exponent {
        exponential(digits, exponent)
    } else {
        fixed(digits, exponent)
    };

    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// `d.ddde+x` from significant digits and a decimal exponent
fn exponential(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let sign = if exponent < 0 { '-' } else { '+' };
    if rest.is_empty() {
        format!("{lead}e{sign}{}", exponent.unsigned_abs())
    } else {
        format!("{lead}.{rest}e{sign}{}", exponent.unsigned_abs())
    }
}

/// Positional notation from significant digits and a decimal exponent
fn fixed(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        format!("{digits}{}", "0".repeat(int_len - digits.len()))
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}
