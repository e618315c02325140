//! # Calculator Settings
//!
//! Startup configuration shared by the GUI and the CLI. Settings are plain
//! JSON; every field is optional and falls back to its default, so an empty
//! object `{}` is a valid settings file.
//!
//! ```json
//! {
//!   "angle_unit": "radians",
//!   "variant": "scientific",
//!   "history_capacity": 10,
//!   "precision": 14
//! }
//! ```
//!
//! Settings only seed a new [`crate::calculator::Calculator`]. Nothing the
//! calculator does at runtime is written back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::angle::AngleUnit;
use crate::errors::{CalcError, CalcResult};
use crate::format::{NumberFormat, DEFAULT_PRECISION};
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::keypad::Variant;

pub use crate::format::MAX_PRECISION;

/// Largest accepted history capacity
pub const MAX_HISTORY_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Angle unit the calculator starts in
    pub angle_unit: AngleUnit,

    /// Which keypad the front-end shows
    pub variant: Variant,

    /// Number of history entries kept
    pub history_capacity: usize,

    /// Significant digits shown for results
    pub precision: usize,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            angle_unit: AngleUnit::Degrees,
            variant: Variant::Scientific,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CalculatorSettings {
    /// Check value ranges
    pub fn validate(&self) -> CalcResult<()> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(CalcError::invalid_setting(
                "precision",
                self.precision.to_string(),
                format!("Precision must be between 1 and {MAX_PRECISION}"),
            ));
        }
        if self.history_capacity == 0 || self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(CalcError::invalid_setting(
                "history_capacity",
                self.history_capacity.to_string(),
                format!("History capacity must be between 1 and {MAX_HISTORY_CAPACITY}"),
            ));
        }
        Ok(())
    }

    /// Formatting rules derived from these settings
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::with_precision(self.precision)
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: CalculatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Load and validate a settings file.
///
/// # Example
///
/// ```rust,no_run
/// use calc_core::settings::load_settings;
/// use std::path::Path;
///
/// let settings = load_settings(Path::new("calculator.json"))?;
/// println!("starting in {}", settings.angle_unit);
/// # Ok::<(), calc_core::errors::CalcError>(())
/// ```
pub fn load_settings(path: &Path) -> CalcResult<CalculatorSettings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let settings: CalculatorSettings =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    settings.validate()?;
    Ok(settings)
}
