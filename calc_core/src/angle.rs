//! # Angle Units
//!
//! The unit trig functions work in. The unit never changes what is on the
//! display; it only changes how `sin`/`cos`/`tan` read their argument and
//! how `asin`/`acos`/`atan` report their result at evaluation time.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::angle::AngleUnit;
//!
//! let unit = AngleUnit::Degrees;
//! assert!((unit.to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
//! assert_eq!(unit.toggled(), AngleUnit::Radians);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit used to interpret trigonometric arguments and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// The other unit
    pub fn toggled(self) -> Self {
        match self {
            AngleUnit::Degrees => AngleUnit::Radians,
            AngleUnit::Radians => AngleUnit::Degrees,
        }
    }

    /// Convert an angle expressed in this unit to radians
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Radians => angle,
        }
    }

    /// Convert an angle in radians to this unit
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => radians.to_degrees(),
            AngleUnit::Radians => radians,
        }
    }

    /// Short label for toggle keys and status lines
    pub fn label(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "DEG",
            AngleUnit::Radians => "RAD",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
