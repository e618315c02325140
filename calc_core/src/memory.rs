//! # Memory Register
//!
//! A single optional accumulator. It starts empty, is filled by the first
//! add or subtract (an empty register counts as zero), and is emptied again
//! by an explicit clear. The stored value is always finite: an update that
//! would overflow is refused and leaves the register as it was.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memory(Option<f64>);

impl Memory {
    pub fn new() -> Self {
        Memory(None)
    }

    /// Stored value, if any
    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Add to the register; returns `false` and changes nothing if the sum
    /// is not finite
    pub fn add(&mut self, amount: f64) -> bool {
        self.store(self.0.unwrap_or(0.0) + amount)
    }

    /// Subtract from the register; same overflow rule as [`Memory::add`]
    pub fn subtract(&mut self, amount: f64) -> bool {
        self.store(self.0.unwrap_or(0.0) - amount)
    }

    fn store(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.0 = Some(value);
        true
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let memory = Memory::new();
        assert!(!memory.is_set());
        assert_eq!(memory.value(), None);
    }

    #[test]
    fn test_accumulates() {
        let mut memory = Memory::new();
        memory.add(5.0);
        memory.add(3.0);
        assert_eq!(memory.value(), Some(8.0));
        memory.subtract(10.0);
        assert_eq!(memory.value(), Some(-2.0));
    }

    #[test]
    fn test_subtract_from_empty() {
        let mut memory = Memory::new();
        memory.subtract(4.0);
        assert_eq!(memory.value(), Some(-4.0));
    }

    #[test]
    fn test_overflow_is_refused() {
        let mut memory = Memory::new();
        assert!(memory.add(f64::MAX));
        assert!(!memory.add(f64::MAX));
        assert_eq!(memory.value(), Some(f64::MAX));

        assert!(memory.subtract(f64::MAX));
        assert!(memory.subtract(f64::MAX));
        assert!(!memory.subtract(f64::MAX));
        assert_eq!(memory.value(), Some(-f64::MAX));
    }

    #[test]
    fn test_non_finite_amount_is_refused() {
        let mut memory = Memory::new();
        assert!(!memory.add(f64::NAN));
        assert!(!memory.is_set());
    }

    #[test]
    fn test_clear() {
        let mut memory = Memory::new();
        memory.add(1.0);
        memory.clear();
        assert_eq!(memory, Memory::new());
    }

    #[test]
    fn test_serialization() {
        let mut memory = Memory::new();
        assert_eq!(serde_json::to_string(&memory).unwrap(), "null");
        memory.add(2.5);
        assert_eq!(serde_json::to_string(&memory).unwrap(), "2.5");
    }
}
