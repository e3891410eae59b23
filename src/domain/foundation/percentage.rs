//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0 and 100 inclusive.
///
/// Category scores and sport match percentages are both expressed as
/// `Percentage`, so the 0-100 bound is enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Divides `numerator` by `denominator` and rounds half up, clamping to 100.
    ///
    /// Integer-only so that `.5` boundaries round the same way on every
    /// platform. A zero denominator yields zero.
    pub fn from_ratio(numerator: u32, denominator: u32) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        let rounded = (2 * numerator + denominator) / (2 * denominator);
        Self(rounded.min(100) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(Percentage::new(63).value(), 63);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn from_ratio_rounds_half_up() {
        // 175 / 2 = 87.5
        assert_eq!(Percentage::from_ratio(175, 2).value(), 88);
        // 200 / 3 = 66.67
        assert_eq!(Percentage::from_ratio(200, 3).value(), 67);
        // 250 / 3 = 83.33
        assert_eq!(Percentage::from_ratio(250, 3).value(), 83);
        assert_eq!(Percentage::from_ratio(575, 10).value(), 58);
    }

    #[test]
    fn from_ratio_handles_degenerate_input() {
        assert_eq!(Percentage::from_ratio(10, 0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(5000, 10), Percentage::HUNDRED);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", Percentage::new(58)), "58%");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
