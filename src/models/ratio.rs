//! Income-to-rent ratio
//!
//! Stored as a count of tenths so the 0.1 step is exact and the divisor
//! can never be zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ratio of total income to recommended rent, 2.0x to 4.0x in 0.1 steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct RentRatio(u8);

impl RentRatio {
    pub const MIN_TENTHS: u8 = 20;
    pub const MAX_TENTHS: u8 = 40;

    pub const MIN: RentRatio = RentRatio(Self::MIN_TENTHS);
    pub const MAX: RentRatio = RentRatio(Self::MAX_TENTHS);

    /// Build from a count of tenths, clamped into range
    pub fn from_tenths(tenths: i64) -> Self {
        let clamped = tenths.clamp(Self::MIN_TENTHS as i64, Self::MAX_TENTHS as i64);
        Self(clamped as u8)
    }

    /// Build from a decimal value, snapped to the nearest 0.1 and clamped
    pub fn from_value(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self::from_tenths((value * 10.0).round() as i64)
    }

    /// The ratio in tenths (20..=40)
    pub const fn tenths(&self) -> u8 {
        self.0
    }

    /// The ratio as a decimal value
    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// One step (0.1) higher, saturating at the maximum
    pub fn step_up(&self) -> Self {
        Self::from_tenths(i64::from(self.0) + 1)
    }

    /// One step (0.1) lower, saturating at the minimum
    pub fn step_down(&self) -> Self {
        Self::from_tenths(i64::from(self.0) - 1)
    }
}

impl Default for RentRatio {
    /// 3.0x, the safer budgeting default
    fn default() -> Self {
        Self(30)
    }
}

impl From<f64> for RentRatio {
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}

impl From<RentRatio> for f64 {
    fn from(ratio: RentRatio) -> Self {
        ratio.value()
    }
}

impl fmt::Display for RentRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}x", self.0 / 10, self.0 % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapping_and_clamping() {
        assert_eq!(RentRatio::from_value(3.0).tenths(), 30);
        assert_eq!(RentRatio::from_value(2.96).tenths(), 30);
        assert_eq!(RentRatio::from_value(1.0), RentRatio::MIN);
        assert_eq!(RentRatio::from_value(9.5), RentRatio::MAX);
        assert_eq!(RentRatio::from_value(f64::NAN), RentRatio::default());
    }

    #[test]
    fn test_steps_saturate() {
        assert_eq!(RentRatio::MAX.step_up(), RentRatio::MAX);
        assert_eq!(RentRatio::MIN.step_down(), RentRatio::MIN);
        assert_eq!(RentRatio::default().step_up().tenths(), 31);
    }

    #[test]
    fn test_display() {
        assert_eq!(RentRatio::default().to_string(), "3.0x");
        assert_eq!(RentRatio::from_value(2.5).to_string(), "2.5x");
        assert_eq!(RentRatio::MAX.to_string(), "4.0x");
    }

    #[test]
    fn test_serde_as_decimal() {
        let json = serde_json::to_string(&RentRatio::from_value(2.7)).unwrap();
        assert_eq!(json, "2.7");
        let ratio: RentRatio = serde_json::from_str("3.4").unwrap();
        assert_eq!(ratio.tenths(), 34);
    }
}
