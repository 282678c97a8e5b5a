//! Money type for representing whole-dollar amounts
//!
//! Every amount in the calculator is rounded to whole dollars, so the
//! amount is stored as a plain `i64` count of dollars. Formatting follows
//! the en-US currency style with no fractional digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in whole US dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Money(i64);

impl Money {
    /// Largest magnitude accepted from user input: twelve digits
    ///
    /// Typed, parsed and loaded amounts are clamped to this bound, which
    /// keeps every sum the allocation engine forms far from `i64` overflow.
    pub const MAX_DOLLARS: i64 = 999_999_999_999;

    /// Create a Money amount from whole dollars
    ///
    /// # Examples
    /// ```
    /// use budget_calc::models::Money;
    /// let rent = Money::from_dollars(1333);
    /// assert_eq!(rent.to_string(), "$1,333");
    /// ```
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars)
    }

    /// Create a Money amount from untrusted input, clamped to `±MAX_DOLLARS`
    pub const fn bounded(dollars: i64) -> Self {
        if dollars > Self::MAX_DOLLARS {
            Self(Self::MAX_DOLLARS)
        } else if dollars < -Self::MAX_DOLLARS {
            Self(-Self::MAX_DOLLARS)
        } else {
            Self(dollars)
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in dollars
    pub const fn dollars(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Clamp negative amounts to zero
    pub const fn non_negative(&self) -> Self {
        if self.0 < 0 {
            Self(0)
        } else {
            *self
        }
    }

    /// Parse a typed amount, coercing anything unparseable to zero
    ///
    /// Accepts "1200", "$1,200", "1200.6" (rounded to 1201). Empty or
    /// garbage input yields `Money::zero()` rather than an error.
    pub fn parse_lenient(s: &str) -> Self {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '$')
            .collect();

        if let Ok(whole) = cleaned.parse::<i64>() {
            return Self::bounded(whole);
        }

        let max = Self::MAX_DOLLARS as f64;
        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() => Self(value.round().clamp(-max, max) as i64),
            _ => Self::zero(),
        }
    }

    /// Format without the currency symbol, with thousands separators
    pub fn format_plain(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.is_negative() {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

impl From<i64> for Money {
    fn from(dollars: i64) -> Self {
        Self::bounded(dollars)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self.abs().format_plain();
        if self.is_negative() {
            write!(f, "-${}", plain)
        } else {
            write!(f, "${}", plain)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
