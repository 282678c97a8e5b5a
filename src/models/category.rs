//! Spending categories
//!
//! The calculator works with a fixed set of eight categories in a fixed
//! display order. Each category carries its default share of income, a
//! color token for the chart and an icon token for the legend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// One of the eight fixed spending categories
///
/// Variant order is display order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Rent,
    Utilities,
    Groceries,
    Transportation,
    Healthcare,
    Entertainment,
    Savings,
    Miscellaneous,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::Rent,
        Category::Utilities,
        Category::Groceries,
        Category::Transportation,
        Category::Healthcare,
        Category::Entertainment,
        Category::Savings,
        Category::Miscellaneous,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Groceries => "Groceries",
            Self::Transportation => "Transportation",
            Self::Healthcare => "Healthcare",
            Self::Entertainment => "Entertainment",
            Self::Savings => "Savings",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Default share of total income in whole percent
    ///
    /// Rent has no fixed share; its default comes from the rent ratio.
    pub fn default_share_percent(&self) -> Option<i64> {
        match self {
            Self::Rent => None,
            Self::Utilities => Some(8),
            Self::Groceries => Some(12),
            Self::Transportation => Some(10),
            Self::Healthcare => Some(6),
            Self::Entertainment => Some(7),
            Self::Savings => Some(15),
            Self::Miscellaneous => Some(6),
        }
    }

    /// Chart color
    pub fn color(&self) -> ColorToken {
        match self {
            Self::Rent => ColorToken("#FF6384"),
            Self::Utilities => ColorToken("#36A2EB"),
            Self::Groceries => ColorToken("#FFCE56"),
            Self::Transportation => ColorToken("#4BC0C0"),
            Self::Healthcare => ColorToken("#9966FF"),
            Self::Entertainment => ColorToken("#FF9F40"),
            Self::Savings => ColorToken("#4CAF50"),
            Self::Miscellaneous => ColorToken("#9C27B0"),
        }
    }

    /// Legend icon
    pub fn icon(&self) -> IconToken {
        match self {
            Self::Rent => IconToken::Home,
            Self::Utilities => IconToken::Lightbulb,
            Self::Groceries => IconToken::ShoppingCart,
            Self::Transportation => IconToken::Car,
            Self::Healthcare => IconToken::Heart,
            Self::Entertainment => IconToken::Film,
            Self::Savings => IconToken::PiggyBank,
            Self::Miscellaneous => IconToken::Package,
        }
    }

    /// Position of this category in display order
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = BudgetError;

    /// Case-insensitive lookup by display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| BudgetError::unknown_category(needle))
    }
}

/// A chart color as a `#RRGGBB` hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorToken(pub &'static str);

impl ColorToken {
    pub const UNALLOCATED: ColorToken = ColorToken("#607D8B");
    pub const OVERSPENT: ColorToken = ColorToken("#F44336");

    /// The hex string, including the leading `#`
    pub fn hex(&self) -> &'static str {
        self.0
    }

    /// Decode into red, green and blue components
    ///
    /// Malformed tokens decode as mid grey.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.0.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .unwrap_or(0x80)
        };
        if hex.len() != 6 {
            return (0x80, 0x80, 0x80);
        }
        (channel(0..2), channel(2..4), channel(4..6))
    }
}

/// Icon shown next to a category in legends and tooltips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconToken {
    Home,
    Lightbulb,
    ShoppingCart,
    Car,
    Heart,
    Film,
    PiggyBank,
    Package,
    DollarSign,
    AlertCircle,
}

impl IconToken {
    /// Single-cell terminal glyph
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Lightbulb => "☼",
            Self::ShoppingCart => "⊞",
            Self::Car => "⇶",
            Self::Heart => "♥",
            Self::Film => "▶",
            Self::PiggyBank => "◍",
            Self::Package => "▣",
            Self::DollarSign => "$",
            Self::AlertCircle => "!",
        }
    }
}
