//! Allocation records and user overrides

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;

use super::category::{Category, ColorToken, IconToken};
use super::money::Money;

/// What an allocation entry represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationKind {
    /// One of the eight fixed categories
    Category(Category),
    /// Income left over after every category is funded
    Unallocated,
    /// Amount by which the categories exceed income
    Overspent,
}

impl AllocationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Category(category) => category.name(),
            Self::Unallocated => "Unallocated",
            Self::Overspent => "Overspent",
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            Self::Category(category) => category.color(),
            Self::Unallocated => ColorToken::UNALLOCATED,
            Self::Overspent => ColorToken::OVERSPENT,
        }
    }

    pub fn icon(&self) -> IconToken {
        match self {
            Self::Category(category) => category.icon(),
            Self::Unallocated => IconToken::DollarSign,
            Self::Overspent => IconToken::AlertCircle,
        }
    }

    /// Whether this is the synthesized Unallocated/Overspent entry
    pub fn is_balancing(&self) -> bool {
        !matches!(self, Self::Category(_))
    }

    /// The category, if this is not a balancing entry
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Category(category) => Some(*category),
            _ => None,
        }
    }
}

/// A named, colored, valued share of total income
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAllocation {
    pub kind: AllocationKind,
    /// Non-negative whole-dollar amount
    pub value: Money,
}

impl CategoryAllocation {
    pub fn new(kind: AllocationKind, value: Money) -> Self {
        Self { kind, value }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn color(&self) -> ColorToken {
        self.kind.color()
    }

    pub fn icon(&self) -> IconToken {
        self.kind.icon()
    }

    pub fn is_balancing(&self) -> bool {
        self.kind.is_balancing()
    }

    /// Value with its effect on the balance: Overspent counts negative
    pub fn signed_value(&self) -> Money {
        match self.kind {
            AllocationKind::Overspent => -self.value,
            _ => self.value,
        }
    }
}

impl Serialize for CategoryAllocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CategoryAllocation", 4)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("color", &self.color())?;
        state.serialize_field("icon", &self.icon())?;
        state.end()
    }
}

/// User-chosen values that replace computed category defaults
///
/// An absent entry means "use the computed default". Values are kept
/// verbatim: they are not re-validated when income or ratio change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    values: BTreeMap<Category, Money>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the override for a category
    pub fn set(&mut self, category: Category, value: Money) {
        self.values.insert(category, value);
    }

    pub fn get(&self, category: Category) -> Option<Money> {
        self.values.get(&category).copied()
    }

    /// Drop the override for one category, returning to its default
    pub fn remove(&mut self, category: Category) -> Option<Money> {
        self.values.remove(&category)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.values.contains_key(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.values.iter().map(|(c, v)| (*c, *v))
    }
}

impl FromIterator<(Category, Money)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (Category, Money)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
