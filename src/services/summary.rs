//! Budget summary
//!
//! Splits an allocation list into the eight main categories and the
//! balancing entry, for the summary card and the advanced view banner.

use serde::Serialize;

use crate::models::{CategoryAllocation, Money};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub total_income: Money,
    /// The fixed categories, in display order
    pub main_categories: Vec<CategoryAllocation>,
    /// The Unallocated/Overspent entry, if any
    pub balancing: Option<CategoryAllocation>,
    /// Sum of the main categories
    pub allocated_total: Money,
    /// `total_income - allocated_total`; negative when overspent
    pub remaining: Money,
}

impl BudgetSummary {
    pub fn from_allocations(allocations: &[CategoryAllocation], total_income: Money) -> Self {
        let main_categories: Vec<CategoryAllocation> = allocations
            .iter()
            .filter(|a| !a.is_balancing())
            .copied()
            .collect();
        let balancing = allocations.iter().find(|a| a.is_balancing()).copied();
        let allocated_total: Money = main_categories.iter().map(|a| a.value).sum();

        Self {
            total_income,
            main_categories,
            balancing,
            allocated_total,
            remaining: total_income - allocated_total,
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }

    /// "Remaining" or "Overspent", for the summary row label
    pub fn remaining_label(&self) -> &'static str {
        if self.is_overspent() {
            "Overspent"
        } else {
            "Remaining"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllocationKind, BudgetInputs, Category};

    #[test]
    fn test_summary_under_budget() {
        let summary = BudgetInputs::default().summary();

        assert_eq!(summary.main_categories.len(), 8);
        assert_eq!(summary.allocated_total.dollars(), 3893);
        assert_eq!(summary.remaining.dollars(), 107);
        assert!(!summary.is_overspent());
        assert_eq!(summary.remaining_label(), "Remaining");
        assert_eq!(
            summary.balancing.map(|b| b.kind),
            Some(AllocationKind::Unallocated)
        );
    }

    #[test]
    fn test_summary_overspent() {
        let mut inputs = BudgetInputs::default();
        inputs.overrides.set(Category::Rent, Money::from_dollars(2000));
        let summary = inputs.summary();

        assert_eq!(summary.allocated_total.dollars(), 4560);
        assert_eq!(summary.remaining.dollars(), -560);
        assert!(summary.is_overspent());
        assert_eq!(summary.remaining_label(), "Overspent");
        assert_eq!(summary.balancing.map(|b| b.value.dollars()), Some(560));
    }

    #[test]
    fn test_summary_exact() {
        let mut inputs = BudgetInputs::default();
        inputs.overrides.set(Category::Savings, Money::from_dollars(707));
        let summary = inputs.summary();

        assert!(summary.balancing.is_none());
        assert!(summary.remaining.is_zero());
    }
}
