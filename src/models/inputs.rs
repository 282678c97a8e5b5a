//! Everything the user controls, bundled as one value

use super::allocation::{CategoryAllocation, Overrides};
use super::money::Money;
use super::ratio::RentRatio;
use crate::services::allocation;
use crate::services::summary::BudgetSummary;

/// Incomes, rent ratio and overrides for one calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetInputs {
    /// Primary earner's monthly income
    pub income1: Money,
    /// Partner's monthly income
    pub income2: Money,
    pub rent_ratio: RentRatio,
    pub overrides: Overrides,
}

impl BudgetInputs {
    pub fn new(income1: Money, income2: Money, rent_ratio: RentRatio) -> Self {
        Self {
            income1,
            income2,
            rent_ratio,
            overrides: Overrides::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sum of both incomes, each clamped to zero first
    pub fn total_income(&self) -> Money {
        allocation::total_income(self.income1, self.income2)
    }

    pub fn recommended_rent(&self) -> Money {
        allocation::recommended_rent(self.total_income(), self.rent_ratio)
    }

    /// Recompute the full allocation list
    pub fn allocations(&self) -> Vec<CategoryAllocation> {
        allocation::compute_allocations(
            self.income1,
            self.income2,
            self.rent_ratio,
            &self.overrides,
        )
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_allocations(&self.allocations(), self.total_income())
    }
}

impl Default for BudgetInputs {
    /// 2000 + 2000 at 3.0x
    fn default() -> Self {
        Self::new(
            Money::from_dollars(2000),
            Money::from_dollars(2000),
            RentRatio::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_defaults() {
        let inputs = BudgetInputs::default();
        assert_eq!(inputs.total_income().dollars(), 4000);
        assert_eq!(inputs.recommended_rent().dollars(), 1333);
        assert!(inputs.overrides.is_empty());
    }

    #[test]
    fn test_negative_income_is_clamped() {
        let inputs = BudgetInputs::new(
            Money::from_dollars(-500),
            Money::from_dollars(3000),
            RentRatio::default(),
        );
        assert_eq!(inputs.total_income().dollars(), 3000);
    }

    #[test]
    fn test_with_overrides() {
        let overrides: Overrides = [(Category::Rent, Money::from_dollars(2000))]
            .into_iter()
            .collect();
        let inputs = BudgetInputs::default().with_overrides(overrides);
        assert_eq!(inputs.allocations()[0].value.dollars(), 2000);
    }
}
