//! Allocation engine
//!
//! Maps incomes, rent ratio and overrides to the ordered list of category
//! allocations. The computation is pure and total: it is re-run from
//! scratch on every input change and never fails.

use tracing::debug;

use crate::models::{AllocationKind, Category, CategoryAllocation, Money, Overrides, RentRatio};

/// Sum of both incomes; negative incomes count as zero
pub fn total_income(income1: Money, income2: Money) -> Money {
    income1.non_negative() + income2.non_negative()
}

/// `round(total_income / ratio)`, rounding halves up
pub fn recommended_rent(total_income: Money, ratio: RentRatio) -> Money {
    let total = i128::from(total_income.non_negative().dollars());
    let tenths = i128::from(ratio.tenths());
    // total / (tenths / 10), rounded: (2 * 10 * total + tenths) / (2 * tenths)
    Money::from_dollars(narrow((20 * total + tenths) / (2 * tenths)))
}

/// Computed default for one category, before overrides
pub fn default_value(category: Category, total_income: Money, ratio: RentRatio) -> Money {
    match category.default_share_percent() {
        Some(percent) => {
            let total = i128::from(total_income.non_negative().dollars());
            let percent = i128::from(percent);
            Money::from_dollars(narrow((2 * total * percent + 100) / 200))
        }
        None => recommended_rent(total_income, ratio),
    }
}

fn narrow(dollars: i128) -> i64 {
    i64::try_from(dollars).unwrap_or(i64::MAX)
}

/// Compute the full allocation list
///
/// The eight categories come first in display order, each using its
/// override when one is set. A trailing Unallocated or Overspent entry
/// absorbs any difference from total income; it is omitted when the
/// categories add up exactly.
pub fn compute_allocations(
    income1: Money,
    income2: Money,
    ratio: RentRatio,
    overrides: &Overrides,
) -> Vec<CategoryAllocation> {
    let total = total_income(income1, income2);

    let mut allocations: Vec<CategoryAllocation> = Category::ALL
        .iter()
        .map(|&category| {
            let value = overrides
                .get(category)
                .unwrap_or_else(|| default_value(category, total, ratio));
            CategoryAllocation::new(AllocationKind::Category(category), value)
        })
        .collect();

    let calculated_total: Money = allocations.iter().map(|a| a.value).sum();
    let remaining = total - calculated_total;

    debug!(
        total_income = total.dollars(),
        calculated_total = calculated_total.dollars(),
        remaining = remaining.dollars(),
        overrides = overrides.len(),
        "computed allocations"
    );

    if remaining.is_positive() {
        allocations.push(CategoryAllocation::new(AllocationKind::Unallocated, remaining));
    } else if remaining.is_negative() {
        allocations.push(CategoryAllocation::new(
            AllocationKind::Overspent,
            remaining.abs(),
        ));
    }

    allocations
}

/// Share of total income in percent; zero income gives 0.0
pub fn percent_of_income(value: Money, total_income: Money) -> f64 {
    if total_income.dollars() <= 0 {
        return 0.0;
    }
    value.dollars() as f64 / total_income.dollars() as f64 * 100.0
}

/// Percentage with one decimal place, e.g. "33.3%"
pub fn format_percentage(value: Money, total_income: Money) -> String {
    format!("{:.1}%", percent_of_income(value, total_income))
}
