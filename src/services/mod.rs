//! Business logic layer
//!
//! - `allocation`: the allocation engine and percentage helpers
//! - `summary`: allocated/remaining totals for display

pub mod allocation;
pub mod summary;

pub use allocation::{compute_allocations, format_percentage, percent_of_income, recommended_rent};
pub use summary::BudgetSummary;
