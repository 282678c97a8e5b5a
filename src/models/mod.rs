//! Core data models for budget-calc
//!
//! - `Money`: whole-dollar amounts with en-US currency formatting
//! - `Category`: the eight fixed spending categories
//! - `RentRatio`: the income-to-rent divisor
//! - `CategoryAllocation` / `Overrides`: engine output and user input
//! - `BudgetInputs`: everything the user controls

pub mod allocation;
pub mod category;
pub mod inputs;
pub mod money;
pub mod ratio;

pub use allocation::{AllocationKind, CategoryAllocation, Overrides};
pub use category::{Category, ColorToken, IconToken};
pub use inputs::BudgetInputs;
pub use money::Money;
pub use ratio::RentRatio;
