//! Display formatting for terminal output
//!
//! Formats calculator results for `budget-calc calc` in the default
//! table mode.

pub mod allocation;

pub use allocation::format_allocation_table;
