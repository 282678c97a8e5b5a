//! Export module for budget-calc
//!
//! Machine-readable output for `budget-calc calc`:
//! - CSV: one row per allocation (spreadsheet-compatible)
//! - JSON: the full report including totals

pub mod csv;
pub mod json;

pub use self::csv::export_allocations_csv;
pub use self::json::{export_report_json, BudgetReport, REPORT_SCHEMA_VERSION};
