//! budget-calc - Household budget calculator for the terminal
//!
//! Two incomes and an income-to-rent ratio produce a recommended rent and
//! a split of the remaining income across fixed spending categories. Any
//! category can be overridden; a balancing entry ("Unallocated" or
//! "Overspent") keeps the allocation equal to total income.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Money, categories, ratio and allocation types
//! - `services`: The allocation engine and summaries
//! - `display`: Table output for the CLI
//! - `export`: JSON and CSV output
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use budget_calc::models::{BudgetInputs, Money, RentRatio};
//!
//! let inputs = BudgetInputs::new(
//!     Money::from_dollars(2000),
//!     Money::from_dollars(2000),
//!     RentRatio::from_value(3.0),
//! );
//! assert_eq!(inputs.recommended_rent().dollars(), 1333);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
