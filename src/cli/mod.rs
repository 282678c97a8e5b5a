//! CLI command handlers
//!
//! Bridges clap argument parsing with the allocation engine.

pub mod calc;

pub use calc::{handle_calc_command, CalcArgs, IncomeArgs, OutputFormat};
