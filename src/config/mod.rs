//! Configuration module for budget-calc
//!
//! - XDG-compliant path resolution
//! - Startup defaults loaded from `config.json`

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
