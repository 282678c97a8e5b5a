//! Tracing setup
//!
//! The TUI owns the terminal, so in that mode events go to a log file in
//! the base directory. Command-line modes log to stderr.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{BudgetPaths, Settings};
use crate::error::{BudgetError, BudgetResult};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "BUDGET_CALC_LOG";

static TRACING_INIT: Once = Once::new();

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing(target: LogTarget, paths: &BudgetPaths, settings: &Settings) -> BudgetResult<()> {
    let mut result = Ok(());
    TRACING_INIT.call_once(|| result = install(target, paths, settings));
    result
}

/// Build and install a subscriber for `target`
///
/// Fails when the log file cannot be opened or another global subscriber
/// is already in place.
fn install(target: LogTarget, paths: &BudgetPaths, settings: &Settings) -> BudgetResult<()> {
    let filter = build_filter(settings);
    let installed = match target {
        LogTarget::Stderr => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File => {
            paths.ensure_directories()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| BudgetError::Config(format!("Failed to install log subscriber: {}", e)))
}
