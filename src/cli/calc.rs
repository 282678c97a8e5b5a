//! `calc` command
//!
//! Runs the allocation engine once from command-line arguments and prints
//! the result as a table, JSON or CSV.

use clap::{Args, ValueEnum};
use std::io::Write;
use tracing::info;

use crate::config::settings::Settings;
use crate::display::format_allocation_table;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_allocations_csv, export_report_json};
use crate::models::{BudgetInputs, Category, Money, Overrides, RentRatio};

/// Output format for `calc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Incomes and ratio shared by `calc` and `tui`
#[derive(Debug, Clone, Default, Args)]
pub struct IncomeArgs {
    /// Your monthly income in dollars
    #[arg(long, allow_negative_numbers = true, value_parser = income_parser())]
    pub income1: Option<i64>,

    /// Partner's monthly income in dollars
    #[arg(long, allow_negative_numbers = true, value_parser = income_parser())]
    pub income2: Option<i64>,

    /// Income to rent ratio (2.0 to 4.0)
    #[arg(short, long)]
    pub ratio: Option<f64>,
}

fn income_parser() -> clap::builder::RangedI64ValueParser<i64> {
    clap::value_parser!(i64).range(-Money::MAX_DOLLARS..=Money::MAX_DOLLARS)
}

impl IncomeArgs {
    /// Merge with settings defaults
    pub fn to_inputs(&self, settings: &Settings) -> BudgetInputs {
        let defaults = settings.initial_inputs();
        BudgetInputs::new(
            self.income1.map(Money::from_dollars).unwrap_or(defaults.income1),
            self.income2.map(Money::from_dollars).unwrap_or(defaults.income2),
            self.ratio.map(RentRatio::from_value).unwrap_or(defaults.rent_ratio),
        )
    }
}

#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    #[command(flatten)]
    pub incomes: IncomeArgs,

    /// Override a category, e.g. --set Rent=1800 (repeatable)
    #[arg(short = 's', long = "set", value_name = "CATEGORY=AMOUNT")]
    pub overrides: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Parse one `Category=Amount` pair
///
/// Amounts must be whole dollars between zero and `Money::MAX_DOLLARS`.
pub fn parse_override(pair: &str) -> BudgetResult<(Category, Money)> {
    let (name, amount) = pair.split_once('=').ok_or_else(|| {
        BudgetError::Validation(format!(
            "Expected CATEGORY=AMOUNT, got '{}'",
            pair
        ))
    })?;

    let category: Category = name.parse()?;
    let amount = amount.trim().trim_start_matches('$').replace(',', "");
    let value: i64 = amount.parse().map_err(|_| {
        BudgetError::Validation(format!("Invalid amount for {}: '{}'", category, amount))
    })?;
    if !(0..=Money::MAX_DOLLARS).contains(&value) {
        return Err(BudgetError::Validation(format!(
            "Amount for {} must be between 0 and {}, got {}",
            category,
            Money::MAX_DOLLARS,
            value
        )));
    }

    Ok((category, Money::from_dollars(value)))
}

/// Build the inputs for a `calc` invocation
pub fn build_inputs(args: &CalcArgs, settings: &Settings) -> BudgetResult<BudgetInputs> {
    let overrides = args
        .overrides
        .iter()
        .map(|pair| parse_override(pair))
        .collect::<BudgetResult<Overrides>>()?;

    Ok(args.incomes.to_inputs(settings).with_overrides(overrides))
}

/// Handle the `calc` command, writing to `out`
pub fn handle_calc_command<W: Write>(
    args: &CalcArgs,
    settings: &Settings,
    out: &mut W,
) -> BudgetResult<()> {
    let inputs = build_inputs(args, settings)?;
    info!(
        total_income = inputs.total_income().dollars(),
        ratio = %inputs.rent_ratio,
        overrides = inputs.overrides.len(),
        format = ?args.format,
        "calculating budget"
    );

    match args.format {
        OutputFormat::Table => {
            write!(out, "{}", format_allocation_table(&inputs))?;
        }
        OutputFormat::Json => export_report_json(&inputs, out)?,
        OutputFormat::Csv => export_allocations_csv(&inputs, out)?,
    }

    Ok(())
}
