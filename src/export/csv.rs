//! CSV export of an allocation list

use serde::Serialize;
use std::io::Write;

use crate::error::BudgetResult;
use crate::models::BudgetInputs;
use crate::services::percent_of_income;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: i64,
    #[serde(rename = "Percent")]
    percent: String,
    #[serde(rename = "Color")]
    color: &'a str,
    #[serde(rename = "Custom")]
    custom: bool,
}

/// Write one row per allocation, balancing entry last
pub fn export_allocations_csv<W: Write>(inputs: &BudgetInputs, writer: &mut W) -> BudgetResult<()> {
    let total = inputs.total_income();
    let mut wtr = csv::Writer::from_writer(writer);

    for allocation in inputs.allocations() {
        let custom = allocation
            .kind
            .category()
            .is_some_and(|c| inputs.overrides.contains(c));
        wtr.serialize(CsvRow {
            category: allocation.name(),
            amount: allocation.value.dollars(),
            percent: format!("{:.1}", percent_of_income(allocation.value, total)),
            color: allocation.color().hex(),
            custom,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
