//! JSON export of a calculation

use serde::Serialize;
use std::io::Write;

use crate::error::BudgetResult;
use crate::models::{BudgetInputs, CategoryAllocation, Money, RentRatio};

/// Report schema version
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Everything a consumer needs to redraw the calculator's output
#[derive(Debug, Serialize)]
pub struct BudgetReport {
    pub schema_version: u32,
    pub income1: Money,
    pub income2: Money,
    pub total_income: Money,
    pub rent_ratio: RentRatio,
    pub recommended_rent: Money,
    pub allocations: Vec<CategoryAllocation>,
    pub allocated_total: Money,
    pub remaining: Money,
}

impl BudgetReport {
    pub fn from_inputs(inputs: &BudgetInputs) -> Self {
        let summary = inputs.summary();
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            income1: inputs.income1,
            income2: inputs.income2,
            total_income: summary.total_income,
            rent_ratio: inputs.rent_ratio,
            recommended_rent: inputs.recommended_rent(),
            allocations: inputs.allocations(),
            allocated_total: summary.allocated_total,
            remaining: summary.remaining,
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn export_report_json<W: Write>(inputs: &BudgetInputs, writer: &mut W) -> BudgetResult<()> {
    let report = BudgetReport::from_inputs(inputs);
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}
