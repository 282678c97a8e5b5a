//! Allocation display formatting
//!
//! Formats an allocation list as a terminal table for `budget-calc calc`.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::BudgetInputs;
use crate::services::format_percentage;

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "")]
    icon: &'static str,
    #[tabled(rename = "Category")]
    name: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    marker: &'static str,
}

/// Format the allocation table plus the rent and summary lines
pub fn format_allocation_table(inputs: &BudgetInputs) -> String {
    let total = inputs.total_income();
    let allocations = inputs.allocations();
    let summary = inputs.summary();

    let rows: Vec<AllocationRow> = allocations
        .iter()
        .map(|a| AllocationRow {
            icon: a.icon().glyph(),
            name: a.name(),
            amount: a.value.to_string(),
            share: format_percentage(a.value, total),
            marker: match a.kind.category() {
                Some(category) if inputs.overrides.contains(category) => "*",
                _ => "",
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..4)).with(Alignment::right()));

    let mut output = String::new();
    output.push_str(&format!(
        "Total income:      {}\n",
        summary.total_income
    ));
    output.push_str(&format!(
        "Recommended rent:  {} ({})\n",
        inputs.recommended_rent(),
        inputs.rent_ratio
    ));
    output.push('\n');
    output.push_str(&table.to_string());
    output.push('\n');
    output.push_str(&format!(
        "Allocated: {}  {}: {}\n",
        summary.allocated_total,
        summary.remaining_label(),
        summary.remaining.abs()
    ));
    if !inputs.overrides.is_empty() {
        output.push_str("* custom value\n");
    }

    output
}
