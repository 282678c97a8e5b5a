//! Category panel
//!
//! A color legend in the default view. The advanced view replaces it
//! with one card per category, each holding a slider and a number field
//! bound to the same override.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Category, CategoryAllocation, Money};
use crate::services::{format_percentage, BudgetSummary};
use crate::tui::app::App;
use crate::tui::focus::InputId;
use crate::tui::layout::{grid, CARD_COLUMNS, CARD_HEIGHT};
use crate::tui::widgets::{NumberField, Slider};

use super::color_of;

/// Legend entries per row
pub const LEGEND_COLUMNS: usize = 2;

/// Rows the panel needs for the current mode
pub fn rows_needed(advanced: bool, allocation_count: usize) -> usize {
    if advanced {
        Category::ALL.len().div_ceil(CARD_COLUMNS)
    } else {
        allocation_count.div_ceil(LEGEND_COLUMNS)
    }
}

/// Render the category panel
pub fn render(frame: &mut Frame, app: &mut App, allocations: &[CategoryAllocation], area: Rect) {
    if app.show_advanced {
        render_advanced(frame, app, allocations, area);
    } else {
        render_legend(frame, app, allocations, area);
    }
}

fn render_legend(frame: &mut Frame, app: &App, allocations: &[CategoryAllocation], area: Rect) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total_income = app.inputs.total_income();
    let active = app.active_slice();
    let rows = rows_needed(false, allocations.len());
    let cells = grid(inner, LEGEND_COLUMNS, rows, 1);

    for (index, (allocation, cell)) in allocations.iter().zip(cells).enumerate() {
        let name_style = if active == Some(index) {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled("● ", Style::default().fg(color_of(allocation.color()))),
            Span::styled(format!("{:<15}", allocation.name()), name_style),
            Span::styled(
                format!("{:>8}", allocation.value.to_string()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(" {:>6}", format_percentage(allocation.value, total_income)),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), cell);
    }
}

fn render_advanced(frame: &mut Frame, app: &mut App, allocations: &[CategoryAllocation], area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let summary = BudgetSummary::from_allocations(allocations, app.inputs.total_income());
    render_banner(frame, &summary, chunks[0]);

    let rows = rows_needed(true, allocations.len());
    let cells = grid(chunks[1], CARD_COLUMNS, rows, CARD_HEIGHT);
    for (allocation, cell) in summary.main_categories.iter().zip(cells) {
        if let Some(category) = allocation.kind.category() {
            render_card(frame, app, category, allocation.value, cell);
        }
    }
}

/// Balance message above the card grid
fn render_banner(frame: &mut Frame, summary: &BudgetSummary, area: Rect) {
    let (message, color) = if summary.is_overspent() {
        (
            format!("Overspent by {}", summary.remaining.abs()),
            Color::Red,
        )
    } else if summary.remaining.is_zero() {
        ("Every dollar is allocated".to_string(), Color::Green)
    } else {
        (format!("{} left unallocated", summary.remaining), Color::Yellow)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let line = Line::from(vec![
        Span::styled(message, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(
            "   r resets a category, R resets all",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_card(frame: &mut Frame, app: &mut App, category: Category, value: Money, area: Rect) {
    let position = category.position();
    let range_id = InputId::category_range(category, position);
    let number_id = InputId::category_number(category, position);
    let card_focused = app.focus.is_focused(range_id) || app.focus.is_focused(number_id);
    let custom = app.inputs.overrides.contains(category);

    let border_color = if card_focused {
        Color::Cyan
    } else {
        color_of(category.color())
    };
    let title = format!(
        " {} {}{} ",
        category.icon().glyph(),
        category.name(),
        if custom { " *" } else { "" }
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 || inner.width < 8 {
        return;
    }

    let slider_area = Rect::new(inner.x, inner.y, inner.width, 1);
    let total = app.inputs.total_income().dollars();
    let slider = Slider::new(value.dollars(), 0, total)
        .color(color_of(category.color()))
        .focused(app.focus.is_focused(range_id))
        .dragging(app.focus.is_dragging_input(range_id));
    frame.render_widget(slider, slider_area);
    app.focus.register(range_id, slider_area);

    let percent = format_percentage(value, app.inputs.total_income());
    let percent_width = (percent.len() as u16).min(inner.width / 2);
    let number_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width - percent_width - 1,
        1,
    );
    let percent_area = Rect::new(
        inner.x + inner.width - percent_width,
        inner.y + 1,
        percent_width,
        1,
    );

    let field = NumberField::new(value).focused(app.focus.is_focused(number_id));
    frame.render_widget(field, number_area);
    app.focus.register(number_id, number_area);
    frame.render_widget(
        Paragraph::new(percent).style(Style::default().fg(Color::DarkGray)),
        percent_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_needed() {
        assert_eq!(rows_needed(true, 9), 2);
        assert_eq!(rows_needed(false, 9), 5);
        assert_eq!(rows_needed(false, 8), 4);
    }
}
