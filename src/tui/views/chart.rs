//! Allocation chart
//!
//! Donut of the allocation list with a tooltip in the hole for the
//! hovered or selected slice

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{CategoryAllocation, Money};
use crate::services::format_percentage;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::donut::{self, Donut};

use super::color_of;

/// Render the chart panel
pub fn render(frame: &mut Frame, app: &mut App, allocations: &[CategoryAllocation], area: Rect) {
    let block = Block::default()
        .title(" Allocation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.chart_area = inner;

    let slices: Vec<(u64, Color)> = allocations
        .iter()
        .map(|a| (a.value.dollars().max(0) as u64, color_of(a.color())))
        .collect();
    if !has_slices(&slices) {
        frame.render_widget(
            Paragraph::new(EMPTY_HINT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let total_income = app.inputs.total_income();
    let active = app.active_slice();
    frame.render_widget(Donut::new(slices).highlight(active), inner);

    if let Some(allocation) = active.and_then(|index| allocations.get(index)) {
        render_tooltip(frame, allocation, total_income, donut::chart_area(inner));
    }
}

/// Shown in place of a donut with nothing to draw
pub const EMPTY_HINT: &str = "Enter an income to see the breakdown";

/// Whether any slice has a non-zero share of the donut
///
/// Overrides can fill the chart even with no income entered.
pub fn has_slices(slices: &[(u64, Color)]) -> bool {
    slices.iter().any(|(value, _)| *value > 0)
}

/// Name, amount and share of income, centered in the donut hole
fn render_tooltip(frame: &mut Frame, allocation: &CategoryAllocation, total_income: Money, chart: Rect) {
    let lines = tooltip_lines(allocation, total_income);
    let width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let area = centered_rect_fixed(width, lines.len() as u16, chart);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

pub fn tooltip_lines(allocation: &CategoryAllocation, total_income: Money) -> Vec<Line<'static>> {
    let color = color_of(allocation.color());
    vec![
        Line::from(Span::styled(
            format!("{} {}", allocation.icon().glyph(), allocation.name()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            allocation.value.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format_percentage(allocation.value, total_income),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{AllocationKind, BudgetInputs, Category};
    use crate::tui::views;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn zero_income_app(settings: &Settings) -> App<'_> {
        let inputs = BudgetInputs::new(Money::zero(), Money::zero(), Default::default());
        App::new(settings, inputs)
    }

    #[test]
    fn test_has_slices() {
        assert!(!has_slices(&[]));
        assert!(!has_slices(&[(0, Color::Red), (0, Color::Blue)]));
        assert!(has_slices(&[(0, Color::Red), (500, Color::Blue)]));
    }

    #[test]
    fn test_zero_income_without_overrides_shows_hint() {
        let settings = Settings::default();
        let mut app = zero_income_app(&settings);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| views::render(frame, &mut app)).unwrap();

        assert!(screen_text(&terminal).contains(EMPTY_HINT));
    }

    #[test]
    fn test_zero_income_overrides_still_draw_the_donut() {
        let settings = Settings::default();
        let mut app = zero_income_app(&settings);
        app.inputs.overrides.set(Category::Rent, Money::from_dollars(500));
        app.selected_slice = Some(0);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| views::render(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(!text.contains(EMPTY_HINT));
        assert!(text.chars().any(|c| ('\u{2801}'..='\u{28FF}').contains(&c)));
    }

    #[test]
    fn test_tooltip_shows_name_value_and_share() {
        let allocation = CategoryAllocation::new(
            AllocationKind::Category(Category::Groceries),
            Money::from_dollars(480),
        );
        let lines = tooltip_lines(&allocation, Money::from_dollars(4000));
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        assert!(text[0].ends_with("Groceries"));
        assert_eq!(text[1], "$480");
        assert_eq!(text[2], "12.0%");
    }
}
