//! Income sidebar
//!
//! Shows both incomes, the rent ratio slider, the recommended rent, the
//! budget summary and the advanced view toggle

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::RentRatio;
use crate::services::{format_percentage, BudgetSummary};
use crate::tui::app::App;
use crate::tui::focus::InputId;
use crate::tui::layout::IncomeLayout;
use crate::tui::widgets::{NumberField, Slider};

/// Render the income sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Budget Calculator ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = IncomeLayout::new(inner);

    render_income(frame, app, InputId::Income1, "Your income", layout.income1);
    render_income(frame, app, InputId::Income2, "Partner income", layout.income2);
    render_ratio(frame, app, &layout);

    let summary = app.inputs.summary();
    render_rent_card(frame, app, layout.rent_card);
    render_summary_card(frame, &summary, layout.summary_card);
    render_toggle(frame, app, layout.toggle);
}

fn render_income(frame: &mut Frame, app: &mut App, id: InputId, label: &str, area: Rect) {
    if area.height == 0 {
        return;
    }
    let value = match id {
        InputId::Income1 => app.inputs.income1,
        _ => app.inputs.income2,
    };
    let field = NumberField::new(value)
        .label(format!("{:<14}", label))
        .focused(app.focus.is_focused(id));
    frame.render_widget(field, area);
    app.focus.register(id, area);
}

fn render_ratio(frame: &mut Frame, app: &mut App, layout: &IncomeLayout) {
    let label = Line::from(vec![
        Span::styled("Income to rent ratio  ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.inputs.rent_ratio.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(label), layout.ratio_label);

    if layout.ratio_slider.height > 0 {
        let id = InputId::RentRatio;
        let slider = Slider::new(
            i64::from(app.inputs.rent_ratio.tenths()),
            i64::from(RentRatio::MIN_TENTHS),
            i64::from(RentRatio::MAX_TENTHS),
        )
        .focused(app.focus.is_focused(id))
        .dragging(app.focus.is_dragging_input(id));
        frame.render_widget(slider, layout.ratio_slider);
        app.focus.register(id, layout.ratio_slider);
    }

    let scale = Line::from(vec![
        Span::raw(RentRatio::MIN.to_string()),
        Span::raw(
            " ".repeat(
                (layout.ratio_scale.width as usize)
                    .saturating_sub(2 * RentRatio::MAX.to_string().len()),
            ),
        ),
        Span::raw(RentRatio::MAX.to_string()),
    ]);
    frame.render_widget(
        Paragraph::new(scale).style(Style::default().fg(Color::DarkGray)),
        layout.ratio_scale,
    );
}

fn render_rent_card(frame: &mut Frame, app: &App, area: Rect) {
    let rent = app.inputs.recommended_rent();
    let block = Block::default()
        .title(" Recommended Rent ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(Span::styled(
            rent.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} of income per month",
                format_percentage(rent, app.inputs.total_income())
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_summary_card(frame: &mut Frame, summary: &BudgetSummary, area: Rect) {
    let block = Block::default()
        .title(" Budget Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let remaining_color = if summary.is_overspent() {
        Color::Red
    } else if summary.remaining.is_zero() {
        Color::Green
    } else {
        Color::Yellow
    };

    let lines = vec![
        summary_line("Total income", summary.total_income.to_string(), Color::White),
        summary_line("Allocated", summary.allocated_total.to_string(), Color::White),
        summary_line(
            summary.remaining_label(),
            summary.remaining.abs().to_string(),
            remaining_color,
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn summary_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<16}", label), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:>14}", value), Style::default().fg(color)),
    ])
}

fn render_toggle(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let id = InputId::AdvancedToggle;
    let text = if app.show_advanced {
        "[ Hide category sliders ]"
    } else {
        "[ Adjust categories ]"
    };
    let style = if app.focus.is_focused(id) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    frame.render_widget(Paragraph::new(Span::styled(text, style)), area);
    app.focus.register(id, area);
}
