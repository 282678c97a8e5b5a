//! Status bar view
//!
//! Shows total income, the focused input, drag state and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::focus::DragState;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    spans.push(Span::styled(" Income: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        app.inputs.total_income().to_string(),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ));

    if let Some(id) = app.focus.focused() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(id.to_string(), Style::default().fg(Color::Cyan)));
    }

    if let DragState::Dragging(_) = app.focus.drag_state() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "dragging",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow),
        ));
    }

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help  Tab:Next  a:Advanced ";

    let left_len: usize = spans.iter().map(|s| s.width()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
