//! Help dialog
//!
//! Lists keyboard shortcuts, with the section for the focused input first

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Sections in display order
fn section_order(app: &App) -> Vec<KeyContext> {
    let focused = app
        .focus
        .focused()
        .map(|id| KeyContext::from(id.kind()));

    let mut order = vec![KeyContext::Global];
    if let Some(context) = focused {
        order.push(context);
    }
    for context in [KeyContext::Number, KeyContext::Slider, KeyContext::Button] {
        if Some(context) != focused {
            order.push(context);
        }
    }
    order
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for context in section_order(app) {
        lines.push(Line::from(vec![Span::styled(
            context.title(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]));
        for kb in get_keybindings(context) {
            lines.push(key_line(&format_keybinding(kb), kb.description));
        }
        lines.push(Line::from(""));
    }

    lines.push(key_line("Mouse", "Click to focus, drag sliders, hover chart"));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::BudgetInputs;
    use crate::tui::focus::InputId;
    use ratatui::layout::Rect;

    #[test]
    fn test_focused_section_comes_second() {
        let settings = Settings::default();
        let mut app = App::new(&settings, BudgetInputs::default());
        app.focus.begin_render();
        app.focus.register(InputId::RentRatio, Rect::new(0, 0, 10, 1));
        app.focus.restore_focus();

        let order = section_order(&app);
        assert_eq!(order[0], KeyContext::Global);
        assert_eq!(order[1], KeyContext::Slider);
        assert_eq!(order.len(), 4);
    }
}
