//! TUI Views module
//!
//! The income sidebar, the chart, the category panel and the status bar.

pub mod categories;
pub mod chart;
pub mod income;
pub mod status_bar;

use ratatui::{style::Color, Frame};

use crate::models::ColorToken;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
///
/// Every pass rebuilds the focusable element list from scratch; the
/// caller restores focus once the frame is drawn.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.focus.begin_render();

    let allocations = app.allocations();
    let rows = categories::rows_needed(app.show_advanced, allocations.len());
    let layout = AppLayout::new(frame.area(), rows, app.show_advanced);

    income::render(frame, app, layout.sidebar);
    chart::render(frame, app, &allocations, layout.chart);
    categories::render(frame, app, &allocations, layout.categories);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Terminal color for a category color token
pub fn color_of(token: ColorToken) -> Color {
    let (r, g, b) = token.rgb();
    Color::Rgb(r, g, b)
}
