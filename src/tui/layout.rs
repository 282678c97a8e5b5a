//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: income sidebar, chart,
//! category panel and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the income sidebar
pub const SIDEBAR_WIDTH: u16 = 40;

/// Category cards per row in the advanced view
pub const CARD_COLUMNS: usize = 4;

/// Height of one category card, borders included
pub const CARD_HEIGHT: u16 = 4;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Incomes, ratio and summary
    pub sidebar: Rect,
    /// Donut chart and tooltip
    pub chart: Rect,
    /// Category legend or slider grid
    pub categories: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, category_rows: usize, advanced: bool) -> Self {
        // Split into main area and status bar
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Split main area into sidebar and content
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(SIDEBAR_WIDTH),
                Constraint::Min(40),
            ])
            .split(vertical[0]);

        let categories_height = if advanced {
            // Banner plus the card grid
            3 + CARD_HEIGHT * category_rows as u16
        } else {
            // Legend rows inside a border
            2 + category_rows as u16
        };

        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(categories_height),
            ])
            .split(horizontal[1]);

        Self {
            sidebar: horizontal[0],
            chart: content[0],
            categories: content[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the income sidebar
pub struct IncomeLayout {
    pub income1: Rect,
    pub income2: Rect,
    pub ratio_label: Rect,
    pub ratio_slider: Rect,
    pub ratio_scale: Rect,
    pub rent_card: Rect,
    pub summary_card: Rect,
    pub toggle: Rect,
}

impl IncomeLayout {
    /// Calculate sidebar layout inside the panel border
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Income 1
                Constraint::Length(1), // Income 2
                Constraint::Length(1),
                Constraint::Length(1), // Ratio label
                Constraint::Length(1), // Ratio slider
                Constraint::Length(1), // Ratio scale
                Constraint::Length(1),
                Constraint::Length(4), // Recommended rent
                Constraint::Length(5), // Summary
                Constraint::Length(1), // Toggle
                Constraint::Min(0),
            ])
            .split(area);

        Self {
            income1: chunks[0],
            income2: chunks[1],
            ratio_label: chunks[3],
            ratio_slider: chunks[4],
            ratio_scale: chunks[5],
            rent_card: chunks[7],
            summary_card: chunks[8],
            toggle: chunks[9],
        }
    }
}

/// Split an area into a grid of equal cells, row by row
pub fn grid(area: Rect, columns: usize, rows: usize, row_height: u16) -> Vec<Rect> {
    if columns == 0 || rows == 0 {
        return Vec::new();
    }

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(row_height); rows])
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
