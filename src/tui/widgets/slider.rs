//! Horizontal slider widget
//!
//! Maps an integer value in `min..=max` onto a one-row track. The same
//! mapping is used in reverse to turn a mouse column into a value.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Track column for a value, for a track `width` cells wide
pub fn offset_for_value(value: i64, width: u16, min: i64, max: i64) -> u16 {
    if width <= 1 || max <= min {
        return 0;
    }
    let span = i128::from(max) - i128::from(min);
    let clamped = i128::from(value.clamp(min, max)) - i128::from(min);
    let cells = i128::from(width - 1);
    ((clamped * cells + span / 2) / span) as u16
}

/// Value under a track column, rounded to the nearest integer
pub fn value_for_offset(offset: u16, width: u16, min: i64, max: i64) -> i64 {
    if width <= 1 || max <= min {
        return min;
    }
    let cells = i128::from(width - 1);
    let offset = i128::from(offset).min(cells);
    let span = i128::from(max) - i128::from(min);
    let value = i128::from(min) + (offset * span + cells / 2) / cells;
    i64::try_from(value).unwrap_or(max)
}

#[derive(Debug, Clone)]
pub struct Slider {
    pub value: i64,
    pub min: i64,
    pub max: i64,
    pub focused: bool,
    pub dragging: bool,
    pub color: Color,
}

impl Slider {
    pub fn new(value: i64, min: i64, max: i64) -> Self {
        Self {
            value,
            min,
            max,
            focused: false,
            dragging: false,
            color: Color::Cyan,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for Slider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let knob = offset_for_value(self.value, area.width, self.min, self.max);
        let fill_style = Style::default().fg(self.color);
        let track_style = Style::default().fg(Color::DarkGray);
        let knob_style = if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.color).add_modifier(Modifier::BOLD)
        };
        let knob_symbol = if self.dragging { "◉" } else { "●" };

        for i in 0..area.width {
            let (symbol, style) = if i == knob {
                (knob_symbol, knob_style)
            } else if i < knob {
                ("━", fill_style)
            } else {
                ("─", track_style)
            };
            buf.set_string(area.x + i, area.y, symbol, style);
        }
    }
}
