//! Numeric input widget
//!
//! A controlled dollar field: the text shown is always the current value,
//! and each keystroke produces a new value from that text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::models::Money;

/// A keystroke applied to a number field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberEdit {
    /// Append a digit
    Digit(char),
    /// Remove the last character
    Backspace,
    /// Empty the field
    Clear,
}

/// Apply an edit to the field's current value
///
/// The edit works on the displayed text; whatever text results is parsed
/// leniently, so an emptied field reads as zero. Digits past the twelfth
/// are ignored.
pub fn apply_edit(current: Money, edit: NumberEdit) -> Money {
    let mut text = current.dollars().to_string();
    match edit {
        NumberEdit::Digit(c) if c.is_ascii_digit() => {
            if text.chars().filter(char::is_ascii_digit).count() < MAX_DIGITS {
                text.push(c);
            }
        }
        NumberEdit::Digit(_) => {}
        NumberEdit::Backspace => {
            text.pop();
        }
        NumberEdit::Clear => text.clear(),
    }
    Money::parse_lenient(&text)
}

/// Longest run of digits a field accepts
pub const MAX_DIGITS: usize = 12;

/// A single-line dollar input
#[derive(Debug, Clone)]
pub struct NumberField {
    /// Current value
    pub value: Money,
    /// Whether the input is focused
    pub focused: bool,
    /// Label drawn before the field
    pub label: String,
    /// Draw the value in this color when not focused
    pub accent: Color,
}

impl NumberField {
    pub fn new(value: Money) -> Self {
        Self {
            value,
            focused: false,
            label: String::new(),
            accent: Color::Yellow,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl Widget for NumberField {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        };

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let input_start = area.x + label_width as u16;
        let right = area.x + area.width;
        if input_start >= right {
            return;
        }

        let prefix_style = Style::default().fg(Color::DarkGray);
        buf.set_string(input_start, area.y, "$ ", prefix_style);

        let text = self.value.dollars().to_string();
        let text_start = input_start + 2;
        let text_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(self.accent)
        };
        let max_width = right.saturating_sub(text_start) as usize;
        buf.set_stringn(text_start, area.y, &text, max_width, text_style);

        // Cursor sits after the last digit
        if self.focused {
            let cursor_x = text_start + text.len() as u16;
            if cursor_x < right {
                buf.set_string(
                    cursor_x,
                    area.y,
                    "_",
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(n: i64) -> Money {
        Money::from_dollars(n)
    }

    #[test]
    fn test_apply_digit_appends() {
        assert_eq!(apply_edit(dollars(480), NumberEdit::Digit('5')), dollars(4805));
        assert_eq!(apply_edit(dollars(0), NumberEdit::Digit('7')), dollars(7));
        assert_eq!(apply_edit(dollars(12), NumberEdit::Digit('x')), dollars(12));
    }

    #[test]
    fn test_typing_stops_at_twelve_digits() {
        let mut value = Money::zero();
        for _ in 0..19 {
            value = apply_edit(value, NumberEdit::Digit('9'));
        }
        assert_eq!(value.dollars(), Money::MAX_DOLLARS);
        assert_eq!(value.dollars().to_string().len(), MAX_DIGITS);

        // Still editable after hitting the cap
        let value = apply_edit(value, NumberEdit::Backspace);
        assert_eq!(value.dollars(), 99_999_999_999);
        assert_eq!(apply_edit(value, NumberEdit::Digit('1')).dollars(), 999_999_999_991);
    }

    #[test]
    fn test_backspace_and_clear() {
        assert_eq!(apply_edit(dollars(480), NumberEdit::Backspace), dollars(48));
        assert_eq!(apply_edit(dollars(7), NumberEdit::Backspace), dollars(0));
        assert_eq!(apply_edit(dollars(2000), NumberEdit::Clear), dollars(0));
    }

    #[test]
    fn test_render_focused_field() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        NumberField::new(dollars(2000))
            .label("You")
            .focused(true)
            .render(area, &mut buf);

        let line: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(line.starts_with("You: $ 2000_"));
    }
}
