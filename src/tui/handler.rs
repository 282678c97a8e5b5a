//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::focus::{InputId, InputKind};
use super::widgets::input::NumberEdit;

/// Steps moved by PageUp/PageDown on a slider
const PAGE_STEPS: i64 = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Release and repeat events are reported on some platforms
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // Any key closes help
    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    // Keys for the focused input take precedence
    if let Some(id) = app.focus.focused() {
        let handled = match id.kind() {
            InputKind::Number => handle_number_key(app, id, key),
            InputKind::Range => handle_slider_key(app, id, key),
            InputKind::Button => handle_button_key(app, id, key),
        };
        if handled {
            return Ok(());
        }
    }

    handle_global_key(app, key);
    Ok(())
}

/// Handle keys that work everywhere
fn handle_global_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.focus.focus_next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.focus.focus_prev(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.toggle_advanced(),
        KeyCode::Char('R') => app.reset_all_overrides(),
        KeyCode::Char('[') => app.cycle_slice(-1),
        KeyCode::Char(']') => app.cycle_slice(1),
        _ => {}
    }
}

/// Handle keys on a focused number field; returns true if consumed
fn handle_number_key(app: &mut App, id: InputId, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => app.apply_number_edit(id, NumberEdit::Digit(c)),
        KeyCode::Backspace => app.apply_number_edit(id, NumberEdit::Backspace),
        KeyCode::Delete => app.apply_number_edit(id, NumberEdit::Clear),
        KeyCode::Char('r') => match id.category() {
            Some(category) => app.reset_override(category),
            None => return false,
        },
        _ => return false,
    }
    true
}

/// Handle keys on a focused slider; returns true if consumed
fn handle_slider_key(app: &mut App, id: InputId, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.adjust_slider(id, -1),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_slider(id, 1),
        KeyCode::PageDown => app.adjust_slider(id, -PAGE_STEPS),
        KeyCode::PageUp => app.adjust_slider(id, PAGE_STEPS),
        KeyCode::Home => app.slider_to_end(id, false),
        KeyCode::End => app.slider_to_end(id, true),
        KeyCode::Char('r') => match id.category() {
            Some(category) => app.reset_override(category),
            None => return false,
        },
        _ => return false,
    }
    true
}

/// Handle keys on a focused button; returns true if consumed
fn handle_button_key(app: &mut App, id: InputId, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            press_button(app, id);
            true
        }
        _ => false,
    }
}

fn press_button(app: &mut App, id: InputId) {
    if id == InputId::AdvancedToggle {
        app.toggle_advanced();
        app.focus.note_edit(id);
    }
}

/// Handle a mouse event
///
/// Mouse capture covers the whole terminal, so button release is seen
/// wherever it happens and always ends a drag.
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.has_dialog() {
                app.close_dialog();
                return Ok(());
            }
            handle_pointer_down(app, mouse.column, mouse.row);
        }
        MouseEventKind::Drag(_) => {
            // While a slider is held, motion belongs to it alone
            if let Some(id) = app.focus.dragging_input() {
                app.set_slider_from_column(id, mouse.column);
            }
        }
        MouseEventKind::Up(_) => {
            if let Some(id) = app.focus.pointer_up() {
                debug!(input = %id, "slider released");
            }
        }
        MouseEventKind::Moved => {
            if !app.focus.is_dragging() {
                app.hovered_slice = app.slice_at(mouse.column, mouse.row);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_pointer_down(app: &mut App, column: u16, row: u16) {
    let Some(id) = app.focus.element_at(column, row).map(|e| e.id) else {
        if let Some(slice) = app.slice_at(column, row) {
            app.selected_slice = Some(slice);
        }
        return;
    };

    app.focus.pointer_down(id);
    match id.kind() {
        InputKind::Range => app.set_slider_from_column(id, column),
        InputKind::Button => press_button(app, id),
        InputKind::Number => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{BudgetInputs, Category};
    use crate::tui::focus::DragState;
    use crate::tui::views;
    use crossterm::event::KeyEventState;
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
        terminal.draw(|frame| views::render(frame, app)).unwrap();
        if app.focus.restore_focus() {
            terminal.draw(|frame| views::render(frame, app)).unwrap();
        }
    }

    #[test]
    fn test_focus_stays_on_edited_category_field() {
        let settings = Settings {
            show_advanced: true,
            ..Settings::default()
        };
        let mut app = App::new(&settings, BudgetInputs::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        draw(&mut terminal, &mut app);

        let groceries = InputId::category_number(Category::Groceries, 2);
        let area = app.focus.element(groceries).unwrap().area;

        // Click the field, then type into it
        handle_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), area.x, area.y)).unwrap();
        handle_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), area.x, area.y)).unwrap();
        draw(&mut terminal, &mut app);
        assert!(app.focus.is_focused(groceries));

        handle_event(&mut app, key(KeyCode::Backspace)).unwrap();
        handle_event(&mut app, key(KeyCode::Char('5'))).unwrap();
        draw(&mut terminal, &mut app);

        assert_eq!(app.category_value(Category::Groceries).dollars(), 485);
        assert!(app.focus.is_focused(groceries));
    }

    #[test]
    fn test_long_income_entry_is_capped_and_renders() {
        let settings = Settings {
            show_advanced: true,
            ..Settings::default()
        };
        let mut app = App::new(&settings, BudgetInputs::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        draw(&mut terminal, &mut app);

        for id in [InputId::Income1, InputId::Income2] {
            let area = app.focus.element(id).unwrap().area;
            handle_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), area.x, area.y)).unwrap();
            handle_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), area.x, area.y)).unwrap();
            draw(&mut terminal, &mut app);
            for _ in 0..19 {
                handle_event(&mut app, key(KeyCode::Char('9'))).unwrap();
                draw(&mut terminal, &mut app);
            }
        }

        assert_eq!(app.inputs.income1.dollars(), 200_099_999_999);
        assert_eq!(app.inputs.income2.dollars(), 200_099_999_999);
        let signed: crate::models::Money =
            app.allocations().iter().map(|a| a.signed_value()).sum();
        assert_eq!(signed, app.inputs.total_income());
    }

    #[test]
    fn test_drag_feeds_slider_until_release_anywhere() {
        let settings = Settings::default();
        let mut app = App::new(&settings, BudgetInputs::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        draw(&mut terminal, &mut app);

        let track = app.focus.element(InputId::RentRatio).unwrap().area;
        handle_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), track.x, track.y)).unwrap();
        assert_eq!(app.focus.drag_state(), DragState::Dragging(InputId::RentRatio));
        assert_eq!(app.inputs.rent_ratio.tenths(), 20);

        // Drag far outside the slider, to the right of the track
        let right = track.x + track.width + 30;
        handle_event(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), right, 0)).unwrap();
        assert_eq!(app.inputs.rent_ratio.tenths(), 40);
        assert_eq!(app.hovered_slice, None);

        handle_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), right, 0)).unwrap();
        assert_eq!(app.focus.drag_state(), DragState::Idle);

        draw(&mut terminal, &mut app);
        assert!(app.focus.is_focused(InputId::RentRatio));
    }

    #[test]
    fn test_slider_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings, BudgetInputs::default());
        app.focus.begin_render();
        app.focus.register(InputId::RentRatio, Rect::new(0, 0, 21, 1));
        app.focus.restore_focus();

        handle_event(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(app.inputs.rent_ratio.tenths(), 31);
        handle_event(&mut app, key(KeyCode::End)).unwrap();
        assert_eq!(app.inputs.rent_ratio.tenths(), 40);
        handle_event(&mut app, key(KeyCode::PageDown)).unwrap();
        assert_eq!(app.inputs.rent_ratio.tenths(), 30);
    }

    #[test]
    fn test_toggle_button_and_help() {
        let settings = Settings::default();
        let mut app = App::new(&settings, BudgetInputs::default());
        app.focus.begin_render();
        app.focus.register(InputId::AdvancedToggle, Rect::new(0, 0, 20, 1));
        app.focus.restore_focus();

        handle_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.show_advanced);

        handle_event(&mut app, key(KeyCode::Char('?'))).unwrap();
        assert!(app.has_dialog());
        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!app.has_dialog());
        assert!(!app.should_quit);

        handle_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let settings = Settings::default();
        let mut app = App::new(&settings, BudgetInputs::default());
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        handle_event(&mut app, Event::Key(release)).unwrap();
        assert!(!app.should_quit);
    }

    #[test]
    fn test_hover_sets_tooltip_slice() {
        let settings = Settings::default();
        let mut app = App::new(&settings, BudgetInputs::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        draw(&mut terminal, &mut app);

        let chart = crate::tui::widgets::donut::chart_area(app.chart_area);
        // Just right of twelve o'clock on the ring: the first slice
        let column = chart.x + chart.width / 2 + 1;
        let row = chart.y + 1;
        handle_event(&mut app, mouse(MouseEventKind::Moved, column, row)).unwrap();
        assert_eq!(app.hovered_slice, Some(0));
        assert_eq!(app.active_slice(), Some(0));
    }
}
