//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use ratatui::layout::Rect;
use tracing::debug;

use crate::config::settings::Settings;
use crate::models::{BudgetInputs, Category, CategoryAllocation, Money, RentRatio};

use super::focus::{FocusCoordinator, InputId};
use super::widgets::donut;
use super::widgets::input::{apply_edit, NumberEdit};
use super::widgets::slider::value_for_offset;

/// Ticks a status message stays on screen
const STATUS_TICKS: u8 = 16;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Incomes, ratio and overrides
    pub inputs: BudgetInputs,

    /// Whether the per-category slider grid is shown
    pub show_advanced: bool,

    /// Focus and drag tracking across renders
    pub focus: FocusCoordinator,

    /// Chart slice under the mouse pointer
    pub hovered_slice: Option<usize>,

    /// Chart slice picked with the keyboard or a click
    pub selected_slice: Option<usize>,

    /// Where the chart was last drawn, for hit testing
    pub chart_area: Rect,

    /// Status message to display
    pub status_message: Option<String>,

    /// Ticks left before the status message clears
    status_ticks: u8,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, inputs: BudgetInputs) -> Self {
        Self {
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            inputs,
            show_advanced: settings.show_advanced,
            focus: FocusCoordinator::new(),
            hovered_slice: None,
            selected_slice: None,
            chart_area: Rect::default(),
            status_message: None,
            status_ticks: 0,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }

    /// Periodic update from the event loop
    pub fn tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Current allocation list, recomputed from the inputs
    pub fn allocations(&self) -> Vec<CategoryAllocation> {
        self.inputs.allocations()
    }

    /// Displayed value of a category: its override, else its default
    pub fn category_value(&self, category: Category) -> Money {
        self.allocations()
            .iter()
            .find(|a| a.kind.category() == Some(category))
            .map(|a| a.value)
            .unwrap_or_default()
    }

    pub fn toggle_advanced(&mut self) {
        self.show_advanced = !self.show_advanced;
        debug!(advanced = self.show_advanced, "toggled advanced view");
    }

    /// Set one of the two incomes
    pub fn set_income(&mut self, id: InputId, value: Money) {
        match id {
            InputId::Income1 => self.inputs.income1 = value,
            InputId::Income2 => self.inputs.income2 = value,
            _ => return,
        }
        self.focus.note_edit(id);
    }

    pub fn set_rent_ratio(&mut self, ratio: RentRatio) {
        self.inputs.rent_ratio = ratio;
        self.focus.note_edit(InputId::RentRatio);
    }

    /// Store an override, remembering which input made the edit
    pub fn set_override(&mut self, source: InputId, category: Category, value: Money) {
        self.inputs.overrides.set(category, value);
        self.focus.note_edit(source);
        debug!(%category, value = value.dollars(), input = %source, "override set");
    }

    /// Drop one category's override so it follows the default again
    pub fn reset_override(&mut self, category: Category) {
        if self.inputs.overrides.remove(category).is_some() {
            self.set_status(format!("{} reset to default", category));
        }
    }

    pub fn reset_all_overrides(&mut self) {
        if !self.inputs.overrides.is_empty() {
            self.inputs.overrides.clear();
            self.set_status("All categories reset to defaults");
        }
    }

    /// Slider range for an input: tenths for the ratio, dollars otherwise
    pub fn slider_bounds(&self, id: InputId) -> Option<(i64, i64)> {
        match id {
            InputId::RentRatio => Some((
                i64::from(RentRatio::MIN_TENTHS),
                i64::from(RentRatio::MAX_TENTHS),
            )),
            InputId::CategoryRange { .. } => Some((0, self.inputs.total_income().dollars())),
            _ => None,
        }
    }

    /// Raw slider value in the units of `slider_bounds`
    pub fn slider_value(&self, id: InputId) -> Option<i64> {
        match id {
            InputId::RentRatio => Some(i64::from(self.inputs.rent_ratio.tenths())),
            InputId::CategoryRange { category, .. } => Some(self.category_value(category).dollars()),
            _ => None,
        }
    }

    /// Set a slider, clamping to its range
    pub fn apply_slider_value(&mut self, id: InputId, value: i64) {
        let Some((min, max)) = self.slider_bounds(id) else {
            return;
        };
        let value = value.clamp(min, max);
        match id {
            InputId::RentRatio => self.set_rent_ratio(RentRatio::from_tenths(value)),
            InputId::CategoryRange { category, .. } => {
                self.set_override(id, category, Money::from_dollars(value))
            }
            _ => {}
        }
    }

    /// Move a slider by whole steps
    pub fn adjust_slider(&mut self, id: InputId, steps: i64) {
        let step = match id {
            InputId::RentRatio => 1,
            _ => self.settings.effective_slider_step(),
        };
        if let Some(current) = self.slider_value(id) {
            self.apply_slider_value(id, current.saturating_add(steps.saturating_mul(step)));
        }
    }

    /// Move a slider to one end of its range
    pub fn slider_to_end(&mut self, id: InputId, to_max: bool) {
        if let Some((min, max)) = self.slider_bounds(id) {
            self.apply_slider_value(id, if to_max { max } else { min });
        }
    }

    /// Set a slider from a screen column inside its rendered track
    pub fn set_slider_from_column(&mut self, id: InputId, column: u16) {
        let Some(area) = self.focus.element(id).map(|e| e.area) else {
            return;
        };
        let Some((min, max)) = self.slider_bounds(id) else {
            return;
        };
        let offset = column.saturating_sub(area.x);
        self.apply_slider_value(id, value_for_offset(offset, area.width, min, max));
    }

    /// Apply a keystroke to a number field
    pub fn apply_number_edit(&mut self, id: InputId, edit: NumberEdit) {
        match id {
            InputId::Income1 => self.set_income(id, apply_edit(self.inputs.income1, edit)),
            InputId::Income2 => self.set_income(id, apply_edit(self.inputs.income2, edit)),
            InputId::CategoryNumber { category, .. } => {
                let value = apply_edit(self.category_value(category), edit);
                self.set_override(id, category, value);
            }
            _ => {}
        }
    }

    /// Slice sizes for the chart
    pub fn slice_values(&self) -> Vec<u64> {
        self.allocations()
            .iter()
            .map(|a| a.value.dollars().max(0) as u64)
            .collect()
    }

    /// The slice whose tooltip is shown: hover wins over selection
    pub fn active_slice(&self) -> Option<usize> {
        let count = self.allocations().len();
        self.hovered_slice
            .or(self.selected_slice)
            .filter(|index| *index < count)
    }

    /// Step the keyboard slice selection, wrapping
    pub fn cycle_slice(&mut self, delta: isize) {
        let count = self.allocations().len();
        if count == 0 {
            self.selected_slice = None;
            return;
        }
        let next = match self.selected_slice.filter(|i| *i < count) {
            Some(index) => (index as isize + delta).rem_euclid(count as isize) as usize,
            None if delta < 0 => count - 1,
            None => 0,
        };
        self.selected_slice = Some(next);
    }

    /// Chart slice under a screen position
    pub fn slice_at(&self, column: u16, row: u16) -> Option<usize> {
        donut::hit_test(self.chart_area, column, row, &self.slice_values())
    }
}
