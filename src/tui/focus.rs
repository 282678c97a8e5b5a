//! Focus and drag coordination
//!
//! Every render rebuilds the whole element tree: the income fields, the
//! ratio slider and, in the advanced view, a slider plus number field per
//! category. The coordinator records which element the user last edited
//! and puts focus back on it once the new elements exist. It also tracks
//! whether a slider is being dragged with the mouse, so that drag motion
//! anywhere on screen keeps feeding that slider until the button is
//! released.

use ratatui::layout::Rect;
use std::fmt;
use tracing::trace;

use crate::models::Category;

/// What sort of element an input is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// A slider
    Range,
    /// A typed numeric field
    Number,
    /// A push button
    Button,
}

/// Identifier of a focusable element
///
/// Category inputs carry both the category and its position in the list,
/// so the range and number inputs for one category stay individually
/// addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputId {
    Income1,
    Income2,
    RentRatio,
    AdvancedToggle,
    CategoryRange { category: Category, position: usize },
    CategoryNumber { category: Category, position: usize },
}

impl InputId {
    pub fn category_range(category: Category, position: usize) -> Self {
        Self::CategoryRange { category, position }
    }

    pub fn category_number(category: Category, position: usize) -> Self {
        Self::CategoryNumber { category, position }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Self::RentRatio | Self::CategoryRange { .. } => InputKind::Range,
            Self::Income1 | Self::Income2 | Self::CategoryNumber { .. } => InputKind::Number,
            Self::AdvancedToggle => InputKind::Button,
        }
    }

    pub fn is_slider(&self) -> bool {
        self.kind() == InputKind::Range
    }

    /// The category this input edits, if any
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::CategoryRange { category, .. } | Self::CategoryNumber { category, .. } => {
                Some(*category)
            }
            _ => None,
        }
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income1 => write!(f, "income1"),
            Self::Income2 => write!(f, "income2"),
            Self::RentRatio => write!(f, "rent-ratio"),
            Self::AdvancedToggle => write!(f, "advanced-toggle"),
            Self::CategoryRange { category, position } => {
                write!(f, "range-{}-{}", category.name().to_lowercase(), position)
            }
            Self::CategoryNumber { category, position } => {
                write!(f, "number-{}-{}", category.name().to_lowercase(), position)
            }
        }
    }
}

/// Mouse drag tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A slider is held down; carries the slider being dragged
    Dragging(InputId),
}

/// An element produced by the latest render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedElement {
    pub id: InputId,
    pub area: Rect,
}

/// Keeps focus on the element being edited across re-renders
#[derive(Debug, Default)]
pub struct FocusCoordinator {
    /// The element the user last edited or explicitly focused
    active_input: Option<InputId>,
    /// The element that currently holds focus
    focused: Option<InputId>,
    drag: DragState,
    /// Elements from the latest render, in render order
    elements: Vec<RenderedElement>,
}

impl FocusCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_input(&self) -> Option<InputId> {
        self.active_input
    }

    pub fn focused(&self) -> Option<InputId> {
        self.focused
    }

    pub fn is_focused(&self, id: InputId) -> bool {
        self.focused == Some(id)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// The slider being dragged, if any
    pub fn dragging_input(&self) -> Option<InputId> {
        match self.drag {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    /// Whether this particular slider is being dragged
    pub fn is_dragging_input(&self, id: InputId) -> bool {
        self.drag == DragState::Dragging(id)
    }

    /// Start a render pass: the previous element tree is discarded
    pub fn begin_render(&mut self) {
        self.elements.clear();
    }

    /// Record an element drawn during the current render pass
    pub fn register(&mut self, id: InputId, area: Rect) {
        self.elements.push(RenderedElement { id, area });
    }

    pub fn elements(&self) -> &[RenderedElement] {
        &self.elements
    }

    pub fn element(&self, id: InputId) -> Option<&RenderedElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// The element drawn at a screen position, if any
    pub fn element_at(&self, column: u16, row: u16) -> Option<&RenderedElement> {
        self.elements.iter().find(|e| {
            column >= e.area.x
                && column < e.area.x.saturating_add(e.area.width)
                && row >= e.area.y
                && row < e.area.y.saturating_add(e.area.height)
        })
    }

    /// A value changed through this input
    pub fn note_edit(&mut self, id: InputId) {
        self.active_input = Some(id);
    }

    /// Move focus to an element directly (click, Tab)
    pub fn focus(&mut self, id: InputId) {
        self.active_input = Some(id);
        self.focused = Some(id);
    }

    /// Reconcile focus with the element tree just rendered
    ///
    /// Focus goes to the active input when it was rendered. Otherwise the
    /// current focus is kept if it still exists, else the first element
    /// takes it. Returns true when focus moved, meaning the frame should
    /// be drawn again.
    pub fn restore_focus(&mut self) -> bool {
        let rendered = |id: Option<InputId>| id.filter(|id| self.element(*id).is_some());

        let target = rendered(self.active_input)
            .or_else(|| rendered(self.focused))
            .or_else(|| self.elements.first().map(|e| e.id));

        let changed = target != self.focused;
        if changed {
            trace!(
                from = ?self.focused.map(|id| id.to_string()),
                to = ?target.map(|id| id.to_string()),
                "focus restored"
            );
        }
        self.focused = target;
        changed
    }

    /// Pointer pressed on an element; sliders enter the dragging state
    ///
    /// Returns true if a drag started.
    pub fn pointer_down(&mut self, id: InputId) -> bool {
        self.active_input = Some(id);
        if id.is_slider() {
            self.drag = DragState::Dragging(id);
            trace!(input = %id, "drag started");
            true
        } else {
            false
        }
    }

    /// Pointer released anywhere on screen
    ///
    /// Returns the slider that was being dragged, if any.
    pub fn pointer_up(&mut self) -> Option<InputId> {
        match std::mem::take(&mut self.drag) {
            DragState::Dragging(id) => {
                trace!(input = %id, "drag ended");
                Some(id)
            }
            DragState::Idle => None,
        }
    }

    /// Focus the next rendered element, wrapping around
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    /// Focus the previous rendered element, wrapping around
    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: isize) {
        let count = self.elements.len();
        if count == 0 {
            return;
        }
        let next = match self
            .focused
            .and_then(|id| self.elements.iter().position(|e| e.id == id))
        {
            Some(index) => (index as isize + delta).rem_euclid(count as isize) as usize,
            None if delta < 0 => count - 1,
            None => 0,
        };
        let id = self.elements[next].id;
        self.focus(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16) -> Rect {
        Rect::new(x, y, width, 1)
    }

    fn render_all(coordinator: &mut FocusCoordinator, ids: &[InputId]) {
        coordinator.begin_render();
        for (row, id) in ids.iter().enumerate() {
            coordinator.register(*id, rect(0, row as u16, 20));
        }
    }

    #[test]
    fn test_ids_are_distinct_per_kind_and_position() {
        let range = InputId::category_range(Category::Rent, 0);
        let number = InputId::category_number(Category::Rent, 0);

        assert_ne!(range, number);
        assert_eq!(range.to_string(), "range-rent-0");
        assert_eq!(number.to_string(), "number-rent-0");
        assert_eq!(range.kind(), InputKind::Range);
        assert_eq!(number.kind(), InputKind::Number);
        assert_eq!(number.category(), Some(Category::Rent));
        assert_eq!(InputId::RentRatio.category(), None);
    }

    #[test]
    fn test_focus_returns_to_edited_element_after_rerender() {
        let groceries = InputId::category_number(Category::Groceries, 2);
        let ids = [InputId::Income1, InputId::Income2, groceries];
        let mut coordinator = FocusCoordinator::new();

        render_all(&mut coordinator, &ids);
        coordinator.restore_focus();
        assert_eq!(coordinator.focused(), Some(InputId::Income1));

        coordinator.note_edit(groceries);
        render_all(&mut coordinator, &ids);
        assert!(coordinator.restore_focus());
        assert!(coordinator.is_focused(groceries));

        // A second pass with nothing new keeps focus still
        render_all(&mut coordinator, &ids);
        assert!(!coordinator.restore_focus());
        assert!(coordinator.is_focused(groceries));
    }

    #[test]
    fn test_missing_active_element_falls_back() {
        let slider = InputId::category_range(Category::Savings, 6);
        let mut coordinator = FocusCoordinator::new();

        coordinator.note_edit(slider);
        render_all(&mut coordinator, &[InputId::Income1, InputId::RentRatio]);
        coordinator.restore_focus();
        assert_eq!(coordinator.focused(), Some(InputId::Income1));

        // Once the slider is rendered again it takes focus back
        render_all(&mut coordinator, &[InputId::Income1, slider]);
        coordinator.restore_focus();
        assert_eq!(coordinator.focused(), Some(slider));
    }

    #[test]
    fn test_drag_state_machine() {
        let slider = InputId::category_range(Category::Rent, 0);
        let mut coordinator = FocusCoordinator::new();
        assert_eq!(coordinator.drag_state(), DragState::Idle);

        assert!(coordinator.pointer_down(slider));
        assert!(coordinator.is_dragging());
        assert!(coordinator.is_dragging_input(slider));
        assert_eq!(coordinator.dragging_input(), Some(slider));
        assert_eq!(coordinator.active_input(), Some(slider));

        assert_eq!(coordinator.pointer_up(), Some(slider));
        assert_eq!(coordinator.drag_state(), DragState::Idle);
        assert_eq!(coordinator.pointer_up(), None);
    }

    #[test]
    fn test_pointer_down_on_number_field_does_not_drag() {
        let mut coordinator = FocusCoordinator::new();
        assert!(!coordinator.pointer_down(InputId::Income2));
        assert!(!coordinator.is_dragging());
        assert_eq!(coordinator.active_input(), Some(InputId::Income2));
    }

    #[test]
    fn test_element_at() {
        let mut coordinator = FocusCoordinator::new();
        coordinator.begin_render();
        coordinator.register(InputId::RentRatio, Rect::new(4, 7, 10, 1));

        assert_eq!(
            coordinator.element_at(4, 7).map(|e| e.id),
            Some(InputId::RentRatio)
        );
        assert_eq!(
            coordinator.element_at(13, 7).map(|e| e.id),
            Some(InputId::RentRatio)
        );
        assert!(coordinator.element_at(14, 7).is_none());
        assert!(coordinator.element_at(5, 8).is_none());
    }

    #[test]
    fn test_tab_order_wraps() {
        let ids = [InputId::Income1, InputId::Income2, InputId::RentRatio];
        let mut coordinator = FocusCoordinator::new();
        render_all(&mut coordinator, &ids);
        coordinator.restore_focus();

        coordinator.focus_next();
        assert_eq!(coordinator.focused(), Some(InputId::Income2));
        coordinator.focus_next();
        coordinator.focus_next();
        assert_eq!(coordinator.focused(), Some(InputId::Income1));
        coordinator.focus_prev();
        assert_eq!(coordinator.focused(), Some(InputId::RentRatio));
        assert_eq!(coordinator.active_input(), Some(InputId::RentRatio));
    }
}
