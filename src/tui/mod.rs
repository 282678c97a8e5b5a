//! Terminal User Interface module
//!
//! An interactive budget form built on ratatui: income fields, a rent
//! ratio slider, a donut chart of the allocation and, in the advanced
//! view, a slider and number field per category.

pub mod app;
pub mod event;
pub mod focus;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use focus::{DragState, FocusCoordinator, InputId};
pub use terminal::run_tui;
