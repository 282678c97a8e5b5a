//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod donut;
pub mod input;
pub mod slider;

// Re-export commonly used widgets
pub use donut::Donut;
pub use input::{NumberEdit, NumberField};
pub use slider::Slider;
