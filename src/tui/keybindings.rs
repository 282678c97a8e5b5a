//! Keybinding definitions
//!
//! Defines all keyboard shortcuts for different contexts

use crossterm::event::{KeyCode, KeyModifiers};

use super::focus::InputKind;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active on a focused number field
    Number,
    /// Active on a focused slider
    Slider,
    /// Active on a focused button
    Button,
    /// Active in dialogs
    Dialog,
}

impl KeyContext {
    /// Heading used in the help dialog
    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::Number => "Number Fields",
            Self::Slider => "Sliders",
            Self::Button => "Buttons",
            Self::Dialog => "Dialogs",
        }
    }
}

impl From<InputKind> for KeyContext {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::Number => Self::Number,
            InputKind::Range => Self::Slider,
            InputKind::Button => Self::Button,
        }
    }
}

const fn binding(key: KeyCode, description: &'static str, context: KeyContext) -> Keybinding {
    Keybinding {
        key,
        modifiers: KeyModifiers::NONE,
        description,
        context,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    binding(KeyCode::Char('q'), "Quit", KeyContext::Global),
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    binding(KeyCode::Char('?'), "Help", KeyContext::Global),
    binding(KeyCode::Tab, "Next input", KeyContext::Global),
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Previous input",
        context: KeyContext::Global,
    },
    binding(KeyCode::Char('j'), "Next input", KeyContext::Global),
    binding(KeyCode::Char('k'), "Previous input", KeyContext::Global),
    binding(KeyCode::Char('a'), "Toggle advanced view", KeyContext::Global),
    Keybinding {
        key: KeyCode::Char('R'),
        modifiers: KeyModifiers::SHIFT,
        description: "Reset all categories",
        context: KeyContext::Global,
    },
    binding(KeyCode::Char('['), "Previous chart slice", KeyContext::Global),
    binding(KeyCode::Char(']'), "Next chart slice", KeyContext::Global),
    // Number fields
    binding(KeyCode::Char('0'), "Type digits 0-9", KeyContext::Number),
    binding(KeyCode::Backspace, "Delete last digit", KeyContext::Number),
    binding(KeyCode::Delete, "Clear field", KeyContext::Number),
    binding(KeyCode::Char('r'), "Reset category to default", KeyContext::Number),
    // Sliders
    binding(KeyCode::Left, "Decrease", KeyContext::Slider),
    binding(KeyCode::Right, "Increase", KeyContext::Slider),
    binding(KeyCode::PageDown, "Decrease x10", KeyContext::Slider),
    binding(KeyCode::PageUp, "Increase x10", KeyContext::Slider),
    binding(KeyCode::Home, "Minimum", KeyContext::Slider),
    binding(KeyCode::End, "Maximum", KeyContext::Slider),
    binding(KeyCode::Char('r'), "Reset category to default", KeyContext::Slider),
    // Buttons
    binding(KeyCode::Enter, "Press", KeyContext::Button),
    // Dialog
    binding(KeyCode::Esc, "Close dialog", KeyContext::Dialog),
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT) {
        // Only show Shift for non-character keys
        if !matches!(kb.key, KeyCode::Char(_) | KeyCode::BackTab) {
            parts.push("Shift");
        }
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}
