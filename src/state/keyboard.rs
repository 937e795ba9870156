//! Keyboard Module - Key events and the navigation bindings
//!
//! Converts crossterm key events into [`KeyboardEvent`] and maps them to the
//! handful of [`Action`]s the demo understands:
//!
//! | Key            | Action        |
//! |----------------|---------------|
//! | Tab, Down      | FocusNext     |
//! | Shift+Tab, Up  | FocusPrevious |
//! | Enter, Space   | Activate      |
//! | q, Esc, Ctrl+C | Quit          |
//!
//! Release events map to nothing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "Tab")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

impl From<KeyEvent> for KeyboardEvent {
    fn from(event: KeyEvent) -> Self {
        let key = match event.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "BackTab".to_string(),
            KeyCode::Esc => "Escape".to_string(),
            KeyCode::Up => "ArrowUp".to_string(),
            KeyCode::Down => "ArrowDown".to_string(),
            KeyCode::Left => "ArrowLeft".to_string(),
            KeyCode::Right => "ArrowRight".to_string(),
            other => format!("{other:?}"),
        };
        let modifiers = Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        };
        let state = match event.kind {
            KeyEventKind::Press => KeyState::Press,
            KeyEventKind::Repeat => KeyState::Repeat,
            KeyEventKind::Release => KeyState::Release,
        };
        Self {
            key,
            modifiers,
            state,
        }
    }
}

// =============================================================================
// BINDINGS
// =============================================================================

/// What a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    FocusNext,
    FocusPrevious,
    Activate,
    Quit,
}

/// Map a key event to an action.
pub fn action_for(event: &KeyboardEvent) -> Option<Action> {
    if event.state == KeyState::Release {
        return None;
    }
    let m = event.modifiers;
    match event.key.as_str() {
        "c" if m.ctrl => Some(Action::Quit),
        "q" | "Escape" => Some(Action::Quit),
        "Tab" if m.shift => Some(Action::FocusPrevious),
        "BackTab" | "ArrowUp" => Some(Action::FocusPrevious),
        "Tab" | "ArrowDown" => Some(Action::FocusNext),
        "Enter" | "Space" => Some(Action::Activate),
        _ => None,
    }
}
