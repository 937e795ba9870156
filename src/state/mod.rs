//! State modules - Focus and keyboard input.
//!
//! - [`focus`] - focused button index, Tab cycling
//! - [`keyboard`] - crossterm conversion and key bindings

pub mod focus;
pub mod keyboard;

pub use focus::{
    blur, focus, focus_next, focus_previous, focused, focused_button, get_focused_index,
    has_focus, reset_focus_state,
};
pub use keyboard::{action_for, Action, KeyState, KeyboardEvent, Modifiers};
