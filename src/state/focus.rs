//! Focus System - Keyboard navigation between buttons
//!
//! Focus is an index into the button order of the latest frame (see
//! [`Frame::buttons`](crate::renderer::Frame::buttons)). The index lives in a
//! thread-local signal, so the render effect re-runs when focus moves.
//!
//! The button count changes as containers open and panels appear. Nothing
//! here clamps the index; an index past the end simply renders unfocused
//! until the next `focus_next` / `focus_previous` wraps it.
//!
//! # Example
//!
//! ```ignore
//! use spark_slots::state::focus;
//!
//! focus::focus_next(frame.buttons().len());
//! if let Some(button) = focus::focused_button(&frame) {
//!     button.press();
//! }
//! ```

use spark_signals::{signal, Signal};

use crate::primitives::Element;
use crate::renderer::Frame;

// =============================================================================
// FOCUSED INDEX SIGNAL
// =============================================================================

thread_local! {
    static FOCUSED_INDEX: Signal<i32> = signal(-1);
}

/// Get the currently focused button index (-1 if none)
pub fn get_focused_index() -> i32 {
    FOCUSED_INDEX.with(|s| s.get())
}

/// Focused index as an Option, for [`render`](crate::renderer::render).
pub fn focused() -> Option<usize> {
    usize::try_from(get_focused_index()).ok()
}

/// Check if any button is focused
pub fn has_focus() -> bool {
    get_focused_index() >= 0
}

/// Focus a specific index.
pub fn focus(index: usize) {
    let index = i32::try_from(index).unwrap_or(i32::MAX);
    FOCUSED_INDEX.with(|s| s.set(index));
}

/// Clear focus.
pub fn blur() {
    FOCUSED_INDEX.with(|s| s.set(-1));
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Move focus forward, wrapping at `count`.
///
/// Returns the new index, or None if there is nothing focusable.
pub fn focus_next(count: usize) -> Option<usize> {
    if count == 0 {
        blur();
        return None;
    }
    let next = match focused() {
        Some(current) if current + 1 < count => current + 1,
        _ => 0,
    };
    focus(next);
    Some(next)
}

/// Move focus backward, wrapping at `count`.
///
/// Returns the new index, or None if there is nothing focusable.
pub fn focus_previous(count: usize) -> Option<usize> {
    if count == 0 {
        blur();
        return None;
    }
    let previous = match focused() {
        Some(current) if current > 0 && current < count => current - 1,
        _ => count - 1,
    };
    focus(previous);
    Some(previous)
}

/// The button under focus in `frame`.
pub fn focused_button(frame: &Frame) -> Option<Element> {
    focused().and_then(|index| frame.button_at(index).cloned())
}

// =============================================================================
// RESET (for testing)
// =============================================================================

/// Reset focus state.
pub fn reset_focus_state() {
    blur();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{button, group};
    use crate::renderer::render;

    #[test]
    fn test_initial_no_focus() {
        reset_focus_state();
        assert!(!has_focus());
        assert_eq!(focused(), None);
    }

    #[test]
    fn test_focus_next_wraps() {
        reset_focus_state();
        assert_eq!(focus_next(3), Some(0));
        assert_eq!(focus_next(3), Some(1));
        assert_eq!(focus_next(3), Some(2));
        assert_eq!(focus_next(3), Some(0));
    }

    #[test]
    fn test_focus_previous_wraps() {
        reset_focus_state();
        assert_eq!(focus_previous(3), Some(2));
        assert_eq!(focus_previous(3), Some(1));
        assert_eq!(focus_previous(3), Some(0));
        assert_eq!(focus_previous(3), Some(2));
    }

    #[test]
    fn test_out_of_range_recovers() {
        reset_focus_state();
        focus(5);
        assert_eq!(focus_next(2), Some(0));
        focus(5);
        assert_eq!(focus_previous(2), Some(1));
    }

    #[test]
    fn test_nothing_focusable() {
        focus(1);
        assert_eq!(focus_next(0), None);
        assert!(!has_focus());
    }

    #[test]
    fn test_focused_button() {
        reset_focus_state();
        let a = button("A", || {});
        let b = button("B", || {});
        let frame = render(&group(vec![a, b.clone()]), None);

        assert_eq!(focused_button(&frame), None);
        focus(1);
        assert_eq!(focused_button(&frame), Some(b));
        reset_focus_state();
    }
}
