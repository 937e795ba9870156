//! Slot Registry - Element list and active-content slot for one container.
//!
//! Descendants never see the registry itself. They receive a [`SlotContext`],
//! a shared handle to the [`SlotHost`] capability with exactly three
//! operations:
//! - `append_element` - push a handle to the end of the element list
//! - `remove_element` - drop every entry identity-equal to a handle
//! - `set_active_content` - overwrite the single active slot (or clear it)
//!
//! All three are total. Removing an absent handle and clearing an empty slot
//! are no-ops.
//!
//! The element list lives in a `RefCell` so mutations never read a signal,
//! and is mirrored into a signal after every change. Render effects read the
//! signals and re-run when a descendant registers or unregisters.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::primitives::Element;

// =============================================================================
// Capability
// =============================================================================

/// The registration capability exposed to descendants of a container.
pub trait SlotHost {
    /// Append `element` to the end of the element list.
    fn append_element(&self, element: Element);

    /// Remove all entries identity-equal to `element`.
    fn remove_element(&self, element: &Element);

    /// Replace the active content (including with `None`).
    fn set_active_content(&self, content: Option<Element>);
}

/// Shared handle to a slot capability, carried by [`Scope`](super::Scope).
pub type SlotContext = Rc<dyn SlotHost>;

// =============================================================================
// Registry
// =============================================================================

/// Reactive slot registry owned by a single container.
pub struct SlotRegistry {
    elements: RefCell<Vec<Element>>,
    elements_signal: Signal<Vec<Element>>,
    active: Signal<Option<Element>>,
}

impl SlotRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            elements: RefCell::new(Vec::new()),
            elements_signal: signal(Vec::new()),
            active: signal(None),
        }
    }

    /// Registered elements in insertion order.
    ///
    /// Creates a reactive dependency when called from a derived/effect.
    pub fn elements(&self) -> Vec<Element> {
        self.elements_signal.get()
    }

    /// Current active content.
    ///
    /// Creates a reactive dependency when called from a derived/effect.
    pub fn active_content(&self) -> Option<Element> {
        self.active.get()
    }

    /// Number of registered elements (not reactive).
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    /// True if no element is registered (not reactive).
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    fn publish(&self) {
        let snapshot = self.elements.borrow().clone();
        self.elements_signal.set(snapshot);
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotHost for SlotRegistry {
    fn append_element(&self, element: Element) {
        tracing::debug!(?element, "slot element appended");
        self.elements.borrow_mut().push(element);
        self.publish();
    }

    fn remove_element(&self, element: &Element) {
        let removed = {
            let mut elements = self.elements.borrow_mut();
            let before = elements.len();
            elements.retain(|e| !e.ptr_eq(element));
            before - elements.len()
        };
        if removed == 0 {
            return;
        }
        tracing::debug!(?element, removed, "slot element removed");
        self.publish();
    }

    fn set_active_content(&self, content: Option<Element>) {
        tracing::debug!(active = content.is_some(), "active content set");
        self.active.set(content);
    }
}
