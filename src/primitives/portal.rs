//! Portals - Forward content into the nearest slot host.
//!
//! - [`child_portal`] - registers content into the host's element list
//! - [`content_portal`] - writes content into the host's active slot
//!
//! Both check `scope.slots()` once, when constructed. Without a host they
//! return the content for inline rendering. With a host they return
//! [`empty`] and forward the content instead.
//!
//! # Lifecycle
//!
//! ## child_portal()
//! - On mount: content getter evaluated once, handle appended
//! - On dispose: the same handle removed
//! - Later changes from the getter are NOT forwarded
//!
//! ## content_portal()
//! - On mount and whenever the getter yields a different handle: active slot
//!   overwritten (`None` included)
//! - On dispose: active slot cleared

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::effect;

use super::element::{dynamic, empty};
use super::types::Element;
use crate::engine::Scope;

/// Register content into the enclosing element list, or render it inline.
///
/// The handle is captured at mount; the host keeps that exact handle until
/// the scope is disposed.
pub fn child_portal(scope: &Scope, content: impl Fn() -> Element + 'static) -> Element {
    let Some(slots) = scope.slots() else {
        return dynamic(content);
    };

    let handle = content();
    tracing::debug!(?handle, "child portal mounted");
    slots.append_element(handle.clone());

    scope.on_cleanup(move || {
        tracing::debug!(?handle, "child portal disposed");
        slots.remove_element(&handle);
    });

    empty()
}

/// Forward content into the enclosing active slot, or render it inline.
///
/// The getter is tracked: reading signals inside it makes the portal
/// re-forward whenever the resulting handle changes identity.
pub fn content_portal(
    scope: &Scope,
    content: impl Fn() -> Option<Element> + 'static,
) -> Element {
    let Some(slots) = scope.slots() else {
        return dynamic(move || content().unwrap_or_else(empty));
    };

    // Outer None = nothing forwarded yet.
    let last: Rc<RefCell<Option<Option<Element>>>> = Rc::new(RefCell::new(None));

    let slots_for_effect = slots.clone();
    let stop = effect(move || {
        let next = content();
        let changed = match &*last.borrow() {
            Some(previous) => previous != &next,
            None => true,
        };
        if !changed {
            return;
        }
        *last.borrow_mut() = Some(next.clone());
        slots_for_effect.set_active_content(next);
    });

    scope.on_cleanup(move || {
        stop();
        tracing::debug!("content portal disposed");
        slots.set_active_content(None);
    });

    empty()
}
