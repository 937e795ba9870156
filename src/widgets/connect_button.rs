//! Connect button - the container that collects wallet buttons.
//!
//! Owns a [`SlotRegistry`] and an `open` flag. Children are mounted once, in a
//! scope that provides the registry, whether or not the container is open.
//! Toggling only changes what is drawn:
//!
//! ```text
//! Collapsed:  [ Connect Wallet ]
//!
//! Expanded:   [ Connect Wallet ]
//!             <children rendered in place>
//!             • <registered element 0>
//!             • <registered element 1>
//!             <active content | fallback content | nothing>
//! ```

use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::engine::{Scope, SlotRegistry};
use crate::primitives::{button, dynamic, empty, group, list, modal, Element};

/// A child component mounted inside the container's provider scope.
pub type Child = Box<dyn FnOnce(&Scope) -> Element>;

/// Props for [`connect_button`].
pub struct ConnectButtonProps {
    /// Toggle label.
    pub label: String,
    /// Shown when expanded and nothing is active.
    pub fallback_content: Option<Element>,
    /// Children, mounted in order.
    pub children: Vec<Child>,
}

impl Default for ConnectButtonProps {
    fn default() -> Self {
        Self {
            label: "Connect Wallet".to_string(),
            fallback_content: None,
            children: Vec::new(),
        }
    }
}

/// A mounted connect button.
pub struct ConnectButton {
    view: Element,
    toggle: Element,
    registry: Rc<SlotRegistry>,
    open: Signal<bool>,
    provider: Scope,
}

impl ConnectButton {
    /// Root element of the container.
    pub fn view(&self) -> Element {
        self.view.clone()
    }

    /// The toggle button handle.
    pub fn toggle_button(&self) -> Element {
        self.toggle.clone()
    }

    /// Flip between collapsed and expanded.
    pub fn toggle(&self) {
        self.open.set(!self.open.get());
    }

    /// Whether the container is expanded.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Registered elements in insertion order.
    pub fn elements(&self) -> Vec<Element> {
        self.registry.elements()
    }

    /// Current active content.
    pub fn active_content(&self) -> Option<Element> {
        self.registry.active_content()
    }

    /// The scope children are mounted in.
    ///
    /// Use `provider().child()` to mount something that can be unmounted on
    /// its own later.
    pub fn provider(&self) -> &Scope {
        &self.provider
    }
}

/// Mount a connect button in `scope`.
pub fn connect_button(scope: &Scope, props: ConnectButtonProps) -> ConnectButton {
    let ConnectButtonProps {
        label,
        fallback_content,
        children,
    } = props;

    let registry = Rc::new(SlotRegistry::new());
    let open = signal(false);

    let provider = scope.provide(registry.clone());
    let child_views: Vec<Element> = children
        .into_iter()
        .map(|child| child(&provider))
        .collect();
    tracing::debug!(
        children = child_views.len(),
        registered = registry.len(),
        "connect button mounted"
    );

    let toggle = button(label, {
        let open = open.clone();
        move || {
            open.set(!open.get());
        }
    });

    let body = dynamic({
        let open = open.clone();
        let registry = registry.clone();
        let child_views = child_views.clone();
        move || {
            if !open.get() {
                return empty();
            }
            let shown = registry
                .active_content()
                .or_else(|| fallback_content.clone())
                .unwrap_or_else(empty);
            modal(vec![
                group(child_views.clone()),
                list(registry.elements()),
                shown,
            ])
        }
    });

    ConnectButton {
        view: group(vec![toggle.clone(), body]),
        toggle,
        registry,
        open,
        provider,
    }
}
