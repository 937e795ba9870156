//! Wallet button - a trigger plus a detail panel.
//!
//! Each instance owns one `expanded` signal. The trigger flips it; the panel
//! exists only while it is true. The trigger goes through [`child_portal`] and
//! the panel through [`content_portal`], so the same widget works standalone
//! (both inline, panel under the trigger) and inside a
//! [`connect_button`](super::connect_button) (trigger in the list, panel in the
//! shared slot).

use spark_signals::{signal, Signal};

use crate::engine::Scope;
use crate::primitives::{button, child_portal, content_portal, group, modal, text, Element};

/// Props for [`wallet_button`].
#[derive(Clone, Debug)]
pub struct WalletButtonProps {
    /// Trigger label.
    pub label: String,
    /// Text shown inside the detail panel.
    pub panel_text: String,
}

impl Default for WalletButtonProps {
    fn default() -> Self {
        Self {
            label: "Wallet".to_string(),
            panel_text: "Wallet Connect UI".to_string(),
        }
    }
}

impl WalletButtonProps {
    /// The MetaMask wallet.
    pub fn metamask() -> Self {
        Self {
            label: "MetaMask".to_string(),
            panel_text: "Metamask Connect UI".to_string(),
        }
    }

    /// The Coinbase wallet.
    pub fn coinbase() -> Self {
        Self {
            label: "Coinbase".to_string(),
            panel_text: "Coinbase Connect UI".to_string(),
        }
    }
}

/// A mounted wallet button.
pub struct WalletButton {
    view: Element,
    trigger: Element,
    panel: Element,
    expanded: Signal<bool>,
}

impl WalletButton {
    /// What to render in place (empty parts when forwarded to a host).
    pub fn view(&self) -> Element {
        self.view.clone()
    }

    /// The trigger button handle.
    pub fn trigger(&self) -> Element {
        self.trigger.clone()
    }

    /// The detail panel handle.
    pub fn panel(&self) -> Element {
        self.panel.clone()
    }

    /// Whether the panel is open.
    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }
}

/// Mount a wallet button in `scope`.
pub fn wallet_button(scope: &Scope, props: WalletButtonProps) -> WalletButton {
    let expanded = signal(false);

    let trigger = button(props.label, {
        let expanded = expanded.clone();
        move || {
            expanded.set(!expanded.get());
        }
    });
    let panel = modal(vec![text(props.panel_text)]);

    let trigger_view = child_portal(scope, {
        let trigger = trigger.clone();
        move || trigger.clone()
    });
    let panel_view = content_portal(scope, {
        let expanded = expanded.clone();
        let panel = panel.clone();
        move || expanded.get().then(|| panel.clone())
    });

    WalletButton {
        view: group(vec![trigger_view, panel_view]),
        trigger,
        panel,
        expanded,
    }
}

/// Mount a MetaMask button and return its view.
pub fn metamask_button(scope: &Scope) -> Element {
    wallet_button(scope, WalletButtonProps::metamask()).view()
}

/// Mount a Coinbase button and return its view.
pub fn coinbase_button(scope: &Scope) -> Element {
    wallet_button(scope, WalletButtonProps::coinbase()).view()
}
