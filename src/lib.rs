//! # spark-slots
//!
//! Slot-registration components for reactive terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! A container owns a [`SlotRegistry`] and hands its descendants a
//! [`SlotContext`] through the [`Scope`] every component is built in.
//! Components that find a context forward their pieces into it; components
//! that don't render those pieces in place.
//!
//! ```text
//! connect_button ── provides ──► Scope { slots: Some(registry) }
//!     │                               │
//!     │                    wallet_button(scope)
//!     │                      ├─ child_portal   → registry.append_element
//!     │                      └─ content_portal → registry.set_active_content
//!     ▼
//! [ Connect Wallet ]  • MetaMask  • Coinbase  <active panel | fallback>
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - Scope, slot capability, registry
//! - [`primitives`] - Element handles, constructors, portals
//! - [`widgets`] - Wallet button, connect button, demo app
//! - [`renderer`] - Frame flattening and terminal output
//! - [`state`] - Focus and keyboard bindings
//! - [`pipeline`] - Mount, render effect, event loop

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod types;
pub mod widgets;

// Re-export commonly used items
pub use types::*;

pub use engine::{Scope, SlotContext, SlotHost, SlotRegistry};

pub use error::MountError;

pub use primitives::{
    button, child_portal, content_portal, dynamic, empty, group, heading, list, modal, text,
    ButtonProps, Element, Node, TextProps,
};

pub use renderer::{render, Frame, Line, TerminalRenderer};

pub use pipeline::{mount, run, unmount, MountHandle};

pub use widgets::{
    connect_button, wallet_app, wallet_button, ConnectButton, ConnectButtonProps, WalletButton,
    WalletButtonProps,
};
