//! Wallet widgets built on the slot portals.
//!
//! - [`wallet_button`] - trigger + panel leaf widget
//! - [`connect_button`] - container that collects triggers and shows one panel
//! - [`wallet_app`] - the demo layout: direct buttons, then encapsulated ones

pub mod connect_button;
pub mod wallet_button;

pub use connect_button::{connect_button, Child, ConnectButton, ConnectButtonProps};
pub use wallet_button::{
    coinbase_button, metamask_button, wallet_button, WalletButton, WalletButtonProps,
};

use crate::engine::Scope;
use crate::primitives::{group, heading, text, Element};

/// Build the demo application.
///
/// The same two wallets appear twice: once standalone, once inside a connect
/// button with a themed fallback.
pub fn wallet_app(scope: &Scope) -> Element {
    let direct = vec![
        heading("Direct Wallet Button"),
        metamask_button(scope),
        coinbase_button(scope),
    ];

    let container = connect_button(
        scope,
        ConnectButtonProps {
            fallback_content: Some(text("Themed Welcome UI")),
            children: vec![
                Box::new(metamask_button) as Child,
                Box::new(coinbase_button) as Child,
            ],
            ..Default::default()
        },
    );

    let mut children = direct;
    children.push(heading("Encapsulated Wallet Button"));
    children.push(container.view());
    group(children)
}
