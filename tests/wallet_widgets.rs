//! Wallet buttons standalone and inside a connect button.

use spark_signals::signal;
use spark_slots::primitives::child_portal;
use spark_slots::widgets::Child;
use spark_slots::{
    connect_button, render, text, wallet_app, wallet_button, ConnectButton, ConnectButtonProps,
    Scope, WalletButtonProps,
};

fn empty_container() -> ConnectButton {
    connect_button(
        &Scope::root(),
        ConnectButtonProps {
            fallback_content: Some(text("Themed Welcome UI")),
            ..Default::default()
        },
    )
}

#[test]
fn standalone_widget_renders_inline() {
    let scope = Scope::root();
    let wallet = wallet_button(&scope, WalletButtonProps::metamask());

    let frame = render(&wallet.view(), None);
    assert_eq!(frame.to_text(), "[ MetaMask ]");

    frame.find_button("MetaMask").expect("trigger").press();
    let frame = render(&wallet.view(), None);
    assert!(frame.contains("[ MetaMask ]"));
    assert!(frame.contains("Metamask Connect UI"));
}

#[test]
fn widget_under_container_registers_trigger() {
    let container = empty_container();
    let wallet = wallet_button(container.provider(), WalletButtonProps::metamask());

    // Nothing rendered in place.
    assert!(render(&wallet.view(), None).lines().is_empty());
    assert_eq!(container.elements(), vec![wallet.trigger()]);
    assert_eq!(container.active_content(), None);

    wallet.trigger().press();
    assert_eq!(container.active_content(), Some(wallet.panel()));

    container.toggle();
    let frame = render(&container.view(), None);
    assert!(frame.contains("• [ MetaMask ]"));
    assert!(frame.contains("Metamask Connect UI"));
    assert!(!frame.contains("Themed Welcome UI"));
}

#[test]
fn last_opened_panel_wins() {
    let container = empty_container();
    let a = wallet_button(container.provider(), WalletButtonProps::metamask());
    let b = wallet_button(container.provider(), WalletButtonProps::coinbase());

    a.trigger().press();
    b.trigger().press();

    assert!(a.is_expanded() && b.is_expanded());
    assert_eq!(container.active_content(), Some(b.panel()));
    assert_eq!(container.elements(), vec![a.trigger(), b.trigger()]);

    container.toggle();
    let frame = render(&container.view(), None);
    assert!(frame.contains("Coinbase Connect UI"));
    assert!(!frame.contains("Metamask Connect UI"));
}

#[test]
fn closing_any_panel_clears_shared_slot() {
    let container = empty_container();
    let a = wallet_button(container.provider(), WalletButtonProps::metamask());
    let b = wallet_button(container.provider(), WalletButtonProps::coinbase());

    a.trigger().press();
    b.trigger().press();
    // A was not showing, but its portal still writes None.
    a.trigger().press();

    assert!(b.is_expanded());
    assert_eq!(container.active_content(), None);
}

#[test]
fn mounting_late_widget_clears_shown_panel() {
    let container = empty_container();
    let a = wallet_button(container.provider(), WalletButtonProps::metamask());
    a.trigger().press();
    assert_eq!(container.active_content(), Some(a.panel()));

    // A freshly mounted panel forwards its closed state once.
    let b = wallet_button(container.provider(), WalletButtonProps::coinbase());
    assert!(a.is_expanded());
    assert!(!b.is_expanded());
    assert_eq!(container.active_content(), None);
    assert_eq!(container.elements(), vec![a.trigger(), b.trigger()]);
}

#[test]
fn toggling_preserves_registry() {
    let container = empty_container();
    let a = wallet_button(container.provider(), WalletButtonProps::metamask());
    let b = wallet_button(container.provider(), WalletButtonProps::coinbase());
    a.trigger().press();

    container.toggle();
    let open_text = render(&container.view(), None).to_text();
    container.toggle();
    assert_eq!(render(&container.view(), None).to_text(), "[ Connect Wallet ]");
    container.toggle();

    assert_eq!(container.elements(), vec![a.trigger(), b.trigger()]);
    assert_eq!(container.active_content(), Some(a.panel()));
    assert_eq!(render(&container.view(), None).to_text(), open_text);
}

#[test]
fn unmounting_widget_unregisters_it() {
    let container = empty_container();
    let keep = wallet_button(container.provider(), WalletButtonProps::metamask());
    let widget_scope = container.provider().child();
    let gone = wallet_button(&widget_scope, WalletButtonProps::coinbase());

    gone.trigger().press();
    assert_eq!(container.active_content(), Some(gone.panel()));

    widget_scope.dispose();
    assert_eq!(container.elements(), vec![keep.trigger()]);
    assert_eq!(container.active_content(), None);

    container.toggle();
    assert!(render(&container.view(), None).contains("Themed Welcome UI"));
}

#[test]
fn disposing_container_scope_unregisters_everything() {
    let root = Scope::root();
    let container = connect_button(
        &root,
        ConnectButtonProps {
            children: vec![
                Box::new(|s: &Scope| wallet_button(s, WalletButtonProps::metamask()).view()) as Child,
                Box::new(|s: &Scope| wallet_button(s, WalletButtonProps::coinbase()).view()) as Child,
            ],
            ..Default::default()
        },
    );
    assert_eq!(container.elements().len(), 2);

    root.dispose();
    assert!(container.elements().is_empty());
}

#[test]
fn child_registration_is_mount_once() {
    let container = empty_container();
    let first = text("first");
    let second = text("second");
    let current = signal(first.clone());

    let current_for_portal = current.clone();
    child_portal(container.provider(), move || current_for_portal.get());
    current.set(second);

    // The trigger side does not follow later changes; the panel side does.
    assert_eq!(container.elements(), vec![first]);
}

#[test]
fn demo_app_layout() {
    let scope = Scope::root();
    let app = wallet_app(&scope);

    let frame = render(&app, None);
    let expected = [
        "Direct Wallet Button",
        "[ MetaMask ]",
        "[ Coinbase ]",
        "Encapsulated Wallet Button",
        "[ Connect Wallet ]",
    ];
    assert_eq!(frame.to_text(), expected.join("\n"));

    frame.find_button("Connect Wallet").expect("toggle").press();
    let frame = render(&app, None);
    assert!(frame.contains("• [ MetaMask ]"));
    assert!(frame.contains("• [ Coinbase ]"));
    assert!(frame.contains("Themed Welcome UI"));

    // Second MetaMask button is the registered one inside the container.
    frame.buttons()[3].press();
    let frame = render(&app, None);
    assert!(frame.contains("Metamask Connect UI"));
    assert!(!frame.contains("Themed Welcome UI"));
    // Only the container's panel opened; the direct MetaMask stays closed.
    assert!(frame.find_line("Metamask Connect UI") > frame.find_line("Encapsulated Wallet Button"));
}
