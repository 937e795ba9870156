//! Primitives - Element building blocks and slot portals.
//!
//! This module provides:
//! - [`Element`] - the renderable handle (identity equality)
//! - constructors: [`text`], [`heading`], [`button`], [`group`], [`list`],
//!   [`modal`], [`dynamic`], [`empty`]
//! - portals: [`child_portal`], [`content_portal`]
//!
//! # Architecture
//!
//! Components are plain functions taking a `&Scope` and props, returning an
//! `Element` (or a small handle struct exposing one). Whatever a component
//! needs to undo on unmount goes through `scope.on_cleanup`.
//!
//! Reactivity comes from [`dynamic`]: its getter runs on every render, so
//! signals read inside it become dependencies of the render effect.

mod element;
mod portal;
mod types;

pub use element::{
    button, button_with, dynamic, empty, group, heading, list, modal, text, text_with,
};
pub use portal::{child_portal, content_portal};
pub use types::*;
