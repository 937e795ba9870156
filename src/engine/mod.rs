//! Component engine - scopes and slot registries.
//!
//! - [`Scope`] owns cleanups and carries the optional slot capability.
//! - [`SlotRegistry`] is the container-side state behind [`SlotHost`].

pub mod registry;
pub mod scope;

pub use registry::{SlotContext, SlotHost, SlotRegistry};
pub use scope::Scope;
