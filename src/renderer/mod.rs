//! Renderer - Element tree to text frame, frame to terminal.
//!
//! - [`render`] - pure: flattens an element tree into a [`Frame`]
//! - [`TerminalRenderer`] - side effects: diffs frames onto the terminal

pub mod frame;
pub mod terminal;

pub use frame::{render, Frame, Line};
pub use terminal::TerminalRenderer;
