//! Reactive Pipeline
//!
//! Connects the component tree to the terminal.
//!
//! ```text
//! Component Tree → render(root, focus) → Frame → TerminalRenderer
//!                  └──────── inside the ONE render effect ────────┘
//! ```
//!
//! - **Pure render**: `render` only reads (signals behind dynamic nodes, focus)
//! - **Side effects in effect**: only the render effect touches the terminal
//! - **Reactive dependencies**: whatever `render` reads is tracked

pub mod mount;

pub use mount::{dispatch, mount, run, tick, unmount, MountHandle};
