//! Errors at the terminal boundary.
//!
//! Component operations never fail; only setting up, reading from, and
//! restoring the terminal can.

use std::io;

use thiserror::Error;

/// Failure while driving the terminal.
#[derive(Error, Debug)]
pub enum MountError {
    /// Entering raw mode or the alternate screen failed.
    #[error("terminal setup failed: {0}")]
    Setup(#[source] io::Error),

    /// Polling or reading input events failed.
    #[error("reading terminal input failed: {0}")]
    Input(#[source] io::Error),

    /// Leaving the alternate screen or raw mode failed.
    #[error("terminal restore failed: {0}")]
    Restore(#[source] io::Error),
}
