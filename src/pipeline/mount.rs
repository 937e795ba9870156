//! Mount API - Application lifecycle and render effect.
//!
//! This module provides the entry point for running a component tree in the
//! terminal. It sets up the render effect that re-renders whenever a signal
//! read during rendering changes, and routes key presses to focus and button
//! activation.
//!
//! # Example
//!
//! ```ignore
//! use spark_slots::pipeline::mount;
//! use spark_slots::widgets::wallet_app;
//!
//! let handle = mount::mount(wallet_app)?;
//!
//! // Option 1: Run blocking event loop
//! mount::run(&handle)?;
//!
//! // Option 2: Tick manually in your own loop
//! while mount::tick(&handle, Duration::from_millis(100))? {
//!     // Your logic here
//! }
//!
//! mount::unmount(handle)?;
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event};
use spark_signals::effect;

use crate::engine::Scope;
use crate::error::MountError;
use crate::primitives::Element;
use crate::renderer::{render, Frame, TerminalRenderer};
use crate::state::focus;
use crate::state::keyboard::{action_for, Action, KeyboardEvent};

/// How long [`run`] waits for input before re-checking the running flag.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`].
///
/// Holds:
/// - The app scope (disposed on unmount, tearing down every component)
/// - The render effect stop function
/// - The latest frame (for routing key presses)
/// - The running flag (cleared on quit or unmount)
pub struct MountHandle {
    scope: Scope,
    frame: Rc<RefCell<Frame>>,
    renderer: Rc<RefCell<TerminalRenderer>>,
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Rc<Cell<bool>>,
}

impl MountHandle {
    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Stop the application (clears the running flag).
    pub fn stop(&self) {
        self.running.set(false);
    }

    /// Apply an action to the latest frame.
    ///
    /// Returns false once the app should quit.
    pub fn dispatch(&self, action: Action) -> bool {
        let keep_running = dispatch(&self.frame, action);
        if !keep_running {
            self.stop();
        }
        keep_running
    }

    /// Redraw everything from the latest frame (after resize).
    pub fn redraw(&self) {
        let mut renderer = self.renderer.borrow_mut();
        renderer.invalidate();
        if let Err(err) = renderer.render(&self.frame.borrow()) {
            tracing::warn!(%err, "redraw failed");
        }
    }

    fn teardown(&mut self) -> Option<()> {
        let stop = self.stop_effect.take()?;
        self.running.set(false);
        stop();
        self.scope.dispose();
        Some(())
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Best effort if unmount() was never called.
        if self.teardown().is_some() {
            let _ = self.renderer.borrow_mut().exit_fullscreen();
        }
    }
}

// =============================================================================
// Mount
// =============================================================================

/// Build `app` under a fresh root scope and start rendering it.
///
/// Enters raw mode and the alternate screen, then installs the single render
/// effect.
pub fn mount(app: impl FnOnce(&Scope) -> Element) -> Result<MountHandle, MountError> {
    let scope = Scope::root();
    let root = app(&scope);

    let renderer = Rc::new(RefCell::new(TerminalRenderer::new()));
    if let Err(err) = renderer.borrow_mut().enter_fullscreen() {
        scope.dispose();
        return Err(MountError::Setup(err));
    }

    let frame = Rc::new(RefCell::new(Frame::default()));
    let running = Rc::new(Cell::new(true));

    let stop_fn = effect({
        let frame = frame.clone();
        let renderer = renderer.clone();
        let running = running.clone();
        move || {
            if !running.get() {
                return;
            }
            // Reads focus and every signal behind dynamic nodes.
            let next = render(&root, focus::focused());
            if let Err(err) = renderer.borrow_mut().render(&next) {
                tracing::warn!(%err, "frame draw failed");
            }
            *frame.borrow_mut() = next;
        }
    });

    tracing::info!(buttons = frame.borrow().buttons().len(), "mounted");

    Ok(MountHandle {
        scope,
        frame,
        renderer,
        stop_effect: Some(Box::new(stop_fn)),
        running,
    })
}

/// Stop rendering, dispose the app, and restore the terminal.
pub fn unmount(mut handle: MountHandle) -> Result<(), MountError> {
    if handle.teardown().is_none() {
        return Ok(());
    }
    tracing::info!("unmounted");
    let result = handle.renderer.borrow_mut().exit_fullscreen();
    result.map_err(MountError::Restore)
}

// =============================================================================
// Input
// =============================================================================

/// Apply `action` against `frame`.
///
/// Returns false for [`Action::Quit`]. The frame borrow is released before a
/// button is pressed, since the press re-runs the render effect.
pub fn dispatch(frame: &RefCell<Frame>, action: Action) -> bool {
    match action {
        Action::FocusNext => {
            let count = frame.borrow().buttons().len();
            focus::focus_next(count);
        }
        Action::FocusPrevious => {
            let count = frame.borrow().buttons().len();
            focus::focus_previous(count);
        }
        Action::Activate => {
            let target = focus::focused_button(&frame.borrow());
            if let Some(target) = target {
                tracing::debug!(label = ?target.label(), "button activated");
                target.press();
            }
        }
        Action::Quit => return false,
    }
    true
}

/// Wait up to `timeout` for one input event and handle it.
///
/// Returns false once the app should quit.
pub fn tick(handle: &MountHandle, timeout: Duration) -> Result<bool, MountError> {
    if !handle.is_running() {
        return Ok(false);
    }
    if !event::poll(timeout).map_err(MountError::Input)? {
        return Ok(true);
    }
    match event::read().map_err(MountError::Input)? {
        Event::Key(key) => {
            let event = KeyboardEvent::from(key);
            if let Some(action) = action_for(&event) {
                return Ok(handle.dispatch(action));
            }
        }
        Event::Resize(_, _) => handle.redraw(),
        _ => {}
    }
    Ok(handle.is_running())
}

/// Run the blocking event loop until quit.
pub fn run(handle: &MountHandle) -> Result<(), MountError> {
    while tick(handle, POLL_INTERVAL)? {}
    Ok(())
}
