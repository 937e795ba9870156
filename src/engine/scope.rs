//! Scope - Ownership of component cleanups and the slot capability.
//!
//! Every component constructor receives a `&Scope`. The scope answers one
//! question for the component ("is there a slot host above me?") and collects
//! the cleanups the component registers while mounting.
//!
//! Scopes form a tree. `child()` and `provide()` create scopes that are
//! disposed together with their parent, but can also be disposed early to
//! unmount a single subtree. Cleanups run last-in-first-out, so teardown
//! mirrors mount order in reverse.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::registry::SlotContext;
use crate::types::Cleanup;

struct ScopeInner {
    slots: Option<SlotContext>,
    cleanups: RefCell<Vec<Cleanup>>,
    disposed: Cell<bool>,
}

/// Owner of cleanups, carrying an optional slot capability.
#[derive(Clone)]
pub struct Scope {
    inner: Rc<ScopeInner>,
}

impl Scope {
    /// A root scope with no slot capability.
    pub fn root() -> Self {
        Self::with_slots(None)
    }

    fn with_slots(slots: Option<SlotContext>) -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                slots,
                cleanups: RefCell::new(Vec::new()),
                disposed: Cell::new(false),
            }),
        }
    }

    /// Create a child scope that inherits this scope's capability.
    pub fn child(&self) -> Scope {
        self.nest(self.inner.slots.clone())
    }

    /// Create a child scope whose descendants see `slots`.
    pub fn provide(&self, slots: SlotContext) -> Scope {
        self.nest(Some(slots))
    }

    fn nest(&self, slots: Option<SlotContext>) -> Scope {
        let child = Scope::with_slots(slots);
        let for_parent = child.clone();
        self.on_cleanup(move || for_parent.dispose());
        child
    }

    /// The slot capability visible from this scope, if any.
    pub fn slots(&self) -> Option<SlotContext> {
        self.inner.slots.clone()
    }

    /// Register a cleanup to run when this scope is disposed.
    ///
    /// Runs immediately if the scope is already disposed.
    pub fn on_cleanup(&self, cleanup: impl FnOnce() + 'static) {
        if self.inner.disposed.get() {
            cleanup();
            return;
        }
        self.inner.cleanups.borrow_mut().push(Box::new(cleanup));
    }

    /// Run all cleanups, newest first. Later calls are no-ops.
    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        // Take the list first so cleanups may touch this scope without
        // hitting an outstanding borrow.
        let cleanups = std::mem::take(&mut *self.inner.cleanups.borrow_mut());
        for cleanup in cleanups.into_iter().rev() {
            cleanup();
        }
    }

    /// Whether `dispose` has run.
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SlotRegistry;

    #[test]
    fn test_root_has_no_slots() {
        let scope = Scope::root();
        assert!(scope.slots().is_none());
        assert!(scope.child().slots().is_none());
    }

    #[test]
    fn test_provide_is_inherited() {
        let registry = Rc::new(SlotRegistry::new());
        let root = Scope::root();
        let provided = root.provide(registry);

        assert!(provided.slots().is_some());
        assert!(provided.child().slots().is_some());
        assert!(root.slots().is_none());
    }

    #[test]
    fn test_cleanups_run_in_reverse_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let scope = Scope::root();

        for i in 0..3 {
            let log = log.clone();
            scope.on_cleanup(move || log.borrow_mut().push(i));
        }

        scope.dispose();
        scope.dispose();
        assert_eq!(*log.borrow(), vec![2, 1, 0]);
        assert!(scope.is_disposed());
    }

    #[test]
    fn test_parent_disposes_children() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let root = Scope::root();
        let child = root.child();

        let log_child = log.clone();
        child.on_cleanup(move || log_child.borrow_mut().push("child"));
        let log_root = log.clone();
        root.on_cleanup(move || log_root.borrow_mut().push("root"));

        root.dispose();
        assert_eq!(*log.borrow(), vec!["root", "child"]);
        assert!(child.is_disposed());
    }

    #[test]
    fn test_early_child_dispose() {
        let count = Rc::new(Cell::new(0));
        let root = Scope::root();
        let child = root.child();

        let count_clone = count.clone();
        child.on_cleanup(move || count_clone.set(count_clone.get() + 1));

        child.dispose();
        root.dispose();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cleanup_after_dispose_runs_immediately() {
        let ran = Rc::new(Cell::new(false));
        let scope = Scope::root();
        scope.dispose();

        let ran_clone = ran.clone();
        scope.on_cleanup(move || ran_clone.set(true));
        assert!(ran.get());
    }
}
