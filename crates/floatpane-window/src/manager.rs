#![forbid(unsafe_code)]

//! Window manager: identity issue, stacking counter, and the live registry.
//!
//! # Invariants
//!
//! 1. `next_identity` returns a strictly increasing integer sequence
//!    starting at 1, stringified; no two windows it names ever collide.
//! 2. `next_stack_value` is strictly increasing and `current_top` always
//!    equals the most recently issued value.
//! 3. `register`/`unregister` never validate geometry; unknown identities
//!    are silent no-ops.

use std::cell::{Cell, RefCell};

use ahash::AHashMap;

use crate::controller::WindowHandle;

/// Coordinates identities and stacking order across many windows.
///
/// Interior-mutable so a shared `Rc<WindowManager>` can be handed to every
/// controller; the model is single-threaded, so plain `Cell` counters are
/// enough. Under true parallelism these would need atomics and the registry
/// a lock, but nothing here requires that today.
pub struct WindowManager {
    next_window_id: Cell<u64>,
    next_z: Cell<i32>,
    current_top: Cell<i32>,
    registry: RefCell<AHashMap<String, WindowHandle>>,
}

impl WindowManager {
    /// A manager whose stacking values start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_start_z(1)
    }

    /// A manager whose stacking values start at `start_z`, for hosts that
    /// must stack windows above existing chrome.
    #[must_use]
    pub fn with_start_z(start_z: i32) -> Self {
        Self {
            next_window_id: Cell::new(1),
            next_z: Cell::new(start_z),
            current_top: Cell::new(-1),
            registry: RefCell::new(AHashMap::new()),
        }
    }

    /// Issue the next window identity.
    pub fn next_identity(&self) -> String {
        let id = self.next_window_id.get();
        self.next_window_id.set(id + 1);
        id.to_string()
    }

    /// Issue the next stacking value and raise `current_top` to it.
    pub fn next_stack_value(&self) -> i32 {
        let z = self.next_z.get();
        self.next_z.set(z + 1);
        self.current_top.set(z);
        z
    }

    /// The highest stacking value issued so far, or -1 before any issue.
    #[must_use]
    pub fn current_top(&self) -> i32 {
        self.current_top.get()
    }

    /// Add a window handle to the registry, keyed by its identity.
    pub fn register(&self, handle: WindowHandle) {
        self.registry
            .borrow_mut()
            .insert(handle.id().to_string(), handle);
    }

    /// Remove a window from the registry. No-op for unknown identities.
    pub fn unregister(&self, id: &str) {
        self.registry.borrow_mut().remove(id);
    }

    /// Look up a live window by identity.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<WindowHandle> {
        self.registry.borrow().get(id).cloned()
    }

    /// Handles for every registered window, in no particular order.
    #[must_use]
    pub fn windows(&self) -> Vec<WindowHandle> {
        self.registry.borrow().values().cloned().collect()
    }

    /// Number of registered windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().len()
    }

    /// True when no window is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.borrow().is_empty()
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
