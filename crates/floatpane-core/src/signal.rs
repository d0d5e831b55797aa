#![forbid(unsafe_code)]

//! Observer channel: explicit publish-subscribe with releasable handles.
//!
//! [`Emitter`] replaces both ambient reactivity and global listener
//! registration. A subscriber gets back a [`Subscription`] it must hand back
//! to [`Emitter::unsubscribe`]; interactions that span multiple events (drag,
//! resize) acquire a subscription when they start and release it on every
//! exit path.
//!
//! # Invariants
//!
//! 1. `emit` snapshots the subscriber list before invoking anyone, so a
//!    callback may unsubscribe (itself included) without corrupting the
//!    dispatch in flight.
//! 2. `unsubscribe` is idempotent; unknown handles are ignored.
//! 3. Subscriber identity is never reused within one emitter.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Opaque handle identifying one subscriber of an [`Emitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Callback<T> = Rc<dyn Fn(&T)>;

struct EmitterInner<T> {
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

/// A single-threaded publish-subscribe channel.
///
/// Cloning an `Emitter` yields another handle to the same channel, so a host
/// can hand the same pointer stream to any number of windows.
pub struct Emitter<T> {
    inner: Rc<RefCell<EmitterInner<T>>>,
}

impl<T> Emitter<T> {
    /// Create a new channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(EmitterInner {
                next_id: 1,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Register a subscriber and return its release handle.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        Subscription(id)
    }

    /// Remove a subscriber. Unknown handles are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(id, _)| *id != subscription.0);
    }

    /// Deliver `value` to every subscriber registered at the time of the call.
    pub fn emit(&self, value: &T) {
        // Snapshot first: callbacks may unsubscribe mid-dispatch.
        let snapshot: Vec<Callback<T>> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in snapshot {
            callback(value);
        }
    }

    /// Number of currently registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
