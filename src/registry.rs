//! Event registry seam
//!
//! The host framework owns one subscriber list per event slot. Instead of
//! reaching for ambient globals, every registration function in this crate
//! takes the handle for its slot explicitly; the adapter type a handle
//! accepts ties it to that slot at compile time, so a mouse-click registry
//! cannot receive a keyboard adapter.

use parking_lot::Mutex;

/// One externally-owned subscriber list for a single event slot.
pub trait EventRegistry<A> {
    /// Append `adapter` to this slot's subscriber list.
    ///
    /// Append-only: no deduplication, no deregistration. Registering the
    /// same callback twice yields two independent subscriptions. Subscribers
    /// run in registration order under the host's dispatch policy.
    fn register(&self, adapter: A);
}

// =============================================================================
// LOCAL REGISTRY
// =============================================================================

/// In-memory ordered subscriber list.
///
/// Hosts embedding this crate can back their event slots with it; tests use
/// it to observe registrations. Dispatch timing stays the host's business:
/// this type only stores subscribers and walks them on demand.
///
/// The dispatch helpers hold the list lock while invoking subscribers, so a
/// subscriber must not register into the slot it is being dispatched from.
pub struct LocalRegistry<A> {
    subscribers: Mutex<Vec<A>>,
}

impl<A> LocalRegistry<A> {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Number of registered subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.lock().is_empty()
    }

    /// Visit every subscriber in registration order.
    ///
    /// This is the dispatch shape for `before_*`/`after_*` slots: all
    /// subscribers run, none can veto.
    pub fn for_each(&self, mut f: impl FnMut(&mut A)) {
        for adapter in self.subscribers.lock().iter_mut() {
            f(adapter);
        }
    }

    /// Poll subscribers in registration order until one produces an outcome.
    ///
    /// This is the dispatch shape for `allow_*` slots: the first decided
    /// verdict wins and later subscribers are not consulted. Returns `None`
    /// if every subscriber passes.
    pub fn poll<R>(&self, mut f: impl FnMut(&mut A) -> Option<R>) -> Option<R> {
        for adapter in self.subscribers.lock().iter_mut() {
            if let Some(outcome) = f(adapter) {
                return Some(outcome);
            }
        }
        None
    }
}

impl<A> Default for LocalRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> EventRegistry<A> for LocalRegistry<A> {
    fn register(&self, adapter: A) {
        self.subscribers.lock().push(adapter);
    }
}
