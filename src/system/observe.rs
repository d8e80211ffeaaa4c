//! Most-recent-value state observation.
//!
//! A new observer immediately receives the current state, then every
//! subsequent committed state, in order, with no gaps. `tokio::sync::watch`
//! is not used here: it conflates intermediate values for slow readers.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::state::MachineState;

struct Registry<S> {
    latest: S,
    observers: Vec<mpsc::UnboundedSender<S>>,
}

/// Shared cell holding the latest committed state and its observers.
pub(crate) struct StateCell<S> {
    inner: Arc<Mutex<Registry<S>>>,
}

impl<S> Clone for StateCell<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: MachineState> StateCell<S> {
    pub(crate) fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry {
                latest: initial,
                observers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the latest committed state.
    pub(crate) fn latest(&self) -> S {
        self.inner.lock().latest.clone()
    }

    /// Register an observer. The current state is delivered before the
    /// lock is released, so no committed state can slip in between.
    pub(crate) fn observe(&self) -> StateStream<S> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut registry = self.inner.lock();
        let _ = tx.send(registry.latest.clone());
        registry.observers.push(tx);
        StateStream { rx }
    }

    /// Commit a new state and push it to every live observer.
    pub(crate) fn publish(&self, next: S) {
        let mut registry = self.inner.lock();
        registry.latest = next.clone();
        registry
            .observers
            .retain(|observer| observer.send(next.clone()).is_ok());
    }
}

/// Push-on-change stream of committed states.
pub struct StateStream<S> {
    rx: mpsc::UnboundedReceiver<S>,
}

impl<S: MachineState> StateStream<S> {
    /// Next committed state, or `None` once the owning store has been
    /// dropped and all buffered states have been drained.
    pub async fn next(&mut self) -> Option<S> {
        self.rx.recv().await
    }
}
