//! Broadcast channel carrying externally injected events into a system.

use tokio::sync::broadcast;

use super::event::MachineEvent;

/// Buffered events per subscriber before old entries are dropped.
const BUS_CAPACITY: usize = 64;

/// Entry point for externally originated events.
///
/// `send` is fire-and-forget: there is no return value and no
/// back-pressure signal to the caller. Events sent while no system is
/// listening (e.g. after disposal) are silently discarded.
pub struct EventBus<E> {
    tx: broadcast::Sender<E>,
}

impl<E: MachineEvent> EventBus<E> {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BUS_CAPACITY);
        Self { tx }
    }

    /// Inject an event into the loop of every subscribed system.
    pub fn send(&self, event: E) {
        let _ = self.tx.send(event);
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<E> {
        self.tx.subscribe()
    }
}

impl<E: MachineEvent> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}
