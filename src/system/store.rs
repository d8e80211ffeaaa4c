//! Per-screen façade over one running system.

use super::bus::EventBus;
use super::observe::StateStream;
use super::reducer::Reducer;
use super::runtime::{System, SystemHandle};

/// Owns exactly one system, created at construction and disposed once
/// when the store is discarded. External callers inject events through
/// `send` and observe state through `state`/`observe`; they never mutate
/// state directly.
pub struct Store<R: Reducer> {
    bus: EventBus<R::Event>,
    system: SystemHandle<R::State>,
}

impl<R: Reducer + 'static> Store<R> {
    pub fn start(system: System<R>) -> Self {
        let bus = EventBus::new();
        let handle = system.start(&bus);
        Self {
            bus,
            system: handle,
        }
    }

    /// Inject an externally originated event. Fire-and-forget.
    pub fn send(&self, event: R::Event) {
        self.bus.send(event);
    }

    /// Snapshot of the latest committed state.
    pub fn state(&self) -> R::State {
        self.system.state()
    }

    /// Observe the current state and every subsequent committed state.
    pub fn observe(&self) -> StateStream<R::State> {
        self.system.observe()
    }

    /// Cancel the loop and all outstanding feedback effects. Events sent
    /// afterwards are discarded without reaching the reducer.
    pub fn dispose(&self) {
        self.system.dispose();
    }
}
