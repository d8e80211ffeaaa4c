//! Store owning the list machine.

use std::sync::Arc;

use crate::api::CatalogApi;
use crate::system::{StateStream, Store, System};

use super::event::ListEvent;
use super::feedback::{FirstPageFeedback, NextPageFeedback};
use super::reducer::ListReducer;
use super::state::ListState;

/// Façade over the list system: one machine per store, starting `Idle`.
pub struct ListStore {
    store: Store<ListReducer>,
}

impl ListStore {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        let system = System::<ListReducer>::new(ListState::Idle)
            .with_feedback(FirstPageFeedback::new(Arc::clone(&api)))
            .with_feedback(NextPageFeedback::new(api));

        Self {
            store: Store::start(system),
        }
    }

    pub fn send(&self, event: ListEvent) {
        self.store.send(event);
    }

    pub fn state(&self) -> ListState {
        self.store.state()
    }

    pub fn observe(&self) -> StateStream<ListState> {
        self.store.observe()
    }

    pub fn dispose(&self) {
        self.store.dispose();
    }
}
