//! Store owning the detail machine.

use std::sync::Arc;

use crate::api::CatalogApi;
use crate::system::{StateStream, Store, System};

use super::event::DetailEvent;
use super::feedback::FetchDetailFeedback;
use super::reducer::DetailReducer;
use super::state::DetailState;

/// Façade over the detail system, parameterized by the pokemon id the
/// screen was entered with.
pub struct DetailStore {
    store: Store<DetailReducer>,
}

impl DetailStore {
    pub fn new(api: Arc<dyn CatalogApi>, id: u32) -> Self {
        let system = System::<DetailReducer>::new(DetailState::Idle(id))
            .with_feedback(FetchDetailFeedback::new(api));

        Self {
            store: Store::start(system),
        }
    }

    pub fn send(&self, event: DetailEvent) {
        self.store.send(event);
    }

    pub fn state(&self) -> DetailState {
        self.store.state()
    }

    pub fn observe(&self) -> StateStream<DetailState> {
        self.store.observe()
    }

    pub fn dispose(&self) {
        self.store.dispose();
    }
}
