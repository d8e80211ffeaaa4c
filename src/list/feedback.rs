//! Fetch feedbacks for the list machine.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::CatalogApi;
use crate::system::Feedback;

use super::event::ListEvent;
use super::state::ListState;

/// Fetches the first page. Guarded on `Loading`; any other state
/// produces nothing and performs no call.
pub struct FirstPageFeedback {
    api: Arc<dyn CatalogApi>,
}

impl FirstPageFeedback {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Feedback for FirstPageFeedback {
    type State = ListState;
    type Event = ListEvent;

    async fn run(&self, state: &ListState) -> Vec<ListEvent> {
        if !matches!(state, ListState::Loading) {
            return Vec::new();
        }

        match self.api.list_page(0).await {
            Ok(page) => vec![ListEvent::ItemsLoaded {
                items: page.items,
                next_offset: page.next_offset,
            }],
            Err(error) => {
                tracing::warn!(%error, "first page fetch failed");
                vec![ListEvent::LoadFailed(error)]
            }
        }
    }
}

/// Fetches a follow-up page. Guarded on `Paginating { offset }`.
pub struct NextPageFeedback {
    api: Arc<dyn CatalogApi>,
}

impl NextPageFeedback {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Feedback for NextPageFeedback {
    type State = ListState;
    type Event = ListEvent;

    async fn run(&self, state: &ListState) -> Vec<ListEvent> {
        let ListState::Paginating { offset, .. } = state else {
            return Vec::new();
        };

        match self.api.list_page(*offset).await {
            Ok(page) => vec![ListEvent::ItemsLoaded {
                items: page.items,
                next_offset: page.next_offset,
            }],
            Err(error) => {
                tracing::warn!(%error, offset = *offset, "page fetch failed");
                vec![ListEvent::LoadFailed(error)]
            }
        }
    }
}
