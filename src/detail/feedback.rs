//! Fetch feedback for the detail machine.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::CatalogApi;
use crate::system::Feedback;

use super::event::DetailEvent;
use super::state::DetailState;

/// Fetches the detail payload. Guarded on `Loading(id)`.
pub struct FetchDetailFeedback {
    api: Arc<dyn CatalogApi>,
}

impl FetchDetailFeedback {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Feedback for FetchDetailFeedback {
    type State = DetailState;
    type Event = DetailEvent;

    async fn run(&self, state: &DetailState) -> Vec<DetailEvent> {
        let DetailState::Loading(id) = state else {
            return Vec::new();
        };

        match self.api.item_detail(*id).await {
            Ok(detail) => vec![DetailEvent::DetailLoaded(detail)],
            Err(error) => {
                tracing::warn!(%error, id = *id, "detail fetch failed");
                vec![DetailEvent::LoadFailed(error)]
            }
        }
    }
}
