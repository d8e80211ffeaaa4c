//! In-memory catalog double with scripted responses and call counting.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use pokedex::api::{CatalogApi, CatalogError, PokemonPage};
use pokedex::detail::PokemonDetail;

/// Scripted `CatalogApi` implementation. Responses are consumed in
/// order; running out of script is reported as a transport failure so a
/// test never hangs on an unplanned call.
pub struct FakeCatalog {
    list_responses: Mutex<VecDeque<Result<PokemonPage, CatalogError>>>,
    detail_responses: Mutex<VecDeque<Result<PokemonDetail, CatalogError>>>,
    list_offsets: Mutex<Vec<u32>>,
    list_calls: AtomicU32,
    detail_calls: AtomicU32,
}

impl FakeCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            list_responses: Mutex::new(VecDeque::new()),
            detail_responses: Mutex::new(VecDeque::new()),
            list_offsets: Mutex::new(Vec::new()),
            list_calls: AtomicU32::new(0),
            detail_calls: AtomicU32::new(0),
        })
    }

    pub fn enqueue_page(&self, response: Result<PokemonPage, CatalogError>) {
        self.list_responses.lock().push_back(response);
    }

    pub fn enqueue_detail(&self, response: Result<PokemonDetail, CatalogError>) {
        self.detail_responses.lock().push_back(response);
    }

    /// Number of list calls issued so far.
    pub fn list_calls(&self) -> u32 {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> u32 {
        self.detail_calls.load(Ordering::SeqCst)
    }

    /// Offsets requested from the listing, in call order.
    pub fn list_offsets(&self) -> Vec<u32> {
        self.list_offsets.lock().clone()
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_page(&self, offset: u32) -> Result<PokemonPage, CatalogError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_offsets.lock().push(offset);
        self.list_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(CatalogError::Transport("no scripted response".to_string())))
    }

    async fn item_detail(&self, _id: u32) -> Result<PokemonDetail, CatalogError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.detail_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(CatalogError::Transport("no scripted response".to_string())))
    }
}
