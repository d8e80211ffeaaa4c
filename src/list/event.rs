//! Events handled by the list reducer.

use crate::api::CatalogError;
use crate::system::MachineEvent;

use super::item::PokemonListItem;

#[derive(Debug, Clone)]
pub enum ListEvent {
    /// The listing became visible.
    Appeared,

    /// The consumer wants the page starting at `offset`.
    RequestMore { offset: u32 },

    /// A catalog page arrived.
    ItemsLoaded {
        items: Vec<PokemonListItem>,
        next_offset: Option<u32>,
    },

    /// A catalog call failed.
    LoadFailed(CatalogError),

    /// Leave `Failed` and start over from the first page.
    Retry,
}

impl MachineEvent for ListEvent {}
