//! List machine state.

use crate::api::CatalogError;
use crate::system::MachineState;

use super::item::PokemonListItem;

/// Where the paginated listing currently is. Exactly one variant is
/// active at any instant; every transition produces a new value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Idle,
    /// First page is being fetched.
    Loading,
    Loaded {
        items: Vec<PokemonListItem>,
        /// Offset to request the following page with, `None` when the
        /// catalog has no further pages.
        next_offset: Option<u32>,
    },
    /// A follow-up page is being fetched while the accumulated items
    /// stay visible.
    Paginating {
        items: Vec<PokemonListItem>,
        offset: u32,
    },
    Failed(CatalogError),
}

impl MachineState for ListState {}

impl ListState {
    /// Items currently available for display, in arrival order.
    pub fn items(&self) -> &[PokemonListItem] {
        match self {
            Self::Loaded { items, .. } | Self::Paginating { items, .. } => items,
            _ => &[],
        }
    }
}
