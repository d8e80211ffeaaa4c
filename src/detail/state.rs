//! Detail machine state.

use crate::api::CatalogError;
use crate::system::MachineState;

use super::model::PokemonDetail;

/// Where the detail view for one pokemon currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Constructed but not yet visible.
    Idle(u32),
    /// Detail fetch in flight for this id.
    Loading(u32),
    Loaded(PokemonDetail),
    /// The id is kept so an explicit retry can re-enter `Loading`.
    Failed { id: u32, error: CatalogError },
}

impl MachineState for DetailState {}
