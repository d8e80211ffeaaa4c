//! Events handled by the detail reducer.

use crate::api::CatalogError;
use crate::system::MachineEvent;

use super::model::PokemonDetail;

#[derive(Debug, Clone)]
pub enum DetailEvent {
    /// The detail screen became visible.
    Appeared,

    /// The catalog answered with the detail payload.
    DetailLoaded(PokemonDetail),

    /// The catalog call failed.
    LoadFailed(CatalogError),

    /// Leave `Failed` and fetch again for the same id.
    Retry,
}

impl MachineEvent for DetailEvent {}
