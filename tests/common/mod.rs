//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_catalog;
pub mod mock_catalog;

use std::time::Duration;

use pokedex::api::PokemonPage;
use pokedex::list::PokemonListItem;

/// Bound on every state await so a broken loop fails the test instead
/// of hanging it.
pub const STATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Window long enough for a wrongly delivered event to have surfaced.
pub const SETTLE: Duration = Duration::from_millis(50);

pub fn item(id: u32, name: &str) -> PokemonListItem {
    PokemonListItem {
        id,
        name: name.to_string(),
        url: Some(format!("https://pokeapi.co/api/v2/pokemon/{id}/")),
    }
}

pub fn page(items: Vec<PokemonListItem>, next_offset: Option<u32>) -> PokemonPage {
    PokemonPage { items, next_offset }
}
