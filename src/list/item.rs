//! List element: stable identity, display name, resource locator.

use crate::api::{CatalogError, PokemonDto};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PokemonListItem {
    pub id: u32,
    pub name: String,
    pub url: Option<String>,
}

impl PokemonListItem {
    /// Convert a raw listing entry into a domain item.
    ///
    /// A locator that does not end in a numeric path segment is a fatal
    /// decode error for the entry, not a silently substituted default.
    pub fn from_dto(dto: &PokemonDto) -> Result<Self, CatalogError> {
        let id = derive_item_id(dto.url.as_deref())?;
        Ok(Self {
            id,
            name: dto.name.clone(),
            url: dto.url.clone(),
        })
    }
}

/// Extract the numeric identity from a resource locator such as
/// `https://pokeapi.co/api/v2/pokemon/132/`.
fn derive_item_id(locator: Option<&str>) -> Result<u32, CatalogError> {
    let locator = locator.unwrap_or("");
    let segment = locator.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    segment.parse::<u32>().map_err(|_| CatalogError::Identity {
        locator: locator.to_string(),
    })
}
