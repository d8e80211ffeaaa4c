//! Detail view data.

use crate::api::DetailDto;

/// What the detail screen shows. Absent artwork is a valid state, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonDetail {
    pub artwork: Option<String>,
}

impl PokemonDetail {
    pub fn from_dto(dto: DetailDto) -> Self {
        let artwork = dto
            .sprites
            .and_then(|sprites| sprites.other)
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default);
        Self { artwork }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sprites_yields_no_artwork() {
        let detail = PokemonDetail::from_dto(DetailDto::default());
        assert_eq!(detail.artwork, None);
    }
}
