//! Wire shapes for PokéAPI responses.

use serde::Deserialize;

/// One page of the paginated pokemon listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDto {
    pub count: Option<u64>,
    /// Locator of the following page, absent on the last page.
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PokemonDto>,
}

/// A single listed pokemon: display name plus its resource locator.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDto {
    pub name: String,
    pub url: Option<String>,
}

/// Detail response. Only the sprite tree is of interest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailDto {
    pub sprites: Option<SpritesDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpritesDto {
    pub front_default: Option<String>,
    pub other: Option<SpritesOtherDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpritesOtherDto {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<OfficialArtworkDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfficialArtworkDto {
    pub front_default: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_decodes_with_next_link() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon/?offset=75&limit=75",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
            ]
        }"#;
        let page: PageDto = serde_json::from_str(body).unwrap();
        assert_eq!(page.count, Some(1302));
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "bulbasaur");
    }

    #[test]
    fn page_decodes_on_last_page() {
        let body = r#"{"count": 1, "next": null, "previous": null, "results": []}"#;
        let page: PageDto = serde_json::from_str(body).unwrap();
        assert!(page.next.is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn detail_decodes_official_artwork() {
        let body = r#"{
            "sprites": {
                "front_default": "https://img/front/1.png",
                "other": {
                    "official-artwork": {
                        "front_default": "https://img/artwork/1.png"
                    }
                }
            }
        }"#;
        let detail: DetailDto = serde_json::from_str(body).unwrap();
        let artwork = detail
            .sprites
            .and_then(|s| s.other)
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default);
        assert_eq!(artwork.as_deref(), Some("https://img/artwork/1.png"));
    }

    #[test]
    fn detail_decodes_without_sprites() {
        let detail: DetailDto = serde_json::from_str("{}").unwrap();
        assert!(detail.sprites.is_none());
    }
}
