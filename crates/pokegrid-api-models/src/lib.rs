#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Wire DTOs for the PokeAPI REST endpoints consumed by the viewer.
//!
//! Only the fields the UI renders are modelled; serde skips the rest of the
//! (large) upstream payloads on decode. The types stay close to the wire
//! shape so the mapping into view rows remains a single obvious step in the
//! UI crate.
use serde::{Deserialize, Serialize};

/// Name + canonical URL pair used by the listing and by nested references.
///
/// PokeAPI reuses this shape (`NamedAPIResource`) for every cross-resource
/// link, so one type covers listing entries, type references and stat
/// references alike.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedRef {
    /// Canonical lowercase resource name.
    pub name: String,
    /// Absolute URL of the referenced resource.
    pub url: String,
}

/// Envelope returned by the paginated `pokemon` listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonPage {
    /// Total number of entries known upstream.
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// URL of the next listing window, when one exists.
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// URL of the previous listing window, when one exists.
    pub previous: Option<String>,
    /// Listing entries for the requested window.
    pub results: Vec<NamedRef>,
}

/// Detail payload for a single Pokémon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonDetail {
    /// Canonical lowercase name.
    pub name: String,
    /// Sprite URLs for the Pokémon.
    pub sprites: SpriteSet,
    /// Type entries in slot order.
    pub types: Vec<TypeSlot>,
    /// Base stat entries.
    pub stats: Vec<StatSlot>,
}

/// Subset of the sprite collection the viewer renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpriteSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Default front-facing artwork; absent for some formes.
    pub front_default: Option<String>,
}

/// Type entry pairing a slot index with the referenced type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSlot {
    /// 1-based ordering of the type on the Pokémon.
    pub slot: u32,
    #[serde(rename = "type")]
    /// The referenced type.
    pub kind: NamedRef,
}

/// Stat entry pairing a base value with the referenced stat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatSlot {
    /// Base value for the stat.
    pub base_stat: u32,
    /// The referenced stat.
    pub stat: NamedRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pokemon_page_decodes_listing_payload() {
        let payload = serde_json::json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=100&limit=100",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        });

        let page: PokemonPage = serde_json::from_value(payload).expect("page decodes");
        assert_eq!(page.count, 1302);
        assert_eq!(
            page.next.as_deref(),
            Some("https://pokeapi.co/api/v2/pokemon?offset=100&limit=100")
        );
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "bulbasaur");
        assert_eq!(page.results[1].url, "https://pokeapi.co/api/v2/pokemon/2/");
    }

    #[test]
    fn pokemon_detail_decodes_nested_wrappers_and_skips_unknown_fields() {
        let payload = serde_json::json!({
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "sprites": {
                "front_default": "https://sprites.example/6.png",
                "back_default": "https://sprites.example/back/6.png"
            },
            "types": [
                { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } },
                { "slot": 2, "type": { "name": "flying", "url": "https://pokeapi.co/api/v2/type/3/" } }
            ],
            "stats": [
                { "base_stat": 78, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
                { "base_stat": 84, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } }
            ]
        });

        let detail: PokemonDetail = serde_json::from_value(payload).expect("detail decodes");
        assert_eq!(detail.name, "charizard");
        assert_eq!(
            detail.sprites.front_default.as_deref(),
            Some("https://sprites.example/6.png")
        );
        assert_eq!(detail.types.len(), 2);
        assert_eq!(detail.types[0].slot, 1);
        assert_eq!(detail.types[0].kind.name, "fire");
        assert_eq!(detail.types[1].kind.name, "flying");
        assert_eq!(detail.stats.len(), 2);
        assert_eq!(detail.stats[0].base_stat, 78);
        assert_eq!(detail.stats[0].stat.name, "hp");
    }

    #[test]
    fn sprite_set_accepts_null_front_default() {
        let payload = serde_json::json!({ "front_default": null });

        let sprites: SpriteSet = serde_json::from_value(payload).expect("sprites decode");
        assert!(sprites.front_default.is_none());
    }

    #[test]
    fn detail_with_wrong_shape_fails_to_decode() {
        let payload = serde_json::json!({
            "name": "missingno",
            "sprites": { "front_default": null },
            "types": [ { "slot": 1, "type": "fire" } ],
            "stats": []
        });

        assert!(serde_json::from_value::<PokemonDetail>(payload).is_err());
    }
}
