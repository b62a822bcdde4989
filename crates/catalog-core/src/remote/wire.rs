//! PokeAPI v2 wire format
//!
//! Only the fields the client reads. Records are converted into `Item`
//! immediately so nothing upstream-shaped leaks past this module.

use serde::Deserialize;

use super::{ItemSummary, Page};
use crate::domain::{Ability, CategorySlot, Item, ItemImages, Stat};

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `GET /pokemon?offset&limit` and `GET /type`
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub count: usize,
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl ListResponse {
    pub fn into_page(self) -> Page {
        Page {
            has_more: self.next.is_some(),
            summaries: self
                .results
                .into_iter()
                .map(|r| ItemSummary { name: r.name, locator: r.url })
                .collect(),
        }
    }

    pub fn into_names(self) -> Vec<String> {
        self.results.into_iter().map(|r| r.name).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkRecord {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpritesRecord {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlotRecord {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatRecord {
    pub base_stat: u16,
    #[serde(default)]
    pub effort: u8,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilityRecord {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

/// `GET /pokemon/{id or name}`
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: SpritesRecord,
    #[serde(default)]
    pub types: Vec<TypeSlotRecord>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatRecord>,
    #[serde(default)]
    pub abilities: Vec<AbilityRecord>,
}

impl From<PokemonRecord> for Item {
    fn from(record: PokemonRecord) -> Self {
        let mut categories: Vec<CategorySlot> = record
            .types
            .into_iter()
            .map(|t| CategorySlot { slot: t.slot, name: t.kind.name })
            .collect();
        categories.sort_by_key(|c| c.slot);

        let primary = record
            .sprites
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default);

        Item {
            id: record.id,
            name: record.name,
            categories,
            stats: record
                .stats
                .into_iter()
                .map(|s| Stat { name: s.stat.name, base_value: s.base_stat, effort: s.effort })
                .collect(),
            abilities: record
                .abilities
                .into_iter()
                .map(|a| Ability { name: a.ability.name, hidden: a.is_hidden, slot: a.slot })
                .collect(),
            height: record.height,
            weight: record.weight,
            images: ItemImages { primary, fallback: record.sprites.front_default },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": "https://img.example/sprites/25.png",
            "back_default": null,
            "other": {
                "official-artwork": { "front_default": "https://img.example/artwork/25.png" }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "static", "url": "" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "" }, "is_hidden": true, "slot": 3 }
        ]
    }"#;

    #[test]
    fn test_pokemon_record_converts_to_item() {
        let record: PokemonRecord = serde_json::from_str(PIKACHU).unwrap();
        let item = Item::from(record);

        assert_eq!(item.id, 25);
        assert_eq!(item.name, "pikachu");
        assert_eq!(item.main_category(), "electric");
        assert_eq!(item.height, 4);
        assert_eq!(item.weight, 60);
        assert_eq!(item.stat_total(), 125);
        assert_eq!(item.stats[1].effort, 2);
        assert!(item.abilities[1].hidden);
        assert_eq!(item.image_url(), Some("https://img.example/artwork/25.png"));
        assert_eq!(item.images.fallback.as_deref(), Some("https://img.example/sprites/25.png"));
    }

    #[test]
    fn test_missing_artwork_keeps_sprite_fallback() {
        let record: PokemonRecord = serde_json::from_str(
            r#"{"id": 10001, "name": "deoxys-attack", "sprites": {"front_default": "s.png", "other": {"official-artwork": {"front_default": null}}},
                "types": [{"slot": 2, "type": {"name": "flying"}}, {"slot": 1, "type": {"name": "psychic"}}]}"#,
        )
        .unwrap();
        let item = Item::from(record);
        assert_eq!(item.image_url(), Some("s.png"));
        assert_eq!(item.category_names().collect::<Vec<_>>(), vec!["psychic", "flying"]);
    }

    #[test]
    fn test_list_response_has_more_follows_next() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }"#;
        let page = serde_json::from_str::<ListResponse>(body).unwrap().into_page();
        assert!(page.has_more);
        assert_eq!(page.summaries[1].name, "ivysaur");
        assert_eq!(page.summaries[1].locator, "https://pokeapi.co/api/v2/pokemon/2/");

        let last: ListResponse =
            serde_json::from_str(r#"{"count": 1, "next": null, "results": []}"#).unwrap();
        assert!(!last.into_page().has_more);
    }
}
