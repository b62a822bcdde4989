//! Item Entity
//!
//! One catalog entry (a Pokemon), normalized from the upstream record.
//! Items are immutable once fetched; identity is `id`.

use serde::{Deserialize, Serialize};

/// A category label in its slot (slot 1 is the primary type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlot {
    pub slot: u8,
    pub name: String,
}

/// A named base stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    /// Conceptually 0-255
    pub base_value: u16,
    #[serde(default)]
    pub effort: u8,
}

/// A named ability, optionally hidden
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

/// Artwork references. At most one is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemImages {
    pub primary: Option<String>,
    pub fallback: Option<String>,
}

/// A catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, stable across fetches
    pub id: u32,
    pub name: String,
    /// Ordered by slot
    #[serde(default)]
    pub categories: Vec<CategorySlot>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    /// Tenths of a meter
    #[serde(default)]
    pub height: u32,
    /// Tenths of a kilogram
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub images: ItemImages,
}

impl Item {
    /// Create a bare item with no categories, stats or artwork
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            categories: Vec::new(),
            stats: Vec::new(),
            abilities: Vec::new(),
            height: 0,
            weight: 0,
            images: ItemImages::default(),
        }
    }

    /// Append a category in the next free slot
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        let slot = self.categories.len() as u8 + 1;
        self.categories.push(CategorySlot { slot, name: name.into() });
        self
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Primary category, used for theming. Items without one render as "normal".
    pub fn main_category(&self) -> &str {
        self.categories
            .iter()
            .min_by_key(|c| c.slot)
            .map(|c| c.name.as_str())
            .unwrap_or("normal")
    }

    /// Official artwork when present, otherwise the default sprite
    pub fn image_url(&self) -> Option<&str> {
        self.images
            .primary
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| self.images.fallback.as_deref().filter(|url| !url.is_empty()))
    }

    /// Dex number as shown on cards, e.g. `#025`
    pub fn display_number(&self) -> String {
        format!("#{:03}", self.id)
    }

    pub fn height_meters(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    pub fn stat_total(&self) -> u32 {
        self.stats.iter().map(|s| u32::from(s.base_value)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(25, "pikachu").with_category("electric");
        assert_eq!(item.id, 25);
        assert_eq!(item.name, "pikachu");
        assert_eq!(item.categories[0].slot, 1);
        assert!(item.has_category("electric"));
        assert!(!item.has_category("fire"));
    }

    #[test]
    fn test_main_category_defaults_to_normal() {
        assert_eq!(Item::new(1, "missingno").main_category(), "normal");

        let mut item = Item::new(6, "charizard");
        item.categories = vec![
            CategorySlot { slot: 2, name: "flying".into() },
            CategorySlot { slot: 1, name: "fire".into() },
        ];
        assert_eq!(item.main_category(), "fire");
    }

    #[test]
    fn test_image_falls_back_to_sprite() {
        let mut item = Item::new(1, "bulbasaur");
        assert_eq!(item.image_url(), None);

        item.images.fallback = Some("sprite.png".into());
        assert_eq!(item.image_url(), Some("sprite.png"));

        item.images.primary = Some(String::new());
        assert_eq!(item.image_url(), Some("sprite.png"));

        item.images.primary = Some("artwork.png".into());
        assert_eq!(item.image_url(), Some("artwork.png"));
    }

    #[test]
    fn test_display_helpers() {
        let mut item = Item::new(7, "squirtle");
        item.height = 5;
        item.weight = 90;
        item.stats = vec![
            Stat { name: "hp".into(), base_value: 44, effort: 0 },
            Stat { name: "speed".into(), base_value: 43, effort: 0 },
        ];

        assert_eq!(item.display_number(), "#007");
        assert_eq!(Item::new(1025, "pecharunt").display_number(), "#1025");
        assert!((item.height_meters() - 0.5).abs() < f32::EPSILON);
        assert!((item.weight_kg() - 9.0).abs() < f32::EPSILON);
        assert_eq!(item.stat_total(), 87);
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let item: Item = serde_json::from_str(r#"{"id":4,"name":"charmander"}"#).unwrap();
        assert_eq!(item, Item::new(4, "charmander"));
    }
}
