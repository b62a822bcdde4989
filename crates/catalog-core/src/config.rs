//! Client Configuration

use serde::{Deserialize, Serialize};

use crate::domain::ConfigError;
use crate::favorites::FAVORITES_KEY;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub api_base_url: String,
    /// Summaries requested per page
    pub page_size: usize,
    /// localStorage key for the favorites record
    pub favorites_key: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            favorites_key: FAVORITES_KEY.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Apply optional string overrides (e.g. build-time env vars)
    pub fn with_overrides(mut self, api_base_url: Option<&str>, page_size: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(url) = api_base_url.map(str::trim).filter(|s| !s.is_empty()) {
            self.api_base_url = url.to_string();
        }
        if let Some(raw) = page_size {
            self.page_size = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "page_size",
                value: raw.to_string(),
            })?;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue { key: "page_size", value: "0".into() });
        }
        if self.api_base_url.is_empty() {
            return Err(ConfigError::InvalidValue { key: "api_base_url", value: String::new() });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.favorites_key, "pokemonFavorites");
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = CatalogConfig::from_json(r#"{"page_size": 50}"#).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        assert!(matches!(
            CatalogConfig::from_json(r#"{"page_size": 0}"#),
            Err(ConfigError::InvalidValue { key: "page_size", .. })
        ));
        assert!(matches!(CatalogConfig::from_json("nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::default()
            .with_overrides(Some(" http://localhost:8080/api "), Some("10"))
            .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.page_size, 10);

        let unchanged = CatalogConfig::default().with_overrides(Some(""), None).unwrap();
        assert_eq!(unchanged, CatalogConfig::default());

        assert!(CatalogConfig::default().with_overrides(None, Some("many")).is_err());
    }
}
