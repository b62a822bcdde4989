//! Detail Lookup
//!
//! Single-item fetch for the detail view. Independent of the collection: its
//! failures stay in the view that asked.

use std::fmt;

use log::warn;

use crate::domain::Item;
use crate::remote::CatalogSource;

/// How a detail route addresses an item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DetailKey {
    Id(u32),
    Name(String),
}

impl DetailKey {
    /// Numeric segments are ids, anything else is a name
    pub fn parse(segment: &str) -> Option<Self> {
        let segment = segment.trim();
        if segment.is_empty() {
            return None;
        }
        match segment.parse::<u32>() {
            Ok(0) => None,
            Ok(id) => Some(DetailKey::Id(id)),
            Err(_) => Some(DetailKey::Name(segment.to_lowercase())),
        }
    }
}

impl fmt::Display for DetailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailKey::Id(id) => write!(f, "{}", id),
            DetailKey::Name(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Ready(Item),
    /// Human-readable message; the view offers a retry
    Failed(String),
}

impl DetailState {
    pub fn item(&self) -> Option<&Item> {
        match self {
            DetailState::Ready(item) => Some(item),
            _ => None,
        }
    }
}

pub async fn load_detail<S: CatalogSource + ?Sized>(source: &S, key: &DetailKey) -> DetailState {
    let result = match key {
        DetailKey::Id(id) => source.get_by_id(*id).await,
        DetailKey::Name(name) => source.get_by_name(name).await,
    };
    match result {
        Ok(item) => DetailState::Ready(item),
        Err(e) => {
            warn!("detail lookup for {} failed: {}", key, e);
            DetailState::Failed(e.to_string())
        }
    }
}
