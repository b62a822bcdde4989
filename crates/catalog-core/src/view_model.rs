//! Read-model text and scales shared by the listing, detail and favorites views.

use crate::state::CatalogState;

/// Stat bar scale
pub const MAX_BASE_STAT: f32 = 255.0;
/// Total bar scale
pub const MAX_STAT_TOTAL: f32 = 720.0;

/// `"12 loaded"` or `"3 filtered"`
pub fn listing_count_label(state: &CatalogState) -> String {
    let noun = if state.is_filtering() { "filtered" } else { "loaded" };
    format!("{} {}", state.filtered_len(), noun)
}

/// Message shown when filters leave nothing
pub fn empty_filter_message(search: &str, has_categories: bool) -> String {
    match (search.is_empty(), has_categories) {
        (false, true) => format!("No Pokemon matching \"{}\" with selected types", search),
        (false, false) => format!("No Pokemon matching \"{}\"", search),
        _ => "No Pokemon with selected types found".to_string(),
    }
}

pub fn end_of_list_message(count: usize) -> String {
    format!("You've seen all {} Pokemon!", count)
}

pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
}

/// Width of a stat bar, 0-100
pub fn stat_percent(value: u16) -> f32 {
    (f32::from(value) / MAX_BASE_STAT * 100.0).min(100.0)
}

pub fn total_percent(total: u32) -> f32 {
    (total as f32 / MAX_STAT_TOTAL * 100.0).min(100.0)
}

/// `"lightning-rod"` -> `"lightning rod"` (first hyphen only)
pub fn ability_label(name: &str) -> String {
    name.replacen('-', " ", 1)
}
