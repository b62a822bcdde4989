//! Property tests for the collection reducer and favorites persistence.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::Item;
use crate::favorites::{try_decode_favorites, FavoritesStore, JsonFavoritesStore, MemoryBackend, FAVORITES_KEY};
use crate::filter::filter_indices;
use crate::state::{reduce, CatalogEvent, CatalogState};

const NAMES: &[&str] = &["bulbasaur", "Charmander", "squirtle", "pidgey", "Pikachu", "eevee"];
const LABELS: &[&str] = &["fire", "water", "grass", "flying"];

/// Generation-free operation; fetch outcomes pick up the live generation when applied
#[derive(Debug, Clone)]
enum Op {
    Begin,
    Page(Vec<Item>, bool),
    Fail,
    Search(String),
    SetCategories(Vec<String>),
    Toggle(String),
    Clear,
    Reset,
    AddFavorite(Item),
    RemoveFavorite(u32),
    ToggleFavorite(Item),
}

fn arb_label() -> impl Strategy<Value = String> {
    prop::sample::select(LABELS).prop_map(String::from)
}

fn arb_item() -> impl Strategy<Value = Item> {
    (1u32..40, prop::sample::select(NAMES), prop::collection::vec(arb_label(), 0..3)).prop_map(
        |(id, name, labels)| {
            labels
                .into_iter()
                .fold(Item::new(id, format!("{}{}", name, id)), |item, label| item.with_category(label))
        },
    )
}

fn arb_search() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("a".to_string()), Just("CHAR".to_string()), Just("1".to_string())]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => Just(Op::Begin),
        4 => (prop::collection::vec(arb_item(), 0..8), any::<bool>()).prop_map(|(items, more)| Op::Page(items, more)),
        1 => Just(Op::Fail),
        2 => arb_search().prop_map(Op::Search),
        1 => prop::collection::vec(arb_label(), 0..3).prop_map(Op::SetCategories),
        2 => arb_label().prop_map(Op::Toggle),
        1 => Just(Op::Clear),
        1 => Just(Op::Reset),
        2 => (arb_item(), any::<bool>()).prop_map(|(item, add)| {
            if add { Op::AddFavorite(item) } else { Op::ToggleFavorite(item) }
        }),
        1 => (1u32..40).prop_map(Op::RemoveFavorite),
    ]
}

fn to_event(op: Op, state: &CatalogState) -> CatalogEvent {
    let generation = state.generation();
    match op {
        Op::Begin => CatalogEvent::BeginFetch,
        Op::Page(items, has_more) => CatalogEvent::FetchSucceeded { generation, items, has_more },
        Op::Fail => CatalogEvent::FetchFailed { generation, message: "HTTP error! status: 500".into() },
        Op::Search(text) => CatalogEvent::SetSearchText(text),
        Op::SetCategories(labels) => CatalogEvent::SetCategoryFilter(labels),
        Op::Toggle(label) => CatalogEvent::ToggleCategoryFilter(label),
        Op::Clear => CatalogEvent::ClearCategoryFilter,
        Op::Reset => CatalogEvent::Reset,
        Op::AddFavorite(item) => CatalogEvent::AddFavorite(item),
        Op::RemoveFavorite(id) => CatalogEvent::RemoveFavorite(id),
        Op::ToggleFavorite(item) => CatalogEvent::ToggleFavorite(item),
    }
}

fn assert_invariants(state: &CatalogState) {
    let ids: Vec<u32> = state.items().iter().map(|i| i.id).collect();
    let unique: HashSet<u32> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate ids in collection: {:?}", ids);

    let favorite_ids: HashSet<u32> = state.favorites().iter().map(|i| i.id).collect();
    assert_eq!(favorite_ids.len(), state.favorites().len(), "duplicate favorites");

    assert_eq!(state.offset(), state.items().len(), "offset drifted from collection size");

    let from_scratch = filter_indices(state.items(), &state.criteria());
    assert_eq!(state.filtered_indices(), &from_scratch[..], "filtered view out of date");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any sequence of transitions keeps the collection invariants.
    #[test]
    fn reducer_preserves_invariants(ops in prop::collection::vec(arb_op(), 1..40)) {
        let mut state = CatalogState::new();
        for op in ops {
            let event = to_event(op, &state);
            state = reduce(state, event);
            assert_invariants(&state);
        }
    }

    /// Offset grows by exactly the number of previously unseen ids.
    #[test]
    fn offset_tracks_new_items(
        first in prop::collection::vec(arb_item(), 0..10),
        second in prop::collection::vec(arb_item(), 0..10),
    ) {
        let state = reduce(CatalogState::new(), CatalogEvent::FetchSucceeded { generation: 0, items: first, has_more: true });
        let before = state.offset();
        let known: HashSet<u32> = state.items().iter().map(|i| i.id).collect();
        let fresh: HashSet<u32> = second.iter().map(|i| i.id).filter(|id| !known.contains(id)).collect();

        let state = reduce(state, CatalogEvent::FetchSucceeded { generation: 0, items: second, has_more: false });

        prop_assert_eq!(state.offset(), before + fresh.len());
        prop_assert!(!state.has_more());
    }

    /// Reset leaves favorites untouched.
    #[test]
    fn reset_preserves_favorites(ops in prop::collection::vec(arb_op(), 0..30)) {
        let mut state = CatalogState::new();
        for op in ops {
            let event = to_event(op, &state);
            state = reduce(state, event);
        }
        let favorites = state.favorites().to_vec();
        let state = reduce(state, CatalogEvent::Reset);
        prop_assert_eq!(state.favorites(), &favorites[..]);
        prop_assert!(state.items().is_empty());
        prop_assert_eq!(state.offset(), 0);
    }

    /// Toggling the same item twice restores the favorites set.
    #[test]
    fn toggle_favorite_twice_is_identity(
        seed in prop::collection::vec(arb_item(), 0..6),
        item in arb_item(),
    ) {
        let state = reduce(CatalogState::new(), CatalogEvent::LoadFavorites(seed));
        let original: HashSet<u32> = state.favorites().iter().map(|i| i.id).collect();

        let state = reduce(state, CatalogEvent::ToggleFavorite(item.clone()));
        let state = reduce(state, CatalogEvent::ToggleFavorite(item));

        let after: HashSet<u32> = state.favorites().iter().map(|i| i.id).collect();
        prop_assert_eq!(after, original);
    }

    /// save then load returns the same ids.
    #[test]
    fn favorites_round_trip(favorites in prop::collection::vec(arb_item(), 0..10)) {
        let store = JsonFavoritesStore::new(MemoryBackend::new(), FAVORITES_KEY);
        store.save(&favorites).unwrap();
        let loaded: Vec<u32> = store.load().iter().map(|i| i.id).collect();
        let expected: Vec<u32> = favorites.iter().map(|i| i.id).collect();
        prop_assert_eq!(loaded, expected);
    }

    /// Arbitrary text in storage loads as its strict decode, or empty when that fails.
    #[test]
    fn corrupt_storage_loads_empty_or_valid(raw in prop_oneof![
        ".{0,64}",
        Just("[]".to_string()),
        Just(r#"[{"id":4,"name":"charmander"}]"#.to_string()),
    ]) {
        let store = JsonFavoritesStore::new(MemoryBackend::new().with_entry(FAVORITES_KEY, &raw), FAVORITES_KEY);
        let expected = try_decode_favorites(&raw).unwrap_or_default();
        prop_assert_eq!(store.load(), expected);
    }
}
