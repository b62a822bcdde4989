//! Catalog Holder
//!
//! Owns the `CatalogState`, applies events through `reduce`, writes favorites
//! through to storage, and notifies observers. Single-threaded: clones share
//! the same state.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;

use crate::domain::Item;
use crate::favorites::FavoritesStore;
use crate::state::{reduce, CatalogEvent, CatalogState};

type Observer = Box<dyn Fn(&CatalogState)>;

/// Shared handle to the collection state machine
#[derive(Clone)]
pub struct Catalog {
    state: Rc<RefCell<CatalogState>>,
    favorites_store: Rc<dyn FavoritesStore>,
    observers: Rc<RefCell<Vec<Observer>>>,
}

impl Catalog {
    /// Create an empty catalog and load favorites from `favorites_store` once
    pub fn open(favorites_store: Rc<dyn FavoritesStore>) -> Self {
        let catalog = Self {
            state: Rc::new(RefCell::new(CatalogState::new())),
            favorites_store,
            observers: Rc::new(RefCell::new(Vec::new())),
        };
        let stored = catalog.favorites_store.load();
        catalog.dispatch(CatalogEvent::LoadFavorites(stored));
        catalog
    }

    /// Apply one event, persist favorites if they changed, then notify observers
    pub fn dispatch(&self, event: CatalogEvent) {
        let persists = matches!(
            event,
            CatalogEvent::AddFavorite(_) | CatalogEvent::RemoveFavorite(_) | CatalogEvent::ToggleFavorite(_)
        );
        let snapshot = {
            let mut state = self.state.borrow_mut();
            let before = persists.then(|| favorite_ids(state.favorites()));
            *state = reduce(std::mem::take(&mut *state), event);
            if let Some(before) = before {
                if before != favorite_ids(state.favorites()) {
                    if let Err(e) = self.favorites_store.save(state.favorites()) {
                        warn!("Failed to save favorites: {}", e);
                    }
                }
            }
            state.clone()
        };
        for observer in self.observers.borrow().iter() {
            observer(&snapshot);
        }
    }

    /// Register an observer called after every dispatch
    pub fn subscribe(&self, observer: impl Fn(&CatalogState) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&CatalogState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.with_state(|s| s.is_favorite(id))
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        self.dispatch(CatalogEvent::SetSearchText(text.into()));
    }

    pub fn set_category_filter(&self, labels: Vec<String>) {
        self.dispatch(CatalogEvent::SetCategoryFilter(labels));
    }

    pub fn toggle_category(&self, label: impl Into<String>) {
        self.dispatch(CatalogEvent::ToggleCategoryFilter(label.into()));
    }

    pub fn clear_categories(&self) {
        self.dispatch(CatalogEvent::ClearCategoryFilter);
    }

    pub fn reset(&self) {
        self.dispatch(CatalogEvent::Reset);
    }

    pub fn add_favorite(&self, item: Item) {
        self.dispatch(CatalogEvent::AddFavorite(item));
    }

    pub fn remove_favorite(&self, id: u32) {
        self.dispatch(CatalogEvent::RemoveFavorite(id));
    }

    pub fn toggle_favorite(&self, item: Item) {
        self.dispatch(CatalogEvent::ToggleFavorite(item));
    }
}

fn favorite_ids(favorites: &[Item]) -> Vec<u32> {
    favorites.iter().map(|f| f.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::domain::StorageError;
    use crate::favorites::{JsonFavoritesStore, MemoryBackend, FAVORITES_KEY};

    /// Counts writes and keeps the last saved list
    #[derive(Default)]
    struct RecordingStore {
        initial: Vec<Item>,
        saved: RefCell<Vec<Vec<Item>>>,
        fail: Cell<bool>,
    }

    impl FavoritesStore for RecordingStore {
        fn load(&self) -> Vec<Item> {
            self.initial.clone()
        }

        fn save(&self, favorites: &[Item]) -> Result<(), StorageError> {
            if self.fail.get() {
                return Err(StorageError::Unavailable("quota exceeded".into()));
            }
            self.saved.borrow_mut().push(favorites.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_open_loads_favorites_without_writing() {
        let store = Rc::new(RecordingStore {
            initial: vec![Item::new(25, "pikachu")],
            ..Default::default()
        });
        let catalog = Catalog::open(store.clone());

        assert!(catalog.is_favorite(25));
        assert!(store.saved.borrow().is_empty());
    }

    #[test]
    fn test_every_favorite_mutation_writes_through() {
        let store = Rc::new(RecordingStore::default());
        let catalog = Catalog::open(store.clone());

        catalog.add_favorite(Item::new(1, "bulbasaur"));
        catalog.toggle_favorite(Item::new(4, "charmander"));
        catalog.remove_favorite(1);

        let saved = store.saved.borrow();
        assert_eq!(saved.len(), 3);
        assert_eq!(favorite_ids(&saved[2]), vec![4]);
    }

    #[test]
    fn test_no_op_favorite_changes_do_not_write() {
        let store = Rc::new(RecordingStore::default());
        let catalog = Catalog::open(store.clone());

        catalog.add_favorite(Item::new(1, "bulbasaur"));
        catalog.add_favorite(Item::new(1, "bulbasaur"));
        catalog.remove_favorite(42);
        catalog.set_search_text("bulb");

        assert_eq!(store.saved.borrow().len(), 1);
    }

    #[test]
    fn test_save_failure_is_contained() {
        let store = Rc::new(RecordingStore::default());
        store.fail.set(true);
        let catalog = Catalog::open(store.clone());

        catalog.add_favorite(Item::new(1, "bulbasaur"));

        assert!(catalog.is_favorite(1));
        assert!(store.saved.borrow().is_empty());
    }

    #[test]
    fn test_observers_see_each_transition() {
        let catalog = Catalog::open(Rc::new(RecordingStore::default()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        catalog.subscribe(move |state| sink.borrow_mut().push(state.search_text().to_string()));

        catalog.set_search_text("p");
        catalog.set_search_text("pi");

        assert_eq!(*seen.borrow(), vec!["p".to_string(), "pi".to_string()]);
    }

    #[test]
    fn test_clones_share_state() {
        let catalog = Catalog::open(Rc::new(RecordingStore::default()));
        let other = catalog.clone();
        other.toggle_category("fire");
        assert!(catalog.with_state(|s| s.selected_categories().contains("fire")));

        catalog.set_category_filter(vec!["water".into()]);
        catalog.clear_categories();
        assert!(other.snapshot().selected_categories().is_empty());
    }

    #[test]
    fn test_favorites_survive_restart() {
        let backend = MemoryBackend::new();
        let pikachu = Item::new(25, "pikachu").with_category("electric");

        let raw = {
            let store = Rc::new(JsonFavoritesStore::new(backend, FAVORITES_KEY));
            let catalog = Catalog::open(store.clone());
            catalog.add_favorite(pikachu.clone());
            catalog.reset();
            store.backend().raw(FAVORITES_KEY).expect("persisted")
        };

        let restarted = Catalog::open(Rc::new(JsonFavoritesStore::new(
            MemoryBackend::new().with_entry(FAVORITES_KEY, &raw),
            FAVORITES_KEY,
        )));
        restarted.with_state(|s| {
            assert_eq!(s.favorites(), &[pikachu.clone()][..]);
            assert!(s.items().is_empty());
        });
    }
}
