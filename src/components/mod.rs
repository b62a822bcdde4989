//! UI Components
//!
//! Pages and the pieces they share.

mod category_filter;
mod detail_page;
mod error_message;
mod favorites_page;
mod home_page;
mod item_card;
mod listing_page;
mod load_more_sentinel;
mod loading;
mod nav_bar;
mod search_bar;

pub use category_filter::CategoryFilter;
pub use detail_page::DetailPage;
pub use error_message::ErrorMessage;
pub use favorites_page::FavoritesPage;
pub use home_page::HomePage;
pub use item_card::ItemCard;
pub use listing_page::ListingPage;
pub use load_more_sentinel::LoadMoreSentinel;
pub use loading::Loading;
pub use nav_bar::NavBar;
pub use search_bar::SearchBar;
