//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The navbar is
//! the only writer of the search term; listing views read it.

use leptos::prelude::*;
use reactive_stores::Store;

/// How the home page lays out districts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingMode {
    /// Trending-first flat grid
    #[default]
    TopPicks,
    Regions,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current navbar search text
    pub search_term: String,
    /// Home page layout, kept across navigations
    pub listing_mode: ListingMode,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Single entry point for changing the search term
pub fn store_set_search_term(store: &AppStore, term: String) {
    if store.search_term().with_untracked(|current| *current == term) {
        return;
    }
    log::trace!("[STORE] search term -> {:?}", term);
    store.search_term().set(term);
}

pub fn store_set_listing_mode(store: &AppStore, mode: ListingMode) {
    store.listing_mode().set(mode);
}
