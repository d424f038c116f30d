//! Home Page
//!
//! District listing filtered by the navbar search and ordered trending-first.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CancelToken};
use crate::catalog::{display_list, group_by_region};
use crate::components::{DestinationCard, ShimmerGrid};
use crate::context::use_app_context;
use crate::models::Destination;
use crate::pages::LoadState;
use crate::store::{store_set_listing_mode, use_app_store, AppStateStoreFields, ListingMode};

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let shimmer_cards = ctx.config().shimmer_cards;
    let (state, set_state) = signal(LoadState::<Vec<Destination>>::Loading);

    // Load once per mount; the token is cancelled when the page goes away
    Effect::new(move |_| {
        let config = ctx.config();
        let cancel = CancelToken::for_view();
        spawn_local(async move {
            match api::list_destinations(&config, &cancel).await {
                Ok(list) => {
                    log::info!("[HOME] Loaded {} destinations", list.len());
                    set_state.set(LoadState::Loaded(list));
                }
                Err(e) if e.is_cancelled() => log::debug!("[HOME] Load cancelled"),
                Err(e) => {
                    log::error!("[HOME] Failed to load destinations: {}", e);
                    set_state.set(LoadState::Failed("Failed to load destinations.".to_string()));
                }
            }
        });
    });

    let visible = Memo::new(move |_| {
        let term = store.search_term().get();
        state.with(|s| match s {
            LoadState::Loaded(all) => display_list(all, &term),
            _ => Vec::new(),
        })
    });

    let mode = move || store.listing_mode().get();
    let tab_class = move |tab: ListingMode| if mode() == tab { "tab active" } else { "tab" };

    let listing = move || {
        let list = visible.get();
        if list.is_empty() {
            let term = store.search_term().get();
            let message = if term.is_empty() {
                "No districts available yet.".to_string()
            } else {
                format!("No districts match “{}”.", term)
            };
            return view! { <p class="status-message">{message}</p> }.into_any();
        }

        match mode() {
            ListingMode::TopPicks => view! {
                <div class="card-grid">
                    {list.into_iter().map(|d| view! { <DestinationCard destination=d /> }).collect_view()}
                </div>
            }
            .into_any(),
            ListingMode::Regions => group_by_region(&list)
                .into_iter()
                .map(|(region, items)| {
                    view! {
                        <section class="region-group">
                            <h2 class="section-title">{format!("{} Region", region)}</h2>
                            <div class="card-grid">
                                {items.into_iter().map(|d| view! { <DestinationCard destination=d /> }).collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="page home-page">
            <h1 class="page-title">"Discover Tamil Nadu — Culture. Nature. Legacy."</h1>

            <div class="tab-bar">
                <button
                    class=move || tab_class(ListingMode::TopPicks)
                    on:click=move |_| store_set_listing_mode(&store, ListingMode::TopPicks)
                >
                    "🔥 Top Picks"
                </button>
                <button
                    class=move || tab_class(ListingMode::Regions)
                    on:click=move |_| store_set_listing_mode(&store, ListingMode::Regions)
                >
                    "🌍 Regions"
                </button>
            </div>

            {move || match state.get() {
                LoadState::Loading => view! { <ShimmerGrid count=shimmer_cards /> }.into_any(),
                LoadState::Failed(message) => view! { <p class="status-message error">{message}</p> }.into_any(),
                LoadState::Loaded(_) => listing(),
            }}
        </div>
    }
}
