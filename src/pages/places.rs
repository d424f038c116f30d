//! District Places Page
//!
//! Popular and hidden places of the district named in the URL.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api::{self, CancelToken};
use crate::catalog::find_district;
use crate::components::{PlaceCard, ShimmerGrid};
use crate::context::use_app_context;
use crate::models::{Destination, Place};
use crate::pages::LoadState;

#[component]
fn PlaceSection(
    title: &'static str,
    empty_text: &'static str,
    district: String,
    places: Vec<Place>,
) -> impl IntoView {
    let body = if places.is_empty() {
        view! { <p class="status-message">{empty_text}</p> }.into_any()
    } else {
        view! {
            <div class="card-grid">
                {places
                    .into_iter()
                    .map(|place| view! { <PlaceCard district=district.clone() place=place /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="place-section">
            <h2 class="section-title">{title}</h2>
            {body}
        </section>
    }
}

#[component]
pub fn Places() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let shimmer_cards = ctx.config().shimmer_cards;
    let (state, set_state) = signal(LoadState::<Destination>::Loading);

    // The router has already percent-decoded the segment
    let district_key = move || params.with(|p| p.get("id").unwrap_or_default());

    // Re-runs when the district param changes; the previous request is cancelled
    Effect::new(move |_| {
        let key = district_key();
        let config = ctx.config();
        let cancel = CancelToken::for_view();
        set_state.set(LoadState::Loading);

        spawn_local(async move {
            let next = match api::list_destinations(&config, &cancel).await {
                Ok(list) => match find_district(&list, &key) {
                    Some(district) => LoadState::Loaded(district.clone()),
                    None => {
                        log::warn!("[PLACES] District {:?} not in {} records", key, list.len());
                        LoadState::Failed("District not found.".to_string())
                    }
                },
                Err(e) if e.is_cancelled() => return,
                Err(e) => {
                    log::error!("[PLACES] Failed to load destinations: {}", e);
                    LoadState::Failed("Failed to load data.".to_string())
                }
            };
            set_state.set(next);
        });
    });

    view! {
        <div class="page places-page">
            {move || match state.get() {
                LoadState::Loading => view! { <ShimmerGrid count=shimmer_cards /> }.into_any(),
                LoadState::Failed(message) => view! { <p class="status-message error">{message}</p> }.into_any(),
                LoadState::Loaded(Destination { name, popular_places, hidden_places, .. }) => {
                    let heading = format!("{} — Explore the Hidden & Famous", name);
                    view! {
                        <h1 class="page-title">{heading}</h1>
                        <PlaceSection
                            title="🌟 Popular Places"
                            empty_text="No popular places found."
                            district=name.clone()
                            places=popular_places
                        />
                        <PlaceSection
                            title="🕵 Hidden Gems"
                            empty_text="No hidden gems found."
                            district=name
                            places=hidden_places
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
