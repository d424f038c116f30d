//! Place Details Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api::{self, CancelToken};
use crate::catalog::{find_district, find_place, PlaceLookup};
use crate::components::{FallbackImage, HERO_PLACEHOLDER};
use crate::context::use_app_context;
use crate::models::{Destination, Place};
use crate::pages::LoadState;
use crate::routes::district_path;

/// Resolved place plus how many records share its name
#[derive(Clone, Debug, PartialEq)]
struct ResolvedPlace {
    place: Place,
    same_name_count: usize,
}

fn resolve(destinations: &[Destination], district_key: &str, place_name: &str) -> Option<ResolvedPlace> {
    let district = find_district(destinations, district_key)?;
    match find_place(district, place_name) {
        PlaceLookup::Unique(place) => Some(ResolvedPlace { place: place.clone(), same_name_count: 1 }),
        PlaceLookup::Duplicated { first, count } => {
            log::warn!(
                "[PLACE] {} places named {:?} in {}; showing the first",
                count,
                place_name,
                district.name
            );
            Some(ResolvedPlace { place: first.clone(), same_name_count: count })
        }
        PlaceLookup::NotFound => None,
    }
}

#[component]
pub fn PlaceDetails() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let (state, set_state) = signal(LoadState::<ResolvedPlace>::Loading);

    // Params arrive decoded; decoding again would mangle names holding `%`
    let district_key = move || params.with(|p| p.get("id").unwrap_or_default());
    let place_name = move || params.with(|p| p.get("placeName").unwrap_or_default());

    Effect::new(move |_| {
        let district = district_key();
        let place = place_name();
        let config = ctx.config();
        let cancel = CancelToken::for_view();
        set_state.set(LoadState::Loading);

        spawn_local(async move {
            let next = match api::list_destinations(&config, &cancel).await {
                Ok(list) => match resolve(&list, &district, &place) {
                    Some(found) => LoadState::Loaded(found),
                    None => LoadState::Failed("Place not found.".to_string()),
                },
                Err(e) if e.is_cancelled() => return,
                Err(e) => {
                    log::error!("[PLACE] Failed to load destinations: {}", e);
                    LoadState::Failed("Place not found.".to_string())
                }
            };
            set_state.set(next);
        });
    });

    let back_link = move || {
        view! {
            <A href=district_path(&district_key()) attr:class="back-link">"← Back to District"</A>
        }
    };

    view! {
        <div class="page place-details-page">
            {move || match state.get() {
                LoadState::Loading => view! { <p class="status-message">"Loading..."</p> }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="status-message error">
                        <p>{message}</p>
                        {back_link}
                    </div>
                }
                .into_any(),
                LoadState::Loaded(ResolvedPlace { place, same_name_count }) => {
                    let Place { name, description, image } = place;
                    let alt = name.clone();
                    let notice = (same_name_count > 1).then(|| {
                        view! {
                            <p class="notice">
                                {format!("{} places share this name; showing the first listed.", same_name_count)}
                            </p>
                        }
                    });
                    view! {
                        {back_link}
                        <article class="place-detail">
                            <h1 class="page-title">{name}</h1>
                            {notice}
                            <FallbackImage src=image alt=alt placeholder=HERO_PLACEHOLDER class="hero-image" />
                            <p class="place-description">{description}</p>
                        </article>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{decode_segment, place_path};

    fn chennai() -> Vec<Destination> {
        vec![Destination {
            name: "Chennai".into(),
            popular_places: vec![Place { name: "Marina Beach".into(), ..Default::default() }],
            hidden_places: vec![
                Place { name: "Semmozhi Poonga".into(), ..Default::default() },
                Place { name: "marina beach".into(), description: "dup".into(), ..Default::default() },
            ],
            ..Default::default()
        }]
    }

    #[test]
    fn test_resolve_reports_duplicates() {
        let found = resolve(&chennai(), "chennai", "MARINA BEACH").unwrap();
        assert_eq!(found.place.name, "Marina Beach");
        assert_eq!(found.same_name_count, 2);
    }

    #[test]
    fn test_resolve_name_with_literal_percent() {
        let mut list = chennai();
        list[0].hidden_places.push(Place { name: "Hill View 100%25 Point".into(), ..Default::default() });

        let path = place_path("Chennai", "Hill View 100%25 Point");
        let segment = path.rsplit('/').next().unwrap();
        let param = decode_segment(segment);

        let found = resolve(&list, "Chennai", &param).unwrap();
        assert_eq!(found.place.name, "Hill View 100%25 Point");
    }

    #[test]
    fn test_resolve_unique_and_missing() {
        let list = chennai();
        assert_eq!(resolve(&list, "Chennai", "semmozhi poonga").map(|r| r.same_name_count), Some(1));
        assert!(resolve(&list, "Chennai", "Guindy Park").is_none());
        assert!(resolve(&list, "Vellore", "Marina Beach").is_none());
    }
}
