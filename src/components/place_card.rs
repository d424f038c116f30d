//! Place Card Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::FallbackImage;
use crate::models::Place;
use crate::routes::place_path;

const EXCERPT_CHARS: usize = 80;

/// First `limit` characters followed by an ellipsis
fn excerpt(text: &str, limit: usize) -> String {
    let text = text.trim();
    if text.is_empty() {
        return "No description available".to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut.trim_end())
}

/// Card linking to a place's detail page
#[component]
pub fn PlaceCard(#[prop(into)] district: String, place: Place) -> impl IntoView {
    let Place { name, description, image } = place;
    let alt = name.clone();
    let href = place_path(&district, &name);
    let summary = excerpt(&description, EXCERPT_CHARS);

    view! {
        <A href=href attr:class="card place-card">
            <FallbackImage src=image alt=alt class="card-image" />
            <h3 class="card-title">{name}</h3>
            <p class="card-text">{summary}</p>
        </A>
    }
}
