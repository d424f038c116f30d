//! Destination Card Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::is_trending;
use crate::components::FallbackImage;
use crate::models::Destination;
use crate::routes::district_path;

/// Card linking to a district's places
#[component]
pub fn DestinationCard(destination: Destination) -> impl IntoView {
    let Destination { name, description, image, .. } = destination;
    let alt = name.clone();
    let href = district_path(&name);
    let trending = is_trending(&name);

    view! {
        <A href=href attr:class="card destination-card">
            <FallbackImage src=image alt=alt class="card-image" />
            <h2 class="card-title">
                {name}
                {trending.then(|| view! { <span class="trending-badge">"🔥"</span> })}
            </h2>
            <p class="card-text">{description}</p>
        </A>
    }
}
