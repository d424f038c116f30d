//! Shimmer Placeholder
//!
//! Grey pulsing cards shown while a list is loading.

use leptos::prelude::*;

#[component]
fn ShimmerCard() -> impl IntoView {
    view! {
        <div class="card shimmer">
            <div class="shimmer-image"></div>
            <div class="shimmer-line wide"></div>
            <div class="shimmer-line"></div>
        </div>
    }
}

/// Grid of `count` shimmer cards
#[component]
pub fn ShimmerGrid(count: usize) -> impl IntoView {
    view! {
        <div class="card-grid" aria-busy="true">
            {(0..count).map(|_| view! { <ShimmerCard /> }).collect_view()}
        </div>
    }
}
