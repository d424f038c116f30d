//! Startup Preloader

use leptos::prelude::*;

/// Full-screen splash shown while the shell starts up
#[component]
pub fn Preloader() -> impl IntoView {
    view! {
        <div class="preloader">
            <div class="preloader-pin">"📍"</div>
            <p class="preloader-text">"Finding the best spots in Tamil Nadu..."</p>
        </div>
    }
}
