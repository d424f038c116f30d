//! Not Found Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page status-message">
            <p>"Page not found."</p>
            <A href=routes::HOME>"Back to Home"</A>
        </div>
    }
}
