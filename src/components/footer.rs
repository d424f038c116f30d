//! Footer Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="footer-brand">"Tamil Nadu Tourist Guide"</span>
            <nav class="footer-links">
                <A href=routes::ABOUT>"About"</A>
                <A href=routes::CONTACT>"Contact"</A>
            </nav>
        </footer>
    }
}
