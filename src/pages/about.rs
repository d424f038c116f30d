//! About Page

use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="page about-page">
            <h2 class="page-title">"About Our Guide"</h2>
            <p>
                "Welcome to the ultimate guide to Tamil Nadu! Our mission is to help travelers and "
                "explorers discover the rich cultural heritage, hidden gems, and popular destinations "
                "of Tamil Nadu. From ancient temples in Madurai to the serene beaches of Kanyakumari, "
                "we showcase every place with authenticity and pride."
            </p>
            <blockquote>"Travel is more than seeing sights — it’s about experiencing stories."</blockquote>
        </div>
    }
}
