//! Navigation Bar Component
//!
//! Brand, page links, the district search box and the login/logout control.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api::{self, CancelToken};
use crate::context::use_app_context;
use crate::routes;
use crate::store::{store_set_search_term, use_app_store, AppStateStoreFields};

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", routes::HOME),
    ("About", routes::ABOUT),
    ("Contact", routes::CONTACT),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();
    let location = use_location();
    let (menu_open, set_menu_open) = signal(false);

    // Collapse the mobile menu on every navigation
    Effect::new(move |_| {
        location.pathname.track();
        set_menu_open.set(false);
    });

    let on_search_input = move |ev: web_sys::Event| {
        store_set_search_term(&store, event_target_value(&ev));
    };

    // Enter jumps back to the listing so the results are visible
    let on_search_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if location.pathname.get_untracked() != routes::HOME {
                navigate(routes::HOME, Default::default());
            }
        }
    };

    let on_logout = move |_: web_sys::MouseEvent| {
        let navigate = navigate.clone();
        let config = ctx.config();
        spawn_local(async move {
            if let Err(e) = api::logout(&config, &CancelToken::new()).await {
                log::warn!("[AUTH] Logout request failed: {}", e);
            }
            // Cleared whatever the server said
            ctx.session.clear();
            ctx.toasts.info("Logged out");
            navigate(routes::HOME, Default::default());
        });
    };

    view! {
        <nav class="navbar">
            <A href=routes::HOME attr:class="brand">"Tourist Guide"</A>

            <form class="nav-search" role="search" on:submit=on_search_submit>
                <input
                    type="search"
                    placeholder="Search districts..."
                    aria-label="Search districts"
                    prop:value=move || store.search_term().get()
                    on:input=on_search_input
                />
            </form>

            <div class=move || if menu_open.get() { "nav-menu open" } else { "nav-menu" }>
                {NAV_LINKS
                    .iter()
                    .map(|(label, path)| view! { <A href=*path>{*label}</A> })
                    .collect_view()}

                <button
                    class="nav-auth"
                    prop:hidden=move || !ctx.session.is_authenticated()
                    on:click=on_logout
                >
                    "Logout"
                </button>
                <Show when=move || !ctx.session.is_authenticated()>
                    <A href=routes::LOGIN attr:class="nav-auth">"Login"</A>
                </Show>
            </div>

            <button
                class="nav-toggle"
                aria-label="Toggle Menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
        </nav>
    }
}
