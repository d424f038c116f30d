//! Require Auth Component
//!
//! Wraps protected routes. Redirects anonymous users to `/login` with the
//! requested location preserved; the API still enforces the session.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::context::use_app_context;
use crate::guard::{guard_route, RouteDecision};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let pathname = location.pathname.get();
        let search = location.search.get();
        let search = search.trim_start_matches('?');
        let requested = if search.is_empty() {
            pathname
        } else {
            format!("{}?{}", pathname, search)
        };
        guard_route(ctx.session.status(), &requested)
    });

    Effect::new(move |_| {
        if let RouteDecision::Redirect(to) = decision.get() {
            log::info!("[AUTH] Not logged in, redirecting to {}", to);
            navigate(&to, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    move || match decision.get() {
        RouteDecision::Allow => children().into_any(),
        RouteDecision::Wait => view! { <div class="status-message">"Checking session…"</div> }.into_any(),
        RouteDecision::Redirect(_) => ().into_any(),
    }
}
