//! Tourism Guide App
//!
//! Application shell: context, session probe, preloader and routes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{Footer, Navbar, Preloader, RequireAuth, ToastHost, Toasts};
use crate::config::GuideConfig;
use crate::context::AppContext;
use crate::pages::{About, Contact, Home, Login, NotFound, PlaceDetails, Places, Register};
use crate::session::Session;
use crate::store::AppState;

#[component]
pub fn App(config: GuideConfig) -> impl IntoView {
    let session = Session::restore();
    let toasts = Toasts::new(config.toast_ms);
    let preloader_ms = config.preloader_ms;

    // Provide context to all children
    provide_context(Store::new(AppState::default()));
    provide_context(AppContext::new(config.clone(), session, toasts));

    // Confirm the stored flag against the backend once per app start
    session.probe(config);

    let (booting, set_booting) = signal(true);
    spawn_local(async move {
        TimeoutFuture::new(preloader_ms).await;
        set_booting.set(false);
    });

    view! {
        <Show when=move || !booting.get() fallback=|| view! { <Preloader /> }>
            <Router>
                <div class="app-layout">
                    <Navbar />
                    <ToastHost />
                    <main class="main-content">
                        <Routes fallback=|| view! { <NotFound /> }>
                            <Route path=path!("/") view=Home />
                            <Route path=path!("/about") view=About />
                            <Route path=path!("/contact") view=Contact />
                            <Route path=path!("/login") view=Login />
                            <Route path=path!("/register") view=Register />
                            <Route
                                path=path!("/places/:id")
                                view=|| view! { <RequireAuth><Places /></RequireAuth> }
                            />
                            <Route
                                path=path!("/places/:id/:placeName")
                                view=|| view! { <RequireAuth><PlaceDetails /></RequireAuth> }
                            />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </Router>
        </Show>
    }
}
