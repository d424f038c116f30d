//! Login Page
//!
//! Validates locally, then posts credentials. On success the session is
//! marked and the user lands on the page they originally asked for.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::api::{self, CancelToken};
use crate::components::PasswordInput;
use crate::context::use_app_context;
use crate::forms::LoginForm;
use crate::guard::{post_login_target, REDIRECT_PARAM};
use crate::routes;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let query = use_query_map();
    let cancel = CancelToken::for_view();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = LoginForm {
            identifier: identifier.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(e) = form.to_request() {
            ctx.toasts.error(e.to_string());
            return;
        }

        let redirect = query.with_untracked(|q| q.get(REDIRECT_PARAM));
        let target = post_login_target(redirect.as_deref());
        let navigate = navigate.clone();
        let cancel = cancel.clone();
        let config = ctx.config();
        submitting.set(true);

        spawn_local(async move {
            let Ok(request) = form.to_request() else {
                submitting.set(false);
                return;
            };
            match api::login(&config, &cancel, &request).await {
                Ok(message) => {
                    log::info!("[AUTH] Logged in, continuing to {}", target);
                    ctx.session.mark_authenticated();
                    ctx.toasts.success(message);
                    submitting.set(false);
                    navigate(&target, NavigateOptions { replace: true, ..Default::default() });
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    log::warn!("[AUTH] Login failed: {}", e);
                    ctx.toasts.error(e.to_string());
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <h2 class="auth-title">"Welcome Back 👋"</h2>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <label class="field">
                        <span>"Username or Email"</span>
                        <input
                            type="text"
                            name="identifier"
                            placeholder="you@example.com"
                            autocomplete="username"
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </label>

                    <label class="field">
                        <span>"Password"</span>
                        <PasswordInput value=password disabled=submitting />
                    </label>

                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Logging in..." } else { "Login" }}
                    </button>

                    <p class="auth-switch">
                        "Not registered? "
                        <A href=routes::REGISTER>"Create an account"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}
