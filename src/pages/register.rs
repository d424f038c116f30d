//! Register Page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::{self, CancelToken};
use crate::components::PasswordInput;
use crate::context::use_app_context;
use crate::forms::RegisterForm;
use crate::routes;

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let cancel = CancelToken::for_view();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = RegisterForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(e) = form.to_request() {
            ctx.toasts.error(e.to_string());
            return;
        }

        let navigate = navigate.clone();
        let cancel = cancel.clone();
        let config = ctx.config();
        submitting.set(true);

        spawn_local(async move {
            let Ok(request) = form.to_request() else {
                submitting.set(false);
                return;
            };
            match api::register(&config, &cancel, &request).await {
                Ok(message) => {
                    log::info!("[AUTH] Registered {:?}", request.username);
                    ctx.toasts.success(message);
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    submitting.set(false);

                    TimeoutFuture::new(config.register_redirect_ms).await;
                    if !cancel.is_cancelled() {
                        navigate(routes::LOGIN, Default::default());
                    }
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    log::warn!("[AUTH] Registration failed: {}", e);
                    ctx.toasts.error(e.to_string());
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="page auth-page">
            <div class="auth-card">
                <h2 class="auth-title">"Create Account ✨"</h2>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <label class="field">
                        <span>"Full Name"</span>
                        <input
                            type="text"
                            name="username"
                            placeholder="John Doe"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </label>

                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            name="email"
                            placeholder="you@example.com"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </label>

                    <label class="field">
                        <span>"Password"</span>
                        <PasswordInput value=password disabled=submitting autocomplete="new-password" />
                    </label>

                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing Up..." } else { "Sign Up" }}
                    </button>

                    <p class="auth-switch">
                        "Already have an account? "
                        <A href=routes::LOGIN>"Login"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}
