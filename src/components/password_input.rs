//! Password Input Component
//!
//! Password field with a show/hide toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordInput(
    value: RwSignal<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(default = "current-password")] autocomplete: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="password-field">
            <input
                type=move || if visible.get() { "text" } else { "password" }
                name="password"
                placeholder="••••••••"
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <button
                type="button"
                class="password-toggle"
                aria-label="Toggle password visibility"
                on:click=move |_| set_visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "🙈" } else { "👁" }}
            </button>
        </div>
    }
}
