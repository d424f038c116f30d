//! Fallback Image Component
//!
//! `<img>` that swaps to a placeholder when the source is empty or fails to load.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub const CARD_PLACEHOLDER: &str = "https://via.placeholder.com/300";
pub const HERO_PLACEHOLDER: &str = "https://via.placeholder.com/800x400";

fn initial_src(src: String, placeholder: &str) -> String {
    if src.trim().is_empty() {
        placeholder.to_string()
    } else {
        src
    }
}

/// Source to load after a failed `current`. Swaps only once so a broken
/// placeholder cannot loop.
fn swap_target<'a>(current: &str, placeholder: &'a str) -> Option<&'a str> {
    (current != placeholder).then_some(placeholder)
}

#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(default = CARD_PLACEHOLDER)] placeholder: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let src = initial_src(src, placeholder);

    let on_error = move |ev: web_sys::ErrorEvent| {
        let Some(img) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
        else {
            return;
        };
        if let Some(next) = swap_target(&img.src(), placeholder) {
            img.set_src(next);
        }
    };

    view! {
        <img src=src alt=alt class=class loading="lazy" on:error=on_error />
    }
}
