//! Contact Page
//!
//! Message form checked in the browser; nothing is sent yet.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::forms::ContactForm;

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_app_context();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                log::info!("[CONTACT] Message from {:?} accepted", form.email);
                ctx.toasts.success("Thanks! We'll get back to you soon.");
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(e) => ctx.toasts.error(e.to_string()),
        }
    };

    view! {
        <div class="page contact-page">
            <h2 class="page-title">"Contact Us 📩"</h2>
            <form class="contact-form" on:submit=on_submit novalidate>
                <label class="field">
                    <span>"Your Name"</span>
                    <input
                        type="text"
                        placeholder="Enter your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Message"</span>
                    <textarea
                        rows="5"
                        placeholder="Write your message here..."
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit" class="primary-btn">"Send Message"</button>
            </form>
        </div>
    }
}
