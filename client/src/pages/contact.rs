//! Contact page: quote request form plus office details.

use content::types::{BUDGET_RANGES, PROJECT_TYPES};
use leptos::prelude::*;

use crate::components::notice::NoticeBanner;
use crate::net::api::{gateway, logged, spawn};
use crate::state::contact::{CONFIRMATION_MS, ContactFormState};
use crate::util::time::sleep_ms;

#[component]
pub fn ContactPage() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Some(draft)) = state.try_update(ContactFormState::prepare) else {
            return;
        };
        spawn(async move {
            let resp = logged("contact submit", gateway().submit_contact(&draft).await);
            if let Some(Some(ticket)) = state.try_update(|s| s.finish(&resp)) {
                sleep_ms(CONFIRMATION_MS).await;
                state.update(|s| s.dismiss_confirmation(ticket));
            }
        });
    };

    let text_input = move |key: &'static str, label: &'static str, input_type: &'static str, required: bool| {
        view! {
            <label class="contact-form__field">
                <span>{if required { format!("{label} *") } else { label.to_owned() }}</span>
                <input
                    type=input_type
                    required=required
                    prop:value=move || state.with(|s| s.form.get(key).to_owned())
                    on:input=move |ev| state.update(|s| s.set(key, event_target_value(&ev)))
                />
            </label>
        }
    };
    let select_input = move |key: &'static str, label: &'static str, prompt: &'static str, options: &'static [&'static str]| {
        view! {
            <label class="contact-form__field">
                <span>{label}</span>
                <select
                    prop:value=move || state.with(|s| s.form.get(key).to_owned())
                    on:change=move |ev| state.update(|s| s.set(key, event_target_value(&ev)))
                >
                    <option value="">{prompt}</option>
                    {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
                </select>
            </label>
        }
    };

    view! {
        <div class="contact-page">
            <section class="page-header">
                <h1>"Get In Touch"</h1>
                <p>"Tell us about your project and we'll respond within 24 hours."</p>
            </section>
            <div class="contact-page__layout">
                <form class="contact-form" on:submit=on_submit>
                    <h2>"Send Us a Message"</h2>
                    <NoticeBanner notice=Signal::derive(move || state.with(|s| s.notice.clone())) />
                    <div class="contact-form__row">
                        {text_input("firstName", "First Name", "text", true)}
                        {text_input("lastName", "Last Name", "text", true)}
                    </div>
                    <div class="contact-form__row">
                        {text_input("email", "Email", "email", true)}
                        {text_input("phone", "Phone", "tel", false)}
                    </div>
                    <div class="contact-form__row">
                        {select_input("projectType", "Project Type", "Select a project type", PROJECT_TYPES)}
                        {select_input("budget", "Budget Range", "Select budget range", BUDGET_RANGES)}
                    </div>
                    <label class="contact-form__field">
                        <span>"Message *"</span>
                        <textarea
                            rows="6"
                            required=true
                            prop:value=move || state.with(|s| s.form.get("message").to_owned())
                            on:input=move |ev| state.update(|s| s.set("message", event_target_value(&ev)))
                        ></textarea>
                    </label>
                    <button type="submit" class="btn btn--primary" disabled=move || state.with(|s| s.submitting)>
                        {move || if state.with(|s| s.submitting) { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
                <aside class="contact-page__info">
                    <h2>"Contact Information"</h2>
                    <p><strong>"Phone"</strong><br />"(555) 123-4567"<br />"Mon - Fri: 8:00 AM - 6:00 PM"</p>
                    <p><strong>"Email"</strong><br />"info@peakstart.com"</p>
                    <p><strong>"Business Hours"</strong><br />"Monday - Friday: 8:00 AM - 6:00 PM"<br />"Saturday: 9:00 AM - 4:00 PM"<br />"Sunday: Closed"</p>
                </aside>
            </div>
        </div>
    }
}
