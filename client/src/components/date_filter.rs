//! Preset date filter used on the site tabs.

use leptos::prelude::*;

use crate::state::worksite::{DateFilterForm, PRESETS};

#[component]
pub fn DateFilterPicker(form: RwSignal<DateFilterForm>) -> impl IntoView {
    view! {
        <div class="date-filter">
            <select
                class="date-filter__preset"
                prop:value=move || form.with(|f| f.preset.clone())
                on:change=move |ev| form.update(|f| f.preset = event_target_value(&ev))
            >
                {PRESETS.iter().map(|(key, label)| view! { <option value=*key>{*label}</option> }).collect_view()}
            </select>
            <Show when=move || form.with(DateFilterForm::shows_day_picker)>
                <input
                    type="date"
                    prop:value=move || form.with(|f| f.day.clone())
                    on:change=move |ev| form.update(|f| f.day = event_target_value(&ev))
                />
            </Show>
            <Show when=move || form.with(DateFilterForm::shows_range_pickers)>
                <input
                    type="date"
                    prop:value=move || form.with(|f| f.start.clone())
                    on:change=move |ev| form.update(|f| f.start = event_target_value(&ev))
                />
                <span>"to"</span>
                <input
                    type="date"
                    prop:value=move || form.with(|f| f.end.clone())
                    on:change=move |ev| form.update(|f| f.end = event_target_value(&ev))
                />
            </Show>
        </div>
    }
}
