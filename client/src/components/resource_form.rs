//! Schema-driven create/edit form for any editable resource.
//!
//! DESIGN
//! ======
//! One input per non-hidden `FieldSpec`, bound to the manager's `FormState`.
//! The heading and submit label follow the manager's mode; Cancel only
//! shows while editing and never touches the network.

use content::form::{FieldKind, FieldSpec};
use content::manager::{Mode, Notice, ResourceManager};
use content::Editable;
use leptos::prelude::*;

/// Render the form. `on_submit` runs the create/update flow.
pub fn resource_form<R: Editable>(manager: RwSignal<ResourceManager<R>>, on_submit: Callback<()>) -> impl IntoView {
    let singular = R::KIND.singular();
    let heading = move || match manager.with(ResourceManager::mode) {
        Mode::Creating => format!("Add {singular}"),
        Mode::Editing(_) => format!("Edit {singular}"),
    };
    let submit_label = move || {
        let busy = manager.with(ResourceManager::is_submitting);
        match (manager.with(ResourceManager::mode), busy) {
            (_, true) => "Saving...",
            (Mode::Creating, false) => "Create",
            (Mode::Editing(_), false) => "Update",
        }
    };
    let inputs = R::fields()
        .iter()
        .filter(|field| field.kind != FieldKind::Hidden)
        .map(|field| field_input(manager, *field))
        .collect_view();

    view! {
        <form
            class="resource-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h2 class="resource-form__heading">{heading}</h2>
            <div class="resource-form__fields">{inputs}</div>
            <div class="resource-form__actions">
                <button type="submit" class="btn btn--primary" disabled=move || manager.with(ResourceManager::is_submitting)>
                    {submit_label}
                </button>
                <Show when=move || manager.with(|m| m.editing_id().is_some())>
                    <button type="button" class="btn" on:click=move |_| manager.update(ResourceManager::cancel)>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}

fn set<R: Editable>(manager: RwSignal<ResourceManager<R>>, key: &'static str, value: String) {
    manager.update(|m| {
        if let Err(err) = m.set_field(key, value) {
            m.set_notice(Notice::error(err.to_string()));
        }
    });
}

fn field_input<R: Editable>(manager: RwSignal<ResourceManager<R>>, field: FieldSpec) -> impl IntoView {
    let key = field.key;
    let value = move || manager.with(|m| m.form().get(key).to_owned());
    let label = if field.required { format!("{} *", field.label) } else { field.label.to_owned() };

    let input = match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                class="resource-form__input"
                rows="4"
                required=field.required
                prop:value=value
                on:input=move |ev| set(manager, key, event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                class="resource-form__checkbox"
                prop:checked=move || manager.with(|m| m.form().flag(key))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    set(manager, key, checked.to_string());
                }
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                class="resource-form__input"
                required=field.required
                prop:value=value
                on:change=move |ev| set(manager, key, event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {options.iter().map(|option| view! { <option value=*option>{*option}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        kind => {
            let (input_type, placeholder) = match kind {
                FieldKind::Url => ("url", ""),
                FieldKind::Email => ("email", ""),
                FieldKind::Number => ("number", ""),
                FieldKind::Date => ("date", ""),
                FieldKind::Time => ("time", ""),
                FieldKind::List => ("text", "Comma separated"),
                _ => ("text", ""),
            };
            view! {
                <input
                    type=input_type
                    class="resource-form__input"
                    step=(kind == FieldKind::Number).then_some("any")
                    placeholder=placeholder
                    required=field.required
                    prop:value=value
                    on:input=move |ev| set(manager, key, event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <label class="resource-form__field">
            <span class="resource-form__label">{label}</span>
            {input}
        </label>
    }
}
