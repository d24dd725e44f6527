//! Costs tab: CRUD with type, category and date filters, plus totals.

use content::filters::CostQuery;
use content::manager::ResourceManager;
use content::types::{ALL, COST_CATEGORIES, COST_TYPES, Cost, RecordId};
use content::worksite::{CostTotals, money};
use content::FormState;
use leptos::prelude::*;

use super::resource::resource_panel;
use crate::components::date_filter::DateFilterPicker;
use crate::state::worksite::DateFilterForm;
use crate::util::time::{today, today_text};

#[component]
pub fn CostsTab(site_id: RecordId) -> impl IntoView {
    let defaults = FormState::new().with("site_id", site_id.to_string()).with("date", today_text());
    let costs = RwSignal::new(ResourceManager::<Cost>::new().with_defaults(defaults));
    let cost_type = RwSignal::new(ALL.to_owned());
    let category = RwSignal::new(ALL.to_owned());
    let dates = RwSignal::new(DateFilterForm::default());
    let query = Signal::derive(move || {
        CostQuery {
            site_id: Some(site_id),
            worker_id: None,
            cost_type: cost_type.get(),
            category: category.get(),
            range: dates.with(|f| f.resolve(today())),
        }
        .to_query()
    });
    let totals = Memo::new(move |_| costs.with(|m| CostTotals::of(m.records())));

    let choice = move |signal: RwSignal<String>, all_label: &'static str, options: &'static [&'static str]| {
        view! {
            <select prop:value=move || signal.get() on:change=move |ev| signal.set(event_target_value(&ev))>
                <option value=ALL>{all_label}</option>
                {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
            </select>
        }
    };

    view! {
        <section class="site-tab">
            <h2>"Costs"</h2>
            <div class="filter-bar">
                {choice(cost_type, "All types", COST_TYPES)}
                {choice(category, "All categories", COST_CATEGORIES)}
                <DateFilterPicker form=dates />
            </div>
            <div class="site-detail__summary">
                <div class="stat-tile">
                    <strong>{move || money(totals.get().total)}</strong>
                    <span>"Total"</span>
                </div>
                <div class="stat-tile">
                    <strong>{move || money(totals.get().worker)}</strong>
                    <span>"Worker costs"</span>
                </div>
                <div class="stat-tile">
                    <strong>{move || money(totals.get().activity)}</strong>
                    <span>"Activity costs"</span>
                </div>
            </div>
            {resource_panel(costs, query, None)}
        </section>
    }
}
