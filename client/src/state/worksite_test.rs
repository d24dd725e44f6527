use super::*;
use content::Gateway;
use content::approval::approve_activity;
use content::endpoints::ResourceKind;
use content::memory::MemoryBackend;
use content::worksite::load_site;
use futures::executor::block_on;
use serde_json::json;
use time::macros::date;

#[test]
fn presets_resolve_to_query_ranges() {
    let today = date!(2024 - 03 - 31);
    let mut form = DateFilterForm::default();
    assert_eq!(form.resolve(today), DateRange::default());

    form.preset = "today".to_owned();
    assert_eq!(form.resolve(today).date.as_deref(), Some("2024-03-31"));
    form.day = "2024-03-02".to_owned();
    assert_eq!(form.resolve(today).date.as_deref(), Some("2024-03-02"));

    form.preset = "week".to_owned();
    assert_eq!(form.resolve(today).start_date.as_deref(), Some("2024-03-24"));

    form.preset = "month".to_owned();
    assert_eq!(form.resolve(today).start_date.as_deref(), Some("2024-02-29"));
}

#[test]
fn custom_range_needs_both_bounds() {
    let today = date!(2024 - 03 - 31);
    let mut form = DateFilterForm { preset: "custom".to_owned(), start: "2024-03-01".to_owned(), ..DateFilterForm::default() };
    assert_eq!(form.resolve(today), DateRange::default());
    form.end = "2024-03-15".to_owned();
    let range = form.resolve(today);
    assert_eq!(range.start_date.as_deref(), Some("2024-03-01"));
    assert_eq!(range.end_date.as_deref(), Some("2024-03-15"));
    assert!(form.shows_range_pickers());
    assert!(!form.shows_day_picker());
}

#[test]
fn preset_keys_match_filter_keys() {
    for (key, label) in PRESETS {
        let form = DateFilterForm { preset: (*key).to_owned(), ..DateFilterForm::default() };
        assert_eq!(form.filter().key(), *key);
        assert_eq!(form.filter().label(), *label);
    }
}

#[test]
fn tabs_default_to_workers() {
    assert_eq!(SiteTab::default(), SiteTab::Workers);
    assert_eq!(SiteTab::ALL.map(SiteTab::label), ["Workers", "Daily Activities", "Costs"]);
}

#[test]
fn reload_after_approval_shows_the_new_cost() {
    let gw = Gateway::new(MemoryBackend::new());
    let backend = gw.transport();
    backend.seed(ResourceKind::Site, json!({"id": 1, "name": "North", "status": "active"}));
    backend.seed(
        ResourceKind::DailyActivity,
        json!({"site_id": 1, "date": "2024-04-02", "activity_name": "Dig", "quantity": 2.0, "unit_price": 40.0, "total_price": 80.0}),
    );

    let mut state = OverviewState::default();
    let first = state.begin(Some(1));
    let before = block_on(load_site(&gw, 1));
    assert!(state.finish(first, before.clone()));
    assert_eq!(state.site_id(), Some(1));
    let activity = before.expect("overview").activities[0].clone();

    block_on(approve_activity(&gw, &activity)).expect("approved");
    let second = state.begin(Some(1));
    assert!(state.overview.is_some(), "same-site reload keeps the header");

    let after = block_on(load_site(&gw, 1));
    assert!(state.finish(second, after));
    let Some(Ok(overview)) = &state.overview else {
        panic!("expected a loaded overview");
    };
    assert!((overview.totals().activity - 80.0).abs() < 1e-9);
}

#[test]
fn stale_overview_reply_is_dropped() {
    let mut state = OverviewState::default();
    let first = state.begin(Some(1));
    let second = state.begin(Some(2));
    assert!(!state.finish(first, Err("late".to_owned())));
    assert_eq!(state.overview, None);
    assert!(state.finish(second, Err(content::worksite::SITE_NOT_FOUND.to_owned())));
    assert_eq!(state.site_id(), None);
}
