use super::*;
use time::macros::date;

// =============================================================================
// QUERY PAIRS
// =============================================================================

#[test]
fn blog_all_category_sends_no_category() {
    let query = BlogQuery::default().to_query();
    assert!(query.is_empty());
}

#[test]
fn blog_category_and_search_are_sent_as_selected() {
    let query = BlogQuery { category: "Safety".to_owned(), search: "steel beams".to_owned() }.to_query();
    assert_eq!(
        query.pairs(),
        &[("category".to_owned(), "Safety".to_owned()), ("search".to_owned(), "steel beams".to_owned())]
    );
}

#[test]
fn cost_query_omits_all_and_missing_ids() {
    let query = CostQuery { site_id: Some(3), cost_type: "worker".to_owned(), ..CostQuery::default() }.to_query();
    assert_eq!(query.get("site_id"), Some("3"));
    assert_eq!(query.get("cost_type"), Some("worker"));
    assert_eq!(query.get("category"), None);
    assert_eq!(query.get("worker_id"), None);
}

#[test]
fn worker_query_sends_active_flag_as_bool_text() {
    let query = WorkerQuery { site_id: Some(1), is_active: Some(false) }.to_query();
    assert_eq!(query.get("is_active"), Some("false"));
}

// =============================================================================
// DATE PRESETS
// =============================================================================

#[test]
fn day_preset_sends_date_only() {
    let range = DateFilter::Day("2024-06-03".to_owned()).resolve(date!(2024 - 06 - 10));
    assert_eq!(range.date.as_deref(), Some("2024-06-03"));
    assert_eq!(range.start_date, None);
}

#[test]
fn empty_day_defaults_to_today() {
    let range = DateFilter::Day(String::new()).resolve(date!(2024 - 06 - 10));
    assert_eq!(range.date.as_deref(), Some("2024-06-10"));
}

#[test]
fn week_preset_starts_seven_days_back() {
    let range = DateFilter::Week.resolve(date!(2024 - 03 - 03));
    assert_eq!(range.start_date.as_deref(), Some("2024-02-25"));
    assert_eq!(range.end_date, None);
}

#[test]
fn month_preset_clamps_to_shorter_month() {
    let range = DateFilter::Month.resolve(date!(2024 - 03 - 31));
    assert_eq!(range.start_date.as_deref(), Some("2024-02-29"));
    assert_eq!(month_before(date!(2024 - 01 - 15)), date!(2023 - 12 - 15));
}

#[test]
fn custom_preset_needs_both_bounds() {
    let half = DateFilter::Custom { start: "2024-01-01".to_owned(), end: String::new() };
    assert_eq!(half.resolve(date!(2024 - 02 - 01)), DateRange::default());

    let full = DateFilter::Custom { start: "2024-01-01".to_owned(), end: "2024-01-31".to_owned() };
    let query = Query::new().range(&full.resolve(date!(2024 - 02 - 01)));
    assert_eq!(query.get("start_date"), Some("2024-01-01"));
    assert_eq!(query.get("end_date"), Some("2024-01-31"));
    assert_eq!(query.get("date"), None);
}

#[test]
fn all_preset_sends_nothing() {
    assert!(Query::new().range(&DateFilter::All.resolve(date!(2024 - 02 - 01))).is_empty());
}

#[test]
fn parse_and_format_dates() {
    assert_eq!(parse_date("2024-07-04"), Some(date!(2024 - 07 - 04)));
    assert_eq!(parse_date("July 4"), None);
    assert_eq!(format_date(date!(2024 - 07 - 04)), "2024-07-04");
}
