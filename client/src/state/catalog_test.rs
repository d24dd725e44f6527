use super::*;
use content::types::BlogPost;

fn post(id: i64, title: &str) -> BlogPost {
    BlogPost {
        id,
        title: title.to_owned(),
        excerpt: String::new(),
        content: String::new(),
        author: "Kim".to_owned(),
        publish_date: "2024-01-01".to_owned(),
        category: "Design".to_owned(),
        image: String::new(),
        read_time: "3 min".to_owned(),
    }
}

#[test]
fn slow_earlier_search_does_not_overwrite_newer_results() {
    let mut listing = Listing::<BlogPost>::default();
    let typed_s = listing.begin();
    let typed_st = listing.begin();

    assert!(listing.finish(typed_st, ApiResponse::ok(vec![post(2, "Steel")])));
    assert!(!listing.finish(typed_s, ApiResponse::ok(vec![post(1, "Safety"), post(2, "Steel")])));
    assert_eq!(listing.records.len(), 1);
    assert_eq!(listing.status, ListStatus::Loaded);
}

#[test]
fn failure_clears_records_and_exposes_error() {
    let mut listing = Listing::<BlogPost>::default();
    let t = listing.begin();
    listing.finish(t, ApiResponse::ok(vec![post(1, "A")]));
    let t = listing.begin();
    listing.finish(t, ApiResponse::failure("Failed to fetch"));
    assert!(listing.records.is_empty());
    assert_eq!(listing.error(), Some("Failed to fetch"));
}

#[test]
fn category_options_start_with_all() {
    let categories = vec!["Design".to_owned(), "Safety".to_owned()];
    assert_eq!(category_options(&categories), vec!["All", "Design", "Safety"]);
}

#[test]
fn fresh_filters_send_nothing() {
    use content::filters::{BlogQuery, ProjectQuery};
    assert!(BlogQuery::default().to_query().is_empty());
    assert!(ProjectQuery::default().to_query().is_empty());
}
