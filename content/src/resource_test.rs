use super::*;

fn service() -> Service {
    Service {
        id: 1,
        title: "Roofing".to_owned(),
        description: "New roofs".to_owned(),
        image: String::new(),
        icon_name: Some("HardHat".to_owned()),
        features: vec!["Fast".to_owned(), "Durable".to_owned()],
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn service_features_split_on_submit() {
    let form = Service::blank_form()
        .with("title", "Roofing")
        .with("description", "New roofs")
        .with("features", "Fast, Durable, Insured");
    let draft = Service::to_draft(&form).expect("draft");
    assert_eq!(draft.features, vec!["Fast", "Durable", "Insured"]);
    assert_eq!(draft.icon_name, None);
}

#[test]
fn service_form_joins_features_for_editing() {
    let form = service().to_form();
    assert_eq!(form.get("features"), "Fast, Durable");
    assert_eq!(form.get("icon_name"), "HardHat");
}

#[test]
fn editing_then_submitting_preserves_record_fields() {
    let original = service();
    let draft = Service::to_draft(&original.to_form()).expect("draft");
    assert_eq!(draft.title, original.title);
    assert_eq!(draft.features, original.features);
    assert_eq!(draft.icon_name, original.icon_name);
}

#[test]
fn required_fields_block_the_draft() {
    let form = Project::blank_form().with("title", "Depot");
    let err = Project::to_draft(&form).expect_err("missing fields");
    assert_eq!(err, FormError::MissingField("Category".to_owned()));
}

#[test]
fn activity_total_is_quantity_times_unit_price() {
    let form = DailyActivity::blank_form()
        .with("site_id", "2")
        .with("date", "2024-04-02")
        .with("activity_name", "Pour slab")
        .with("quantity", "3")
        .with("unit_price", "125.5")
        .with("workers_involved", "4, 5");
    let draft = DailyActivity::to_draft(&form).expect("draft");
    assert!((draft.total_price - 376.5).abs() < 1e-9);
    assert_eq!(draft.workers_involved, vec![4, 5]);
    assert_eq!(draft.site_id, 2);
}

#[test]
fn attendance_blank_form_is_a_standard_day() {
    let form = Attendance::blank_form();
    assert_eq!(form.get("check_in_time"), "08:00");
    assert_eq!(form.get("check_out_time"), "17:00");
    assert_eq!(form.get("hours_worked"), "8");
    assert!(form.flag("is_present"));
}

#[test]
fn cost_optional_ids_stay_absent_when_blank() {
    let form = Cost::blank_form()
        .with("site_id", "1")
        .with("description", "Gravel")
        .with("amount", "80")
        .with("date", "2024-04-02");
    let draft = Cost::to_draft(&form).expect("draft");
    assert_eq!(draft.cost_type, "other");
    assert_eq!(draft.worker_id, None);
    assert_eq!(draft.category, None);
    let json = serde_json::to_value(&draft).expect("json");
    assert!(json.get("worker_id").is_none());
}

#[test]
fn generic_blank_form_unchecks_checkboxes() {
    let form = Service::blank_form();
    assert_eq!(form.get("title"), "");
    let worker = Worker::blank_form();
    assert!(worker.flag("is_active"));
}

#[test]
fn cells_follow_column_headings() {
    let cells = service().cells();
    let heads = headings::<Service>();
    assert_eq!(heads, vec!["Title", "Icon", "Features (comma separated)"]);
    assert_eq!(cells, vec!["Roofing", "HardHat", "Fast, Durable"]);
}

#[test]
fn worker_form_round_trips_numbers_without_decimals() {
    let worker = Worker {
        id: 3,
        site_id: 1,
        site_name: None,
        name: "Ana".to_owned(),
        position: "Mason".to_owned(),
        daily_price: 100.0,
        phone: None,
        email: None,
        is_active: false,
    };
    let form = worker.to_form();
    assert_eq!(form.get("daily_price"), "100");
    assert!(!form.flag("is_active"));
}

#[test]
fn blog_publish_date_is_free_text() {
    let post = BlogPost {
        id: 4,
        title: "Steel framing".to_owned(),
        excerpt: "Why steel".to_owned(),
        content: "Body".to_owned(),
        author: "Sam".to_owned(),
        publish_date: "January 15, 2025".to_owned(),
        category: "Design".to_owned(),
        image: String::new(),
        read_time: "5 min read".to_owned(),
    };
    let spec = crate::form::field(BlogPost::fields(), "publishDate").expect("field");
    assert_eq!(spec.kind, FieldKind::Text);

    let form = post.to_form();
    assert_eq!(form.get("publishDate"), "January 15, 2025");
    let draft = BlogPost::to_draft(&form).expect("draft");
    assert_eq!(draft.publish_date, "January 15, 2025");
}
