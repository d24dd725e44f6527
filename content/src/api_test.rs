use super::*;
use crate::form::FormState;
use crate::memory::MemoryBackend;
use crate::transport::{HttpReply, TransportError};
use async_trait::async_trait;
use serde_json::json;

fn gateway() -> Gateway<MemoryBackend> {
    Gateway::new(MemoryBackend::new())
}

/// Replies to everything with a fixed status and body.
struct FixedReply(u16, Option<Value>);

#[async_trait(?Send)]
impl Transport for FixedReply {
    async fn send(&self, _request: HttpRequest) -> Result<HttpReply, TransportError> {
        Ok(HttpReply { status: self.0, body: self.1.clone() })
    }
}

// =============================================================================
// CREATE / LIST / DELETE FOR EVERY KIND
// =============================================================================

async fn create_list_delete<R: Editable>(gw: &Gateway<MemoryBackend>, form: FormState) {
    let draft = R::to_draft(&form).expect("draft");
    let created = gw.create::<R>(&draft).await;
    assert!(created.success, "{:?} create failed: {:?}", R::KIND, created.error);

    let listed = gw.list::<R>(&Query::new()).await.into_result().expect("list");
    assert_eq!(listed.len(), 1, "{:?} list after create", R::KIND);
    let id = listed[0].id();
    assert!(id > 0);
    if let Some(record) = created.data {
        assert_eq!(record.id(), id);
    }

    let deleted = gw.delete::<R>(id).await;
    assert!(deleted.success);
    let listed = gw.list::<R>(&Query::new()).await.into_result().expect("list");
    assert!(listed.iter().all(|r| r.id() != id), "{:?} still listed after delete", R::KIND);
}

#[tokio::test]
async fn every_kind_creates_lists_and_deletes() {
    let gw = gateway();
    create_list_delete::<Service>(&gw, Service::blank_form().with("title", "Roofing").with("description", "Roofs"))
        .await;
    create_list_delete::<Project>(
        &gw,
        Project::blank_form()
            .with("title", "Depot")
            .with("category", "Industrial")
            .with("location", "Tacoma")
            .with("description", "Warehouse"),
    )
    .await;
    create_list_delete::<BlogPost>(
        &gw,
        BlogPost::blank_form()
            .with("title", "Safer sites")
            .with("excerpt", "Short")
            .with("content", "Long")
            .with("author", "Kim")
            .with("category", "Safety"),
    )
    .await;
    create_list_delete::<TeamMember>(&gw, TeamMember::blank_form().with("name", "Kim").with("position", "Lead")).await;
    create_list_delete::<Testimonial>(&gw, Testimonial::blank_form().with("name", "Lee").with("text", "Great")).await;
    create_list_delete::<CompanyStat>(&gw, CompanyStat::blank_form().with("number", "500+").with("label", "Projects"))
        .await;
    create_list_delete::<Certification>(&gw, Certification::blank_form().with("name", "ISO 9001")).await;
    create_list_delete::<Award>(&gw, Award::blank_form().with("name", "Builder of the Year").with("year", "2023")).await;
    create_list_delete::<ContactSubmission>(
        &gw,
        ContactSubmission::blank_form()
            .with("firstName", "Jo")
            .with("lastName", "Park")
            .with("email", "jo@example.com")
            .with("message", "Quote please"),
    )
    .await;
    create_list_delete::<Site>(
        &gw,
        Site::blank_form().with("name", "North Yard").with("location", "Everett").with("start_date", "2024-01-02"),
    )
    .await;
    create_list_delete::<Worker>(&gw, Worker::blank_form().with("site_id", "1").with("name", "Ana").with("daily_price", "100"))
        .await;
    create_list_delete::<DailyActivity>(
        &gw,
        DailyActivity::blank_form()
            .with("site_id", "1")
            .with("date", "2024-04-02")
            .with("activity_name", "Excavation")
            .with("unit_price", "50"),
    )
    .await;
    create_list_delete::<Cost>(
        &gw,
        Cost::blank_form().with("site_id", "1").with("description", "Gravel").with("amount", "80").with("date", "2024-04-02"),
    )
    .await;
    create_list_delete::<Attendance>(&gw, Attendance::blank_form().with("worker_id", "1").with("date", "2024-04-02"))
        .await;
}

#[tokio::test]
async fn contact_submission_is_stored_with_new_status() {
    let gw = gateway();
    let draft = ContactDraft {
        first_name: "Jo".to_owned(),
        last_name: "Park".to_owned(),
        email: "jo@example.com".to_owned(),
        phone: None,
        project_type: None,
        message: "Hello".to_owned(),
        budget: None,
    };
    let resp = gw.submit_contact(&draft).await;
    assert!(resp.success);
    assert_eq!(resp.data, None);
    let subs = gw.contact_submissions().await.into_result().expect("list");
    assert_eq!(subs[0].status.as_deref(), Some("new"));
}

// =============================================================================
// QUERY PARAMETERS
// =============================================================================

#[tokio::test]
async fn blog_filter_sends_exact_parameters() {
    let gw = gateway();
    gw.blog_posts(&BlogQuery::default()).await;
    let request = gw.transport().last_request().expect("request");
    assert_eq!(request.path, "/api/blog/posts");
    assert!(request.query.is_empty());

    gw.blog_posts(&BlogQuery { category: "Design".to_owned(), search: "Open Plan ".to_owned() }).await;
    let request = gw.transport().last_request().expect("request");
    assert_eq!(
        request.query,
        vec![("category".to_owned(), "Design".to_owned()), ("search".to_owned(), "Open Plan ".to_owned())]
    );
}

#[tokio::test]
async fn blog_search_matches_title_or_excerpt_case_insensitively() {
    let gw = gateway();
    let backend = gw.transport();
    backend.seed(
        ResourceKind::BlogPost,
        json!({"title": "Steel framing", "excerpt": "x", "author": "A", "category": "Design"}),
    );
    backend.seed(
        ResourceKind::BlogPost,
        json!({"title": "Budgets", "excerpt": "Plan your STEEL order", "author": "B", "category": "Management"}),
    );
    backend.seed(ResourceKind::BlogPost, json!({"title": "Paint", "excerpt": "Color", "author": "C", "category": "Design"}));

    let found = gw.blog_posts(&BlogQuery { search: "steel".to_owned(), ..BlogQuery::default() }).await;
    assert_eq!(found.into_result().expect("posts").len(), 2);

    let design = gw.blog_posts(&BlogQuery { category: "Design".to_owned(), ..BlogQuery::default() }).await;
    assert_eq!(design.into_result().expect("posts").len(), 2);

    let categories = gw.blog_categories().await.into_result().expect("categories");
    assert_eq!(categories, vec!["Design", "Management"]);
}

#[tokio::test]
async fn home_services_are_the_first_three() {
    let gw = gateway();
    for title in ["A", "B", "C", "D"] {
        gw.transport().seed(ResourceKind::Service, json!({"title": title, "description": "d"}));
    }
    let featured = gw.home_services().await.into_result().expect("services");
    let titles: Vec<_> = featured.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

// =============================================================================
// FAILURE SHAPES
// =============================================================================

#[tokio::test]
async fn unsupported_operation_makes_no_request() {
    let gw = gateway();
    let draft = ContactDraft {
        first_name: "Jo".to_owned(),
        last_name: "Park".to_owned(),
        email: "jo@example.com".to_owned(),
        phone: None,
        project_type: None,
        message: "Hello".to_owned(),
        budget: None,
    };
    let resp = gw.update::<ContactSubmission>(1, &draft).await;
    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("Contact Submissions does not support update"));

    let resp = gw.get::<TeamMember>(1).await;
    assert_eq!(resp.error.as_deref(), Some("Team Members does not support get"));
    assert_eq!(gw.transport().request_count(), 0);
}

#[tokio::test]
async fn missing_record_returns_server_envelope() {
    let gw = gateway();
    let resp = gw.project(42).await;
    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("Resource not found"));
}

#[tokio::test]
async fn transport_failure_becomes_failed_envelope() {
    let gw = gateway();
    gw.transport().set_offline(true);
    let resp = gw.services().await;
    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("network unreachable"));
}

#[tokio::test]
async fn non_envelope_body_reports_status() {
    let gw = Gateway::new(FixedReply(502, None));
    let resp = gw.services().await;
    assert_eq!(resp.error.as_deref(), Some("unexpected response (HTTP 502)"));

    let gw = Gateway::new(FixedReply(200, Some(json!(["not", "an", "envelope"]))));
    let resp = gw.awards().await;
    assert_eq!(resp.error.as_deref(), Some("unexpected response (HTTP 200)"));
}

#[tokio::test]
async fn error_envelope_on_non_2xx_is_passed_through() {
    let gw = Gateway::new(FixedReply(400, Some(json!({"success": false, "error": "Missing required field: title"}))));
    let resp = gw.services().await;
    assert_eq!(resp.error.as_deref(), Some("Missing required field: title"));
}

#[tokio::test]
async fn update_merges_into_existing_record() {
    let gw = gateway();
    let id = gw.transport().seed(
        ResourceKind::Service,
        json!({"title": "Roofing", "description": "Old", "features": ["A"], "image": "r.jpg"}),
    );
    let draft = ServiceDraft {
        title: "Roofing".to_owned(),
        description: "New".to_owned(),
        image: "r.jpg".to_owned(),
        icon_name: None,
        features: vec!["B".to_owned(), "C".to_owned()],
    };
    let updated = gw.update::<Service>(id, &draft).await.into_result().expect("updated");
    assert_eq!(updated.description, "New");
    assert_eq!(updated.features, vec!["B", "C"]);
}

#[tokio::test]
async fn site_scoped_lists_filter_by_site() {
    let gw = gateway();
    let backend = gw.transport();
    backend.seed(ResourceKind::Site, json!({"id": 1, "name": "North"}));
    backend.seed(ResourceKind::Worker, json!({"site_id": 1, "name": "Ana", "daily_price": 100.0, "is_active": true}));
    backend.seed(ResourceKind::Worker, json!({"site_id": 2, "name": "Bo", "daily_price": 90.0, "is_active": false}));

    let north = gw.workers(&WorkerQuery { site_id: Some(1), is_active: None }).await.into_result().expect("workers");
    assert_eq!(north.len(), 1);
    assert_eq!(north[0].site_name.as_deref(), Some("North"));

    let inactive =
        gw.workers(&WorkerQuery { site_id: None, is_active: Some(false) }).await.into_result().expect("workers");
    assert_eq!(inactive[0].name, "Bo");
}
