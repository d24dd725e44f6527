use super::*;

#[test]
fn project_reads_camel_case_completion_date() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "id": 4,
        "title": "Harbor Tower",
        "category": "Commercial",
        "location": "Seattle",
        "completionDate": "March 2024",
        "image": "tower.jpg",
        "description": "Forty floors",
        "client": "Harbor LLC"
    }))
    .expect("project");
    assert_eq!(project.completion_date, "March 2024");
    assert_eq!(project.id(), 4);
}

#[test]
fn unknown_fields_are_ignored_and_optionals_default() {
    let service: Service = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Roofing",
        "description": "Roofs",
        "internal_rank": 9
    }))
    .expect("service");
    assert!(service.features.is_empty());
    assert_eq!(service.icon_name, None);
    assert_eq!(service.image, "");
}

#[test]
fn worker_defaults_to_active() {
    let worker: Worker = serde_json::from_value(serde_json::json!({
        "id": 2,
        "site_id": 1,
        "name": "Ana",
        "daily_price": 100.0
    }))
    .expect("worker");
    assert!(worker.is_active);
    assert_eq!(worker.site_name, None);
}

#[test]
fn contact_draft_omits_absent_optionals() {
    let draft = ContactDraft {
        first_name: "Jo".to_owned(),
        last_name: "Park".to_owned(),
        email: "jo@example.com".to_owned(),
        phone: None,
        project_type: Some("Other".to_owned()),
        message: "Hi".to_owned(),
        budget: None,
    };
    let value = serde_json::to_value(&draft).expect("json");
    assert_eq!(value["firstName"], "Jo");
    assert_eq!(value["projectType"], "Other");
    assert!(value.get("phone").is_none());
    assert!(value.get("budget").is_none());
}

#[test]
fn submission_accepts_legacy_submission_date_key() {
    let sub: ContactSubmission = serde_json::from_value(serde_json::json!({
        "id": 8,
        "firstName": "Jo",
        "lastName": "Park",
        "email": "jo@example.com",
        "message": "Quote please",
        "submissionDate": "2024-05-01T10:00:00"
    }))
    .expect("submission");
    assert_eq!(sub.created_at.as_deref(), Some("2024-05-01T10:00:00"));
    assert_eq!(sub.full_name(), "Jo Park");
}

#[test]
fn site_status_defaults_to_active() {
    let site: Site = serde_json::from_value(serde_json::json!({"id": 1, "name": "North Yard"})).expect("site");
    assert_eq!(site.status, "active");
}

#[test]
fn activity_decodes_involved_worker_ids() {
    let activity: DailyActivity = serde_json::from_value(serde_json::json!({
        "id": 5,
        "site_id": 1,
        "date": "2024-04-02",
        "activity_name": "Pour slab",
        "quantity": 2.0,
        "unit_price": 150.0,
        "total_price": 300.0,
        "workers_involved": "[3, 4]"
    }))
    .expect("activity");
    assert_eq!(activity.involved_worker_ids(), vec![3, 4]);

    let bare = DailyActivity { workers_involved: None, ..activity };
    assert!(bare.involved_worker_ids().is_empty());
}

#[test]
fn explicit_nulls_read_as_defaults() {
    let service: Service = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Roofing",
        "description": "Roofs",
        "image": null,
        "features": null
    }))
    .expect("service");
    assert_eq!(service.image, "");
    assert!(service.features.is_empty());
}
