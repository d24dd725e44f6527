use super::*;
use crate::endpoints::ResourceKind;
use crate::memory::MemoryBackend;
use crate::types::{Award, Service, Worker};
use serde_json::json;

fn seeded() -> Gateway<MemoryBackend> {
    let backend = MemoryBackend::new();
    backend.seed(ResourceKind::Award, json!({"id": 1, "name": "Builder of the Year", "year": "2022"}));
    backend.seed(ResourceKind::Award, json!({"id": 2, "name": "Safety Gold", "year": "2023"}));
    Gateway::new(backend)
}

// =============================================================================
// SANS-IO STATE
// =============================================================================

#[test]
fn stale_list_response_is_discarded() {
    let mut manager = ResourceManager::<Award>::new();
    let first = manager.begin_load();
    let second = manager.begin_load();
    let newer = vec![Award { id: 2, name: "New".to_owned(), year: "2024".to_owned() }];
    assert!(manager.finish_load(second, ApiResponse::ok(newer.clone())));
    assert!(!manager.finish_load(first, ApiResponse::ok(Vec::new())));
    assert_eq!(manager.records(), newer.as_slice());
    assert_eq!(manager.status(), &ListStatus::Loaded);
}

#[test]
fn failed_load_reports_error_status() {
    let mut manager = ResourceManager::<Award>::new();
    let ticket = manager.begin_load();
    manager.finish_load(ticket, ApiResponse::failure("db down"));
    assert_eq!(manager.status(), &ListStatus::Failed("db down".to_owned()));
}

#[test]
fn incomplete_form_is_rejected_without_a_request() {
    let mut manager = ResourceManager::<Award>::new();
    manager.set_field("name", "Only name").expect("field");
    assert!(manager.prepare_submit().is_none());
    assert_eq!(manager.notice(), Some(&Notice::error("Year is required")));
    assert!(!manager.is_submitting());
}

#[test]
fn unknown_field_is_an_error() {
    let mut manager = ResourceManager::<Award>::new();
    assert_eq!(manager.set_field("colour", "red"), Err(FormError::UnknownField("colour".to_owned())));
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut manager = ResourceManager::<Award>::new();
    manager.set_field("name", "A").expect("field");
    manager.set_field("year", "2020").expect("field");
    assert!(manager.prepare_submit().is_some());
    assert!(manager.prepare_submit().is_none());
}

#[test]
fn failed_submit_keeps_input() {
    let mut manager = ResourceManager::<Award>::new();
    manager.set_field("name", "A").expect("field");
    manager.set_field("year", "2020").expect("field");
    manager.prepare_submit();
    assert!(!manager.finish_submit(&ApiResponse::failure("Missing required field: name")));
    assert_eq!(manager.form().get("name"), "A");
    assert_eq!(manager.notice().map(|n| n.is_error), Some(true));
}

#[test]
fn defaults_survive_cancel() {
    let defaults = FormState::new().with("site_id", "7");
    let mut manager = ResourceManager::<Worker>::new().with_defaults(defaults);
    assert_eq!(manager.form().get("site_id"), "7");
    manager.set_field("name", "Ana").expect("field");
    manager.cancel();
    assert_eq!(manager.form().get("site_id"), "7");
    assert_eq!(manager.form().get("name"), "");
    assert!(manager.form().flag("is_active"));
}

// =============================================================================
// SESSION AGAINST THE MEMORY BACKEND
// =============================================================================

#[tokio::test]
async fn edit_then_cancel_makes_no_requests() {
    let gw = seeded();
    let mut session = ResourceSession::<Award, _>::new(&gw);
    assert!(session.refresh().await);
    let before = gw.transport().request_count();

    assert!(session.edit(2));
    assert_eq!(session.manager().mode(), Mode::Editing(2));
    assert_eq!(session.manager().form().get("name"), "Safety Gold");

    session.cancel();
    assert_eq!(session.manager().mode(), Mode::Creating);
    assert_eq!(session.manager().form(), &Award::blank_form());
    assert_eq!(gw.transport().request_count(), before);
}

#[tokio::test]
async fn update_without_selection_is_rejected_locally() {
    let gw = seeded();
    let mut session = ResourceSession::<Award, _>::new(&gw);
    session.set_field("name", "X").expect("field");
    session.set_field("year", "2021").expect("field");
    assert!(!session.update().await);
    assert_eq!(session.manager().notice(), Some(&Notice::error(NO_SELECTION)));
    assert_eq!(gw.transport().request_count(), 0);
}

#[tokio::test]
async fn create_refetches_and_resets_the_form() {
    let gw = seeded();
    let mut session = ResourceSession::<Award, _>::new(&gw);
    session.refresh().await;
    session.set_field("name", "Green Build").expect("field");
    session.set_field("year", "2024").expect("field");
    assert!(session.submit().await);

    assert_eq!(session.records().len(), 3);
    assert!(session.records().iter().any(|a| a.name == "Green Build" && a.id == 3));
    assert_eq!(session.manager().form(), &Award::blank_form());
    assert_eq!(session.manager().notice(), Some(&Notice::info("Award created successfully")));
    let last = gw.transport().last_request().expect("request");
    assert_eq!(last.method, crate::transport::Method::Get);
}

#[tokio::test]
async fn editing_submit_updates_the_stored_id() {
    let gw = seeded();
    let mut session = ResourceSession::<Award, _>::new(&gw);
    session.refresh().await;
    session.edit(1);
    session.set_field("year", "2021").expect("field");
    assert!(session.update().await);
    assert_eq!(session.manager().mode(), Mode::Creating);
    let award = session.manager().record(1).expect("award");
    assert_eq!(award.year, "2021");
    assert!(gw.transport().requests().iter().any(|r| r.path == "/api/about/awards/1"));
}

#[tokio::test]
async fn deleting_the_record_being_edited_clears_edit_state() {
    let gw = seeded();
    let mut session = ResourceSession::<Award, _>::new(&gw);
    session.refresh().await;
    session.edit(2);
    assert!(session.delete(2).await);
    assert_eq!(session.manager().mode(), Mode::Creating);
    assert_eq!(session.records().len(), 1);
}

#[tokio::test]
async fn deleting_another_record_keeps_edit_state() {
    let gw = seeded();
    let mut session = ResourceSession::<Award, _>::new(&gw);
    session.refresh().await;
    session.edit(2);
    assert!(session.delete(1).await);
    assert_eq!(session.manager().mode(), Mode::Editing(2));
}

#[tokio::test]
async fn failed_delete_shows_error_and_keeps_list() {
    let gw = seeded();
    let mut session = ResourceSession::<Award, _>::new(&gw);
    session.refresh().await;
    gw.transport().fail_next(500, "Delete failed");
    assert!(!session.delete(1).await);
    assert_eq!(session.manager().notice(), Some(&Notice::error("Delete failed")));
    assert_eq!(session.records().len(), 2);
}

#[tokio::test]
async fn service_features_round_trip_through_the_api() {
    let gw = Gateway::new(MemoryBackend::new());
    let mut session = ResourceSession::<Service, _>::new(&gw);
    session.set_field("title", "Roofing").expect("field");
    session.set_field("description", "New roofs").expect("field");
    session.set_field("features", "Fast, Durable, Insured").expect("field");
    assert!(session.submit().await);
    assert_eq!(session.records()[0].features, vec!["Fast", "Durable", "Insured"]);
}
