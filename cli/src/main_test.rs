use super::*;
use content::memory::MemoryBackend;

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn seeded_awards() -> Gateway<MemoryBackend> {
    let backend = MemoryBackend::new();
    backend.seed(ResourceKind::Award, json!({"name": "Builder of the Year", "year": "2022"}));
    backend.seed(ResourceKind::Award, json!({"name": "Safety Gold", "year": "2023"}));
    Gateway::new(backend)
}

// =============================================================================
// ARGUMENTS
// =============================================================================

#[test]
fn pair_splits_on_first_equals() {
    assert_eq!(parse_pair("name=A=B"), Ok(("name".to_owned(), "A=B".to_owned())));
    assert_eq!(parse_pair("year="), Ok(("year".to_owned(), String::new())));
    assert!(parse_pair("name").is_err());
    assert!(parse_pair("=value").is_err());
}

#[test]
fn kinds_parse_from_slugs() {
    assert_eq!(parse_kind("blogposts"), Ok(ResourceKind::BlogPost));
    assert_eq!(parse_kind("activities"), Ok(ResourceKind::DailyActivity));
    assert!(parse_kind("invoices").unwrap_err().contains("awards"));
}

#[test]
fn days_must_be_calendar_dates() {
    assert_eq!(parse_day("2024-04-01"), Ok("2024-04-01".to_owned()));
    assert!(parse_day("04/01/2024").is_err());
}

#[test]
fn command_line_parses_repeated_sets() {
    let cli = Cli::try_parse_from(["peakstart", "-vv", "create", "awards", "--set", "name=X", "--set", "year=2020"])
        .expect("parse");
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    match cli.command {
        Command::Create { kind, fields } => {
            assert_eq!(kind, ResourceKind::Award);
            assert_eq!(fields, pairs(&[("name", "X"), ("year", "2020")]));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn unknown_kind_is_a_usage_error() {
    assert!(Cli::try_parse_from(["peakstart", "list", "invoices"]).is_err());
}

// =============================================================================
// RESOURCE COMMANDS
// =============================================================================

#[tokio::test]
async fn list_prints_records_as_json() {
    let gw = seeded_awards();
    let output = run(&gw, Command::List { kind: ResourceKind::Award, filters: Vec::new() }).await.expect("list");
    let Output::Json(Value::Array(rows)) = output else {
        panic!("expected a json array");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["name"], json!("Safety Gold"));
}

#[tokio::test]
async fn list_filters_become_query_parameters() {
    let gw = Gateway::new(MemoryBackend::new());
    let filters = pairs(&[("category", "Safety"), ("search", "")]);
    run(&gw, Command::List { kind: ResourceKind::BlogPost, filters }).await.expect("list");
    let request = gw.transport().last_request().expect("request");
    assert_eq!(request.query, pairs(&[("category", "Safety")]));
}

#[tokio::test]
async fn create_reports_the_notice() {
    let gw = Gateway::new(MemoryBackend::new());
    let fields = pairs(&[("name", "Green Build"), ("year", "2024")]);
    let output = run(&gw, Command::Create { kind: ResourceKind::Award, fields }).await.expect("create");
    assert_eq!(output, Output::Notice("Award created successfully".to_owned()));
    assert_eq!(gw.transport().rows(ResourceKind::Award).len(), 1);
}

#[tokio::test]
async fn create_with_missing_field_sends_nothing() {
    let gw = Gateway::new(MemoryBackend::new());
    let fields = pairs(&[("name", "Green Build")]);
    let err = run(&gw, Command::Create { kind: ResourceKind::Award, fields }).await.expect_err("rejected");
    assert_eq!(err.to_string(), "Year is required");
    assert_eq!(gw.transport().request_count(), 0);
}

#[tokio::test]
async fn unknown_field_is_rejected() {
    let gw = Gateway::new(MemoryBackend::new());
    let fields = pairs(&[("colour", "red")]);
    let err = run(&gw, Command::Create { kind: ResourceKind::Award, fields }).await.expect_err("rejected");
    assert!(matches!(err, CliError::Form(FormError::UnknownField(ref key)) if key == "colour"));
}

#[tokio::test]
async fn update_changes_only_the_given_fields() {
    let gw = seeded_awards();
    let fields = pairs(&[("year", "2021")]);
    run(&gw, Command::Update { kind: ResourceKind::Award, id: 1, fields }).await.expect("update");
    let rows = gw.transport().rows(ResourceKind::Award);
    assert_eq!(rows[0]["year"], json!("2021"));
    assert_eq!(rows[0]["name"], json!("Builder of the Year"));
}

#[tokio::test]
async fn update_of_missing_record_is_not_found() {
    let gw = seeded_awards();
    let err = run(&gw, Command::Update { kind: ResourceKind::Award, id: 42, fields: Vec::new() })
        .await
        .expect_err("missing");
    assert_eq!(err.to_string(), "Award 42 not found");
}

#[tokio::test]
async fn get_without_an_item_endpoint_fails_locally() {
    let gw = seeded_awards();
    let err = run(&gw, Command::Get { kind: ResourceKind::Award, id: 1 }).await.expect_err("unsupported");
    assert!(matches!(err, CliError::Api(_)));
    assert_eq!(gw.transport().request_count(), 0);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let gw = seeded_awards();
    let output = run(&gw, Command::Delete { kind: ResourceKind::Award, id: 2 }).await.expect("delete");
    assert!(matches!(output, Output::Notice(_)));
    assert_eq!(gw.transport().rows(ResourceKind::Award).len(), 1);
}

#[tokio::test]
async fn server_errors_surface_verbatim() {
    let gw = seeded_awards();
    gw.transport().fail_next(500, "database locked");
    let err = run(&gw, Command::List { kind: ResourceKind::Award, filters: Vec::new() }).await.expect_err("failed");
    assert_eq!(err.to_string(), "database locked");
}

#[tokio::test]
async fn kinds_lists_every_resource() {
    let gw = Gateway::new(MemoryBackend::new());
    let Output::Json(Value::Array(rows)) = run(&gw, Command::Kinds).await.expect("kinds") else {
        panic!("expected a json array");
    };
    assert_eq!(rows.len(), ResourceKind::ALL.len());
    let contact = rows.iter().find(|row| row["kind"] == json!("contactsubmissions")).expect("contact row");
    assert_eq!(contact["create"], json!(true));
    assert_eq!(contact["get"], json!(false));
    assert_eq!(gw.transport().request_count(), 0);
}

// =============================================================================
// CONTACT AND APPROVALS
// =============================================================================

fn contact(message: &str) -> ContactArgs {
    ContactArgs {
        first_name: "Dana".to_owned(),
        last_name: "Reyes".to_owned(),
        email: "dana@example.com".to_owned(),
        phone: None,
        project_type: Some("Residential".to_owned()),
        budget: None,
        message: message.to_owned(),
    }
}

#[tokio::test]
async fn contact_is_submitted() {
    let gw = Gateway::new(MemoryBackend::new());
    let output = run(&gw, Command::Contact(contact("New kitchen"))).await.expect("sent");
    assert_eq!(output, Output::Notice("Contact form submitted successfully".to_owned()));
    assert_eq!(gw.transport().rows(ResourceKind::ContactSubmission).len(), 1);
}

#[tokio::test]
async fn contact_without_message_is_rejected() {
    let gw = Gateway::new(MemoryBackend::new());
    let err = run(&gw, Command::Contact(contact(""))).await.expect_err("rejected");
    assert!(matches!(err, CliError::Form(FormError::MissingField(_))));
    assert_eq!(gw.transport().request_count(), 0);
}

#[tokio::test]
async fn worker_approval_records_one_cost() {
    let gw = Gateway::new(MemoryBackend::new());
    let backend = gw.transport();
    backend.seed(ResourceKind::Worker, json!({"site_id": 1, "name": "Ana", "position": "Mason", "daily_price": 100.0}));
    for date in ["2024-04-01", "2024-04-02", "2024-04-03"] {
        backend.seed(
            ResourceKind::Attendance,
            json!({"worker_id": 1, "date": date, "hours_worked": 8.0, "is_present": true}),
        );
    }
    let approve = ApproveCommand {
        command: ApproveSubcommand::Worker {
            worker_id: 1,
            range: RangeArgs::default(),
            on: Some("2024-04-04".to_owned()),
        },
    };
    let output = run(&gw, Command::Approve(approve)).await.expect("approved");
    assert_eq!(output, Output::Notice("Cost approved and recorded".to_owned()));
    let costs = backend.rows(ResourceKind::Cost);
    assert_eq!(costs.len(), 1);
    assert_eq!(costs[0]["amount"], json!(300.0));
}

#[tokio::test]
async fn approving_an_unknown_activity_is_not_found() {
    let gw = Gateway::new(MemoryBackend::new());
    let approve = ApproveCommand { command: ApproveSubcommand::Activity { activity_id: 7 } };
    let err = run(&gw, Command::Approve(approve)).await.expect_err("missing");
    assert!(matches!(err, CliError::NotFound { id: 7, .. }));
}
