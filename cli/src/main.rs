//! `peakstart`: the PeakStart back-office from a terminal.
//!
//! Every command maps onto the shared `content` gateway. Resource commands
//! drive the same `ResourceSession` the web admin is built on, so required
//! fields, notices, and the re-fetch after each mutation behave identically.
//! Lists and records print as pretty JSON on stdout; notices print as one
//! line; logs go to stderr.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use clap::{ArgAction, Args, Parser, Subcommand};
use content::approval::{self, ApprovalError, WorkerTally};
use content::endpoints::{Operation, ResourceKind};
use content::filters::{ActivityQuery, AttendanceQuery, DateRange, Query, WorkerQuery, format_date, parse_date};
use content::http::ReqwestTransport;
use content::manager::{ListStatus, ResourceManager, ResourceSession};
use content::types::*;
use content::{Editable, FormError, FormState, Gateway, RecordId, Transport};
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(String),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: RecordId },
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Approval(#[from] ApprovalError),
    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "peakstart", about = "PeakStart content API back-office")]
struct Cli {
    #[arg(long, env = "PEAKSTART_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Raise log verbosity (repeat for more).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resource kinds and the operations the API exposes for each.
    Kinds,
    List {
        #[arg(value_parser = parse_kind)]
        kind: ResourceKind,
        /// Query parameter passed through to the list endpoint.
        #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_pair)]
        filters: Vec<(String, String)>,
    },
    Get {
        #[arg(value_parser = parse_kind)]
        kind: ResourceKind,
        id: RecordId,
    },
    Create {
        #[arg(value_parser = parse_kind)]
        kind: ResourceKind,
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_pair)]
        fields: Vec<(String, String)>,
    },
    Update {
        #[arg(value_parser = parse_kind)]
        kind: ResourceKind,
        id: RecordId,
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_pair)]
        fields: Vec<(String, String)>,
    },
    Delete {
        #[arg(value_parser = parse_kind)]
        kind: ResourceKind,
        id: RecordId,
    },
    /// Send the public contact form.
    Contact(ContactArgs),
    Approve(ApproveCommand),
}

#[derive(Args, Debug)]
struct ContactArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    project_type: Option<String>,
    #[arg(long)]
    budget: Option<String>,
    #[arg(long)]
    message: String,
}

impl ContactArgs {
    fn to_form(&self) -> FormState {
        FormState::new()
            .with("firstName", &self.first_name)
            .with("lastName", &self.last_name)
            .with("email", &self.email)
            .with("phone", self.phone.clone().unwrap_or_default())
            .with("projectType", self.project_type.clone().unwrap_or_default())
            .with("budget", self.budget.clone().unwrap_or_default())
            .with("message", &self.message)
    }
}

#[derive(Args, Debug)]
struct ApproveCommand {
    #[command(subcommand)]
    command: ApproveSubcommand,
}

#[derive(Subcommand, Debug)]
enum ApproveSubcommand {
    /// Record a worker's present days in a date range as one labor cost.
    Worker {
        worker_id: RecordId,
        #[command(flatten)]
        range: RangeArgs,
        /// Approval date (defaults to today, UTC).
        #[arg(long, value_parser = parse_day)]
        on: Option<String>,
    },
    /// Record a daily activity's total as a cost.
    Activity { activity_id: RecordId },
}

#[derive(Args, Debug, Default)]
struct RangeArgs {
    #[arg(long, value_parser = parse_day)]
    date: Option<String>,
    #[arg(long, value_parser = parse_day)]
    start: Option<String>,
    #[arg(long, value_parser = parse_day)]
    end: Option<String>,
}

impl RangeArgs {
    fn to_range(&self) -> DateRange {
        DateRange { date: self.date.clone(), start_date: self.start.clone(), end_date: self.end.clone() }
    }
}

#[derive(Debug, PartialEq)]
enum Output {
    Json(Value),
    Notice(String),
}

impl Output {
    fn json<S: Serialize + ?Sized>(value: &S) -> Result<Self, CliError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    fn print(&self) -> Result<(), CliError> {
        match self {
            Self::Json(value) => println!("{}", serde_json::to_string_pretty(value)?),
            Self::Notice(text) => println!("{text}"),
        }
        Ok(())
    }
}

#[derive(Debug)]
enum ResourceAction {
    List(Vec<(String, String)>),
    Get(RecordId),
    Create(Vec<(String, String)>),
    Update(RecordId, Vec<(String, String)>),
    Delete(RecordId),
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let gateway = Gateway::new(ReqwestTransport::new(&cli.base_url));
    tracing::debug!(base_url = %gateway.transport().base_url(), "using content api");
    run(&gateway, cli.command).await?.print()
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

async fn run<T: Transport>(gateway: &Gateway<T>, command: Command) -> Result<Output, CliError> {
    match command {
        Command::Kinds => Ok(Output::Json(kinds())),
        Command::List { kind, filters } => run_kind(gateway, kind, ResourceAction::List(filters)).await,
        Command::Get { kind, id } => run_kind(gateway, kind, ResourceAction::Get(id)).await,
        Command::Create { kind, fields } => run_kind(gateway, kind, ResourceAction::Create(fields)).await,
        Command::Update { kind, id, fields } => run_kind(gateway, kind, ResourceAction::Update(id, fields)).await,
        Command::Delete { kind, id } => run_kind(gateway, kind, ResourceAction::Delete(id)).await,
        Command::Contact(args) => run_contact(gateway, &args).await,
        Command::Approve(approve) => run_approve(gateway, approve).await,
    }
}

fn kinds() -> Value {
    let rows = ResourceKind::ALL
        .iter()
        .map(|kind| {
            json!({
                "kind": kind.slug(),
                "label": kind.label(),
                "get": kind.supports(Operation::Get),
                "create": kind.supports(Operation::Create),
                "update": kind.supports(Operation::Update),
            })
        })
        .collect();
    Value::Array(rows)
}

// =============================================================================
// RESOURCES
// =============================================================================

async fn run_kind<T: Transport>(
    gateway: &Gateway<T>,
    kind: ResourceKind,
    action: ResourceAction,
) -> Result<Output, CliError> {
    match kind {
        ResourceKind::Service => run_resource::<Service, T>(gateway, action).await,
        ResourceKind::Project => run_resource::<Project, T>(gateway, action).await,
        ResourceKind::BlogPost => run_resource::<BlogPost, T>(gateway, action).await,
        ResourceKind::TeamMember => run_resource::<TeamMember, T>(gateway, action).await,
        ResourceKind::Testimonial => run_resource::<Testimonial, T>(gateway, action).await,
        ResourceKind::CompanyStat => run_resource::<CompanyStat, T>(gateway, action).await,
        ResourceKind::Certification => run_resource::<Certification, T>(gateway, action).await,
        ResourceKind::Award => run_resource::<Award, T>(gateway, action).await,
        ResourceKind::ContactSubmission => run_resource::<ContactSubmission, T>(gateway, action).await,
        ResourceKind::Site => run_resource::<Site, T>(gateway, action).await,
        ResourceKind::Worker => run_resource::<Worker, T>(gateway, action).await,
        ResourceKind::DailyActivity => run_resource::<DailyActivity, T>(gateway, action).await,
        ResourceKind::Cost => run_resource::<Cost, T>(gateway, action).await,
        ResourceKind::Attendance => run_resource::<Attendance, T>(gateway, action).await,
    }
}

async fn run_resource<R, T>(gateway: &Gateway<T>, action: ResourceAction) -> Result<Output, CliError>
where
    R: Editable + Serialize,
    T: Transport,
{
    match action {
        ResourceAction::List(filters) => {
            let query = filters.iter().fold(Query::new(), |query, (key, value)| query.text(key, value));
            let mut session = ResourceSession::<R, T>::new(gateway).with_query(query);
            session.refresh().await;
            loaded(session.manager())?;
            Output::json(session.records())
        }
        ResourceAction::Get(id) => {
            let record = gateway.get::<R>(id).await.into_result().map_err(CliError::Api)?;
            Output::json(&record)
        }
        ResourceAction::Create(fields) => {
            let mut session = ResourceSession::<R, T>::new(gateway);
            apply_fields(&mut session, &fields)?;
            let ok = session.submit().await;
            settle(ok, session.manager())
        }
        ResourceAction::Update(id, fields) => {
            let mut session = ResourceSession::<R, T>::new(gateway);
            session.refresh().await;
            loaded(session.manager())?;
            if !session.edit(id) {
                return Err(CliError::NotFound { kind: R::KIND.singular(), id });
            }
            apply_fields(&mut session, &fields)?;
            let ok = session.update().await;
            settle(ok, session.manager())
        }
        ResourceAction::Delete(id) => {
            let mut session = ResourceSession::<R, T>::new(gateway);
            let ok = session.delete(id).await;
            settle(ok, session.manager())
        }
    }
}

fn apply_fields<R: Editable, T: Transport>(
    session: &mut ResourceSession<'_, R, T>,
    fields: &[(String, String)],
) -> Result<(), CliError> {
    for (key, value) in fields {
        session.set_field(key, value.as_str())?;
    }
    Ok(())
}

fn loaded<R: Editable>(manager: &ResourceManager<R>) -> Result<(), CliError> {
    match manager.status() {
        ListStatus::Failed(error) => Err(CliError::Api(error.clone())),
        _ => Ok(()),
    }
}

/// Turn the manager's notice into the command result.
fn settle<R: Editable>(ok: bool, manager: &ResourceManager<R>) -> Result<Output, CliError> {
    let text = manager.notice().map(|notice| notice.text.clone()).unwrap_or_default();
    if ok { Ok(Output::Notice(text)) } else { Err(CliError::Api(text)) }
}

// =============================================================================
// CONTACT AND APPROVALS
// =============================================================================

async fn run_contact<T: Transport>(gateway: &Gateway<T>, args: &ContactArgs) -> Result<Output, CliError> {
    let draft = ContactSubmission::to_draft(&args.to_form())?;
    let resp = gateway.submit_contact(&draft).await;
    if let Some(error) = resp.failure_text() {
        return Err(CliError::Api(error));
    }
    Ok(Output::Notice(resp.message_or("Message sent")))
}

async fn run_approve<T: Transport>(gateway: &Gateway<T>, approve: ApproveCommand) -> Result<Output, CliError> {
    let outcome = match approve.command {
        ApproveSubcommand::Worker { worker_id, range, on } => {
            let workers = gateway.workers(&WorkerQuery::default()).await.into_result().map_err(CliError::Api)?;
            let worker = workers
                .into_iter()
                .find(|worker| worker.id == worker_id)
                .ok_or(CliError::NotFound { kind: "Worker", id: worker_id })?;
            let query = AttendanceQuery { worker_id: Some(worker_id), range: range.to_range() };
            let attendance = gateway.attendance(&query).await.into_result().map_err(CliError::Api)?;
            let tally = WorkerTally::new(&worker, &attendance);
            tracing::info!(worker_id, days = tally.total_days, cost = tally.total_cost, "worker tally");
            let today = on.unwrap_or_else(|| format_date(time::OffsetDateTime::now_utc().date()));
            approval::approve_worker(gateway, &tally, &today).await?
        }
        ApproveSubcommand::Activity { activity_id } => {
            let activities = gateway.daily_activities(&ActivityQuery::default()).await.into_result().map_err(CliError::Api)?;
            let activity = activities
                .into_iter()
                .find(|activity| activity.id == activity_id)
                .ok_or(CliError::NotFound { kind: "Daily activity", id: activity_id })?;
            approval::approve_activity(gateway, &activity).await?
        }
    };
    Ok(Output::Notice(outcome.message()))
}

// =============================================================================
// ARGUMENT PARSERS
// =============================================================================

fn parse_kind(text: &str) -> Result<ResourceKind, String> {
    ResourceKind::from_slug(text).ok_or_else(|| {
        let known: Vec<&str> = ResourceKind::ALL.iter().map(|kind| kind.slug()).collect();
        format!("unknown kind `{text}` (expected one of: {})", known.join(", "))
    })
}

fn parse_pair(text: &str) -> Result<(String, String), String> {
    match text.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_owned(), value.to_owned())),
        _ => Err(format!("expected KEY=VALUE, got `{text}`")),
    }
}

fn parse_day(text: &str) -> Result<String, String> {
    parse_date(text).map(format_date).ok_or_else(|| format!("invalid date `{text}` (expected YYYY-MM-DD)"))
}
