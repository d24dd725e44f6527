//! Content records as exchanged with the REST API.
//!
//! DESIGN
//! ======
//! Records mirror the server's JSON verbatim (including its mixed camelCase
//! and `snake_case` keys) so nothing is normalized on the client. Optional
//! fields default when absent and unknown fields are ignored. Enumerated
//! values such as categories stay `String` on the record and are described
//! by the option tables below; an unexpected value from the server must not
//! make a whole list fail to load.
//!
//! `*Draft` types are the request bodies for create/update calls.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Server-assigned integer identifier, unique within a resource kind.
pub type RecordId = i64;

/// Records that carry a server-assigned id.
pub trait Identified {
    fn id(&self) -> RecordId;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> RecordId {
                self.id
            }
        })*
    };
}

/// Treat an explicit `null` like an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

identified!(
    Service,
    Project,
    BlogPost,
    TeamMember,
    Testimonial,
    CompanyStat,
    Certification,
    Award,
    ContactSubmission,
    Site,
    Worker,
    DailyActivity,
    Cost,
    Attendance,
);

// =============================================================================
// OPTION TABLES
// =============================================================================

/// Value meaning "no filter" in category and status pickers.
pub const ALL: &str = "All";

/// Icon names the site knows how to draw for services and stats.
pub const ICON_NAMES: &[&str] =
    &["Award", "Building", "CheckCircle", "Clipboard", "Clock", "HardHat", "PaintBucket", "Route", "Users", "Wrench"];

pub const PROJECT_CATEGORIES: &[&str] = &["Commercial", "Residential", "Industrial", "Infrastructure"];

pub const BLOG_CATEGORIES: &[&str] =
    &["Renovation", "Sustainability", "Design", "Safety", "Technology", "Management", "Other"];

pub const SITE_STATUSES: &[&str] = &["active", "completed", "on_hold"];

pub const COST_TYPES: &[&str] = &["worker", "activity", "material", "equipment", "other"];

pub const COST_CATEGORIES: &[&str] = &["labor", "materials", "equipment", "overhead", "transportation", "utilities"];

pub const SUBMISSION_STATUSES: &[&str] = &["new", "contacted", "quoted", "closed"];

pub const PROJECT_TYPES: &[&str] = &[
    "Residential Construction",
    "Commercial Construction",
    "Renovation & Remodeling",
    "Interior Design",
    "Civil Engineering",
    "Road Construction",
    "Other",
];

pub const BUDGET_RANGES: &[&str] = &[
    "Under $50,000",
    "$50,000 - $100,000",
    "$100,000 - $250,000",
    "$250,000 - $500,000",
    "$500,000 - $1,000,000",
    "Over $1,000,000",
];

// =============================================================================
// WEBSITE CONTENT
// =============================================================================

/// A service offered by the company, shown on the home and services pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image: String,
    #[serde(default)]
    pub icon_name: Option<String>,
    /// Ordered bullet points. Typed as comma-joined text in admin forms.
    #[serde(default, deserialize_with = "nullable")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon_name: Option<String>,
    pub features: Vec<String>,
}

/// A portfolio project. `category` drives portfolio filtering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub location: String,
    /// Free text, e.g. "March 2024".
    #[serde(rename = "completionDate", default, deserialize_with = "nullable")]
    pub completion_date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image: String,
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub client: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectDraft {
    pub title: String,
    pub category: String,
    pub location: String,
    #[serde(rename = "completionDate")]
    pub completion_date: String,
    pub image: String,
    pub description: String,
    pub client: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: RecordId,
    pub title: String,
    pub excerpt: String,
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    pub author: String,
    #[serde(rename = "publishDate", default, deserialize_with = "nullable")]
    pub publish_date: String,
    pub category: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image: String,
    #[serde(rename = "readTime", default, deserialize_with = "nullable")]
    pub read_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlogPostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "publishDate")]
    pub publish_date: String,
    pub category: String,
    pub image: String,
    #[serde(rename = "readTime")]
    pub read_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: RecordId,
    pub name: String,
    pub position: String,
    #[serde(default, deserialize_with = "nullable")]
    pub experience: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image: String,
    #[serde(default, deserialize_with = "nullable")]
    pub bio: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamMemberDraft {
    pub name: String,
    pub position: String,
    pub experience: String,
    pub image: String,
    pub bio: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: RecordId,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub company: String,
    pub text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TestimonialDraft {
    pub name: String,
    pub company: String,
    pub text: String,
    pub image: String,
}

/// Headline number on the home/about pages, e.g. `"500+" Projects Completed`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyStat {
    pub id: RecordId,
    pub number: String,
    pub label: String,
    #[serde(default)]
    pub icon_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompanyStatDraft {
    pub number: String,
    pub label: String,
    pub icon_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: RecordId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CertificationDraft {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub id: RecordId,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub year: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AwardDraft {
    pub name: String,
    pub year: String,
}

/// A message left through the public contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: RecordId,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "projectType", default)]
    pub project_type: Option<String>,
    pub message: String,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Submission timestamp (ISO 8601) as recorded by the server.
    #[serde(default, alias = "submissionDate")]
    pub created_at: Option<String>,
}

impl ContactSubmission {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactDraft {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "projectType", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
}

// =============================================================================
// SITE MANAGEMENT
// =============================================================================

/// A construction site; workers, activities, and costs are scoped to one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: RecordId,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub location: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_site_status")]
    pub status: String,
}

fn default_site_status() -> String {
    "active".to_owned()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteDraft {
    pub name: String,
    pub location: String,
    pub description: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: RecordId,
    pub site_id: RecordId,
    #[serde(default)]
    pub site_name: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub position: String,
    pub daily_price: f64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkerDraft {
    pub site_id: RecordId,
    pub name: String,
    pub position: String,
    pub daily_price: f64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
}

/// One billable activity on a site for a day: `quantity × unit_price = total_price`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub id: RecordId,
    pub site_id: RecordId,
    #[serde(default)]
    pub site_name: Option<String>,
    pub date: String,
    pub activity_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
    /// JSON-encoded array of worker ids, as stored by the server.
    #[serde(default)]
    pub workers_involved: Option<String>,
}

impl DailyActivity {
    /// Worker ids decoded from [`Self::workers_involved`]; unreadable text yields none.
    #[must_use]
    pub fn involved_worker_ids(&self) -> Vec<RecordId> {
        self.workers_involved
            .as_deref()
            .and_then(|text| serde_json::from_str::<Vec<RecordId>>(text).ok())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyActivityDraft {
    pub site_id: RecordId,
    pub date: String,
    pub activity_name: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_price: f64,
    pub workers_involved: Vec<RecordId>,
}

/// A spend record. Worker and activity approvals create these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub id: RecordId,
    pub site_id: RecordId,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub worker_id: Option<RecordId>,
    #[serde(default)]
    pub worker_name: Option<String>,
    #[serde(default)]
    pub daily_activity_id: Option<RecordId>,
    #[serde(default)]
    pub activity_name: Option<String>,
    pub cost_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostDraft {
    pub site_id: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_activity_id: Option<RecordId>,
    pub cost_type: String,
    pub description: String,
    pub amount: f64,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Per-worker, per-day presence and hours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: RecordId,
    pub worker_id: RecordId,
    #[serde(default)]
    pub worker_name: Option<String>,
    pub date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub check_in_time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub check_out_time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub hours_worked: f64,
    pub is_present: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttendanceDraft {
    pub worker_id: RecordId,
    pub date: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub hours_worked: f64,
    pub is_present: bool,
    pub notes: String,
}
