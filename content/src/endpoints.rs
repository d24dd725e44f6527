//! Endpoint table for the content REST API.
//!
//! Each [`ResourceKind`] knows its collection, create, and item paths and
//! which operations the server exposes for it. Paths are relative to the
//! API base URL and always start with `/api`.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::types::RecordId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
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
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl ResourceKind {
    pub const ALL: [Self; 14] = [
        Self::Service,
        Self::Project,
        Self::BlogPost,
        Self::TeamMember,
        Self::Testimonial,
        Self::CompanyStat,
        Self::Certification,
        Self::Award,
        Self::ContactSubmission,
        Self::Site,
        Self::Worker,
        Self::DailyActivity,
        Self::Cost,
        Self::Attendance,
    ];

    /// Path for `GET` of the full list.
    #[must_use]
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Service => "/api/services",
            Self::Project => "/api/projects",
            Self::BlogPost => "/api/blog/posts",
            Self::TeamMember => "/api/about/team",
            Self::Testimonial => "/api/home/testimonials",
            Self::CompanyStat => "/api/home/stats",
            Self::Certification => "/api/about/certifications",
            Self::Award => "/api/about/awards",
            Self::ContactSubmission => "/api/contact/submissions",
            Self::Site => "/api/sites",
            Self::Worker => "/api/workers",
            Self::DailyActivity => "/api/daily-activities",
            Self::Cost => "/api/costs",
            Self::Attendance => "/api/attendance",
        }
    }

    /// Path for `POST` of a new record.
    #[must_use]
    pub fn create_path(self) -> &'static str {
        match self {
            Self::Testimonial => "/api/testimonials",
            Self::ContactSubmission => "/api/contact/submit",
            other => other.collection_path(),
        }
    }

    /// Prefix for item paths; the id is appended as `/{id}`.
    #[must_use]
    pub fn item_base(self) -> &'static str {
        match self {
            Self::Testimonial => "/api/testimonials",
            other => other.collection_path(),
        }
    }

    #[must_use]
    pub fn item_path(self, id: RecordId) -> String {
        format!("{}/{id}", self.item_base())
    }

    #[must_use]
    pub fn supports(self, op: Operation) -> bool {
        match (self, op) {
            (_, Operation::List | Operation::Create | Operation::Delete) => true,
            (Self::ContactSubmission, _) => false,
            (
                Self::TeamMember | Self::Testimonial | Self::CompanyStat | Self::Certification | Self::Award,
                Operation::Get,
            ) => false,
            _ => true,
        }
    }

    /// Plural label used in admin headings and error text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Service => "Services",
            Self::Project => "Projects",
            Self::BlogPost => "Blog Posts",
            Self::TeamMember => "Team Members",
            Self::Testimonial => "Testimonials",
            Self::CompanyStat => "Company Stats",
            Self::Certification => "Certifications",
            Self::Award => "Awards",
            Self::ContactSubmission => "Contact Submissions",
            Self::Site => "Sites",
            Self::Worker => "Workers",
            Self::DailyActivity => "Daily Activities",
            Self::Cost => "Costs",
            Self::Attendance => "Attendance",
        }
    }

    /// Singular label for notices such as "Service created".
    #[must_use]
    pub fn singular(self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Project => "Project",
            Self::BlogPost => "Blog post",
            Self::TeamMember => "Team member",
            Self::Testimonial => "Testimonial",
            Self::CompanyStat => "Stat",
            Self::Certification => "Certification",
            Self::Award => "Award",
            Self::ContactSubmission => "Contact submission",
            Self::Site => "Site",
            Self::Worker => "Worker",
            Self::DailyActivity => "Daily activity",
            Self::Cost => "Cost",
            Self::Attendance => "Attendance",
        }
    }

    /// Command-line and admin-route slug.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Service => "services",
            Self::Project => "projects",
            Self::BlogPost => "blogposts",
            Self::TeamMember => "team",
            Self::Testimonial => "testimonials",
            Self::CompanyStat => "stats",
            Self::Certification => "certifications",
            Self::Award => "awards",
            Self::ContactSubmission => "contactsubmissions",
            Self::Site => "sites",
            Self::Worker => "workers",
            Self::DailyActivity => "activities",
            Self::Cost => "costs",
            Self::Attendance => "attendance",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Text for the envelope returned when `op` is not exposed for this kind.
    #[must_use]
    pub fn unsupported(self, op: Operation) -> String {
        format!("{} does not support {}", self.label(), op.as_str())
    }

    /// Resolve a request path to the kind it addresses and the trailing id, if any.
    #[must_use]
    pub fn route(path: &str) -> Option<(Self, Option<RecordId>)> {
        let path = path.trim_end_matches('/');
        for kind in Self::ALL {
            for base in [kind.collection_path(), kind.create_path(), kind.item_base()] {
                if path == base {
                    return Some((kind, None));
                }
                if let Some(rest) = path.strip_prefix(base).and_then(|rest| rest.strip_prefix('/')) {
                    if let Ok(id) = rest.parse::<RecordId>() {
                        return Some((kind, Some(id)));
                    }
                }
            }
        }
        None
    }
}

/// Featured services shown on the home page.
pub const HOME_SERVICES: &str = "/api/home/services";

/// Distinct blog categories.
pub const BLOG_CATEGORIES: &str = "/api/blog/categories";
