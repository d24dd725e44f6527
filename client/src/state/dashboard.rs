//! Admin dashboard counters.
//!
//! The nine list fetches run concurrently. A failed fetch counts as zero and
//! is logged; the dashboard never shows an error banner.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use content::filters::Query;
use content::transport::Transport;
use content::types::*;
use content::{ApiResponse, Gateway, Resource};

use crate::net::api::logged;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub projects: usize,
    pub submissions: usize,
    pub blog_posts: usize,
    pub services: usize,
    pub team: usize,
    pub testimonials: usize,
    pub certifications: usize,
    pub awards: usize,
    pub stats: usize,
}

impl DashboardCounts {
    /// `(label, count, admin path)` per card.
    pub fn cards(&self) -> [(&'static str, usize, &'static str); 9] {
        [
            ("Projects", self.projects, "/admin/projects"),
            ("Contact Submissions", self.submissions, "/admin/contactsubmissions"),
            ("Blog Posts", self.blog_posts, "/admin/blogposts"),
            ("Services", self.services, "/admin/services"),
            ("Team Members", self.team, "/admin/team"),
            ("Testimonials", self.testimonials, "/admin/testimonials"),
            ("Certifications", self.certifications, "/admin/certifications"),
            ("Awards", self.awards, "/admin/awards"),
            ("Stats", self.stats, "/admin/stats"),
        ]
    }
}

fn count<R: Resource>(resp: ApiResponse<Vec<R>>) -> usize {
    let label = R::KIND.label();
    logged(label, resp).data.map_or(0, |rows| rows.len())
}

pub async fn load_counts<T: Transport>(gateway: &Gateway<T>) -> DashboardCounts {
    let query = Query::new();
    let (projects, submissions, blog_posts, services, team, testimonials, certifications, awards, stats) = futures::join!(
        gateway.list::<Project>(&query),
        gateway.list::<ContactSubmission>(&query),
        gateway.list::<BlogPost>(&query),
        gateway.list::<Service>(&query),
        gateway.list::<TeamMember>(&query),
        gateway.list::<Testimonial>(&query),
        gateway.list::<Certification>(&query),
        gateway.list::<Award>(&query),
        gateway.list::<CompanyStat>(&query),
    );
    DashboardCounts {
        projects: count(projects),
        submissions: count(submissions),
        blog_posts: count(blog_posts),
        services: count(services),
        team: count(team),
        testimonials: count(testimonials),
        certifications: count(certifications),
        awards: count(awards),
        stats: count(stats),
    }
}
