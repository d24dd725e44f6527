//! Typed gateway over the content REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen and CLI command talks to the remote API through one
//! [`Gateway`]. Each method issues exactly one HTTP call (or none, when the
//! API does not expose that operation for a kind) and resolves to an
//! [`ApiResponse`].
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns `Err`. Transport failures become
//! `{success: false, error: <message>}`, error envelopes from the server are
//! passed through verbatim, and bodies that are not an envelope become
//! `"unexpected response (HTTP <status>)"`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoints::{self, Operation, ResourceKind};
use crate::envelope::ApiResponse;
use crate::filters::{ActivityQuery, AttendanceQuery, BlogQuery, CostQuery, ProjectQuery, Query, SiteQuery, WorkerQuery};
use crate::raw::RawClient;
use crate::resource::{Editable, Resource};
use crate::transport::{HttpRequest, Method, Transport};
use crate::types::*;

pub struct Gateway<T> {
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Path-addressed JSON client sharing this gateway's transport.
    pub fn raw(&self) -> RawClient<'_, T> {
        RawClient::new(&self.transport)
    }

    // =========================================================================
    // GENERIC CRUD
    // =========================================================================

    pub async fn list<R: Resource>(&self, query: &Query) -> ApiResponse<Vec<R>> {
        let request = HttpRequest::new(Method::Get, R::KIND.collection_path()).with_query(query.pairs().to_vec());
        exchange(&self.transport, request).await
    }

    pub async fn get<R: Resource>(&self, id: RecordId) -> ApiResponse<R> {
        if !R::KIND.supports(Operation::Get) {
            return ApiResponse::failure(R::KIND.unsupported(Operation::Get));
        }
        exchange(&self.transport, HttpRequest::new(Method::Get, R::KIND.item_path(id))).await
    }

    pub async fn create<R: Editable>(&self, draft: &R::Draft) -> ApiResponse<R> {
        let Some(body) = to_body(draft) else {
            return ApiResponse::failure("could not encode request body");
        };
        exchange(&self.transport, HttpRequest::new(Method::Post, R::KIND.create_path()).with_body(body)).await
    }

    pub async fn update<R: Editable>(&self, id: RecordId, draft: &R::Draft) -> ApiResponse<R> {
        if !R::KIND.supports(Operation::Update) {
            return ApiResponse::failure(R::KIND.unsupported(Operation::Update));
        }
        let Some(body) = to_body(draft) else {
            return ApiResponse::failure("could not encode request body");
        };
        exchange(&self.transport, HttpRequest::new(Method::Put, R::KIND.item_path(id)).with_body(body)).await
    }

    pub async fn delete<R: Resource>(&self, id: RecordId) -> ApiResponse<Value> {
        self.delete_kind(R::KIND, id).await
    }

    pub async fn delete_kind(&self, kind: ResourceKind, id: RecordId) -> ApiResponse<Value> {
        exchange(&self.transport, HttpRequest::new(Method::Delete, kind.item_path(id))).await
    }

    // =========================================================================
    // PUBLIC PAGES
    // =========================================================================

    pub async fn services(&self) -> ApiResponse<Vec<Service>> {
        self.list(&Query::new()).await
    }

    pub async fn service(&self, id: RecordId) -> ApiResponse<Service> {
        self.get(id).await
    }

    /// The featured services shown on the home page.
    pub async fn home_services(&self) -> ApiResponse<Vec<Service>> {
        exchange(&self.transport, HttpRequest::new(Method::Get, endpoints::HOME_SERVICES)).await
    }

    pub async fn home_stats(&self) -> ApiResponse<Vec<CompanyStat>> {
        self.list(&Query::new()).await
    }

    pub async fn home_testimonials(&self) -> ApiResponse<Vec<Testimonial>> {
        self.list(&Query::new()).await
    }

    pub async fn projects(&self, filter: &ProjectQuery) -> ApiResponse<Vec<Project>> {
        self.list(&filter.to_query()).await
    }

    pub async fn project(&self, id: RecordId) -> ApiResponse<Project> {
        self.get(id).await
    }

    pub async fn blog_posts(&self, filter: &BlogQuery) -> ApiResponse<Vec<BlogPost>> {
        self.list(&filter.to_query()).await
    }

    pub async fn blog_post(&self, id: RecordId) -> ApiResponse<BlogPost> {
        self.get(id).await
    }

    pub async fn blog_categories(&self) -> ApiResponse<Vec<String>> {
        exchange(&self.transport, HttpRequest::new(Method::Get, endpoints::BLOG_CATEGORIES)).await
    }

    pub async fn team(&self) -> ApiResponse<Vec<TeamMember>> {
        self.list(&Query::new()).await
    }

    pub async fn certifications(&self) -> ApiResponse<Vec<Certification>> {
        self.list(&Query::new()).await
    }

    pub async fn awards(&self) -> ApiResponse<Vec<Award>> {
        self.list(&Query::new()).await
    }

    /// Submit the public contact form. The server replies without data.
    pub async fn submit_contact(&self, draft: &ContactDraft) -> ApiResponse<ContactSubmission> {
        self.create::<ContactSubmission>(draft).await
    }

    pub async fn contact_submissions(&self) -> ApiResponse<Vec<ContactSubmission>> {
        self.list(&Query::new()).await
    }

    // =========================================================================
    // SITE MANAGEMENT
    // =========================================================================

    pub async fn sites(&self, filter: &SiteQuery) -> ApiResponse<Vec<Site>> {
        self.list(&filter.to_query()).await
    }

    pub async fn site(&self, id: RecordId) -> ApiResponse<Site> {
        self.get(id).await
    }

    pub async fn workers(&self, filter: &WorkerQuery) -> ApiResponse<Vec<Worker>> {
        self.list(&filter.to_query()).await
    }

    pub async fn daily_activities(&self, filter: &ActivityQuery) -> ApiResponse<Vec<DailyActivity>> {
        self.list(&filter.to_query()).await
    }

    pub async fn costs(&self, filter: &CostQuery) -> ApiResponse<Vec<Cost>> {
        self.list(&filter.to_query()).await
    }

    pub async fn create_cost(&self, draft: &CostDraft) -> ApiResponse<Cost> {
        self.create::<Cost>(draft).await
    }

    pub async fn attendance(&self, filter: &AttendanceQuery) -> ApiResponse<Vec<Attendance>> {
        self.list(&filter.to_query()).await
    }

    pub async fn record_attendance(&self, draft: &AttendanceDraft) -> ApiResponse<Attendance> {
        self.create::<Attendance>(draft).await
    }
}

fn to_body<D: Serialize>(draft: &D) -> Option<Value> {
    match serde_json::to_value(draft) {
        Ok(body) => Some(body),
        Err(err) => {
            tracing::warn!(error = %err, "request body did not serialize");
            None
        }
    }
}

/// Send one request and fold every outcome into an envelope.
pub(crate) async fn exchange<T, D>(transport: &T, request: HttpRequest) -> ApiResponse<D>
where
    T: Transport + ?Sized,
    D: DeserializeOwned,
{
    let method = request.method.as_str();
    let path = request.path.clone();
    tracing::debug!(method, path = %path, query = ?request.query, "content api request");

    let reply = match transport.send(request).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(method, path = %path, error = %err, "content api transport failed");
            return ApiResponse::failure(err.to_string());
        }
    };

    let Some(body) = reply.body else {
        tracing::warn!(method, path = %path, status = reply.status, "content api reply was not json");
        return unexpected(reply.status);
    };

    match serde_json::from_value::<ApiResponse<D>>(body) {
        Ok(resp) => {
            if !resp.success {
                tracing::warn!(method, path = %path, status = reply.status, error = %resp.error_text(), "content api call failed");
            }
            resp
        }
        Err(err) => {
            tracing::warn!(method, path = %path, status = reply.status, error = %err, "content api reply was not an envelope");
            unexpected(reply.status)
        }
    }
}

fn unexpected<D>(status: u16) -> ApiResponse<D> {
    ApiResponse::failure(format!("unexpected response (HTTP {status})"))
}
