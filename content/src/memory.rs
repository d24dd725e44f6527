//! In-memory emulation of the content REST API.
//!
//! `MemoryBackend` answers the same paths, filters, and envelopes as the real
//! API so the gateway, the resource manager, and approvals can be exercised
//! without a network. It also records every request it sees and can be told
//! to fail the next call or to behave as if the network were down.

use std::cell::RefCell;
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use crate::endpoints::{self, ResourceKind};
use crate::transport::{HttpReply, HttpRequest, Method, Transport, TransportError};
use crate::types::RecordId;

/// Number of services the home page features.
pub const FEATURED_SERVICES: usize = 3;

#[derive(Default)]
struct Store {
    tables: BTreeMap<ResourceKind, Vec<Map<String, Value>>>,
    next_id: BTreeMap<ResourceKind, RecordId>,
    log: Vec<HttpRequest>,
    fail_next: Option<(u16, String)>,
    offline: bool,
}

impl Store {
    fn insert(&mut self, kind: ResourceKind, mut row: Map<String, Value>) -> RecordId {
        let next = self.next_id.entry(kind).or_insert(1);
        let id = match row.get("id").and_then(Value::as_i64) {
            Some(id) => id,
            None => *next,
        };
        *next = (*next).max(id + 1);
        row.insert("id".to_owned(), json!(id));
        self.decorate(kind, &mut row);
        self.tables.entry(kind).or_default().push(row);
        id
    }

    fn table(&self, kind: ResourceKind) -> &[Map<String, Value>] {
        self.tables.get(&kind).map_or(&[], Vec::as_slice)
    }

    fn find(&self, kind: ResourceKind, id: RecordId) -> Option<&Map<String, Value>> {
        self.table(kind).iter().find(|row| row_id(row) == Some(id))
    }

    fn name_of(&self, kind: ResourceKind, id: Option<RecordId>, field: &str) -> Value {
        id.and_then(|id| self.find(kind, id)).and_then(|row| row.get(field).cloned()).unwrap_or(Value::Null)
    }

    /// Fill the joined display names the real API adds to related records.
    fn decorate(&self, kind: ResourceKind, row: &mut Map<String, Value>) {
        let site_id = row.get("site_id").and_then(Value::as_i64);
        let worker_id = row.get("worker_id").and_then(Value::as_i64);
        let activity_id = row.get("daily_activity_id").and_then(Value::as_i64);
        match kind {
            ResourceKind::Worker => {
                row.insert("site_name".to_owned(), self.name_of(ResourceKind::Site, site_id, "name"));
            }
            ResourceKind::DailyActivity => {
                row.insert("site_name".to_owned(), self.name_of(ResourceKind::Site, site_id, "name"));
                if let Some(ids) = row.get("workers_involved").filter(|v| v.is_array()).cloned() {
                    row.insert("workers_involved".to_owned(), Value::String(ids.to_string()));
                }
            }
            ResourceKind::Cost => {
                row.insert("site_name".to_owned(), self.name_of(ResourceKind::Site, site_id, "name"));
                row.insert("worker_name".to_owned(), self.name_of(ResourceKind::Worker, worker_id, "name"));
                row.insert(
                    "activity_name".to_owned(),
                    self.name_of(ResourceKind::DailyActivity, activity_id, "activity_name"),
                );
            }
            ResourceKind::Attendance => {
                row.insert("worker_name".to_owned(), self.name_of(ResourceKind::Worker, worker_id, "name"));
            }
            _ => {}
        }
    }
}

fn row_id(row: &Map<String, Value>) -> Option<RecordId> {
    row.get("id").and_then(Value::as_i64)
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn matches_filter(row: &Map<String, Value>, key: &str, wanted: &str) -> bool {
    let date_field = if row.contains_key("date") { "date" } else { "start_date" };
    let field = |name: &str| row.get(name).map(text_of).unwrap_or_default();
    match key {
        "search" => {
            let needle = wanted.to_lowercase();
            field("title").to_lowercase().contains(&needle) || field("excerpt").to_lowercase().contains(&needle)
        }
        "start_date" => field(date_field).as_str() >= wanted,
        "end_date" => field(date_field).as_str() <= wanted,
        _ => field(key) == wanted,
    }
}

fn ok(status: u16, body: Value) -> HttpReply {
    HttpReply { status, body: Some(body) }
}

fn not_found() -> HttpReply {
    ok(404, json!({"success": false, "error": "Resource not found"}))
}

#[derive(Default)]
pub struct MemoryBackend {
    store: RefCell<Store>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row as if it already existed on the server. Keeps a given `id`.
    pub fn seed(&self, kind: ResourceKind, row: Value) -> RecordId {
        let row = match row {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self.store.borrow_mut().insert(kind, row)
    }

    #[must_use]
    pub fn rows(&self, kind: ResourceKind) -> Vec<Value> {
        self.store.borrow().table(kind).iter().cloned().map(Value::Object).collect()
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.store.borrow().log.clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.store.borrow().log.len()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.store.borrow().log.last().cloned()
    }

    pub fn clear_log(&self) {
        self.store.borrow_mut().log.clear();
    }

    /// Answer the next request with `{success: false, error}` and `status`.
    pub fn fail_next(&self, status: u16, error: &str) {
        self.store.borrow_mut().fail_next = Some((status, error.to_owned()));
    }

    /// While offline every request fails at the transport level.
    pub fn set_offline(&self, offline: bool) {
        self.store.borrow_mut().offline = offline;
    }

    fn handle(&self, request: &HttpRequest) -> HttpReply {
        let mut store = self.store.borrow_mut();
        if let Some((status, error)) = store.fail_next.take() {
            return ok(status, json!({"success": false, "error": error}));
        }

        match (request.method, request.path.as_str()) {
            (Method::Get, endpoints::HOME_SERVICES) => {
                let featured: Vec<Value> = store
                    .table(ResourceKind::Service)
                    .iter()
                    .take(FEATURED_SERVICES)
                    .cloned()
                    .map(Value::Object)
                    .collect();
                return ok(200, json!({"success": true, "data": featured}));
            }
            (Method::Get, endpoints::BLOG_CATEGORIES) => {
                let mut categories: Vec<String> = store
                    .table(ResourceKind::BlogPost)
                    .iter()
                    .filter_map(|row| row.get("category").and_then(Value::as_str).map(str::to_owned))
                    .collect();
                categories.sort();
                categories.dedup();
                return ok(200, json!({"success": true, "data": categories}));
            }
            _ => {}
        }

        let Some((kind, id)) = ResourceKind::route(&request.path) else {
            return not_found();
        };

        match (request.method, id) {
            (Method::Get, None) => {
                let rows: Vec<Value> = store
                    .table(kind)
                    .iter()
                    .filter(|row| request.query.iter().all(|(k, v)| matches_filter(row, k, v)))
                    .cloned()
                    .map(Value::Object)
                    .collect();
                ok(200, json!({"success": true, "data": rows}))
            }
            (Method::Get, Some(id)) => match store.find(kind, id) {
                Some(row) => ok(200, json!({"success": true, "data": row})),
                None => not_found(),
            },
            (Method::Post, None) => {
                let mut row = match request.body.clone() {
                    Some(Value::Object(map)) => map,
                    _ => return ok(400, json!({"success": false, "error": "No data provided"})),
                };
                row.remove("id");
                if kind == ResourceKind::ContactSubmission {
                    row.insert("status".to_owned(), json!("new"));
                    store.insert(kind, row);
                    return ok(201, json!({"success": true, "message": "Contact form submitted successfully"}));
                }
                let id = store.insert(kind, row);
                let data = store.find(kind, id).cloned().map(Value::Object).unwrap_or(Value::Null);
                let message = format!("{} created successfully", kind.singular());
                ok(201, json!({"success": true, "data": data, "message": message}))
            }
            (Method::Put, Some(id)) => {
                let Some(Value::Object(patch)) = request.body.clone() else {
                    return ok(400, json!({"success": false, "error": "No data provided"}));
                };
                let Some(mut row) = store.find(kind, id).cloned() else {
                    return not_found();
                };
                for (key, value) in patch {
                    if key != "id" {
                        row.insert(key, value);
                    }
                }
                store.decorate(kind, &mut row);
                if let Some(slot) = store.tables.get_mut(&kind).and_then(|t| t.iter_mut().find(|r| row_id(r) == Some(id))) {
                    *slot = row.clone();
                }
                let message = format!("{} updated successfully", kind.singular());
                ok(200, json!({"success": true, "data": row, "message": message}))
            }
            (Method::Delete, Some(id)) => {
                let Some(table) = store.tables.get_mut(&kind) else {
                    return not_found();
                };
                let before = table.len();
                table.retain(|row| row_id(row) != Some(id));
                if table.len() == before {
                    return not_found();
                }
                let message = format!("{} deleted successfully", kind.singular());
                ok(200, json!({"success": true, "message": message}))
            }
            _ => ok(405, json!({"success": false, "error": "Method not allowed"})),
        }
    }
}

#[async_trait(?Send)]
impl Transport for MemoryBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpReply, TransportError> {
        let offline = {
            let mut store = self.store.borrow_mut();
            store.log.push(request.clone());
            store.offline
        };
        if offline {
            return Err(TransportError::Request("network unreachable".to_owned()));
        }
        Ok(self.handle(&request))
    }
}
