//! Derived-cost approval for workers and daily activities.
//!
//! Approving a worker turns their tallied attendance into one `worker` cost;
//! approving an activity turns its total into one `activity` cost. The API
//! keeps no approved flag, so before creating a cost the approval looks for
//! an existing one for the same activity, or for the same worker on the same
//! date, and reports it instead of creating a duplicate.

#[cfg(test)]
#[path = "approval_test.rs"]
mod approval_test;

use futures::future::join_all;

use crate::api::Gateway;
use crate::filters::{AttendanceQuery, CostQuery, DateRange};
use crate::transport::Transport;
use crate::types::{Attendance, Cost, CostDraft, DailyActivity, RecordId, Worker};
use crate::worksite::money;

pub const LABOR: &str = "labor";

/// A worker's attendance summed over a date range.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkerTally {
    pub worker_id: RecordId,
    pub site_id: RecordId,
    pub name: String,
    pub daily_price: f64,
    pub total_days: u32,
    pub total_hours: f64,
    pub total_cost: f64,
}

impl WorkerTally {
    /// Days count only when marked present; hours are summed over every record.
    #[must_use]
    pub fn new(worker: &Worker, attendance: &[Attendance]) -> Self {
        let mine = attendance.iter().filter(|a| a.worker_id == worker.id);
        let (days, hours) =
            mine.fold((0_u32, 0.0_f64), |(days, hours), a| (days + u32::from(a.is_present), hours + a.hours_worked));
        Self {
            worker_id: worker.id,
            site_id: worker.site_id,
            name: worker.name.clone(),
            daily_price: worker.daily_price,
            total_days: days,
            total_hours: hours,
            total_cost: f64::from(days) * worker.daily_price,
        }
    }
}

/// Confirmation text shown before approving a worker's tally.
#[must_use]
pub fn worker_prompt(tally: &WorkerTally) -> String {
    format!(
        "Approve {} days of work for {}? Total cost: {}",
        tally.total_days,
        tally.name,
        money(tally.total_cost)
    )
}

#[must_use]
pub fn activity_prompt(activity: &DailyActivity) -> String {
    format!("Approve activity \"{}\" for {}?", activity.activity_name, money(activity.total_price))
}

#[derive(Debug, thiserror::Error)]
pub enum ApprovalError {
    #[error("{name} has no present days to approve")]
    NothingToApprove { name: String },
    #[error("{0}")]
    Rejected(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ApprovalOutcome {
    /// A new cost was created. The server may omit it from the reply.
    Approved(Option<Cost>),
    /// A matching cost already existed; nothing was created.
    AlreadyApproved(Cost),
}

impl ApprovalOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Approved(_) => "Cost approved and recorded".to_owned(),
            Self::AlreadyApproved(cost) => format!("Already approved: {}", cost.description),
        }
    }
}

#[must_use]
pub fn worker_cost_draft(tally: &WorkerTally, date: &str) -> CostDraft {
    CostDraft {
        site_id: tally.site_id,
        worker_id: Some(tally.worker_id),
        daily_activity_id: None,
        cost_type: "worker".to_owned(),
        description: format!("Approved work for {} - {} days", tally.name, tally.total_days),
        amount: tally.total_cost,
        date: date.to_owned(),
        category: Some(LABOR.to_owned()),
    }
}

#[must_use]
pub fn activity_cost_draft(activity: &DailyActivity) -> CostDraft {
    CostDraft {
        site_id: activity.site_id,
        worker_id: None,
        daily_activity_id: Some(activity.id),
        cost_type: "activity".to_owned(),
        description: format!("Approved activity: {}", activity.activity_name),
        amount: activity.total_price,
        date: activity.date.clone(),
        category: Some(LABOR.to_owned()),
    }
}

/// Record a worker's tallied cost, dated `today`.
///
/// # Errors
///
/// [`ApprovalError::NothingToApprove`] for a zero-day tally (no request is
/// made); [`ApprovalError::Rejected`] when a request fails.
pub async fn approve_worker<T: Transport>(
    gateway: &Gateway<T>,
    tally: &WorkerTally,
    today: &str,
) -> Result<ApprovalOutcome, ApprovalError> {
    if tally.total_days == 0 {
        return Err(ApprovalError::NothingToApprove { name: tally.name.clone() });
    }
    let query = CostQuery {
        site_id: Some(tally.site_id),
        worker_id: Some(tally.worker_id),
        cost_type: "worker".to_owned(),
        ..CostQuery::default()
    };
    let existing = gateway.costs(&query).await.into_result().map_err(ApprovalError::Rejected)?;
    if let Some(cost) =
        existing.into_iter().find(|cost| cost.worker_id == Some(tally.worker_id) && cost.date == today)
    {
        tracing::info!(worker_id = tally.worker_id, cost_id = cost.id, "worker already approved");
        return Ok(ApprovalOutcome::AlreadyApproved(cost));
    }
    create(gateway, &worker_cost_draft(tally, today)).await
}

/// Record an activity's total as a cost, dated on the activity.
///
/// # Errors
///
/// [`ApprovalError::Rejected`] when a request fails.
pub async fn approve_activity<T: Transport>(
    gateway: &Gateway<T>,
    activity: &DailyActivity,
) -> Result<ApprovalOutcome, ApprovalError> {
    let query =
        CostQuery { site_id: Some(activity.site_id), cost_type: "activity".to_owned(), ..CostQuery::default() };
    let existing = gateway.costs(&query).await.into_result().map_err(ApprovalError::Rejected)?;
    if let Some(cost) = existing.into_iter().find(|cost| cost.daily_activity_id == Some(activity.id)) {
        tracing::info!(activity_id = activity.id, cost_id = cost.id, "activity already approved");
        return Ok(ApprovalOutcome::AlreadyApproved(cost));
    }
    create(gateway, &activity_cost_draft(activity)).await
}

async fn create<T: Transport>(gateway: &Gateway<T>, draft: &CostDraft) -> Result<ApprovalOutcome, ApprovalError> {
    let resp = gateway.create_cost(draft).await;
    if resp.success {
        tracing::info!(site_id = draft.site_id, amount = draft.amount, cost_type = %draft.cost_type, "cost approved");
        Ok(ApprovalOutcome::Approved(resp.data))
    } else {
        Err(ApprovalError::Rejected(resp.error_text()))
    }
}

/// Tally every worker over `range`, fetching their attendance concurrently.
///
/// A worker whose attendance fails to load tallies as zero days.
pub async fn tally_workers<T: Transport>(gateway: &Gateway<T>, workers: &[Worker], range: &DateRange) -> Vec<WorkerTally> {
    let fetches = workers.iter().map(|worker| {
        let query = AttendanceQuery { worker_id: Some(worker.id), range: range.clone() };
        async move {
            let resp = gateway.attendance(&query).await;
            let rows = if resp.success {
                resp.data.unwrap_or_default()
            } else {
                tracing::warn!(worker_id = worker.id, error = %resp.error_text(), "attendance fetch failed");
                Vec::new()
            };
            WorkerTally::new(worker, &rows)
        }
    });
    join_all(fetches).await
}
