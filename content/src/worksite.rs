//! Site detail loading and cost summaries.

#[cfg(test)]
#[path = "worksite_test.rs"]
mod worksite_test;

use futures::join;

use crate::api::Gateway;
use crate::envelope::ApiResponse;
use crate::filters::Query;
use crate::transport::Transport;
use crate::types::{Cost, DailyActivity, RecordId, Site, Worker};

pub const SITE_NOT_FOUND: &str = "Site not found";

/// Everything the site detail screen shows, fetched together.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteOverview {
    pub site: Site,
    pub workers: Vec<Worker>,
    pub activities: Vec<DailyActivity>,
    pub costs: Vec<Cost>,
}

impl SiteOverview {
    #[must_use]
    pub fn totals(&self) -> CostTotals {
        CostTotals::of(&self.costs)
    }
}

/// Load a site and its workers, activities, and costs concurrently.
///
/// # Errors
///
/// Returns [`SITE_NOT_FOUND`] when the site itself cannot be loaded. A
/// failing child list is logged and shown empty.
pub async fn load_site<T: Transport>(gateway: &Gateway<T>, site_id: RecordId) -> Result<SiteOverview, String> {
    let raw = gateway.raw();
    let scoped = Query::new().id("site_id", Some(site_id));
    let site_path = format!("sites/{site_id}");
    let unscoped = Query::new();
    let (site, workers, activities, costs) = join!(
        raw.get::<Site>(&site_path, &unscoped),
        raw.get::<Vec<Worker>>("workers", &scoped),
        raw.get::<Vec<DailyActivity>>("daily-activities", &scoped),
        raw.get::<Vec<Cost>>("costs", &scoped),
    );
    let Some(site) = site.into_data() else {
        return Err(SITE_NOT_FOUND.to_owned());
    };
    Ok(SiteOverview {
        site,
        workers: list_or_empty("workers", workers),
        activities: list_or_empty("daily activities", activities),
        costs: list_or_empty("costs", costs),
    })
}

fn list_or_empty<R>(what: &str, resp: ApiResponse<Vec<R>>) -> Vec<R> {
    if resp.success {
        resp.data.unwrap_or_default()
    } else {
        tracing::warn!(list = what, error = %resp.error_text(), "site detail list failed");
        Vec::new()
    }
}

/// Cost sums for the costs tab.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CostTotals {
    pub total: f64,
    pub worker: f64,
    pub activity: f64,
}

impl CostTotals {
    #[must_use]
    pub fn of(costs: &[Cost]) -> Self {
        costs.iter().fold(Self::default(), |mut acc, cost| {
            acc.total += cost.amount;
            match cost.cost_type.as_str() {
                "worker" => acc.worker += cost.amount,
                "activity" => acc.activity += cost.amount,
                _ => {}
            }
            acc
        })
    }
}

/// Sum of `total_price` over the listed activities.
#[must_use]
pub fn activity_total(activities: &[DailyActivity]) -> f64 {
    activities.iter().map(|activity| activity.total_price).sum()
}

/// `$1,234.50` style money text.
#[must_use]
pub fn money(amount: f64) -> String {
    let negative = amount < 0.0;
    let text = format!("{:.2}", amount.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}${grouped}.{cents}", if negative { "-" } else { "" })
}
