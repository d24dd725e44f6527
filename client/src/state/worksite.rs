//! Site detail screen: the loaded overview, tab selection, and the
//! date-filter form shared by the workers, activities and costs tabs.

#[cfg(test)]
#[path = "worksite_test.rs"]
mod worksite_test;

use content::filters::{DateFilter, DateRange};
use content::sequence::{RequestSequence, Ticket};
use content::types::RecordId;
use content::worksite::SiteOverview;
use time::Date;

/// Header data for the open site.
///
/// Reloads of the same site keep the previous overview on screen until the
/// newer reply lands. Replies older than the latest load are dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverviewState {
    pub overview: Option<Result<SiteOverview, String>>,
    sequence: RequestSequence,
}

impl OverviewState {
    /// Start loading `site_id`. Switching sites clears the old overview.
    pub fn begin(&mut self, site_id: Option<RecordId>) -> Ticket {
        if self.site_id() != site_id {
            self.overview = None;
        }
        self.sequence.issue()
    }

    /// Returns `false` when the reply was stale.
    pub fn finish(&mut self, ticket: Ticket, result: Result<SiteOverview, String>) -> bool {
        if !self.sequence.is_current(ticket) {
            return false;
        }
        self.overview = Some(result);
        true
    }

    /// Id of the site currently shown, if any.
    pub fn site_id(&self) -> Option<RecordId> {
        match &self.overview {
            Some(Ok(overview)) => Some(overview.site.id),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SiteTab {
    #[default]
    Workers,
    Activities,
    Costs,
}

impl SiteTab {
    pub const ALL: [SiteTab; 3] = [SiteTab::Workers, SiteTab::Activities, SiteTab::Costs];

    pub fn label(self) -> &'static str {
        match self {
            Self::Workers => "Workers",
            Self::Activities => "Daily Activities",
            Self::Costs => "Costs",
        }
    }
}

/// Preset keys in select order.
pub const PRESETS: &[(&str, &str)] =
    &[("all", "All time"), ("today", "Day"), ("week", "Last 7 days"), ("month", "Last month"), ("custom", "Custom range")];

/// Raw picker values for one tab's date filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateFilterForm {
    pub preset: String,
    pub day: String,
    pub start: String,
    pub end: String,
}

impl Default for DateFilterForm {
    fn default() -> Self {
        Self { preset: "all".to_owned(), day: String::new(), start: String::new(), end: String::new() }
    }
}

impl DateFilterForm {
    pub fn filter(&self) -> DateFilter {
        match self.preset.as_str() {
            "today" => DateFilter::Day(self.day.clone()),
            "week" => DateFilter::Week,
            "month" => DateFilter::Month,
            "custom" => DateFilter::Custom { start: self.start.clone(), end: self.end.clone() },
            _ => DateFilter::All,
        }
    }

    pub fn resolve(&self, today: Date) -> DateRange {
        self.filter().resolve(today)
    }

    pub fn shows_day_picker(&self) -> bool {
        self.preset == "today"
    }

    pub fn shows_range_pickers(&self) -> bool {
        self.preset == "custom"
    }
}
