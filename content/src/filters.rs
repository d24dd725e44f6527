//! List filters and date-range presets.
//!
//! Filters are turned into query pairs with one rule: a value that means
//! "everything" (`All`, empty text, no id) is left out of the request rather
//! than sent as an empty parameter.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use time::{Date, Duration, macros::format_description};

use crate::types::{ALL, RecordId};

/// Ordered query-string pairs for a list request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a free-text parameter when non-empty. The text is sent as typed.
    #[must_use]
    pub fn text(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.pairs.push((key.to_owned(), value.to_owned()));
        }
        self
    }

    /// Add a category or status; `All` and empty are omitted.
    #[must_use]
    pub fn choice(self, key: &str, value: &str) -> Self {
        if value == ALL { self } else { self.text(key, value) }
    }

    #[must_use]
    pub fn id(mut self, key: &str, value: Option<RecordId>) -> Self {
        if let Some(id) = value {
            self.pairs.push((key.to_owned(), id.to_string()));
        }
        self
    }

    #[must_use]
    pub fn flag(mut self, key: &str, value: Option<bool>) -> Self {
        if let Some(flag) = value {
            self.pairs.push((key.to_owned(), flag.to_string()));
        }
        self
    }

    #[must_use]
    pub fn range(self, range: &DateRange) -> Self {
        self.text("date", range.date.as_deref().unwrap_or_default())
            .text("start_date", range.start_date.as_deref().unwrap_or_default())
            .text("end_date", range.end_date.as_deref().unwrap_or_default())
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// =============================================================================
// PER-RESOURCE FILTERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogQuery {
    pub category: String,
    pub search: String,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self { category: ALL.to_owned(), search: String::new() }
    }
}

impl BlogQuery {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new().choice("category", &self.category).text("search", &self.search)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectQuery {
    pub category: String,
}

impl Default for ProjectQuery {
    fn default() -> Self {
        Self { category: ALL.to_owned() }
    }
}

impl ProjectQuery {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new().choice("category", &self.category)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteQuery {
    pub status: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for SiteQuery {
    fn default() -> Self {
        Self { status: ALL.to_owned(), start_date: String::new(), end_date: String::new() }
    }
}

impl SiteQuery {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new()
            .choice("status", &self.status)
            .text("start_date", &self.start_date)
            .text("end_date", &self.end_date)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkerQuery {
    pub site_id: Option<RecordId>,
    pub is_active: Option<bool>,
}

impl WorkerQuery {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new().id("site_id", self.site_id).flag("is_active", self.is_active)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    pub site_id: Option<RecordId>,
    pub range: DateRange,
}

impl ActivityQuery {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new().id("site_id", self.site_id).range(&self.range)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostQuery {
    pub site_id: Option<RecordId>,
    pub worker_id: Option<RecordId>,
    pub cost_type: String,
    pub category: String,
    pub range: DateRange,
}

impl Default for CostQuery {
    fn default() -> Self {
        Self {
            site_id: None,
            worker_id: None,
            cost_type: ALL.to_owned(),
            category: ALL.to_owned(),
            range: DateRange::default(),
        }
    }
}

impl CostQuery {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new()
            .id("site_id", self.site_id)
            .id("worker_id", self.worker_id)
            .choice("cost_type", &self.cost_type)
            .choice("category", &self.category)
            .range(&self.range)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub worker_id: Option<RecordId>,
    pub range: DateRange,
}

impl AttendanceQuery {
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new().id("worker_id", self.worker_id).range(&self.range)
    }
}

// =============================================================================
// DATE PRESETS
// =============================================================================

/// Resolved date parameters. All `YYYY-MM-DD`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Date filter presets offered on the site-management tabs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    /// A single day; the pickers default it to today.
    Day(String),
    /// The last seven days up to today.
    Week,
    /// The last calendar month up to today.
    Month,
    /// Both bounds must be set for the filter to apply.
    Custom { start: String, end: String },
}

impl DateFilter {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All time",
            Self::Day(_) => "Day",
            Self::Week => "Last 7 days",
            Self::Month => "Last month",
            Self::Custom { .. } => "Custom range",
        }
    }

    /// Preset key used by selects and the CLI.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Day(_) => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Custom { .. } => "custom",
        }
    }

    #[must_use]
    pub fn resolve(&self, today: Date) -> DateRange {
        match self {
            Self::All => DateRange::default(),
            Self::Day(day) => {
                let day = if day.is_empty() { format_date(today) } else { day.clone() };
                DateRange { date: Some(day), ..DateRange::default() }
            }
            Self::Week => {
                let start = today.checked_sub(Duration::days(7)).unwrap_or(today);
                DateRange { start_date: Some(format_date(start)), ..DateRange::default() }
            }
            Self::Month => DateRange { start_date: Some(format_date(month_before(today))), ..DateRange::default() },
            Self::Custom { start, end } => {
                if start.is_empty() || end.is_empty() {
                    DateRange::default()
                } else {
                    DateRange { date: None, start_date: Some(start.clone()), end_date: Some(end.clone()) }
                }
            }
        }
    }
}

/// Same day one month earlier, clamped to the shorter month's last day.
#[must_use]
pub fn month_before(day: Date) -> Date {
    let month = day.month().previous();
    let year = if month == time::Month::December { day.year() - 1 } else { day.year() };
    let last = time::util::days_in_year_month(year, month);
    Date::from_calendar_date(year, month, day.day().min(last)).unwrap_or(day)
}

#[must_use]
pub fn format_date(day: Date) -> String {
    format!("{:04}-{:02}-{:02}", day.year(), u8::from(day.month()), day.day())
}

/// Parse `YYYY-MM-DD`; `None` for anything else.
#[must_use]
pub fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]")).ok()
}
