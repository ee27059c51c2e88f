//! Read-only traffic snapshot supplied by the analytics collaborator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

impl DailyCount {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self { date, count }
    }
}

/// Aggregate traffic over a trailing window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_views: u64,
    pub total_clicks: u64,
    pub daily_views: Vec<DailyCount>,
    pub daily_clicks: Vec<DailyCount>,
}

impl Analytics {
    /// Builds a snapshot whose totals are the sums of the given series.
    pub fn from_series(daily_views: Vec<DailyCount>, daily_clicks: Vec<DailyCount>) -> Self {
        Self {
            total_views: daily_views.iter().map(|d| d.count).sum(),
            total_clicks: daily_clicks.iter().map(|d| d.count).sum(),
            daily_views,
            daily_clicks,
        }
    }
}
