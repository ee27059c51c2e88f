//! Derived analytics views and access to the analytics collaborator.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::domain::entities::{Analytics, DailyCount, Link};
use crate::domain::repositories::AnalyticsSource;
use crate::error::AppError;
use crate::utils::format::{format_number, format_percentage};

/// Number of links shown in the "top links" table.
pub const TOP_LINKS_LIMIT: usize = 10;

/// Views and clicks for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub views: u64,
    pub clicks: u64,
}

/// Everything the analytics page displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_views: u64,
    pub total_clicks: u64,
    pub total_views_display: String,
    pub total_clicks_display: String,
    pub click_through_rate: String,
    pub top_links: Vec<Link>,
    pub daily: Vec<DailyPoint>,
}

/// Click-through rate as a percentage with one decimal.
///
/// Returns `"0.0"` when there were no views, whatever the click count.
pub fn click_through_rate(total_views: u64, total_clicks: u64) -> String {
    format_percentage(total_clicks, total_views)
}

/// The `limit` most clicked links, most clicked first.
///
/// The sort is stable, so links with equal counts keep their list order.
pub fn top_links(links: &[Link], limit: usize) -> Vec<Link> {
    let mut ranked = links.to_vec();
    ranked.sort_by(|a, b| b.click_count.cmp(&a.click_count));
    ranked.truncate(limit);
    ranked
}

/// Joins the two daily series on date.
///
/// One point per view entry, in view order; days without a click entry get 0.
pub fn merge_daily_series(views: &[DailyCount], clicks: &[DailyCount]) -> Vec<DailyPoint> {
    let clicks_by_date: HashMap<NaiveDate, u64> =
        clicks.iter().map(|c| (c.date, c.count)).collect();

    views
        .iter()
        .map(|v| DailyPoint {
            date: v.date,
            views: v.count,
            clicks: clicks_by_date.get(&v.date).copied().unwrap_or(0),
        })
        .collect()
}

/// Computes the full analytics page from a snapshot and the current links.
pub fn summarize(analytics: &Analytics, links: &[Link]) -> AnalyticsSummary {
    AnalyticsSummary {
        total_views: analytics.total_views,
        total_clicks: analytics.total_clicks,
        total_views_display: format_number(analytics.total_views),
        total_clicks_display: format_number(analytics.total_clicks),
        click_through_rate: click_through_rate(analytics.total_views, analytics.total_clicks),
        top_links: top_links(links, TOP_LINKS_LIMIT),
        daily: merge_daily_series(&analytics.daily_views, &analytics.daily_clicks),
    }
}

/// Fetches analytics snapshots from the configured source.
pub struct AnalyticsService<S: AnalyticsSource + ?Sized> {
    source: Arc<S>,
    window_days: u32,
}

impl<S: AnalyticsSource + ?Sized> AnalyticsService<S> {
    /// Creates a service reading `window_days` trailing days from `source`.
    pub fn new(source: Arc<S>, window_days: u32) -> Self {
        Self {
            source,
            window_days,
        }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Fetches a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the source fails.
    pub async fn fetch(&self) -> Result<Analytics, AppError> {
        self.source.fetch(self.window_days).await.map_err(|e| {
            AppError::internal(
                "Failed to load analytics",
                json!({ "reason": e.to_string(), "window_days": self.window_days }),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{AnalyticsError, MockAnalyticsSource};

    fn link(id: &str, clicks: u64) -> Link {
        let mut link = Link::new(
            id.to_string(),
            format!("Link {id}"),
            format!("https://{id}.example.com/"),
            true,
            0,
        );
        link.click_count = clicks;
        link
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[test]
    fn test_ctr_zero_views() {
        assert_eq!(click_through_rate(0, 0), "0.0");
        assert_eq!(click_through_rate(0, 57), "0.0");
    }

    #[test]
    fn test_ctr_one_decimal() {
        assert_eq!(click_through_rate(1000, 123), "12.3");
        assert_eq!(click_through_rate(3, 1), "33.3");
    }

    #[test]
    fn test_top_links_stable_descending() {
        let links = vec![link("a", 5), link("b", 42), link("c", 5), link("d", 0)];

        let ranked: Vec<String> = top_links(&links, TOP_LINKS_LIMIT)
            .into_iter()
            .map(|l| l.id)
            .collect();

        assert_eq!(ranked, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_top_links_limit() {
        let links: Vec<Link> = (0..15).map(|i| link(&i.to_string(), i)).collect();

        let ranked = top_links(&links, TOP_LINKS_LIMIT);

        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].click_count, 14);
        assert_eq!(ranked[9].click_count, 5);
    }

    #[test]
    fn test_merge_defaults_missing_clicks() {
        let views = vec![
            DailyCount::new(day(1), 100),
            DailyCount::new(day(2), 80),
            DailyCount::new(day(3), 60),
        ];
        let clicks = vec![DailyCount::new(day(3), 9), DailyCount::new(day(1), 12)];

        let merged = merge_daily_series(&views, &clicks);

        assert_eq!(
            merged,
            vec![
                DailyPoint { date: day(1), views: 100, clicks: 12 },
                DailyPoint { date: day(2), views: 80, clicks: 0 },
                DailyPoint { date: day(3), views: 60, clicks: 9 },
            ]
        );
    }

    #[test]
    fn test_summarize() {
        let analytics = Analytics::from_series(
            vec![DailyCount::new(day(1), 1500)],
            vec![DailyCount::new(day(1), 75)],
        );
        let summary = summarize(&analytics, &[link("a", 3)]);

        assert_eq!(summary.total_views_display, "1.5K");
        assert_eq!(summary.total_clicks_display, "75");
        assert_eq!(summary.click_through_rate, "5.0");
        assert_eq!(summary.top_links.len(), 1);
        assert_eq!(summary.daily.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_passes_window() {
        let mut mock_source = MockAnalyticsSource::new();
        mock_source
            .expect_fetch()
            .withf(|days| *days == 14)
            .times(1)
            .returning(|_| Ok(Analytics::default()));

        let service = AnalyticsService::new(Arc::new(mock_source), 14);

        assert!(service.fetch().await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_error_is_internal() {
        let mut mock_source = MockAnalyticsSource::new();
        mock_source
            .expect_fetch()
            .times(1)
            .returning(|_| Err(AnalyticsError::Unavailable("offline".to_string())));

        let service = AnalyticsService::new(Arc::new(mock_source), 30);

        assert!(matches!(
            service.fetch().await.unwrap_err(),
            AppError::Internal { .. }
        ));
    }
}
