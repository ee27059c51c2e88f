//! Handlers for the analytics page.

use axum::{Json, extract::State};

use crate::application::services::AnalyticsSummary;
use crate::application::services::analytics_service::summarize;
use crate::error::AppError;
use crate::state::AppState;

/// Returns totals, click-through rate, top links and the daily series.
///
/// # Endpoint
///
/// `GET /api/analytics`
///
/// # Response
///
/// ```json
/// {
///   "totalViews": 4210,
///   "totalClicks": 1375,
///   "totalViewsDisplay": "4.2K",
///   "totalClicksDisplay": "1.4K",
///   "clickThroughRate": "32.7",
///   "topLinks": [ ... ],
///   "daily": [ { "date": "2026-10-01", "views": 140, "clicks": 41 } ]
/// }
/// ```
pub async fn analytics_handler(State(state): State<AppState>) -> Json<AnalyticsSummary> {
    let (analytics, links) = state.profile_service.analytics_with_links().await;
    Json(summarize(&analytics, &links))
}

/// Fetches a fresh snapshot from the analytics source and returns the new
/// summary.
///
/// # Endpoint
///
/// `POST /api/analytics/refresh`
///
/// # Errors
///
/// Returns 500 Internal Server Error if the source fails. The previous
/// snapshot is kept.
pub async fn refresh_analytics_handler(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let analytics = state.analytics_service.fetch().await?;
    state.profile_service.replace_analytics(analytics).await;

    tracing::info!(
        window_days = state.analytics_service.window_days(),
        "Analytics refreshed"
    );

    let (analytics, links) = state.profile_service.analytics_with_links().await;
    Ok(Json(summarize(&analytics, &links)))
}
