//! Seam for the analytics collaborator.

use async_trait::async_trait;

use crate::domain::entities::Analytics;

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Analytics source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid analytics window: {0} days")]
    InvalidWindow(u32),
}

/// Supplies traffic totals and daily series over a trailing window.
///
/// The store treats the result as an opaque snapshot; only the derived views
/// in [`crate::application::services::analytics_service`] are computed locally.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    /// Fetches the snapshot covering the last `window_days` days, today included.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidWindow`] for a zero-day window and
    /// [`AnalyticsError::Unavailable`] if the source cannot be reached.
    async fn fetch(&self, window_days: u32) -> Result<Analytics, AnalyticsError>;
}
