//! Generated traffic numbers for dashboards without real analytics.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::entities::{Analytics, DailyCount};
use crate::domain::repositories::{AnalyticsError, AnalyticsSource};

const MIN_DAILY_VIEWS: u64 = 5;
const MAX_DAILY_VIEWS: u64 = 24;
const MIN_DAILY_CLICKS: u64 = 3;
const MAX_DAILY_CLICKS: u64 = 17;

/// Produces plausible random analytics over a trailing window.
///
/// Each day gets 5-24 views and, drawn independently, 3-17 clicks; the
/// totals are the sums of the series. With a seed the output is
/// reproducible; the window always ends on `today`.
pub struct SyntheticAnalyticsSource {
    rng: Mutex<StdRng>,
    today: Option<NaiveDate>,
}

impl SyntheticAnalyticsSource {
    /// Random numbers, window ending on the current UTC date.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
            today: None,
        }
    }

    /// Reproducible numbers for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            today: None,
        }
    }

    /// Pins the last day of the window.
    pub fn ending_on(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Builds the series for `window_days` days ending on `today`, oldest first.
    pub fn generate(&self, window_days: u32, today: NaiveDate) -> Analytics {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut daily_views = Vec::with_capacity(window_days as usize);
        let mut daily_clicks = Vec::with_capacity(window_days as usize);
        for offset in (0..window_days).rev() {
            let date = today - Duration::days(i64::from(offset));
            let views = rng.random_range(MIN_DAILY_VIEWS..=MAX_DAILY_VIEWS);
            let clicks = rng.random_range(MIN_DAILY_CLICKS..=MAX_DAILY_CLICKS);
            daily_views.push(DailyCount::new(date, views));
            daily_clicks.push(DailyCount::new(date, clicks));
        }

        Analytics::from_series(daily_views, daily_clicks)
    }
}

impl Default for SyntheticAnalyticsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsSource for SyntheticAnalyticsSource {
    async fn fetch(&self, window_days: u32) -> Result<Analytics, AnalyticsError> {
        if window_days == 0 {
            return Err(AnalyticsError::InvalidWindow(window_days));
        }
        let today = self.today.unwrap_or_else(|| Utc::now().date_naive());
        Ok(self.generate(window_days, today))
    }
}
