//! Business logic services for the application layer.

pub mod analytics_service;
pub mod profile_service;

pub use analytics_service::{AnalyticsService, AnalyticsSummary, DailyPoint};
pub use profile_service::{ImageTarget, ProfileService, ProfileView};
