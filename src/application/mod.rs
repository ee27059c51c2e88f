//! Application layer services implementing the dashboard logic.
//!
//! This layer sits between the HTTP handlers and the domain: it sanitizes
//! and validates input, calls store commands under the store lock and talks
//! to collaborators.
//!
//! # Available Services
//!
//! - [`services::profile_service::ProfileService`] - Links, appearance, user and uploads
//! - [`services::analytics_service::AnalyticsService`] - Analytics fetching and derived views

pub mod services;
