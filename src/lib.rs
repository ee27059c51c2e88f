//! # linkbio
//!
//! Backend for a link-in-bio dashboard: one profile owner curates a list of
//! links, styles the public page and reviews traffic analytics.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the profile store and collaborator traits
//! - **Application Layer** ([`application`]) - Input handling and derived analytics
//! - **Infrastructure Layer** ([`infrastructure`]) - Persistence, image storage, analytics source
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Link curation with URL sanitization, toggling and drag-style reordering
//! - Appearance settings with display name and profile image overrides
//! - Avatar and profile image uploads
//! - Analytics totals, click-through rate, top links and daily series
//! - Background persistence of every change with retry logic
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: keep the profile across restarts
//! export DATA_FILE="data/profile.json"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalyticsService, ProfileService};
    pub use crate::domain::entities::{Analytics, Link, ProfileSnapshot, ThemeSettings, User};
    pub use crate::domain::store::{ProfileStore, StoreError, StoreEvent};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
