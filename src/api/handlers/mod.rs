//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one dashboard section.

pub mod analytics;
pub mod health;
pub mod links;
pub mod profile;
pub mod theme;
pub mod user;

pub use analytics::{analytics_handler, refresh_analytics_handler};
pub use health::health_handler;
pub use links::{
    create_link_handler, delete_link_handler, list_links_handler, record_click_handler,
    reorder_links_handler, update_link_handler,
};
pub use profile::profile_handler;
pub use theme::{get_theme_handler, update_theme_handler, upload_profile_image_handler};
pub use user::{get_user_handler, update_user_handler, upload_avatar_handler};

use axum::http::{HeaderMap, header::CONTENT_TYPE};

/// Media type of a raw upload body, without parameters.
pub(crate) fn upload_content_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or(v).trim())
}
