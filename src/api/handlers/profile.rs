//! Handler for the live preview.

use axum::{Json, extract::State};

use crate::application::services::ProfileView;
use crate::state::AppState;

/// Returns the profile the way the public page renders it.
///
/// # Endpoint
///
/// `GET /api/profile`
///
/// # Response
///
/// ```json
/// {
///   "user": { "id": "u1", "email": "ada@example.com", "username": "ada", "displayName": "Ada", "avatar": null },
///   "links": [ { "id": "1", "title": "Blog", "url": "https://example.com/", "enabled": true, "order": 0, "clickCount": 0 } ],
///   "themeSettings": { "theme": "light", "buttonStyle": "rounded", "accentColor": "#3b82f6", "fontFamily": "Inter" },
///   "resolvedDisplayName": "Ada",
///   "resolvedProfileImage": null
/// }
/// ```
pub async fn profile_handler(State(state): State<AppState>) -> Json<ProfileView> {
    Json(state.profile_service.profile().await)
}
