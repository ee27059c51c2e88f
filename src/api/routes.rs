//! API route configuration.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
};

use crate::api::handlers::{
    analytics_handler, create_link_handler, delete_link_handler, get_theme_handler,
    get_user_handler, list_links_handler, profile_handler, record_click_handler,
    refresh_analytics_handler, reorder_links_handler, update_link_handler, update_theme_handler,
    update_user_handler, upload_avatar_handler, upload_profile_image_handler,
};
use crate::state::AppState;

/// Headroom above the upload cap so oversized images reach the handler and
/// get a JSON 400 instead of a bare 413.
const UPLOAD_BODY_SLACK: usize = 1024;

/// All dashboard routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /profile`                - Live preview data
/// - `GET    /links`                  - Links in display order
/// - `POST   /links`                  - Add a link
/// - `PUT    /links/order`            - Reorder links
/// - `PATCH  /links/{id}`             - Partially update a link
/// - `DELETE /links/{id}`             - Remove a link
/// - `POST   /links/{id}/click`       - Count a click-through
/// - `GET    /theme`                  - Appearance settings
/// - `PATCH  /theme`                  - Merge appearance settings
/// - `POST   /theme/profile-image`    - Upload profile image override
/// - `GET    /user`                   - Account settings
/// - `PATCH  /user`                   - Update account settings
/// - `POST   /user/avatar`            - Upload avatar
/// - `GET    /analytics`              - Analytics summary
/// - `POST   /analytics/refresh`      - Refetch analytics
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    let uploads = Router::new()
        .route("/theme/profile-image", post(upload_profile_image_handler))
        .route("/user/avatar", post(upload_avatar_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes + UPLOAD_BODY_SLACK));

    Router::new()
        .route("/profile", get(profile_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/order", put(reorder_links_handler))
        .route(
            "/links/{id}",
            patch(update_link_handler).delete(delete_link_handler),
        )
        .route("/links/{id}/click", post(record_click_handler))
        .route("/theme", get(get_theme_handler).patch(update_theme_handler))
        .route("/user", get(get_user_handler).patch(update_user_handler))
        .route("/analytics", get(analytics_handler))
        .route("/analytics/refresh", post(refresh_analytics_handler))
        .merge(uploads)
}
