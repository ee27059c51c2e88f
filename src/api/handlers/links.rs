//! Handlers for the link editor (list, create, update, delete, reorder).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{
    CreateLinkRequest, LinkListResponse, ReorderLinksRequest, UpdateLinkRequest,
};
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Lists links in display order.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(State(state): State<AppState>) -> Json<LinkListResponse> {
    Json(LinkListResponse {
        links: state.profile_service.links().await,
    })
}

/// Adds a link at the end of the list.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "title": "My blog", "url": "example.com", "enabled": true }
/// ```
///
/// The URL is sanitized before it is stored, so `example.com` becomes
/// `https://example.com/`.
///
/// # Errors
///
/// Returns 400 Bad Request if the title is empty or the URL uses a scheme
/// other than http(s).
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<Link>), AppError> {
    payload.validate()?;

    let link = state
        .profile_service
        .create_link(&payload.title, &payload.url, payload.enabled)
        .await?;

    Ok((StatusCode::CREATED, Json(link)))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PATCH /api/links/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed.
///
/// ```json
/// { "title": "New title", "url": "https://new.example.com", "enabled": false }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if validation fails
/// - 404 Not Found if the link does not exist
pub async fn update_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<Link>, AppError> {
    payload.validate()?;

    let link = state
        .profile_service
        .update_link(
            &id,
            payload.title.as_deref(),
            payload.url.as_deref(),
            payload.enabled,
        )
        .await?;

    Ok(Json(link))
}

/// Removes a link. Remaining links keep their `order` values.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the link does not exist.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.profile_service.delete_link(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Applies a new display order.
///
/// # Endpoint
///
/// `PUT /api/links/order`
///
/// # Request Body
///
/// ```json
/// { "ids": ["3", "1", "2"] }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request unless `ids` names every link exactly once.
pub async fn reorder_links_handler(
    State(state): State<AppState>,
    Json(payload): Json<ReorderLinksRequest>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.profile_service.reorder_links(&payload.ids).await?;

    Ok(Json(LinkListResponse { links }))
}

/// Counts a click-through on a link from the public page.
///
/// # Endpoint
///
/// `POST /api/links/{id}/click`
///
/// # Errors
///
/// Returns 404 Not Found if the link does not exist.
pub async fn record_click_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Link>, AppError> {
    let link = state.profile_service.record_click(&id).await?;
    Ok(Json(link))
}
