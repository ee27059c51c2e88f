//! Handlers for the settings editor.

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use validator::Validate;

use super::upload_content_type;
use crate::api::dto::user::{UpdateUserRequest, UploadResponse};
use crate::application::services::ImageTarget;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/user`
pub async fn get_user_handler(State(state): State<AppState>) -> Json<User> {
    Json(state.profile_service.user().await)
}

/// Updates email, username or display name.
///
/// # Endpoint
///
/// `PATCH /api/user`
///
/// # Errors
///
/// Returns 400 Bad Request if the username is not 3-30 characters of
/// letters, digits, `_` or `-`, the email has no `@`, or the display name
/// is blank.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, AppError> {
    payload.validate()?;

    let user = state.profile_service.update_user(payload.into()).await?;

    Ok(Json(user))
}

/// Stores the raw request body as the user's avatar.
///
/// # Endpoint
///
/// `POST /api/user/avatar`
///
/// # Errors
///
/// - 400 Bad Request for a non-image type or a body over the upload cap
/// - 500 Internal Server Error if the image cannot be stored
pub async fn upload_avatar_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadResponse>, AppError> {
    let reference = state
        .profile_service
        .upload_image(
            ImageTarget::Avatar,
            upload_content_type(&headers),
            body.to_vec(),
        )
        .await?;

    Ok(Json(UploadResponse { reference }))
}
