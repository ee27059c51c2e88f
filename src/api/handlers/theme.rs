//! Handlers for the appearance editor.

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use validator::Validate;

use super::upload_content_type;
use crate::api::dto::theme::UpdateThemeRequest;
use crate::api::dto::user::UploadResponse;
use crate::application::services::ImageTarget;
use crate::domain::entities::ThemeSettings;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current appearance settings.
///
/// # Endpoint
///
/// `GET /api/theme`
pub async fn get_theme_handler(State(state): State<AppState>) -> Json<ThemeSettings> {
    Json(state.profile_service.theme_settings().await)
}

/// Merges the provided appearance fields into the settings.
///
/// # Endpoint
///
/// `PATCH /api/theme`
///
/// # Request Body
///
/// ```json
/// {
///   "displayName": null,
///   "bio": "Maker of things",
///   "theme": "gradient",
///   "buttonStyle": "square",
///   "accentColor": "#10b981",
///   "fontFamily": "Poppins"
/// }
/// ```
///
/// `null` clears an override so the public page falls back to the user's
/// own display name or avatar.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed color, an unknown font or an
/// oversized bio.
pub async fn update_theme_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateThemeRequest>,
) -> Result<Json<ThemeSettings>, AppError> {
    payload.validate()?;

    let patch = payload.into_patch()?;
    let settings = state.profile_service.update_theme_settings(patch).await;

    Ok(Json(settings))
}

/// Stores the raw request body as the profile image override.
///
/// # Endpoint
///
/// `POST /api/theme/profile-image`
///
/// The body is the image itself, with its media type in `Content-Type`.
///
/// # Errors
///
/// - 400 Bad Request for a non-image type or a body over the upload cap
/// - 500 Internal Server Error if the image cannot be stored
pub async fn upload_profile_image_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadResponse>, AppError> {
    let reference = state
        .profile_service
        .upload_image(
            ImageTarget::ProfileImage,
            upload_content_type(&headers),
            body.to_vec(),
        )
        .await?;

    Ok(Json(UploadResponse { reference }))
}
