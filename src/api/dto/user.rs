//! DTOs for the settings editor and image uploads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UserPatch;

/// Request body for `PATCH /api/user`.
///
/// Username and email rules are checked by the profile service.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub email: Option<String>,

    pub username: Option<String>,

    #[validate(length(max = 50, message = "Display name must be at most 50 characters"))]
    pub display_name: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            email: req.email.map(|e| e.trim().to_string()),
            username: req.username.map(|u| u.trim().to_string()),
            display_name: req.display_name,
            avatar: None,
        }
    }
}

/// Response to an image upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Stored image reference, now used as avatar or profile image.
    pub reference: String,
}
