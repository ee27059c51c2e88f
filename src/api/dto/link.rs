//! DTOs for link management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

fn default_enabled() -> bool {
    true
}

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    /// Raw destination; sanitized before storing.
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Request body for `PATCH /api/links/{id}`.
///
/// All fields are optional. Only provided fields are changed.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: Option<String>,

    pub enabled: Option<bool>,
}

/// Request body for `PUT /api/links/order`: every link id, in the new order.
///
/// Not length-capped; the store accepts it only as a permutation of the
/// current ids, so its size is bounded by the number of links.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderLinksRequest {
    pub ids: Vec<String>,
}

/// Links in display order.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<Link>,
}
