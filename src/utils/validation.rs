//! Advisory input checks applied by the API before calling the store.
//!
//! The store accepts whatever it is given; these rules exist so that
//! dashboard users get a clear message instead of storing junk.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Largest accepted image upload (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 30;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Validates a username.
///
/// # Rules
///
/// - Length: 3-30 characters
/// - Allowed characters: letters, digits, underscores, hyphens
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    let len = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        return Err(AppError::bad_request(
            "Username must be 3-30 characters",
            json!({ "provided_length": len }),
        ));
    }

    if !USERNAME_REGEX.is_match(username) {
        return Err(AppError::bad_request(
            "Username can only contain letters, numbers, underscores, and hyphens",
            json!({ "username": username }),
        ));
    }

    Ok(())
}

/// Checks that an email address has the `local@domain` shape.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if there is no `@` with text on both sides.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::bad_request(
            "Please enter a valid email address",
            json!({ "email": email }),
        )),
    }
}

/// Checks an uploaded image against the size cap and MIME type.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for an empty body, a body larger than
/// `max_bytes`, or a content type outside `image/*`.
pub fn validate_image_upload(
    content_type: Option<&str>,
    size: usize,
    max_bytes: usize,
) -> Result<(), AppError> {
    let is_image =
        content_type.is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"));
    if !is_image {
        return Err(AppError::bad_request(
            "Please upload an image file",
            json!({ "content_type": content_type }),
        ));
    }

    if size == 0 {
        return Err(AppError::bad_request("Image is empty", json!({})));
    }

    if size > max_bytes {
        return Err(AppError::bad_request(
            "Image must be smaller than the upload limit",
            json!({ "size": size, "max_bytes": max_bytes }),
        ));
    }

    Ok(())
}
