//! DTO for the appearance editor.

use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{ButtonStyle, FONT_CHOICES, Theme, ThemePatch};
use crate::error::AppError;

/// Compiled regex for `#rrggbb` accent colors.
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Request body for `PATCH /api/theme`.
///
/// # Override semantics
///
/// For `displayName`, `bio` and `profileImage`:
/// - **Absent** → leave unchanged
/// - **`null`** or blank → clear the override (fall back to the user's fields)
/// - **Value** → set the override
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThemeRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "Display name must be at most 50 characters"))]
    pub display_name: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 80, message = "Bio must be at most 80 characters"))]
    pub bio: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub profile_image: Option<Option<String>>,

    pub theme: Option<Theme>,

    pub button_style: Option<ButtonStyle>,

    #[validate(regex(path = "*HEX_COLOR_REGEX", message = "Accent color must look like #a1b2c3"))]
    pub accent_color: Option<String>,

    pub font_family: Option<String>,
}

impl UpdateThemeRequest {
    /// Converts the request into a store patch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `fontFamily` is not one of the
    /// offered fonts.
    pub fn into_patch(self) -> Result<ThemePatch, AppError> {
        if let Some(font) = &self.font_family
            && !FONT_CHOICES.contains(&font.as_str())
        {
            return Err(AppError::bad_request(
                "Unsupported font family",
                json!({ "font_family": font, "allowed": FONT_CHOICES }),
            ));
        }

        Ok(ThemePatch {
            display_name: self.display_name.map(blank_to_none),
            bio: self.bio.map(blank_to_none),
            profile_image: self.profile_image.map(blank_to_none),
            theme: self.theme,
            button_style: self.button_style,
            accent_color: self.accent_color.map(|c| c.to_ascii_lowercase()),
            font_family: self.font_family,
        })
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
