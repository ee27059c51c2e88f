//! Appearance settings for the public profile page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::User;

/// Fonts offered by the appearance editor. The store itself accepts any string.
pub const FONT_CHOICES: &[&str] = &[
    "Inter",
    "Roboto",
    "Poppins",
    "Montserrat",
    "Open Sans",
    "Playfair Display",
];

pub const DEFAULT_ACCENT_COLOR: &str = "#3b82f6";
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Page color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Gradient,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Gradient => "gradient",
        };
        f.write_str(s)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "gradient" => Ok(Theme::Gradient),
            other => Err(format!(
                "unknown theme '{other}' (expected light, dark or gradient)"
            )),
        }
    }
}

/// Shape of the link buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Rounded,
    Square,
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ButtonStyle::Rounded => "rounded",
            ButtonStyle::Square => "square",
        };
        f.write_str(s)
    }
}

impl FromStr for ButtonStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rounded" => Ok(ButtonStyle::Rounded),
            "square" => Ok(ButtonStyle::Square),
            other => Err(format!(
                "unknown button style '{other}' (expected rounded or square)"
            )),
        }
    }
}

/// Presentation configuration for the public profile.
///
/// `display_name`, `bio` and `profile_image` are overrides; when absent the
/// page falls back to the [`User`] fields (see [`ThemeSettings::display_name_for`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub theme: Theme,
    pub button_style: ButtonStyle,
    pub accent_color: String,
    pub font_family: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            display_name: None,
            bio: None,
            profile_image: None,
            theme: Theme::default(),
            button_style: ButtonStyle::default(),
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl ThemeSettings {
    /// Shallow merge; `None` fields are left unchanged.
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(profile_image) = patch.profile_image {
            self.profile_image = profile_image;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(button_style) = patch.button_style {
            self.button_style = button_style;
        }
        if let Some(accent_color) = patch.accent_color {
            self.accent_color = accent_color;
        }
        if let Some(font_family) = patch.font_family {
            self.font_family = font_family;
        }
    }

    /// Name shown on the public page: the override, else the user's display name.
    pub fn display_name_for<'a>(&'a self, user: &'a User) -> &'a str {
        self.display_name.as_deref().unwrap_or(&user.display_name)
    }

    /// Image shown on the public page: the override, else the user's avatar.
    pub fn profile_image_for<'a>(&'a self, user: &'a User) -> Option<&'a str> {
        self.profile_image.as_deref().or(user.avatar.as_deref())
    }
}

/// Partial update for [`ThemeSettings`].
///
/// For the nullable overrides, `Some(None)` clears the override and
/// `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub display_name: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub profile_image: Option<Option<String>>,
    pub theme: Option<Theme>,
    pub button_style: Option<ButtonStyle>,
    pub accent_color: Option<String>,
    pub font_family: Option<String>,
}
