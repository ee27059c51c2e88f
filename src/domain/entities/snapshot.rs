//! Persistable view of the profile.

use serde::{Deserialize, Serialize};

use super::{Link, ThemeSettings, User};

/// Everything the persistence collaborator stores and returns on load.
///
/// Analytics is deliberately absent: it comes from its own collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub user: User,
    pub links: Vec<Link>,
    #[serde(default)]
    pub theme_settings: ThemeSettings,
}

impl ProfileSnapshot {
    /// A fresh profile with no links and default appearance.
    pub fn starter(user: User) -> Self {
        Self {
            user,
            links: Vec::new(),
            theme_settings: ThemeSettings::default(),
        }
    }
}
