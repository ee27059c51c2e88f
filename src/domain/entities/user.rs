//! User entity holding the dashboard owner's identity.

use serde::{Deserialize, Serialize};

/// The profile owner.
///
/// Only loaded and partially updated; there is no create or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
}

impl User {
    /// Creates a user without an avatar.
    pub fn new(id: String, email: String, username: String, display_name: String) -> Self {
        Self {
            id,
            email,
            username,
            display_name,
            avatar: None,
        }
    }

    /// Applies a partial update. No format checks happen here.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
    }
}

/// Partial update for the user.
///
/// `avatar: Some(None)` removes the avatar; `Some(Some(r))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new(
            "u1".to_string(),
            "ada@example.com".to_string(),
            "ada".to_string(),
            "Ada Lovelace".to_string(),
        )
    }

    #[test]
    fn test_apply_keeps_untouched_fields() {
        let mut user = sample();
        user.apply(UserPatch {
            display_name: Some("Ada L.".to_string()),
            ..Default::default()
        });

        assert_eq!(user.display_name, "Ada L.");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.username, "ada");
    }

    #[test]
    fn test_apply_sets_and_clears_avatar() {
        let mut user = sample();
        user.apply(UserPatch {
            avatar: Some(Some("/uploads/abc.png".to_string())),
            ..Default::default()
        });
        assert_eq!(user.avatar.as_deref(), Some("/uploads/abc.png"));

        user.apply(UserPatch {
            avatar: Some(None),
            ..Default::default()
        });
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_apply_accepts_unvalidated_values() {
        let mut user = sample();
        user.apply(UserPatch {
            email: Some("no-at-sign".to_string()),
            username: Some("!!".to_string()),
            ..Default::default()
        });

        assert_eq!(user.email, "no-at-sign");
        assert_eq!(user.username, "!!");
    }
}
