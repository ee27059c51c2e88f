//! Dashboard operations on the profile store.
//!
//! This is the "presenting component" of the profile: it sanitizes and
//! validates user input, then calls the store. The store itself accepts
//! anything, so every rule enforced here is advisory.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{
    Analytics, Link, LinkPatch, ThemePatch, ThemeSettings, User, UserPatch,
};
use crate::domain::repositories::{ImageStorage, ImageUpload};
use crate::domain::store::ProfileStore;
use crate::error::AppError;
use crate::utils::url_sanitizer::sanitize_url;
use crate::utils::validation::{validate_email, validate_image_upload, validate_username};

/// Where an uploaded image ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    /// `User::avatar`
    Avatar,
    /// `ThemeSettings::profile_image`
    ProfileImage,
}

/// Everything the mobile preview needs to render the public page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user: User,
    pub links: Vec<Link>,
    pub theme_settings: ThemeSettings,
    pub resolved_display_name: String,
    pub resolved_profile_image: Option<String>,
}

/// Service wrapping the shared store with input handling.
pub struct ProfileService<I: ImageStorage + ?Sized> {
    store: Arc<RwLock<ProfileStore>>,
    images: Arc<I>,
    max_upload_bytes: usize,
}

impl<I: ImageStorage + ?Sized> ProfileService<I> {
    /// Creates a new profile service.
    pub fn new(store: Arc<RwLock<ProfileStore>>, images: Arc<I>, max_upload_bytes: usize) -> Self {
        Self {
            store,
            images,
            max_upload_bytes,
        }
    }

    pub fn store(&self) -> &Arc<RwLock<ProfileStore>> {
        &self.store
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Returns the profile as the public page would show it.
    pub async fn profile(&self) -> ProfileView {
        let store = self.store.read().await;
        let user = store.user().clone();
        let theme_settings = store.theme_settings().clone();
        ProfileView {
            resolved_display_name: theme_settings.display_name_for(&user).to_string(),
            resolved_profile_image: theme_settings.profile_image_for(&user).map(str::to_string),
            links: store.links().to_vec(),
            user,
            theme_settings,
        }
    }

    /// Links in display order.
    pub async fn links(&self) -> Vec<Link> {
        self.store.read().await.links().to_vec()
    }

    pub async fn user(&self) -> User {
        self.store.read().await.user().clone()
    }

    pub async fn theme_settings(&self) -> ThemeSettings {
        self.store.read().await.theme_settings().clone()
    }

    pub async fn analytics_with_links(&self) -> (Analytics, Vec<Link>) {
        let store = self.store.read().await;
        (store.analytics().clone(), store.links().to_vec())
    }

    /// Adds a link after sanitizing its URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is blank or the URL is
    /// rejected by the sanitizer.
    pub async fn create_link(
        &self,
        title: &str,
        url: &str,
        enabled: bool,
    ) -> Result<Link, AppError> {
        let title = require_title(title)?;
        let url = require_url(url)?;

        let link = self.store.write().await.add_link(title, url, enabled);
        tracing::info!(id = %link.id, url = %link.url, "Link created");
        Ok(link)
    }

    /// Updates a link, sanitizing the URL if one is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank title or rejected URL and
    /// [`AppError::NotFound`] if the link does not exist.
    pub async fn update_link(
        &self,
        id: &str,
        title: Option<&str>,
        url: Option<&str>,
        enabled: Option<bool>,
    ) -> Result<Link, AppError> {
        let patch = LinkPatch {
            title: title.map(require_title).transpose()?,
            url: url.map(require_url).transpose()?,
            enabled,
        };

        Ok(self.store.write().await.update_link(id, patch)?)
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist.
    pub async fn delete_link(&self, id: &str) -> Result<Link, AppError> {
        let removed = self.store.write().await.delete_link(id)?;
        tracing::info!(id = %removed.id, "Link deleted");
        Ok(removed)
    }

    /// Applies a new display order and returns the reordered links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] unless `ids` is a permutation of the
    /// current link ids.
    pub async fn reorder_links(&self, ids: &[String]) -> Result<Vec<Link>, AppError> {
        let mut store = self.store.write().await;
        store.reorder_links(ids)?;
        Ok(store.links().to_vec())
    }

    /// Counts a click-through on a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist.
    pub async fn record_click(&self, id: &str) -> Result<Link, AppError> {
        Ok(self.store.write().await.record_click(id)?)
    }

    pub async fn update_theme_settings(&self, patch: ThemePatch) -> ThemeSettings {
        self.store.write().await.update_theme_settings(patch)
    }

    /// Updates the user after checking username, email and display name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any provided field is malformed.
    pub async fn update_user(&self, patch: UserPatch) -> Result<User, AppError> {
        if let Some(username) = &patch.username {
            validate_username(username)?;
        }
        if let Some(email) = &patch.email {
            validate_email(email)?;
        }
        if patch.display_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::bad_request(
                "Display name cannot be empty",
                json!({}),
            ));
        }

        Ok(self.store.write().await.update_user(patch))
    }

    /// Stores an uploaded image and points the avatar or the profile image at it.
    ///
    /// Returns the stored reference.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a non-image or oversized upload
    /// and [`AppError::Internal`] if storage fails.
    pub async fn upload_image(
        &self,
        target: ImageTarget,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        validate_image_upload(content_type, bytes.len(), self.max_upload_bytes)?;

        let size = bytes.len();
        let upload = ImageUpload::new(content_type.unwrap_or_default(), bytes);
        let reference = self.images.store(upload).await?;
        tracing::info!(?target, size, "Image stored");

        let mut store = self.store.write().await;
        match target {
            ImageTarget::Avatar => {
                store.update_user(UserPatch {
                    avatar: Some(Some(reference.clone())),
                    ..Default::default()
                });
            }
            ImageTarget::ProfileImage => {
                store.update_theme_settings(ThemePatch {
                    profile_image: Some(Some(reference.clone())),
                    ..Default::default()
                });
            }
        }

        Ok(reference)
    }

    /// Swaps in a freshly fetched analytics snapshot.
    pub async fn replace_analytics(&self, analytics: Analytics) {
        self.store.write().await.replace_analytics(analytics);
    }
}

fn require_title(title: &str) -> Result<String, AppError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request("Title cannot be empty", json!({})));
    }
    Ok(trimmed.to_string())
}

fn require_url(url: &str) -> Result<String, AppError> {
    let sanitized = sanitize_url(url.trim());
    if sanitized.is_empty() {
        return Err(AppError::bad_request(
            "Please enter a valid URL",
            json!({ "url": url }),
        ));
    }
    Ok(sanitized)
}
