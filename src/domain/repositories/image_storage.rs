//! Seam for the image storage collaborator.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage backend rejected the image: {0}")]
    Rejected(String),
}

/// An image received from the dashboard.
///
/// Size and MIME type are checked by the caller before storing
/// (see [`crate::utils::validation::validate_image_upload`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes,
        }
    }

    /// File extension matching the content type, `img` when unknown.
    pub fn extension(&self) -> &'static str {
        let mime = self
            .content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match mime.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/gif" => "gif",
            "image/webp" => "webp",
            "image/svg+xml" => "svg",
            "image/avif" => "avif",
            _ => "img",
        }
    }
}

/// Stores uploaded images and returns a reference usable as `avatar` or
/// `profileImage`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Stores the image and returns a stable reference (URL or data URL).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot keep the image.
    async fn store(&self, upload: ImageUpload) -> Result<String, StorageError>;

    /// Checks if the backend is usable.
    async fn health_check(&self) -> bool;
}
