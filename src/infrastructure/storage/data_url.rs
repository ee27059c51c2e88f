//! Image storage that keeps the image inside the reference itself.

use async_trait::async_trait;
use base64::Engine as _;
use tracing::debug;

use crate::domain::repositories::{ImageStorage, ImageUpload, StorageError};

/// Encodes uploads as `data:<mime>;base64,<payload>` references.
///
/// Nothing is written anywhere; the reference is stored in the profile
/// snapshot. Suitable for development and small avatars.
pub struct DataUrlImageStorage;

impl DataUrlImageStorage {
    pub fn new() -> Self {
        debug!("Using data URL image storage (images inlined into the profile)");
        Self
    }
}

impl Default for DataUrlImageStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageStorage for DataUrlImageStorage {
    async fn store(&self, upload: ImageUpload) -> Result<String, StorageError> {
        let mime = upload
            .content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        let payload = base64::engine::general_purpose::STANDARD.encode(&upload.bytes);
        Ok(format!("data:{mime};base64,{payload}"))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_data_url_reference() {
        let storage = DataUrlImageStorage::new();

        let reference = storage
            .store(ImageUpload::new("image/PNG; q=1", b"hi!".to_vec()))
            .await
            .unwrap();

        assert_eq!(reference, "data:image/png;base64,aGkh");
    }
}
