//! Image storage backed by a local directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::fs;

use crate::domain::repositories::{ImageStorage, ImageUpload, StorageError};

/// Number of hex characters of the content hash used in file names.
const NAME_HASH_LEN: usize = 16;

/// Writes uploads into a directory under content-addressed names.
///
/// The file name is derived from the SHA-256 of the bytes, so uploading the
/// same image twice yields the same reference. References are
/// `<public_prefix>/<name>`, e.g. `/uploads/3f1a9c0b7d2e4f6a.png`.
pub struct LocalImageStorage {
    dir: PathBuf,
    public_prefix: String,
}

impl LocalImageStorage {
    pub fn new(dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name(upload: &ImageUpload) -> String {
        let digest = hex::encode(Sha256::digest(&upload.bytes));
        format!("{}.{}", &digest[..NAME_HASH_LEN], upload.extension())
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, upload: ImageUpload) -> Result<String, StorageError> {
        fs::create_dir_all(&self.dir).await?;

        let name = Self::file_name(&upload);
        let path = self.dir.join(&name);
        if fs::try_exists(&path).await? {
            tracing::debug!(name, "Image already stored");
        } else {
            fs::write(&path, &upload.bytes).await?;
        }

        Ok(format!("{}/{}", self.public_prefix, name))
    }

    async fn health_check(&self) -> bool {
        fs::create_dir_all(&self.dir).await.is_ok()
    }
}
