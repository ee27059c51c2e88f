//! JSON file implementation of the profile repository.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::entities::ProfileSnapshot;
use crate::domain::repositories::{PersistenceError, ProfileRepository};

/// Stores the snapshot as pretty-printed JSON in a single file.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a crash mid-write never leaves a truncated snapshot.
pub struct JsonFileProfileRepository {
    path: PathBuf,
}

impl JsonFileProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "profile.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ProfileRepository for JsonFileProfileRepository {
    async fn load(&self) -> Result<Option<ProfileSnapshot>, PersistenceError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let snapshot = serde_json::from_slice(&bytes)?;
        tracing::debug!(path = %self.path.display(), "Profile snapshot loaded");
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &ProfileSnapshot) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(snapshot)?;
        let temp = self.temp_path();
        fs::write(&temp, json).await?;
        fs::rename(&temp, &self.path).await?;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => fs::metadata(dir).await.map(|m| m.is_dir()).unwrap_or(false),
            None => true,
        }
    }
}
