//! Process-local profile repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::ProfileSnapshot;
use crate::domain::repositories::{PersistenceError, ProfileRepository};

/// Keeps the last saved snapshot in memory.
///
/// Used when no `DATA_FILE` is configured and in tests.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    snapshot: RwLock<Option<ProfileSnapshot>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        debug!("Using in-memory profile repository (nothing survives a restart)");
        Self::default()
    }

    /// Starts with an existing snapshot, as if it had been saved before.
    pub fn with_snapshot(snapshot: ProfileSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn load(&self) -> Result<Option<ProfileSnapshot>, PersistenceError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &ProfileSnapshot) -> Result<(), PersistenceError> {
        *self.snapshot.write().await = Some(snapshot.clone());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
