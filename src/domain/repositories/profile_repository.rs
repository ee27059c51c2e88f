//! Repository trait for persisting the profile snapshot.

use async_trait::async_trait;

use crate::domain::entities::ProfileSnapshot;

/// Errors raised by persistence backends.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Persistence backend unavailable: {0}")]
    Unavailable(String),
}

/// Storage for the user, link list and theme settings.
///
/// The snapshot shape is the serialization contract: stable camelCase field
/// names, `order` as an integer rank, nullable theme overrides.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryProfileRepository`] - process-local
/// - [`crate::infrastructure::persistence::JsonFileProfileRepository`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns the last saved snapshot.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(snapshot))` if one was saved before
    /// - `Ok(None)` for a fresh installation
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if stored data cannot be read or decoded.
    async fn load(&self) -> Result<Option<ProfileSnapshot>, PersistenceError>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the snapshot cannot be written.
    async fn save(&self, snapshot: &ProfileSnapshot) -> Result<(), PersistenceError>;

    /// Checks if the backend is usable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
