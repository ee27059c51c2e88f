//! Collaborator trait definitions for the domain layer.
//!
//! These traits are the seams to everything outside the process: where the
//! profile is persisted, where traffic numbers come from and where uploaded
//! images go. Concrete implementations live in `crate::infrastructure`.
//!
//! # Available Seams
//!
//! - [`ProfileRepository`] - Load/save the profile snapshot
//! - [`AnalyticsSource`] - Traffic snapshot over a trailing window
//! - [`ImageStorage`] - Uploaded avatar and profile images
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod analytics_source;
pub mod image_storage;
pub mod profile_repository;

pub use analytics_source::{AnalyticsError, AnalyticsSource};
pub use image_storage::{ImageStorage, ImageUpload, StorageError};
pub use profile_repository::{PersistenceError, ProfileRepository};

#[cfg(test)]
pub use analytics_source::MockAnalyticsSource;
#[cfg(test)]
pub use image_storage::MockImageStorage;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
