//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the collaborator traits defined in
//! [`crate::domain::repositories`].
//!
//! # Modules
//!
//! - [`persistence`] - Profile snapshot storage (in-memory and JSON file)
//! - [`storage`] - Uploaded image storage (data URLs and local directory)
//! - [`analytics`] - Synthetic analytics source

pub mod analytics;
pub mod persistence;
pub mod storage;
