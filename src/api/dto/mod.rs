//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization (camelCase, to
//! match the profile snapshot) and validator for input validation.

pub mod health;
pub mod link;
pub mod theme;
pub mod user;
