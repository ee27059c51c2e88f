//! Utility functions shared across the application.
//!
//! - [`url_sanitizer`] - Link URL sanitization
//! - [`format`] - Compact number and percentage formatting
//! - [`id_generator`] - Link and user id generation
//! - [`validation`] - Username, email and upload checks

pub mod format;
pub mod id_generator;
pub mod url_sanitizer;
pub mod validation;
