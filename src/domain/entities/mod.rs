//! Core domain entities representing the profile data model.
//!
//! Entities are plain data structures; the only behavior they carry is
//! applying their own partial-update patch.
//!
//! # Entity Types
//!
//! - [`User`] - The profile owner
//! - [`Link`] - One curated outbound link
//! - [`ThemeSettings`] - Appearance of the public page
//! - [`Analytics`] - Traffic snapshot
//! - [`ProfileSnapshot`] - What the persistence collaborator stores
//!
//! # Design Pattern
//!
//! Mutable entities have a matching patch struct (`UserPatch`, `LinkPatch`,
//! `ThemePatch`) where `None` means "leave unchanged".

pub mod analytics;
pub mod link;
pub mod snapshot;
pub mod theme;
pub mod user;

pub use analytics::{Analytics, DailyCount};
pub use link::{Link, LinkPatch};
pub use snapshot::ProfileSnapshot;
pub use theme::{ButtonStyle, FONT_CHOICES, Theme, ThemePatch, ThemeSettings};
pub use user::{User, UserPatch};
