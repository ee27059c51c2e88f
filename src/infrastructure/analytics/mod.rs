//! Analytics sources.

mod synthetic;

pub use synthetic::SyntheticAnalyticsSource;
