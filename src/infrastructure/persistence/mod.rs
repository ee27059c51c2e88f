//! Profile snapshot repositories.
//!
//! - [`InMemoryProfileRepository`] - lives as long as the process
//! - [`JsonFileProfileRepository`] - survives restarts

mod in_memory;
mod json_file;

pub use in_memory::InMemoryProfileRepository;
pub use json_file::JsonFileProfileRepository;
