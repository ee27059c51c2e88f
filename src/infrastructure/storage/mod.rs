//! Uploaded image storage.
//!
//! Provides two [`ImageStorage`](crate::domain::repositories::ImageStorage)
//! implementations:
//! - [`DataUrlImageStorage`] - Inlines the image into a `data:` URL
//! - [`LocalImageStorage`] - Writes content-addressed files to a directory

mod data_url;
mod local_dir;

pub use data_url::DataUrlImageStorage;
pub use local_dir::LocalImageStorage;
