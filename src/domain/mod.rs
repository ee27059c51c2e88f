//! Domain layer containing the profile model and its state store.
//!
//! It defines entities, the store that owns them, and the collaborator
//! traits, independent of HTTP and storage concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures and their patches
//! - [`store`] - [`store::ProfileStore`], the single source of truth
//! - [`repositories`] - Collaborator trait definitions
//! - [`persist_worker`] - Background saving of store snapshots
//!
//! # Change Propagation
//!
//! 1. An API handler calls a store command under the write lock
//! 2. The store notifies its listeners with a [`store::StoreEvent`]
//! 3. The persistence listener publishes a [`entities::ProfileSnapshot`]
//! 4. [`persist_worker::run_persist_worker`] saves the newest published snapshot
//!    via [`repositories::ProfileRepository`]

pub mod entities;
pub mod persist_worker;
pub mod repositories;
pub mod store;
