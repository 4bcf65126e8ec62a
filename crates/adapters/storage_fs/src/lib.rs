//! # callblocker-adapter-storage-fs
//!
//! Flat-file JSON persistence adapter using `tokio::fs`.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `callblocker-app::ports::storage`
//! - Resolve list files as `<data_dir>/<dirname>/main.json`
//! - Map between domain lists and pretty-printed JSON documents
//!
//! ## Dependency rule
//! Depends on `callblocker-app` (for port traits) and `callblocker-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod list_repo;

pub use error::StorageError;
pub use list_repo::{Config, FsListRepository};
