//! # callblocker-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **list endpoint** (`/api/list`) used by the web UI's data store:
//!   paged reads, whole-list writes
//! - Serve **list summaries** (`/api/lists`) and a health check
//! - Turn loosely-typed request parameters into typed, validated values
//!   before any application service is called
//! - Map application results into HTTP responses, including the
//!   `Content-Range` paging header
//!
//! ## Dependency rule
//! Depends on `callblocker-app` (for port traits and services) and
//! `callblocker-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
