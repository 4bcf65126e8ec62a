//! # callblocker-domain
//!
//! Pure domain model for the callblocker list service.
//!
//! ## Responsibilities
//! - Foundational types: error conventions shared by every layer
//! - Define **list directories** (the validated set of lists that may be addressed)
//! - Define **block lists** (the on-disk `{name, entries}` document)
//! - Define **list payloads** (the `{label, items}` shape callers post)
//! - Define **pages** (pagination windows and the `Content-Range` they advertise)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod list;
pub mod page;
