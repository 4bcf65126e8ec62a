//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CallBlockerError`] via `From` at the port boundary.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CallBlockerError {
    /// A request parameter failed validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The addressed list does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A posted payload or a stored list is not valid JSON of the expected shape.
    #[error("decode error")]
    Decode(#[from] DecodeError),

    /// The storage backend failed (read, write, serialization).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Request parameters that cannot be turned into a list address or page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown list directory {0:?}")]
    UnknownListDir(String),

    #[error("parameter `{param}` must be a non-negative integer, got {value:?}")]
    InvalidInteger { param: &'static str, value: String },
}

/// A lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// JSON that could not be decoded into the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The `data` parameter of a write request.
    #[error("malformed list payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// A list file already on disk.
    #[error("stored list {list} is malformed: {source}")]
    StoredList {
        list: String,
        #[source]
        source: serde_json::Error,
    },
}
