//! Block list — a named, ordered collection of call-block entries.
//!
//! Entries are opaque JSON values: this crate never looks inside them, it
//! only preserves their order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DecodeError, ValidationError};

/// Directory (relative to the storage root) holding one list.
///
/// Only these names can ever reach the filesystem, which keeps caller-supplied
/// `dirname` values from escaping the storage root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListDir {
    /// Numbers that are always blocked.
    #[default]
    Blacklists,
    /// Numbers that are always let through.
    Whitelists,
}

impl ListDir {
    /// Every known list directory, in display order.
    pub const ALL: [Self; 2] = [Self::Blacklists, Self::Whitelists];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blacklists => "blacklists",
            Self::Whitelists => "whitelists",
        }
    }
}

impl fmt::Display for ListDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListDir {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownListDir(s.to_owned()))
    }
}

/// The list document as persisted on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockList {
    pub name: String,
    pub entries: Vec<Value>,
}

/// The list document as posted by callers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListPayload {
    pub label: String,
    pub items: Vec<Value>,
}

impl ListPayload {
    /// Decode a payload from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Payload`] when `raw` is not JSON or lacks
    /// `label`/`items`.
    pub fn from_json(raw: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(raw).map_err(DecodeError::Payload)
    }
}

impl From<ListPayload> for BlockList {
    fn from(payload: ListPayload) -> Self {
        Self {
            name: payload.label,
            entries: payload.items,
        }
    }
}

/// One page of a list, as returned to readers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage {
    /// Total number of entries in the list, independent of paging.
    pub num_rows: usize,
    pub label: String,
    pub items: Vec<Value>,
}

/// Short description of a stored list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    pub dirname: ListDir,
    pub name: String,
    pub num_rows: usize,
}

impl ListSummary {
    #[must_use]
    pub fn new(dirname: ListDir, list: &BlockList) -> Self {
        Self {
            dirname,
            name: list.name.clone(),
            num_rows: list.entries.len(),
        }
    }
}
