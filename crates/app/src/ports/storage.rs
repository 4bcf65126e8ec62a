//! Storage port — repository trait for list persistence.

use std::future::Future;

use callblocker_domain::error::CallBlockerError;
use callblocker_domain::list::{BlockList, ListDir};

/// Whole-document persistence for [`BlockList`]s, one per [`ListDir`].
///
/// There is no partial update: a save replaces the stored list entirely.
pub trait ListRepository {
    /// Load the list stored under `dir`.
    ///
    /// Implementations return [`CallBlockerError::NotFound`] when nothing is
    /// stored and [`CallBlockerError::Decode`] when the stored document is
    /// malformed.
    fn load(
        &self,
        dir: ListDir,
    ) -> impl Future<Output = Result<BlockList, CallBlockerError>> + Send;

    /// Replace the list stored under `dir`.
    fn save(
        &self,
        dir: ListDir,
        list: BlockList,
    ) -> impl Future<Output = Result<(), CallBlockerError>> + Send;
}
