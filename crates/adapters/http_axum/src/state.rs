//! Shared application state for axum handlers.

use std::sync::Arc;

use callblocker_app::ports::ListRepository;
use callblocker_app::services::list_service::ListService;

/// Application state shared across all axum handlers.
///
/// Generic over the list repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<LR> {
    /// List read/write service.
    pub list_service: Arc<ListService<LR>>,
}

impl<LR> Clone for AppState<LR> {
    fn clone(&self) -> Self {
        Self {
            list_service: Arc::clone(&self.list_service),
        }
    }
}

impl<LR> AppState<LR>
where
    LR: ListRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(list_service: ListService<LR>) -> Self {
        Self {
            list_service: Arc::new(list_service),
        }
    }
}
