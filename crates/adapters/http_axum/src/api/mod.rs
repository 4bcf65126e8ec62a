//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod lists;

use axum::Router;
use axum::routing::get;

use callblocker_app::ports::ListRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<LR>() -> Router<AppState<LR>>
where
    LR: ListRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/list", get(lists::read::<LR>).post(lists::submit::<LR>))
        .route("/lists", get(lists::summaries::<LR>))
}
