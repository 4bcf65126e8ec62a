//! JSON handlers for block lists.
//!
//! The list endpoint keeps the parameter names the web UI's data store
//! already sends: `dirname`, `start`, `count` and, for writes, a form field
//! `data` carrying the whole list as JSON.

use axum::Json;
use axum::extract::{Form, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use callblocker_app::ports::ListRepository;
use callblocker_app::services::list_service::ListWindow;
use callblocker_domain::error::{CallBlockerError, ValidationError};
use callblocker_domain::list::{ListDir, ListPayload, ListSummary};
use callblocker_domain::page::PageRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// Content type the web UI's data store expects on list pages.
const PAGE_CONTENT_TYPE: &str = "text/json";

/// Raw list parameters, as found in the query string or a form body.
///
/// Everything is kept as text so that a malformed number is reported as a
/// validation error instead of a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub dirname: Option<String>,
    pub start: Option<String>,
    pub count: Option<String>,
    pub data: Option<String>,
}

impl ListQuery {
    /// Overlay form-body parameters onto query parameters; body values win.
    ///
    /// `data` is only ever taken from the body.
    #[must_use]
    pub fn merge(self, body: Self) -> Self {
        Self {
            dirname: body.dirname.or(self.dirname),
            start: body.start.or(self.start),
            count: body.count.or(self.count),
            data: body.data,
        }
    }

    /// The addressed list, defaulting to [`ListDir::Blacklists`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownListDir`] for anything that is not a
    /// known list directory.
    pub fn list_dir(&self) -> Result<ListDir, ValidationError> {
        self.dirname
            .as_deref()
            .map(str::parse::<ListDir>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// The requested page window, defaulting to the whole list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidInteger`] when `start` or `count` is
    /// not a non-negative integer.
    pub fn page(&self) -> Result<PageRequest, ValidationError> {
        let start = parse_index("start", self.start.as_deref())?.unwrap_or(0);
        let count = parse_index("count", self.count.as_deref())?;
        Ok(PageRequest::new(start, count))
    }
}

fn parse_index(param: &'static str, value: Option<&str>) -> Result<Option<usize>, ValidationError> {
    value
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|_| ValidationError::InvalidInteger {
                    param,
                    value: raw.to_owned(),
                })
        })
        .transpose()
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    /// 200 OK with one page of the list and its `Content-Range`.
    Page(ListWindow),
    /// 204 No Content after the list was replaced.
    Written,
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Page(window) => (
                [
                    (header::CONTENT_TYPE, PAGE_CONTENT_TYPE.to_owned()),
                    (header::CONTENT_RANGE, window.range.to_string()),
                ],
                Json(window.page),
            )
                .into_response(),
            Self::Written => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the summaries endpoint.
pub enum SummariesResponse {
    Ok(Json<Vec<ListSummary>>),
}

impl IntoResponse for SummariesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/list?dirname=&start=&count=`
pub async fn read<LR>(
    State(state): State<AppState<LR>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    LR: ListRepository + Send + Sync + 'static,
{
    read_page(&state, &query).await
}

/// `POST /api/list` — form body; replaces the list when `data` is present,
/// otherwise behaves like a read.
pub async fn submit<LR>(
    State(state): State<AppState<LR>>,
    Query(query): Query<ListQuery>,
    Form(body): Form<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    LR: ListRepository + Send + Sync + 'static,
{
    let query = query.merge(body);
    let Some(data) = query.data.as_deref() else {
        return read_page(&state, &query).await;
    };

    let dir = query.list_dir()?;
    let payload = ListPayload::from_json(data).map_err(CallBlockerError::from)?;
    state.list_service.replace(dir, payload).await?;
    Ok(ListResponse::Written)
}

/// `GET /api/lists` — every stored list with its name and size.
pub async fn summaries<LR>(
    State(state): State<AppState<LR>>,
) -> Result<SummariesResponse, ApiError>
where
    LR: ListRepository + Send + Sync + 'static,
{
    let summaries = state.list_service.summaries().await?;
    Ok(SummariesResponse::Ok(Json(summaries)))
}

async fn read_page<LR>(state: &AppState<LR>, query: &ListQuery) -> Result<ListResponse, ApiError>
where
    LR: ListRepository + Send + Sync + 'static,
{
    let dir = query.list_dir()?;
    let page = query.page()?;
    let window = state.list_service.read_page(dir, page).await?;
    Ok(ListResponse::Page(window))
}
