use crate::bank::PageWindow;
use crate::error::TriviaError;
use crate::server::router::TriviaState;
use crate::utils::logging::debug_json;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::num::{IntErrorKind, NonZeroUsize};
use tracing::debug;

/// JSON body whose rejections are reported with the trivia error body.
pub struct TriviaJson<T>(pub T);

impl<T, S> FromRequest<S> for TriviaJson<T>
where
    T: DeserializeOwned + Serialize,
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();
        let Json(body) = Json::<T>::from_request(req, state).await?;

        debug_json(&body, |pretty_body| {
            debug!(path = %path, body = %pretty_body, "request body");
        });

        Ok(TriviaJson(body))
    }
}

#[derive(Debug, Deserialize)]
struct PageParams {
    page: Option<String>,
}

/// `?page=N`. Absent or non-numeric means page 1; zero and negative pages are rejected.
/// Oversized numbers select an empty page.
pub struct RequestedPage(pub PageWindow);

impl FromRequestParts<TriviaState> for RequestedPage {
    type Rejection = TriviaError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &TriviaState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| TriviaError::BadRequest(e.body_text()))?;

        page_window(params.page.as_deref(), state.bank.page_size()).map(RequestedPage)
    }
}

/// Numbers too large for `i64` still name a page; they lie past any result set.
fn page_window(raw: Option<&str>, size: NonZeroUsize) -> Result<PageWindow, TriviaError> {
    let Some(raw) = raw else {
        return Ok(PageWindow::first(size));
    };
    match raw.trim().parse::<i64>() {
        Ok(page) => PageWindow::from_requested(Some(page), size),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(PageWindow::new(NonZeroUsize::MAX, size)),
            IntErrorKind::NegOverflow => Err(TriviaError::InvalidPage(i64::MIN)),
            _ => Ok(PageWindow::first(size)),
        },
    }
}

/// Integer path id. Anything else does not name a resource, so it is a 404.
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = TriviaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<i64>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| PathId(id))
            .map_err(|_| TriviaError::RouteNotFound(parts.uri.path().to_string()))
    }
}
