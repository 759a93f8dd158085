/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use quire_server::QuireError;
use tracing::debug;

use super::AppState;
use crate::error::AxumError;

pub(super) async fn handle_home(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
  render(&state, None, &headers).await
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path(slug): Path<String>,
  headers: HeaderMap,
) -> Response {
  render(&state, Some(&slug), &headers).await
}

async fn render(state: &AppState, slug: Option<&str>, headers: &HeaderMap) -> Response {
  let draft = state.draft_context(headers);
  match state.pages.render(slug, &draft).await {
    Ok(page) => {
      let mut response = Html(page.html).into_response();
      // previews must never be cached by a shared proxy
      if draft.enabled {
        response.headers_mut().insert(CACHE_CONTROL, HeaderValue::from_static("private, no-store"));
      }
      response
    }
    Err(err) => {
      debug!(slug = slug.unwrap_or_default(), code = err.code(), "page not found");
      not_found_page(state)
    }
  }
}

fn not_found_page(state: &AppState) -> Response {
  (StatusCode::NOT_FOUND, Html(state.pages.render_not_found())).into_response()
}

/// Unmatched paths: JSON error under `/_quire/`, the 404 document elsewhere.
pub(super) async fn handle_fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
  let path = uri.path();
  if path.starts_with("/_quire/") {
    return AxumError::from(QuireError::not_found(format!("no endpoint at {path}"))).into_response();
  }
  debug!(path, "no route");
  not_found_page(&state)
}
