/* src/server/adapter/axum/src/handler/mod.rs */

mod meta;
mod page;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum::routing::get;
use quire_server::{DraftConfig, DraftContext, PageService, QuireParts};

pub(crate) struct AppState {
  pub pages: Arc<PageService>,
  pub draft: DraftConfig,
}

impl AppState {
  /// Draft state from the request's `Cookie` headers.
  pub(crate) fn draft_context(&self, headers: &HeaderMap) -> DraftContext {
    let cookies: Vec<&str> = headers.get_all(COOKIE).iter().filter_map(|v| v.to_str().ok()).collect();
    if cookies.is_empty() {
      return DraftContext::disabled();
    }
    DraftContext::from_cookie_header(Some(&cookies.join("; ")), &self.draft)
  }
}

pub(crate) fn build_router(parts: QuireParts) -> Router {
  let state = Arc::new(AppState { pages: parts.pages, draft: parts.draft });

  Router::new()
    .route("/_quire/paths", get(meta::handle_paths))
    .route("/_quire/meta", get(meta::handle_home_meta))
    .route("/_quire/meta/{slug}", get(meta::handle_meta))
    .route("/", get(page::handle_home))
    .route("/{slug}", get(page::handle_page))
    .fallback(page::handle_fallback)
    .with_state(state)
}
