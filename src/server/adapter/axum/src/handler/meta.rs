/* src/server/adapter/axum/src/handler/meta.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use super::AppState;

/// Slugs to prerender, `{ ok, data: { paths } }`.
pub(super) async fn handle_paths(State(state): State<Arc<AppState>>) -> Json<Value> {
  let paths = state.pages.static_params().await;
  Json(serde_json::json!({"ok": true, "data": {"paths": paths}}))
}

pub(super) async fn handle_home_meta(
  State(state): State<Arc<AppState>>,
  headers: HeaderMap,
) -> Json<Value> {
  metadata(&state, None, &headers).await
}

pub(super) async fn handle_meta(
  State(state): State<Arc<AppState>>,
  Path(slug): Path<String>,
  headers: HeaderMap,
) -> Json<Value> {
  metadata(&state, Some(&slug), &headers).await
}

async fn metadata(state: &AppState, slug: Option<&str>, headers: &HeaderMap) -> Json<Value> {
  let draft = state.draft_context(headers);
  let meta = state.pages.metadata(slug, &draft).await;
  Json(serde_json::json!({"ok": true, "data": meta}))
}
