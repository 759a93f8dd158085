/* src/cli/core/src/serve.rs */

use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get_service;
use quire_server::QuireServer;
use quire_server_axum::IntoAxumRouter;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::QuireConfig;
use crate::ui;

/// Page routes plus `/static` from `site.public_dir`, with request tracing.
pub fn build_app(server: QuireServer, public_dir: Option<&Path>) -> Router {
  let mut router = server.into_axum_router();
  if let Some(dir) = public_dir {
    router = router.nest_service("/static", get_service(ServeDir::new(dir)));
  }
  router.layer(TraceLayer::new_for_http())
}

pub async fn run_serve(server: QuireServer, config: &QuireConfig) -> Result<()> {
  let public_dir = config.site.public_dir.as_deref().map(Path::new);
  if let Some(dir) = public_dir.filter(|d| !d.is_dir()) {
    ui::warn(&format!("public_dir {} does not exist, /static will 404", dir.display()));
  }
  let app = build_app(server, public_dir);

  let addr = config.listen_addr();
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  let local_addr = listener.local_addr()?;
  ui::ok(&format!("serving on http://localhost:{}", local_addr.port()));
  ui::detail(&format!("content API: {}", describe_source(config)));
  info!(%local_addr, "listening");

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await.context("server error")?;
  info!("shut down");
  Ok(())
}

fn describe_source(config: &QuireConfig) -> String {
  match config.cms.fixtures.as_deref() {
    Some(path) => format!("fixtures at {path}"),
    None => config.cms.api_url.clone(),
  }
}

async fn shutdown_signal() {
  // an error here means no signal handler could be installed; keep serving
  if tokio::signal::ctrl_c().await.is_err() {
    std::future::pending::<()>().await;
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::body::Body;
  use axum::http::{Request, StatusCode};
  use quire_server::MemorySource;
  use tower::ServiceExt;

  use super::*;

  async fn status(app: Router, uri: &str) -> StatusCode {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap().status()
  }

  #[tokio::test]
  async fn serves_static_files_next_to_pages() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("site.css"), "body{}").unwrap();
    let server = QuireServer::new().source(Arc::new(MemorySource::new()));
    let app = build_app(server, Some(tmp.path()));

    assert_eq!(status(app.clone(), "/static/site.css").await, StatusCode::OK);
    assert_eq!(status(app.clone(), "/static/missing.css").await, StatusCode::NOT_FOUND);
    assert_eq!(status(app.clone(), "/").await, StatusCode::OK);
    assert_eq!(status(app, "/about").await, StatusCode::NOT_FOUND);
  }

  #[test]
  fn source_description() {
    let mut config = QuireConfig::default();
    assert_eq!(describe_source(&config), "http://localhost:3000");
    config.cms.fixtures = Some("content.json".into());
    assert_eq!(describe_source(&config), "fixtures at content.json");
  }
}
