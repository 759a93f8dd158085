/* src/server/adapter/axum/tests/router.rs */

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use quire_server::{MemorySource, QuireError, QuireServer, SiteConfig};
use quire_server_axum::IntoAxumRouter;
use serde_json::{Value, json};
use tower::ServiceExt;

fn fixture() -> MemorySource {
  MemorySource::new()
    .with_doc(
      "pages",
      json!({
        "slug": "home",
        "hero": {"type": "highImpact", "richText": [{"text": "CMS home hero"}]},
        "meta": {"title": "Welcome"}
      }),
    )
    .with_doc(
      "pages",
      json!({
        "slug": "about",
        "hero": {"type": "lowImpact", "richText": [{"text": "About hero"}]},
        "layout": [{"blockType": "cta", "richText": [{"text": "About block"}]}],
        "meta": {"title": "About us", "description": "Who we are"}
      }),
    )
    .with_doc(
      "pages",
      json!({"slug": "preview", "_status": "draft", "hero": {"type": "none"}, "meta": {"title": "Secret"}}),
    )
    .with_docs("categories", vec![json!({"id": "c1", "title": "Mugs"})])
}

fn router(source: MemorySource) -> Router {
  let site = SiteConfig { name: "Shop".into(), ..SiteConfig::default() };
  QuireServer::new().source(Arc::new(source)).site(site).into_axum_router()
}

async fn get(router: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, header::HeaderMap, String) {
  let mut request = Request::builder().uri(uri);
  if let Some(cookie) = cookie {
    request = request.header(header::COOKIE, cookie);
  }
  let response = router.oneshot(request.body(Body::empty()).unwrap()).await.unwrap();
  let status = response.status();
  let headers = response.headers().clone();
  let body = response.into_body().collect().await.unwrap().to_bytes();
  (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn root_serves_home_layout() {
  let (status, headers, body) = get(router(fixture()), "/", None).await;
  assert_eq!(status, StatusCode::OK);
  assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
  assert!(body.starts_with("<!doctype html>"));
  assert!(body.contains("<title>Welcome</title>"));
  assert!(body.contains("CMS home hero"));
  assert!(body.contains("Mugs"));
}

#[tokio::test]
async fn home_slug_matches_root() {
  let (_, _, root) = get(router(fixture()), "/", None).await;
  let (_, _, home) = get(router(fixture()), "/home", None).await;
  assert_eq!(root, home);
}

#[tokio::test]
async fn generic_page() {
  let (status, _, body) = get(router(fixture()), "/about", None).await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<title>About us</title>"));
  assert!(body.contains("About block"));
  assert!(!body.contains("Shop by Categories"));
}

#[tokio::test]
async fn unknown_page_is_html_404() {
  let (status, headers, body) = get(router(fixture()), "/missing", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
  assert!(body.contains("Page not found | Shop"));
}

#[tokio::test]
async fn unreachable_cms_still_serves_home() {
  let (status, _, body) =
    get(router(MemorySource::new().failing(QuireError::upstream("down"))), "/", None).await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("Quire storefront"));
}

#[tokio::test]
async fn draft_cookie_reveals_drafts() {
  let (status, _, _) = get(router(fixture()), "/preview", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, headers, body) =
    get(router(fixture()), "/preview", Some("quire_draft=1; payload-token=abc")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(headers[header::CACHE_CONTROL], "private, no-store");
  assert!(body.contains("<title>Secret</title>"));
}

#[tokio::test]
async fn paths_endpoint() {
  let (status, _, body) = get(router(fixture()), "/_quire/paths", None).await;
  assert_eq!(status, StatusCode::OK);
  let json: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(json, json!({"ok": true, "data": {"paths": ["home", "about"]}}));
}

#[tokio::test]
async fn paths_endpoint_empty_on_failure() {
  let source = MemorySource::new().failing(QuireError::timeout("slow"));
  let (_, _, body) = get(router(source), "/_quire/paths", None).await;
  let json: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(json["data"]["paths"], json!([]));
}

#[tokio::test]
async fn meta_endpoint() {
  let (status, _, body) = get(router(fixture()), "/_quire/meta/about", None).await;
  assert_eq!(status, StatusCode::OK);
  let json: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(json["data"]["title"], "About us");
  assert_eq!(json["data"]["description"], "Who we are");
  assert_eq!(json["data"]["openGraph"]["siteName"], "Shop");
  assert_eq!(json["data"]["openGraph"]["url"], "http://localhost:8080/about");
}

#[tokio::test]
async fn home_meta_falls_back_when_cms_is_down() {
  let source = MemorySource::new().failing(QuireError::upstream("down"));
  let (_, _, body) = get(router(source), "/_quire/meta", None).await;
  let json: Value = serde_json::from_str(&body).unwrap();
  let builtin = quire_server::static_home();
  assert_eq!(json["data"]["title"], json!(builtin.meta.and_then(|m| m.title)));
}

#[tokio::test]
async fn unknown_endpoint_is_json_error() {
  let (status, headers, body) = get(router(fixture()), "/_quire/nope/deeper", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("application/json"));
  let json: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(json["ok"], false);
  assert_eq!(json["error"]["code"], "NOT_FOUND");
  assert_eq!(json["error"]["message"], "no endpoint at /_quire/nope/deeper");
}

#[tokio::test]
async fn nested_unknown_path_is_html_404() {
  let (status, headers, body) = get(router(fixture()), "/products/mugs", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
  assert!(body.contains("Page not found | Shop"));
}
