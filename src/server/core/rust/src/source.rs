/* src/server/core/rust/src/source.rs */

use std::future::Future;
use std::pin::Pin;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::QuireError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Lookup of a single document by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocQuery<'a> {
  pub collection: &'a str,
  pub slug: &'a str,
  pub draft: bool,
  pub token: Option<&'a str>,
}

impl<'a> DocQuery<'a> {
  pub fn new(collection: &'a str, slug: &'a str) -> Self {
    Self { collection, slug, draft: false, token: None }
  }

  pub fn draft(mut self, draft: bool, token: Option<&'a str>) -> Self {
    self.draft = draft;
    self.token = token;
    self
  }
}

/// Where page content comes from. Returns raw JSON so sources stay ignorant
/// of the content schema; use [`fetch_doc`] / [`fetch_docs`] for typed access.
pub trait ContentSource: Send + Sync {
  /// First document in `collection` whose slug matches, if any.
  fn fetch_doc<'a>(&'a self, query: DocQuery<'a>)
  -> BoxFuture<'a, Result<Option<Value>, QuireError>>;

  /// All published documents of `collection`.
  fn fetch_docs<'a>(&'a self, collection: &'a str) -> BoxFuture<'a, Result<Vec<Value>, QuireError>>;
}

pub async fn fetch_doc<T: DeserializeOwned>(
  source: &dyn ContentSource,
  query: DocQuery<'_>,
) -> Result<Option<T>, QuireError> {
  let Some(raw) = source.fetch_doc(query).await? else {
    return Ok(None);
  };
  serde_json::from_value(raw).map(Some).map_err(|e| {
    QuireError::decode(format!("{} document {:?}: {e}", query.collection, query.slug))
  })
}

pub async fn fetch_docs<T: DeserializeOwned>(
  source: &dyn ContentSource,
  collection: &str,
) -> Result<Vec<T>, QuireError> {
  let raw = source.fetch_docs(collection).await?;
  raw
    .into_iter()
    .map(|doc| {
      serde_json::from_value(doc).map_err(|e| QuireError::decode(format!("{collection} list: {e}")))
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::memory::MemorySource;
  use quire_engine::{Category, Page};
  use serde_json::json;

  #[tokio::test]
  async fn typed_doc_fetch() {
    let source = MemorySource::new().with_doc("pages", json!({"id": 7, "slug": "about", "title": "About"}));
    let page: Option<Page> = fetch_doc(&source, DocQuery::new("pages", "about")).await.unwrap();
    let page = page.unwrap();
    assert_eq!(page.id.as_deref(), Some("7"));
    assert_eq!(page.title.as_deref(), Some("About"));

    let missing: Option<Page> = fetch_doc(&source, DocQuery::new("pages", "nope")).await.unwrap();
    assert!(missing.is_none());
  }

  #[tokio::test]
  async fn decode_failure_is_reported() {
    let source = MemorySource::new().with_doc("pages", json!({"slug": "about", "title": ["not", "a", "string"]}));
    let err = fetch_doc::<Page>(&source, DocQuery::new("pages", "about")).await.unwrap_err();
    assert_eq!(err.code(), "DECODE_ERROR");
    assert!(err.message().contains("about"));
  }

  #[tokio::test]
  async fn typed_list_fetch() {
    let source = MemorySource::new()
      .with_docs("categories", vec![json!({"id": "c1", "title": "Mugs"}), json!({"id": "c2"})]);
    let categories: Vec<Category> = fetch_docs(&source, "categories").await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].title.as_deref(), Some("Mugs"));

    let err = fetch_docs::<Category>(&MemorySource::new().with_doc("categories", json!("x")), "categories")
      .await
      .unwrap_err();
    assert_eq!(err.code(), "DECODE_ERROR");
  }
}
