/* src/server/core/rust/src/memory.rs */

//! In-process content source backed by JSON fixtures.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;
use tracing::debug;

use crate::errors::QuireError;
use crate::source::{BoxFuture, ContentSource, DocQuery};

/// Serves documents from memory with the same draft visibility rules as the
/// REST API: documents whose `_status` is `"draft"` are only returned to
/// draft queries. Every request is recorded for inspection.
#[derive(Debug, Default)]
pub struct MemorySource {
  collections: HashMap<String, Vec<Value>>,
  failure: Option<QuireError>,
  failing_collections: HashMap<String, QuireError>,
  requests: Mutex<Vec<String>>,
}

impl MemorySource {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_doc(mut self, collection: &str, doc: Value) -> Self {
    self.collections.entry(collection.to_string()).or_default().push(doc);
    self
  }

  pub fn with_docs(mut self, collection: &str, docs: Vec<Value>) -> Self {
    self.collections.entry(collection.to_string()).or_default().extend(docs);
    self
  }

  /// Every request fails with `err`.
  pub fn failing(mut self, err: QuireError) -> Self {
    self.failure = Some(err);
    self
  }

  /// Requests against `collection` fail with `err`.
  pub fn fail_collection(mut self, collection: &str, err: QuireError) -> Self {
    self.failing_collections.insert(collection.to_string(), err);
    self
  }

  /// Build from `{ "<collection>": [doc, ...], ... }`.
  pub fn from_fixture(fixture: Value) -> Result<Self, QuireError> {
    let Value::Object(map) = fixture else {
      return Err(QuireError::validation("fixture must be a JSON object of collections"));
    };
    let mut source = Self::new();
    for (collection, docs) in map {
      let Value::Array(docs) = docs else {
        return Err(QuireError::validation(format!("fixture collection {collection:?} must be an array")));
      };
      source = source.with_docs(&collection, docs);
    }
    Ok(source)
  }

  pub fn from_fixture_file(path: &Path) -> Result<Self, QuireError> {
    let content = std::fs::read_to_string(path)
      .map_err(|e| QuireError::internal(format!("read {}: {e}", path.display())))?;
    let fixture: Value = serde_json::from_str(&content)
      .map_err(|e| QuireError::decode(format!("parse {}: {e}", path.display())))?;
    Self::from_fixture(fixture)
  }

  /// Requests seen so far, as `doc:<collection>/<slug>` or `docs:<collection>`.
  pub fn requests(&self) -> Vec<String> {
    self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  fn record(&self, entry: String) {
    debug!(request = %entry, "memory source");
    self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(entry);
  }

  fn check(&self, collection: &str) -> Result<(), QuireError> {
    if let Some(err) = self.failure.as_ref().or_else(|| self.failing_collections.get(collection)) {
      return Err(err.clone());
    }
    Ok(())
  }

  fn docs(&self, collection: &str) -> &[Value] {
    self.collections.get(collection).map(Vec::as_slice).unwrap_or_default()
  }
}

fn is_draft(doc: &Value) -> bool {
  doc.get("_status").and_then(Value::as_str) == Some("draft")
}

impl ContentSource for MemorySource {
  fn fetch_doc<'a>(
    &'a self,
    query: DocQuery<'a>,
  ) -> BoxFuture<'a, Result<Option<Value>, QuireError>> {
    Box::pin(async move {
      self.record(format!("doc:{}/{}", query.collection, query.slug));
      self.check(query.collection)?;
      Ok(
        self
          .docs(query.collection)
          .iter()
          .filter(|doc| query.draft || !is_draft(doc))
          .find(|doc| doc.get("slug").and_then(Value::as_str) == Some(query.slug))
          .cloned(),
      )
    })
  }

  fn fetch_docs<'a>(&'a self, collection: &'a str) -> BoxFuture<'a, Result<Vec<Value>, QuireError>> {
    Box::pin(async move {
      self.record(format!("docs:{collection}"));
      self.check(collection)?;
      Ok(self.docs(collection).iter().filter(|doc| !is_draft(doc)).cloned().collect())
    })
  }
}
