/* src/server/core/rust/src/rest.rs */

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::config::CmsConfig;
use crate::errors::QuireError;
use crate::source::{BoxFuture, ContentSource, DocQuery};

/// Content source talking to the CMS REST API (`{api_url}/api/{collection}`).
#[derive(Debug, Clone)]
pub struct RestSource {
  client: Client,
  api_url: Url,
  depth: u32,
  list_limit: u32,
}

impl RestSource {
  pub fn new(config: &CmsConfig) -> Result<Self, QuireError> {
    let api_url = Url::parse(&config.api_url)
      .map_err(|e| QuireError::validation(format!("cms.api_url {:?}: {e}", config.api_url)))?;
    if api_url.cannot_be_a_base() {
      return Err(QuireError::validation(format!("cms.api_url {:?} cannot be a base URL", config.api_url)));
    }
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(concat!("quire/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| QuireError::internal(format!("http client: {e}")))?;
    Ok(Self { client, api_url, depth: config.depth, list_limit: config.list_limit })
  }

  fn collection_url(&self, collection: &str) -> Url {
    let mut url = self.api_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
      segments.pop_if_empty().extend(["api", collection]);
    }
    url
  }

  pub fn doc_url(&self, query: &DocQuery<'_>) -> Url {
    let mut url = self.collection_url(query.collection);
    {
      let mut pairs = url.query_pairs_mut();
      pairs
        .append_pair("where[slug][equals]", query.slug)
        .append_pair("depth", &self.depth.to_string())
        .append_pair("limit", "1");
      if query.draft {
        pairs.append_pair("draft", "true");
      }
    }
    url
  }

  pub fn list_url(&self, collection: &str) -> Url {
    let mut url = self.collection_url(collection);
    url
      .query_pairs_mut()
      .append_pair("depth", &self.depth.to_string())
      .append_pair("limit", &self.list_limit.to_string());
    url
  }

  async fn get_docs(&self, url: Url, token: Option<&str>) -> Result<Vec<Value>, QuireError> {
    debug!(%url, authorized = token.is_some(), "cms request");
    let mut request = self.client.get(url.clone());
    if let Some(token) = token {
      request = request.header(AUTHORIZATION, format!("JWT {token}"));
    }
    let response = request.send().await.map_err(|e| transport_error(&url, e))?;
    let status = response.status();
    let text = response.text().await.map_err(|e| transport_error(&url, e))?;

    let body: Value = match serde_json::from_str(&text) {
      Ok(body) => body,
      Err(_) if !status.is_success() => {
        return Err(QuireError::upstream(format!("{} answered {status}", url.path())));
      }
      Err(e) => return Err(QuireError::decode(format!("{}: invalid JSON: {e}", url.path()))),
    };
    if let Some(message) = error_messages(&body) {
      return Err(QuireError::upstream(format!("{}: {message}", url.path())));
    }
    if !status.is_success() {
      return Err(QuireError::upstream(format!("{} answered {status}", url.path())));
    }
    match body {
      Value::Object(mut map) => match map.remove("docs") {
        Some(Value::Array(docs)) => Ok(docs),
        _ => Err(QuireError::decode(format!("{}: response has no docs array", url.path()))),
      },
      _ => Err(QuireError::decode(format!("{}: response is not an object", url.path()))),
    }
  }
}

/// `{"errors":[{"message":..}]}` joined into one line.
fn error_messages(body: &Value) -> Option<String> {
  let errors = body.get("errors")?.as_array()?;
  if errors.is_empty() {
    return None;
  }
  let messages: Vec<&str> = errors
    .iter()
    .map(|e| e.get("message").and_then(Value::as_str).unwrap_or("unknown error"))
    .collect();
  Some(messages.join("; "))
}

fn transport_error(url: &Url, err: reqwest::Error) -> QuireError {
  if err.is_timeout() {
    QuireError::timeout(format!("{} timed out", url.path()))
  } else if err.is_decode() {
    QuireError::decode(format!("{}: {err}", url.path()))
  } else {
    QuireError::upstream(format!("{}: {err}", url.path()))
  }
}

impl ContentSource for RestSource {
  fn fetch_doc<'a>(
    &'a self,
    query: DocQuery<'a>,
  ) -> BoxFuture<'a, Result<Option<Value>, QuireError>> {
    Box::pin(async move {
      let token = if query.draft { query.token } else { None };
      let docs = self.get_docs(self.doc_url(&query), token).await?;
      Ok(docs.into_iter().next())
    })
  }

  fn fetch_docs<'a>(&'a self, collection: &'a str) -> BoxFuture<'a, Result<Vec<Value>, QuireError>> {
    Box::pin(async move { self.get_docs(self.list_url(collection), None).await })
  }
}
