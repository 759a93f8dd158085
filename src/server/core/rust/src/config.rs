/* src/server/core/rust/src/config.rs */

//! Site and content API settings. Every field has a default so a partial
//! `quire.toml` (or none at all) still yields a working configuration.

use quire_engine::Promotion;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::errors::QuireError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
  pub name: String,
  /// Public origin; media urls and `og:url` are built from it.
  pub server_url: String,
  pub default_title: String,
  pub default_description: String,
  pub og_image: Option<String>,
  pub lang: String,
  pub stylesheets: Vec<String>,
  /// Directory served as static files under `/static`.
  pub public_dir: Option<String>,
  pub promotion: Promotion,
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      name: "Quire".to_string(),
      server_url: "http://localhost:8080".to_string(),
      default_title: "Quire".to_string(),
      default_description: "An open-source storefront and website built on a headless CMS."
        .to_string(),
      og_image: None,
      lang: "en".to_string(),
      stylesheets: Vec::new(),
      public_dir: None,
      promotion: Promotion::default(),
    }
  }
}

impl SiteConfig {
  pub fn validate(&self) -> Result<(), QuireError> {
    validate_http_url("site.server_url", &self.server_url)
  }
}

/// Cookie names consulted for draft previews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftConfig {
  #[serde(default = "default_draft_cookie")]
  pub draft_cookie: String,
  #[serde(default = "default_token_cookie")]
  pub token_cookie: String,
}

fn default_draft_cookie() -> String {
  "quire_draft".to_string()
}

fn default_token_cookie() -> String {
  "payload-token".to_string()
}

impl Default for DraftConfig {
  fn default() -> Self {
    Self { draft_cookie: default_draft_cookie(), token_cookie: default_token_cookie() }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsConfig {
  #[serde(default = "default_api_url")]
  pub api_url: String,
  /// Relation depth requested for single documents.
  #[serde(default = "default_depth")]
  pub depth: u32,
  /// Upper bound on documents returned by list requests.
  #[serde(default = "default_list_limit")]
  pub list_limit: u32,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
  /// JSON fixture served from memory instead of calling the API.
  #[serde(default)]
  pub fixtures: Option<String>,
  #[serde(flatten)]
  pub draft: DraftConfig,
}

fn default_api_url() -> String {
  "http://localhost:3000".to_string()
}

fn default_depth() -> u32 {
  2
}

fn default_list_limit() -> u32 {
  300
}

fn default_timeout_secs() -> u64 {
  10
}

impl Default for CmsConfig {
  fn default() -> Self {
    Self {
      api_url: default_api_url(),
      depth: default_depth(),
      list_limit: default_list_limit(),
      timeout_secs: default_timeout_secs(),
      fixtures: None,
      draft: DraftConfig::default(),
    }
  }
}

impl CmsConfig {
  pub fn validate(&self) -> Result<(), QuireError> {
    validate_http_url("cms.api_url", &self.api_url)?;
    if self.list_limit == 0 {
      return Err(QuireError::validation("cms.list_limit must be greater than zero"));
    }
    if self.timeout_secs == 0 {
      return Err(QuireError::validation("cms.timeout_secs must be greater than zero"));
    }
    Ok(())
  }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), QuireError> {
  let url = Url::parse(value)
    .map_err(|e| QuireError::validation(format!("{field}: invalid URL {value:?}: {e}")))?;
  match url.scheme() {
    "http" | "https" => Ok(()),
    other => Err(QuireError::validation(format!("{field}: unsupported scheme {other:?}"))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let cms = CmsConfig::default();
    assert_eq!(cms.depth, 2);
    assert_eq!(cms.list_limit, 300);
    assert_eq!(cms.timeout_secs, 10);
    assert_eq!(cms.draft.draft_cookie, "quire_draft");
    assert_eq!(cms.draft.token_cookie, "payload-token");
    assert_eq!(SiteConfig::default().lang, "en");
  }

  #[test]
  fn partial_json_fills_defaults() {
    let cms: CmsConfig =
      serde_json::from_str(r#"{"api_url":"https://cms.example","token_cookie":"tok"}"#).unwrap();
    assert_eq!(cms.api_url, "https://cms.example");
    assert_eq!(cms.draft.token_cookie, "tok");
    assert_eq!(cms.draft.draft_cookie, "quire_draft");
    assert_eq!(cms.depth, 2);

    let site: SiteConfig = serde_json::from_str(r#"{"name":"Shop"}"#).unwrap();
    assert_eq!(site.name, "Shop");
    assert_eq!(site.server_url, "http://localhost:8080");
  }

  #[test]
  fn validation_rejects_non_http_urls() {
    let site = SiteConfig { server_url: "ftp://example.com".into(), ..SiteConfig::default() };
    let err = site.validate().unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert!(err.message().contains("site.server_url"));

    let cms = CmsConfig { api_url: "not a url".into(), ..CmsConfig::default() };
    assert!(cms.validate().is_err());

    assert!(SiteConfig::default().validate().is_ok());
    assert!(CmsConfig::default().validate().is_ok());
  }

  #[test]
  fn zero_list_limit_is_rejected() {
    let cms = CmsConfig { list_limit: 0, ..CmsConfig::default() };
    assert!(cms.validate().is_err());
  }

  #[test]
  fn zero_timeout_is_rejected() {
    let cms = CmsConfig { timeout_secs: 0, ..CmsConfig::default() };
    let err = cms.validate().unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert!(err.message().contains("cms.timeout_secs"));
  }
}
