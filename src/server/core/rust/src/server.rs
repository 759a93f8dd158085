/* src/server/core/rust/src/server.rs */

use std::path::Path;
use std::sync::Arc;

use crate::config::{CmsConfig, DraftConfig, SiteConfig};
use crate::errors::QuireError;
use crate::memory::MemorySource;
use crate::pages::PageService;
use crate::rest::RestSource;
use crate::source::ContentSource;

/// Framework-agnostic parts extracted from `QuireServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct QuireParts {
  pub pages: Arc<PageService>,
  pub draft: DraftConfig,
}

pub struct QuireServer {
  source: Option<Arc<dyn ContentSource>>,
  site: SiteConfig,
  draft: DraftConfig,
}

impl QuireServer {
  pub fn new() -> Self {
    Self { source: None, site: SiteConfig::default(), draft: DraftConfig::default() }
  }

  /// Source and draft cookies from CMS settings: the fixture file when one
  /// is configured, otherwise the REST API.
  pub fn cms(mut self, cms: &CmsConfig) -> Result<Self, QuireError> {
    let source: Arc<dyn ContentSource> = match cms.fixtures.as_deref() {
      Some(path) => Arc::new(MemorySource::from_fixture_file(Path::new(path))?),
      None => Arc::new(RestSource::new(cms)?),
    };
    self.source = Some(source);
    self.draft = cms.draft.clone();
    Ok(self)
  }

  pub fn source(mut self, source: Arc<dyn ContentSource>) -> Self {
    self.source = Some(source);
    self
  }

  pub fn site(mut self, site: SiteConfig) -> Self {
    self.site = site;
    self
  }

  pub fn draft_config(mut self, draft: DraftConfig) -> Self {
    self.draft = draft;
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  /// Without an explicit source, an empty in-memory one is used so only the
  /// built-in home page resolves.
  pub fn into_parts(self) -> QuireParts {
    let source = self.source.unwrap_or_else(|| Arc::new(MemorySource::new()));
    QuireParts { pages: Arc::new(PageService::new(source, self.site)), draft: self.draft }
  }
}

impl Default for QuireServer {
  fn default() -> Self {
    Self::new()
  }
}
