/* src/cli/core/src/config/types.rs */

use std::path::Path;

use anyhow::{Context, Result};
use quire_server::{CmsConfig, SiteConfig};
use serde::Deserialize;

/// Contents of `quire.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuireConfig {
  #[serde(default)]
  pub site: SiteConfig,
  #[serde(default)]
  pub cms: CmsConfig,
  #[serde(default)]
  pub server: ServerSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  8080
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

impl QuireConfig {
  pub fn validate(&self) -> Result<()> {
    self.site.validate()?;
    self.cms.validate()?;
    Ok(())
  }

  /// `PORT` from the environment replaces `server.port`. Blank values are
  /// ignored.
  pub fn apply_port_env(&mut self, value: Option<&str>) -> Result<()> {
    if let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) {
      self.server.port = raw.parse().with_context(|| format!("invalid PORT value {raw:?}"))?;
    }
    Ok(())
  }

  /// Make `cms.fixtures` and `site.public_dir` relative to the config file.
  pub fn resolve_paths(&mut self, base_dir: &Path) {
    for path in [&mut self.cms.fixtures, &mut self.site.public_dir].into_iter().flatten() {
      if Path::new(path.as_str()).is_relative() {
        *path = base_dir.join(path.as_str()).display().to_string();
      }
    }
  }

  pub fn listen_addr(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }
}
