/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::QuireConfig;

/// Walk upward from `start` to find `quire.toml`, like Cargo.toml discovery
pub fn find_quire_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("quire.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("quire.toml not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_quire_config(path: &Path) -> Result<QuireConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let mut config: QuireConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  if let Some(base_dir) = path.parent() {
    config.resolve_paths(base_dir);
  }
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}
