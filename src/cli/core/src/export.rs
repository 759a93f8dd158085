/* src/cli/core/src/export.rs */

//! Static export: every page rendered once to `<out>/<slug>/index.html`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quire_server::{DraftContext, HOME_SLUG, PageService};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct ExportSummary {
  pub written: Vec<(PathBuf, u64)>,
  pub skipped: Vec<String>,
}

impl ExportSummary {
  pub fn total_bytes(&self) -> u64 {
    self.written.iter().map(|(_, size)| size).sum()
  }
}

/// Output file for a slug; `None` for slugs that would escape `out`.
pub fn page_path(out: &Path, slug: &str) -> Option<PathBuf> {
  if slug == HOME_SLUG {
    return Some(out.join("index.html"));
  }
  if slug.is_empty() || slug == "." || slug == ".." || slug.contains(['/', '\\']) {
    return None;
  }
  Some(out.join(slug).join("index.html"))
}

/// Home first, then every static param. Slugs that no longer resolve are
/// skipped, as are drafts.
pub async fn export_site(pages: &PageService, out: &Path) -> Result<ExportSummary> {
  let mut slugs = vec![HOME_SLUG.to_string()];
  for slug in pages.static_params().await {
    if !slugs.contains(&slug) {
      slugs.push(slug);
    }
  }

  std::fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
  let published = DraftContext::disabled();
  let mut summary = ExportSummary::default();

  for slug in slugs {
    let Some(path) = page_path(out, &slug) else {
      warn!(slug = %slug, "slug is not a single path segment, skipped");
      summary.skipped.push(slug);
      continue;
    };
    let page = match pages.render(Some(&slug), &published).await {
      Ok(page) => page,
      Err(err) if err.is_not_found() => {
        warn!(slug = %slug, "page disappeared during export, skipped");
        summary.skipped.push(slug);
        continue;
      }
      Err(err) => return Err(err).with_context(|| format!("failed to render {slug}")),
    };
    write_file(&path, &page.html)?;
    debug!(slug = %slug, path = %path.display(), "exported");
    summary.written.push((path, page.html.len() as u64));
  }

  let not_found = out.join("404.html");
  let html = pages.render_not_found();
  write_file(&not_found, &html)?;
  summary.written.push((not_found, html.len() as u64));
  info!(written = summary.written.len(), skipped = summary.skipped.len(), "export finished");
  Ok(summary)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Copy `src` into `dest` recursively.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<u64> {
  let mut copied = 0;
  std::fs::create_dir_all(dest).with_context(|| format!("failed to create {}", dest.display()))?;
  for entry in std::fs::read_dir(src).with_context(|| format!("failed to read {}", src.display()))? {
    let entry = entry?;
    let target = dest.join(entry.file_name());
    if entry.file_type()?.is_dir() {
      copied += copy_dir(&entry.path(), &target)?;
    } else {
      std::fs::copy(entry.path(), &target)
        .with_context(|| format!("failed to copy {}", entry.path().display()))?;
      copied += 1;
    }
  }
  Ok(copied)
}
