/* src/server/core/rust/src/meta.rs */

use quire_engine::{Metadata, OgImage, OpenGraph, Page, Relation, media_src};

use crate::HOME_SLUG;
use crate::config::SiteConfig;

/// Head metadata for a page, merged over the site defaults. `None` yields
/// the defaults alone.
pub fn generate_meta(doc: Option<&Page>, site: &SiteConfig) -> Metadata {
  let meta = doc.and_then(|d| d.meta.as_ref());
  let title = meta
    .and_then(|m| m.title.as_deref())
    .filter(|t| !t.is_empty())
    .unwrap_or(&site.default_title)
    .to_string();
  let description =
    meta.and_then(|m| m.description.as_deref()).filter(|d| !d.is_empty()).map(str::to_string);

  let image = meta
    .and_then(|m| m.image.as_ref())
    .and_then(Relation::doc)
    .and_then(|m| media_src(m, &site.server_url))
    .or_else(|| site.og_image.as_deref().map(|src| absolutize(src, &site.server_url)));

  Metadata {
    title: title.clone(),
    description: description.clone(),
    open_graph: OpenGraph {
      kind: "website".to_string(),
      site_name: site.name.clone(),
      title,
      description: description.or_else(|| Some(site.default_description.clone())),
      url: page_url(doc.and_then(|d| d.slug.as_deref()), &site.server_url),
      images: image.map(|url| vec![OgImage { url }]).unwrap_or_default(),
    },
  }
}

fn page_url(slug: Option<&str>, server_url: &str) -> String {
  let base = server_url.trim_end_matches('/');
  match slug.filter(|s| !s.is_empty() && *s != HOME_SLUG) {
    Some(slug) => format!("{base}/{slug}"),
    None => format!("{base}/"),
  }
}

fn absolutize(src: &str, server_url: &str) -> String {
  if src.starts_with("http://") || src.starts_with("https://") {
    return src.to_string();
  }
  format!("{}/{}", server_url.trim_end_matches('/'), src.trim_start_matches('/'))
}
