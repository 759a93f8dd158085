/* src/server/engine/rust/src/head.rs */

use serde::{Deserialize, Serialize};

use crate::escape::escape_html;

/// Page-level head metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
  pub title: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub open_graph: OpenGraph,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
  #[serde(rename = "type")]
  pub kind: String,
  pub site_name: String,
  pub title: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub url: String,
  #[serde(default)]
  pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OgImage {
  pub url: String,
}

/// `<title>`, description and `og:*` tags for the given metadata.
pub fn render_head_meta(meta: &Metadata) -> String {
  let mut out = format!("<title>{}</title>", escape_html(&meta.title));
  if let Some(ref description) = meta.description {
    push_meta(&mut out, "name", "description", description);
  }
  let og = &meta.open_graph;
  push_meta(&mut out, "property", "og:type", &og.kind);
  push_meta(&mut out, "property", "og:site_name", &og.site_name);
  push_meta(&mut out, "property", "og:title", &og.title);
  if let Some(ref description) = og.description {
    push_meta(&mut out, "property", "og:description", description);
  }
  push_meta(&mut out, "property", "og:url", &og.url);
  for image in &og.images {
    push_meta(&mut out, "property", "og:image", &image.url);
  }
  out
}

fn push_meta(out: &mut String, attr: &str, key: &str, content: &str) {
  out.push_str(&format!(r#"<meta {attr}="{key}" content="{}">"#, escape_html(content)));
}

/// Set `<html lang="...">` attribute.
pub fn inject_html_lang(html: &str, lang: &str) -> String {
  html.replacen("<html", &format!("<html lang=\"{}\"", escape_html(lang)), 1)
}

/// Inject page-level head metadata after `<meta charset="utf-8">`.
pub fn inject_head_meta(html: &str, meta_html: &str) -> String {
  let charset = r#"<meta charset="utf-8">"#;
  if let Some(pos) = html.find(charset) {
    let insert_at = pos + charset.len();
    let mut result = String::with_capacity(html.len() + meta_html.len());
    result.push_str(&html[..insert_at]);
    result.push_str(meta_html);
    result.push_str(&html[insert_at..]);
    result
  } else {
    html.to_string()
  }
}
