/* src/server/engine/rust/src/document.rs */

use crate::escape::escape_html;
use crate::head::{Metadata, inject_head_meta, inject_html_lang, render_head_meta};

/// Outer HTML frame shared by every page.
#[derive(Debug, Clone)]
pub struct Shell {
  pub lang: String,
  pub stylesheets: Vec<String>,
}

impl Default for Shell {
  fn default() -> Self {
    Self { lang: "en".to_string(), stylesheets: Vec::new() }
  }
}

/// Assemble a complete document: frame, stylesheets, head metadata, body.
pub fn render_document(shell: &Shell, meta: &Metadata, body: &str) -> String {
  let mut html = String::from(
    r#"<!doctype html><html><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1">"#,
  );
  for href in &shell.stylesheets {
    html.push_str(&format!(r#"<link rel="stylesheet" href="{}">"#, escape_html(href)));
  }
  html.push_str(r#"</head><body><main id="quire">"#);
  html.push_str(body);
  html.push_str("</main></body></html>");

  let html = inject_head_meta(&html, &render_head_meta(meta));
  inject_html_lang(&html, &shell.lang)
}

pub fn not_found_body() -> String {
  r#"<div class="gutter gutter--left gutter--right not-found"><h1>404</h1><p>This page could not be found.</p><a href="/">Go home</a></div>"#
    .to_string()
}
