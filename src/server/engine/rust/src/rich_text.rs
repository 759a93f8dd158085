/* src/server/engine/rust/src/rich_text.rs */

//! Slate rich text to HTML.

use crate::escape::escape_html;
use crate::link::render_link;
use crate::schema::{CmsLink, RichTextNode};

/// Serialize a node list. Text leaves are escaped; formatting marks nest
/// bold, code, italic, underline, strikethrough from the inside out.
pub fn serialize(nodes: &[RichTextNode]) -> String {
  let mut out = String::new();
  for node in nodes {
    if node.is_text() {
      out.push_str(&serialize_leaf(node));
    } else {
      out.push_str(&serialize_element(node));
    }
  }
  out
}

/// `<div class="rich-text">` around the serialized content, or nothing when
/// there is no content.
pub fn render_rich_text(content: Option<&[RichTextNode]>) -> String {
  match content {
    Some(nodes) if !nodes.is_empty() => {
      format!(r#"<div class="rich-text">{}</div>"#, serialize(nodes))
    }
    _ => String::new(),
  }
}

fn serialize_leaf(node: &RichTextNode) -> String {
  let mut html = escape_html(node.text.as_deref().unwrap_or_default());
  if node.bold.unwrap_or(false) {
    html = format!("<strong>{html}</strong>");
  }
  if node.code.unwrap_or(false) {
    html = format!("<code>{html}</code>");
  }
  if node.italic.unwrap_or(false) {
    html = format!("<em>{html}</em>");
  }
  if node.underline.unwrap_or(false) {
    html = format!(r#"<span style="text-decoration: underline">{html}</span>"#);
  }
  if node.strikethrough.unwrap_or(false) {
    html = format!(r#"<span style="text-decoration: line-through">{html}</span>"#);
  }
  html
}

fn serialize_element(node: &RichTextNode) -> String {
  let children = serialize(node.children.as_deref().unwrap_or_default());
  match node.kind.as_deref() {
    Some(tag @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "ul" | "ol" | "li")) => {
      format!("<{tag}>{children}</{tag}>")
    }
    Some("quote") => format!("<blockquote>{children}</blockquote>"),
    Some("link") => render_link(&inline_link(node), Some(&children)),
    Some("label") => format!(r#"<p class="label">{children}</p>"#),
    Some("large-body") => format!(r#"<p class="large-body">{children}</p>"#),
    _ => format!("<p>{children}</p>"),
  }
}

/// Inline links mark internal targets with `linkType: internal` and keep the
/// referenced document under `doc`.
fn inline_link(node: &RichTextNode) -> CmsLink {
  let internal = node.link_type.as_deref() == Some("internal");
  CmsLink {
    kind: Some(if internal { "reference" } else { "custom" }.to_string()),
    url: node.url.clone(),
    new_tab: Some(node.new_tab.unwrap_or(false)),
    reference: node.doc.clone(),
    ..CmsLink::default()
  }
}
