/* src/server/engine/rust/src/link.rs */

use crate::escape::escape_html;
use crate::schema::{CmsLink, LinkItem, Reference};

/// Public path of a referenced document. Pages live at the site root, every
/// other collection under its own prefix.
pub fn reference_href(reference: &Reference) -> Option<String> {
  let slug = reference.value.doc()?.slug.as_deref()?;
  if reference.relation_to.is_empty() || reference.relation_to == "pages" {
    Some(format!("/{slug}"))
  } else {
    Some(format!("/{}/{slug}", reference.relation_to))
  }
}

/// Reference links resolve through the linked document when it is populated
/// and has a slug; everything else falls back to the custom url.
pub fn link_href(link: &CmsLink) -> Option<String> {
  if link.kind.as_deref() == Some("reference") {
    if let Some(href) = link.reference.as_ref().and_then(reference_href) {
      return Some(href);
    }
  }
  link.url.clone().filter(|url| !url.is_empty())
}

/// Render a CMS link. `inner_html` replaces the escaped label when given
/// (rich text links carry their own children). No href, no output.
pub fn render_link(link: &CmsLink, inner_html: Option<&str>) -> String {
  let Some(href) = link_href(link) else {
    return String::new();
  };
  let label = match inner_html {
    Some(html) => html.to_string(),
    None => escape_html(link.label.as_deref().unwrap_or_default()),
  };
  anchor(&href, link.new_tab.unwrap_or(false), link.appearance.as_deref(), &label)
}

pub fn render_links(links: Option<&[LinkItem]>) -> String {
  let Some(links) = links.filter(|l| !l.is_empty()) else {
    return String::new();
  };
  let mut out = String::from(r#"<ul class="links">"#);
  for item in links {
    let rendered = render_link(&item.link, None);
    if !rendered.is_empty() {
      out.push_str("<li>");
      out.push_str(&rendered);
      out.push_str("</li>");
    }
  }
  out.push_str("</ul>");
  out
}

fn anchor(href: &str, new_tab: bool, appearance: Option<&str>, inner_html: &str) -> String {
  let class = match appearance {
    Some(kind @ ("primary" | "secondary")) => format!(r#" class="button button--{kind}""#),
    _ => String::new(),
  };
  let target = if new_tab { r#" target="_blank" rel="noopener noreferrer""# } else { "" };
  format!(r#"<a href="{}"{class}{target}>{inner_html}</a>"#, escape_html(href))
}
