/* src/server/engine/rust/src/media.rs */

use crate::escape::escape_html;
use crate::render::RenderCtx;
use crate::rich_text::render_rich_text;
use crate::schema::{Media, Relation};

/// Absolute URL of an uploaded file. The CMS hands out site-relative urls;
/// when only a filename is present the default upload route is assumed.
pub fn media_src(media: &Media, server_url: &str) -> Option<String> {
  let base = server_url.trim_end_matches('/');
  if let Some(url) = media.url.as_deref().filter(|u| !u.is_empty()) {
    if url.starts_with("http://") || url.starts_with("https://") {
      return Some(url.to_string());
    }
    let sep = if url.starts_with('/') { "" } else { "/" };
    return Some(format!("{base}{sep}{url}"));
  }
  let filename = media.filename.as_deref().filter(|f| !f.is_empty())?;
  Some(format!("{base}/media/{filename}"))
}

pub fn render_image(media: Option<&Relation<Media>>, ctx: &RenderCtx) -> String {
  let Some(media) = media.and_then(Relation::doc) else {
    return String::new();
  };
  let Some(src) = media_src(media, &ctx.server_url) else {
    return String::new();
  };
  let mut out = format!(
    r#"<img src="{}" alt="{}""#,
    escape_html(&src),
    escape_html(media.alt.as_deref().unwrap_or_default())
  );
  if let Some(width) = media.width {
    out.push_str(&format!(r#" width="{width}""#));
  }
  if let Some(height) = media.height {
    out.push_str(&format!(r#" height="{height}""#));
  }
  out.push_str(r#" loading="lazy">"#);
  out
}

/// Image plus caption as a `<figure>`.
pub fn render_figure(media: Option<&Relation<Media>>, class: &str, ctx: &RenderCtx) -> String {
  let img = render_image(media, ctx);
  if img.is_empty() {
    return String::new();
  }
  let caption = media
    .and_then(Relation::doc)
    .map(|m| render_rich_text(m.caption.as_deref()))
    .filter(|c| !c.is_empty())
    .map(|c| format!("<figcaption>{c}</figcaption>"))
    .unwrap_or_default();
  format!(r#"<figure class="{class}">{img}{caption}</figure>"#)
}
