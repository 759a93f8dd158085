/* src/server/engine/rust/src/blocks.rs */

//! Layout blocks: per-block markup plus the spacing rules between them.

use crate::escape::{escape_html, to_kebab_case};
use crate::link::{link_href, render_link, render_links};
use crate::media::render_figure;
use crate::render::{RenderCtx, gutter};
use crate::rich_text::render_rich_text;
use crate::schema::{ArchiveBlock, Block, CallToActionBlock, ContentBlock, MediaBlock, Relation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
  None,
  Large,
}

impl Padding {
  fn as_str(self) -> &'static str {
    match self {
      Self::None => "none",
      Self::Large => "large",
    }
  }
}

/// Vertical padding around the block at `index`.
///
/// Top padding collapses when the previous block shares this block's
/// background (no visual seam to pad), and for the first block when the
/// caller asked for it. Bottom padding is always large.
pub fn block_padding(blocks: &[Block], index: usize, disable_top_padding: bool) -> (Padding, Padding) {
  let inverted = blocks[index].inverted();
  let mut top = Padding::Large;
  if let Some(prev) = index.checked_sub(1).map(|i| &blocks[i]) {
    if prev.inverted() == inverted {
      top = Padding::None;
    }
  }
  if disable_top_padding && index == 0 {
    top = Padding::None;
  }
  (top, Padding::Large)
}

/// Render the page body. Unknown block types are skipped but still count as
/// neighbours for spacing.
pub fn render_blocks(blocks: Option<&[Block]>, disable_top_padding: bool, ctx: &RenderCtx) -> String {
  let Some(blocks) = blocks.filter(|b| !b.is_empty()) else {
    return String::new();
  };

  let mut out = String::new();
  for (index, block) in blocks.iter().enumerate() {
    let inner = match block {
      Block::CallToAction(b) => render_call_to_action(b),
      Block::Content(b) => render_content(b),
      Block::Media(b) => render_media_block(b, ctx),
      Block::Archive(b) => render_archive(b),
      Block::Unknown => continue,
    };
    let (top, bottom) = block_padding(blocks, index, disable_top_padding);
    let bg = if block.inverted() { "bg bg--invert" } else { "bg" };
    let id = block
      .block_name()
      .map(|name| format!(r#" id="{}""#, escape_html(&to_kebab_case(name))))
      .unwrap_or_default();
    out.push_str(&format!(
      r#"<div class="{bg}"><div class="padding padding-top--{} padding-bottom--{}"><section{id} class="block">{inner}</section></div></div>"#,
      top.as_str(),
      bottom.as_str(),
    ));
  }
  out
}

fn render_call_to_action(block: &CallToActionBlock) -> String {
  gutter(
    None,
    &format!(
      r#"<div class="cta"><div class="cta__content">{}</div><div class="cta__links">{}</div></div>"#,
      render_rich_text(block.rich_text.as_deref()),
      render_links(block.links.as_deref()),
    ),
  )
}

fn render_content(block: &ContentBlock) -> String {
  let mut columns = String::new();
  for column in block.columns.as_deref().unwrap_or_default() {
    let size = to_kebab_case(column.size.as_deref().unwrap_or("oneThird"));
    let link = match (&column.link, column.enable_link.unwrap_or(false)) {
      (Some(link), true) if link_href(link).is_some() => {
        format!(r#"<div class="column__link">{}</div>"#, render_link(link, None))
      }
      _ => String::new(),
    };
    columns.push_str(&format!(
      r#"<div class="column column--{}">{}{link}</div>"#,
      escape_html(&size),
      render_rich_text(column.rich_text.as_deref()),
    ));
  }
  gutter(None, &format!(r#"<div class="content-grid">{columns}</div>"#))
}

fn render_media_block(block: &MediaBlock, ctx: &RenderCtx) -> String {
  let position = block.position.as_deref().unwrap_or("default");
  let figure = render_figure(block.media.as_ref(), "media-block__figure", ctx);
  let inner = format!(
    r#"<div class="media-block media-block--{}">{figure}</div>"#,
    escape_html(&to_kebab_case(position))
  );
  if position == "fullscreen" { inner } else { gutter(None, &inner) }
}

fn render_archive(block: &ArchiveBlock) -> String {
  let intro = render_rich_text(block.intro_content.as_deref());
  let docs = block.populated_docs.as_deref().unwrap_or_default();
  let relation = block.relation_to.as_deref().unwrap_or("pages");

  let mut items = String::new();
  for populated in docs {
    let Relation::Doc(doc) = &populated.value else { continue };
    let Some(slug) = doc.slug.as_deref() else { continue };
    let collection = populated.relation_to.as_deref().unwrap_or(relation);
    let href = if collection == "pages" { format!("/{slug}") } else { format!("/{collection}/{slug}") };
    let title = doc.title.as_deref().unwrap_or(slug);
    items.push_str(&format!(
      r#"<li class="archive__card"><a href="{}">{}</a></li>"#,
      escape_html(&href),
      escape_html(title)
    ));
  }

  let summary = match block.populated_docs_total {
    Some(total) if total > 0 => format!(
      r#"<p class="archive__range">Showing {} of {total} {}</p>"#,
      docs.len(),
      escape_html(relation)
    ),
    _ => String::new(),
  };

  gutter(None, &format!(r#"<div class="archive">{intro}{summary}<ul class="archive__grid">{items}</ul></div>"#))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::{CmsLink, Column, LinkedDoc, Media, PopulatedDoc, RichTextNode};

  fn ctx() -> RenderCtx {
    RenderCtx::new("http://localhost:8080")
  }

  fn cta(name: &str, inverted: bool) -> Block {
    Block::CallToAction(CallToActionBlock {
      block_name: Some(name.into()),
      invert_background: Some(inverted),
      rich_text: Some(vec![RichTextNode::leaf(name)]),
      links: None,
    })
  }

  fn content() -> Block {
    Block::Content(ContentBlock { block_name: None, columns: Some(vec![]) })
  }

  #[test]
  fn first_block_has_large_top_padding_by_default() {
    let blocks = vec![cta("a", false)];
    assert_eq!(block_padding(&blocks, 0, false), (Padding::Large, Padding::Large));
  }

  #[test]
  fn first_block_top_padding_can_be_disabled() {
    let blocks = vec![cta("a", true)];
    assert_eq!(block_padding(&blocks, 0, true), (Padding::None, Padding::Large));
  }

  #[test]
  fn same_background_neighbour_collapses_top_padding() {
    let blocks = vec![cta("a", false), content(), cta("c", true), cta("d", true)];
    assert_eq!(block_padding(&blocks, 1, false).0, Padding::None);
    assert_eq!(block_padding(&blocks, 2, false).0, Padding::Large);
    assert_eq!(block_padding(&blocks, 3, false).0, Padding::None);
  }

  #[test]
  fn disable_top_padding_only_affects_first_block() {
    let blocks = vec![cta("a", false), cta("b", true)];
    assert_eq!(block_padding(&blocks, 1, true).0, Padding::Large);
  }

  #[test]
  fn render_wraps_each_block() {
    let blocks = vec![cta("Join Us", true), cta("Second", true)];
    let html = render_blocks(Some(blocks.as_slice()), true, &ctx());
    assert!(html.starts_with(
      r#"<div class="bg bg--invert"><div class="padding padding-top--none padding-bottom--large"><section id="join-us" class="block">"#
    ));
    assert_eq!(html.matches("padding-top--none").count(), 2);
  }

  #[test]
  fn unknown_blocks_are_skipped_but_count_as_neighbours() {
    let blocks = vec![Block::Unknown, cta("a", true)];
    let html = render_blocks(Some(blocks.as_slice()), false, &ctx());
    assert_eq!(html.matches("<section").count(), 1);
    // previous (unknown) block is not inverted, so the next block keeps its padding
    assert!(html.contains("padding-top--large"));
  }

  #[test]
  fn empty_or_missing_layout_renders_nothing() {
    assert_eq!(render_blocks(None, false, &ctx()), "");
    assert_eq!(render_blocks(Some(&[][..]), false, &ctx()), "");
  }

  #[test]
  fn content_columns_and_links() {
    let block = Block::Content(ContentBlock {
      block_name: None,
      columns: Some(vec![
        Column {
          size: Some("twoThirds".into()),
          rich_text: Some(vec![RichTextNode::leaf("Left")]),
          enable_link: Some(true),
          link: Some(CmsLink { url: Some("/more".into()), label: Some("More".into()), ..CmsLink::default() }),
        },
        Column {
          size: Some("oneThird".into()),
          enable_link: Some(false),
          link: Some(CmsLink { url: Some("/hidden".into()), ..CmsLink::default() }),
          ..Column::default()
        },
      ]),
    });
    let html = render_blocks(Some(&[block][..]), false, &ctx());
    assert!(html.contains(r#"<div class="column column--two-thirds">"#));
    assert!(html.contains(r#"<a href="/more">More</a>"#));
    assert!(!html.contains("/hidden"));
  }

  #[test]
  fn fullscreen_media_block_skips_gutter() {
    let block = Block::Media(MediaBlock {
      block_name: None,
      invert_background: None,
      position: Some("fullscreen".into()),
      media: Some(Relation::Doc(Media { url: Some("/media/wide.jpg".into()), ..Media::default() })),
    });
    let html = render_blocks(Some(&[block][..]), false, &ctx());
    assert!(html.contains(r#"<section class="block"><div class="media-block media-block--fullscreen">"#));
  }

  #[test]
  fn archive_lists_populated_docs() {
    let block = Block::Archive(ArchiveBlock {
      relation_to: Some("products".into()),
      populated_docs: Some(vec![
        PopulatedDoc {
          relation_to: Some("products".into()),
          value: Relation::Doc(LinkedDoc {
            slug: Some("mug".into()),
            title: Some("Mug".into()),
            ..LinkedDoc::default()
          }),
        },
        PopulatedDoc { relation_to: None, value: Relation::Id(serde_json::json!("x")) },
      ]),
      populated_docs_total: Some(12),
      ..ArchiveBlock::default()
    });
    let html = render_blocks(Some(&[block][..]), false, &ctx());
    assert!(html.contains(r#"<a href="/products/mug">Mug</a>"#));
    assert!(html.contains("Showing 2 of 12 products"));
  }
}
