/* src/server/engine/rust/src/render.rs */

//! The two page layouts and the context they render with.

use crate::blocks::render_blocks;
use crate::hero::render_hero;
use crate::home::{Promotion, render_categories, render_promotion};
use crate::schema::{Category, Hero, HeroType, Page};

/// Site-wide values components need while rendering.
#[derive(Debug, Clone)]
pub struct RenderCtx {
  /// Public origin of the site, used to absolutize media urls.
  pub server_url: String,
  pub promotion: Promotion,
}

impl RenderCtx {
  pub fn new(server_url: impl Into<String>) -> Self {
    Self { server_url: server_url.into(), promotion: Promotion::default() }
  }

  pub fn with_promotion(mut self, promotion: Promotion) -> Self {
    self.promotion = promotion;
    self
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
  Home,
  Generic,
}

pub fn gutter(extra_class: Option<&str>, inner: &str) -> String {
  match extra_class {
    Some(class) => format!(r#"<div class="gutter gutter--left gutter--right {class}">{inner}</div>"#),
    None => format!(r#"<div class="gutter gutter--left gutter--right">{inner}</div>"#),
  }
}

/// The first block loses its top padding when the hero above it is visually
/// light: no hero type, `none`, or `lowImpact`.
pub fn disable_top_padding(hero: Option<&Hero>) -> bool {
  match hero.and_then(|h| h.kind.as_ref()) {
    None | Some(HeroType::None | HeroType::LowImpact) => true,
    Some(_) => false,
  }
}

/// Home layout: hero, then the category grid and promotion inside a gutter.
/// The page's layout blocks are not rendered here.
pub fn render_home(page: &Page, categories: Option<&[Category]>, ctx: &RenderCtx) -> String {
  format!(
    "<section>{}{}</section>",
    render_hero(page.hero.as_ref(), ctx),
    gutter(
      Some("home"),
      &format!("{}{}", render_categories(categories, ctx), render_promotion(&ctx.promotion))
    )
  )
}

/// Generic layout: hero followed by the layout blocks.
pub fn render_generic(page: &Page, ctx: &RenderCtx) -> String {
  format!(
    "{}{}",
    render_hero(page.hero.as_ref(), ctx),
    render_blocks(page.layout.as_deref(), disable_top_padding(page.hero.as_ref()), ctx)
  )
}

pub fn render_layout(
  layout: Layout,
  page: &Page,
  categories: Option<&[Category]>,
  ctx: &RenderCtx,
) -> String {
  match layout {
    Layout::Home => render_home(page, categories, ctx),
    Layout::Generic => render_generic(page, ctx),
  }
}
