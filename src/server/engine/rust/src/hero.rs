/* src/server/engine/rust/src/hero.rs */

use crate::link::render_links;
use crate::media::{render_figure, render_image};
use crate::render::{RenderCtx, gutter};
use crate::rich_text::render_rich_text;
use crate::schema::{Hero, HeroType};

/// Page banner. `none`, a missing type, or a type this renderer does not know
/// produce no markup.
pub fn render_hero(hero: Option<&Hero>, ctx: &RenderCtx) -> String {
  let Some(hero) = hero else {
    return String::new();
  };
  let Some(kind) = hero.kind.as_ref() else {
    return String::new();
  };
  let rich_text = render_rich_text(hero.rich_text.as_deref());
  let links = render_links(hero.links.as_deref());

  match kind {
    HeroType::HighImpact => format!(
      r#"<div class="hero hero--high-impact"><div class="hero__content">{rich_text}{links}</div><div class="hero__media">{}</div></div>"#,
      render_image(hero.media.as_ref(), ctx)
    ),
    HeroType::MediumImpact => format!(
      r#"<div class="hero hero--medium-impact">{}{}</div>"#,
      gutter(Some("hero__content"), &format!("{rich_text}{links}")),
      gutter(Some("hero__media"), &render_figure(hero.media.as_ref(), "hero__figure", ctx)),
    ),
    HeroType::LowImpact => {
      format!(r#"<div class="hero hero--low-impact">{}</div>"#, gutter(None, &rich_text))
    }
    HeroType::CustomHero => format!(
      r#"<section class="hero hero--custom"><div class="hero__content">{rich_text}{links}</div>{}</section>"#,
      render_figure(hero.media.as_ref(), "hero__media", ctx)
    ),
    HeroType::None | HeroType::Other(_) => String::new(),
  }
}
