/* src/server/engine/rust/src/home.rs */

use serde::{Deserialize, Serialize};

use crate::escape::escape_html;
use crate::media::media_src;
use crate::render::RenderCtx;
use crate::schema::{Category, Relation};

/// Static promotional banner shown under the category grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
  #[serde(default = "default_heading")]
  pub heading: String,
  #[serde(default = "default_body")]
  pub body: String,
}

fn default_heading() -> String {
  "Deals of the Month".to_string()
}

fn default_body() -> String {
  "Fresh arrivals and seasonal markdowns, updated every month. Check back often.".to_string()
}

impl Default for Promotion {
  fn default() -> Self {
    Self { heading: default_heading(), body: default_body() }
  }
}

/// Category grid. A missing category list still renders the section frame so
/// the page layout does not jump when the CMS is unreachable.
pub fn render_categories(categories: Option<&[Category]>, ctx: &RenderCtx) -> String {
  let mut cards = String::new();
  for category in categories.unwrap_or_default() {
    let href = match category.id.as_deref() {
      Some(id) => format!("/products?category={}", escape_html(id)),
      None => "/products".to_string(),
    };
    let style = category
      .media
      .as_ref()
      .and_then(Relation::doc)
      .and_then(|m| media_src(m, &ctx.server_url))
      .map(|src| format!(r#" style="background-image: url('{}')""#, escape_html(&src)))
      .unwrap_or_default();
    cards.push_str(&format!(
      r#"<a href="{href}" class="category-card"{style}><p class="category-card__title">{}</p></a>"#,
      escape_html(category.title.as_deref().unwrap_or_default())
    ));
  }
  format!(
    r#"<section class="categories"><div class="categories__title"><h3>Shop by Categories</h3><a href="/products">Show All</a></div><div class="categories__list">{cards}</div></section>"#
  )
}

pub fn render_promotion(promotion: &Promotion) -> String {
  format!(
    r#"<section class="promotion"><div class="promotion__text"><h3 class="promotion__title">{}</h3><p>{}</p></div></section>"#,
    escape_html(&promotion.heading),
    escape_html(&promotion.body)
  )
}
