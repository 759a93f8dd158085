/* src/server/core/rust/src/fallback.rs */

use quire_engine::schema::{CallToActionBlock, CmsLink, LinkItem};
use quire_engine::{Block, Hero, HeroType, Meta, Page, RichTextNode};

use crate::HOME_SLUG;

fn link(label: &str, url: &str, appearance: &str) -> LinkItem {
  LinkItem {
    link: CmsLink {
      kind: Some("custom".to_string()),
      url: Some(url.to_string()),
      label: Some(label.to_string()),
      appearance: Some(appearance.to_string()),
      ..CmsLink::default()
    },
  }
}

/// Home page served when the CMS has none, or cannot be reached.
pub fn static_home() -> Page {
  Page {
    id: None,
    title: Some("Home".to_string()),
    slug: Some(HOME_SLUG.to_string()),
    status: Some("published".to_string()),
    meta: Some(Meta {
      title: Some("Quire".to_string()),
      description: Some("An open-source storefront and website built on a headless CMS.".to_string()),
      image: None,
    }),
    hero: Some(Hero {
      kind: Some(HeroType::HighImpact),
      rich_text: Some(vec![
        RichTextNode::element("h1", vec![RichTextNode::leaf("Quire storefront")]),
        RichTextNode::element(
          "p",
          vec![RichTextNode::leaf(
            "Your content API has no home page yet. Publish a page with the slug \"home\" to replace this one.",
          )],
        ),
      ]),
      links: Some(vec![link("Shop now", "/products", "primary")]),
      media: None,
    }),
    layout: Some(vec![Block::CallToAction(CallToActionBlock {
      block_name: Some("Get started".to_string()),
      invert_background: Some(true),
      rich_text: Some(vec![
        RichTextNode::element("h4", vec![RichTextNode::leaf("Ready to start selling?")]),
        RichTextNode::element("p", vec![RichTextNode::leaf("Create pages, products and categories from the CMS admin panel.")]),
      ]),
      links: Some(vec![link("Browse products", "/products", "primary")]),
    })]),
  }
}
