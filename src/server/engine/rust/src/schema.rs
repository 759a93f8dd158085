/* src/server/engine/rust/src/schema.rs */

//! Content shapes as delivered by the CMS REST API.
//! Field names follow the wire format (camelCase). Nearly everything is
//! optional: drafts are routinely half-filled and relations may come back
//! unpopulated depending on the requested depth.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Either a populated document or the bare id returned when the relation was
/// not expanded at the requested depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
  Doc(T),
  Id(serde_json::Value),
}

impl<T> Relation<T> {
  pub fn doc(&self) -> Option<&T> {
    match self {
      Self::Doc(doc) => Some(doc),
      Self::Id(_) => None,
    }
  }
}

/// Document ids are strings on document databases and integers on SQL ones.
fn id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum IdRepr {
    Text(String),
    Int(i64),
  }

  Ok(Option::<IdRepr>::deserialize(deserializer)?.map(|id| match id {
    IdRepr::Text(s) => s,
    IdRepr::Int(n) => n.to_string(),
  }))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
  #[serde(deserialize_with = "id_string")]
  pub id: Option<String>,
  pub title: Option<String>,
  pub slug: Option<String>,
  #[serde(rename = "_status")]
  pub status: Option<String>,
  pub meta: Option<Meta>,
  pub hero: Option<Hero>,
  pub layout: Option<Vec<Block>>,
}

/// SEO fields attached to a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
  pub title: Option<String>,
  pub description: Option<String>,
  pub image: Option<Relation<Media>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
  #[serde(rename = "type")]
  pub kind: Option<HeroType>,
  pub rich_text: Option<RichText>,
  pub links: Option<Vec<LinkItem>>,
  pub media: Option<Relation<Media>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeroType {
  None,
  HighImpact,
  MediumImpact,
  LowImpact,
  CustomHero,
  Other(String),
}

impl HeroType {
  pub fn as_str(&self) -> &str {
    match self {
      Self::None => "none",
      Self::HighImpact => "highImpact",
      Self::MediumImpact => "mediumImpact",
      Self::LowImpact => "lowImpact",
      Self::CustomHero => "customHero",
      Self::Other(s) => s,
    }
  }
}

impl From<String> for HeroType {
  fn from(s: String) -> Self {
    match s.as_str() {
      "none" => Self::None,
      "highImpact" => Self::HighImpact,
      "mediumImpact" => Self::MediumImpact,
      "lowImpact" => Self::LowImpact,
      "customHero" => Self::CustomHero,
      _ => Self::Other(s),
    }
  }
}

impl From<HeroType> for String {
  fn from(kind: HeroType) -> Self {
    match kind {
      HeroType::Other(s) => s,
      other => other.as_str().to_string(),
    }
  }
}

impl fmt::Display for HeroType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One section of a page body, discriminated by `blockType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "blockType")]
pub enum Block {
  #[serde(rename = "cta")]
  CallToAction(CallToActionBlock),
  #[serde(rename = "content")]
  Content(ContentBlock),
  #[serde(rename = "mediaBlock")]
  Media(MediaBlock),
  #[serde(rename = "archive")]
  Archive(ArchiveBlock),
  #[serde(other)]
  Unknown,
}

impl Block {
  pub fn block_name(&self) -> Option<&str> {
    match self {
      Self::CallToAction(b) => b.block_name.as_deref(),
      Self::Content(b) => b.block_name.as_deref(),
      Self::Media(b) => b.block_name.as_deref(),
      Self::Archive(b) => b.block_name.as_deref(),
      Self::Unknown => None,
    }
  }

  /// Whether the block asks for an inverted background. Blocks without the
  /// field count as not inverted.
  pub fn inverted(&self) -> bool {
    match self {
      Self::CallToAction(b) => b.invert_background.unwrap_or(false),
      Self::Media(b) => b.invert_background.unwrap_or(false),
      Self::Content(_) | Self::Archive(_) | Self::Unknown => false,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallToActionBlock {
  pub block_name: Option<String>,
  pub invert_background: Option<bool>,
  pub rich_text: Option<RichText>,
  pub links: Option<Vec<LinkItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentBlock {
  pub block_name: Option<String>,
  pub columns: Option<Vec<Column>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Column {
  /// `oneThird`, `half`, `twoThirds` or `full`.
  pub size: Option<String>,
  pub rich_text: Option<RichText>,
  pub enable_link: Option<bool>,
  pub link: Option<CmsLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaBlock {
  pub block_name: Option<String>,
  pub invert_background: Option<bool>,
  /// `default` or `fullscreen`.
  pub position: Option<String>,
  pub media: Option<Relation<Media>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArchiveBlock {
  pub block_name: Option<String>,
  pub intro_content: Option<RichText>,
  pub relation_to: Option<String>,
  pub populated_docs: Option<Vec<PopulatedDoc>>,
  pub populated_docs_total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedDoc {
  #[serde(default)]
  pub relation_to: Option<String>,
  pub value: Relation<LinkedDoc>,
}

/// The handful of fields a link needs from the document it points at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedDoc {
  #[serde(deserialize_with = "id_string")]
  pub id: Option<String>,
  pub slug: Option<String>,
  pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
  #[serde(deserialize_with = "id_string")]
  pub id: Option<String>,
  pub title: Option<String>,
  pub media: Option<Relation<Media>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
  #[serde(deserialize_with = "id_string")]
  pub id: Option<String>,
  pub alt: Option<String>,
  pub url: Option<String>,
  pub filename: Option<String>,
  pub width: Option<u32>,
  pub height: Option<u32>,
  pub caption: Option<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkItem {
  pub link: CmsLink,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CmsLink {
  /// `reference` or `custom`.
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub url: Option<String>,
  pub label: Option<String>,
  /// `default`, `primary` or `secondary`.
  pub appearance: Option<String>,
  pub new_tab: Option<bool>,
  pub reference: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
  #[serde(default)]
  pub relation_to: String,
  pub value: Relation<LinkedDoc>,
}

pub type RichText = Vec<RichTextNode>;

/// A Slate node. Text leaves carry `text` plus formatting marks; elements
/// carry `type` and `children`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RichTextNode {
  pub text: Option<String>,
  pub bold: Option<bool>,
  pub italic: Option<bool>,
  pub underline: Option<bool>,
  pub strikethrough: Option<bool>,
  pub code: Option<bool>,
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub children: Option<Vec<RichTextNode>>,
  pub url: Option<String>,
  pub new_tab: Option<bool>,
  /// `internal` or `custom` on link elements.
  pub link_type: Option<String>,
  pub doc: Option<Reference>,
}

impl RichTextNode {
  pub fn leaf(text: impl Into<String>) -> Self {
    Self { text: Some(text.into()), ..Self::default() }
  }

  pub fn element(kind: impl Into<String>, children: Vec<RichTextNode>) -> Self {
    Self { kind: Some(kind.into()), children: Some(children), ..Self::default() }
  }

  pub fn is_text(&self) -> bool {
    self.text.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn page_from_rest_payload() {
    let page: Page = serde_json::from_value(json!({
      "id": "65a1",
      "title": "About",
      "slug": "about",
      "_status": "published",
      "hero": { "type": "lowImpact", "richText": [{ "type": "h1", "children": [{ "text": "About" }] }] },
      "layout": [
        { "blockType": "cta", "blockName": "Join Us", "invertBackground": true, "links": [] },
        { "blockType": "content", "columns": [{ "size": "half", "richText": [] }] }
      ]
    }))
    .unwrap();

    assert_eq!(page.slug.as_deref(), Some("about"));
    assert_eq!(page.status.as_deref(), Some("published"));
    let hero = page.hero.unwrap();
    assert_eq!(hero.kind, Some(HeroType::LowImpact));
    let layout = page.layout.unwrap();
    assert_eq!(layout.len(), 2);
    assert_eq!(layout[0].block_name(), Some("Join Us"));
    assert!(layout[0].inverted());
    assert!(!layout[1].inverted());
  }

  #[test]
  fn unknown_block_type_is_kept_as_unknown() {
    let blocks: Vec<Block> = serde_json::from_value(json!([
      { "blockType": "carousel", "slides": [1, 2, 3] },
      { "blockType": "mediaBlock", "position": "fullscreen" }
    ]))
    .unwrap();
    assert_eq!(blocks[0], Block::Unknown);
    assert!(matches!(blocks[1], Block::Media(_)));
  }

  #[test]
  fn unrecognized_hero_type_is_preserved() {
    let hero: Hero = serde_json::from_value(json!({ "type": "parallax" })).unwrap();
    assert_eq!(hero.kind, Some(HeroType::Other("parallax".into())));
    assert_eq!(serde_json::to_value(&hero).unwrap()["type"], "parallax");
  }

  #[test]
  fn relation_accepts_id_or_document() {
    let meta: Meta = serde_json::from_value(json!({ "image": "64ff" })).unwrap();
    assert!(meta.image.unwrap().doc().is_none());

    let meta: Meta =
      serde_json::from_value(json!({ "image": { "url": "/media/og.png", "alt": "og" } })).unwrap();
    let image = meta.image.unwrap();
    assert_eq!(image.doc().and_then(|m| m.url.as_deref()), Some("/media/og.png"));
  }

  #[test]
  fn numeric_ids_become_strings() {
    let category: Category = serde_json::from_value(json!({ "id": 7, "title": "Shoes" })).unwrap();
    assert_eq!(category.id.as_deref(), Some("7"));
  }
}
