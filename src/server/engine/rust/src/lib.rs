/* src/server/engine/rust/src/lib.rs */

pub mod blocks;
pub mod document;
pub mod escape;
pub mod head;
pub mod hero;
pub mod home;
pub mod link;
pub mod media;
pub mod render;
pub mod rich_text;
pub mod schema;

// Public API re-exports
pub use document::{Shell, not_found_body, render_document};
pub use escape::escape_html;
pub use head::{Metadata, OgImage, OpenGraph, inject_head_meta, inject_html_lang, render_head_meta};
pub use home::Promotion;
pub use media::media_src;
pub use render::{Layout, RenderCtx, disable_top_padding, render_generic, render_home, render_layout};
pub use schema::{Block, Category, Hero, HeroType, Media, Meta, Page, Relation, RichText, RichTextNode};
