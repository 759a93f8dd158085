/* src/server/core/rust/src/lib.rs */

pub mod config;
pub mod draft;
pub mod errors;
pub mod fallback;
pub mod memory;
pub mod meta;
pub mod pages;
pub mod rest;
pub mod server;
pub mod source;

/// Slug of the page rendered with the home layout.
pub const HOME_SLUG: &str = "home";

// Re-exports for ergonomic use
pub use config::{CmsConfig, DraftConfig, SiteConfig};
pub use draft::DraftContext;
pub use errors::QuireError;
pub use fallback::static_home;
pub use memory::MemorySource;
pub use meta::generate_meta;
pub use pages::{LoadedPage, PageService, RenderedPage, normalize_slug};
pub use rest::RestSource;
pub use server::{QuireParts, QuireServer};
pub use source::{BoxFuture, ContentSource, DocQuery, fetch_doc, fetch_docs};
