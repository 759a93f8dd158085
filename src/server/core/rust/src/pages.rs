/* src/server/core/rust/src/pages.rs */

//! Page resolution: fetch with fallback, layout selection, static params and
//! metadata.
//!
//! Content API failures never surface from here. They are logged and the
//! page renders with whatever was fetched before the failure; the home page
//! additionally falls back to [`static_home`].

use std::sync::Arc;

use quire_engine::{
  Category, Layout, Metadata, Page, RenderCtx, Shell, not_found_body, render_document, render_layout,
};
use tracing::{debug, warn};

use crate::HOME_SLUG;
use crate::config::SiteConfig;
use crate::draft::DraftContext;
use crate::errors::QuireError;
use crate::fallback::static_home;
use crate::meta::generate_meta;
use crate::source::{ContentSource, DocQuery, fetch_doc, fetch_docs};

pub const PAGES: &str = "pages";
pub const CATEGORIES: &str = "categories";

/// `None` and `""` both address the home page.
pub fn normalize_slug(slug: Option<&str>) -> &str {
  match slug.map(|s| s.trim_matches('/')) {
    Some(s) if !s.is_empty() => s,
    _ => HOME_SLUG,
  }
}

/// Outcome of the fetch step.
#[derive(Debug, Clone, Default)]
pub struct LoadedPage {
  pub page: Option<Page>,
  /// `None` when the category request never completed.
  pub categories: Option<Vec<Category>>,
  /// The page is the built-in home page.
  pub fallback: bool,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
  pub slug: String,
  pub layout: Layout,
  pub metadata: Metadata,
  /// Layout markup only.
  pub body: String,
  /// Complete HTML document.
  pub html: String,
  pub fallback: bool,
}

pub struct PageService {
  source: Arc<dyn ContentSource>,
  site: SiteConfig,
  ctx: RenderCtx,
  shell: Shell,
}

impl PageService {
  pub fn new(source: Arc<dyn ContentSource>, site: SiteConfig) -> Self {
    let ctx = RenderCtx::new(site.server_url.clone()).with_promotion(site.promotion.clone());
    let shell = Shell { lang: site.lang.clone(), stylesheets: site.stylesheets.clone() };
    Self { source, site, ctx, shell }
  }

  /// Page first, categories second. A page failure skips the category
  /// request; a category failure keeps the page.
  pub async fn load(&self, slug: &str, draft: &DraftContext) -> LoadedPage {
    let mut loaded = LoadedPage::default();
    if let Err(err) = self.fetch_into(&mut loaded, slug, draft).await {
      warn!(code = err.code(), error = %err.message(), slug, "content fetch failed, rendering with partial data");
    }
    if loaded.page.is_none() && slug == HOME_SLUG {
      debug!("no home page in the content API, using the built-in one");
      loaded.page = Some(static_home());
      loaded.fallback = true;
    }
    loaded
  }

  async fn fetch_into(
    &self,
    loaded: &mut LoadedPage,
    slug: &str,
    draft: &DraftContext,
  ) -> Result<(), QuireError> {
    let query = DocQuery::new(PAGES, slug).draft(draft.enabled, draft.token.as_deref());
    loaded.page = fetch_doc::<Page>(self.source.as_ref(), query).await?;
    loaded.categories = Some(fetch_docs::<Category>(self.source.as_ref(), CATEGORIES).await?);
    Ok(())
  }

  pub async fn render(
    &self,
    slug: Option<&str>,
    draft: &DraftContext,
  ) -> Result<RenderedPage, QuireError> {
    let slug = normalize_slug(slug);
    let loaded = self.load(slug, draft).await;
    let Some(page) = loaded.page else {
      return Err(QuireError::not_found(format!("no page with slug {slug:?}")));
    };
    let layout = if slug == HOME_SLUG { Layout::Home } else { Layout::Generic };
    let body = render_layout(layout, &page, loaded.categories.as_deref(), &self.ctx);
    let metadata = generate_meta(Some(&page), &self.site);
    let html = render_document(&self.shell, &metadata, &body);
    debug!(slug, ?layout, draft = draft.enabled, fallback = loaded.fallback, "page rendered");
    Ok(RenderedPage { slug: slug.to_string(), layout, metadata, body, html, fallback: loaded.fallback })
  }

  /// The 404 document.
  pub fn render_not_found(&self) -> String {
    let mut metadata = generate_meta(None, &self.site);
    metadata.title = format!("Page not found | {}", self.site.name);
    metadata.open_graph.title = metadata.title.clone();
    render_document(&self.shell, &metadata, &not_found_body())
  }

  /// Slugs of every published page, or nothing when the list is unavailable.
  pub async fn static_params(&self) -> Vec<String> {
    match fetch_docs::<Page>(self.source.as_ref(), PAGES).await {
      Ok(pages) => pages.into_iter().filter_map(|p| p.slug).filter(|s| !s.is_empty()).collect(),
      Err(err) => {
        warn!(code = err.code(), error = %err.message(), "page list unavailable, no static params");
        Vec::new()
      }
    }
  }

  /// Metadata for `slug`, fetched independently of [`render`](Self::render).
  pub async fn metadata(&self, slug: Option<&str>, draft: &DraftContext) -> Metadata {
    let slug = normalize_slug(slug);
    let query = DocQuery::new(PAGES, slug).draft(draft.enabled, draft.token.as_deref());
    let mut page = match fetch_doc::<Page>(self.source.as_ref(), query).await {
      Ok(page) => page,
      Err(err) => {
        warn!(code = err.code(), error = %err.message(), slug, "metadata fetch failed");
        None
      }
    };
    if page.is_none() && slug == HOME_SLUG {
      page = Some(static_home());
    }
    generate_meta(page.as_ref(), &self.site)
  }
}
