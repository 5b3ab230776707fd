//! hi-there: manifest-driven Markdown content pipeline
//!
//! A JSON/YAML manifest lists the posts of each category. Posts live at
//! `{content_dir}/{category}/{slug}.md` with a YAML front-matter header.
//! [`Blog`] joins the two and answers the read-only queries a page
//! generator needs: single posts, sorted listings, categories, routes and
//! page head metadata.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use content::{
    AuditReport, Catalog, DocumentStore, IndexBuilder, IndexEntry, MarkdownRenderer, PageMeta,
    PostRecord, PostResolver, RouteParams,
};

/// The content pipeline for one site
///
/// The catalog is loaded once and only read afterwards, so a `Blog` can be
/// shared across threads freely.
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    catalog: Catalog,
    store: DocumentStore,
    renderer: MarkdownRenderer,
}

impl Blog {
    /// Create a new instance from a site directory
    ///
    /// Reads `_config.yml` when present, then the manifest. A malformed
    /// manifest is fatal.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let catalog = Catalog::load(base_dir.join(&config.manifest))?;
        tracing::info!(
            "Loaded {} posts in {} categories",
            catalog.len(),
            catalog.categories().count()
        );

        Ok(Self::from_parts(config, base_dir, catalog))
    }

    /// Assemble a pipeline from an already-built catalog
    pub fn from_parts(config: config::SiteConfig, base_dir: PathBuf, catalog: Catalog) -> Self {
        let store = DocumentStore::new(base_dir.join(&config.content_dir));
        let renderer = MarkdownRenderer::with_options(&config.markdown);
        Self {
            config,
            base_dir,
            catalog,
            store,
            renderer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Content root
    pub fn content_dir(&self) -> &Path {
        self.store.root()
    }

    /// Resolve one post with rendered HTML and navigation links
    pub fn resolve_post(&self, category: &str, slug: &str) -> Result<PostRecord> {
        PostResolver::new(&self.catalog, &self.store, &self.renderer).resolve(category, slug)
    }

    /// Listing metadata, newest first, optionally for one category
    pub fn build_index(&self, category: Option<&str>) -> Vec<IndexEntry> {
        self.index_builder().build(category)
    }

    /// Category names in manifest order
    pub fn list_categories(&self) -> Vec<String> {
        self.catalog.category_names()
    }

    /// Every (category, slug) pair to pre-render
    pub fn list_route_params(&self) -> Vec<RouteParams> {
        self.index_builder().route_params()
    }

    /// Head metadata for a post page
    pub fn page_meta(&self, category: &str, slug: &str) -> PageMeta {
        content::page_meta(&self.catalog, &self.config, category, slug)
    }

    /// Head metadata for a category listing page
    pub fn category_meta(&self, category: &str) -> PageMeta {
        content::category_meta(&self.config, category)
    }

    /// Compare the manifest with the content tree
    pub fn audit(&self) -> AuditReport {
        content::audit(&self.catalog, &self.store, self.config.parallel)
    }

    fn index_builder(&self) -> IndexBuilder<'_> {
        IndexBuilder::new(&self.catalog, &self.store).parallel(self.config.parallel)
    }
}
