//! Post resolver - joins the manifest, the document store and the renderer
//! into a render-ready [`PostRecord`]

use super::frontmatter::FrontMatter;
use super::manifest::Catalog;
use super::markdown::MarkdownRenderer;
use super::post::{NavLink, PostRecord};
use super::store::DocumentStore;
use crate::error::Result;

/// Resolves single posts against a shared catalog
pub struct PostResolver<'a> {
    catalog: &'a Catalog,
    store: &'a DocumentStore,
    renderer: &'a MarkdownRenderer,
}

impl<'a> PostResolver<'a> {
    pub fn new(
        catalog: &'a Catalog,
        store: &'a DocumentStore,
        renderer: &'a MarkdownRenderer,
    ) -> Self {
        Self {
            catalog,
            store,
            renderer,
        }
    }

    /// Resolve one post, including its previous/next links
    ///
    /// Only a missing (or unreachable) document fails the call. Navigation
    /// references that cannot be looked up degrade to a titleless link.
    pub fn resolve(&self, category: &str, slug: &str) -> Result<PostRecord> {
        let raw = self.store.read(category, slug)?;
        let (fm, body) = FrontMatter::parse(&raw);
        let content_html = self.renderer.render(body);

        let entry = self.catalog.find(category, slug);
        let title = fm
            .title
            .clone()
            .or_else(|| entry.map(|e| e.title.clone()))
            .unwrap_or_else(|| slug.to_string());
        let description = fm
            .description
            .clone()
            .or_else(|| entry.map(|e| e.description.clone()))
            .unwrap_or_default();

        let prev = fm.prev.as_deref().map(|s| self.nav_link(category, s));
        let next = fm.next.as_deref().map(|s| self.nav_link(category, s));

        Ok(PostRecord {
            category: category.to_string(),
            slug: slug.to_string(),
            title,
            date: fm.sort_date(),
            authors: fm.authors,
            content_html,
            description,
            prev,
            next,
        })
    }

    /// Best-effort link to another post in the same category
    fn nav_link(&self, category: &str, slug: &str) -> NavLink {
        match self.lookup_title(category, slug) {
            Some(title) => NavLink::new(title, slug),
            None => NavLink::unresolved(slug),
        }
    }

    fn lookup_title(&self, category: &str, slug: &str) -> Option<String> {
        let Some(entry) = self.catalog.find(category, slug) else {
            tracing::warn!("Navigation target {}/{} is not in the manifest", category, slug);
            return None;
        };

        let header = match self.store.read_header(category, slug) {
            Ok(header) => header,
            Err(e) => {
                tracing::warn!("Navigation target {}/{} unreadable: {}", category, slug, e);
                return None;
            }
        };

        if !entry.title.is_empty() {
            return Some(entry.title.clone());
        }
        FrontMatter::parse(&header).0.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"[
  { "name": "go", "posts": [
    { "slug": "intro", "title": "Intro to Go", "description": "Basics", "tags": ["go"] },
    { "slug": "concurrency", "title": "Concurrency in Go", "description": "Goroutines", "tags": [] },
    { "slug": "ghost", "title": "Ghost", "description": "", "tags": [] },
    { "slug": "untitled", "title": "", "description": "", "tags": [] }
  ] }
]"#;

    fn fixture() -> (TempDir, Catalog, DocumentStore) {
        let dir = TempDir::new().unwrap();
        let go = dir.path().join("go");
        fs::create_dir_all(&go).unwrap();
        fs::write(
            go.join("intro.md"),
            "---\ntitle: Intro\ndate: 2024-01-01\nauthors:\n  - hal\nnext: concurrency\nprev: nowhere\n---\n# Hello\n\n```go\nfmt.Println(1)\n```\n",
        )
        .unwrap();
        fs::write(
            go.join("concurrency.md"),
            "---\ndate: 2024-03-01\nprev: intro\nnext: ghost\n---\nChannels.\n",
        )
        .unwrap();
        fs::write(go.join("untitled.md"), "---\ntitle: From Header\nprev: untitled\n---\n").unwrap();

        let catalog = Catalog::from_json_str(MANIFEST).unwrap();
        let store = DocumentStore::new(dir.path());
        (dir, catalog, store)
    }

    #[test]
    fn test_resolve_post() {
        let (_dir, catalog, store) = fixture();
        let renderer = MarkdownRenderer::new();
        let resolver = PostResolver::new(&catalog, &store, &renderer);

        let post = resolver.resolve("go", "intro").unwrap();
        assert_eq!(post.category, "go");
        assert_eq!(post.slug, "intro");
        assert_eq!(post.title, "Intro");
        assert_eq!(post.date, "2024-01-01");
        assert_eq!(post.authors, vec!["hal"]);
        assert_eq!(post.description, "Basics");
        assert!(post.content_html.contains("<h1>Hello</h1>"));
        assert!(post.content_html.contains("class=\"language-go\""));
        assert_eq!(
            post.next,
            Some(NavLink::new("Concurrency in Go", "concurrency"))
        );
    }

    #[test]
    fn test_missing_prev_degrades() {
        let (_dir, catalog, store) = fixture();
        let renderer = MarkdownRenderer::new();
        let resolver = PostResolver::new(&catalog, &store, &renderer);

        let post = resolver.resolve("go", "intro").unwrap();
        let prev = post.prev.unwrap();
        assert_eq!(prev.slug, "nowhere");
        assert!(prev.title.is_empty());
    }

    #[test]
    fn test_manifest_entry_without_file_degrades() {
        let (_dir, catalog, store) = fixture();
        let renderer = MarkdownRenderer::new();
        let resolver = PostResolver::new(&catalog, &store, &renderer);

        let post = resolver.resolve("go", "concurrency").unwrap();
        assert_eq!(post.title, "Concurrency in Go");
        assert_eq!(post.prev, Some(NavLink::new("Intro to Go", "intro")));
        assert_eq!(post.next, Some(NavLink::unresolved("ghost")));
    }

    #[test]
    fn test_title_falls_back_to_header() {
        let (_dir, catalog, store) = fixture();
        let renderer = MarkdownRenderer::new();
        let resolver = PostResolver::new(&catalog, &store, &renderer);

        let post = resolver.resolve("go", "untitled").unwrap();
        assert_eq!(post.prev, Some(NavLink::new("From Header", "untitled")));
        assert!(post.content_html.is_empty());
        assert!(post.next.is_none());
    }

    #[test]
    fn test_resolve_missing_post() {
        let (_dir, catalog, store) = fixture();
        let renderer = MarkdownRenderer::new();
        let resolver = PostResolver::new(&catalog, &store, &renderer);

        match resolver.resolve("nonexistent-category", "nonexistent-slug") {
            Err(Error::PostNotFound { category, slug }) => {
                assert_eq!(category, "nonexistent-category");
                assert_eq!(slug, "nonexistent-slug");
            }
            other => panic!("expected PostNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let (_dir, catalog, store) = fixture();
        let renderer = MarkdownRenderer::new();
        let resolver = PostResolver::new(&catalog, &store, &renderer);

        let err = resolver.resolve("go", "../go/intro").unwrap_err();
        assert!(err.is_not_found());
    }
}
