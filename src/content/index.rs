//! Index builder - sorted listing metadata and route enumeration

use rayon::prelude::*;

use super::frontmatter::FrontMatter;
use super::manifest::{Catalog, CategoryEntry, PostManifestEntry};
use super::post::{IndexEntry, RouteParams};
use super::store::DocumentStore;
use crate::error::Result;

/// Builds listings from the catalog plus each document's front matter
pub struct IndexBuilder<'a> {
    catalog: &'a Catalog,
    store: &'a DocumentStore,
    parallel: bool,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(catalog: &'a Catalog, store: &'a DocumentStore) -> Self {
        Self {
            catalog,
            store,
            parallel: true,
        }
    }

    /// Read headers on the rayon pool instead of the calling thread
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// All posts (or one category's posts), newest first
    ///
    /// Posts sharing a date keep manifest order. Documents that cannot be
    /// read are skipped and logged.
    pub fn build(&self, category: Option<&str>) -> Vec<IndexEntry> {
        let jobs: Vec<(&CategoryEntry, &PostManifestEntry)> = self
            .catalog
            .categories()
            .filter(|c| category.map_or(true, |name| c.name == name))
            .flat_map(|c| c.posts.iter().map(move |post| (c, post)))
            .collect();

        if let Some(name) = category {
            if self.catalog.category(name).is_none() {
                tracing::debug!("Index requested for unknown category {:?}", name);
            }
        }

        // Indexed collect keeps input order, so the stable sort below
        // sees manifest order either way
        let results: Vec<Result<IndexEntry>> = if self.parallel {
            jobs.par_iter()
                .map(|(c, post)| self.entry(c, post))
                .collect()
        } else {
            jobs.iter().map(|(c, post)| self.entry(c, post)).collect()
        };

        let mut entries: Vec<IndexEntry> = results
            .into_iter()
            .zip(&jobs)
            .filter_map(|(result, (c, post))| match result {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(
                        "Skipping {}/{} in index ({}): {}",
                        c.name,
                        post.slug,
                        e.category(),
                        e
                    );
                    None
                }
            })
            .collect();

        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Every (category, slug) pair to pre-render
    pub fn route_params(&self) -> Vec<RouteParams> {
        self.catalog.route_params()
    }

    fn entry(&self, category: &CategoryEntry, post: &PostManifestEntry) -> Result<IndexEntry> {
        let header = self.store.read_header(&category.name, &post.slug)?;
        let (fm, _) = FrontMatter::parse(&header);

        if fm.date.is_some() && fm.parse_date().is_none() {
            tracing::warn!(
                "Unrecognized date {:?} in {}/{}, sorting by raw text",
                fm.date.as_deref().unwrap_or_default(),
                category.name,
                post.slug
            );
        }

        let title = if post.title.is_empty() {
            fm.title.clone().unwrap_or_else(|| post.slug.clone())
        } else {
            post.title.clone()
        };
        let description = if post.description.is_empty() {
            fm.description.clone().unwrap_or_default()
        } else {
            post.description.clone()
        };

        Ok(IndexEntry {
            title,
            description,
            slug: post.slug.clone(),
            category: category.name.clone(),
            date: fm.sort_date(),
            authors: fm.authors,
        })
    }
}
