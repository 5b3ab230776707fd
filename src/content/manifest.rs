//! Category/post manifest
//!
//! The manifest is the source of truth for which slugs exist under which
//! category. It is loaded once and shared read-only afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::post::RouteParams;
use super::store::validate_segment;
use crate::error::{Error, Result};

/// One post listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostManifestEntry {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A category and its posts, in manifest order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    pub posts: Vec<PostManifestEntry>,
}

impl CategoryEntry {
    pub fn find(&self, slug: &str) -> Option<&PostManifestEntry> {
        self.posts.iter().find(|post| post.slug == slug)
    }
}

/// The validated, in-memory manifest
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: IndexMap<String, CategoryEntry>,
}

impl Catalog {
    /// Load a manifest file, choosing the decoder by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let catalog = match ext {
            "json" => Self::from_json_str(&content),
            "yml" | "yaml" => Self::from_yaml_str(&content),
            _ => Err(Error::Config(format!(
                "Unsupported manifest format: {:?}",
                path
            ))),
        }?;

        tracing::debug!(
            "Loaded manifest {:?}: {} categories, {} posts",
            path,
            catalog.categories.len(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let entries: Vec<CategoryEntry> = serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("Malformed manifest: {}", e)))?;
        Self::from_entries(entries)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let entries: Vec<CategoryEntry> = serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("Malformed manifest: {}", e)))?;
        Self::from_entries(entries)
    }

    /// Build a catalog from already-decoded entries
    ///
    /// Rejects duplicate categories, duplicate slugs within a category and
    /// names that could not be used as a single path segment.
    pub fn from_entries(entries: Vec<CategoryEntry>) -> Result<Self> {
        let mut categories = IndexMap::with_capacity(entries.len());

        for entry in entries {
            validate_segment(&entry.name).map_err(|_| {
                Error::Config(format!("Invalid category name: {:?}", entry.name))
            })?;

            let mut seen = HashSet::new();
            for post in &entry.posts {
                validate_segment(&post.slug).map_err(|_| {
                    Error::Config(format!(
                        "Invalid slug {:?} in category {:?}",
                        post.slug, entry.name
                    ))
                })?;
                if !seen.insert(post.slug.as_str()) {
                    return Err(Error::Config(format!(
                        "Duplicate slug {:?} in category {:?}",
                        post.slug, entry.name
                    )));
                }
                if slug::slugify(&post.slug) != post.slug {
                    tracing::warn!(
                        "Slug {:?} in category {:?} is not URL-canonical",
                        post.slug,
                        entry.name
                    );
                }
            }

            if categories.contains_key(&entry.name) {
                return Err(Error::Config(format!(
                    "Duplicate category {:?}",
                    entry.name
                )));
            }
            categories.insert(entry.name.clone(), entry);
        }

        Ok(Self { categories })
    }

    /// Categories in manifest order
    pub fn categories(&self) -> impl Iterator<Item = &CategoryEntry> {
        self.categories.values()
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    pub fn category(&self, name: &str) -> Option<&CategoryEntry> {
        self.categories.get(name)
    }

    pub fn find(&self, category: &str, slug: &str) -> Option<&PostManifestEntry> {
        self.category(category)?.find(slug)
    }

    /// Every (category, slug) pair, flattened in manifest order
    pub fn route_params(&self) -> Vec<RouteParams> {
        self.categories()
            .flat_map(|category| {
                category
                    .posts
                    .iter()
                    .map(move |post| RouteParams::new(&category.name, &post.slug))
            })
            .collect()
    }

    /// Total number of posts
    pub fn len(&self) -> usize {
        self.categories.values().map(|c| c.posts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
