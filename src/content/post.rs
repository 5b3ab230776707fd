//! Post records and their lightweight projections

use serde::{Deserialize, Serialize};

/// A resolved previous/next link
///
/// An unresolvable reference keeps its slug and carries an empty title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub slug: String,
}

impl NavLink {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
        }
    }

    /// A link whose target could not be looked up
    pub fn unresolved(slug: impl Into<String>) -> Self {
        Self::new(String::new(), slug)
    }

    pub fn is_resolved(&self) -> bool {
        !self.title.is_empty()
    }
}

/// A fully resolved, render-ready post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub category: String,
    pub slug: String,
    pub title: String,

    /// Publish date as written in front matter (lexically sortable)
    pub date: String,

    pub authors: Vec<String>,

    /// Rendered HTML body
    pub content_html: String,

    pub description: String,
    pub prev: Option<NavLink>,
    pub next: Option<NavLink>,
}

/// Listing metadata for one post, without the body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub category: String,
    pub date: String,
    pub authors: Vec<String>,
}

impl From<&PostRecord> for IndexEntry {
    fn from(post: &PostRecord) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
            slug: post.slug.clone(),
            category: post.category.clone(),
            date: post.date.clone(),
            authors: post.authors.clone(),
        }
    }
}

/// One (category, slug) pair to pre-render
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteParams {
    pub category: String,
    pub slug: String,
}

impl RouteParams {
    pub fn new(category: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            slug: slug.into(),
        }
    }
}

/// SEO metadata for a page head
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Comma-separated keyword list
    pub keywords: String,
}
