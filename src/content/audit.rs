//! Consistency check between the manifest and the content tree

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::manifest::Catalog;
use super::post::RouteParams;
use super::store::DocumentStore;

/// Result of comparing the manifest with the files on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Manifest entries without a Markdown file
    pub missing: Vec<RouteParams>,
    /// Markdown files (relative to the content root) no entry points at
    pub orphans: Vec<PathBuf>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.orphans.is_empty()
    }
}

/// Walk the content tree and report missing and unreferenced documents
pub fn audit(catalog: &Catalog, store: &DocumentStore, parallel: bool) -> AuditReport {
    let routes = catalog.route_params();

    let missing: Vec<RouteParams> = if parallel {
        routes
            .par_iter()
            .filter(|r| !store.exists(&r.category, &r.slug))
            .cloned()
            .collect()
    } else {
        routes
            .iter()
            .filter(|r| !store.exists(&r.category, &r.slug))
            .cloned()
            .collect()
    };

    let known: HashSet<PathBuf> = routes
        .iter()
        .map(|r| Path::new(&r.category).join(format!("{}.md", r.slug)))
        .collect();

    let mut orphans: Vec<PathBuf> = WalkDir::new(store.root())
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_markdown_file(e.path()))
        .filter_map(|e| {
            e.path()
                .strip_prefix(store.root())
                .ok()
                .map(Path::to_path_buf)
        })
        .filter(|rel| !known.contains(rel))
        .collect();
    orphans.sort();

    for route in &missing {
        tracing::warn!("Manifest entry {}/{} has no document", route.category, route.slug);
    }
    for orphan in &orphans {
        tracing::debug!("Document {:?} is not in the manifest", orphan);
    }

    AuditReport { missing, orphans }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}
