//! Page head metadata (title, description, keywords)

use super::manifest::Catalog;
use super::post::PageMeta;
use crate::config::SiteConfig;

/// Metadata for a post page; unknown posts get the site-wide defaults
pub fn page_meta(catalog: &Catalog, config: &SiteConfig, category: &str, slug: &str) -> PageMeta {
    match catalog.find(category, slug) {
        Some(entry) => PageMeta {
            title: entry.title.clone(),
            description: entry.description.clone(),
            keywords: entry.tags.join(","),
        },
        None => site_meta(config),
    }
}

/// Metadata for a category listing page
pub fn category_meta(config: &SiteConfig, category: &str) -> PageMeta {
    PageMeta {
        title: category.to_uppercase(),
        ..site_meta(config)
    }
}

fn site_meta(config: &SiteConfig) -> PageMeta {
    PageMeta {
        title: config.title.clone(),
        description: config.description.clone(),
        keywords: config.keywords.join(","),
    }
}
