//! Print a resolved post or page metadata as JSON

use anyhow::{Context, Result};

use crate::Blog;

/// Resolve one post and print the record
pub fn run(blog: &Blog, category: &str, slug: &str) -> Result<()> {
    let post = blog
        .resolve_post(category, slug)
        .with_context(|| format!("Failed to resolve {}/{}", category, slug))?;

    for (label, link) in [("prev", &post.prev), ("next", &post.next)] {
        if let Some(link) = link.as_ref().filter(|l| !l.is_resolved()) {
            tracing::warn!("Unresolved {} link to {:?}", label, link.slug);
        }
    }

    println!("{}", serde_json::to_string_pretty(&post)?);
    Ok(())
}

/// Print head metadata for a post page, or a category page without a slug
pub fn meta(blog: &Blog, category: &str, slug: Option<&str>) -> Result<()> {
    let meta = match slug {
        Some(slug) => blog.page_meta(category, slug),
        None => blog.category_meta(category),
    };
    println!("{}", serde_json::to_string_pretty(&meta)?);
    Ok(())
}
