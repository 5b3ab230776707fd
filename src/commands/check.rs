//! Check the manifest against the content tree

use anyhow::Result;

use crate::Blog;

/// Report missing and orphaned documents
///
/// Returns `false` when a manifest entry has no document.
pub fn run(blog: &Blog) -> Result<bool> {
    let report = blog.audit();

    if report.is_clean() {
        println!(
            "All {} manifest entries have documents, no orphans.",
            blog.catalog().len()
        );
        return Ok(true);
    }

    if !report.missing.is_empty() {
        println!("Missing documents ({}):", report.missing.len());
        for route in &report.missing {
            println!("  {}/{}.md", route.category, route.slug);
        }
    }
    if !report.orphans.is_empty() {
        println!("Not in manifest ({}):", report.orphans.len());
        for orphan in &report.orphans {
            println!("  {}", orphan.display());
        }
    }

    Ok(report.missing.is_empty())
}
