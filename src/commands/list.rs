//! List site content

use anyhow::Result;

use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str, category: Option<&str>) -> Result<()> {
    match content_type {
        "category" | "categories" => {
            let categories = blog.list_categories();
            println!("Categories ({}):", categories.len());
            for name in categories {
                let count = blog
                    .catalog()
                    .category(&name)
                    .map(|c| c.posts.len())
                    .unwrap_or_default();
                println!("  {} ({})", name, count);
            }
        }
        "post" | "posts" => {
            let index = blog.build_index(category);
            println!("Posts ({}):", index.len());
            for entry in index {
                let date = if entry.date.is_empty() {
                    "----------"
                } else {
                    entry.date.as_str()
                };
                println!(
                    "  {} - {} [{}/{}]",
                    date, entry.title, entry.category, entry.slug
                );
            }
        }
        "route" | "routes" => {
            for route in blog.list_route_params() {
                if category.map_or(true, |c| c == route.category) {
                    println!("/blogs/{}/{}", route.category, route.slug);
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: category, post, route",
                content_type
            );
        }
    }

    Ok(())
}

/// Print the sorted index as JSON
pub fn index_json(blog: &Blog, category: Option<&str>) -> Result<()> {
    let index = blog.build_index(category);
    println!("{}", serde_json::to_string_pretty(&index)?);
    Ok(())
}
