//! Content module - manifest, documents, front matter and resolution

mod audit;
mod frontmatter;
mod index;
mod manifest;
mod markdown;
mod meta;
mod post;
mod resolver;
mod store;

pub use audit::{audit, AuditReport};
pub use frontmatter::FrontMatter;
pub use index::IndexBuilder;
pub use manifest::{Catalog, CategoryEntry, PostManifestEntry};
pub use markdown::MarkdownRenderer;
pub use meta::{category_meta, page_meta};
pub use post::{IndexEntry, NavLink, PageMeta, PostRecord, RouteParams};
pub use resolver::PostResolver;
pub use store::{validate_segment, DocumentStore};
