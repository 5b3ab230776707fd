//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,

    // Content
    /// Root of the content tree, relative to the base directory
    pub content_dir: String,
    /// Category/post manifest, relative to the base directory
    pub manifest: String,

    // Build
    /// Fan index and audit reads out over a thread pool
    pub parallel: bool,
    #[serde(default)]
    pub markdown: MarkdownConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Hi There".to_string(),
            description: "A blog post about common topic in web development".to_string(),
            keywords: Vec::new(),

            content_dir: "posts".to_string(),
            manifest: "posts/config.json".to_string(),

            parallel: true,
            markdown: MarkdownConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }
}

/// Markdown rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub gfm: bool,
    pub footnotes: bool,
    /// Language class for fenced code blocks without a usable tag
    pub default_language: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            footnotes: true,
            default_language: "plaintext".to_string(),
        }
    }
}
