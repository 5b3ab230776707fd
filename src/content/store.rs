//! Document store - reads Markdown sources from the content tree

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Component, Path, PathBuf};

use super::frontmatter::is_fence;
use crate::error::{Error, Result};

/// Check that a category or slug is usable as exactly one path segment
pub fn validate_segment(segment: &str) -> Result<()> {
    let invalid = || Error::InvalidPath {
        segment: segment.to_string(),
    };

    if segment.is_empty()
        || segment.contains("..")
        || segment.contains(['/', '\\', '\0'])
        || Path::new(segment).is_absolute()
    {
        return Err(invalid());
    }

    let mut components = Path::new(segment).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}

/// Reads `{root}/{category}/{slug}.md`
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Content root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build the on-disk path for a document, rejecting traversal
    pub fn path_for(&self, category: &str, slug: &str) -> Result<PathBuf> {
        validate_segment(category)?;
        validate_segment(slug)?;
        Ok(self.root.join(category).join(format!("{}.md", slug)))
    }

    pub fn exists(&self, category: &str, slug: &str) -> bool {
        self.path_for(category, slug)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    /// Read a whole document
    pub fn read(&self, category: &str, slug: &str) -> Result<String> {
        let path = self.path_for(category, slug)?;
        tracing::debug!("Reading document {:?}", path);
        fs::read_to_string(&path).map_err(|e| self.read_error(category, slug, path, e))
    }

    /// Read only the front-matter block of a document
    ///
    /// Stops at the closing fence, so listing pages never pay for the body.
    /// A document without a header yields its first line.
    pub fn read_header(&self, category: &str, slug: &str) -> Result<String> {
        let path = self.path_for(category, slug)?;
        tracing::debug!("Reading header of {:?}", path);

        let file =
            File::open(&path).map_err(|e| self.read_error(category, slug, path.clone(), e))?;
        let mut reader = BufReader::new(file);
        read_fenced_header(&mut reader).map_err(|e| self.read_error(category, slug, path, e))
    }

    fn read_error(&self, category: &str, slug: &str, path: PathBuf, err: io::Error) -> Error {
        if err.kind() == io::ErrorKind::NotFound {
            Error::PostNotFound {
                category: category.to_string(),
                slug: slug.to_string(),
            }
        } else {
            Error::io(path, err)
        }
    }
}

fn read_fenced_header<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut header = String::new();
    let mut line = String::new();

    // Skip blank lines before the opening fence
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(header);
        }
        if !line.trim().is_empty() {
            break;
        }
        header.push_str(&line);
    }

    header.push_str(&line);
    if !is_fence(&line) {
        return Ok(header);
    }

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        header.push_str(&line);
        if is_fence(&line) {
            break;
        }
    }

    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, DocumentStore) {
        let dir = TempDir::new().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let store = DocumentStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_validate_segment() {
        assert!(validate_segment("intro").is_ok());
        assert!(validate_segment("java-thread-pool").is_ok());
        assert!(validate_segment("v1.2").is_ok());

        for bad in ["", "..", ".", "../etc", "a/b", "a\\b", "/abs", "a..b", "nul\0"] {
            assert!(validate_segment(bad).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_read_document() {
        let (_dir, store) = store_with(&[("go/intro.md", "# Hi\n")]);
        assert_eq!(store.read("go", "intro").unwrap(), "# Hi\n");
        assert!(store.exists("go", "intro"));
        assert!(!store.exists("go", "missing"));
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let (_dir, store) = store_with(&[]);
        match store.read("go", "missing") {
            Err(Error::PostNotFound { category, slug }) => {
                assert_eq!(category, "go");
                assert_eq!(slug, "missing");
            }
            other => panic!("expected PostNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_rejects_traversal() {
        let (dir, store) = store_with(&[("secret.md", "top secret")]);
        let nested = DocumentStore::new(dir.path().join("posts"));
        assert!(matches!(
            nested.read("..", "secret"),
            Err(Error::InvalidPath { .. })
        ));
        assert!(matches!(
            store.read("go", "../../secret"),
            Err(Error::InvalidPath { .. })
        ));
        assert!(!store.exists("..", "secret"));
    }

    #[test]
    fn test_read_non_utf8_is_io_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("go")).unwrap();
        fs::write(dir.path().join("go/bad.md"), [0xffu8, 0xfe, 0x00]).unwrap();
        let store = DocumentStore::new(dir.path());
        assert!(matches!(store.read("go", "bad"), Err(Error::Io { .. })));
    }

    #[test]
    fn test_read_header_stops_at_fence() {
        let doc = "---\ntitle: Intro\ndate: 2024-01-01\n---\n# Body\n\nLots of text.\n";
        let (_dir, store) = store_with(&[("go/intro.md", doc)]);
        let header = store.read_header("go", "intro").unwrap();
        assert_eq!(header, "---\ntitle: Intro\ndate: 2024-01-01\n---\n");
    }

    #[test]
    fn test_read_header_indented_fence() {
        let doc = "  ---\ntitle: A\ndate: 2024-05-01\n---\nBody\n";
        let (_dir, store) = store_with(&[("go/a.md", doc)]);
        let header = store.read_header("go", "a").unwrap();
        assert_eq!(header, "  ---\ntitle: A\ndate: 2024-05-01\n---\n");
    }

    #[test]
    fn test_read_header_without_front_matter() {
        let (_dir, store) = store_with(&[("go/plain.md", "\n# Title\n\nBody\n")]);
        let header = store.read_header("go", "plain").unwrap();
        assert_eq!(header, "\n# Title\n");
    }

    #[test]
    fn test_read_header_missing() {
        let (_dir, store) = store_with(&[]);
        assert!(store.read_header("go", "nope").unwrap_err().is_not_found());
    }
}
