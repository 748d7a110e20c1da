//! Path-to-slug normalization and existence checks.
//!
//! A slug is the extension-free, route-addressable identifier for a content
//! page. `index.md` and `README.md` both collapse to their parent path, and
//! the site root is the empty slug.

use std::path::PathBuf;

/// Markdown extensions recognized on content paths.
const MARKDOWN_EXTENSIONS: &[&str] = &[".md", ".markdown"];

/// Filenames that collapse to their parent directory's slug.
const INDEX_STEMS: &[&str] = &["index", "README"];

/// Convert a content-relative path into a normalized slug.
///
/// Strips the markdown extension, then collapses `index`/`README`
/// conventions: a bare `index.md` or `README.md` becomes the root slug
/// (empty string), and a trailing `/index` or `/README` segment is dropped.
///
/// Paths without a markdown extension are returned unchanged apart from the
/// index collapse, so callers can feed pre-stripped paths through safely.
#[must_use]
pub fn page_slug(path: &str) -> String {
    let mut rest = path.trim().trim_matches('/');
    for ext in MARKDOWN_EXTENSIONS {
        if let Some(stripped) = rest.strip_suffix(ext) {
            rest = stripped;
            break;
        }
    }

    for stem in INDEX_STEMS {
        if rest == *stem {
            return String::new();
        }
        if let Some(parent) = rest.strip_suffix(&format!("/{stem}")) {
            return parent.to_owned();
        }
    }

    rest.to_owned()
}

/// Resolves slugs against an optional content root.
///
/// The content root is passed explicitly rather than read from shared state
/// so the conversion logic stays pure. When the root is `None`, every slug
/// is presumed valid; this supports testing conversion rules without a
/// filesystem fixture.
#[derive(Debug, Clone, Default)]
pub struct SlugResolver {
    content_root: Option<PathBuf>,
}

impl SlugResolver {
    /// Create a resolver checking existence under `content_root`.
    #[must_use]
    pub fn new(content_root: Option<PathBuf>) -> Self {
        Self { content_root }
    }

    /// Normalize a content path and verify it has a backing file.
    ///
    /// Returns `None` when the slug fails the existence check, which callers
    /// treat as a prune signal.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<String> {
        let slug = page_slug(path);
        self.exists(&slug).then_some(slug)
    }

    /// Check whether a slug has a backing content file.
    ///
    /// A slug is backed by a direct markdown file (`<slug>.md` or
    /// `<slug>.markdown`) or by a directory containing an index file
    /// (`<slug>/index.md` or `<slug>/README.md`). The root slug checks for
    /// an index file directly under the content root.
    #[must_use]
    pub fn exists(&self, slug: &str) -> bool {
        let Some(root) = &self.content_root else {
            return true;
        };

        if slug.is_empty() {
            return root.join("index.md").is_file() || root.join("README.md").is_file();
        }

        for ext in MARKDOWN_EXTENSIONS {
            if root.join(format!("{slug}{ext}")).is_file() {
                return true;
            }
        }
        INDEX_STEMS
            .iter()
            .any(|stem| root.join(slug).join(format!("{stem}.md")).is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_slug_strips_extension() {
        assert_eq!(page_slug("user-guide/quickstart.md"), "user-guide/quickstart");
        assert_eq!(page_slug("notes.markdown"), "notes");
    }

    #[test]
    fn test_page_slug_bare_readme_is_root() {
        assert_eq!(page_slug("README.md"), "");
        assert_eq!(page_slug("index.md"), "");
    }

    #[test]
    fn test_page_slug_nested_readme_collapses_to_parent() {
        assert_eq!(page_slug("user-guide/README.md"), "user-guide");
        assert_eq!(page_slug("user-guide/concepts/index.md"), "user-guide/concepts");
    }

    #[test]
    fn test_page_slug_readme_as_directory_name_untouched() {
        // Only a trailing segment collapses.
        assert_eq!(page_slug("README/notes.md"), "README/notes");
    }

    #[test]
    fn test_page_slug_without_extension() {
        assert_eq!(page_slug("user-guide/quickstart"), "user-guide/quickstart");
        assert_eq!(page_slug("user-guide/index"), "user-guide");
    }

    #[test]
    fn test_resolver_without_root_accepts_everything() {
        let resolver = SlugResolver::new(None);
        assert!(resolver.exists("anything/at/all"));
        assert_eq!(
            resolver.resolve("anything/at/all.md"),
            Some("anything/at/all".to_owned())
        );
    }

    #[test]
    fn test_resolver_checks_direct_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.md"), "# Page").unwrap();

        let resolver = SlugResolver::new(Some(dir.path().to_path_buf()));
        assert!(resolver.exists("page"));
        assert!(!resolver.exists("missing"));
    }

    #[test]
    fn test_resolver_checks_directory_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("guide")).unwrap();
        std::fs::write(dir.path().join("guide/index.md"), "# Guide").unwrap();
        std::fs::create_dir(dir.path().join("legacy")).unwrap();
        std::fs::write(dir.path().join("legacy/README.md"), "# Legacy").unwrap();

        let resolver = SlugResolver::new(Some(dir.path().to_path_buf()));
        assert!(resolver.exists("guide"));
        assert!(resolver.exists("legacy"));
    }

    #[test]
    fn test_resolver_root_slug_requires_index() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SlugResolver::new(Some(dir.path().to_path_buf()));
        assert!(!resolver.exists(""));

        std::fs::write(dir.path().join("README.md"), "# Root").unwrap();
        assert!(resolver.exists(""));
    }

    #[test]
    fn test_resolve_prunes_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SlugResolver::new(Some(dir.path().to_path_buf()));
        assert_eq!(resolver.resolve("future/page.md"), None);
    }
}
