//! Snippet reference parsing.
//!
//! A reference is the quoted part of a transclusion directive: either a bare
//! path (`"shared/example.py"`) or a path with a named section
//! (`"shared/example.py:setup"`).

/// A parsed snippet reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetReference {
    /// Path to the source file, relative to the snippet base directory.
    pub path: String,
    /// Named section to extract; `None` transcludes the whole file.
    pub section: Option<String>,
}

impl SnippetReference {
    /// Parse a raw reference string.
    ///
    /// A colon separates the path from the section name only when it is not
    /// immediately preceded by a backslash; `\:` sequences in the path part
    /// are unescaped after splitting. An empty section name is treated as
    /// absent.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(at) = find_separator(raw) {
            let section = raw[at + 1..].trim();
            return Self {
                path: unescape(&raw[..at]),
                section: (!section.is_empty()).then(|| section.to_owned()),
            };
        }
        Self {
            path: unescape(raw),
            section: None,
        }
    }
}

/// Find the first colon not immediately preceded by a backslash.
fn find_separator(raw: &str) -> Option<usize> {
    let bytes = raw.as_bytes();
    bytes
        .iter()
        .enumerate()
        .find(|&(i, &b)| b == b':' && (i == 0 || bytes[i - 1] != b'\\'))
        .map(|(i, _)| i)
}

/// Replace escaped colons with literal ones.
fn unescape(path: &str) -> String {
    path.trim().replace("\\:", ":")
}
